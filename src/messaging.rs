/// Request/response messages exchanged with the privileged extension context.
///
/// The page context cannot call the tab-listing API itself; requests cross
/// the boundary tagged by `type`, and the matching response comes back with
/// a `_RESPONSE` suffix carrying either the payload or an error string.
/// Exchanges are one-shot with no timeout: a collaborator that never answers
/// leaves the caller waiting (known limitation).
use serde::{Deserialize, Serialize};

use crate::rules::{Rule, RuleSet};
use crate::tab_data::TabRecord;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Request {
    #[serde(rename = "GET_TABS")]
    GetTabs,
    #[serde(rename = "GET_RULES")]
    GetRules,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum Response {
    #[serde(rename = "GET_TABS_RESPONSE")]
    Tabs(TabsPayload),
    #[serde(rename = "GET_RULES_RESPONSE")]
    Rules(RulesPayload),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TabsPayload {
    pub success: bool,
    #[serde(default)]
    pub tabs: Vec<TabRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RulesPayload {
    pub success: bool,
    #[serde(default)]
    pub rules: Vec<Rule>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(
        rename = "fallbackRules",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub fallback_rules: Option<Vec<Rule>>,
}

impl TabsPayload {
    pub fn into_result(self) -> Result<Vec<TabRecord>, String> {
        if self.success {
            Ok(self.tabs)
        } else {
            Err(self
                .error
                .unwrap_or_else(|| "tab listing failed".to_string()))
        }
    }
}

impl RulesPayload {
    /// Turn a rules response into a usable rule set, no matter what came
    /// over the wire. Failures are logged and degrade to the fallback rules
    /// the collaborator supplied, then to the built-in set.
    pub fn into_rule_set(self) -> RuleSet {
        if self.success {
            match RuleSet::from_rules(&self.rules) {
                Ok(rules) => return rules,
                Err(e) => log::warn!("rejected rule configuration: {}", e),
            }
        } else if let Some(error) = &self.error {
            log::warn!("rule configuration unavailable: {}", error);
        }

        if let Some(fallback) = &self.fallback_rules {
            if let Ok(rules) = RuleSet::from_rules(fallback) {
                return rules;
            }
        }

        RuleSet::fallback()
    }
}
