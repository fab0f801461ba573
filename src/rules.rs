/// Dictionary-site rules: configuration parsing, validation, built-in fallback
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Built-in rule table, used whenever the shipped configuration cannot be loaded.
/// Each pattern is applied to the URL path and captures the looked-up term.
const FALLBACK_RULES: &[(&str, &str)] = &[
    ("dictionary.com", r"/browse/([^/?#]+)"),
    ("merriam-webster.com", r"/dictionary/([^/?#]+)"),
    ("vocabulary.com", r"/dictionary/([^/?#]+)"),
    ("thefreedictionary.com", r"/([^/?#]+)$"),
    ("dictionary.cambridge.org", r"/dictionary/[^/]+/([^/?#]+)"),
    ("oxforddictionaries.com", r"/definition/([^/?#]+)"),
    ("collinsdictionary.com", r"/dictionary/[^/]+/([^/?#]+)"),
    ("macmillandictionary.com", r"/dictionary/[^/]+/([^/?#]+)"),
    ("ldoceonline.com", r"/dictionary/[^/]+/([^/?#]+)"),
    ("lexico.com", r"/definition/([^/?#]+)"),
    ("etymonline.com", r"/word/([^/?#]+)"),
    ("wordreference.com", r"/([^/?#]+)$"),
    ("urbandictionary.com", r"/define\.php\?term=([^&]+)"),
    ("wiktionary.org", r"/wiki/([^:]+)$"),
    ("thesaurus.com", r"/browse/([^/?#]+)"),
];

/// A single dictionary-site rule as it appears in the configuration document
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Rule {
    /// Substring matched against the full URL
    pub domain: String,
    /// Regex applied to the URL path; must capture the term in group 1
    pub pattern: String,
}

impl Rule {
    pub fn new(domain: &str, pattern: &str) -> Rule {
        Rule {
            domain: domain.to_string(),
            pattern: pattern.to_string(),
        }
    }
}

/// A rule with its path pattern compiled
#[derive(Debug, Clone)]
pub struct CompiledRule {
    pub domain: String,
    pub pattern: Regex,
}

#[derive(Debug, Error)]
pub enum RuleError {
    #[error("invalid rule configuration: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("rule #{index} has an empty domain")]
    EmptyDomain { index: usize },

    #[error("invalid pattern for {domain}: {source}")]
    BadPattern {
        domain: String,
        source: regex::Error,
    },

    #[error("pattern for {domain} must have exactly one capturing group, found {found}")]
    CaptureGroups { domain: String, found: usize },
}

/// Ordered set of compiled dictionary-site rules. First matching rule wins;
/// the set is replaced wholesale on reload, never merged.
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<CompiledRule>,
}

impl RuleSet {
    /// Compile an ordered list of rules, rejecting the whole list on the
    /// first invalid entry.
    pub fn from_rules(rules: &[Rule]) -> Result<RuleSet, RuleError> {
        let mut compiled = Vec::with_capacity(rules.len());

        for (index, rule) in rules.iter().enumerate() {
            if rule.domain.is_empty() {
                return Err(RuleError::EmptyDomain { index });
            }

            let pattern = Regex::new(&rule.pattern).map_err(|source| RuleError::BadPattern {
                domain: rule.domain.clone(),
                source,
            })?;

            // captures_len() counts the implicit whole-match group
            let capture_groups = pattern.captures_len() - 1;
            if capture_groups != 1 {
                return Err(RuleError::CaptureGroups {
                    domain: rule.domain.clone(),
                    found: capture_groups,
                });
            }

            compiled.push(CompiledRule {
                domain: rule.domain.clone(),
                pattern,
            });
        }

        Ok(RuleSet { rules: compiled })
    }

    /// Parse and compile a JSON configuration document (an ordered array of
    /// `{domain, pattern}` objects).
    pub fn from_json(json: &str) -> Result<RuleSet, RuleError> {
        let rules: Vec<Rule> = serde_json::from_str(json)?;
        RuleSet::from_rules(&rules)
    }

    /// The built-in rule set. Always available.
    pub fn fallback() -> RuleSet {
        let rules: Vec<Rule> = FALLBACK_RULES
            .iter()
            .map(|(domain, pattern)| Rule::new(domain, pattern))
            .collect();

        RuleSet::from_rules(&rules).expect("built-in rule table is valid")
    }

    /// First rule (by list order) whose domain is a substring of the URL
    pub fn match_url(&self, url: &str) -> Option<&CompiledRule> {
        self.rules.iter().find(|rule| url.contains(&rule.domain))
    }

    pub fn iter(&self) -> impl Iterator<Item = &CompiledRule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_compiles_and_is_non_empty() {
        let rules = RuleSet::fallback();
        assert!(!rules.is_empty());
        assert_eq!(rules.len(), FALLBACK_RULES.len());
    }

    #[test]
    fn test_fallback_contains_documented_rules() {
        let rules = RuleSet::fallback();
        let domains: Vec<&str> = rules.iter().map(|r| r.domain.as_str()).collect();

        assert!(domains.contains(&"dictionary.com"));
        assert!(domains.contains(&"merriam-webster.com"));
    }

    #[test]
    fn test_fallback_patterns_have_one_capture_group() {
        for rule in RuleSet::fallback().iter() {
            assert_eq!(rule.pattern.captures_len() - 1, 1, "{}", rule.domain);
        }
    }

    #[test]
    fn test_from_json_valid() {
        let json = r#"[
            {"domain": "dictionary.com", "pattern": "/browse/([^/?#]+)"},
            {"domain": "merriam-webster.com", "pattern": "/dictionary/([^/?#]+)"}
        ]"#;

        let rules = RuleSet::from_json(json).unwrap();

        assert_eq!(rules.len(), 2);
        assert_eq!(rules.iter().next().unwrap().domain, "dictionary.com");
    }

    #[test]
    fn test_from_json_invalid_document() {
        assert!(RuleSet::from_json("not json").is_err());
        assert!(RuleSet::from_json(r#"{"domain": "a"}"#).is_err());
    }

    #[test]
    fn test_empty_domain_rejected() {
        let rules = vec![Rule::new("", "/browse/([^/?#]+)")];
        assert!(matches!(
            RuleSet::from_rules(&rules),
            Err(RuleError::EmptyDomain { index: 0 })
        ));
    }

    #[test]
    fn test_bad_regex_rejected() {
        let rules = vec![Rule::new("dictionary.com", "/browse/([")];
        assert!(matches!(
            RuleSet::from_rules(&rules),
            Err(RuleError::BadPattern { .. })
        ));
    }

    #[test]
    fn test_capture_group_count_enforced() {
        let none = vec![Rule::new("dictionary.com", "/browse/[^/?#]+")];
        assert!(matches!(
            RuleSet::from_rules(&none),
            Err(RuleError::CaptureGroups { found: 0, .. })
        ));

        let two = vec![Rule::new("dictionary.com", "/(browse)/([^/?#]+)")];
        assert!(matches!(
            RuleSet::from_rules(&two),
            Err(RuleError::CaptureGroups { found: 2, .. })
        ));
    }

    #[test]
    fn test_non_capturing_groups_allowed() {
        let rules = vec![Rule::new(
            "dictionary.cambridge.org",
            "/dictionary/[^/]+/([^/?#]+)",
        )];
        assert!(RuleSet::from_rules(&rules).is_ok());
    }

    #[test]
    fn test_match_url_first_in_list_wins() {
        let rules = RuleSet::from_rules(&[
            Rule::new("cambridge.org", "/definition/([^/?#]+)"),
            Rule::new("dictionary.cambridge.org", "/dictionary/[^/]+/([^/?#]+)"),
        ])
        .unwrap();

        let matched = rules
            .match_url("https://dictionary.cambridge.org/dictionary/english/serendipity")
            .unwrap();

        // Both domains are substrings of the URL; list order decides
        assert_eq!(matched.domain, "cambridge.org");
    }

    #[test]
    fn test_match_url_no_match() {
        let rules = RuleSet::fallback();
        assert!(rules.match_url("https://example.org/").is_none());
    }
}
