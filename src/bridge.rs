/// JS bridge to the extension context
use wasm_bindgen::prelude::*;

use crate::messaging::{Request, Response};
use crate::rules::RuleSet;
use crate::tab_data::TabRecord;

// Import JS bridge functions
#[wasm_bindgen(module = "/bridge.js")]
extern "C" {
    #[wasm_bindgen(catch)]
    async fn sendRequest(request: JsValue) -> Result<JsValue, JsValue>;

    fn exportToFile(data: &str, filename: &str);

    #[wasm_bindgen(catch)]
    async fn copyToClipboard(text: &str) -> Result<(), JsValue>;
}

async fn round_trip(request: Request) -> Result<Response, String> {
    let request_js = serde_wasm_bindgen::to_value(&request)
        .map_err(|e| format!("Failed to serialize request: {:?}", e))?;

    let response_js = sendRequest(request_js)
        .await
        .map_err(|e| format!("Request failed: {:?}", e))?;

    serde_wasm_bindgen::from_value(response_js)
        .map_err(|e| format!("Failed to parse response: {:?}", e))
}

/// Ask the privileged context for every open tab
pub async fn request_tabs() -> Result<Vec<TabRecord>, String> {
    match round_trip(Request::GetTabs).await? {
        Response::Tabs(payload) => payload.into_result(),
        Response::Rules(_) => Err("Unexpected response to GET_TABS".to_string()),
    }
}

/// Load the rule configuration. Never fails: any transport or parse problem
/// degrades to the built-in rule set.
pub async fn load_rules() -> RuleSet {
    match round_trip(Request::GetRules).await {
        Ok(Response::Rules(payload)) => payload.into_rule_set(),
        Ok(Response::Tabs(_)) => {
            log::warn!("unexpected response to GET_RULES, using built-in rules");
            RuleSet::fallback()
        }
        Err(e) => {
            log::warn!("rule configuration request failed ({}), using built-in rules", e);
            RuleSet::fallback()
        }
    }
}

/// Trigger a file download of `data` under `filename`
pub fn save_file(data: &str, filename: &str) {
    exportToFile(data, filename);
}

/// Put `text` on the system clipboard
pub async fn clipboard_write(text: &str) -> Result<(), String> {
    copyToClipboard(text)
        .await
        .map_err(|e| format!("Failed to copy: {:?}", e))
}
