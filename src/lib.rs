/// Dictionary Tabs - browser extension that collects dictionary lookups
/// from open tabs. Built with Rust + WASM + Yew

mod bridge;
mod classify;
mod export;
mod messaging;
mod rules;
mod tab_data;
pub mod ui;

use wasm_bindgen::prelude::*;

// Set up panic hook for better error messages in the browser console
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
}

// Re-export term extraction for JavaScript access, using the built-in rules
#[wasm_bindgen]
pub fn extract_search_term(url: &str) -> Option<String> {
    let rules = rules::RuleSet::fallback();
    rules
        .match_url(url)
        .and_then(|rule| classify::extract_search_term(url, rule))
}

// Start the Yew app for the popup
#[wasm_bindgen]
pub fn start_popup() {
    yew::Renderer::<ui::popup::App>::new().render();
}
