/// Export of classified tabs as JSON
use crate::bridge;
use crate::tab_data::ClassifiedTab;

pub const EXPORT_FILENAME: &str = "dictionary_tabs.json";

pub fn to_json(tabs: &[ClassifiedTab]) -> Result<String, String> {
    serde_json::to_string_pretty(tabs).map_err(|e| format!("Failed to serialize tabs: {}", e))
}

/// Write the results to a downloadable file named `dictionary_tabs.json`
pub fn save_as_file(tabs: &[ClassifiedTab]) -> Result<(), String> {
    let json = to_json(tabs)?;
    bridge::save_file(&json, EXPORT_FILENAME);
    Ok(())
}

/// Place the results on the system clipboard
pub async fn copy_to_clipboard(tabs: &[ClassifiedTab]) -> Result<(), String> {
    let json = to_json(tabs)?;
    bridge::clipboard_write(&json).await
}
