/// Data structures for Dictionary Tabs
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use url::Url;

/// A browser tab as reported by the tab-listing capability.
///
/// Only `url` and `title` are interpreted; everything else the browser
/// attaches (id, pinned, index, ...) is carried through untouched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TabRecord {
    pub url: String,
    #[serde(default)]
    pub title: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TabRecord {
    pub fn new(url: &str, title: &str) -> TabRecord {
        TabRecord {
            url: url.to_string(),
            title: title.to_string(),
            extra: Map::new(),
        }
    }
}

/// A tab record augmented with the extracted search term. Never mutated
/// after creation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClassifiedTab {
    pub url: String,
    pub title: String,
    #[serde(rename = "searchTerm")]
    pub search_term: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ClassifiedTab {
    pub fn new(tab: TabRecord, search_term: Option<String>) -> ClassifiedTab {
        ClassifiedTab {
            url: tab.url,
            title: tab.title,
            search_term,
            extra: tab.extra,
        }
    }

    /// Hostname for display, or "-" when the URL does not parse
    pub fn hostname(&self) -> String {
        Url::parse(&self.url)
            .ok()
            .and_then(|u| u.host_str().map(str::to_string))
            .unwrap_or_else(|| "-".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_tab_record_passthrough_fields() {
        let json = r#"{"url": "https://dictionary.com/browse/cat", "title": "cat", "id": 7, "pinned": false}"#;
        let tab: TabRecord = serde_json::from_str(json).unwrap();

        assert_eq!(tab.url, "https://dictionary.com/browse/cat");
        assert_eq!(tab.extra.get("id"), Some(&json!(7)));
        assert_eq!(tab.extra.get("pinned"), Some(&json!(false)));
    }

    #[test]
    fn test_classified_tab_keeps_passthrough_fields() {
        let mut tab = TabRecord::new("https://dictionary.com/browse/cat", "cat");
        tab.extra.insert("id".to_string(), json!(7));

        let classified = ClassifiedTab::new(tab, Some("cat".to_string()));
        let value = serde_json::to_value(&classified).unwrap();

        assert_eq!(value["id"], json!(7));
        assert_eq!(value["searchTerm"], json!("cat"));
    }

    #[test]
    fn test_null_term_serializes_as_null() {
        let tab = TabRecord::new("https://www.thesaurus.com/", "Thesaurus");
        let classified = ClassifiedTab::new(tab, None);

        let value = serde_json::to_value(&classified).unwrap();
        assert!(value["searchTerm"].is_null());
    }

    #[test]
    fn test_hostname() {
        let tab = ClassifiedTab::new(
            TabRecord::new("https://www.merriam-webster.com/dictionary/cat", "cat"),
            Some("cat".to_string()),
        );
        assert_eq!(tab.hostname(), "www.merriam-webster.com");
    }

    #[test]
    fn test_hostname_of_malformed_url() {
        let tab = ClassifiedTab::new(TabRecord::new("dictionary.com/browse/cat", ""), None);
        assert_eq!(tab.hostname(), "-");
    }
}
