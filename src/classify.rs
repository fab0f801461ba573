/// Tab classification: dictionary-site filtering and search-term extraction
use percent_encoding::percent_decode_str;
use url::Url;

use crate::rules::{CompiledRule, RuleSet};
use crate::tab_data::{ClassifiedTab, TabRecord};

/// Query parameters checked, in order, when the path pattern does not match
const TERM_QUERY_PARAMS: [&str; 5] = ["q", "query", "word", "term", "search"];

/// Filter tabs down to dictionary sites and annotate each with its search
/// term.
///
/// A tab is retained when some rule's domain is a substring of its URL; the
/// first such rule (list order) is used for extraction. Input order is
/// preserved, and a retained tab is never dropped — extraction failures
/// degrade to a `None` term.
pub fn classify(tabs: &[TabRecord], rules: &RuleSet) -> Vec<ClassifiedTab> {
    tabs.iter()
        .filter_map(|tab| {
            let rule = rules.match_url(&tab.url)?;
            let term = extract_search_term(&tab.url, rule);
            Some(ClassifiedTab::new(tab.clone(), term))
        })
        .collect()
}

/// Extract the looked-up term from a dictionary-site URL.
///
/// The rule's pattern is applied to the URL path; a captured segment is
/// plus-unescaped and percent-decoded. When the pattern does not match, a
/// fixed list of common query parameters is tried instead. Unparseable URLs
/// yield `None`.
pub fn extract_search_term(url: &str, rule: &CompiledRule) -> Option<String> {
    let parsed = Url::parse(url).ok()?;

    if let Some(captures) = rule.pattern.captures(parsed.path()) {
        if let Some(term) = captures.get(1) {
            return decode_term(term.as_str());
        }
    }

    for name in TERM_QUERY_PARAMS {
        if let Some((_, value)) = parsed.query_pairs().find(|(key, _)| key == name) {
            return Some(value.into_owned());
        }
    }

    None
}

/// Percent-decode a path segment, treating literal '+' as a space
fn decode_term(raw: &str) -> Option<String> {
    let spaced = raw.replace('+', " ");
    percent_decode_str(&spaced)
        .decode_utf8()
        .ok()
        .map(|term| term.into_owned())
}
