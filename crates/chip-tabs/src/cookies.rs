//! Cookie persistence for the tab strip.
//!
//! Two independent entries: the tab list as a percent-encoded JSON array and
//! the selected key as a bare string. Loading happens once at mount; saving
//! happens on every committed change. Malformed stored data is logged and
//! treated as absent; everything is a no-op outside a browser.

use wasm_bindgen::JsCast;
use web_sys::HtmlDocument;

use crate::types::Tab;

/// Retention window for both cookies: one year.
const COOKIE_MAX_AGE_SECS: u64 = 365 * 24 * 60 * 60;

fn html_document() -> Option<HtmlDocument> {
    web_sys::window()?
        .document()?
        .dyn_into::<HtmlDocument>()
        .ok()
}

/// Extracts a named value from a raw `document.cookie` string.
pub fn cookie_value(cookies: &str, name: &str) -> Option<String> {
    cookies.split(';').find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        (key.trim() == name).then(|| value.trim().to_string())
    })
}

pub fn get_cookie(name: &str) -> Option<String> {
    let document = html_document()?;
    let cookies = document.cookie().ok()?;
    cookie_value(&cookies, name)
}

/// Writes a cookie scoped to the root path with the default retention window.
pub fn set_cookie(name: &str, value: &str) {
    if let Some(document) = html_document() {
        let cookie = format!("{name}={value}; path=/; max-age={COOKIE_MAX_AGE_SECS}");
        let _ = document.set_cookie(&cookie);
    }
}

/// Loads the persisted tab list. Undecodable or unparsable data falls back
/// to `None` (the component then uses its props) with a warning.
pub fn load_tabs(name: &str) -> Option<Vec<Tab>> {
    let raw = get_cookie(name)?;
    let decoded = match urlencoding::decode(&raw) {
        Ok(decoded) => decoded,
        Err(err) => {
            log::warn!("Failed to decode tabs cookie '{name}': {err}");
            return None;
        }
    };
    match serde_json::from_str(&decoded) {
        Ok(tabs) => Some(tabs),
        Err(err) => {
            log::warn!("Failed to parse tabs cookie '{name}': {err}");
            None
        }
    }
}

pub fn save_tabs(name: &str, tabs: &[Tab]) {
    match serde_json::to_string(tabs) {
        Ok(json) => set_cookie(name, &urlencoding::encode(&json)),
        Err(err) => log::warn!("Failed to serialize tabs for cookie '{name}': {err}"),
    }
}

pub fn load_selected(name: &str) -> Option<String> {
    get_cookie(name)
}

pub fn save_selected(name: &str, key: &str) {
    set_cookie(name, key);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cookie_value_finds_the_named_entry() {
        let cookies = "session=abc123; my-tabs=%5B%5D; selected=hot";
        assert_eq!(cookie_value(cookies, "my-tabs"), Some("%5B%5D".to_string()));
        assert_eq!(cookie_value(cookies, "selected"), Some("hot".to_string()));
        assert_eq!(cookie_value(cookies, "missing"), None);
    }

    #[test]
    fn cookie_value_tolerates_whitespace_and_empty_strings() {
        assert_eq!(cookie_value("  a = 1 ;b=2", "a"), Some("1".to_string()));
        assert_eq!(cookie_value("", "a"), None);
    }

    #[test]
    fn tab_list_round_trips_through_the_cookie_encoding() {
        let tabs = vec![
            Tab::new("hot", "Hot").with_icon("flame"),
            Tab::new("pinned", "Pinned").without_close_button(),
        ];
        let encoded = urlencoding::encode(&serde_json::to_string(&tabs).unwrap()).into_owned();
        let decoded = urlencoding::decode(&encoded).unwrap();
        let restored: Vec<Tab> = serde_json::from_str(&decoded).unwrap();
        assert_eq!(restored, tabs);
    }

    #[test]
    fn malformed_tab_json_fails_to_parse() {
        // load_tabs treats this as absent; here we pin the parse failure the
        // fallback hinges on.
        assert!(serde_json::from_str::<Vec<Tab>>("[{\"key\":").is_err());
        assert!(serde_json::from_str::<Vec<Tab>>("{\"not\":\"a list\"}").is_err());
    }
}
