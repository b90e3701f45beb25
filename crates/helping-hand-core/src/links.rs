//! Link helpers used while preparing template data

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters left as-is in a query value: unreserved marks plus `/`
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b'/');

/// Same as [`QUERY_VALUE`] but `/` is encoded too
const PATH_SEGMENT: &AsciiSet = &QUERY_VALUE.add(b'/');

/// Percent-encode a value for use inside a URL; `None` encodes as empty
pub fn url_encode(value: Option<&str>) -> String {
    utf8_percent_encode(value.unwrap_or_default(), QUERY_VALUE).to_string()
}

/// Percent-encode a single path segment
pub fn path_segment(value: &str) -> String {
    utf8_percent_encode(value, PATH_SEGMENT).to_string()
}

/// Link to a story page
pub fn story_href(id: &str) -> String {
    format!("/stories/{}", path_segment(id))
}

/// Link to the donate page with a prefilled payment purpose
pub fn donate_href(purpose: &str) -> String {
    if purpose.is_empty() {
        return "/donate".to_string();
    }
    format!("/donate?purpose={}", url_encode(Some(purpose)))
}
