//! The status registry: canonical reason phrases for HTTP status codes.
//!
//! The table covers the standard 1xx–5xx codes plus the WebDAV and extension
//! codes callers rely on. It is built once on first use and never written
//! again, so lookups are safe from any thread without locking.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Reason phrase returned for any code missing from the table.
pub const UNKNOWN_REASON: &str = "Unknown";

const TABLE: &[(u16, &str)] = &[
    (100, "Continue"),
    (101, "Switching Protocols"),
    (102, "Processing"),
    (200, "OK"),
    (201, "Created"),
    (202, "Accepted"),
    (203, "Non-Authoritative Information"),
    (204, "No Content"),
    (205, "Reset Content"),
    (206, "Partial Content"),
    (207, "Multi-Status"),
    (300, "Multiple Choices"),
    (301, "Moved Permanently"),
    (302, "Moved Temporarily"),
    (303, "See Other"),
    (304, "Not Modified"),
    (305, "Use Proxy"),
    (307, "Temporary Redirect"),
    (400, "Bad Request"),
    (401, "Unauthorized"),
    (402, "Payment Required"),
    (403, "Forbidden"),
    (404, "Not Found"),
    (405, "Method Not Allowed"),
    (406, "Not Acceptable"),
    (407, "Proxy Authentication Required"),
    (408, "Request Time-out"),
    (409, "Conflict"),
    (410, "Gone"),
    (411, "Length Required"),
    (412, "Precondition Failed"),
    (413, "Request Entity Too Large"),
    (414, "Request-URI Too Large"),
    (415, "Unsupported Media Type"),
    (416, "Requested Range Not Satisfiable"),
    (417, "Expectation Failed"),
    (418, "I'm a teapot"),
    (422, "Unprocessable Entity"),
    (423, "Locked"),
    (424, "Failed Dependency"),
    (425, "Unordered Collection"),
    (426, "Upgrade Required"),
    (428, "Precondition Required"),
    (429, "Too Many Requests"),
    (431, "Request Header Fields Too Large"),
    (451, "Unavailable For Legal Reasons"),
    (500, "Internal Server Error"),
    (501, "Not Implemented"),
    (502, "Bad Gateway"),
    (503, "Service Unavailable"),
    (504, "Gateway Time-out"),
    (505, "HTTP Version Not Supported"),
    (506, "Variant Also Negotiates"),
    (507, "Insufficient Storage"),
    (509, "Bandwidth Limit Exceeded"),
    (510, "Not Extended"),
    (511, "Network Authentication Required"),
];

static REGISTRY: LazyLock<HashMap<u16, &'static str>> =
    LazyLock::new(|| TABLE.iter().copied().collect());

/// Return the canonical reason phrase for `code`, or [`UNKNOWN_REASON`] if
/// the code is not in the table.
///
/// ```
/// assert_eq!(boom::reason_phrase(404), "Not Found");
/// assert_eq!(boom::reason_phrase(999), "Unknown");
/// ```
pub fn reason_phrase(code: u16) -> &'static str {
    REGISTRY.get(&code).copied().unwrap_or(UNKNOWN_REASON)
}

/// Whether `code` has an entry in the table.
pub fn is_known(code: u16) -> bool {
    REGISTRY.contains_key(&code)
}

/// Every registered code with its phrase, in ascending code order.
pub fn codes() -> impl Iterator<Item = (u16, &'static str)> {
    TABLE.iter().copied()
}
