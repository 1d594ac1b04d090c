pub mod jar;
pub mod persistence;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

pub const COURSES_COOKIE: &str = "courses";
pub const EXPIRY_DAYS: i64 = 365;
pub const ROOT_PATH: &str = "/";

const EXPIRES_FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cookie {
    pub name: String,
    pub value: String,
    pub expires: DateTime<Utc>,
    pub path: String,
}

impl Cookie {
    /// A root-path cookie expiring `days` after `now`.
    pub fn new(name: &str, value: &str, now: DateTime<Utc>, days: i64) -> Self {
        Self {
            name: name.to_string(),
            value: value.to_string(),
            expires: now + Duration::days(days),
            path: ROOT_PATH.to_string(),
        }
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires <= now
    }

    /// The string a page assigns to `document.cookie`.
    pub fn set_cookie_string(&self) -> String {
        format!(
            "{}={};expires={};path={}",
            self.name,
            self.value,
            self.expires.format(EXPIRES_FORMAT),
            self.path
        )
    }
}

/// Looks `name` up in a `document.cookie` string (`a=1; b=2`), percent-decoding it first.
/// Missing cookies read as the empty string.
pub fn get_cookie(document_cookie: &str, name: &str) -> String {
    let prefix = format!("{}=", name);
    let decoded = urlencoding::decode(document_cookie)
        .map(|decoded| decoded.into_owned())
        .unwrap_or_else(|_| document_cookie.to_string());

    decoded
        .split(';')
        .map(|pair| pair.trim_start_matches(' '))
        .find_map(|pair| pair.strip_prefix(&prefix))
        .unwrap_or_default()
        .to_string()
}
