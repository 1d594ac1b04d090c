use super::{Cookie, get_cookie};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Cookies stored for the page's origin.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CookieJar {
    #[serde(default)]
    cookies: Vec<Cookie>,
}

impl CookieJar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `cookie`, replacing any cookie with the same name and path.
    pub fn set(&mut self, cookie: Cookie) {
        match self
            .cookies
            .iter_mut()
            .find(|stored| stored.name == cookie.name && stored.path == cookie.path)
        {
            Some(stored) => *stored = cookie,
            None => self.cookies.push(cookie),
        }
    }

    pub fn get(&self, name: &str, now: DateTime<Utc>) -> Option<&Cookie> {
        self.cookies
            .iter()
            .find(|cookie| cookie.name == name && !cookie.is_expired(now))
    }

    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.cookies.len();
        self.cookies.retain(|cookie| cookie.name != name);
        self.cookies.len() != before
    }

    pub fn purge_expired(&mut self, now: DateTime<Utc>) -> usize {
        let before = self.cookies.len();
        self.cookies.retain(|cookie| !cookie.is_expired(now));
        before - self.cookies.len()
    }

    /// `name=value` pairs of the live cookies joined with `; `, like `document.cookie`.
    pub fn document_cookie(&self, now: DateTime<Utc>) -> String {
        self.cookies
            .iter()
            .filter(|cookie| !cookie.is_expired(now))
            .map(|cookie| format!("{}={}", cookie.name, cookie.value))
            .collect::<Vec<_>>()
            .join("; ")
    }

    pub fn read(&self, name: &str, now: DateTime<Utc>) -> String {
        get_cookie(&self.document_cookie(now), name)
    }

    pub fn len(&self) -> usize {
        self.cookies.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.cookies.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cookie::{COURSES_COOKIE, EXPIRY_DAYS};
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 17, 9, 30, 0).unwrap()
    }

    #[test]
    fn test_set_replaces_same_name() {
        let mut jar = CookieJar::new();
        jar.set(Cookie::new(COURSES_COOKIE, "a", now(), EXPIRY_DAYS));
        jar.set(Cookie::new(COURSES_COOKIE, "a,b", now(), EXPIRY_DAYS));

        assert_eq!(jar.len(), 1);
        assert_eq!(jar.get(COURSES_COOKIE, now()).unwrap().value, "a,b");
    }

    #[test]
    fn test_document_cookie_and_read() {
        let mut jar = CookieJar::new();
        jar.set(Cookie::new("theme", "dark", now(), 30));
        jar.set(Cookie::new(COURSES_COOKIE, "math101,phys201", now(), EXPIRY_DAYS));

        assert_eq!(jar.document_cookie(now()), "theme=dark; courses=math101,phys201");
        assert_eq!(jar.read(COURSES_COOKIE, now()), "math101,phys201");
        assert_eq!(jar.read("missing", now()), "");
    }

    #[test]
    fn test_expired_cookies_are_invisible() {
        let mut jar = CookieJar::new();
        jar.set(Cookie::new("short", "x", now(), 1));
        jar.set(Cookie::new(COURSES_COOKIE, "a", now(), EXPIRY_DAYS));

        let later = now() + Duration::days(2);
        assert!(jar.get("short", later).is_none());
        assert_eq!(jar.read("short", later), "");
        assert_eq!(jar.purge_expired(later), 1);
        assert_eq!(jar.len(), 1);
    }

    #[test]
    fn test_remove() {
        let mut jar = CookieJar::new();
        jar.set(Cookie::new(COURSES_COOKIE, "a", now(), EXPIRY_DAYS));
        assert!(jar.remove(COURSES_COOKIE));
        assert!(!jar.remove(COURSES_COOKIE));
        assert!(jar.is_empty());
    }
}
