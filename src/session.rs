use crate::cookie::jar::CookieJar;
use crate::cookie::{COURSES_COOKIE, Cookie, EXPIRY_DAYS};
use crate::page::error::PageError;
use crate::page::filter::{self, FilterSummary};
use crate::page::models::{Page, Representation, SEARCH_INPUT_ID};
use crate::page::selection::SelectionSet;
use crate::page::toggle::{self, RowTransition};
use chrono::{DateTime, Utc};
use tracing::info;

/// State of one loaded page and the handlers wired to its events.
#[derive(Debug)]
pub struct PageSession {
    page: Page,
    selection: SelectionSet,
    jar: CookieJar,
}

impl PageSession {
    pub fn new(page: Page, jar: CookieJar) -> Self {
        Self {
            page,
            selection: SelectionSet::new(),
            jar,
        }
    }

    /// Search box changed.
    pub fn on_input(&mut self, value: &str) -> Result<FilterSummary, PageError> {
        self.page.input_mut(SEARCH_INPUT_ID)?.value = value.to_string();
        self.on_filter()
    }

    pub fn on_filter(&mut self) -> Result<FilterSummary, PageError> {
        filter::apply_filter(&mut self.page)
    }

    pub fn on_toggle(&mut self, element_id: &str) -> Result<RowTransition, PageError> {
        toggle::toggle_row(&mut self.page, &mut self.selection, element_id)
    }

    /// Form submitted: store the selection in the `courses` cookie.
    pub fn on_submit(&mut self, now: DateTime<Utc>) -> Cookie {
        let value = self.selection.to_cookie_value();
        let cookie = Cookie::new(COURSES_COOKIE, &value, now, EXPIRY_DAYS);
        info!(
            courses = self.selection.len(),
            cookie = %cookie.set_cookie_string(),
            "selection saved"
        );
        self.jar.set(cookie.clone());
        cookie
    }

    /// Page loaded: re-check every row named in the `courses` cookie.
    ///
    /// Stops at the first id with no row on the page; rows before it stay checked.
    pub fn on_load(&mut self, now: DateTime<Utc>) -> Result<usize, PageError> {
        let courses = self.jar.read(COURSES_COOKIE, now);
        if courses.is_empty() {
            return Ok(0);
        }

        let mut restored = 0;
        for course in courses.split(',').filter(|course| !course.is_empty()) {
            self.on_toggle(&Representation::Unchecked.element_id(course))?;
            restored += 1;
        }

        info!(restored, "selection restored");
        Ok(restored)
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    pub fn jar(&self) -> &CookieJar {
        &self.jar
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::models::LIST_ID;
    use crate::page::parser::parse_catalog;
    use crate::page::toggle::RowState;
    use chrono::TimeZone;
    use proptest::collection::{btree_set, vec};
    use proptest::prelude::*;

    const CATALOG: &str = "\
# Semester A
- math101: Calculus I
- phys201: Mechanics
- a: Course A
- b: Course B
- c: Course C
";

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 17, 9, 30, 0).unwrap()
    }

    fn fresh_session(jar: CookieJar) -> PageSession {
        PageSession::new(parse_catalog(CATALOG, "catalog.md").unwrap(), jar)
    }

    fn selected(session: &PageSession) -> Vec<String> {
        let mut ids: Vec<String> = session.selection().iter().map(str::to_string).collect();
        ids.sort();
        ids
    }

    #[test]
    fn test_round_trip_through_cookie() {
        let mut session = fresh_session(CookieJar::new());
        for id in ["c", "a", "b"] {
            session.on_toggle(&format!("unchecked_{}", id)).unwrap();
        }
        session.on_submit(now());

        let mut reloaded = fresh_session(session.jar().clone());
        assert_eq!(reloaded.on_load(now()).unwrap(), 3);
        assert_eq!(selected(&reloaded), vec!["a", "b", "c"]);
        assert_eq!(reloaded.page().checked_rows(), 3);
    }

    #[test]
    fn test_empty_selection() {
        let mut session = fresh_session(CookieJar::new());
        let cookie = session.on_submit(now());
        assert_eq!(cookie.value, "");

        let mut reloaded = fresh_session(session.jar().clone());
        assert_eq!(reloaded.on_load(now()).unwrap(), 0);
        assert!(reloaded.selection().is_empty());
    }

    #[test]
    fn test_absent_cookie_is_a_no_op() {
        let mut session = fresh_session(CookieJar::new());
        assert_eq!(session.on_load(now()).unwrap(), 0);
        assert!(session.selection().is_empty());
    }

    #[test]
    fn test_restore_known_cookie_value() {
        let mut jar = CookieJar::new();
        jar.set(Cookie::new(COURSES_COOKIE, "math101,phys201", now(), EXPIRY_DAYS));

        let mut session = fresh_session(jar);
        session.on_load(now()).unwrap();

        for id in ["math101", "phys201"] {
            assert_eq!(session.page().row(id).unwrap().state, RowState::Checked);
            assert!(session.page().element(&format!("unchecked_{}", id)).unwrap().hidden);
            assert!(!session.page().element(&format!("checked_{}", id)).unwrap().hidden);
        }
        assert_eq!(session.page().row("a").unwrap().state, RowState::Unchecked);
    }

    #[test]
    fn test_restore_unknown_row_fails_fast() {
        let mut jar = CookieJar::new();
        jar.set(Cookie::new(COURSES_COOKIE, "math101,gone999,phys201", now(), EXPIRY_DAYS));

        let mut session = fresh_session(jar);
        assert_eq!(
            session.on_load(now()),
            Err(PageError::ElementNotFound("unchecked_gone999".to_string()))
        );
        assert_eq!(selected(&session), vec!["math101"]);
    }

    #[test]
    fn test_restore_skips_empty_entries() {
        let mut jar = CookieJar::new();
        jar.set(Cookie::new(COURSES_COOKIE, "a,,b,", now(), EXPIRY_DAYS));

        let mut session = fresh_session(jar);
        assert_eq!(session.on_load(now()).unwrap(), 2);
        assert_eq!(selected(&session), vec!["a", "b"]);
    }

    #[test]
    fn test_expired_cookie_restores_nothing() {
        let mut jar = CookieJar::new();
        jar.set(Cookie::new(COURSES_COOKIE, "a", now(), EXPIRY_DAYS));

        let mut session = fresh_session(jar);
        let next_year = now() + chrono::Duration::days(EXPIRY_DAYS);
        assert_eq!(session.on_load(next_year).unwrap(), 0);
    }

    #[test]
    fn test_on_input_filters() {
        let mut session = fresh_session(CookieJar::new());
        session.on_input("course").unwrap();

        let visible: Vec<&str> =
            session.page().visible_elements().map(|e| e.id.as_str()).collect();
        assert_eq!(visible, vec!["unchecked_a", "unchecked_b", "unchecked_c"]);
        assert_eq!(session.page().input(SEARCH_INPUT_ID).unwrap().value, "course");
        assert_eq!(session.page().list_items(LIST_ID).unwrap().len(), 10);
    }

    #[test]
    fn test_toggle_then_submit_writes_cookie() {
        let mut session = fresh_session(CookieJar::new());
        session.on_toggle("unchecked_phys201").unwrap();
        session.on_toggle("unchecked_math101").unwrap();
        session.on_toggle("checked_phys201").unwrap();

        let cookie = session.on_submit(now());
        assert_eq!(cookie.value, "math101");
        assert_eq!(
            cookie.set_cookie_string(),
            "courses=math101;expires=Sun, 17 Oct 2027 09:30:00 GMT;path=/"
        );
        assert_eq!(session.jar().read(COURSES_COOKIE, now()), "math101");
    }

    proptest! {
        #[test]
        fn prop_any_selection_survives_reload(
            ids in btree_set("[a-z0-9_%.-]{1,8}", 1..8),
            picks in vec(any::<bool>(), 8),
        ) {
            let build = |jar: CookieJar| {
                let mut page = Page::new("catalog.md".to_string());
                for id in &ids {
                    // ids the page refuses can never reach the cookie
                    let _ = page.add_row(id, "Course");
                }
                PageSession::new(page, jar)
            };

            let mut session = build(CookieJar::new());
            let accepted: Vec<String> = session.page().visible_elements()
                .map(|element| element.row_id.clone())
                .collect();
            let mut expected: Vec<String> = accepted
                .iter()
                .zip(&picks)
                .filter(|(_, picked)| **picked)
                .map(|(id, _)| id.clone())
                .collect();
            for id in &expected {
                session.on_toggle(&format!("unchecked_{}", id)).unwrap();
            }
            session.on_submit(now());

            let mut reloaded = build(session.jar().clone());
            prop_assert_eq!(reloaded.on_load(now()), Ok(expected.len()));
            expected.sort();
            prop_assert_eq!(selected(&reloaded), expected);
        }
    }
}
