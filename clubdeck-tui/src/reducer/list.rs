//! Generic handling for the shared table actions
//!
//! Navigation, search, paging and selection behave identically on every
//! table screen; only facets and domain operations differ. `handle` deals
//! with the common part directly and reports the rest back as a
//! [`ListOutcome`] for the screen reducer to finish.

use clubdeck_core::store::Record;

use crate::action::ListAction;
use crate::state::ListControls;

#[derive(Debug, PartialEq)]
pub enum ListOutcome {
    /// Fully handled; the bool is the change indicator.
    Done(bool),
    /// Cycle the n-th facet (screen applies it and resets the page).
    Facet(usize),
    Export,
    /// Open the focused row (id), or the create form when `None`.
    Open(Option<String>),
    Create,
    Message,
    /// Domain status operation on the focused row.
    StatusFlip(Option<String>),
}

/// Id of the row under the cursor on the visible page.
pub fn focused_id<'a, R: Record>(controls: &ListControls, filtered: &[&'a R]) -> Option<&'a str> {
    controls
        .page
        .slice(filtered)
        .get(controls.cursor)
        .map(|r| r.id())
}

pub fn handle<R: Record>(
    controls: &mut ListControls,
    filtered: &[&R],
    action: ListAction,
) -> ListOutcome {
    match action {
        ListAction::QueryChange(query) => {
            controls.query = query;
            // filter changes reset pagination, or a shrinking result set
            // could leave the window past the end
            controls.page.reset();
            controls.cursor = 0;
            ListOutcome::Done(true)
        }

        ListAction::SearchFocus(focused) => {
            controls.search_focused = focused;
            ListOutcome::Done(true)
        }

        ListAction::PageNext => {
            controls.page.next(filtered.len());
            controls.cursor = 0;
            ListOutcome::Done(true)
        }

        ListAction::PagePrev => {
            controls.page.prev(filtered.len());
            controls.cursor = 0;
            ListOutcome::Done(true)
        }

        ListAction::CursorUp => {
            if controls.cursor > 0 {
                controls.cursor -= 1;
                ListOutcome::Done(true)
            } else {
                ListOutcome::Done(false)
            }
        }

        ListAction::CursorDown => {
            let visible = controls.page.slice(filtered).len();
            if controls.cursor + 1 < visible {
                controls.cursor += 1;
                ListOutcome::Done(true)
            } else {
                ListOutcome::Done(false)
            }
        }

        ListAction::ToggleRow => match focused_id(controls, filtered) {
            Some(id) => {
                controls.selection.toggle(id);
                ListOutcome::Done(true)
            }
            None => ListOutcome::Done(false),
        },

        ListAction::ToggleVisible => {
            let ids: Vec<&str> = controls
                .page
                .slice(filtered)
                .iter()
                .map(|r| r.id())
                .collect();
            controls.selection.toggle_page(&ids);
            ListOutcome::Done(true)
        }

        ListAction::FacetCycle(n) => ListOutcome::Facet(n),
        ListAction::Export => ListOutcome::Export,
        ListAction::Open => ListOutcome::Open(focused_id(controls, filtered).map(str::to_string)),
        ListAction::Create => ListOutcome::Create,
        ListAction::Message => ListOutcome::Message,
        ListAction::StatusFlip => {
            ListOutcome::StatusFlip(focused_id(controls, filtered).map(str::to_string))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Row {
        id: String,
    }

    impl Record for Row {
        fn id(&self) -> &str {
            &self.id
        }

        fn set_id(&mut self, id: String) {
            self.id = id;
        }
    }

    fn rows(n: usize) -> Vec<Row> {
        (0..n)
            .map(|i| Row {
                id: format!("r_{i}"),
            })
            .collect()
    }

    #[test]
    fn query_change_resets_page_and_cursor() {
        let rows = rows(20);
        let filtered: Vec<&Row> = rows.iter().collect();
        let mut controls = ListControls::new(8);
        controls.page.page = 3;
        controls.cursor = 4;

        let outcome = handle(&mut controls, &filtered, ListAction::QueryChange("x".into()));

        assert_eq!(outcome, ListOutcome::Done(true));
        assert_eq!(controls.page.page, 1);
        assert_eq!(controls.cursor, 0);
        assert_eq!(controls.query, "x");
    }

    #[test]
    fn cursor_stops_at_page_bounds() {
        let rows = rows(3);
        let filtered: Vec<&Row> = rows.iter().collect();
        let mut controls = ListControls::new(8);

        assert_eq!(
            handle(&mut controls, &filtered, ListAction::CursorUp),
            ListOutcome::Done(false)
        );
        handle(&mut controls, &filtered, ListAction::CursorDown);
        handle(&mut controls, &filtered, ListAction::CursorDown);
        assert_eq!(controls.cursor, 2);
        assert_eq!(
            handle(&mut controls, &filtered, ListAction::CursorDown),
            ListOutcome::Done(false)
        );
    }

    #[test]
    fn toggle_row_selects_the_focused_id() {
        let rows = rows(10);
        let filtered: Vec<&Row> = rows.iter().collect();
        let mut controls = ListControls::new(8);
        controls.page.page = 2;
        controls.cursor = 1;

        handle(&mut controls, &filtered, ListAction::ToggleRow);
        assert!(controls.selection.contains("r_9"));
    }

    #[test]
    fn toggle_visible_is_scoped_to_the_page() {
        let rows = rows(10);
        let filtered: Vec<&Row> = rows.iter().collect();
        let mut controls = ListControls::new(8);
        controls.page.page = 2;

        handle(&mut controls, &filtered, ListAction::ToggleVisible);
        assert_eq!(controls.selection.len(), 2);
        assert!(controls.selection.contains("r_8"));
        assert!(controls.selection.contains("r_9"));

        handle(&mut controls, &filtered, ListAction::ToggleVisible);
        assert!(controls.selection.is_empty());
    }

    #[test]
    fn open_reports_the_focused_id() {
        let rows = rows(2);
        let filtered: Vec<&Row> = rows.iter().collect();
        let mut controls = ListControls::new(8);
        controls.cursor = 1;

        let outcome = handle(&mut controls, &filtered, ListAction::Open);
        assert_eq!(outcome, ListOutcome::Open(Some("r_1".into())));

        let empty: Vec<&Row> = vec![];
        let outcome = handle(&mut controls, &empty, ListAction::Open);
        assert_eq!(outcome, ListOutcome::Open(None));
    }
}
