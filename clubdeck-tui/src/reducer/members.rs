//! Members screen reducer

use clubdeck_core::csv::CsvDoc;
use clubdeck_core::filter::{self, Facet};

use crate::action::ListAction;
use crate::dispatch::DispatchResult;
use crate::effect::Effect;
use crate::model::{member, Member};
use crate::reducer::drawer::member_form;
use crate::reducer::list::{self, ListOutcome};
use crate::state::AppState;

pub fn reduce(state: &mut AppState, action: ListAction) -> DispatchResult<Effect> {
    let m = &mut state.members;
    let filtered = filter::apply(
        m.store.records(),
        &m.controls.query,
        &[
            &m.segment as &dyn Facet<Member>,
            &m.role as &dyn Facet<Member>,
            &m.status as &dyn Facet<Member>,
        ],
    );

    match list::handle(&mut m.controls, &filtered, action) {
        ListOutcome::Done(changed) => DispatchResult {
            changed,
            effects: vec![],
        },

        ListOutcome::Facet(n) => {
            match n {
                0 => m.segment = m.segment.cycle(),
                1 => m.role = m.role.cycle(),
                2 => m.status = m.status.cycle(),
                _ => return DispatchResult::unchanged(),
            }
            m.controls.page.reset();
            m.controls.cursor = 0;
            DispatchResult::changed()
        }

        ListOutcome::Export => {
            let rows = m.controls.selection.export_source(m.store.records(), filtered);
            let csv = CsvDoc::project(&rows, &member::export_columns()).to_csv();
            tracing::info!(rows = rows.len(), "exporting members");
            DispatchResult::changed_with(Effect::WriteCsv {
                prefix: "members",
                csv,
            })
        }

        ListOutcome::Open(Some(id)) => {
            state.drawer = Some(member_form(m.store.get(&id)));
            DispatchResult::changed()
        }
        ListOutcome::Open(None) | ListOutcome::Create => {
            state.drawer = Some(member_form(None));
            DispatchResult::changed()
        }

        ListOutcome::Message => {
            state.toast = Some(if m.controls.selection.is_empty() {
                "Select at least one member.".into()
            } else {
                format!(
                    "Broadcast queued for {} member(s).",
                    m.controls.selection.len()
                )
            });
            DispatchResult::changed()
        }

        // no status operation on the members board
        ListOutcome::StatusFlip(_) => DispatchResult::unchanged(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Action;
    use crate::model::SegmentFilter;
    use crate::reducer::reducer;
    use chrono::NaiveDate;

    fn state() -> AppState {
        AppState::new(8, NaiveDate::from_ymd_opt(2025, 8, 22).expect("valid"))
    }

    fn dispatch(state: &mut AppState, action: ListAction) -> DispatchResult<Effect> {
        reducer(state, Action::Members(action))
    }

    #[test]
    fn search_narrows_and_resets_the_page() {
        let mut s = state();
        s.members.controls.page.page = 2;

        dispatch(&mut s, ListAction::QueryChange("natali".into()));

        assert_eq!(s.members.controls.page.page, 1);
        let filtered = s.members.filtered();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Natali Craig");
    }

    #[test]
    fn facet_cycle_moves_the_segment_and_resets_the_page() {
        let mut s = state();
        s.members.controls.page.page = 2;

        dispatch(&mut s, ListAction::FacetCycle(0));

        assert_eq!(s.members.segment, SegmentFilter::Free);
        assert_eq!(s.members.controls.page.page, 1);
    }

    #[test]
    fn export_uses_filtered_rows_when_nothing_is_selected() {
        let mut s = state();
        dispatch(&mut s, ListAction::QueryChange("broker".into()));
        let expected = s.members.filtered().len();

        let result = dispatch(&mut s, ListAction::Export);
        assert_eq!(result.effects.len(), 1);
        let Effect::WriteCsv { prefix, csv } = &result.effects[0] else {
            panic!("expected WriteCsv, got {:?}", result.effects[0]);
        };
        assert_eq!(*prefix, "members");
        // header + one line per filtered row
        assert_eq!(csv.lines().count(), expected + 1);
    }

    #[test]
    fn export_prefers_the_selection_even_when_stale() {
        let mut s = state();
        // select two rows, then narrow the filter until they are hidden
        dispatch(&mut s, ListAction::ToggleRow);
        dispatch(&mut s, ListAction::CursorDown);
        dispatch(&mut s, ListAction::ToggleRow);
        assert_eq!(s.members.controls.selection.len(), 2);

        dispatch(
            &mut s,
            ListAction::QueryChange("no-member-matches-this".into()),
        );
        assert!(s.members.filtered().is_empty());

        let result = dispatch(&mut s, ListAction::Export);
        let Effect::WriteCsv { csv, .. } = &result.effects[0] else {
            panic!("expected WriteCsv");
        };
        assert_eq!(csv.lines().count(), 3);
    }

    #[test]
    fn message_requires_a_selection() {
        let mut s = state();
        dispatch(&mut s, ListAction::Message);
        assert_eq!(s.toast.as_deref(), Some("Select at least one member."));

        dispatch(&mut s, ListAction::ToggleRow);
        dispatch(&mut s, ListAction::Message);
        assert!(s.toast.as_deref().unwrap_or("").contains("1 member"));
    }

    #[test]
    fn open_focused_row_fills_the_drawer() {
        let mut s = state();
        dispatch(&mut s, ListAction::Open);
        let drawer = s.drawer.as_ref().expect("drawer open");
        assert!(drawer.fields.iter().any(|f| f.value == "Alex Benjamin"));
    }

    #[test]
    fn selection_survives_page_and_filter_changes() {
        let mut s = state();
        dispatch(&mut s, ListAction::ToggleRow);
        dispatch(&mut s, ListAction::PageNext);
        dispatch(&mut s, ListAction::QueryChange("jane".into()));
        assert_eq!(s.members.controls.selection.len(), 1);
    }
}
