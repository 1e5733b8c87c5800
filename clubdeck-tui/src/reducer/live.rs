//! Live & Events screen reducer: calendar navigation and event operations
//!
//! Row focus follows the list-view ordering (the cursor month's events,
//! ascending by start) in every view, so j/k walk the same sequence
//! whether the month grid or the list is on screen.

use chrono::NaiveDate;

use clubdeck_core::calendar;
use clubdeck_core::csv::CsvDoc;

use crate::action::CalendarAction;
use crate::dispatch::DispatchResult;
use crate::effect::Effect;
use crate::model::{live_event, LiveEvent};
use crate::reducer::drawer::event_form;
use crate::state::AppState;

pub fn reduce(state: &mut AppState, action: CalendarAction) -> DispatchResult<Effect> {
    let live = &mut state.live;

    // Focus bookkeeping against the month window, resolved before any
    // store mutation below.
    let (window_len, focused_id, focused_day) = {
        let window = calendar::month_window(live.store.records(), live.calendar.date);
        let focused = window.get(live.cursor);
        (
            window.len(),
            focused.map(|e| e.id.clone()),
            focused.map(|e| e.start.date()),
        )
    };

    match action {
        CalendarAction::Prev => {
            live.calendar.prev();
            live.cursor = 0;
            DispatchResult::changed()
        }
        CalendarAction::Next => {
            live.calendar.next();
            live.cursor = 0;
            DispatchResult::changed()
        }
        CalendarAction::Today => {
            live.calendar.today(state.today);
            live.cursor = 0;
            DispatchResult::changed()
        }
        CalendarAction::View(view) => {
            live.calendar.set_view(view);
            DispatchResult::changed()
        }

        CalendarAction::CursorUp => {
            if live.cursor > 0 {
                live.cursor -= 1;
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }
        CalendarAction::CursorDown => {
            if live.cursor + 1 < window_len {
                live.cursor += 1;
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        CalendarAction::Open => match focused_id.as_deref().and_then(|id| live.store.get(id)) {
            Some(event) => {
                let form = event_form(event);
                state.drawer = Some(form);
                DispatchResult::changed()
            }
            None => DispatchResult::unchanged(),
        },

        CalendarAction::Create => {
            // prefill on the focused event's day, else the cursor date
            let day: NaiveDate = focused_day.unwrap_or(live.calendar.date);
            state.drawer = Some(event_form(&LiveEvent::draft(Some(day))));
            DispatchResult::changed()
        }

        CalendarAction::Export => {
            let rows: Vec<&LiveEvent> = live.store.records().iter().collect();
            let csv = CsvDoc::project(&rows, &live_event::export_columns()).to_csv();
            tracing::info!(rows = rows.len(), "exporting live events");
            DispatchResult::changed_with(Effect::WriteCsv {
                prefix: "live_events",
                csv,
            })
        }

        CalendarAction::StatusAdvance => match focused_id {
            Some(id) => {
                let changed = live.store.update_with(&id, |e| {
                    e.status = e.status.advanced();
                });
                DispatchResult {
                    changed,
                    effects: vec![],
                }
            }
            None => DispatchResult::unchanged(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Action;
    use crate::model::EventStatus;
    use crate::reducer::reducer;
    use clubdeck_core::calendar::CalendarView;

    fn state() -> AppState {
        AppState::new(8, NaiveDate::from_ymd_opt(2025, 8, 22).expect("valid"))
    }

    #[test]
    fn month_navigation_moves_by_whole_months() {
        let mut s = state();
        reducer(&mut s, Action::Live(CalendarAction::Next));
        assert_eq!(
            s.live.calendar.date,
            NaiveDate::from_ymd_opt(2025, 9, 22).expect("valid")
        );
        reducer(&mut s, Action::Live(CalendarAction::Today));
        assert_eq!(s.live.calendar.date, s.today);
    }

    #[test]
    fn week_view_steps_by_seven_days() {
        let mut s = state();
        reducer(
            &mut s,
            Action::Live(CalendarAction::View(CalendarView::Week)),
        );
        reducer(&mut s, Action::Live(CalendarAction::Prev));
        assert_eq!(
            s.live.calendar.date,
            NaiveDate::from_ymd_opt(2025, 8, 15).expect("valid")
        );
    }

    #[test]
    fn cursor_walks_the_month_window_in_start_order() {
        let mut s = state();
        // August seeds sorted by start: ev_1003 (15th), ev_1001 (24th),
        // ev_1002 (28th)
        reducer(&mut s, Action::Live(CalendarAction::CursorDown));
        reducer(&mut s, Action::Live(CalendarAction::Open));
        let drawer = s.drawer.as_ref().expect("drawer open");
        assert!(drawer.title.contains("ev_1001"));
    }

    #[test]
    fn status_advance_walks_the_lifecycle_of_the_focused_event() {
        let mut s = state();
        // focus ev_1003, already Ended: advancing keeps it Ended
        reducer(&mut s, Action::Live(CalendarAction::StatusAdvance));
        assert_eq!(
            s.live.store.get("ev_1003").map(|e| e.status),
            Some(EventStatus::Ended)
        );

        reducer(&mut s, Action::Live(CalendarAction::CursorDown));
        reducer(&mut s, Action::Live(CalendarAction::StatusAdvance));
        assert_eq!(
            s.live.store.get("ev_1001").map(|e| e.status),
            Some(EventStatus::Live)
        );
        reducer(&mut s, Action::Live(CalendarAction::StatusAdvance));
        assert_eq!(
            s.live.store.get("ev_1001").map(|e| e.status),
            Some(EventStatus::Ended)
        );
    }

    #[test]
    fn export_covers_the_whole_store() {
        let mut s = state();
        let result = reducer(&mut s, Action::Live(CalendarAction::Export));
        let Effect::WriteCsv { prefix, csv } = &result.effects[0] else {
            panic!("expected WriteCsv");
        };
        assert_eq!(*prefix, "live_events");
        assert_eq!(csv.lines().count(), s.live.store.len() + 1);
    }

    #[test]
    fn create_prefills_the_focused_day() {
        let mut s = state();
        reducer(&mut s, Action::Live(CalendarAction::Create));
        let drawer = s.drawer.as_ref().expect("drawer open");
        let start = drawer
            .fields
            .iter()
            .find(|f| f.label == "Start (YYYY-MM-DD HH:MM)")
            .expect("start field");
        // ev_1003 on the 15th is focused
        assert!(start.value.starts_with("2025-08-15"));
    }

    #[test]
    fn navigation_resets_the_row_focus() {
        let mut s = state();
        reducer(&mut s, Action::Live(CalendarAction::CursorDown));
        assert_eq!(s.live.cursor, 1);
        reducer(&mut s, Action::Live(CalendarAction::Next));
        assert_eq!(s.live.cursor, 0);
    }
}
