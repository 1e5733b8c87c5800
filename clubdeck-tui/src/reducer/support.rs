//! Support screen reducer: tickets and the media library

use clubdeck_core::csv::CsvDoc;
use clubdeck_core::filter::{self, Facet};

use crate::action::ListAction;
use crate::dispatch::DispatchResult;
use crate::effect::Effect;
use crate::model::{asset, ticket, MediaAsset, Ticket, TicketStatus};
use crate::reducer::drawer::asset_form;
use crate::reducer::list::{self, ListOutcome};
use crate::state::AppState;

pub fn reduce_tickets(state: &mut AppState, action: ListAction) -> DispatchResult<Effect> {
    let t = &mut state.support.tickets;
    let filtered = filter::apply(
        t.store.records(),
        &t.controls.query,
        &[
            &t.status as &dyn Facet<Ticket>,
            &t.priority as &dyn Facet<Ticket>,
        ],
    );

    match list::handle(&mut t.controls, &filtered, action) {
        ListOutcome::Done(changed) => DispatchResult {
            changed,
            effects: vec![],
        },

        ListOutcome::Facet(n) => {
            match n {
                0 => t.status = t.status.cycle(),
                1 => t.priority = t.priority.cycle(),
                _ => return DispatchResult::unchanged(),
            }
            t.controls.page.reset();
            t.controls.cursor = 0;
            DispatchResult::changed()
        }

        ListOutcome::Export => {
            let rows = t.controls.selection.export_source(t.store.records(), filtered);
            let csv = CsvDoc::project(&rows, &ticket::export_columns()).to_csv();
            tracing::info!(rows = rows.len(), "exporting tickets");
            DispatchResult::changed_with(Effect::WriteCsv {
                prefix: "tickets",
                csv,
            })
        }

        // Resolve the focused ticket.
        ListOutcome::StatusFlip(Some(id)) => {
            let changed = t.store.update_with(&id, |ticket| {
                ticket.status = TicketStatus::Resolved;
            });
            DispatchResult {
                changed,
                effects: vec![],
            }
        }

        _ => DispatchResult::unchanged(),
    }
}

pub fn reduce_media(state: &mut AppState, action: ListAction) -> DispatchResult<Effect> {
    let m = &mut state.support.media;
    let filtered = filter::apply(
        m.store.records(),
        &m.controls.query,
        &[&m.kind as &dyn Facet<MediaAsset>],
    );

    match list::handle(&mut m.controls, &filtered, action) {
        ListOutcome::Done(changed) => DispatchResult {
            changed,
            effects: vec![],
        },

        ListOutcome::Facet(0) => {
            m.kind = m.kind.cycle();
            m.controls.page.reset();
            m.controls.cursor = 0;
            DispatchResult::changed()
        }
        ListOutcome::Facet(_) => DispatchResult::unchanged(),

        ListOutcome::Export => {
            let rows = m.controls.selection.export_source(m.store.records(), filtered);
            let csv = CsvDoc::project(&rows, &asset::export_columns()).to_csv();
            tracing::info!(rows = rows.len(), "exporting assets");
            DispatchResult::changed_with(Effect::WriteCsv {
                prefix: "assets",
                csv,
            })
        }

        ListOutcome::Open(Some(id)) => {
            state.drawer = m.store.get(&id).map(|a| asset_form(Some(a)));
            DispatchResult::changed()
        }
        ListOutcome::Open(None) | ListOutcome::Create => {
            state.drawer = Some(asset_form(None));
            DispatchResult::changed()
        }

        ListOutcome::Message | ListOutcome::StatusFlip(_) => DispatchResult::unchanged(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Action;
    use crate::reducer::reducer;
    use chrono::NaiveDate;

    fn state() -> AppState {
        AppState::new(8, NaiveDate::from_ymd_opt(2025, 8, 22).expect("valid"))
    }

    #[test]
    fn status_flip_resolves_the_focused_ticket() {
        let mut s = state();
        assert_eq!(s.support.tickets.store.records()[0].status, TicketStatus::Open);

        reducer(&mut s, Action::Tickets(ListAction::StatusFlip));
        assert_eq!(
            s.support.tickets.store.records()[0].status,
            TicketStatus::Resolved
        );
    }

    #[test]
    fn ticket_export_has_sla_and_requester_columns() {
        let mut s = state();
        let result = reducer(&mut s, Action::Tickets(ListAction::Export));
        let Effect::WriteCsv { csv, .. } = &result.effects[0] else {
            panic!("expected WriteCsv");
        };
        let header = csv.lines().next().unwrap_or("");
        assert!(header.contains("\"SLA_Due\""));
        assert!(header.contains("\"User\""));
        // unassigned ticket projects an empty assignee cell
        assert!(csv.contains("\"Broker portal invite expired\""));
    }

    #[test]
    fn media_kind_facet_narrows_the_library() {
        let mut s = state();
        reducer(&mut s, Action::Media(ListAction::FacetCycle(0)));
        let filtered = s.support.media.filtered();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "VIP Mixer Cover");
    }

    #[test]
    fn media_open_fills_the_upload_drawer() {
        let mut s = state();
        reducer(&mut s, Action::Media(ListAction::Open));
        let drawer = s.drawer.as_ref().expect("drawer open");
        assert!(drawer.fields.iter().any(|f| f.value == "VIP Mixer Cover"));
    }
}
