//! Messaging screen reducer: broadcast campaigns

use clubdeck_core::csv::CsvDoc;
use clubdeck_core::filter::{self, Facet};

use crate::action::ListAction;
use crate::dispatch::DispatchResult;
use crate::effect::Effect;
use crate::model::{campaign, Campaign};
use crate::reducer::drawer::campaign_form;
use crate::reducer::list::{self, ListOutcome};
use crate::state::AppState;

pub fn reduce(state: &mut AppState, action: ListAction) -> DispatchResult<Effect> {
    let msg = &mut state.messaging;
    let filtered = filter::apply(
        msg.store.records(),
        &msg.controls.query,
        &[
            &msg.channel as &dyn Facet<Campaign>,
            &msg.status as &dyn Facet<Campaign>,
        ],
    );

    match list::handle(&mut msg.controls, &filtered, action) {
        ListOutcome::Done(changed) => DispatchResult {
            changed,
            effects: vec![],
        },

        ListOutcome::Facet(n) => {
            match n {
                0 => msg.channel = msg.channel.cycle(),
                1 => msg.status = msg.status.cycle(),
                _ => return DispatchResult::unchanged(),
            }
            msg.controls.page.reset();
            msg.controls.cursor = 0;
            DispatchResult::changed()
        }

        ListOutcome::Export => {
            let rows = msg
                .controls
                .selection
                .export_source(msg.store.records(), filtered);
            let csv = CsvDoc::project(&rows, &campaign::export_columns()).to_csv();
            tracing::info!(rows = rows.len(), "exporting broadcasts");
            DispatchResult::changed_with(Effect::WriteCsv {
                prefix: "broadcasts",
                csv,
            })
        }

        ListOutcome::Open(Some(id)) => {
            state.drawer = msg.store.get(&id).map(|c| campaign_form(Some(c)));
            DispatchResult::changed()
        }
        ListOutcome::Open(None) | ListOutcome::Create => {
            state.drawer = Some(campaign_form(None));
            DispatchResult::changed()
        }

        ListOutcome::Message | ListOutcome::StatusFlip(_) => DispatchResult::unchanged(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Action;
    use crate::model::ChannelFilter;
    use crate::reducer::reducer;
    use chrono::NaiveDate;

    fn state() -> AppState {
        AppState::new(8, NaiveDate::from_ymd_opt(2025, 8, 22).expect("valid"))
    }

    #[test]
    fn channel_facet_narrows_the_board() {
        let mut s = state();
        reducer(&mut s, Action::Campaigns(ListAction::FacetCycle(0)));
        assert_eq!(s.messaging.channel, ChannelFilter::Push);
        let filtered = s.messaging.filtered();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "VIP Networking Tonight");
    }

    #[test]
    fn export_includes_delivery_metrics() {
        let mut s = state();
        let result = reducer(&mut s, Action::Campaigns(ListAction::Export));
        let Effect::WriteCsv { prefix, csv } = &result.effects[0] else {
            panic!("expected WriteCsv");
        };
        assert_eq!(*prefix, "broadcasts");
        assert!(csv.lines().next().unwrap_or("").contains("\"Opens\""));
        assert!(csv.contains("\"4800\""));
    }

    #[test]
    fn open_prefills_the_compose_drawer() {
        let mut s = state();
        reducer(&mut s, Action::Campaigns(ListAction::Open));
        let drawer = s.drawer.as_ref().expect("drawer open");
        assert!(drawer
            .fields
            .iter()
            .any(|f| f.value == "VIP Networking Tonight"));
    }
}
