//! Deals screen reducer: offers board plus the partner-network sync

use chrono::NaiveDateTime;

use clubdeck_core::csv::CsvDoc;
use clubdeck_core::filter::{self, Facet};

use crate::action::ListAction;
use crate::dispatch::DispatchResult;
use crate::effect::Effect;
use crate::model::{offer, Offer, OfferStatus};
use crate::reducer::list::{self, ListOutcome};
use crate::state::{AppState, SyncStatus};

pub fn reduce(state: &mut AppState, action: ListAction) -> DispatchResult<Effect> {
    let d = &mut state.deals;
    let filtered = filter::apply(
        d.store.records(),
        &d.controls.query,
        &[
            &d.status as &dyn Facet<Offer>,
            &d.tier as &dyn Facet<Offer>,
        ],
    );

    match list::handle(&mut d.controls, &filtered, action) {
        ListOutcome::Done(changed) => DispatchResult {
            changed,
            effects: vec![],
        },

        ListOutcome::Facet(n) => {
            match n {
                0 => d.status = d.status.cycle(),
                1 => d.tier = d.tier.cycle(),
                _ => return DispatchResult::unchanged(),
            }
            d.controls.page.reset();
            d.controls.cursor = 0;
            DispatchResult::changed()
        }

        ListOutcome::Export => {
            let rows = d.controls.selection.export_source(d.store.records(), filtered);
            let csv = CsvDoc::project(&rows, &offer::export_columns()).to_csv();
            tracing::info!(rows = rows.len(), "exporting partner offers");
            DispatchResult::changed_with(Effect::WriteCsv {
                prefix: "partner_offers",
                csv,
            })
        }

        // Pause/resume the focused offer.
        ListOutcome::StatusFlip(Some(id)) => {
            let changed = d.store.update_with(&id, |o| {
                o.status = match o.status {
                    OfferStatus::Active => OfferStatus::Paused,
                    OfferStatus::Paused => OfferStatus::Active,
                    other => other,
                };
            });
            DispatchResult {
                changed,
                effects: vec![],
            }
        }

        _ => DispatchResult::unchanged(),
    }
}

pub fn start_sync(state: &mut AppState) -> DispatchResult<Effect> {
    if state.deals.sync.status == SyncStatus::Syncing {
        return DispatchResult::unchanged();
    }
    state.deals.sync.status = SyncStatus::Syncing;
    tracing::info!("partner sync started");
    DispatchResult::changed_with(Effect::StartPartnerSync)
}

pub fn cancel_sync(state: &mut AppState) -> DispatchResult<Effect> {
    if state.deals.sync.status != SyncStatus::Syncing {
        return DispatchResult::unchanged();
    }
    state.deals.sync.status = SyncStatus::Idle;
    tracing::info!("partner sync cancelled");
    DispatchResult::changed_with(Effect::CancelPartnerSync)
}

pub fn finish_sync(
    state: &mut AppState,
    finished_at: NaiveDateTime,
    message: String,
) -> DispatchResult<Effect> {
    let sync = &mut state.deals.sync;
    sync.status = SyncStatus::Idle;
    sync.last_sync = Some(finished_at);
    sync.push_log(finished_at, message);
    DispatchResult::changed()
}
