//! End-to-end reducer sessions across screens
//!
//! Each test scripts a user session as a sequence of dispatched actions and
//! checks the observable outcome: the rendered row set, the emitted export
//! payloads, and the store contents. The terminal itself stays out of the
//! loop; key-to-action mapping has its own tests next to the UI.

use chrono::NaiveDate;

use clubdeck_core::store::Record;

use clubdeck_tui::action::{Action, CalendarAction, DrawerAction, ListAction};
use clubdeck_tui::dispatch::DispatchResult;
use clubdeck_tui::effect::Effect;
use clubdeck_tui::reducer::reducer;
use clubdeck_tui::state::{AppState, Screen};

fn state() -> AppState {
    AppState::new(8, NaiveDate::from_ymd_opt(2025, 8, 22).expect("valid"))
}

fn dispatch(state: &mut AppState, action: Action) -> DispatchResult<Effect> {
    reducer(state, action)
}

fn csv_of(result: &DispatchResult<Effect>) -> &str {
    match result.effects.first() {
        Some(Effect::WriteCsv { csv, .. }) => csv,
        other => panic!("expected a WriteCsv effect, got {other:?}"),
    }
}

#[test]
fn select_then_narrow_then_export_keeps_the_stale_selection() {
    let mut s = state();

    // Select the top two members, then narrow the search until neither is
    // visible anymore.
    dispatch(&mut s, Action::Members(ListAction::ToggleRow));
    dispatch(&mut s, Action::Members(ListAction::CursorDown));
    dispatch(&mut s, Action::Members(ListAction::ToggleRow));
    dispatch(
        &mut s,
        Action::Members(ListAction::QueryChange("tunde".into())),
    );
    assert_eq!(s.members.filtered().len(), 1);

    let result = dispatch(&mut s, Action::Members(ListAction::Export));
    let csv = csv_of(&result);
    assert_eq!(csv.lines().count(), 3);
    assert!(csv.contains("Alex Benjamin"));
    assert!(csv.contains("Jane Smith"));
    assert!(!csv.contains("Tunde"));

    // Clearing the selection flips the export back to the filtered rows.
    s.members.controls.selection.clear();
    let result = dispatch(&mut s, Action::Members(ListAction::Export));
    let csv = csv_of(&result);
    assert_eq!(csv.lines().count(), 2);
    assert!(csv.contains("Tunde Adeyemi"));
}

#[test]
fn created_member_lands_on_top_and_selection_follows_ids_not_rows() {
    let mut s = state();

    // Mark the current top row, then create a new member through the drawer.
    dispatch(&mut s, Action::Members(ListAction::ToggleRow));
    dispatch(&mut s, Action::Members(ListAction::Create));
    {
        let drawer = s.drawer.as_mut().expect("drawer open");
        drawer.fields[0].value = "Priya Nair".into();
        drawer.fields[1].value = "priya@example.com".into();
    }
    dispatch(&mut s, Action::Drawer(DrawerAction::Save));

    // The new record prepends, shifting every row down one.
    assert_eq!(s.members.store.records()[0].name, "Priya Nair");
    assert_eq!(s.members.store.records()[1].id, "mb_4101");

    // The selection still points at the member it was made on.
    assert!(s.members.controls.selection.contains("mb_4101"));
    assert!(!s.members.controls.selection.contains(s.members.store.records()[0].id()));

    let result = dispatch(&mut s, Action::Members(ListAction::Export));
    let csv = csv_of(&result);
    assert_eq!(csv.lines().count(), 2);
    assert!(csv.contains("Alex Benjamin"));
}

#[test]
fn shrinking_the_result_set_cannot_leave_the_page_out_of_range() {
    let mut s = state();

    // Twelve members on a page size of eight: page 2 exists.
    dispatch(&mut s, Action::Members(ListAction::PageNext));
    assert_eq!(s.members.controls.page.page, 2);

    // A query that matches one member resets to page 1 and shows that row.
    dispatch(
        &mut s,
        Action::Members(ListAction::QueryChange("grace".into())),
    );
    assert_eq!(s.members.controls.page.page, 1);
    let filtered = s.members.filtered();
    assert_eq!(
        s.members.controls.page.slice(&filtered).len(),
        1
    );

    // Paging forward on a one-page set stays clamped.
    dispatch(&mut s, Action::Members(ListAction::PageNext));
    assert_eq!(s.members.controls.page.clamped(s.members.filtered().len()), 1);
}

#[test]
fn event_created_on_the_calendar_appears_in_its_month_window() {
    let mut s = state();
    dispatch(&mut s, Action::ScreenSet(Screen::Live));

    let before = s.live.store.len();
    dispatch(&mut s, Action::Live(CalendarAction::Create));
    {
        let drawer = s.drawer.as_mut().expect("drawer open");
        let title = drawer
            .fields
            .iter_mut()
            .find(|f| f.label == "Title")
            .expect("title field");
        title.value = "Broker Breakfast".into();
    }
    dispatch(&mut s, Action::Drawer(DrawerAction::Save));

    assert_eq!(s.live.store.len(), before + 1);
    let created = &s.live.store.records()[0];
    assert_eq!(created.title, "Broker Breakfast");
    // Prefilled on the focused day (ev_1003 on the 15th), so the new event
    // is part of the August window.
    let window =
        clubdeck_core::calendar::month_window(s.live.store.records(), s.live.calendar.date);
    assert!(window.iter().any(|e| e.title == "Broker Breakfast"));
}

#[test]
fn blocked_campaign_save_keeps_the_form_and_the_store_intact() {
    let mut s = state();
    dispatch(&mut s, Action::ScreenSet(Screen::Messaging));
    let before = s.messaging.store.len();

    dispatch(&mut s, Action::Campaigns(ListAction::Create));
    dispatch(&mut s, Action::Drawer(DrawerAction::Save));
    assert!(s.drawer.is_some(), "validation keeps the drawer open");
    assert_eq!(s.messaging.store.len(), before);

    // Filling the name unblocks the save.
    {
        let drawer = s.drawer.as_mut().expect("drawer open");
        drawer.fields[0].value = "Labor Day Push".into();
    }
    dispatch(&mut s, Action::Drawer(DrawerAction::Save));
    assert!(s.drawer.is_none());
    assert_eq!(s.messaging.store.len(), before + 1);
    assert_eq!(s.messaging.store.records()[0].name, "Labor Day Push");
}

#[test]
fn sync_round_trip_updates_the_panel_and_cancel_does_not() {
    let mut s = state();

    let result = dispatch(&mut s, Action::SyncStart);
    assert_eq!(result.effects, vec![Effect::StartPartnerSync]);

    // Cancel inside the window: back to idle, nothing logged.
    let logs = s.deals.sync.logs.len();
    let result = dispatch(&mut s, Action::SyncCancel);
    assert_eq!(result.effects, vec![Effect::CancelPartnerSync]);
    assert_eq!(s.deals.sync.logs.len(), logs);
    assert!(s.deals.sync.last_sync.is_some());

    // A full round trip stamps the panel.
    dispatch(&mut s, Action::SyncStart);
    let finished_at = NaiveDate::from_ymd_opt(2025, 8, 22)
        .and_then(|d| d.and_hms_opt(16, 45, 0))
        .expect("valid");
    dispatch(
        &mut s,
        Action::SyncDidFinish {
            finished_at,
            message: "Fetched 1 new offer, updated 2, 0 errors.".into(),
        },
    );
    assert_eq!(s.deals.sync.last_sync, Some(finished_at));
    assert_eq!(s.deals.sync.logs[0].message, "Fetched 1 new offer, updated 2, 0 errors.");
}
