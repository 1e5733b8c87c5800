//! Application actions
//!
//! Naming follows the two-phase convention: intent actions trigger work
//! (`SyncStart`), `Did*` actions carry results back from tasks and effect
//! handlers (`SyncDidFinish`, `ExportDidWrite`).

use std::path::PathBuf;

use chrono::NaiveDateTime;

use clubdeck_core::calendar::CalendarView;

use crate::state::{Screen, SupportTab};

/// Actions shared by every table screen. The enclosing [`Action`] variant
/// decides which screen's controls they hit.
#[derive(Clone, Debug, PartialEq)]
pub enum ListAction {
    QueryChange(String),
    SearchFocus(bool),
    /// Cycle the n-th facet dimension of the screen.
    FacetCycle(usize),
    PageNext,
    PagePrev,
    CursorUp,
    CursorDown,
    /// Toggle selection of the focused row.
    ToggleRow,
    /// Page-scoped select-all toggle.
    ToggleVisible,
    /// Open the focused row in the drawer (or create when none).
    Open,
    Create,
    Export,
    /// Bulk message over the selection (members screen).
    Message,
    /// Domain status operation on the focused row (pause offer,
    /// resolve ticket).
    StatusFlip,
}

#[derive(Clone, Debug, PartialEq)]
pub enum CalendarAction {
    Prev,
    Next,
    Today,
    View(CalendarView),
    CursorUp,
    CursorDown,
    /// Edit the focused event in the drawer.
    Open,
    /// Create a new event, prefilled on the focused day when any.
    Create,
    Export,
    /// Advance the focused event Scheduled -> Live -> Ended.
    StatusAdvance,
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawerAction {
    /// Replace the focused field's value.
    FieldInput(String),
    FocusNext,
    FocusPrev,
    Save,
    Cancel,
}

#[derive(Clone, Debug, PartialEq)]
pub enum StudioAction {
    GoLive,
    EndSession,
    ToggleMic,
    ToggleCam,
    ToggleScreen,
    ToggleRecording,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    ScreenSet(Screen),
    SupportTabSet(SupportTab),

    Members(ListAction),
    Deals(ListAction),
    Tickets(ListAction),
    Media(ListAction),
    Campaigns(ListAction),

    Live(CalendarAction),
    Drawer(DrawerAction),
    Studio(StudioAction),

    // Partner-network sync simulation
    SyncStart,
    SyncCancel,
    SyncDidFinish {
        finished_at: NaiveDateTime,
        message: String,
    },

    // Export results from the effect handler
    ExportDidWrite(PathBuf),
    ExportDidError(String),

    ToastClear,
    Tick,
    Quit,
}

impl crate::dispatch::Action for Action {
    fn name(&self) -> &'static str {
        match self {
            Action::ScreenSet(_) => "ScreenSet",
            Action::SupportTabSet(_) => "SupportTabSet",
            Action::Members(_) => "Members",
            Action::Deals(_) => "Deals",
            Action::Tickets(_) => "Tickets",
            Action::Media(_) => "Media",
            Action::Campaigns(_) => "Campaigns",
            Action::Live(_) => "Live",
            Action::Drawer(_) => "Drawer",
            Action::Studio(_) => "Studio",
            Action::SyncStart => "SyncStart",
            Action::SyncCancel => "SyncCancel",
            Action::SyncDidFinish { .. } => "SyncDidFinish",
            Action::ExportDidWrite(_) => "ExportDidWrite",
            Action::ExportDidError(_) => "ExportDidError",
            Action::ToastClear => "ToastClear",
            Action::Tick => "Tick",
            Action::Quit => "Quit",
        }
    }
}
