//! UI components
//!
//! Every component follows the same contract: props carry all read-only
//! data, `handle_event` translates key presses into actions through the
//! `on_*` constructors in its props, and `render` draws from props plus
//! internal UI state (text cursors, scroll offsets) only.

pub mod calendar_board;
pub mod form_drawer;
pub mod records_table;
pub mod search_box;
pub mod status_bar;
pub mod studio_panel;
pub mod tab_bar;

pub use calendar_board::{CalendarBoard, CalendarBoardProps};
pub use form_drawer::{FormDrawer, FormDrawerProps};
pub use records_table::{RecordsTable, RecordsTableProps, TableRow};
pub use search_box::{SearchBox, SearchBoxProps};
pub use status_bar::{StatusBar, StatusBarProps};
pub use studio_panel::{StudioPanel, StudioPanelProps};
pub use tab_bar::{TabBar, TabBarProps};
