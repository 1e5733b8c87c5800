//! Core building blocks for the clubdeck admin console
//!
//! Every list screen in clubdeck is an instance of the same pipeline:
//!
//! ```text
//! RecordStore -> filter::apply -> PageWindow -> rendered rows
//!                                    |
//!                             SelectionSet -> CsvDoc -> export
//! ```
//!
//! plus the calendar view-model for event-typed records. Everything in this
//! crate is pure and synchronous: no I/O, no async, no terminal types. The
//! TUI crate owns the wiring (actions, reducers, effects) and the only
//! fallible operation in the workspace (writing an export file).
//!
//! # Concepts
//!
//! - **Record**: an entity with a stable string id, held in insertion order
//!   by a [`store::RecordStore`]
//! - **Facet**: a discrete filter dimension with a distinguished "All" value
//! - **Query**: free text matched case-insensitively against a fixed set of
//!   fields per record kind
//! - **PageWindow**: a 1-based, clamped slice over the filtered sequence
//! - **SelectionSet**: id-keyed marks that survive filter and page changes
//! - **CsvDoc**: a header row plus projected record rows, quoted per
//!   RFC-4180 minimal escaping
//! - **CalendarCursor**: a reference date plus view mode; month/week/list
//!   grids are pure functions of it

pub mod calendar;
pub mod csv;
pub mod filter;
pub mod page;
pub mod select;
pub mod store;

pub use calendar::{start_of_week, CalendarCursor, CalendarView, Scheduled};
pub use csv::{export_filename, Column, CsvDoc};
pub use filter::{contains_ignore_case, Facet, Searchable};
pub use page::PageWindow;
pub use select::SelectionSet;
pub use store::{IdGen, Record, RecordStore};
