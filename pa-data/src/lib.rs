//! Chart data model and per-view table builders for presence statistics.
//!
//! This crate is pure data transformation, no I/O and no DOM:
//! - `time`: seconds-since-midnight to time-of-day conversion
//! - `table`: the normalized chart table model and its Google Charts
//!   DataTable JSON encoding
//! - `views`: one builder per chart view, turning a raw metric payload
//!   into a [`table::ChartTable`]

pub mod table;
pub mod time;
pub mod views;
