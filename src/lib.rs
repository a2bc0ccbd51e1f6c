//! Terminal data widgets built on ratatui.
//!
//! [`DataTable`] renders rows through typed columns with pagination, a
//! page-scoped select-all checkbox and per-row edit/delete actions.
//! [`ChipSelector`] is a multi-select over toggle chips that can also accept
//! new values. Both are stateful widgets: hosts own the data and selections,
//! keep the transient state, and apply the events returned from `handle_key`.
//!
//! The [`app`] module hosts both widgets over a [`Dataset`] and backs the
//! `ffui` binary.

pub mod app;
pub mod app_dirs;
pub mod chips;
pub mod dataset;
pub mod logging;
pub mod table;
pub mod theme;

pub use app::{App, AppOptions, Outcome, run};
pub use chips::{ChipEvent, ChipSelector, ChipSelectorState};
pub use dataset::{Dataset, DatasetError};
pub use table::{DataTable, DataTableState, TableEvent};
pub use theme::Theme;
