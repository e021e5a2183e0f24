//! Terminal User Interface module
//!
//! Interactive dashboard built on ratatui: statistic cards, project filters,
//! a monthly totals chart and the monthly aggregation table. Loads run on a
//! worker thread and arrive through the event channel.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub mod keybindings;

pub use app::App;
pub use terminal::run_tui;
