//! Modal dialogs for the TUI

pub mod bucket_detail;
pub mod help;
