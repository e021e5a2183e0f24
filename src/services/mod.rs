//! Service layer for expense-dash
//!
//! The service layer turns a fetched payload into dashboard state: ingestion,
//! the project registry, the selection and the load controller that ties
//! them together.

pub mod dashboard;
pub mod ingest;
pub mod registry;
pub mod selection;

pub use dashboard::{Dashboard, Dataset, LoadOutcome, LoadTicket};
pub use ingest::RecordSet;
pub use registry::ProjectSet;
pub use selection::SelectionState;
