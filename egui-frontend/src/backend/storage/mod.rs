//! Local persistence for the dashboard.

pub mod json_store;

pub use json_store::{default_export_name, read_state, write_state, JsonStore, StorageError};
