//! Domain logic: balance projection, month appending, and totals.

pub mod aggregation;
pub mod entry_service;
pub mod projector;
