//! Database models backing the catalog repositories.

pub mod comedian;
pub mod config;
pub mod show;
pub mod venue;
