//! Domain aggregates exposed by the listings service layer.

pub mod comedian;
pub mod profile;
pub mod show;
pub mod venue;
