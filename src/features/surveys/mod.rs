//! Survey collection: typed payloads and REST wrappers.

pub(crate) mod client;
pub(crate) mod types;
