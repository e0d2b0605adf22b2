//! Domain-level frontend features and their shared logic. Routes import these
//! modules to keep view code focused while keeping session handling and API
//! access in dedicated feature areas.

pub(crate) mod auth;
pub(crate) mod groups;
pub(crate) mod practices;
pub(crate) mod profile;
pub(crate) mod responses;
pub(crate) mod schedules;
pub(crate) mod surveys;
