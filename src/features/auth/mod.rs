//! Auth feature covering the session lifecycle: credential exchange, session
//! restore from durable storage, email-verification gating, and password
//! reset. It keeps authentication logic out of the UI and must stay aligned
//! with the API's bearer-token expectations. This module touches security
//! boundaries and must avoid logging token material.
//!
//! Flow Overview: Login exchanges credentials for a bearer token and persists
//! the session. On startup the session is adopted from storage and revalidated
//! against the live user record once before verification-gated routes are
//! trusted. Logout best-effort invalidates the token and always clears state.

pub(crate) mod client;
pub(crate) mod guards;
pub(crate) mod state;
pub(crate) mod storage;
pub(crate) mod types;
