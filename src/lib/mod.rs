//! Shared frontend utilities for API access, configuration, errors, dates, and
//! build metadata.
//!
//! All network traffic goes through the helpers in [`api`]: JSON in and out, a
//! fixed timeout on every request, and `Authorization: Bearer` headers for
//! session-authenticated endpoints. Collection endpoints wrap their payload in
//! a `{ "data": ... }` envelope; the singular user endpoint returns the
//! resource unwrapped. Centralizing these helpers keeps network behavior
//! consistent and avoids duplicated logic in routes and features.

pub(crate) mod api;
pub(crate) mod build_info;
pub(crate) mod config;
pub(crate) mod dates;
pub(crate) mod errors;
pub(crate) mod theme;

pub(crate) use api::{
    Envelope, delete_with_bearer, get_json_with_bearer, post_empty_with_bearer,
    post_empty_with_bearer_response, post_json_response, post_json_with_bearer_response,
    put_json_with_bearer, put_json_with_bearer_response,
};
pub(crate) use errors::AppError;
