//! Core types and configuration for Rusturk.
//!
//! This crate holds the pieces every other Rusturk crate agrees on: the
//! requester [`Credentials`], the [`Endpoint`] a client talks to, the fixed
//! service identity constants, and the [`MTurkConfig`] value a client is
//! built from. Nothing here is process-global; each client owns its own
//! configuration.

mod config;
mod error;
mod types;

pub use config::MTurkConfig;
pub use error::{CoreError, CoreResult};
pub use types::{Credentials, Endpoint, SERVICE_NAME, SERVICE_VERSION};
