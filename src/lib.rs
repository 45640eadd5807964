//! # awscmd - a paginated AWS operation invoker
//!
//! awscmd wraps AWS service operations behind a single client-side pattern:
//! capture the caller's parameters once, build a wire request from them,
//! invoke the operation page by page, and project each response through a
//! user-selectable output shape.
//!
//! ## Core Concepts
//!
//! - **Invocation**: the immutable snapshot of one command's inputs
//! - **Operation spec**: declarative description of a remote operation
//!   (parameters, token fields, primary result collection)
//! - **Page iterator**: the continuation-token loop with a manual override
//! - **Projection**: the rule turning raw responses into emitted values
//! - **Confirmation gate**: one yes/no decision before any mutating call
//!
//! ## Control Flow
//!
//! ```text
//! Params ──▶ Invocation ──▶ Request Builder ──▶ ┌─────────────────┐
//!                                               │  Page Iterator  │◀──▶ ServiceClient
//!                                               └─────────────────┘
//!                                                        │ per page
//!                                                        ▼
//!                                                   Projection ──▶ emitted values
//! ```
//!
//! Pagination is strictly sequential: one request instance per invocation,
//! one call in flight, each call keyed by the token its predecessor
//! returned. Pages stream out as they arrive, so a failure on page N+1
//! never retracts the N pages already emitted.
//!
//! ## Quick Example
//!
//! ```rust,ignore
//! use awscmd::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let spec = services::lookup("transcoder", "ListJobsByPipeline").unwrap();
//!     let params = params::parse_pairs(&["PipelineId=1234".into()])?;
//!     let invocation = Invocation::build(spec, params, None, false, None, false)?;
//!
//!     let config = Config::load(None)?;
//!     let client = HttpServiceClient::from_config(&config, spec.service)?;
//!
//!     run_invocation(&client, &invocation, CancellationToken::new(), |job| {
//!         println!("{}", job);
//!     })
//!     .await?;
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

// Re-export commonly used items in prelude
pub mod prelude {
    //! Convenient re-exports of commonly used types and traits.

    pub use crate::config::Config;
    pub use crate::error::{Error, OperationError, Result, ValidationError};
    pub use crate::invoke::{HttpServiceClient, ServiceClient};
    pub use crate::op::OpSpec;
    pub use crate::page::PaginationMode;
    pub use crate::params::{Invocation, ParamExt, Params};
    pub use crate::run::{run_invocation, RunStats};
    pub use crate::select::Projection;
    pub use crate::services;
    pub use tokio_util::sync::CancellationToken;
}

// ============================================================================
// Core Modules
// ============================================================================

/// Error types and result aliases.
///
/// Two error kinds keep "bad input" and "remote failure" distinguishable
/// without message inspection: [`error::ValidationError`] (local, no call
/// made) and [`error::OperationError`] (the call failed).
pub mod error;

/// Declarative operation descriptions ([`op::OpSpec`]).
pub mod op;

/// Parameter capture and the immutable [`params::Invocation`] snapshot.
pub mod params;

/// Output projection: default collection, whole response, named field, or
/// input echo.
pub mod select;

// ============================================================================
// Request / Invoke / Paginate
// ============================================================================

/// Request building with unset-field omission and all-or-nothing nested
/// groups.
pub mod request;

/// The [`invoke::ServiceClient`] seam and the HTTP JSON transport.
///
/// One call per request, no retries at this layer; cancellation is raced
/// against the in-flight call.
pub mod invoke;

/// The continuation-token pagination loop.
pub mod page;

/// The invocation runner tying request, pages, and projection together.
pub mod run;

// ============================================================================
// Surroundings
// ============================================================================

/// Confirmation gate for mutating operations.
pub mod confirm;

/// Configuration loading and endpoint resolution.
pub mod config;

/// Output emission in human/JSON/YAML formats.
pub mod output;

/// The operation catalog: Elastic Transcoder, Cloud Map, Kinesis Video
/// WebRTC Storage.
pub mod services;

// ============================================================================
// Version Information
// ============================================================================

/// Returns the current version of awscmd.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
