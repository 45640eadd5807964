//! Invocation runner.
//!
//! Wires the pieces together for one invocation: build the request, stream
//! pages, project each page, and hand values to the caller's sink as soon as
//! their page arrives. The echo projection's single value is emitted after
//! pagination completes, evaluated against no response.

use crate::error::Result;
use crate::invoke::ServiceClient;
use crate::page::page_stream;
use crate::params::Invocation;
use crate::request::build_request;
use futures::TryStreamExt;
use serde_json::Value;
use tokio_util::sync::CancellationToken;

/// Summary of a completed (or partially completed) run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Pages fetched from the service.
    pub pages: usize,
    /// Values handed to the sink.
    pub emitted: usize,
}

/// Executes one invocation against `client`, streaming projected values into
/// `sink`.
///
/// Values reach the sink incrementally, page by page; when a later page
/// fails, everything already emitted stands and the error is returned.
/// Cancellation ends the run with no output beyond what was already emitted,
/// so the echo value is withheld too: it is due only after pagination runs to
/// completion. The confirmation gate for mutating operations runs before this
/// function (see [`crate::confirm`]); by the time a request is built the
/// invocation is committed.
pub async fn run_invocation(
    client: &dyn ServiceClient,
    invocation: &Invocation,
    cancel: CancellationToken,
    mut sink: impl FnMut(Value),
) -> Result<RunStats> {
    let request = build_request(&invocation.params, invocation.spec)?;
    let mut stats = RunStats::default();

    let pages = page_stream(
        client,
        invocation.spec,
        request,
        invocation.mode,
        cancel.clone(),
    );
    tokio::pin!(pages);

    while let Some(page) = pages.try_next().await? {
        stats.pages += 1;
        for value in invocation.projection.project_page(invocation.spec, &page) {
            stats.emitted += 1;
            sink(value);
        }
    }

    if cancel.is_cancelled() {
        return Ok(stats);
    }

    if let Some(value) = invocation.projection.final_value(&invocation.params) {
        stats.emitted += 1;
        sink(value);
    }

    tracing::debug!(
        operation = %invocation.spec.qualified_name(),
        pages = stats.pages,
        emitted = stats.emitted,
        "invocation finished"
    );
    Ok(stats)
}
