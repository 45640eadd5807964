//! The pagination loop.
//!
//! [`page_stream`] drives a list operation page by page: set the continuation
//! token on the request, invoke once, extract the next token, and decide
//! whether to continue. Pages are yielded as they arrive, so memory is
//! bounded to one page and a caller observes partial results even when a
//! later page fails.
//!
//! Pagination is strictly sequential. Each call depends on the token the
//! previous call returned, so no two calls for one invocation are ever in
//! flight at once. The server's token is authoritative: the loop imposes no
//! iteration bound of its own.

use crate::error::OperationError;
use crate::invoke::{call_cancellable, ServiceClient};
use crate::op::OpSpec;
use crate::request;
use futures::stream::{self, Stream};
use serde_json::Value;
use tokio_util::sync::CancellationToken;

/// Whether the loop iterates until the token is exhausted, or stops after
/// exactly one page.
///
/// Single-page mode is selected either by the explicit manual-pagination flag
/// or by the caller binding a starting token; the two signals are
/// deliberately interchangeable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaginationMode {
    /// Follow continuation tokens until the service stops returning one.
    Auto,
    /// Fetch exactly one page, whatever the response token says.
    SinglePage,
}

enum TokenState {
    Start,
    Next(String),
    Done,
}

struct LoopState {
    request: Value,
    token: TokenState,
    pages: usize,
}

/// Streams the responses of a (possibly paginated) operation.
///
/// The request is built once by the caller and reused across iterations;
/// only its continuation-token field is mutated between calls. A fetch
/// failure ends the stream with that error; pages already yielded stand.
/// Cancellation is checked before each fetch and raced against the in-flight
/// call, and ends the stream without an error.
pub fn page_stream<'a>(
    client: &'a dyn ServiceClient,
    spec: &'a OpSpec,
    request: Value,
    mode: PaginationMode,
    cancel: CancellationToken,
) -> impl Stream<Item = Result<Value, OperationError>> + 'a {
    let state = LoopState {
        request,
        token: TokenState::Start,
        pages: 0,
    };

    stream::try_unfold(state, move |mut state| {
        let cancel = cancel.clone();
        async move {
            if matches!(state.token, TokenState::Done) {
                return Ok(None);
            }
            if cancel.is_cancelled() {
                tracing::debug!(
                    operation = %spec.qualified_name(),
                    pages = state.pages,
                    "pagination cancelled before next fetch"
                );
                return Ok(None);
            }

            if let TokenState::Next(token) = &state.token {
                if let Some(param) = spec.token_param {
                    request::set_token(&mut state.request, param, token);
                }
            }

            let response = match call_cancellable(client, spec, &state.request, &cancel).await? {
                Some(response) => response,
                // Cancelled mid-flight: normal abort, nothing more to yield.
                None => return Ok(None),
            };
            state.pages += 1;

            let next = spec
                .token_field
                .and_then(|field| response.get(field))
                .and_then(Value::as_str)
                .filter(|token| !token.is_empty())
                .map(str::to_string);

            state.token = match (mode, next) {
                (PaginationMode::SinglePage, _) => TokenState::Done,
                (PaginationMode::Auto, Some(token)) => {
                    tracing::trace!(
                        operation = %spec.qualified_name(),
                        page = state.pages,
                        "continuation token present, fetching next page"
                    );
                    TokenState::Next(token)
                }
                (PaginationMode::Auto, None) => {
                    tracing::debug!(
                        operation = %spec.qualified_name(),
                        pages = state.pages,
                        "pagination complete"
                    );
                    TokenState::Done
                }
            };

            Ok(Some((response, state)))
        }
    })
}
