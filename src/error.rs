//! Error types for awscmd.
//!
//! Errors are split into two kinds so callers can tell bad input apart from
//! remote failure without inspecting message text:
//!
//! - [`ValidationError`]: a problem detected locally, before any remote call
//!   is attempted (missing parameter, malformed selector, unknown operation).
//! - [`OperationError`]: the remote call itself failed, either because the
//!   service reported an error or because the transport did.
//!
//! Both fold into the top-level [`Error`] for CLI reporting.

use thiserror::Error;

/// Result type alias for awscmd operations.
pub type Result<T> = std::result::Result<T, Error>;

/// A problem with the caller's input, detected before any remote call.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// A required parameter was not bound.
    #[error("Missing required parameter: {0}")]
    MissingParameter(String),

    /// A parameter was bound but its value is unusable.
    #[error("Invalid parameter '{name}': {message}")]
    InvalidParameter {
        /// Parameter name
        name: String,
        /// What was wrong with it
        message: String,
    },

    /// A bound parameter is not recognized by the target operation.
    #[error("Unknown parameter '{name}' for {operation}")]
    UnknownParameter {
        /// Parameter name
        name: String,
        /// Qualified operation name
        operation: String,
    },

    /// No operation with this name exists in the catalog.
    #[error("Unknown operation '{0}' (see `awscmd list-ops`)")]
    UnknownOperation(String),

    /// The `--select` directive names a response field the operation
    /// does not produce.
    #[error("Unknown response field '{field}' for {operation}; known fields: {known}")]
    UnknownField {
        /// Requested field
        field: String,
        /// Qualified operation name
        operation: String,
        /// Comma-joined list of valid fields
        known: String,
    },

    /// The `^Name` echo selector references a parameter that was not bound.
    #[error("Selector '^{0}' does not reference a bound parameter")]
    UnboundEchoParameter(String),

    /// The `--select` directive could not be parsed at all.
    #[error("Malformed selector: {0}")]
    MalformedSelector(String),

    /// A mutating operation needs confirmation but stdin is not a terminal.
    #[error("'{0}' changes remote state and requires confirmation; pass --force to proceed non-interactively")]
    ConfirmationRequired(String),
}

/// A failure reported by (or on the way to) the remote service.
#[derive(Error, Debug)]
pub enum OperationError {
    /// The service rejected the call. The service-provided message is
    /// passed through unchanged.
    #[error("{operation} failed ({code}): {message}")]
    Service {
        /// Qualified operation name
        operation: String,
        /// Service error code (e.g. `ResourceNotFoundException`)
        code: String,
        /// Service-provided message, verbatim
        message: String,
    },

    /// The endpoint host could not be resolved. The raw transport error is
    /// kept as the cause; only the headline message is enriched.
    #[error("Unable to resolve endpoint host '{host}' while calling {operation}; verify the endpoint URL and network configuration")]
    NameResolution {
        /// Qualified operation name
        operation: String,
        /// Host we tried to resolve
        host: String,
        /// Original transport error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Any other transport-level failure (connect, TLS, timeout, ...).
    #[error("Transport failure during {operation}: {message}")]
    Transport {
        /// Qualified operation name
        operation: String,
        /// Short description
        message: String,
        /// Original transport error, when available
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The service answered, but not with a body we can interpret.
    #[error("Malformed response from {operation}: {message}")]
    MalformedResponse {
        /// Qualified operation name
        operation: String,
        /// What failed to parse
        message: String,
    },
}

impl OperationError {
    /// Creates a service-reported error.
    pub fn service(
        operation: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::Service {
            operation: operation.into(),
            code: code.into(),
            message: message.into(),
        }
    }

    /// Creates an enriched name-resolution error, chaining the original cause.
    pub fn name_resolution(
        operation: impl Into<String>,
        host: impl Into<String>,
        source: Box<dyn std::error::Error + Send + Sync>,
    ) -> Self {
        Self::NameResolution {
            operation: operation.into(),
            host: host.into(),
            source,
        }
    }

    /// Creates a generic transport error.
    pub fn transport(
        operation: impl Into<String>,
        message: impl Into<String>,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::Transport {
            operation: operation.into(),
            message: message.into(),
            source,
        }
    }
}

/// The main error type for awscmd.
#[derive(Error, Debug)]
pub enum Error {
    /// Bad input, caught locally. No remote call was made.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The remote call failed. Pages emitted before the failure stand.
    #[error(transparent)]
    Operation(#[from] OperationError),

    /// The user declined the confirmation prompt. Not a failure.
    #[error("Aborted by user; no call was made")]
    Aborted,

    /// An interactive prompt could not be displayed or read.
    #[error("Prompt failed: {0}")]
    Prompt(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// TOML parsing error (configuration file).
    #[error("Config parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Returns the error code for CLI exit status.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Aborted => 0,
            Error::Validation(_) => 2,
            Error::Operation(_) => 3,
            Error::Config(_) | Error::TomlParse(_) => 4,
            _ => 1,
        }
    }

    /// True when this error means the caller's input was rejected locally.
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation(_))
    }
}
