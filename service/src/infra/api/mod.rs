//! Remote [`Api`]-related implementations.

#[cfg(test)]
pub(crate) mod fake;
#[cfg(feature = "rest")]
pub mod rest;

use std::collections::BTreeMap;

use derive_more::{Display, Error as StdError};

#[cfg(feature = "rest")]
pub use self::rest::Rest;

/// Remote API operation.
pub use common::Handler as Api;

/// [`Api`] error.
#[derive(Clone, Debug, Display, StdError)]
pub enum Error {
    /// Request failed to get any response.
    #[display("Request failed: {_0}")]
    Transport(#[error(not(source))] String),

    /// Request was rejected because of invalid data.
    #[display("Validation failed: {message}")]
    Validation {
        /// Overall message.
        message: String,

        /// Field-level messages.
        fields: BTreeMap<String, Vec<String>>,
    },

    /// Requested entity doesn't exist.
    #[display("Not found")]
    NotFound,

    /// Request failed with an unexpected HTTP status.
    #[display("HTTP {status}: {message}")]
    Status {
        /// HTTP status code.
        status: u16,

        /// Message describing the failure.
        message: String,
    },

    /// Request URL or response body is malformed.
    #[display("Malformed request or response: {_0}")]
    Malformed(#[error(not(source))] String),
}

impl Error {
    /// Returns the HTTP status code of this [`Error`], if any.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Validation { .. } => Some(400),
            Self::NotFound => Some(404),
            Self::Status { status, .. } => Some(*status),
            Self::Transport(_) | Self::Malformed(_) => None,
        }
    }

    /// Indicates whether this [`Error`] means a missing entity.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }
}
