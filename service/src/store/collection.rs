//! [`Collection`] of remotely loaded items and its request [`Tracker`].

use std::collections::BTreeMap;

use derive_more::Display;

use crate::infra::api;

/// Token of a single request, monotonically increasing per [`Tracker`].
#[derive(Clone, Copy, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Ticket(u64);

/// Loading status of a [`Tracker`].
#[derive(Clone, Copy, Debug, Default, Display, Eq, Hash, PartialEq)]
pub enum Status {
    /// Nothing was requested yet.
    #[default]
    #[display("idle")]
    Idle,

    /// Request is in flight.
    #[display("loading")]
    Loading,

    /// The last request succeeded.
    #[display("succeeded")]
    Succeeded,

    /// The last request failed.
    #[display("failed")]
    Failed,
}

/// Recorded failure of a request.
#[derive(Clone, Debug, Default, Display, Eq, PartialEq)]
#[display("{message}")]
pub struct Failure {
    /// Human-readable message.
    pub message: String,

    /// HTTP status code, if the request got any response.
    pub status: Option<u16>,

    /// Field-level validation messages.
    pub fields: BTreeMap<String, Vec<String>>,
}

impl Failure {
    /// Creates a new [`Failure`] with the provided `message` only.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Self::default()
        }
    }
}

impl From<&api::Error> for Failure {
    fn from(e: &api::Error) -> Self {
        let (message, fields) = match e {
            api::Error::Validation { message, fields } => {
                (message.clone(), fields.clone())
            }
            api::Error::Transport(_)
            | api::Error::NotFound
            | api::Error::Status { .. }
            | api::Error::Malformed(_) => (e.to_string(), BTreeMap::new()),
        };
        Self {
            message,
            status: e.status(),
            fields,
        }
    }
}

/// Tracker of requests issued for some remote state.
///
/// Only the response to the most recently issued [`Ticket`] is accepted, so
/// a stale response never overwrites a newer one.
#[derive(Clone, Debug, Default)]
pub struct Tracker {
    /// Current [`Status`].
    status: Status,

    /// [`Failure`] of the last request, if it failed.
    error: Option<Failure>,

    /// Number of the last issued [`Ticket`].
    issued: u64,
}

impl Tracker {
    /// Issues a new [`Ticket`], switching to [`Status::Loading`].
    pub fn begin(&mut self) -> Ticket {
        self.issued += 1;
        self.status = Status::Loading;
        self.error = None;
        Ticket(self.issued)
    }

    /// Indicates whether the provided [`Ticket`] is the last issued one.
    #[must_use]
    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.issued
    }

    /// Records success of the request with the provided [`Ticket`].
    ///
    /// Returns `false` (doing nothing) if the [`Ticket`] is stale.
    pub fn succeed(&mut self, ticket: Ticket) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.status = Status::Succeeded;
        self.error = None;
        true
    }

    /// Records [`Failure`] of the request with the provided [`Ticket`].
    ///
    /// Returns `false` (doing nothing) if the [`Ticket`] is stale.
    pub fn fail(&mut self, ticket: Ticket, failure: Failure) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.status = Status::Failed;
        self.error = Some(failure);
        true
    }

    /// Returns the current [`Status`].
    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    /// Indicates whether a request is in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.status == Status::Loading
    }

    /// Returns [`Failure`] of the last request, if it failed.
    #[must_use]
    pub fn error(&self) -> Option<&Failure> {
        self.error.as_ref()
    }
}

/// Collection of remotely loaded items.
#[derive(Clone, Debug)]
pub struct Collection<T> {
    /// Loaded items.
    items: Vec<T>,

    /// [`Tracker`] of the requests loading the items.
    tracker: Tracker,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            tracker: Tracker::default(),
        }
    }
}

impl<T> Collection<T> {
    /// Issues a new [`Ticket`] for loading the items.
    pub fn begin(&mut self) -> Ticket {
        self.tracker.begin()
    }

    /// Replaces the items with the provided ones, if the [`Ticket`] is
    /// current.
    ///
    /// Returns `false` (doing nothing) if the [`Ticket`] is stale.
    pub fn succeed(&mut self, ticket: Ticket, items: Vec<T>) -> bool {
        if !self.tracker.succeed(ticket) {
            return false;
        }
        self.items = items;
        true
    }

    /// Records the [`Failure`], keeping the previously loaded items.
    ///
    /// Returns `false` (doing nothing) if the [`Ticket`] is stale.
    pub fn fail(&mut self, ticket: Ticket, failure: Failure) -> bool {
        self.tracker.fail(ticket, failure)
    }

    /// Returns the loaded items.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Returns the loaded items for in-place modification.
    pub fn items_mut(&mut self) -> &mut Vec<T> {
        &mut self.items
    }

    /// Returns the [`Tracker`] of this [`Collection`].
    #[must_use]
    pub fn tracker(&self) -> &Tracker {
        &self.tracker
    }

    /// Returns the current [`Status`].
    #[must_use]
    pub fn status(&self) -> Status {
        self.tracker.status()
    }

    /// Returns [`Failure`] of the last request, if it failed.
    #[must_use]
    pub fn error(&self) -> Option<&Failure> {
        self.tracker.error()
    }
}
