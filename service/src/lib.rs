//! Service contains the client-side business logic of the listing
//! application: domain model, owned state, derived views and the remote
//! [`Api`] seam.
//!
//! List of available Cargo features:
#![doc = document_features::document_features!()]
#![deny(
    nonstandard_style,
    rust_2018_idioms,
    rustdoc::all,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code
)]
#![forbid(non_ascii_idents)]
#![warn(
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason,
    clippy::pedantic,
    clippy::wildcard_enum_match_arm,
    deprecated_in_future,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unreachable_pub,
    unused_crate_dependencies,
    unused_import_braces,
    unused_labels,
    unused_lifetimes,
    unused_qualifications,
    unused_results
)]

pub mod command;
pub mod domain;
pub mod geocode;
pub mod infra;
pub mod query;
pub mod read;
pub mod store;
pub mod task;

use std::{sync::Arc, time::Duration};

use smart_default::SmartDefault;
use tokio::sync::{broadcast, RwLock};

#[cfg(doc)]
use infra::Api;
use read::property::list;

pub use self::{
    command::Command,
    query::Query,
    store::{Event, Store},
    task::Task,
};

/// [`Service`] configuration.
#[derive(Clone, Copy, Debug, SmartDefault)]
pub struct Config {
    /// Number of [`domain::Property`]s requested per page.
    #[default(20)]
    pub page_size: u32,

    /// Duration a fetched [`domain::Property`] page is reused for the same
    /// request.
    #[default(Duration::from_secs(30))]
    pub cache_ttl: Duration,

    /// Maximum number of [`domain::Notification`]s held after loading recent
    /// activity.
    #[default(50)]
    pub max_notifications: usize,

    /// Maximum number of page numbers shown around the current page.
    #[default(5)]
    pub page_window: u32,

    /// [`task::PollNotifications`] configuration.
    pub poll_notifications: task::poll_notifications::Config,
}

/// Capacity of the [`Event`]s channel.
const EVENTS_CAPACITY: usize = 256;

/// Client-side domain service.
#[derive(Clone, Debug)]
pub struct Service<A> {
    /// Configuration of this [`Service`].
    config: Config,

    /// [`Api`] of this [`Service`].
    api: A,

    /// Owned [`Store`] of this [`Service`].
    store: Arc<RwLock<Store>>,

    /// Sender of [`Store`] change [`Event`]s.
    events: broadcast::Sender<Event>,
}

impl<A> Service<A> {
    /// Creates a new [`Service`] with the provided parameters and an empty
    /// [`Store`].
    #[expect(clippy::missing_panics_doc, reason = "infallible")]
    pub fn new(config: Config, api: A) -> Self {
        let arguments = list::Arguments::first(config.page_size.max(1))
            .expect("non-zero page size");
        let (events, _) = broadcast::channel(EVENTS_CAPACITY);
        Self {
            config,
            api,
            store: Arc::new(RwLock::new(Store::new(arguments))),
            events,
        }
    }

    /// Returns [`Config`] of this [`Service`].
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns [`Api`] of this [`Service`].
    #[must_use]
    pub fn api(&self) -> &A {
        &self.api
    }

    /// Returns [`Store`] of this [`Service`].
    ///
    /// The lock must never be held across an `.await` point of an [`Api`]
    /// call.
    #[must_use]
    pub fn store(&self) -> &RwLock<Store> {
        &self.store
    }

    /// Subscribes to [`Event`]s of this [`Service`].
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.events.subscribe()
    }

    /// Broadcasts the provided [`Event`] to the current subscribers.
    pub(crate) fn emit(&self, event: Event) {
        // No subscribers is fine.
        _ = self.events.send(event);
    }
}
