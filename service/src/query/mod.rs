//! [`Query`] definition.
//!
//! [`Query`]s only read the [`Store`] of the [`Service`] and never reach
//! the remote side.
//!
//! [`Service`]: crate::Service
//! [`Store`]: crate::Store

pub mod leads;
pub mod notifications;
pub mod properties;
pub mod saves;

/// [`Query`] of the [`Service`].
///
/// [`Service`]: crate::Service
pub use common::Handler as Query;

pub use self::{
    leads::OrphanedLeads,
    notifications::NotificationList,
    properties::{ActiveFilters, Pagination, PropertyListing, PropertyMarkers},
    saves::{RecentlyViewed, SavedProperties},
};
