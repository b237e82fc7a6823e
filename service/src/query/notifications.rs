//! [`Query`] collection related to [`Notification`]s.

use std::convert::Infallible;

use crate::{domain::Notification, store::FetchDateTime, Service};

use super::Query;

/// [`Query`] of the held [`Notification`]s, newest first.
#[derive(Clone, Copy, Debug, Default)]
pub struct NotificationList {
    /// Indicator whether only unread [`Notification`]s should be returned.
    pub unread_only: bool,

    /// Maximum number of [`Notification`]s to return.
    pub limit: Option<usize>,
}

/// Output of the [`NotificationList`] [`Query`].
#[derive(Clone, Debug, PartialEq)]
pub struct Output {
    /// Selected [`Notification`]s.
    pub items: Vec<Notification>,

    /// Number of all the unread [`Notification`]s.
    pub unread_count: usize,

    /// Time the [`Notification`]s were fetched last time, if ever.
    pub last_fetched: Option<FetchDateTime>,
}

impl<A> Query<NotificationList> for Service<A> {
    type Ok = Output;
    type Err = Infallible;

    async fn execute(
        &self,
        query: NotificationList,
    ) -> Result<Self::Ok, Self::Err> {
        let NotificationList { unread_only, limit } = query;

        let store = self.store().read().await;
        let notifications = &store.notifications;
        Ok(Output {
            items: notifications
                .items()
                .iter()
                .filter(|n| !unread_only || !n.read)
                .take(limit.unwrap_or(usize::MAX))
                .cloned()
                .collect(),
            unread_count: notifications.unread_count(),
            last_fetched: notifications.last_fetched,
        })
    }
}
