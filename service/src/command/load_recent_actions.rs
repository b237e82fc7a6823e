//! [`Command`] for turning recent [`notification::Action`]s into
//! [`Notification`]s.

use std::convert::Infallible;

use derive_more::From;

use crate::{
    domain::{notification, Notification},
    Service,
};

use super::Command;

/// [`Command`] for merging recent [`notification::Action`]s into the held
/// [`Notification`]s.
///
/// Already held [`notification::Action`]s are skipped, the result is ordered
/// newest first and capped at the configured maximum.
#[derive(Clone, Debug, From)]
pub struct LoadRecentActions(pub Vec<notification::Action>);

impl<A> Command<LoadRecentActions> for Service<A> {
    /// Resulting number of unread [`Notification`]s.
    type Ok = usize;
    type Err = Infallible;

    async fn execute(
        &self,
        LoadRecentActions(actions): LoadRecentActions,
    ) -> Result<Self::Ok, Self::Err> {
        let recent = actions.into_iter().map(Notification::from).collect();

        let mut store = self.store().write().await;
        store
            .notifications
            .load_recent(recent, self.config().max_notifications);
        Ok(store.notifications.unread_count())
    }
}
