//! [`Command`] for marking a [`Notification`] as read.

use common::operations::{By, Update};
use derive_more::From;
use tracerr::Traced;

#[cfg(doc)]
use crate::domain::Notification;
use crate::{
    domain::notification,
    infra::{api, Api},
    store::mutation,
    Service,
};

use super::Command;

/// [`Command`] for marking a [`Notification`] as read.
///
/// Unread count is decremented right away. Already read (or unknown)
/// [`Notification`]s are left as is, and locally emitted ones are never
/// reported to the remote side.
#[derive(Clone, Debug, From)]
pub struct MarkNotificationRead {
    /// ID of the [`Notification`] to mark as read.
    pub id: notification::Id,
}

impl<A> Command<MarkNotificationRead> for Service<A>
where
    A: Api<
        Update<By<notification::Read, notification::Id>>,
        Ok = (),
        Err = Traced<api::Error>,
    >,
{
    /// Indicator whether the [`Notification`] was unread.
    type Ok = bool;
    type Err = ExecutionError;

    async fn execute(
        &self,
        MarkNotificationRead { id }: MarkNotificationRead,
    ) -> Result<Self::Ok, Self::Err> {
        if !self.store().write().await.notifications.mark_read(&id) {
            return Ok(false);
        }
        if id.is_local() {
            return Ok(true);
        }

        self.track(
            mutation::Kind::MarkNotificationRead,
            self.api()
                .execute(Update(By::<notification::Read, _>::new(id))),
        )
        .await
        .map_err(tracerr::wrap!())?;

        Ok(true)
    }
}

/// Error of [`MarkNotificationRead`] [`Command`] execution.
pub type ExecutionError = Traced<api::Error>;
