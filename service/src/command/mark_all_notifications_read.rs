//! [`Command`] for marking all the [`Notification`]s as read.

use common::operations::{By, Update};
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

/// [`Command`] for marking all the [`Notification`]s as read, locally right
/// away and then remotely.
#[derive(Clone, Copy, Debug)]
pub struct MarkAllNotificationsRead;

impl<A> Command<MarkAllNotificationsRead> for Service<A>
where
    A: Api<
        Update<By<notification::Read, ()>>,
        Ok = (),
        Err = Traced<api::Error>,
    >,
{
    type Ok = ();
    type Err = ExecutionError;

    async fn execute(
        &self,
        _: MarkAllNotificationsRead,
    ) -> Result<Self::Ok, Self::Err> {
        self.store().write().await.notifications.mark_all_read();

        self.track(
            mutation::Kind::MarkAllNotificationsRead,
            self.api()
                .execute(Update(By::<notification::Read, _>::new(()))),
        )
        .await
        .map_err(tracerr::wrap!())
    }
}

/// Error of [`MarkAllNotificationsRead`] [`Command`] execution.
pub type ExecutionError = Traced<api::Error>;
