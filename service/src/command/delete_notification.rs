//! [`Command`] for deleting a [`Notification`].

use common::operations::{By, Delete};
use derive_more::From;
use tracerr::Traced;

use crate::{
    domain::{notification, Notification},
    infra::{api, Api},
    store::mutation,
    Service,
};

use super::Command;

/// [`Command`] for deleting a [`Notification`], locally right away and then
/// remotely, unless it was emitted locally.
#[derive(Clone, Debug, From)]
pub struct DeleteNotification {
    /// ID of the [`Notification`] to delete.
    pub id: notification::Id,
}

impl<A> Command<DeleteNotification> for Service<A>
where
    A: Api<
        Delete<By<Notification, notification::Id>>,
        Ok = (),
        Err = Traced<api::Error>,
    >,
{
    /// Removed [`Notification`], if it was held.
    type Ok = Option<Notification>;
    type Err = ExecutionError;

    async fn execute(
        &self,
        DeleteNotification { id }: DeleteNotification,
    ) -> Result<Self::Ok, Self::Err> {
        let removed = self.store().write().await.notifications.remove(&id);
        if id.is_local() {
            return Ok(removed);
        }

        self.track(
            mutation::Kind::DeleteNotification,
            self.api().execute(Delete(By::<Notification, _>::new(id))),
        )
        .await
        .map_err(tracerr::wrap!())?;

        Ok(removed)
    }
}

/// Error of [`DeleteNotification`] [`Command`] execution.
pub type ExecutionError = Traced<api::Error>;
