//! [`Command`] for adding a locally emitted [`Notification`].

use std::convert::Infallible;

use derive_more::From;

use crate::{
    domain::{notification, Notification},
    Service,
};

use super::Command;

/// [`Command`] for adding a locally emitted [`Notification`] on top of the
/// held ones.
#[derive(Clone, Debug, From)]
pub struct AddNotification(pub notification::Draft);

impl<A> Command<AddNotification> for Service<A> {
    type Ok = Notification;
    type Err = Infallible;

    async fn execute(
        &self,
        AddNotification(draft): AddNotification,
    ) -> Result<Self::Ok, Self::Err> {
        let notification = Notification::from(draft);
        self.store()
            .write()
            .await
            .notifications
            .add(notification.clone());
        Ok(notification)
    }
}
