//! [`Command`] for clearing [`Notification`]s.

use std::convert::Infallible;

#[cfg(doc)]
use crate::domain::Notification;
use crate::Service;

use super::Command;

/// [`Command`] for dropping all the held [`Notification`]s.
#[derive(Clone, Copy, Debug)]
pub struct ClearNotifications;

impl<A> Command<ClearNotifications> for Service<A> {
    type Ok = ();
    type Err = Infallible;

    async fn execute(
        &self,
        _: ClearNotifications,
    ) -> Result<Self::Ok, Self::Err> {
        self.store().write().await.notifications.clear();
        Ok(())
    }
}
