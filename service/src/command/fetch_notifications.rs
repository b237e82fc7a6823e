//! [`Command`] for fetching [`Notification`]s.

use common::operations::{By, Select};
use tracerr::Traced;

use crate::{
    domain::Notification,
    infra::{api, Api},
    store::{Failure, FetchDateTime, Resource},
    Service,
};

use super::Command;

/// [`Command`] for fetching [`Notification`]s, replacing the held ones.
///
/// Missing remote [`Notification`]s endpoint results in no [`Notification`]s
/// rather than an error.
#[derive(Clone, Copy, Debug)]
pub struct FetchNotifications;

impl<A> Command<FetchNotifications> for Service<A>
where
    A: Api<
        Select<By<Vec<Notification>, ()>>,
        Ok = Vec<Notification>,
        Err = Traced<api::Error>,
    >,
{
    /// Indicator whether the fetched [`Notification`]s were stored, being
    /// the response to the latest request.
    type Ok = bool;
    type Err = ExecutionError;

    async fn execute(
        &self,
        _: FetchNotifications,
    ) -> Result<Self::Ok, Self::Err> {
        let ticket = self.store().write().await.notifications.list.begin();

        let res = self
            .api()
            .execute(Select(By::<Vec<Notification>, _>::new(())))
            .await
            .map_err(tracerr::wrap!());

        let mut store = self.store().write().await;
        let notifications = &mut store.notifications;
        let (res, fresh) = match res {
            Ok(items) => {
                let fresh = notifications.list.succeed(ticket, items);
                if fresh {
                    notifications.recount();
                    notifications.last_fetched = Some(FetchDateTime::now());
                }
                (Ok(()), fresh)
            }
            Err(e) => {
                let failure = Failure::from(e.as_ref());
                (Err(e), notifications.list.fail(ticket, failure))
            }
        };
        drop(store);

        self.report(Resource::Notifications, &res, fresh);
        res.map(|()| fresh)
    }
}

/// Error of [`FetchNotifications`] [`Command`] execution.
pub type ExecutionError = Traced<api::Error>;
