//! [`PollNotifications`] [`Task`].

use std::{convert::Infallible, error::Error, time};

use common::operations::{By, Perform, Start};
use smart_default::SmartDefault;
use tokio::time::{interval, MissedTickBehavior};
use tracing as log;

#[cfg(doc)]
use crate::domain::Notification;
use crate::{
    command::{fetch_notifications, FetchNotifications},
    Command, Service,
};

use super::{Background, Mount, Task};

/// Configuration for [`PollNotifications`] [`Task`].
#[derive(Clone, Copy, Debug, SmartDefault)]
pub struct Config {
    /// Interval between [`Notification`]s fetches.
    #[default(time::Duration::from_secs(60))]
    pub interval: time::Duration,
}

/// [`Task`] for re-fetching [`Notification`]s periodically.
#[derive(Clone, Copy, Debug)]
pub struct PollNotifications<S> {
    /// [`Config`] of this [`Task`].
    config: Config,

    /// [`Service`] instance.
    service: S,
}

impl<A> Task<Start<By<PollNotifications<Self>, Config>>> for Service<A>
where
    PollNotifications<Service<A>>: Task<Perform<()>, Ok = (), Err: Error>,
    Self: Clone,
{
    type Ok = ();
    type Err = Infallible;

    async fn execute(
        &self,
        Start(by): Start<By<PollNotifications<Self>, Config>>,
    ) -> Result<Self::Ok, Self::Err> {
        let config = by.into_inner();
        let task = PollNotifications {
            config,
            service: self.clone(),
        };

        let mut interval = interval(task.config.interval);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            let _ = interval.tick().await;
            _ = task.execute(Perform(())).await.map_err(|e| {
                log::error!("`task::PollNotifications` failed: {e}");
            });
        }
    }
}

impl<A> Task<Perform<()>> for PollNotifications<Service<A>>
where
    Service<A>: Command<
        FetchNotifications,
        Ok = bool,
        Err = fetch_notifications::ExecutionError,
    >,
{
    type Ok = ();
    type Err = fetch_notifications::ExecutionError;

    async fn execute(&self, _: Perform<()>) -> Result<Self::Ok, Self::Err> {
        self.service
            .execute(FetchNotifications)
            .await
            .map(drop)
            .map_err(tracerr::wrap!())
    }
}

impl<A> Service<A> {
    /// Mounts [`PollNotifications`] [`Task`] into the provided [`Background`]
    /// environment, with the configured interval.
    ///
    /// Polling stops once the returned [`Mount`] is dropped.
    pub fn poll_notifications(&self, background: &Background) -> Mount
    where
        Self: Task<
                Start<By<PollNotifications<Self>, Config>>,
                Ok = (),
                Err = Infallible,
            > + Clone
            + 'static,
    {
        let svc = self.clone();
        background.mount("PollNotifications", async move {
            svc.execute(Start(By::new(svc.config().poll_notifications)))
                .await
        })
    }
}
