//! [`Command`] for fetching recent [`notification::Action`]s.

use common::operations::{By, Select};
use tracerr::Traced;

#[cfg(doc)]
use crate::domain::Notification;
use crate::{
    domain::notification,
    infra::{api, Api},
    store::Resource,
    Service,
};

use super::{Command, LoadRecentActions};

/// [`Command`] for fetching recent [`notification::Action`]s and merging
/// them into the held [`Notification`]s.
#[derive(Clone, Copy, Debug)]
pub struct FetchRecentActions;

impl<A> Command<FetchRecentActions> for Service<A>
where
    A: Api<
        Select<By<Vec<notification::Action>, ()>>,
        Ok = Vec<notification::Action>,
        Err = Traced<api::Error>,
    >,
{
    /// Resulting number of unread [`Notification`]s.
    type Ok = usize;
    type Err = ExecutionError;

    async fn execute(
        &self,
        _: FetchRecentActions,
    ) -> Result<Self::Ok, Self::Err> {
        let res = self
            .api()
            .execute(Select(By::<Vec<notification::Action>, _>::new(())))
            .await
            .map_err(tracerr::wrap!());
        self.report(Resource::RecentActions, &res, true);

        Ok(self
            .execute(LoadRecentActions(res?))
            .await
            .unwrap_or_else(|e| match e {}))
    }
}

/// Error of [`FetchRecentActions`] [`Command`] execution.
pub type ExecutionError = Traced<api::Error>;

#[cfg(test)]
mod spec {
    use common::Handler as _;

    use crate::{
        domain::notification,
        infra::api::fake::{service, Fake},
    };

    use super::FetchRecentActions;

    fn action(title: &str, timestamp: &str) -> notification::Action {
        notification::Action {
            kind: Some("property".to_owned()),
            title: Some(title.to_owned()),
            timestamp: Some(timestamp.to_owned()),
            ..notification::Action::default()
        }
    }

    #[tokio::test]
    async fn merges_without_duplicates_newest_first() {
        let fake = Fake::default();
        fake.state().actions = vec![
            action("Listed", "2024-03-01T10:00:00Z"),
            action("Sold", "2024-03-02T10:00:00Z"),
        ];
        let svc = service(&fake);

        assert_eq!(svc.execute(FetchRecentActions).await.unwrap(), 2);
        assert_eq!(svc.execute(FetchRecentActions).await.unwrap(), 2);

        let store = svc.store().read().await;
        let titles = store
            .notifications
            .items()
            .iter()
            .map(|n| n.title.as_str())
            .collect::<Vec<_>>();
        assert_eq!(titles, ["Sold", "Listed"]);
        assert!(store.notifications.last_fetched.is_some());
    }

    #[tokio::test]
    async fn caps_held_notifications() {
        let fake = Fake::default();
        fake.state().actions = (0..60)
            .map(|i| action(&format!("Action {i}"), "2024-03-01T10:00:00Z"))
            .collect();
        let svc = service(&fake);

        _ = svc.execute(FetchRecentActions).await.unwrap();

        assert_eq!(svc.store().read().await.notifications.items().len(), 50);
    }
}
