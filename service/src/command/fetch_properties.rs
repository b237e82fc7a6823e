//! [`Command`] for fetching a page of [`Property`]s.

use common::operations::{By, Select};
use tokio::time::Instant;
use tracerr::Traced;
use tracing as log;

#[cfg(doc)]
use crate::domain::Property;
use crate::{
    infra::{api, Api},
    read::property::list,
    store::{Failure, Resource},
    Service,
};

use super::Command;

/// [`Command`] for fetching a page of [`Property`]s with the current filter
/// criteria and sort order.
///
/// The same request issued again within the configured cache TTL is served
/// from the already loaded page, unless forced.
#[derive(Clone, Copy, Debug, Default)]
pub struct FetchProperties {
    /// [`list::Arguments`] of the page to fetch, the current page if
    /// [`None`].
    pub arguments: Option<list::Arguments>,

    /// Indicator whether the cache should be bypassed.
    pub force: bool,
}

impl<A> Command<FetchProperties> for Service<A>
where
    A: Api<
        Select<By<list::Page, list::Selector>>,
        Ok = list::Page,
        Err = Traced<api::Error>,
    >,
{
    /// [`list::PageInfo`] of the loaded page, or [`None`] if the response
    /// was outdated by a newer request.
    type Ok = Option<list::PageInfo>;
    type Err = ExecutionError;

    async fn execute(
        &self,
        cmd: FetchProperties,
    ) -> Result<Self::Ok, Self::Err> {
        let FetchProperties { arguments, force } = cmd;
        let now = Instant::now();

        let (selector, ticket) = {
            let mut store = self.store().write().await;
            let props = &mut store.properties;

            let mut selector = props.selector();
            if let Some(args) = arguments {
                selector.arguments = args;
            }
            if !force && props.is_cached(&selector, now, self.config().cache_ttl)
            {
                log::debug!("`Property` list served from cache");
                return Ok(Some(props.page));
            }
            (selector, props.list.begin())
        };

        let res = self
            .api()
            .execute(Select(By::new(selector.clone())))
            .await
            .map_err(tracerr::wrap!());

        let mut store = self.store().write().await;
        let props = &mut store.properties;
        let (res, fresh) = match res {
            Ok(page) => {
                let fresh = props.load(ticket, page);
                if fresh {
                    props.remember(selector, now);
                }
                (Ok(()), fresh)
            }
            Err(e) => {
                let fresh = props.list.fail(ticket, Failure::from(e.as_ref()));
                (Err(e), fresh)
            }
        };
        let info = props.page;
        drop(store);

        self.report(Resource::Properties, &res, fresh);
        res.map(|()| fresh.then_some(info))
    }
}

/// Error of [`FetchProperties`] [`Command`] execution.
pub type ExecutionError = Traced<api::Error>;

#[cfg(test)]
mod spec {
    use std::time::Duration;

    use common::Handler as _;

    use crate::{
        infra::api::{
            self,
            fake::{property, service, Fake},
        },
        read::property::list,
        store::{Event, Resource, Status},
    };

    use super::FetchProperties;

    fn fake() -> Fake {
        let fake = Fake::default();
        fake.state().properties = vec![
            property(1, 100_000, 2),
            property(2, 500_000, 4),
            property(3, 250_000, 3),
        ];
        fake
    }

    #[tokio::test(start_paused = true)]
    async fn serves_same_request_from_cache() {
        let fake = fake();
        let svc = service(&fake);

        let info = svc.execute(FetchProperties::default()).await.unwrap();
        assert_eq!(info.unwrap().total_count(), 3);
        _ = svc.execute(FetchProperties::default()).await.unwrap();
        assert_eq!(fake.calls("properties"), 1);

        _ = svc
            .execute(FetchProperties {
                force: true,
                ..FetchProperties::default()
            })
            .await
            .unwrap();
        assert_eq!(fake.calls("properties"), 2);

        tokio::time::advance(Duration::from_secs(31)).await;
        _ = svc.execute(FetchProperties::default()).await.unwrap();
        assert_eq!(fake.calls("properties"), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn stale_response_never_overwrites_newer() {
        let fake = fake();
        fake.state()
            .delays
            .extend([Duration::from_secs(2), Duration::from_secs(1)]);
        let svc = service(&fake);

        let (older, newer) = tokio::join!(
            svc.execute(FetchProperties {
                arguments: list::Arguments::new(1, 1),
                force: true,
            }),
            svc.execute(FetchProperties {
                arguments: list::Arguments::new(2, 1),
                force: true,
            }),
        );

        assert_eq!(older.unwrap(), None);
        assert_eq!(newer.unwrap().unwrap().page(), 2);

        let store = svc.store().read().await;
        assert_eq!(store.properties.page.page(), 2);
        assert_eq!(store.properties.list.items().len(), 1);
        assert_eq!(u64::from(store.properties.list.items()[0].id), 2);
        assert_eq!(store.properties.list.status(), Status::Succeeded);
    }

    #[tokio::test]
    async fn failed_fetch_keeps_loaded_items() {
        let fake = fake();
        let svc = service(&fake);
        _ = svc.execute(FetchProperties::default()).await.unwrap();
        let mut events = svc.subscribe();

        fake.state().failures.push_back(api::Error::Status {
            status: 503,
            message: "Server error, try again later".to_owned(),
        });
        let err = svc
            .execute(FetchProperties {
                force: true,
                ..FetchProperties::default()
            })
            .await
            .unwrap_err();

        assert_eq!(err.as_ref().status(), Some(503));
        let store = svc.store().read().await;
        assert_eq!(store.properties.list.items().len(), 3);
        assert_eq!(store.properties.list.status(), Status::Failed);
        assert_eq!(store.properties.list.error().unwrap().status, Some(503));
        let Ok(Event::Failed(resource, failure)) = events.try_recv() else {
            panic!("expected failure event");
        };
        assert_eq!(resource, Resource::Properties);
        assert_eq!(failure.message, "HTTP 503: Server error, try again later");
    }

    #[tokio::test]
    async fn sends_current_criteria() {
        let fake = fake();
        let svc = service(&fake);
        {
            let mut store = svc.store().write().await;
            store.properties.filter.price = Some("0-300000".parse().unwrap());
            store.properties.sort = list::SortKey::PriceLow;
        }

        _ = svc.execute(FetchProperties::default()).await.unwrap();

        let store = svc.store().read().await;
        let prices = store
            .properties
            .list
            .items()
            .iter()
            .map(|p| p.price.to_string())
            .collect::<Vec<_>>();
        assert_eq!(prices, ["$100,000", "$250,000"]);
    }
}
