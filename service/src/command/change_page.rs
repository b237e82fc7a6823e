//! [`Command`] for switching the current [`Property`] page.

use derive_more::From;
use tracerr::Traced;
use tracing as log;

#[cfg(doc)]
use crate::domain::Property;
use crate::{infra::api, read::property::list, Service};

use super::{Command, FetchProperties};

/// [`Command`] for switching to another page of [`Property`]s, fetching it
/// with the current filter criteria.
///
/// Switching to a page out of `[1, total_pages]` does nothing.
#[derive(Clone, Copy, Debug, From)]
pub struct ChangePage {
    /// Number of the page to switch to, starting from 1.
    pub page: u32,
}

impl<A> Command<ChangePage> for Service<A>
where
    Self: Command<
        FetchProperties,
        Ok = Option<list::PageInfo>,
        Err = Traced<api::Error>,
    >,
{
    /// [`list::PageInfo`] of the switched page, or [`None`] if nothing
    /// changed.
    type Ok = Option<list::PageInfo>;
    type Err = ExecutionError;

    async fn execute(
        &self,
        ChangePage { page }: ChangePage,
    ) -> Result<Self::Ok, Self::Err> {
        let target = self.store().read().await.properties.page.go_to(page);
        let Some(arguments) = target else {
            log::debug!("page {page} is out of range");
            return Ok(None);
        };

        self.execute(FetchProperties {
            arguments: Some(arguments),
            force: false,
        })
        .await
        .map_err(tracerr::wrap!())
    }
}

/// Error of [`ChangePage`] [`Command`] execution.
pub type ExecutionError = Traced<api::Error>;

#[cfg(test)]
mod spec {
    use common::Handler as _;

    use crate::{
        command::{ChangePageSize, FetchProperties},
        infra::api::fake::{property, service, Fake},
    };

    use super::ChangePage;

    #[tokio::test]
    async fn switches_pages_within_range_only() {
        let fake = Fake::default();
        fake.state().properties =
            (1..=25).map(|id| property(id, 100_000, 2)).collect();
        let svc = service(&fake);
        _ = svc.execute(ChangePageSize { page_size: 10 }).await.unwrap();

        let info = svc.execute(ChangePage { page: 3 }).await.unwrap().unwrap();
        assert_eq!(info.total_pages(), 3);
        assert!(!info.has_next());
        assert!(info.has_previous());
        assert_eq!(svc.store().read().await.properties.list.items().len(), 5);

        let calls = fake.calls("properties");
        assert_eq!(svc.execute(ChangePage { page: 4 }).await.unwrap(), None);
        assert_eq!(svc.execute(ChangePage { page: 0 }).await.unwrap(), None);
        assert_eq!(fake.calls("properties"), calls);
        assert_eq!(svc.store().read().await.properties.page.page(), 3);
    }

    #[tokio::test]
    async fn does_nothing_before_first_fetch() {
        let fake = Fake::default();
        let svc = service(&fake);

        assert_eq!(svc.execute(ChangePage { page: 2 }).await.unwrap(), None);
        assert_eq!(fake.calls("properties"), 0);

        _ = svc.execute(FetchProperties::default()).await.unwrap();
        assert_eq!(fake.calls("properties"), 1);
    }
}
