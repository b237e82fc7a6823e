//! [`Command`] for changing the [`Property`] page size.

use derive_more::{Display, Error, From};
use tracerr::Traced;

#[cfg(doc)]
use crate::domain::Property;
use crate::{infra::api, read::property::list, Service};

use super::{Command, FetchProperties};

/// [`Command`] for changing the number of [`Property`]s per page.
///
/// Pagination is always reset to the first page, which is fetched then.
#[derive(Clone, Copy, Debug, From)]
pub struct ChangePageSize {
    /// New number of [`Property`]s per page.
    pub page_size: u32,
}

impl<A> Command<ChangePageSize> for Service<A>
where
    Self: Command<
        FetchProperties,
        Ok = Option<list::PageInfo>,
        Err = Traced<api::Error>,
    >,
{
    type Ok = Option<list::PageInfo>;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        ChangePageSize { page_size }: ChangePageSize,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        if !self.store().write().await.properties.resize(page_size) {
            return Err(tracerr::new!(E::ZeroPageSize));
        }

        self.execute(FetchProperties::default())
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
    }
}

/// Error of [`ChangePageSize`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Api`] error.
    ///
    /// [`Api`]: crate::infra::Api
    #[display("`Api` operation failed: {_0}")]
    Api(api::Error),

    /// Page size of zero was requested.
    #[display("Page size must be positive")]
    ZeroPageSize,
}
