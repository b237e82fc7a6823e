//! [`Query`] collection related to [`Property`] listings.

use std::{convert::Infallible, ops::RangeInclusive};

#[cfg(doc)]
use crate::domain::Property;
use crate::{
    geocode::{self, Marker, Viewport},
    read::property::list::{self, Filter},
    Service,
};

use super::Query;

/// [`Query`] of the filtered and sorted [`Property`]s of the current page.
///
/// The listing is paginated once more client-side with the provided
/// [`list::Arguments`], or returned whole if there are none.
#[derive(Clone, Copy, Debug, Default)]
pub struct PropertyListing {
    /// [`list::Arguments`] to paginate the listing with.
    pub arguments: Option<list::Arguments>,
}

impl<A> Query<PropertyListing> for Service<A> {
    type Ok = list::Page;
    type Err = Infallible;

    async fn execute(
        &self,
        PropertyListing { arguments }: PropertyListing,
    ) -> Result<Self::Ok, Self::Err> {
        let mut store = self.store().write().await;
        let listing = store.properties.listing();
        let whole = u32::try_from(listing.len()).unwrap_or(u32::MAX).max(1);
        let arguments = arguments
            .or_else(|| list::Arguments::first(whole))
            .expect("non-zero page size");
        Ok(list::Page::slice(listing, arguments))
    }
}

/// [`Query`] of map [`Marker`]s for the filtered [`Property`]s of the
/// current page.
#[derive(Clone, Copy, Debug)]
pub struct PropertyMarkers;

/// Output of the [`PropertyMarkers`] [`Query`].
#[derive(Clone, Debug, PartialEq)]
pub struct Markers {
    /// [`Viewport`] of the currently filtered region.
    pub viewport: Viewport,

    /// [`Marker`]s of the located [`Property`]s.
    pub markers: Vec<Marker>,
}

impl<A> Query<PropertyMarkers> for Service<A> {
    type Ok = Markers;
    type Err = Infallible;

    async fn execute(&self, _: PropertyMarkers) -> Result<Self::Ok, Self::Err> {
        let mut store = self.store().write().await;
        let viewport = Viewport::of(store.properties.filter.region);
        Ok(Markers {
            viewport,
            markers: geocode::markers(store.properties.listing()),
        })
    }
}

/// [`Query`] of the current [`Property`] pagination state.
#[derive(Clone, Copy, Debug)]
pub struct Pagination;

/// Output of the [`Pagination`] [`Query`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PageState {
    /// [`list::PageInfo`] of the current page.
    pub info: list::PageInfo,

    /// Page numbers to offer around the current page.
    pub window: RangeInclusive<u32>,
}

impl<A> Query<Pagination> for Service<A> {
    type Ok = PageState;
    type Err = Infallible;

    async fn execute(&self, _: Pagination) -> Result<Self::Ok, Self::Err> {
        let info = self.store().read().await.properties.page;
        Ok(PageState {
            info,
            window: info.window(self.config().page_window),
        })
    }
}

/// [`Query`] of the current [`Property`] list [`Filter`].
#[derive(Clone, Copy, Debug)]
pub struct ActiveFilters;

/// Output of the [`ActiveFilters`] [`Query`].
#[derive(Clone, Debug, PartialEq)]
pub struct FilterState {
    /// Current [`Filter`].
    pub filter: Filter,

    /// Current [`list::SortKey`].
    pub sort: list::SortKey,

    /// Number of constraints set in the [`Filter`].
    pub active: usize,
}

impl<A> Query<ActiveFilters> for Service<A> {
    type Ok = FilterState;
    type Err = Infallible;

    async fn execute(&self, _: ActiveFilters) -> Result<Self::Ok, Self::Err> {
        let store = self.store().read().await;
        let filter = store.properties.filter.clone();
        Ok(FilterState {
            active: filter.active_count(),
            sort: store.properties.sort,
            filter,
        })
    }
}

#[cfg(test)]
mod spec {
    use common::Handler as _;

    use crate::{
        command::{ChangePageSize, FetchProperties, UpdateFilters, UpdateSort},
        geocode::{Region, Viewport},
        infra::api::fake::{property, service, Fake},
        read::property::list::{self, Change, Changes, SortKey},
    };

    use super::{ActiveFilters, Pagination, PropertyListing, PropertyMarkers};

    fn fake() -> Fake {
        let fake = Fake::default();
        fake.state().properties = vec![
            property(1, 100_000, 2),
            property(2, 500_000, 4),
            property(3, 250_000, 3),
        ];
        fake
    }

    #[tokio::test]
    async fn derives_filtered_sorted_listing() {
        let fake = fake();
        let svc = service(&fake);
        _ = svc.execute(FetchProperties::default()).await.unwrap();

        _ = svc
            .execute(UpdateFilters(Changes {
                price: Change::Set("0-300000".parse().unwrap()),
                ..Changes::default()
            }))
            .await
            .unwrap();
        svc.execute(UpdateSort(SortKey::PriceLow)).await.unwrap();

        let page = svc.execute(PropertyListing::default()).await.unwrap();
        let ids = page.items.iter().map(|p| u64::from(p.id)).collect::<Vec<_>>();
        assert_eq!(ids, [1, 3]);
        assert_eq!(page.info.total_count(), 2);

        let page = svc
            .execute(PropertyListing {
                arguments: list::Arguments::new(2, 1),
            })
            .await
            .unwrap();
        assert_eq!(page.items.len(), 1);
        assert_eq!(u64::from(page.items[0].id), 3);
        assert!(!page.info.has_next());

        _ = svc.execute(PropertyListing::default()).await.unwrap();
        assert_eq!(
            svc.store().read().await.properties.listing_computations(),
            1,
        );

        let filters = svc.execute(ActiveFilters).await.unwrap();
        assert_eq!(filters.active, 1);
        assert_eq!(filters.sort, SortKey::PriceLow);
    }

    #[tokio::test]
    async fn places_colliding_markers_apart() {
        let fake = fake();
        let svc = service(&fake);
        _ = svc.execute(FetchProperties::default()).await.unwrap();

        let out = svc.execute(PropertyMarkers).await.unwrap();

        assert_eq!(out.viewport, Viewport::CITY);
        assert_eq!(out.markers.len(), 3);
        let base = crate::geocode::lookup("Borrowdale").unwrap();
        for m in &out.markers {
            assert_ne!(m.coordinates, base);
            assert!((m.coordinates.latitude - base.latitude).abs() <= 0.004);
        }

        _ = svc
            .execute(UpdateFilters(Changes {
                region: Change::Set(Region::North),
                ..Changes::default()
            }))
            .await
            .unwrap();
        let out = svc.execute(PropertyMarkers).await.unwrap();
        assert_eq!(out.viewport, Viewport::of(Some(Region::North)));
    }

    #[tokio::test]
    async fn offers_window_of_pages() {
        let fake = Fake::default();
        fake.state().properties =
            (1..=100).map(|id| property(id, 100_000, 2)).collect();
        let svc = service(&fake);
        _ = svc.execute(ChangePageSize { page_size: 10 }).await.unwrap();

        let state = svc.execute(Pagination).await.unwrap();

        assert_eq!(state.info.total_pages(), 10);
        assert_eq!(state.window, 1..=5);
    }
}
