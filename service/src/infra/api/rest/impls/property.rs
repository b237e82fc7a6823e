//! [`Property`]-related [`Api`] implementations.

use common::operations::{By, Delete, Insert, Select, Update};
use reqwest::Method;
use tracerr::Traced;

use crate::{
    domain::{property, Property},
    infra::{
        api::{self, rest::Listing},
        Api, Rest,
    },
    read::property::list,
};

/// Returns the query parameters of the provided [`list::Selector`].
///
/// [`list::Filter::region`] has no remote counterpart and is applied on the
/// client side only.
fn query(selector: &list::Selector) -> Vec<(&'static str, String)> {
    let list::Selector {
        arguments,
        filter: list::Criteria { filter, sort },
    } = selector;
    let list::Filter {
        search,
        category,
        property_type,
        price,
        min_beds,
        min_baths,
        sqft,
        location,
        region: _,
    } = filter;

    let mut params = vec![
        ("page", arguments.page().to_string()),
        ("page_size", arguments.page_size().to_string()),
        ("ordering", sort.ordering().to_owned()),
    ];
    let mut push = |key, value: Option<String>| {
        if let Some(v) = value.filter(|v| !v.is_empty()) {
            params.push((key, v));
        }
    };
    push("search", search.clone());
    push("category", category.map(|c| c.to_string()));
    push("property_type", property_type.map(|t| t.to_string()));
    push("min_price", price.map(|r| r.min.amount().normalize().to_string()));
    push(
        "max_price",
        price.and_then(|r| r.max).map(|m| m.amount().normalize().to_string()),
    );
    push("min_beds", min_beds.map(|n| n.to_string()));
    push("min_baths", min_baths.map(|n| n.to_string()));
    push("min_sqft", sqft.map(|r| r.min.to_string()));
    push("max_sqft", sqft.and_then(|r| r.max).map(|n| n.to_string()));
    push("location", location.clone());
    params
}

impl Api<Select<By<list::Page, list::Selector>>> for Rest {
    type Ok = list::Page;
    type Err = Traced<api::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<list::Page, list::Selector>>,
    ) -> Result<Self::Ok, Self::Err> {
        let selector = by.into_inner();
        let req = self
            .request(Method::GET, "properties/")
            .map_err(tracerr::wrap!())?
            .query(&query(&selector));
        let (items, total_count) = Self::fetch::<Listing<Property>>(req)
            .await
            .map_err(tracerr::wrap!())?
            .into_parts();
        Ok(list::Page {
            items,
            info: list::PageInfo::new(selector.arguments, total_count),
        })
    }
}

impl Api<Select<By<Option<Property>, property::Id>>> for Rest {
    type Ok = Option<Property>;
    type Err = Traced<api::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<Property>, property::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let id = by.into_inner();
        let req = self
            .request(Method::GET, &format!("properties/{id}/"))
            .map_err(tracerr::wrap!())?;
        match Self::fetch(req).await {
            Ok(property) => Ok(Some(property)),
            Err(e) if e.as_ref().is_not_found() => Ok(None),
            Err(e) => Err(e).map_err(tracerr::wrap!()),
        }
    }
}

impl Api<Insert<property::Draft>> for Rest {
    type Ok = Property;
    type Err = Traced<api::Error>;

    async fn execute(
        &self,
        Insert(draft): Insert<property::Draft>,
    ) -> Result<Self::Ok, Self::Err> {
        let req = self
            .request(Method::POST, "properties/")
            .map_err(tracerr::wrap!())?
            .json(&draft);
        Self::fetch(req).await.map_err(tracerr::wrap!())
    }
}

impl Api<Update<(property::Id, property::Changes)>> for Rest {
    type Ok = Property;
    type Err = Traced<api::Error>;

    async fn execute(
        &self,
        Update((id, changes)): Update<(property::Id, property::Changes)>,
    ) -> Result<Self::Ok, Self::Err> {
        let req = self
            .request(Method::PATCH, &format!("properties/{id}/"))
            .map_err(tracerr::wrap!())?
            .json(&changes);
        Self::fetch(req).await.map_err(tracerr::wrap!())
    }
}

impl Api<Delete<By<Property, property::Id>>> for Rest {
    type Ok = ();
    type Err = Traced<api::Error>;

    async fn execute(
        &self,
        Delete(by): Delete<By<Property, property::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let id = by.into_inner();
        let req = self
            .request(Method::DELETE, &format!("properties/{id}/"))
            .map_err(tracerr::wrap!())?;
        Self::perform(req).await.map_err(tracerr::wrap!())
    }
}

impl Api<Select<By<property::Stats, property::Id>>> for Rest {
    type Ok = property::Stats;
    type Err = Traced<api::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<property::Stats, property::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let id = by.into_inner();
        let req = self
            .request(Method::GET, &format!("properties/{id}/stats/"))
            .map_err(tracerr::wrap!())?;
        Self::fetch(req).await.map_err(tracerr::wrap!())
    }
}
