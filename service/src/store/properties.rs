//! [`Properties`] state.

use std::{
    collections::{HashMap, HashSet},
    time::Duration,
};

use tokio::time::Instant;

use crate::{
    domain::{property, Property},
    read::{
        property::list::{self, Filter, SortKey},
        View,
    },
};

use super::{Collection, Failure, Tracker};

/// Cached result of a [`Property`] list request.
#[derive(Clone, Debug)]
struct Cache {
    /// [`list::Selector`] the list was fetched with.
    selector: list::Selector,

    /// [`Instant`] the list was fetched at.
    at: Instant,
}

/// State of [`Property`]s.
#[derive(Debug)]
pub struct Properties {
    /// [`Property`]s of the current page.
    pub list: Collection<Property>,

    /// [`list::PageInfo`] of the current page.
    pub page: list::PageInfo,

    /// Current [`Filter`].
    pub filter: Filter,

    /// Current [`SortKey`].
    pub sort: SortKey,

    /// Currently selected [`Property`].
    pub selected: Option<Property>,

    /// [`property::Stats`] fetched so far.
    pub stats: HashMap<property::Id, property::Stats>,

    /// Single [`Property`] requests, tracked separately.
    details: HashMap<property::Id, Tracker>,

    /// IDs of the [`Property`]s known to be gone from the remote side.
    deleted: HashSet<property::Id>,

    /// Last successful list request.
    cache: Option<Cache>,

    /// Revision of [`Properties::list`], bumped on every change.
    revision: u64,

    /// Memoized [`Filter`]ed and sorted [`Properties::list`].
    view: View<(u64, Filter, SortKey), Property>,
}

impl Properties {
    /// Creates new empty [`Properties`] starting with the provided page
    /// [`list::Arguments`].
    #[must_use]
    pub fn new(arguments: list::Arguments) -> Self {
        Self {
            list: Collection::default(),
            page: list::PageInfo::new(arguments, 0),
            filter: Filter::default(),
            sort: SortKey::default(),
            selected: None,
            stats: HashMap::new(),
            details: HashMap::new(),
            deleted: HashSet::new(),
            cache: None,
            revision: 0,
            view: View::default(),
        }
    }

    /// Returns the [`list::Selector`] matching the current page, [`Filter`]
    /// and [`SortKey`].
    #[must_use]
    pub fn selector(&self) -> list::Selector {
        list::Selector {
            arguments: self.page.arguments(),
            filter: list::Criteria {
                filter: self.filter.clone(),
                sort: self.sort,
            },
        }
    }

    /// Resets pagination to the first page, keeping the page size.
    pub fn rewind(&mut self) {
        _ = self.resize(self.page.page_size());
    }

    /// Resets pagination to the first page of the provided `page_size`.
    ///
    /// Returns `false` and changes nothing if the `page_size` is zero.
    pub fn resize(&mut self, page_size: u32) -> bool {
        let Some(arguments) = list::Arguments::first(page_size) else {
            return false;
        };
        self.page = list::PageInfo::new(arguments, self.page.total_count());
        true
    }

    /// Returns the current revision of [`Properties::list`].
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Marks [`Properties::list`] as changed.
    pub fn touch(&mut self) {
        self.revision += 1;
    }

    /// Replaces the current page with the provided one, if the
    /// [`Ticket`](super::Ticket) is current.
    pub fn load(&mut self, ticket: super::Ticket, page: list::Page) -> bool {
        let list::Page { items, info } = page;
        if !self.list.succeed(ticket, items) {
            return false;
        }
        self.page = info;
        self.touch();
        true
    }

    /// Indicates whether the list fetched with the provided
    /// [`list::Selector`] is still fresh at the provided [`Instant`].
    #[must_use]
    pub fn is_cached(
        &self,
        selector: &list::Selector,
        now: Instant,
        ttl: Duration,
    ) -> bool {
        !self.list.items().is_empty()
            && self.cache.as_ref().is_some_and(|c| {
                c.selector == *selector && now.duration_since(c.at) < ttl
            })
    }

    /// Remembers the provided [`list::Selector`] as fetched at the provided
    /// [`Instant`].
    pub fn remember(&mut self, selector: list::Selector, at: Instant) {
        self.cache = Some(Cache { selector, at });
    }

    /// Forgets the cached list, so the next fetch goes remote.
    pub fn invalidate(&mut self) {
        self.cache = None;
    }

    /// Returns the [`Property`]s of [`Properties::list`] satisfying the
    /// current [`Filter`], ordered by the current [`SortKey`].
    ///
    /// Recomputed only if the list, the [`Filter`] or the [`SortKey`]
    /// changed since the last call.
    pub fn listing(&mut self) -> &[Property] {
        let key = (self.revision, self.filter.clone(), self.sort);
        self.view.get(key, || {
            list::select(self.list.items(), &self.filter, self.sort)
        })
    }

    /// Returns the number of computations of [`Properties::listing()`].
    #[must_use]
    pub fn listing_computations(&self) -> u64 {
        self.view.computations()
    }

    /// Returns the [`Tracker`] of the single [`Property`] requests.
    #[must_use]
    pub fn details(&self, id: property::Id) -> Option<&Tracker> {
        self.details.get(&id)
    }

    /// Returns the [`Tracker`] of the single [`Property`] requests for
    /// modification.
    pub fn details_mut(&mut self, id: property::Id) -> &mut Tracker {
        self.details.entry(id).or_default()
    }

    /// Puts the provided [`Property`] into the list, replacing the one with
    /// the same ID, and into the selection if it's selected.
    ///
    /// Returns `false` if the list contains no such [`Property`].
    pub fn replace(&mut self, property: &Property) -> bool {
        _ = self.deleted.remove(&property.id);
        if let Some(selected) =
            self.selected.as_mut().filter(|s| s.id == property.id)
        {
            selected.clone_from(property);
        }
        let Some(existing) =
            self.list.items_mut().iter_mut().find(|p| p.id == property.id)
        else {
            return false;
        };
        existing.clone_from(property);
        self.touch();
        true
    }

    /// Applies the provided [`property::Changes`] in place to the list and
    /// the selection.
    pub fn apply(&mut self, id: property::Id, changes: &property::Changes) {
        if let Some(selected) = self.selected.as_mut().filter(|s| s.id == id) {
            changes.apply(selected);
        }
        if let Some(p) = self.list.items_mut().iter_mut().find(|p| p.id == id)
        {
            changes.apply(p);
            self.touch();
        }
    }

    /// Prepends the provided newly created [`Property`], incrementing the
    /// total count.
    pub fn prepend(&mut self, property: Property) {
        _ = self.deleted.remove(&property.id);
        self.list.items_mut().insert(0, property);
        self.page = list::PageInfo::new(
            self.page.arguments(),
            self.page.total_count() + 1,
        );
        self.invalidate();
        self.touch();
    }

    /// Removes the remotely deleted [`Property`] with the provided ID,
    /// decrementing the total count (floored at zero) and clearing its
    /// selection and stats.
    ///
    /// The total count is decremented even if the [`Property`] isn't on the
    /// current page.
    pub fn remove(&mut self, id: property::Id) {
        let items = self.list.items_mut();
        let before = items.len();
        items.retain(|p| p.id != id);
        if items.len() != before {
            self.touch();
        }
        self.page = list::PageInfo::new(
            self.page.arguments(),
            self.page.total_count().saturating_sub(1),
        );
        if self.selected.as_ref().is_some_and(|s| s.id == id) {
            self.selected = None;
        }
        _ = self.stats.remove(&id);
        _ = self.details.remove(&id);
        _ = self.deleted.insert(id);
        self.invalidate();
    }

    /// Marks the [`Property`] with the provided ID as missing on the remote
    /// side.
    pub fn forget(&mut self, id: property::Id) {
        _ = self.deleted.insert(id);
    }

    /// Returns IDs of the [`Property`]s known to be gone from the remote
    /// side.
    #[must_use]
    pub fn deleted(&self) -> &HashSet<property::Id> {
        &self.deleted
    }

    /// Records the [`Failure`] of a single [`Property`] request.
    pub fn fail_details(
        &mut self,
        id: property::Id,
        ticket: super::Ticket,
        failure: Failure,
    ) -> bool {
        self.details_mut(id).fail(ticket, failure)
    }
}
