//! Abstractions for page-number pagination.

use std::ops::RangeInclusive;

use serde::{de::Error as _, Deserialize, Deserializer, Serialize};

/// Pagination arguments: which page of which size to request.
///
/// Deserialization rejects zero values the same way [`Arguments::new`] does.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
pub struct Arguments {
    /// 1-based number of the requested page.
    page: u32,

    /// Number of items per page.
    page_size: u32,
}

impl Arguments {
    /// Creates new [`Arguments`].
    ///
    /// [`None`] is returned if either `page` or `page_size` is zero.
    #[must_use]
    pub fn new(page: u32, page_size: u32) -> Option<Self> {
        (page > 0 && page_size > 0).then_some(Self { page, page_size })
    }

    /// Creates new [`Arguments`] requesting the first page of the provided
    /// size.
    ///
    /// [`None`] is returned if `page_size` is zero.
    #[must_use]
    pub fn first(page_size: u32) -> Option<Self> {
        Self::new(1, page_size)
    }

    /// Returns the requested page number.
    #[must_use]
    pub fn page(&self) -> u32 {
        self.page
    }

    /// Returns the requested page size.
    #[must_use]
    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Returns the number of items preceding the requested page.
    #[must_use]
    pub fn offset(&self) -> usize {
        (self.page as usize - 1) * self.page_size as usize
    }
}

impl<'de> Deserialize<'de> for Arguments {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            page: u32,
            page_size: u32,
        }

        let Raw { page, page_size } = Raw::deserialize(deserializer)?;
        Self::new(page, page_size).ok_or_else(|| {
            D::Error::custom(format!(
                "`page` and `page_size` must be positive, got {page} and \
                 {page_size}",
            ))
        })
    }
}

/// Information about a page, tracking the pagination state of a collection.
///
/// Total pages and next/previous availability are always derived from the
/// page, page size and total count, so they cannot go out of sync.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct PageInfo {
    /// [`Arguments`] the page was requested with.
    arguments: Arguments,

    /// Total number of items across all the pages.
    total_count: u64,
}

impl PageInfo {
    /// Creates a new [`PageInfo`].
    #[must_use]
    pub fn new(arguments: Arguments, total_count: u64) -> Self {
        Self {
            arguments,
            total_count,
        }
    }

    /// Returns [`Arguments`] of this [`PageInfo`].
    #[must_use]
    pub fn arguments(&self) -> Arguments {
        self.arguments
    }

    /// Returns the current page number.
    #[must_use]
    pub fn page(&self) -> u32 {
        self.arguments.page
    }

    /// Returns the page size.
    #[must_use]
    pub fn page_size(&self) -> u32 {
        self.arguments.page_size
    }

    /// Returns the total number of items.
    #[must_use]
    pub fn total_count(&self) -> u64 {
        self.total_count
    }

    /// Returns the total number of pages: `ceil(total_count / page_size)`.
    #[must_use]
    pub fn total_pages(&self) -> u32 {
        let pages = self.total_count.div_ceil(u64::from(self.page_size()));
        u32::try_from(pages).unwrap_or(u32::MAX)
    }

    /// Indicates whether there is a page after the current one.
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.page() < self.total_pages()
    }

    /// Indicates whether there is a page before the current one.
    #[must_use]
    pub fn has_previous(&self) -> bool {
        self.page() > 1
    }

    /// Indicates whether the provided `page` lies in `[1, total_pages]`.
    #[must_use]
    pub fn contains(&self, page: u32) -> bool {
        (1..=self.total_pages()).contains(&page)
    }

    /// Returns [`Arguments`] for switching to the provided `page`.
    ///
    /// [`None`] is returned if the `page` is out of `[1, total_pages]`.
    #[must_use]
    pub fn go_to(&self, page: u32) -> Option<Arguments> {
        self.contains(page)
            .then(|| Arguments::new(page, self.page_size()))
            .flatten()
    }

    /// Returns a window of at most `width` page numbers centred on the
    /// current page, shifted to stay within `[1, total_pages]`.
    ///
    /// An empty range is returned if there is only one page (or none).
    #[must_use]
    pub fn window(&self, width: u32) -> RangeInclusive<u32> {
        let total = self.total_pages();
        if total <= 1 || width == 0 {
            return RangeInclusive::new(1, 0);
        }
        let mut start = self.page().saturating_sub(width / 2).max(1);
        let end = start.saturating_add(width - 1).min(total);
        if end - start + 1 < width {
            start = end.saturating_sub(width - 1).max(1);
        }
        start..=end
    }
}

/// A page of items.
#[derive(Clone, Debug, PartialEq)]
pub struct Page<T> {
    /// Items on this [`Page`].
    pub items: Vec<T>,

    /// Information about this [`Page`].
    pub info: PageInfo,
}

impl<T> Page<T> {
    /// Cuts a [`Page`] out of the provided `items` held in memory entirely.
    #[must_use]
    pub fn slice(items: &[T], arguments: Arguments) -> Self
    where
        T: Clone,
    {
        Self {
            items: items
                .iter()
                .skip(arguments.offset())
                .take(arguments.page_size() as usize)
                .cloned()
                .collect(),
            info: PageInfo::new(arguments, items.len() as u64),
        }
    }

    /// Maps items of this [`Page`] with the provided function.
    #[must_use]
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            info: self.info,
        }
    }
}

/// Pagination selector.
#[derive(Clone, Debug, PartialEq)]
pub struct Selector<F> {
    /// Pagination [`Arguments`].
    pub arguments: Arguments,

    /// Additional filter being applied to the result.
    pub filter: F,
}

/// Defines pagination types.
#[expect(clippy::module_name_repetitions, reason = "more readable")]
#[macro_export]
macro_rules! define_pagination {
    ($node:ty, $filter:ty) => {
        #[doc = "A [`Page`] of [`$node`]s."]
        pub type Page = $crate::pagination::Page<$node>;

        #[doc = "An information about a [`Page`]."]
        pub type PageInfo = $crate::pagination::PageInfo;

        #[doc = "Arguments for selecting a [`Page`]."]
        pub type Arguments = $crate::pagination::Arguments;

        #[doc = "[`Page`] selector."]
        pub type Selector = $crate::pagination::Selector<$filter>;
    };
}

#[cfg(test)]
mod spec {
    use super::{Arguments, Page, PageInfo};

    fn info(page: u32, page_size: u32, total_count: u64) -> PageInfo {
        PageInfo::new(Arguments::new(page, page_size).unwrap(), total_count)
    }

    #[test]
    fn rejects_zero_arguments() {
        assert!(Arguments::new(0, 10).is_none());
        assert!(Arguments::new(1, 0).is_none());
        assert!(Arguments::first(0).is_none());
    }

    #[test]
    fn deserializes_only_positive_arguments() {
        let ok: Arguments =
            serde_json::from_str(r#"{"page": 2, "page_size": 10}"#).unwrap();
        assert_eq!(ok.offset(), 10);

        let zero_page = serde_json::from_str::<Arguments>(
            r#"{"page": 0, "page_size": 10}"#,
        );
        assert!(zero_page.is_err());

        let zero_size = serde_json::from_str::<Arguments>(
            r#"{"page": 1, "page_size": 0}"#,
        );
        assert!(zero_size.is_err());
    }

    #[test]
    fn total_pages_is_ceiling() {
        assert_eq!(info(1, 10, 25).total_pages(), 3);
        assert_eq!(info(1, 10, 30).total_pages(), 3);
        assert_eq!(info(1, 10, 31).total_pages(), 4);
        assert_eq!(info(1, 10, 0).total_pages(), 0);
        assert_eq!(info(1, 20, 1).total_pages(), 1);
    }

    #[test]
    fn last_page_has_no_next() {
        let last = info(3, 10, 25);

        assert!(!last.has_next());
        assert!(last.has_previous());
    }

    #[test]
    fn next_and_previous_follow_page() {
        for total_count in [1, 9, 10, 11, 25, 100, 101] {
            for page_size in [1, 3, 10, 20] {
                let total_pages = info(1, page_size, total_count).total_pages();
                for page in 1..=total_pages {
                    let i = info(page, page_size, total_count);
                    assert_eq!(
                        u64::from(i.total_pages()),
                        total_count.div_ceil(u64::from(page_size)),
                    );
                    assert_eq!(i.has_next(), page < total_pages);
                    assert_eq!(i.has_previous(), page > 1);
                }
            }
        }
    }

    #[test]
    fn go_to_out_of_range_is_none() {
        let i = info(2, 10, 25);

        assert_eq!(i.go_to(3), Arguments::new(3, 10));
        assert_eq!(i.go_to(1), Arguments::new(1, 10));
        assert_eq!(i.go_to(0), None);
        assert_eq!(i.go_to(4), None);
        assert_eq!(info(1, 10, 0).go_to(1), None);
    }

    #[test]
    fn window_is_centred_and_clamped() {
        assert_eq!(info(1, 10, 100).window(5), 1..=5);
        assert_eq!(info(5, 10, 100).window(5), 3..=7);
        assert_eq!(info(10, 10, 100).window(5), 6..=10);
        assert_eq!(info(2, 10, 30).window(5), 1..=3);
        assert!(info(1, 10, 10).window(5).is_empty());
    }

    #[test]
    fn slices_in_memory_items() {
        let items = (1..=25).collect::<Vec<u32>>();

        let page = Page::slice(&items, Arguments::new(3, 10).unwrap());
        assert_eq!(page.items, vec![21, 22, 23, 24, 25]);
        assert_eq!(page.info.total_pages(), 3);

        let beyond = Page::slice(&items, Arguments::new(4, 10).unwrap());
        assert!(beyond.items.is_empty());
    }
}
