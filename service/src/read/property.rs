//! [`Property`]-related read definitions.
//!
//! [`Property`]: crate::domain::Property

pub mod list {
    //! [`Property`] list definitions.

    use std::{cmp::Ordering, fmt, str::FromStr};

    use common::{define_kind, define_pagination, Money};

    use crate::{
        domain::{property, Property},
        geocode::Region,
    };

    define_pagination!(Property, Criteria);

    /// Criteria of a [`Property`] list request.
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Criteria {
        /// [`Filter`] to apply.
        pub filter: Filter,

        /// [`SortKey`] to order by.
        pub sort: SortKey,
    }

    /// Filter of a [`Property`] list.
    ///
    /// All the provided constraints must be satisfied at once.
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Filter {
        /// Text to search for in title, location and description,
        /// case-insensitively.
        pub search: Option<String>,

        /// [`property::Category`] to restrict to.
        pub category: Option<property::Category>,

        /// [`property::Type`] to restrict to.
        pub property_type: Option<property::Type>,

        /// [`Range`] of prices.
        pub price: Option<Range<Money>>,

        /// Minimal number of bedrooms.
        pub min_beds: Option<u32>,

        /// Minimal number of bathrooms.
        pub min_baths: Option<u32>,

        /// [`Range`] of floor area in square feet.
        pub sqft: Option<Range<u32>>,

        /// Text to search for in location, case-insensitively.
        pub location: Option<String>,

        /// [`Region`] the location should belong to.
        pub region: Option<Region>,
    }

    impl Filter {
        /// Indicates whether the provided [`Property`] satisfies this
        /// [`Filter`].
        #[must_use]
        pub fn matches(&self, property: &Property) -> bool {
            let Self {
                search,
                category,
                property_type,
                price,
                min_beds,
                min_baths,
                sqft,
                location,
                region,
            } = self;

            if category.is_some() && property.category != *category {
                return false;
            }
            if let Some(search) = non_empty(search.as_deref()) {
                let search = search.to_lowercase();
                if ![&property.title, &property.location, &property.description]
                    .into_iter()
                    .any(|s| s.to_lowercase().contains(&search))
                {
                    return false;
                }
            }
            if property_type.is_some() && property.property_type != *property_type
            {
                return false;
            }
            if price.is_some_and(|r| !r.contains(property.price)) {
                return false;
            }
            if min_beds.is_some_and(|m| property.beds.unwrap_or(0) < m) {
                return false;
            }
            if min_baths.is_some_and(|m| property.baths.unwrap_or(0) < m) {
                return false;
            }
            if sqft.is_some_and(|r| !r.contains(floor_area(property))) {
                return false;
            }
            if let Some(location) = non_empty(location.as_deref()) {
                if !property
                    .location
                    .to_lowercase()
                    .contains(&location.to_lowercase())
                {
                    return false;
                }
            }
            if region.is_some_and(|r| !r.covers(&property.location)) {
                return false;
            }
            true
        }

        /// Returns the number of constraints set in this [`Filter`].
        #[must_use]
        pub fn active_count(&self) -> usize {
            let Self {
                search,
                category,
                property_type,
                price,
                min_beds,
                min_baths,
                sqft,
                location,
                region,
            } = self;

            [
                non_empty(search.as_deref()).is_some(),
                category.is_some(),
                property_type.is_some(),
                price.is_some(),
                min_beds.is_some(),
                min_baths.is_some(),
                sqft.is_some(),
                non_empty(location.as_deref()).is_some(),
                region.is_some(),
            ]
            .into_iter()
            .filter(|set| *set)
            .count()
        }
    }

    /// Change of a single [`Filter`] constraint.
    #[derive(Clone, Copy, Debug, Eq, PartialEq)]
    pub enum Change<T> {
        /// Leave the constraint as it is.
        Keep,

        /// Constrain to the provided value.
        Set(T),

        /// Remove the constraint, matching everything.
        Unset,
    }

    impl<T> Default for Change<T> {
        fn default() -> Self {
            Self::Keep
        }
    }

    impl<T> From<Option<T>> for Change<T> {
        fn from(value: Option<T>) -> Self {
            value.map_or(Self::Unset, Self::Set)
        }
    }

    impl<T> Change<T> {
        /// Parses a [`Change`] out of the provided input, where `"all"` and
        /// empty input mean [`Change::Unset`].
        ///
        /// # Errors
        ///
        /// If the input is neither `"all"`, nor empty, nor a valid `T`.
        pub fn parse(input: &str) -> Result<Self, T::Err>
        where
            T: FromStr,
        {
            constraint(input).map(Self::from)
        }

        /// Applies this [`Change`] to the provided constraint.
        fn apply(self, constraint: &mut Option<T>) {
            match self {
                Self::Keep => {}
                Self::Set(v) => *constraint = Some(v),
                Self::Unset => *constraint = None,
            }
        }
    }

    /// Changes of a [`Filter`], one [`Change`] per constraint.
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Changes {
        /// [`Change`] of [`Filter::search`].
        pub search: Change<String>,

        /// [`Change`] of [`Filter::category`].
        pub category: Change<property::Category>,

        /// [`Change`] of [`Filter::property_type`].
        pub property_type: Change<property::Type>,

        /// [`Change`] of [`Filter::price`].
        pub price: Change<Range<Money>>,

        /// [`Change`] of [`Filter::min_beds`].
        pub min_beds: Change<u32>,

        /// [`Change`] of [`Filter::min_baths`].
        pub min_baths: Change<u32>,

        /// [`Change`] of [`Filter::sqft`].
        pub sqft: Change<Range<u32>>,

        /// [`Change`] of [`Filter::location`].
        pub location: Change<String>,

        /// [`Change`] of [`Filter::region`].
        pub region: Change<Region>,
    }

    impl Changes {
        /// Applies these [`Changes`] to the provided [`Filter`] in place.
        pub fn apply(self, filter: &mut Filter) {
            let Self {
                search,
                category,
                property_type,
                price,
                min_beds,
                min_baths,
                sqft,
                location,
                region,
            } = self;

            search.apply(&mut filter.search);
            category.apply(&mut filter.category);
            property_type.apply(&mut filter.property_type);
            price.apply(&mut filter.price);
            min_beds.apply(&mut filter.min_beds);
            min_baths.apply(&mut filter.min_baths);
            sqft.apply(&mut filter.sqft);
            location.apply(&mut filter.location);
            region.apply(&mut filter.region);
        }
    }

    /// Returns the provided string if it's present and non-empty.
    fn non_empty(s: Option<&str>) -> Option<&str> {
        s.filter(|s| !s.is_empty())
    }

    /// Returns floor area of the provided [`Property`], falling back to the
    /// leading number of its free-text area measurement, or zero.
    fn floor_area(property: &Property) -> u32 {
        property
            .sqft
            .or_else(|| {
                let measurement = property.area_measurement.as_deref()?;
                let digits = measurement
                    .trim()
                    .split(|c: char| !c.is_ascii_digit())
                    .next()?;
                digits.parse().ok()
            })
            .unwrap_or(0)
    }

    /// Parses a filter constraint, treating `"all"` and empty input as no
    /// constraint.
    ///
    /// # Errors
    ///
    /// If the input is neither `"all"`, nor empty, nor a valid `T`.
    pub fn constraint<T: FromStr>(input: &str) -> Result<Option<T>, T::Err> {
        let input = input.trim();
        if input.is_empty() || input.eq_ignore_ascii_case("all") {
            return Ok(None);
        }
        input.parse().map(Some)
    }

    /// Inclusive range of values encoded as `"min-max"`.
    ///
    /// A missing (or zero) maximum means the [`Range`] is unbounded above.
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
    pub struct Range<T> {
        /// Lower bound.
        pub min: T,

        /// Upper bound, if any.
        pub max: Option<T>,
    }

    impl<T: Copy + PartialOrd> Range<T> {
        /// Indicates whether the provided `value` lies in this [`Range`].
        #[must_use]
        pub fn contains(&self, value: T) -> bool {
            value >= self.min && self.max.map_or(true, |max| value <= max)
        }
    }

    impl<T> FromStr for Range<T>
    where
        T: Default + FromStr + PartialEq,
    {
        type Err = T::Err;

        fn from_str(s: &str) -> Result<Self, Self::Err> {
            let (min, max) = s.split_once('-').unwrap_or((s, ""));
            let (min, max) = (min.trim(), max.trim());

            let min = if min.is_empty() {
                T::default()
            } else {
                min.parse()?
            };
            let max = if max.is_empty() {
                None
            } else {
                Some(max.parse()?).filter(|m| *m != T::default())
            };
            Ok(Self { min, max })
        }
    }

    impl<T: fmt::Display> fmt::Display for Range<T> {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{}-", self.min)?;
            if let Some(max) = &self.max {
                write!(f, "{max}")?;
            }
            Ok(())
        }
    }

    define_kind! {
        #[doc = "Key to sort a [`Property`] list by."]
        enum SortKey {
            #[doc = "Cheapest first."]
            PriceLow,

            #[doc = "Most expensive first."]
            PriceHigh,

            #[doc = "Most bedrooms first."]
            Beds,

            #[doc = "Largest floor area first."]
            Sqft,

            #[doc = "Most recently created first."]
            Newest,

            #[doc = "Least recently created first."]
            Oldest,
        }
    }

    impl Default for SortKey {
        fn default() -> Self {
            Self::Newest
        }
    }

    impl SortKey {
        /// Parses a [`SortKey`], falling back to [`SortKey::Newest`] for
        /// unrecognized keys.
        #[must_use]
        pub fn from_key(key: &str) -> Self {
            key.trim().parse().unwrap_or_default()
        }

        /// Returns the remote `ordering` parameter of this [`SortKey`].
        #[must_use]
        pub fn ordering(self) -> &'static str {
            match self {
                Self::PriceLow => "price",
                Self::PriceHigh => "-price",
                Self::Beds => "-beds",
                Self::Sqft => "-sqft",
                Self::Newest => "-created_at",
                Self::Oldest => "created_at",
            }
        }

        /// Compares the provided [`Property`]s according to this [`SortKey`].
        #[must_use]
        pub fn compare(self, a: &Property, b: &Property) -> Ordering {
            match self {
                Self::PriceLow => a.price.cmp(&b.price),
                Self::PriceHigh => b.price.cmp(&a.price),
                Self::Beds => b.beds.unwrap_or(0).cmp(&a.beds.unwrap_or(0)),
                Self::Sqft => floor_area(b).cmp(&floor_area(a)),
                Self::Newest => b.created_at.cmp(&a.created_at),
                Self::Oldest => a.created_at.cmp(&b.created_at),
            }
        }
    }

    /// Selects the [`Property`]s satisfying the provided [`Filter`], ordered
    /// by the provided [`SortKey`].
    ///
    /// Sorting is stable, so equal [`Property`]s keep their relative order.
    #[must_use]
    pub fn select(
        properties: &[Property],
        filter: &Filter,
        sort: SortKey,
    ) -> Vec<Property> {
        let mut selected = properties
            .iter()
            .filter(|p| filter.matches(p))
            .cloned()
            .collect::<Vec<_>>();
        selected.sort_by(|a, b| sort.compare(a, b));
        selected
    }

    #[cfg(test)]
    mod spec {
        use std::time::Duration;

        use common::Money;
        use rust_decimal::Decimal;

        use crate::{
            domain::{property, Property},
            geocode::Region,
        };

        use super::{
            constraint, select, Change, Changes, Filter, Range, SortKey,
        };

        fn listing(id: u64, price: i64, beds: u32) -> Property {
            serde_json::from_value(serde_json::json!({
                "id": id,
                "title": format!("Listing {id}"),
                "price": price,
                "beds": beds,
                "location": "Avondale, Harare",
                "category": "sale",
            }))
            .unwrap()
        }

        fn prices(properties: &[Property]) -> Vec<Decimal> {
            properties.iter().map(|p| p.price.amount()).collect()
        }

        fn money(amount: i64) -> Money {
            Money::new(Decimal::new(amount, 0))
        }

        #[test]
        fn filters_by_price_and_sorts_cheapest_first() {
            let properties = vec![
                listing(1, 100_000, 2),
                listing(2, 500_000, 4),
                listing(3, 250_000, 3),
            ];
            let filter = Filter {
                price: Some("0-300000".parse().unwrap()),
                ..Filter::default()
            };

            let selected = select(&properties, &filter, SortKey::PriceLow);

            assert_eq!(
                prices(&selected),
                vec![Decimal::new(100_000, 0), Decimal::new(250_000, 0)],
            );
        }

        #[test]
        fn filter_is_idempotent_and_conjunctive() {
            let mut properties = vec![
                listing(1, 100_000, 2),
                listing(2, 500_000, 4),
                listing(3, 250_000, 3),
                listing(4, 260_000, 5),
            ];
            properties[3].category = Some(property::Category::Rental);
            let filter = Filter {
                category: Some(property::Category::Sale),
                min_beds: Some(3),
                price: Some(Range {
                    min: money(200_000),
                    max: None,
                }),
                ..Filter::default()
            };

            let once = select(&properties, &filter, SortKey::Newest);
            let twice = select(&once, &filter, SortKey::Newest);

            assert_eq!(once, twice);
            assert!(once.iter().all(|p| filter.matches(p)));
            assert_eq!(
                once.iter().map(|p| u64::from(p.id)).collect::<Vec<_>>(),
                vec![2, 3],
            );
        }

        #[test]
        fn searches_case_insensitively() {
            let mut villa = listing(1, 1, 1);
            villa.description = "Modern VILLA with pool".to_owned();
            let other = listing(2, 1, 1);
            let filter = Filter {
                search: Some("villa".to_owned()),
                ..Filter::default()
            };

            assert!(filter.matches(&villa));
            assert!(!filter.matches(&other));
        }

        #[test]
        fn missing_values_compare_as_zero() {
            let mut bare = listing(1, 0, 0);
            bare.beds = None;
            let filter = Filter {
                min_beds: Some(1),
                sqft: Some("0-100".parse().unwrap()),
                ..Filter::default()
            };

            assert!(!filter.matches(&bare));
            bare.beds = Some(1);
            assert!(filter.matches(&bare));
        }

        #[test]
        fn area_measurement_backs_missing_sqft() {
            let mut plot = listing(1, 0, 0);
            plot.area_measurement = Some("2500 sqft".to_owned());
            let filter = Filter {
                sqft: Some("2000-3000".parse().unwrap()),
                ..Filter::default()
            };

            assert!(filter.matches(&plot));
        }

        #[test]
        fn filters_by_region() {
            let mut north = listing(1, 1, 1);
            north.location = "Borrowdale, Harare".to_owned();
            let mut west = listing(2, 1, 1);
            west.location = "Westgate, Harare".to_owned();
            let filter = Filter {
                region: Some(Region::North),
                ..Filter::default()
            };

            assert!(filter.matches(&north));
            assert!(!filter.matches(&west));
        }

        #[test]
        fn parses_ranges() {
            let r: Range<u32> = "100-200".parse().unwrap();
            assert_eq!((r.min, r.max), (100, Some(200)));

            let open: Range<u32> = "100-".parse().unwrap();
            assert_eq!((open.min, open.max), (100, None));

            let zero_max: Range<u32> = "100-0".parse().unwrap();
            assert!(zero_max.contains(1_000_000));

            let price: Range<Money> = "$100,000-300000".parse().unwrap();
            assert!(price.contains(money(300_000)));
            assert!(!price.contains(money(99_999)));
            assert_eq!(price.to_string(), "$100,000-$300,000");

            assert!("abc-1".parse::<Range<u32>>().is_err());
        }

        #[test]
        fn all_and_empty_are_no_constraint() {
            assert_eq!(constraint::<u32>("all").unwrap(), None);
            assert_eq!(constraint::<u32>("ALL").unwrap(), None);
            assert_eq!(constraint::<u32>(" ").unwrap(), None);
            assert_eq!(constraint::<u32>("3").unwrap(), Some(3));
            assert!(constraint::<u32>("three").is_err());
        }

        #[test]
        fn counts_active_constraints() {
            let filter = Filter {
                search: Some(String::new()),
                min_beds: Some(2),
                location: Some("Avondale".to_owned()),
                region: Some(Region::West),
                ..Filter::default()
            };

            assert_eq!(filter.active_count(), 3);
            assert_eq!(Filter::default().active_count(), 0);
        }

        #[test]
        fn changes_keep_set_and_unset_constraints() {
            let mut filter = Filter {
                min_beds: Some(2),
                min_baths: Some(1),
                location: Some("Avondale".to_owned()),
                ..Filter::default()
            };

            Changes {
                min_beds: Change::Set(4),
                min_baths: Change::parse("all").unwrap(),
                ..Changes::default()
            }
            .apply(&mut filter);

            assert_eq!(filter.min_beds, Some(4));
            assert_eq!(filter.min_baths, None);
            assert_eq!(filter.location.as_deref(), Some("Avondale"));

            Changes {
                min_beds: Change::Unset,
                ..Changes::default()
            }
            .apply(&mut filter);

            assert_eq!(filter.min_beds, None);
            assert_eq!(filter.active_count(), 1);
        }

        #[test]
        fn parses_changes() {
            assert_eq!(Change::<u32>::parse("3").unwrap(), Change::Set(3));
            assert_eq!(Change::<u32>::parse("ALL").unwrap(), Change::Unset);
            assert_eq!(Change::<u32>::parse("").unwrap(), Change::Unset);
            assert!(Change::<u32>::parse("three").is_err());
        }

        #[test]
        fn sort_keys() {
            assert_eq!(SortKey::from_key("price-high"), SortKey::PriceHigh);
            assert_eq!(SortKey::from_key("bogus"), SortKey::Newest);
            assert_eq!(SortKey::default(), SortKey::Newest);
            assert_eq!(SortKey::Oldest.ordering(), "created_at");
        }

        #[test]
        fn sorts_stably_by_each_key() {
            let mut old = listing(1, 300, 2);
            old.sqft = Some(50);
            let mut new = listing(2, 100, 4);
            new.created_at = old.created_at + Duration::from_secs(60);
            new.sqft = Some(80);
            let mut same = listing(3, 100, 2);
            same.created_at = old.created_at;
            let all = vec![old, new, same];
            let ids = |sort| {
                select(&all, &Filter::default(), sort)
                    .iter()
                    .map(|p| u64::from(p.id))
                    .collect::<Vec<_>>()
            };

            assert_eq!(ids(SortKey::PriceLow), vec![2, 3, 1]);
            assert_eq!(ids(SortKey::PriceHigh), vec![1, 2, 3]);
            assert_eq!(ids(SortKey::Beds), vec![2, 1, 3]);
            assert_eq!(ids(SortKey::Sqft), vec![2, 1, 3]);
            assert_eq!(ids(SortKey::Newest), vec![2, 1, 3]);
            assert_eq!(ids(SortKey::Oldest), vec![1, 3, 2]);
        }
    }
}
