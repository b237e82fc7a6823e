//! Geocoding of free-text [`Property`] locations and map [`Marker`]s.

mod table;

use std::sync::LazyLock;

use common::define_kind;
use itertools::Itertools as _;
use regex::Regex;
use xxhash_rust::xxh3;

use crate::domain::{property, Property};

use self::table::LOCATIONS;

/// Maximum offset (in degrees, per axis) applied to colliding [`Marker`]s.
pub const MAX_JITTER: f64 = 0.004;

/// Geographic coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coordinates {
    /// Latitude in degrees.
    pub latitude: f64,

    /// Longitude in degrees.
    pub longitude: f64,
}

impl Coordinates {
    /// Creates new [`Coordinates`].
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Returns a hashable key of these [`Coordinates`].
    fn key(self) -> (u64, u64) {
        (self.latitude.to_bits(), self.longitude.to_bits())
    }
}

/// Resolves the provided free-text location into [`Coordinates`].
///
/// Matching is case-insensitive and goes through:
/// 1. exact match of the whole location;
/// 2. a known location contained in the provided one, or the first
///    comma-separated segment of the provided one contained in a known
///    location;
/// 3. a word (longer than 2 characters) matching a known location exactly,
///    or contained in one.
///
/// [`None`] is returned for blank or unknown locations.
#[must_use]
pub fn lookup(location: &str) -> Option<Coordinates> {
    static WORD_SEPARATOR: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"[\s,]+").expect("valid regex"));

    let location = location.trim().to_lowercase();
    if location.is_empty() {
        return None;
    }
    if let Some(entry) = LOCATIONS.iter().find(|(key, ..)| *key == location) {
        return Some(found(entry));
    }

    let head = location.split(',').next().unwrap_or_default().trim();
    if let Some(entry) = LOCATIONS.iter().find(|(key, ..)| {
        location.contains(key) || (!head.is_empty() && key.contains(head))
    }) {
        return Some(found(entry));
    }

    WORD_SEPARATOR
        .split(&location)
        .filter(|w| w.chars().count() > 2)
        .find_map(|word| {
            LOCATIONS
                .iter()
                .find(|(key, ..)| *key == word)
                .or_else(|| LOCATIONS.iter().find(|(key, ..)| key.contains(word)))
        })
        .map(found)
}

/// Converts a [`LOCATIONS`] entry into [`Coordinates`].
fn found(&(_, lat, lng): &(&str, f64, f64)) -> Coordinates {
    Coordinates::new(lat, lng)
}

/// Source of [`Coordinates`] of a [`Property`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Source {
    /// Explicitly provided by the [`Property`].
    Explicit,

    /// Resolved from the [`Property`] location via [`lookup()`].
    Geocoded,
}

/// Locates the provided [`Property`].
///
/// Explicit finite coordinates win over the geocoded location.
#[must_use]
pub fn locate(property: &Property) -> Option<(Coordinates, Source)> {
    match (property.latitude, property.longitude) {
        (Some(lat), Some(lng)) if lat.is_finite() && lng.is_finite() => {
            Some((Coordinates::new(lat, lng), Source::Explicit))
        }
        _ => lookup(&property.location).map(|c| (c, Source::Geocoded)),
    }
}

/// [`Property`] placed on a map.
#[derive(Clone, Debug, PartialEq)]
pub struct Marker {
    /// ID of the placed [`Property`].
    pub id: property::Id,

    /// Title of the placed [`Property`].
    pub title: String,

    /// [`Coordinates`] of this [`Marker`], offset if colliding.
    pub coordinates: Coordinates,

    /// Short price label (`$350k` or `POA`).
    pub label: String,

    /// [`property::Category`] of the placed [`Property`].
    pub category: Option<property::Category>,

    /// [`Source`] of the [`Coordinates`].
    pub source: Source,
}

/// Places the provided [`Property`]s on a map, skipping the ones that cannot
/// be located.
///
/// Geocoded [`Marker`]s sharing the same base [`Coordinates`] with any other
/// [`Marker`] are offset by a deterministic amount (up to [`MAX_JITTER`]
/// degrees per axis) derived from the [`Property`] ID.
#[must_use]
pub fn markers(properties: &[Property]) -> Vec<Marker> {
    let located = properties
        .iter()
        .filter_map(|p| locate(p).map(|(c, s)| (p, c, s)))
        .collect::<Vec<_>>();

    let occupancy = located.iter().map(|(_, c, _)| c.key()).counts();

    located
        .into_iter()
        .map(|(property, base, source)| {
            let collides = occupancy.get(&base.key()).is_some_and(|n| *n > 1);
            let coordinates = if collides && source == Source::Geocoded {
                let (dlat, dlng) = jitter(property.id);
                Coordinates::new(base.latitude + dlat, base.longitude + dlng)
            } else {
                base
            };
            Marker {
                id: property.id,
                title: property.title.clone(),
                coordinates,
                label: property.price.short(),
                category: property.category,
                source,
            }
        })
        .collect()
}

/// Returns a deterministic `(latitude, longitude)` offset for the provided
/// [`property::Id`], each within `[-MAX_JITTER, MAX_JITTER]`.
fn jitter(id: property::Id) -> (f64, f64) {
    let hash = xxh3::xxh3_64(&u64::from(id).to_le_bytes()).to_le_bytes();
    let [a0, a1, a2, a3, b0, b1, b2, b3] = hash;
    let unit = |bytes| {
        f64::from(u32::from_le_bytes(bytes)) / f64::from(u32::MAX) * 2.0 - 1.0
    };
    (
        unit([a0, a1, a2, a3]) * MAX_JITTER,
        unit([b0, b1, b2, b3]) * MAX_JITTER,
    )
}

/// Map viewport: centre and zoom level.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    /// Centre of this [`Viewport`].
    pub center: Coordinates,

    /// Zoom level of this [`Viewport`].
    pub zoom: u8,
}

impl Viewport {
    /// [`Viewport`] covering the whole city.
    pub const CITY: Self = Self {
        center: Coordinates::new(-17.8292, 31.0522),
        zoom: 11,
    };

    /// Returns the [`Viewport`] of the provided [`Region`], or the
    /// [`Viewport::CITY`] if there is none.
    #[must_use]
    pub fn of(region: Option<Region>) -> Self {
        region.map_or(Self::CITY, |r| Self {
            center: r.center(),
            zoom: r.zoom(),
        })
    }
}

define_kind! {
    #[doc = "Named region of the city."]
    enum Region {
        #[doc = "Northern suburbs."]
        North,

        #[doc = "Eastern suburbs."]
        East,

        #[doc = "Southern suburbs."]
        South,

        #[doc = "Western suburbs."]
        West,

        #[doc = "City centre."]
        Central,
    }
}

impl Region {
    /// Returns the human-readable name of this [`Region`].
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::North => "Harare North",
            Self::East => "Harare East",
            Self::South => "Harare South",
            Self::West => "Harare West",
            Self::Central => "Harare Central",
        }
    }

    /// Returns the map centre of this [`Region`].
    #[must_use]
    pub fn center(self) -> Coordinates {
        match self {
            Self::North => Coordinates::new(-17.75, 31.05),
            Self::East => Coordinates::new(-17.82, 31.12),
            Self::South => Coordinates::new(-17.88, 31.03),
            Self::West => Coordinates::new(-17.82, 30.95),
            Self::Central => Viewport::CITY.center,
        }
    }

    /// Returns the map zoom level of this [`Region`].
    #[must_use]
    pub fn zoom(self) -> u8 {
        match self {
            Self::North | Self::East | Self::South | Self::West => 12,
            Self::Central => 13,
        }
    }

    /// Returns the suburbs of this [`Region`].
    #[must_use]
    pub fn areas(self) -> &'static [&'static str] {
        match self {
            Self::North => &[
                "Borrowdale",
                "Glen Lorne",
                "Mt Pleasant",
                "Avondale",
                "Highlands",
                "Marlborough",
            ],
            Self::East => &["Greendale", "Eastlea", "Ruwa", "Zimre Park"],
            Self::South => {
                &["Hatfield", "Waterfalls", "Glen View", "Southerton"]
            }
            Self::West => {
                &["Westgate", "Mabelreign", "Milton Park", "Belvedere"]
            }
            Self::Central => &["City Centre", "Avenues", "CBD", "Newlands"],
        }
    }

    /// Indicates whether the provided free-text location mentions any of the
    /// suburbs of this [`Region`], case-insensitively.
    #[must_use]
    pub fn covers(self, location: &str) -> bool {
        let location = location.to_lowercase();
        self.areas()
            .iter()
            .any(|area| location.contains(&area.to_lowercase()))
    }
}
