//! [`Saves`] state.

#[cfg(doc)]
use common::DateTime;
use common::{unit, DateTimeOf};

use crate::domain::{property, Property};

/// [`DateTime`] when a [`Property`] was saved.
pub type SaveDateTime = DateTimeOf<(Saved, unit::Save)>;

/// [`DateTime`] when a [`Property`] was viewed.
pub type ViewDateTime = DateTimeOf<(Viewed, unit::View)>;

/// Saved (favorite) [`Property`].
#[derive(Clone, Debug, PartialEq)]
pub struct Saved {
    /// [`property::Summary`] of the saved [`Property`].
    pub property: property::Summary,

    /// [`DateTime`] when the [`Property`] was saved.
    pub at: SaveDateTime,
}

/// Recently viewed [`Property`].
#[derive(Clone, Debug, PartialEq)]
pub struct Viewed {
    /// [`property::Summary`] of the viewed [`Property`].
    pub property: property::Summary,

    /// [`DateTime`] when the [`Property`] was viewed last time.
    pub at: ViewDateTime,
}

/// Saved and recently viewed [`Property`]s, held in memory only.
///
/// Both lists are ordered newest first, hold each [`Property`] at most once
/// and never grow beyond [`Saves::MAX_SAVED`] and [`Saves::MAX_VIEWED`]
/// entries.
#[derive(Debug, Default)]
pub struct Saves {
    /// [`Saved`] [`Property`]s, newest first.
    saved: Vec<Saved>,

    /// [`Viewed`] [`Property`]s, newest first.
    viewed: Vec<Viewed>,
}

impl Saves {
    /// Maximum number of [`Saved`] [`Property`]s held.
    pub const MAX_SAVED: usize = 50;

    /// Maximum number of [`Viewed`] [`Property`]s held.
    pub const MAX_VIEWED: usize = 20;

    /// Returns the [`Saved`] [`Property`]s, newest first.
    #[must_use]
    pub fn saved(&self) -> &[Saved] {
        &self.saved
    }

    /// Returns the [`Viewed`] [`Property`]s, newest first.
    #[must_use]
    pub fn viewed(&self) -> &[Viewed] {
        &self.viewed
    }

    /// Indicates whether the [`Property`] with the provided ID is saved.
    #[must_use]
    pub fn is_saved(&self, id: property::Id) -> bool {
        self.saved.iter().any(|s| s.property.id == id)
    }

    /// Saves the provided [`Property`] in front of the others.
    ///
    /// Returns `false` and changes nothing if it's saved already.
    pub fn save(&mut self, property: &Property) -> bool {
        if self.is_saved(property.id) {
            return false;
        }
        self.saved.insert(
            0,
            Saved {
                property: property.into(),
                at: SaveDateTime::now(),
            },
        );
        self.saved.truncate(Self::MAX_SAVED);
        true
    }

    /// Unsaves the [`Property`] with the provided ID.
    ///
    /// Returns `false` if it wasn't saved.
    pub fn unsave(&mut self, id: property::Id) -> bool {
        let before = self.saved.len();
        self.saved.retain(|s| s.property.id != id);
        self.saved.len() != before
    }

    /// Saves the provided [`Property`] if it's not saved yet, or unsaves it
    /// otherwise.
    ///
    /// Returns whether the [`Property`] is saved now.
    pub fn toggle(&mut self, property: &Property) -> bool {
        !self.unsave(property.id) && self.save(property)
    }

    /// Records the provided [`Property`] as viewed right now, moving it in
    /// front of the others.
    pub fn view(&mut self, property: &Property) {
        self.viewed.retain(|v| v.property.id != property.id);
        self.viewed.insert(
            0,
            Viewed {
                property: property.into(),
                at: ViewDateTime::now(),
            },
        );
        self.viewed.truncate(Self::MAX_VIEWED);
    }

    /// Forgets all the [`Saved`] [`Property`]s.
    pub fn clear_saved(&mut self) {
        self.saved.clear();
    }

    /// Forgets all the [`Viewed`] [`Property`]s.
    pub fn clear_viewed(&mut self) {
        self.viewed.clear();
    }
}
