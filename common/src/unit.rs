//! Marker types.

/// Marker type describing an entity creation.
#[derive(Clone, Copy, Debug)]
pub struct Creation;

/// Marker type describing an event emission (a notification being raised,
/// for example).
#[derive(Clone, Copy, Debug)]
pub struct Emission;

/// Marker type describing a collection being fetched from a remote side.
#[derive(Clone, Copy, Debug)]
pub struct Fetch;

/// Marker type describing an entity being saved (bookmarked) by a user.
#[derive(Clone, Copy, Debug)]
pub struct Save;

/// Marker type describing an entity being viewed by a user.
#[derive(Clone, Copy, Debug)]
pub struct View;
