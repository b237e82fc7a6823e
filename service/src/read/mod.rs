//! Read entities definitions.

pub mod property;
pub mod view;

pub use self::view::View;
