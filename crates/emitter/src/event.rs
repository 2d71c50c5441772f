//! Core event trait.

use std::fmt::Debug;
use std::hash::Hash;

/// An event that can be dispatched through an [`Emitter`](crate::Emitter).
///
/// Implementors declare a closed set of event kinds, one payload shape per
/// kind — typically an enum whose variants are the kinds. The set is fixed
/// at compile time and never extended at runtime; the emitter keys its
/// handler registry by [`Event::Kind`].
pub trait Event {
    /// Discriminant identifying which kind of event a value is.
    type Kind: Copy + Eq + Hash + Debug;

    /// Returns the kind of this event.
    fn kind(&self) -> Self::Kind;
}
