//! Domain Layer - Core Entity Trait
//!
//! Basic contract for stored entities: a unique, hashable identifier.

/// Core trait for all domain entities
pub trait Entity: Sized + Clone {
    /// The type of the entity's unique identifier
    type Id: Clone + Eq + std::hash::Hash + std::fmt::Display;

    /// Returns the entity's unique identifier
    fn id(&self) -> &Self::Id;
}
