//! Records addressed by an id, such as catalog products.

/// A record whose identity is its id rather than its field values.
///
/// Two products with the same id are the same catalog entry even if their
/// names or prices differ.
pub trait Entity {
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    fn id(&self) -> &Self::Id;
}
