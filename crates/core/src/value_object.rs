//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// A value object has no identity of its own. Two prices of `USD 19.99` are the
/// same price no matter which product they are attached to, so comparisons go
/// through `PartialEq` on the attributes.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Money {
///     currency_code: String,
///     units: i64,
///     nanos: i32,
/// }
///
/// impl ValueObject for Money {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
