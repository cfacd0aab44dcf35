//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**: two instances
/// with the same attribute values are the same thing. A ticket line item is
/// the canonical example here — `(adult, 2)` is `(adult, 2)` no matter who
/// typed it in. To "modify" one, construct a new one.
///
/// The bounds keep value objects cheap to copy, comparable, and debuggable.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
