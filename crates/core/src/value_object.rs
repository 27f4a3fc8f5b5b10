//! Value object trait: equality by value, not identity.

/// Marker trait for immutable domain values that are defined entirely by
/// their attributes, such as a reorder request or a per-line allocation
/// status. Two value objects with the same attribute values are the same
/// value; entities carry identity instead.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
