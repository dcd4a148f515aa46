//! Value object trait: equality by value, not identity.
//!
//! Item names and quantities have no identity of their own; two of them with
//! the same value are the same thing. Their constructors are the only place
//! input validation happens, so once a caller holds one it is known-good.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new one. The bounds keep them cheap to copy around, comparable in
/// tests and printable in logs.
///
/// ```ignore
/// let a = Quantity::non_negative(2.5)?;
/// let b = Quantity::non_negative(2.5)?;
/// assert_eq!(a, b);
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
