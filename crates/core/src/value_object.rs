//! Value object trait: equality by value, not identity.
//!
//! Contact fields (name, phone, birthday) have no identity of their own. Two
//! phones wrapping the same digits are the same phone.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. Validation runs
/// once, in the constructor; there is no way to obtain an instance that
/// violates the type's format rule, and no setter to break it later. To
/// "change" a value, build a new one.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Phone(String);
///
/// impl ValueObject for Phone {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug + core::fmt::Display {}
