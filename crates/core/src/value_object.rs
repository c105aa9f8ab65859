//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are immutable and compared by their attribute values. A
/// parsed `Cpf` holding the digits `11144477735` equals any other `Cpf` built
/// from the same digits, no matter how the input was punctuated.
///
/// Constructors of value objects are expected to normalize and validate, so a
/// value that exists is a value that is valid:
///
/// ```ignore
/// let a = Cpf::parse("111.444.777-35")?;
/// let b = Cpf::parse("11144477735")?;
/// assert_eq!(a, b);
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
