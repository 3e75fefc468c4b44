//! # Capacity
//! A value type for digital storage capacities (file sizes, memory, bandwidth),
//! with dimension checked arithmetic, parsing and human readable formatting.
//!
//! ```
//! use capacity::{from_string, units::*, Scalar};
//!
//! let size = MIB * 0.5;
//! assert_eq!(size.to_string(), "512 KiB");
//! assert_eq!(format!("{:?}", size), "512*KiB");
//! assert_eq!(from_string("1119.63 * TB").unwrap(), GB * 1_119_630);
//! assert_eq!((MIB * 2 + BIT).floor_div(MIB), Ok(Scalar::Int(2)));
//! ```

/// Public High Level API
pub mod api {
    /// The [Capacity](capacity::Capacity) value type itself.
    pub mod capacity;

    /// Errors raised when mixing dimensions, dividing by zero or parsing text.
    pub mod errors;

    /// Named units (`bit`, `byte`, `KiB` ... `EiB`, `KB` ... `EB`) and the unit table.
    pub mod units;

    /// Dynamically typed operands, for arithmetic where either side may be a plain number.
    pub mod value;
}

/// Behaviour of [Capacity](api::capacity::Capacity) that isn't part of its type definition.
pub mod implementation {
    /// Operator overloads and checked arithmetic.
    pub mod arithmetic;

    /// Friendly, exact and per-unit textual rendering.
    pub mod formatting;

    /// Parsing capacities from text.
    pub mod parsing;

    /// String based serde support.
    #[cfg(feature = "serde")]
    pub mod serialization;
}

pub mod utilities {
    /// Exact parsing of decimal literals.
    pub mod decimal;

    /// The tagged integer/float number backing every capacity.
    pub mod scalar;
}

pub use api::capacity::Capacity;
pub use api::errors::{CapacityError, CapacityResult};
pub use api::units;
pub use api::units::{unit_by_name, Unit};
pub use api::value::Value;
pub use implementation::parsing::from_string;
pub use utilities::scalar::Scalar;
