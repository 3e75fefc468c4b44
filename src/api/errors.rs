use thiserror_no_std::Error;

/// Result type used throughout the crate.
pub type CapacityResult<T> = Result<T, CapacityError>;

/// Represents errors that can occur when combining, parsing or formatting capacities.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CapacityError {
    /// A capacity was combined with an operand of an incompatible dimension,
    /// e.g. a nonzero plain number was added to it, or two capacities were multiplied.
    #[error("Cannot perform {operation} between Capacity and {operand}")]
    Dimension {
        operation: &'static str,
        operand: String,
    },

    /// Division by a zero valued divisor.
    #[error("Attempted to divide a capacity by zero")]
    DivisionByZero,

    /// Modulo by a zero valued divisor.
    #[error("Attempted to take the modulo of a capacity by zero")]
    ModuloByZero,

    /// Text that is not a capacity, or that names an unknown unit.
    #[error("Invalid capacity: {0:?}")]
    Parse(String),

    /// A malformed unit format specifier, or one naming an unknown unit.
    #[error("Invalid capacity format specifier: {0:?}")]
    Format(String),
}

impl CapacityError {
    /// Creates a [CapacityError::Dimension] for the named operation.
    pub(crate) fn dimension(operation: &'static str, operand: impl ToString) -> Self {
        CapacityError::Dimension {
            operation,
            operand: operand.to_string(),
        }
    }

    /// Returns true for illegal mixing of capacities and dimensionless numbers.
    pub fn is_dimension_error(&self) -> bool {
        matches!(self, CapacityError::Dimension { .. })
    }

    /// Returns true for division or modulo by zero.
    pub fn is_zero_division(&self) -> bool {
        matches!(
            self,
            CapacityError::DivisionByZero | CapacityError::ModuloByZero
        )
    }

    /// Returns true for malformed text input, be it a capacity or a format specifier.
    pub fn is_value_error(&self) -> bool {
        matches!(self, CapacityError::Parse(_) | CapacityError::Format(_))
    }
}
