//! Validated stock amounts and thresholds.
//!
//! Quantities are plain `f64` underneath. Anything that is not a finite number
//! (NaN, +/-inf) is treated the same as a non-numeric input and rejected.

use crate::error::{InventoryError, InventoryResult};
use crate::value_object::ValueObject;

/// A stock amount used by add/remove.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct Quantity(f64);

impl Quantity {
    /// Amount for an addition: finite and `>= 0`.
    pub fn non_negative(value: f64) -> InventoryResult<Self> {
        if !value.is_finite() || value < 0.0 {
            return Err(InventoryError::invalid_argument(format!(
                "quantity must be a non-negative number (got {value})"
            )));
        }
        Ok(Self(value))
    }

    /// Amount for a removal: finite and `> 0`.
    pub fn positive(value: f64) -> InventoryResult<Self> {
        if !value.is_finite() || value <= 0.0 {
            return Err(InventoryError::invalid_argument(format!(
                "quantity must be a positive number (got {value})"
            )));
        }
        Ok(Self(value))
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl ValueObject for Quantity {}

/// Cut-off for the low-stock check.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct Threshold(f64);

impl Threshold {
    pub const DEFAULT: f64 = 5.0;

    /// Finite and `>= 0`. Zero is accepted even though nothing can be below it.
    pub fn new(value: f64) -> InventoryResult<Self> {
        if !value.is_finite() || value < 0.0 {
            return Err(InventoryError::invalid_argument(format!(
                "threshold must be a non-negative number (got {value})"
            )));
        }
        Ok(Self(value))
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

impl ValueObject for Threshold {}
