//! Validated item names.

use crate::error::{InventoryError, InventoryResult};
use crate::value_object::ValueObject;

/// Name of a stocked item.
///
/// Validity is judged on the trimmed text, but the original text is what gets
/// stored, so `" apple"` and `"apple"` are distinct keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ItemName(String);

impl ItemName {
    /// Parse an item name, rejecting empty or whitespace-only input.
    pub fn parse(raw: &str) -> InventoryResult<Self> {
        if raw.trim().is_empty() {
            return Err(InventoryError::invalid_argument(
                "item must be a non-empty string",
            ));
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl ValueObject for ItemName {}

impl core::fmt::Display for ItemName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ItemName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
