//! Closed set of look slot categories.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Category of a look slot.
///
/// The set is closed: customization overrides are keyed by this enum, which
/// rules out the typo-driven bugs a raw string key would allow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Outerwear,
    Top,
    Bottom,
    Shoes,
    Accessories,
}

impl Category {
    /// All categories, in the display order a look is laid out.
    pub const ALL: [Category; 5] = [
        Category::Outerwear,
        Category::Top,
        Category::Bottom,
        Category::Shoes,
        Category::Accessories,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Outerwear => "outerwear",
            Category::Top => "top",
            Category::Bottom => "bottom",
            Category::Shoes => "shoes",
            Category::Accessories => "accessories",
        }
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "outerwear" => Ok(Category::Outerwear),
            "top" => Ok(Category::Top),
            "bottom" => Ok(Category::Bottom),
            "shoes" => Ok(Category::Shoes),
            "accessories" => Ok(Category::Accessories),
            other => Err(DomainError::validation(format!(
                "unknown category: {other}"
            ))),
        }
    }
}
