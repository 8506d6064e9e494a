use std::fmt::Display;

use tracing::warn;

use crate::error::{BackpackError, Result};

/// Longest name an item may carry, in characters.
pub const MAX_NAME_LEN: usize = 49;

/// Longest category an item may carry, in characters.
pub const MAX_CATEGORY_LEN: usize = 29;

/// Lowest and highest accepted priority.
pub const PRIORITY_RANGE: std::ops::RangeInclusive<u8> = 1..=5;

/// Priority given to items whose requested priority lies outside [`PRIORITY_RANGE`].
pub const DEFAULT_PRIORITY: u8 = 3;

/// A single thing carried in the [`Backpack`](crate::Backpack).
///
/// Items are identified by their `name`. Matching is exact and case sensitive, so `"Agua"`
/// and `"agua"` are two different items.
///
/// # Usage
///```
/// use loadout_core::Item;
///
/// let item = Item::new("Bandage", "Cure", 4, 9).unwrap();
/// assert_eq!(item.priority(), 3); // out of range, coerced
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    name: String,
    category: String,
    count: u32,
    priority: u8,
}

impl Item {
    /// Builds an item, validating the text fields and clamping the priority.
    ///
    /// A `priority` outside `1..=5` is replaced with [`DEFAULT_PRIORITY`]. This is the only
    /// place the clamp happens.
    pub fn new<N, C>(name: N, category: C, count: u32, priority: i64) -> Result<Self>
    where
        N: Into<String>,
        C: Into<String>,
    {
        let name = name.into();
        let category = category.into();

        if name.is_empty() {
            return Err(BackpackError::InvalidItem("name cannot be empty".to_string()));
        }

        if name.chars().count() > MAX_NAME_LEN {
            return Err(BackpackError::InvalidItem(format!(
                "name is longer than {MAX_NAME_LEN} characters"
            )));
        }

        if category.chars().count() > MAX_CATEGORY_LEN {
            return Err(BackpackError::InvalidItem(format!(
                "category is longer than {MAX_CATEGORY_LEN} characters"
            )));
        }

        let priority = match u8::try_from(priority) {
            Ok(p) if PRIORITY_RANGE.contains(&p) => p,
            _ => {
                warn!(item = %name, requested = priority, "priority out of range, using default");
                DEFAULT_PRIORITY
            }
        };

        Ok(Self {
            name,
            category,
            count,
            priority,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn priority(&self) -> u8 {
        self.priority
    }
}

impl Display for Item {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({}) x{} [priority {}]",
            self.name, self.category, self.count, self.priority
        )
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn keeps_valid_priority() {
        for p in 1..=5 {
            let item = Item::new("Faca", "Arma", 1, p).unwrap();
            assert_eq!(item.priority() as i64, p);
        }
    }

    #[test]
    fn coerces_invalid_priority() {
        for p in [0, 6, -1, 255, 256, i64::MAX, i64::MIN] {
            let item = Item::new("Faca", "Arma", 1, p).unwrap();
            assert_eq!(item.priority(), DEFAULT_PRIORITY);
        }
    }

    #[test]
    fn rejects_empty_name() {
        assert!(matches!(
            Item::new("", "Arma", 1, 1),
            Err(BackpackError::InvalidItem(_))
        ));
    }

    #[test]
    fn length_limits() {
        let name = "a".repeat(MAX_NAME_LEN);
        assert!(Item::new(name.as_str(), "", 0, 1).is_ok());

        let name = "a".repeat(MAX_NAME_LEN + 1);
        assert!(Item::new(name, "", 0, 1).is_err());

        let category = "é".repeat(MAX_CATEGORY_LEN);
        assert!(Item::new("Faca", category, 0, 1).is_ok());

        let category = "b".repeat(MAX_CATEGORY_LEN + 1);
        assert!(Item::new("Faca", category, 0, 1).is_err());
    }

    #[test]
    fn display() {
        let item = Item::new("Agua", "Cura", 2, 4).unwrap();
        assert_eq!(item.to_string(), "Agua (Cura) x2 [priority 4]");
    }
}
