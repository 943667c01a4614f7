//! Menu filtering, sorting and search

use shared::MenuItem;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Category tab selection
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    pub fn matches(&self, item: &MenuItem) -> bool {
        match self {
            Self::All => true,
            Self::Only(category) => item.category == *category,
        }
    }
}

impl From<&str> for CategoryFilter {
    fn from(value: &str) -> Self {
        if value == "All" {
            Self::All
        } else {
            Self::Only(value.to_string())
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("All"),
            Self::Only(category) => f.write_str(category),
        }
    }
}

/// Sort dropdown selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Service order
    #[default]
    Default,
    PriceLow,
    PriceHigh,
    Name,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::PriceLow => "price-low",
            Self::PriceHigh => "price-high",
            Self::Name => "name",
        }
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(Self::Default),
            "price-low" => Ok(Self::PriceLow),
            "price-high" => Ok(Self::PriceHigh),
            "name" => Ok(Self::Name),
            other => Err(format!("unknown sort key: {other}")),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Items of the selected category, in service order
pub fn filter_by_category(items: &[MenuItem], category: &CategoryFilter) -> Vec<MenuItem> {
    items
        .iter()
        .filter(|item| category.matches(item))
        .cloned()
        .collect()
}

fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Stable in-place sort; [`SortKey::Default`] leaves the order alone.
pub fn apply_sorting(items: &mut [MenuItem], sort: SortKey) {
    match sort {
        SortKey::PriceLow => items.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortKey::PriceHigh => items.sort_by(|a, b| b.price.total_cmp(&a.price)),
        SortKey::Name => items.sort_by(|a, b| compare_names(&a.name, &b.name)),
        SortKey::Default => {}
    }
}

/// Category filter followed by sorting
pub fn apply_filters(items: &[MenuItem], category: &CategoryFilter, sort: SortKey) -> Vec<MenuItem> {
    let mut filtered = filter_by_category(items, category);
    apply_sorting(&mut filtered, sort);
    filtered
}

/// Case-insensitive substring match on name or category over the full
/// list. A blank query matches everything.
pub fn search_items(items: &[MenuItem], query: &str) -> Vec<MenuItem> {
    if query.trim().is_empty() {
        return items.to_vec();
    }

    let needle = query.to_lowercase();
    items
        .iter()
        .filter(|item| {
            item.name.to_lowercase().contains(&needle)
                || item.category.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}
