// web_app/model/mod.rs - Shared data models for client and server
//
// These types are used throughout the application: the listing record,
// the closed category enumeration, and the transient filter state.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Chemical category enumeration
///
/// A closed set shared between the dataset and the category selector, so a
/// listing can never carry a category the filter does not know about.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Acid,
    Base,
    Solvent,
    InorganicSalt,
    Carbonate,
    Organic,
}

impl Category {
    /// Canonical ordering, drives the selector control.
    pub const ALL: [Category; 6] = [
        Category::Acid,
        Category::Base,
        Category::Solvent,
        Category::InorganicSalt,
        Category::Carbonate,
        Category::Organic,
    ];

    /// Human-readable label shown in badges and selector options.
    pub fn label(self) -> &'static str {
        match self {
            Category::Acid => "Acid",
            Category::Base => "Base",
            Category::Solvent => "Solvent",
            Category::InorganicSalt => "Inorganic Salt",
            Category::Carbonate => "Carbonate",
            Category::Organic => "Organic",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Error for a selector value that names no known category.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown category: {0}")]
pub struct UnknownCategory(pub String);

impl std::str::FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.label() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// Category selector value: either the "all" sentinel or a single category.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Wire value used by the `<select>` control.
    pub fn as_str(self) -> &'static str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Only(c) => c.label(),
        }
    }

    /// Option label shown to the user.
    pub fn display_label(self) -> &'static str {
        match self {
            CategoryFilter::All => "All Categories",
            CategoryFilter::Only(c) => c.label(),
        }
    }

    /// Category predicate: `All` passes everything.
    pub fn matches(self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => c == category,
        }
    }
}

impl std::fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_label())
    }
}

impl std::str::FromStr for CategoryFilter {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            Ok(CategoryFilter::All)
        } else {
            s.parse::<Category>().map(CategoryFilter::Only)
        }
    }
}

/// A marketplace listing. Immutable for the lifetime of the page.
///
/// Purity, quantity, price, and listed_date are display strings; no
/// arithmetic is ever performed on them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChemicalListing {
    pub id: u32,
    pub name: String,
    pub purity: String,
    pub quantity: String,
    pub price: String,
    pub supplier: String,
    pub location: String,
    pub category: Category,
    /// CAS registry number, secondary search key.
    pub cas: String,
    /// Free-text relative time ("2 days ago"), not a timestamp.
    pub listed_date: String,
    pub in_stock: bool,
}

/// Transient filter state owned by the browse page.
///
/// Initialized empty/"all" on load, updated on every keystroke or
/// selection change, never persisted.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterState {
    pub search_term: String,
    pub category: CategoryFilter,
}
