// web_app/catalog.rs - Injected read-only listing source
//
// The page never reaches into a hardcoded literal: it pulls listings from
// a ListingSource provided via context. Production builds swap in a real
// data source here without touching the filter engine or the view.

use std::sync::Arc;

use crate::web_app::model::{Category, ChemicalListing};

/// Read-only provider of the listing sequence.
pub trait ListingSource {
    /// Listings in insertion order. The filter engine preserves this order.
    fn listings(&self) -> &[ChemicalListing];
}

/// Immutable in-memory catalog, fixed at startup.
///
/// Cheap to clone into Leptos context (`Arc` inside).
#[derive(Clone, Debug)]
pub struct ListingCatalog {
    listings: Arc<Vec<ChemicalListing>>,
}

impl ListingCatalog {
    /// Invariant: listing ids are unique across the sequence.
    pub fn new(listings: Vec<ChemicalListing>) -> Self {
        debug_assert!(
            {
                let mut ids: Vec<u32> = listings.iter().map(|l| l.id).collect();
                ids.sort_unstable();
                ids.windows(2).all(|w| w[0] != w[1])
            },
            "listing ids must be unique"
        );
        Self {
            listings: Arc::new(listings),
        }
    }

    /// The four canonical sample listings.
    pub fn sample() -> Self {
        Self::new(sample_listings())
    }

    pub fn listings(&self) -> &[ChemicalListing] {
        &self.listings
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }
}

impl ListingSource for ListingCatalog {
    fn listings(&self) -> &[ChemicalListing] {
        ListingCatalog::listings(self)
    }
}

impl Default for ListingCatalog {
    fn default() -> Self {
        Self::sample()
    }
}

/// Sample dataset backing the demo deployment.
pub fn sample_listings() -> Vec<ChemicalListing> {
    vec![
        ChemicalListing {
            id: 1,
            name: "Sodium Chloride (NaCl)".to_string(),
            purity: "99.5%".to_string(),
            quantity: "1000 kg".to_string(),
            price: "$0.25/kg".to_string(),
            supplier: "ChemCorp Industries".to_string(),
            location: "Houston, TX".to_string(),
            category: Category::InorganicSalt,
            cas: "7647-14-5".to_string(),
            listed_date: "2 days ago".to_string(),
            in_stock: true,
        },
        ChemicalListing {
            id: 2,
            name: "Sulfuric Acid (H2SO4)".to_string(),
            purity: "98%".to_string(),
            quantity: "500 L".to_string(),
            price: "$0.45/L".to_string(),
            supplier: "Industrial Chemicals Ltd".to_string(),
            location: "Chicago, IL".to_string(),
            category: Category::Acid,
            cas: "7664-93-9".to_string(),
            listed_date: "1 day ago".to_string(),
            in_stock: true,
        },
        ChemicalListing {
            id: 3,
            name: "Acetone (C3H6O)".to_string(),
            purity: "99.9%".to_string(),
            quantity: "200 L".to_string(),
            price: "$1.20/L".to_string(),
            supplier: "Solvent Solutions Inc".to_string(),
            location: "Newark, NJ".to_string(),
            category: Category::Solvent,
            cas: "67-64-1".to_string(),
            listed_date: "3 hours ago".to_string(),
            in_stock: false,
        },
        ChemicalListing {
            id: 4,
            name: "Calcium Carbonate (CaCO3)".to_string(),
            purity: "99%".to_string(),
            quantity: "2000 kg".to_string(),
            price: "$0.15/kg".to_string(),
            supplier: "Mineral Resources Co".to_string(),
            location: "Phoenix, AZ".to_string(),
            category: Category::Carbonate,
            cas: "471-34-1".to_string(),
            listed_date: "1 week ago".to_string(),
            in_stock: true,
        },
    ]
}
