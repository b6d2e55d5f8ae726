// tests/catalog_tests.rs - Listing catalog tests
//
// The catalog is the injected read-only data source; these tests pin the
// sample dataset and the provider interface.

use chem_marketplace::web_app::catalog::{sample_listings, ListingCatalog, ListingSource};
use chem_marketplace::web_app::model::{Category, ChemicalListing};

#[test]
fn sample_has_four_listings() {
    let catalog = ListingCatalog::sample();
    assert_eq!(catalog.len(), 4);
    assert!(!catalog.is_empty());
}

#[test]
fn ids_are_unique() {
    let listings = sample_listings();
    let mut ids: Vec<u32> = listings.iter().map(|l| l.id).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), listings.len());
}

#[test]
fn sample_dataset_values() {
    let listings = sample_listings();

    assert_eq!(listings[0].name, "Sodium Chloride (NaCl)");
    assert_eq!(listings[0].category, Category::InorganicSalt);
    assert_eq!(listings[0].cas, "7647-14-5");
    assert_eq!(listings[0].purity, "99.5%");
    assert!(listings[0].in_stock);

    assert_eq!(listings[1].name, "Sulfuric Acid (H2SO4)");
    assert_eq!(listings[1].supplier, "Industrial Chemicals Ltd");
    assert_eq!(listings[1].location, "Chicago, IL");

    assert_eq!(listings[2].name, "Acetone (C3H6O)");
    assert_eq!(listings[2].category, Category::Solvent);
    assert_eq!(listings[2].listed_date, "3 hours ago");
    assert!(!listings[2].in_stock);

    assert_eq!(listings[3].name, "Calcium Carbonate (CaCO3)");
    assert_eq!(listings[3].quantity, "2000 kg");
    assert_eq!(listings[3].price, "$0.15/kg");
}

#[test]
fn categories_appear_in_selector_set() {
    // Every dataset category must be offered by the selector control
    for listing in sample_listings() {
        assert!(Category::ALL.contains(&listing.category));
    }
}

#[test]
fn catalog_clone_shares_the_same_listings() {
    let catalog = ListingCatalog::sample();
    let clone = catalog.clone();
    assert_eq!(catalog.listings(), clone.listings());
}

#[test]
fn catalog_works_behind_the_source_trait() {
    fn total(source: &dyn ListingSource) -> usize {
        source.listings().len()
    }
    let catalog = ListingCatalog::sample();
    assert_eq!(total(&catalog), 4);
}

#[test]
fn custom_catalog_preserves_insertion_order() {
    let listing = |id: u32, name: &str| ChemicalListing {
        id,
        name: name.to_string(),
        purity: "99%".to_string(),
        quantity: "10 kg".to_string(),
        price: "$1.00/kg".to_string(),
        supplier: "Test Supplier".to_string(),
        location: "Testville".to_string(),
        category: Category::Organic,
        cas: "50-00-0".to_string(),
        listed_date: "today".to_string(),
        in_stock: true,
    };

    let catalog = ListingCatalog::new(vec![
        listing(10, "Formaldehyde"),
        listing(5, "Methanol"),
        listing(7, "Ethanol"),
    ]);
    let ids: Vec<u32> = catalog.listings().iter().map(|l| l.id).collect();
    assert_eq!(ids, vec![10, 5, 7]);
}

#[test]
fn default_catalog_is_the_sample() {
    assert_eq!(
        ListingCatalog::default().listings(),
        ListingCatalog::sample().listings()
    );
}
