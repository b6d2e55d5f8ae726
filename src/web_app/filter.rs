// web_app/filter.rs - Pure listing filter engine
//
// filter_listings is total: an empty result is a valid output, not an
// error. The filter is stable - survivors keep their input order and no
// ranking or re-sort is applied.

use crate::web_app::model::{CategoryFilter, ChemicalListing, FilterState};

/// Search predicate over name, CAS number, and supplier.
///
/// Name and supplier match case-insensitively; CAS numbers are matched
/// as-is (they are not alphabetic). A listing passes if any of the three
/// match. The empty term matches everything.
pub fn matches_search(listing: &ChemicalListing, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    listing.name.to_lowercase().contains(&needle)
        || listing.cas.contains(term)
        || listing.supplier.to_lowercase().contains(&needle)
}

pub fn matches_category(listing: &ChemicalListing, filter: CategoryFilter) -> bool {
    filter.matches(listing.category)
}

/// Apply both predicates, preserving insertion order.
pub fn filter_listings(listings: &[ChemicalListing], state: &FilterState) -> Vec<ChemicalListing> {
    listings
        .iter()
        .filter(|l| matches_search(l, &state.search_term) && matches_category(l, state.category))
        .cloned()
        .collect()
}
