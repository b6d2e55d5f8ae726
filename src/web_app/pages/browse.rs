// web_app/pages/browse.rs - Listing browser page
//
// Wires the injected catalog, the filter state, and the filter engine
// together. Input events dispatch through the reducer; the filtered
// sequence is a derived signal, so every state change re-renders
// synchronously.

use leptos::prelude::*;

use crate::web_app::catalog::ListingCatalog;
use crate::web_app::components::{Badge, Button, FilterControls, ListingsGrid, SecondaryButton};
use crate::web_app::filter::filter_listings;
use crate::web_app::model::FilterState;
use crate::web_app::state::{reduce, FilterEvent};

/// Main marketplace page.
#[component]
pub fn BrowsePage() -> impl IntoView {
    // The server shell injects the catalog; standalone mounts fall back to
    // the sample data.
    let catalog = use_context::<ListingCatalog>().unwrap_or_default();
    let total = catalog.len();

    let filter = RwSignal::new(FilterState::default());

    let filtered = Signal::derive(move || filter_listings(catalog.listings(), &filter.get()));

    let on_clear = Callback::new(move |()| {
        filter.update(|s| *s = reduce(s, FilterEvent::FiltersCleared));
    });

    view! {
        <div class="min-h-screen bg-gray-50">
            // Header
            <header class="bg-white shadow-sm border-b border-gray-200">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                    <div class="flex justify-between items-center h-16">
                        <div class="flex items-center gap-2">
                            <h1 class="text-2xl font-bold text-blue-900">"Ben Chemical"</h1>
                            <Badge>"B2B"</Badge>
                        </div>
                        <div class="flex items-center gap-4">
                            <SecondaryButton>"Sign In"</SecondaryButton>
                            <Button>"+ List Chemical"</Button>
                        </div>
                    </div>
                </div>
            </header>

            // Search, count line, and listing grid
            <main class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
                <FilterControls filter=filter />
                <ListingsGrid listings=filtered total=total on_clear=on_clear />
            </main>

            // Footer
            <footer class="bg-gray-900 text-white mt-16">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-12">
                    <div class="grid md:grid-cols-4 gap-8">
                        <div>
                            <h3 class="text-lg font-semibold mb-4">"Ben Chemical"</h3>
                            <p class="text-gray-400 text-sm">
                                "The leading B2B marketplace for chemical trading and procurement."
                            </p>
                        </div>
                        <FooterLinks
                            title="For Buyers"
                            items=["Browse Chemicals", "Request Quotes", "Bulk Orders", "Quality Assurance"]
                        />
                        <FooterLinks
                            title="For Suppliers"
                            items=["List Products", "Manage Inventory", "Track Orders", "Analytics"]
                        />
                        <FooterLinks
                            title="Support"
                            items=["Contact Us", "Safety Guidelines", "Documentation", "Compliance"]
                        />
                    </div>
                    <div class="border-t border-gray-800 mt-8 pt-8 text-center text-sm text-gray-400">
                        <p>"© 2024 Ben Chemical. All rights reserved. Licensed chemical marketplace."</p>
                    </div>
                </div>
            </footer>
        </div>
    }
}

/// Footer link list. Static chrome, no handlers.
#[component]
fn FooterLinks(
    title: &'static str,
    items: [&'static str; 4],
) -> impl IntoView {
    view! {
        <div>
            <h4 class="font-semibold mb-3">{title}</h4>
            <ul class="space-y-2 text-sm text-gray-400">
                {items.into_iter().map(|item| view! { <li>{item}</li> }).collect_view()}
            </ul>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::web_app::model::{Category, CategoryFilter};

    #[test]
    fn test_initial_filter_state() {
        let state = FilterState::default();
        assert!(state.search_term.is_empty());
        assert_eq!(state.category, CategoryFilter::All);
    }

    #[test]
    fn test_default_state_shows_whole_catalog() {
        let catalog = ListingCatalog::sample();
        let filtered = filter_listings(catalog.listings(), &FilterState::default());
        assert_eq!(filtered.len(), catalog.len());
    }

    #[test]
    fn test_clear_filters_logic() {
        // The on_clear callback dispatches FiltersCleared
        let state = FilterState {
            search_term: "xyz123".to_string(),
            category: CategoryFilter::Only(Category::Carbonate),
        };
        let next = reduce(&state, FilterEvent::FiltersCleared);
        assert_eq!(next, FilterState::default());
    }

    #[test]
    fn test_derived_filter_reacts_to_term() {
        let catalog = ListingCatalog::sample();
        let state = FilterState {
            search_term: "acid".to_string(),
            category: CategoryFilter::All,
        };
        let filtered = filter_listings(catalog.listings(), &state);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Sulfuric Acid (H2SO4)");
    }
}
