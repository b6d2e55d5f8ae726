// web_app/components/listing.rs - Listing display components
//
// Components for displaying chemical listings:
// - ListingCard: Grid card showing every listing attribute
// - ListingsGrid: Grid layout with count line and empty-state fallback
// - EmptyState: Zero-results message with the Clear Filters action

use leptos::prelude::*;

use super::common::{Badge, Button, SecondaryButton};
use crate::web_app::model::ChemicalListing;

/// Results count line shown above the grid.
pub fn count_line(shown: usize, total: usize) -> String {
    format!("Showing {shown} of {total} chemical listings")
}

/// Card for a single listing.
///
/// "Request Quote" is disabled for out-of-stock listings; it and
/// "Details" carry no behavior.
#[component]
pub fn ListingCard(
    /// The listing to display
    listing: ChemicalListing,
) -> impl IntoView {
    let in_stock = listing.in_stock;

    view! {
        <div class="bg-white rounded-xl shadow-sm hover:shadow-lg transition-shadow \
                    border border-gray-100 p-5 flex flex-col">
            // Header: name, CAS line, availability badge
            <div class="flex justify-between items-start mb-4">
                <div>
                    <h3 class="text-lg font-bold text-blue-900">{listing.name.clone()}</h3>
                    <p class="text-sm text-gray-500">"CAS: " {listing.cas.clone()}</p>
                </div>
                {if in_stock {
                    view! { <Badge variant="green">"In Stock"</Badge> }.into_any()
                } else {
                    view! { <Badge variant="red">"Out of Stock"</Badge> }.into_any()
                }}
            </div>

            <div class="space-y-3 flex-1">
                <div class="flex justify-between">
                    <span class="text-sm text-gray-600">"Purity:"</span>
                    <span class="font-medium">{listing.purity.clone()}</span>
                </div>
                <div class="flex justify-between">
                    <span class="text-sm text-gray-600">"Quantity:"</span>
                    <span class="font-medium">{listing.quantity.clone()}</span>
                </div>
                <div class="flex justify-between items-center">
                    <span class="text-sm text-gray-600">"Price:"</span>
                    <span class="font-bold text-green-600 text-lg">{listing.price.clone()}</span>
                </div>

                // Supplier block
                <div class="border-t border-gray-100 pt-3 space-y-2">
                    <div class="text-sm font-medium text-gray-600">
                        {listing.supplier.clone()}
                    </div>
                    <div class="flex items-center text-sm text-gray-500">
                        <span class="mr-1">"📍"</span>
                        {listing.location.clone()}
                    </div>
                    <div class="flex items-center text-sm text-gray-500">
                        <span class="mr-1">"📅"</span>
                        "Listed " {listing.listed_date.clone()}
                    </div>
                </div>

                <div class="pt-2">
                    <Badge variant="outline">{listing.category.label()}</Badge>
                </div>
            </div>

            // Placeholder actions
            <div class="mt-4 flex gap-2">
                <Button disabled=!in_stock class="flex-1">
                    "Request Quote"
                </Button>
                <SecondaryButton>
                    "Details"
                </SecondaryButton>
            </div>
        </div>
    }
}

/// Empty-state block shown when no listing survives the filter.
#[component]
pub fn EmptyState(
    /// Resets the filter state to its defaults
    on_clear: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="text-center py-12">
            <p class="text-gray-500">"No chemicals found matching your search criteria."</p>
            <button
                type="button"
                class="mt-4 px-4 py-2 bg-white text-gray-700 rounded-lg hover:bg-gray-50 \
                       transition-colors border border-gray-300 font-medium shadow-sm"
                on:click=move |_| on_clear.run(())
            >
                "Clear Filters"
            </button>
        </div>
    }
}

/// Grid of listing cards with count line and empty-state fallback.
#[component]
pub fn ListingsGrid(
    /// Filtered listings to display, in catalog order
    listings: Signal<Vec<ChemicalListing>>,
    /// Size of the unfiltered catalog
    total: usize,
    /// Clear-filters callback for the empty state
    on_clear: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="w-full">
            <div class="mb-6">
                <p class="text-gray-600">
                    {move || count_line(listings.get().len(), total)}
                </p>
            </div>

            <Show
                when=move || !listings.get().is_empty()
                fallback=move || view! { <EmptyState on_clear=on_clear /> }
            >
                <div class="grid gap-6 md:grid-cols-2 lg:grid-cols-3">
                    <For
                        each=move || listings.get()
                        key=|l| l.id
                        children=move |listing| {
                            view! { <ListingCard listing=listing /> }
                        }
                    />
                </div>
            </Show>
        </div>
    }
}
