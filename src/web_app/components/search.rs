// web_app/components/search.rs - Search and filter controls
//
// Both controls share the page's FilterState signal and go through the
// reducer; they never assign fields directly.

use leptos::prelude::*;

use crate::web_app::model::{Category, CategoryFilter, FilterState};
use crate::web_app::state::{reduce, FilterEvent};

/// Search input bound to the filter state.
///
/// Dispatches SearchChanged on every keystroke; filtering is synchronous,
/// so there is no submit button and no debounce.
#[component]
pub fn SearchBar(
    /// Shared filter state
    filter: RwSignal<FilterState>,
) -> impl IntoView {
    view! {
        <div class="relative flex-1">
            <div class="absolute inset-y-0 left-0 pl-3 flex items-center pointer-events-none">
                <span class="text-gray-400">"🔍"</span>
            </div>
            <input
                type="text"
                placeholder="Search chemicals by name, CAS number, or supplier..."
                class="w-full pl-10 pr-4 py-2 border border-gray-300 rounded-lg \
                       focus:ring-2 focus:ring-blue-500 focus:border-transparent \
                       outline-none transition-shadow shadow-sm"
                prop:value=move || filter.get().search_term
                on:input=move |ev| {
                    let term = event_target_value(&ev);
                    filter.update(|s| *s = reduce(s, FilterEvent::SearchChanged(term)));
                }
            />
        </div>
    }
}

/// Category selector over "all" plus the closed category set.
///
/// Option values round-trip through CategoryFilter's string form; an
/// unrecognized value falls back to All rather than panicking.
#[component]
pub fn CategorySelect(
    /// Shared filter state
    filter: RwSignal<FilterState>,
) -> impl IntoView {
    let options: Vec<CategoryFilter> = std::iter::once(CategoryFilter::All)
        .chain(Category::ALL.into_iter().map(CategoryFilter::Only))
        .collect();

    view! {
        <div class="flex items-center gap-2">
            <span class="text-gray-500">"▼"</span>
            <select
                class="border border-gray-300 rounded-md px-3 py-2 bg-white \
                       focus:ring-2 focus:ring-blue-500 focus:border-transparent \
                       outline-none cursor-pointer shadow-sm"
                on:change=move |ev| {
                    let selected = event_target_value(&ev).parse().unwrap_or_default();
                    filter.update(|s| *s = reduce(s, FilterEvent::CategorySelected(selected)));
                }
            >
                {options.into_iter().map(|opt| {
                    view! {
                        <option
                            value=opt.as_str()
                            selected=move || filter.get().category == opt
                        >
                            {opt.display_label()}
                        </option>
                    }
                }).collect_view()}
            </select>
        </div>
    }
}

/// Search-and-filter panel combining both controls.
#[component]
pub fn FilterControls(
    /// Shared filter state
    filter: RwSignal<FilterState>,
) -> impl IntoView {
    view! {
        <div class="bg-white rounded-lg shadow-sm p-6 mb-8">
            <div class="flex flex-col md:flex-row gap-4">
                <SearchBar filter=filter />
                <CategorySelect filter=filter />
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selector_option_order() {
        let options: Vec<CategoryFilter> = std::iter::once(CategoryFilter::All)
            .chain(Category::ALL.into_iter().map(CategoryFilter::Only))
            .collect();

        assert_eq!(options.len(), 7);
        assert_eq!(options[0], CategoryFilter::All);
        assert_eq!(options[1], CategoryFilter::Only(Category::Acid));
        assert_eq!(options[6], CategoryFilter::Only(Category::Organic));
    }

    #[test]
    fn test_selector_values_parse_back() {
        // Simulates the on:change path for every option the control offers
        let options = std::iter::once(CategoryFilter::All)
            .chain(Category::ALL.into_iter().map(CategoryFilter::Only));
        for opt in options {
            let parsed: CategoryFilter = opt.as_str().parse().unwrap_or_default();
            assert_eq!(parsed, opt);
        }
    }

    #[test]
    fn test_unknown_selector_value_falls_back_to_all() {
        let parsed: CategoryFilter = "bogus".parse().unwrap_or_default();
        assert_eq!(parsed, CategoryFilter::All);
    }

    #[test]
    fn test_search_placeholder() {
        let placeholder = "Search chemicals by name, CAS number, or supplier...";
        assert!(placeholder.contains("CAS number"));
        assert!(placeholder.contains("supplier"));
    }
}
