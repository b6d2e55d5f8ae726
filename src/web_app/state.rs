// web_app/state.rs - Filter state reducer
//
// The view never mutates FilterState directly: DOM events map to
// FilterEvents and flow through reduce(), so the signal only ever holds
// states produced here. The reducer is pure; rendering technology is a
// consumer, not a dependency.

use crate::web_app::model::{CategoryFilter, FilterState};

/// Every way the filter state can change.
#[derive(Clone, Debug, PartialEq)]
pub enum FilterEvent {
    /// The search input changed (fires on every keystroke).
    SearchChanged(String),
    /// A category was picked in the selector.
    CategorySelected(CategoryFilter),
    /// "Clear Filters" was pressed.
    FiltersCleared,
}

/// Produce the next state. Total: every event maps to a valid state.
pub fn reduce(state: &FilterState, event: FilterEvent) -> FilterState {
    tracing::debug!(?event, "filter state transition");
    match event {
        FilterEvent::SearchChanged(search_term) => FilterState {
            search_term,
            category: state.category,
        },
        FilterEvent::CategorySelected(category) => FilterState {
            search_term: state.search_term.clone(),
            category,
        },
        FilterEvent::FiltersCleared => FilterState::default(),
    }
}
