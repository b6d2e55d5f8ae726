// web_app/app.rs - Root application component
//
// This is the entry point for the Leptos application.
// It sets up routing, meta tags, and the component tree.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::web_app::pages::BrowsePage;

/// Root application component
///
/// Sets up:
/// - Meta tags
/// - Router with routes
#[component]
pub fn App() -> impl IntoView {
    // Provide meta context for <Title>, <Meta>, etc.
    provide_meta_context();

    view! {
        // HTML meta tags
        <Title text="Ben Chemical - B2B Chemical Marketplace" />
        <Meta name="description" content="B2B marketplace for chemical trading and procurement" />
        <Meta name="viewport" content="width=device-width, initial-scale=1" />

        // Stylesheet link (Tailwind CSS)
        <Stylesheet id="leptos" href="/pkg/chem_marketplace.css" />

        // Router setup
        <Router>
            <main class="min-h-screen">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=BrowsePage />
                    <Route path=path!("/listings") view=BrowsePage />
                </Routes>
            </main>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gray-100 flex items-center justify-center">
            <div class="text-center">
                <h1 class="text-6xl font-bold text-gray-300 mb-4">"404"</h1>
                <p class="text-xl text-gray-600 mb-8">"Page not found"</p>
                <a
                    href="/"
                    class="px-6 py-3 bg-blue-600 text-white rounded-lg hover:bg-blue-700 transition-colors"
                >
                    "Back to Listings"
                </a>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_app_compiles() {
        // This test just verifies the module compiles correctly
        assert!(true);
    }
}
