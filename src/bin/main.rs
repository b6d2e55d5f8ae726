// Leptos web application server
//
// Leptos' view! macro builds deeply-nested generic types; the default
// recursion limit overflows when resolving their layout.
#![recursion_limit = "256"]

// This binary starts the web server with:
// - Actix-web for HTTP serving
// - Leptos for SSR (server-side rendering)
// - Static file serving for the WASM bundle
//
// There is no data backend: the listing catalog is built at startup and
// injected into the component tree as context.

#[cfg(feature = "ssr")]
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    use actix_files::Files;
    use actix_web::{web, App, HttpServer};
    use chem_marketplace::web_app::app::App as WebApp;
    use chem_marketplace::web_app::catalog::ListingCatalog;
    use leptos::prelude::*;
    use leptos_actix::{generate_route_list, LeptosRoutes};
    use leptos_meta::MetaTags;

    // Initialize logging
    tracing_subscriber::fmt()
        .with_target(false)
        .with_thread_ids(false)
        .with_max_level(tracing::Level::INFO)
        .init();

    // The sample catalog stands in for a real listing source; swapping it
    // out here is the only change a production data source needs.
    let catalog = ListingCatalog::sample();
    tracing::info!("Serving {} chemical listings", catalog.len());

    // Leptos configuration
    let conf = leptos_config::get_configuration(None).expect("could not read configuration");
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;
    let site_root = leptos_options.site_root.clone();

    tracing::info!("Starting server at http://{}", addr);

    HttpServer::new(move || {
        // Generate the list of routes in the Leptos App
        let routes = generate_route_list(WebApp);
        let leptos_options_inner = leptos_options.clone();
        let site_root_str = site_root.clone().to_string();
        let catalog = catalog.clone();

        App::new()
            // Serve JS/WASM/CSS from pkg directory
            .service(Files::new("/pkg", format!("{site_root_str}/pkg")))
            // Leptos routes for SSR, with the catalog provided as context
            .leptos_routes_with_context(
                routes,
                move || provide_context(catalog.clone()),
                {
                    let leptos_options = leptos_options_inner.clone();
                    move || {
                        view! {
                            <!DOCTYPE html>
                            <html lang="en">
                                <head>
                                    <meta charset="utf-8"/>
                                    <meta name="viewport" content="width=device-width, initial-scale=1"/>
                                    <AutoReload options=leptos_options.clone() />
                                    <HydrationScripts options=leptos_options.clone()/>
                                    <MetaTags/>
                                </head>
                                <body>
                                    <WebApp/>
                                </body>
                            </html>
                        }
                    }
                },
            )
            .app_data(web::Data::new(leptos_options_inner.clone()))
    })
    .bind(&addr)?
    .run()
    .await
}

#[cfg(not(feature = "ssr"))]
fn main() {
    panic!("This binary requires the 'ssr' feature. Run with: cargo leptos watch");
}
