#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    use axum::{routing::get, Json, Router};
    use leptos::prelude::*;
    use leptos_axum::{generate_route_list, LeptosRoutes};
    use portfolio_site::app::*;
    use portfolio_site::portfolio::{static_portfolio, PortfolioData};
    use tower_http::trace::TraceLayer;
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let conf = get_configuration(None).expect("Should be able to read leptos configuration");
    let addr = conf.leptos_options.site_addr;
    let leptos_options = conf.leptos_options;
    // Generate the list of routes in your Leptos App
    let routes = generate_route_list(App);

    let bundled = static_portfolio();
    for issue in bundled.validate() {
        tracing::warn!("bundled portfolio: {issue}");
    }

    // Lets a deployment point PORTFOLIO_API_URL at itself
    async fn portfolio_json() -> Json<PortfolioData> {
        Json(static_portfolio().clone())
    }

    let app = Router::new()
        .route("/api/portfolio", get(portfolio_json))
        .leptos_routes(&leptos_options, routes, {
            let leptos_options = leptos_options.clone();
            move || shell(leptos_options.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(shell))
        .layer(TraceLayer::new_for_http())
        .with_state(leptos_options);

    tracing::info!("listening on http://{}", &addr);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Should be able to bind site address");
    axum::serve(listener, app.into_make_service())
        .await
        .expect("Server should run until shutdown");
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // no client-side main function
    // see lib.rs for hydration function instead
}
