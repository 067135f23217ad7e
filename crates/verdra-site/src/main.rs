//! Verdra marketing site server

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use axum::{
        extract::Request,
        routing::{get, post},
        Router,
    };
    use leptos::*;
    use leptos_axum::{generate_route_list, handle_server_fns_with_context, LeptosRoutes};
    use tower_http::trace::TraceLayer;
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
    use verdra_core::{ClientConfig, VerdraClient};
    use verdra_site::api::health_check;
    use verdra_site::app::App;
    use verdra_site::fileserv::file_and_error_handler;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "verdra_site=debug,verdra_core=debug,tower_http=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let conf = get_configuration(None).await?;
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;
    let routes = generate_route_list(App);

    let client = VerdraClient::new(ClientConfig::from_env()?)?;
    tracing::info!("Scan service at {}", client.config().scan_api_url);
    tracing::info!("Signup service at {}", client.config().signup_url);

    // Server functions and SSR both reach the clients through context
    let context = move || provide_context(client.clone());
    let server_fn_context = context.clone();

    let app = Router::new()
        .route("/health", get(health_check))
        .route(
            "/api/*fn_name",
            post(move |req: Request| handle_server_fns_with_context(server_fn_context.clone(), req)),
        )
        .leptos_routes_with_context(&leptos_options, routes, context, App)
        .fallback(file_and_error_handler)
        .layer(TraceLayer::new_for_http())
        .with_state(leptos_options);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Verdra site listening on http://{}", addr);
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // The browser entry point is `verdra_site::hydrate`
}
