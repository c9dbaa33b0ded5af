mod client;
mod model;

#[cfg(feature = "server")]
mod server;

use client::App;

fn main() {
    #[cfg(not(feature = "server"))]
    dioxus::launch(App);

    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        use dioxus_logger::tracing;

        use crate::server::{config::Config, error::expose_internal_errors, router, startup};

        dotenvy::dotenv().ok();
        let config = Config::from_env()?;
        expose_internal_errors(config.is_development());

        let state = startup::build_state(&config).await?;

        tracing::info!("Starting Trackify server");

        let server_routes = router::router(config.cors_origin.as_deref())?.with_state(state);
        let router = dioxus::server::router(App).merge(server_routes);

        Ok(router)
    })
}
