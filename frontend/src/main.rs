//! Frontend application entry point.

use frontend::app::App;

fn main() {
    #[cfg(not(feature = "server"))]
    dioxus::launch(App);

    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        use dioxus::server::axum;

        Ok(dioxus::server::router(App).route(
            "/_download_wget",
            axum::routing::get(backend::server_extra::download_script::download_wget_script),
        ))
    });
}
