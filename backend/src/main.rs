mod config;
mod services;

use crate::config::AppConfig;
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use env_logger::Env;
use include_dir::{include_dir, Dir};
use log::{info, warn};
use mime_guess::from_path;
use std::thread;
use std::time::Duration;

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

/// Serves the embedded frontend bundle; unknown paths fall back to
/// `index.html` so the single-page app keeps its own routing.
async fn serve_embedded(req: HttpRequest) -> HttpResponse {
    let path = req.path().trim_start_matches('/');
    let file_path = if path.is_empty() { "index.html" } else { path };

    match STATIC_DIR.get_file(file_path) {
        Some(file) => {
            let mime = from_path(file_path).first_or_octet_stream();
            HttpResponse::Ok()
                .content_type(mime.as_ref())
                .body(file.contents().to_vec())
        }
        None => match STATIC_DIR.get_file("index.html") {
            Some(index) => HttpResponse::Ok()
                .content_type("text/html; charset=utf-8")
                .body(index.contents().to_vec()),
            None => HttpResponse::NotFound().body("Not Found"),
        },
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let config = AppConfig::from_env();
    let url = config.url();

    if !config.fonts_dir.is_dir() {
        warn!(
            "Fonts directory {} not found, PDF export will fail until it exists",
            config.fonts_dir.display()
        );
    }

    if config.open_browser {
        let url_clone = url.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(500));
            if let Err(e) = webbrowser::open(&url_clone) {
                warn!("Could not open browser at {}: {}", url_clone, e);
            }
        });
    }

    info!("Server running at {}", url);
    info!("SIAKAD API at {}", config.api_base_url);

    let bind = (config.host.clone(), config.port);
    let config = web::Data::new(config);

    HttpServer::new(move || {
        App::new()
            .app_data(web::JsonConfig::default().limit(2 * 1024 * 1024))
            .app_data(config.clone())
            .service(services::settings::configure_routes())
            .service(services::reports::configure_routes())
            .default_service(web::route().to(serve_embedded))
    })
    .bind(bind)?
    .run()
    .await
}
