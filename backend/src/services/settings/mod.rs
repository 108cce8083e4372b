//! Settings the browser client reads once at startup.

mod get;

use actix_web::web::{get, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/config";

/// *   **`GET /api/config`**: the `ClientConfig` with the SIAKAD API base URL.
pub fn configure_routes() -> Scope {
    scope(API_PATH).route("", get().to(get::process))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use actix_web::{test, web, App};
    use common::model::config::ClientConfig;

    #[actix_web::test]
    async fn exposes_the_configured_api_base_url() {
        let config = AppConfig {
            api_base_url: "https://siakad.example.sch.id/api".to_string(),
            ..AppConfig::default()
        };
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(config))
                .service(configure_routes()),
        )
        .await;
        let req = test::TestRequest::get().uri("/api/config").to_request();
        let body: ClientConfig = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body.api_base_url, "https://siakad.example.sch.id/api");
    }
}
