use crate::config::AppConfig;
use actix_web::{web, HttpResponse, Responder};

/// Handler for `GET /api/config`.
pub async fn process(config: web::Data<AppConfig>) -> impl Responder {
    HttpResponse::Ok().json(config.client_config())
}
