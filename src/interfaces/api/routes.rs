use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::compression::CompressionLayer;

use crate::application::services::i18n_service::I18nService;
use crate::interfaces::api::handlers::i18n_handler::I18nHandler;

/// Creates API routes for the application
pub fn create_api_routes(i18n_service: Arc<I18nService>) -> Router {
    let i18n_router = Router::new()
        .route("/locales", get(I18nHandler::get_locales))
        .route("/locales/{locale_code}/keys", get(I18nHandler::get_translation_keys))
        .route("/locale", get(I18nHandler::get_locale).put(I18nHandler::set_locale))
        .route("/translate", get(I18nHandler::translate))
        .route("/validation", get(I18nHandler::get_validation))
        .route("/stats", get(I18nHandler::get_stats))
        .route("/format", get(I18nHandler::format))
        .with_state(i18n_service);

    Router::new()
        .nest("/i18n", i18n_router)
        .layer(CompressionLayer::new())
}
