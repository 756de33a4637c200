//! FeedFind - internationalization engine host
//!
//! Serves the translation and locale-aware formatting engine of the FeedFind
//! community platform:
//!
//! - Key-based translations with fallback to English
//! - Plural forms for English, Spanish, Arabic and Hebrew
//! - Dates, times, numbers, currency, distances and relative times per locale
//! - Right-to-left metadata for the page shell
//! - A JSON API under `/api/i18n` and the server-rendered page shell at `/`
//!
//! Layers follow the hexagonal layout of the library crate: domain rules,
//! the stateful engine with its ports, adapters, and the HTTP interfaces.

use std::sync::Arc;

use anyhow::Context;
use axum::Router;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use feedfind_i18n::application::ports::i18n_ports::{
    DocumentAttributesPort, KeyValueStorePort, TranslationSourcePort,
};
use feedfind_i18n::application::services::i18n_service::I18nService;
use feedfind_i18n::application::services::translation_loader::TranslationLoader;
use feedfind_i18n::common::config::AppConfig;
use feedfind_i18n::infrastructure::repositories::key_value_fs_repository::JsonFileKeyValueStore;
use feedfind_i18n::infrastructure::services::bundled_translation_source::BundledTranslationSource;
use feedfind_i18n::infrastructure::services::document_attributes::RootDocumentAttributes;
use feedfind_i18n::infrastructure::services::file_system_translation_source::FileSystemTranslationSource;
use feedfind_i18n::interfaces::{create_api_routes, web::create_web_routes};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env();
    tracing::debug!("Configuration: {:?}", config);

    // Translation tables: a locales directory when configured, bundled otherwise
    let source: Arc<dyn TranslationSourcePort> = match &config.i18n.locales_dir {
        Some(dir) => {
            tracing::info!("Loading translations from {:?}", dir);
            Arc::new(FileSystemTranslationSource::new(dir.clone()))
        }
        None => {
            tracing::info!("Using bundled translations");
            Arc::new(BundledTranslationSource::new())
        }
    };
    let store = TranslationLoader::new(source)
        .load_store()
        .await
        .context("Failed to load translations")?;

    // Initial locale: explicit hint first, then the OS locale
    let locale_hint = config.i18n.locale_hint.clone().or_else(sys_locale::get_locale);

    let document = Arc::new(RootDocumentAttributes::new());
    let document_port: Arc<dyn DocumentAttributesPort> = document.clone();

    let mut service = I18nService::new(store, locale_hint.as_deref())
        .with_cache_capacity(config.i18n.cache_max_entries)
        .with_document(document_port);
    if config.i18n.persist_locale {
        let preferences: Arc<dyn KeyValueStorePort> =
            Arc::new(JsonFileKeyValueStore::new(config.i18n.preferences_path.clone()));
        service = service.with_preferences(preferences);
    } else {
        tracing::info!("Locale persistence disabled");
    }

    let initial = service.load_persisted_locale();
    tracing::info!("Active locale: {} ({})", initial, initial.direction());

    service
        .add_observer(|locale| tracing::info!("Locale is now {} ({})", locale, locale.direction()))
        .detach();

    let service = Arc::new(service);

    let validation = service.validate_translations();
    for gap in &validation {
        tracing::warn!(
            "Locale {} is missing {} keys; they fall back to {}",
            gap.locale,
            gap.missing_keys.len(),
            feedfind_i18n::Locale::DEFAULT
        );
    }

    // Build application router
    let app = Router::new()
        .nest("/api", create_api_routes(service.clone()))
        .merge(create_web_routes(service.clone(), document))
        .layer(TraceLayer::new_for_http());

    let addr = config.server.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!("Starting FeedFind i18n server on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
