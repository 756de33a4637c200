use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::application::dtos::i18n_dto::{
    stats_by_code, FormatKind, FormatQueryDto, FormatResponseDto, KeysResponseDto, LocaleDto,
    SetLocaleRequestDto, TranslationErrorDto, TranslationGapDto, TranslationResponseDto,
};
use crate::application::services::i18n_service::I18nService;
use crate::common::errors::{DomainError, ErrorKind};
use crate::domain::entities::locale::Locale;
use crate::domain::entities::params::TranslationParams;
use crate::domain::services::i18n_service::I18nError;

type AppState = Arc<I18nService>;

/// Query names with a fixed meaning on the translate endpoint; every other
/// name becomes an interpolation value
const RESERVED_QUERY_NAMES: &[&str] = &["key", "locale", "count"];

/// Handler for i18n-related API endpoints
pub struct I18nHandler;

impl I18nHandler {
    /// Gets a list of available locales
    pub async fn get_locales(State(service): State<AppState>) -> impl IntoResponse {
        let locales: Vec<LocaleDto> = service.available_locales().into_iter().map(LocaleDto::from).collect();

        (StatusCode::OK, Json(locales)).into_response()
    }

    /// Gets the current locale
    pub async fn get_locale(State(service): State<AppState>) -> impl IntoResponse {
        (StatusCode::OK, Json(LocaleDto::from(service.get_locale()))).into_response()
    }

    /// Switches the current locale
    pub async fn set_locale(
        State(service): State<AppState>,
        Json(request): Json<SetLocaleRequestDto>,
    ) -> impl IntoResponse {
        match service.set_locale_tag(&request.locale) {
            Ok(locale) => (StatusCode::OK, Json(LocaleDto::from(locale))).into_response(),
            Err(err) => error_response(None, &request.locale, err),
        }
    }

    /// Translates a key, in the requested locale or the current one
    pub async fn translate(
        State(service): State<AppState>,
        Query(query): Query<HashMap<String, String>>,
    ) -> impl IntoResponse {
        let requested = query.get("locale").cloned();
        let Some(key) = query.get("key").cloned() else {
            return bad_request(None, requested.unwrap_or_default(), "Missing query parameter: key");
        };

        let locale = match requested.as_deref() {
            Some(tag) => match Locale::from_tag(tag) {
                Some(locale) => locale,
                None => return error_response(Some(key), tag, I18nError::UnsupportedLocale(tag.to_string())),
            },
            None => service.get_locale(),
        };

        let mut params = TranslationParams::new();
        if let Some(count) = query.get("count") {
            match count.parse::<f64>() {
                Ok(count) => params = params.with_count(count),
                Err(_) => {
                    return bad_request(Some(key), locale.as_str(), format!("Invalid count: {}", count));
                }
            }
        }
        for (name, value) in query.iter().filter(|(name, _)| !RESERVED_QUERY_NAMES.contains(&name.as_str())) {
            params.insert(name.clone(), value.clone());
        }

        let text = service.t_in(locale, &key, Some(&params));
        let response = TranslationResponseDto {
            key,
            locale: locale.as_str().to_string(),
            text,
        };
        (StatusCode::OK, Json(response)).into_response()
    }

    /// Lists every key a locale defines. A supported locale without a loaded
    /// table is not found.
    pub async fn get_translation_keys(
        State(service): State<AppState>,
        Path(locale_code): Path<String>,
    ) -> impl IntoResponse {
        let Some(locale) = Locale::from_tag(&locale_code) else {
            return error_response(None, &locale_code, I18nError::UnsupportedLocale(locale_code.clone()));
        };
        if !service.available_locales().contains(&locale) {
            return error_response(None, locale.as_str(), DomainError::not_found("Locale", locale.as_str()));
        }

        let response = KeysResponseDto {
            locale: locale.as_str().to_string(),
            keys: service.get_translation_keys(locale),
        };
        (StatusCode::OK, Json(response)).into_response()
    }

    /// Baseline keys missing from each locale
    pub async fn get_validation(State(service): State<AppState>) -> impl IntoResponse {
        let gaps: Vec<TranslationGapDto> = service
            .validate_translations()
            .into_iter()
            .map(TranslationGapDto::from)
            .collect();

        (StatusCode::OK, Json(gaps)).into_response()
    }

    /// Per-locale key counts
    pub async fn get_stats(State(service): State<AppState>) -> impl IntoResponse {
        (StatusCode::OK, Json(stats_by_code(service.get_translation_stats()))).into_response()
    }

    /// Formats a number, an amount of money or a distance
    pub async fn format(State(service): State<AppState>, Query(query): Query<FormatQueryDto>) -> impl IntoResponse {
        let locale = query
            .locale
            .clone()
            .unwrap_or_else(|| service.get_locale().as_str().to_string());

        let Some(kind) = FormatKind::parse(&query.kind) else {
            return bad_request(None, locale, format!("Unknown format kind: {}", query.kind));
        };
        let Ok(value) = query.value.trim().parse::<f64>() else {
            return bad_request(None, locale, format!("Invalid value: {}", query.value));
        };

        let text = match kind {
            FormatKind::Number => service.format_number(value, Some(locale.as_str()), None),
            FormatKind::Currency => service.format_currency(value, query.currency.as_deref(), Some(locale.as_str())),
            FormatKind::Distance => service.format_distance(value, Some(locale.as_str())),
        };

        (StatusCode::OK, Json(FormatResponseDto { kind, locale, text })).into_response()
    }
}

fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::InvalidInput => StatusCode::BAD_REQUEST,
        ErrorKind::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn error_response(key: Option<String>, locale: &str, err: impl Into<DomainError>) -> Response {
    let err: DomainError = err.into();
    let status = status_for(err.kind);
    if status.is_server_error() {
        tracing::error!("I18n request failed: {}", err);
    }

    let error = TranslationErrorDto {
        key,
        locale: locale.to_string(),
        error: err.to_string(),
    };
    (status, Json(error)).into_response()
}

fn bad_request(key: Option<String>, locale: impl Into<String>, message: impl Into<String>) -> Response {
    let error = TranslationErrorDto {
        key,
        locale: locale.into(),
        error: message.into(),
    };
    (StatusCode::BAD_REQUEST, Json(error)).into_response()
}
