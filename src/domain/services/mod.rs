pub mod date_format;
pub mod i18n_service;
pub mod interpolation;
pub mod locale_formatter;
pub mod number_format;
pub mod plural_rules;
pub mod relative_time;
pub mod translation_store;
