pub mod i18n_handler;
