pub mod dtos;
pub mod ports;
pub mod services;

pub use ports::i18n_ports::{DocumentAttributesPort, KeyValueStorePort, TranslationSourcePort};
