pub mod i18n_ports;
