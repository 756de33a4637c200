pub mod locale;
pub mod params;
pub mod translation;
