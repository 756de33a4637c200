pub mod api;
pub mod web;

pub use api::routes::create_api_routes;
