pub mod auth_api;
