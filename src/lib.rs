//! Admin dashboard single-page application.
//!
//! The crate is split into a UI-free core (route table, configuration, errors, API models)
//! and the Dioxus client that renders pages for the current location.

#![allow(non_snake_case)]

pub mod client;
pub mod config;
pub mod error;
pub mod model;
pub mod routing;
