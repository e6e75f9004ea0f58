use dioxus::prelude::*;

use crate::client::{
    components::Navbar,
    routes::{Home, Login, Logout},
};

/// Browser-history routes.
///
/// Any path without a route of its own is redirected to `/`.
#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]

    #[redirect("/:.._segments", |_segments: Vec<String>| Route::Home {})]
    #[route("/")]
    Home {},

    #[route("/login")]
    Login {},

    #[route("/logout")]
    Logout {},
}
