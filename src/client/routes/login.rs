use dioxus::prelude::*;

use crate::client::{components::PageView, router::Route};

#[component]
pub fn Login() -> Element {
    rsx!(PageView {
        path: Route::Login {}.to_string()
    })
}
