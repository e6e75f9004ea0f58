use dioxus::prelude::*;

use crate::client::{components::PageView, router::Route};

#[component]
pub fn Logout() -> Element {
    rsx!(PageView {
        path: Route::Logout {}.to_string()
    })
}
