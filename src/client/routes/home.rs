use dioxus::prelude::*;

use crate::client::{components::PageView, router::Route};

/// `/` has no entry in the route table, so this renders the fallback page.
#[component]
pub fn Home() -> Element {
    rsx!(PageView {
        path: Route::Home {}.to_string()
    })
}
