use dioxus::prelude::*;

use crate::client::router::Route;

const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Root view mounted on the page; renders whatever the router matches for the current location.
#[component]
pub fn App() -> Element {
    rsx! {
        document::Stylesheet { href: MAIN_CSS }
        Router::<Route> {}
    }
}
