use dioxus::prelude::*;

use crate::client::router::Route;

/// Top bar shared by every page; the matched route renders below it.
#[component]
pub fn Navbar() -> Element {
    rsx! {
        div {
            class: "navbar bg-base-200 fixed",
            div {
                class: "navbar-start",
                Link {
                    to: Route::Home {},
                    p { class: "text-xl",
                        "Analytics"
                    }
                }
            }
            div {
                class: "navbar-end flex gap-2",
                Link {
                    to: Route::Login {},
                    class: "btn btn-primary",
                    "Sign in"
                }
                Link {
                    to: Route::Logout {},
                    class: "btn btn-outline",
                    "Sign out"
                }
            }
        }

        Outlet::<Route> {}
    }
}
