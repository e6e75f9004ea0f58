use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaRightFromBracket;
use dioxus_free_icons::Icon;

use crate::client::{components::PageContainer, router::Route, util::auth_api::SignoutState};

#[component]
pub fn LogoutPage() -> Element {
    // End the server-side session when the page loads
    #[cfg(feature = "web")]
    let (state, mut signout) = {
        use dioxus_logger::tracing;

        use crate::{
            client::util::auth_api::{sign_out, signout_state},
            config::AppConfig,
        };

        let api_url = use_context::<AppConfig>().api_url;
        let signout = use_resource(move || {
            let api_url = api_url.clone();
            async move { sign_out(&api_url).await }
        });

        let result = signout.read();
        if let Some(Err(err)) = &*result {
            tracing::error!("{}", err);
        }
        let state = signout_state((*result).as_ref());
        drop(result);

        (state, signout)
    };

    #[cfg(not(feature = "web"))]
    let state = SignoutState::Failed("Signing out requires the web build".to_string());

    let body = match state {
        SignoutState::Pending => rsx!(
            span { class: "loading loading-spinner" }
            p { "Signing out..." }
        ),
        SignoutState::SignedOut => rsx!(
            Icon {
                width: 32,
                height: 32,
                icon: FaRightFromBracket
            }
            p { class: "text-2xl",
                "You have been signed out"
            }
            Link {
                to: Route::Login {},
                class: "btn btn-primary w-28",
                "Sign in"
            }
        ),
        SignoutState::Failed(message) => rsx!(
            p { class: "text-2xl",
                "Sign out failed"
            }
            p { class: "text-error",
                "{message}"
            }
            div { class: "flex gap-2",
                button {
                    class: "btn btn-outline w-28",
                    onclick: move |_| {
                        #[cfg(feature = "web")]
                        signout.restart();
                    },
                    "Retry"
                }
                Link {
                    to: Route::Login {},
                    class: "btn btn-primary w-28",
                    "Sign in"
                }
            }
        ),
    };

    rsx!(
        PageContainer { class: "flex items-center justify-center",
            div { class: "flex flex-col items-center gap-4",
                {body}
            }
        }
    )
}
