use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaRightToBracket;
use dioxus_free_icons::Icon;

use crate::client::{components::PageContainer, util::auth_api::SigninState};

#[component]
pub fn LoginPage() -> Element {
    #[cfg(feature = "web")]
    let api_url = use_context::<crate::config::AppConfig>().api_url;
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut status = use_signal(|| SigninState::Idle);

    let onsubmit = move |event: FormEvent| {
        event.prevent_default();

        #[cfg(feature = "web")]
        {
            use dioxus_logger::tracing;

            use crate::{
                client::util::auth_api::{sign_in, signin_state},
                model::auth::SigninDto,
            };

            let credentials = SigninDto {
                email: email(),
                password: password(),
            };
            let api_url = api_url.clone();
            status.set(SigninState::Pending);

            spawn(async move {
                let result = sign_in(&api_url, &credentials).await;
                if let Err(err) = &result {
                    tracing::error!("{}", err);
                }
                status.set(signin_state(&result));
            });
        }

        #[cfg(not(feature = "web"))]
        status.set(SigninState::Failed(
            "Signing in requires the web build".to_string(),
        ));
    };

    let pending = status() == SigninState::Pending;
    let feedback = match status() {
        SigninState::Idle => rsx!(),
        SigninState::Pending => rsx!(span { class: "loading loading-spinner" }),
        SigninState::Accepted => rsx!(p { class: "text-success", "Signed in" }),
        SigninState::Failed(message) => rsx!(p { class: "text-error", "{message}" }),
    };

    rsx!(
        PageContainer { class: "flex items-center justify-center",
            div { class: "card shadow-sm w-full max-w-96",
                form { class: "card-body flex flex-col gap-2",
                    onsubmit: onsubmit,
                    h2 { class: "card-title",
                        "Sign in"
                    }
                    input {
                        class: "input",
                        r#type: "email",
                        placeholder: "Email",
                        value: "{email}",
                        oninput: move |event| email.set(event.value()),
                    }
                    input {
                        class: "input",
                        r#type: "password",
                        placeholder: "Password",
                        value: "{password}",
                        oninput: move |event| password.set(event.value()),
                    }
                    button {
                        class: "btn btn-primary flex gap-2",
                        r#type: "submit",
                        disabled: pending,
                        Icon {
                            width: 20,
                            height: 20,
                            icon: FaRightToBracket
                        }
                        p { "Sign in" }
                    }
                    {feedback}
                }
            }
        }
    )
}
