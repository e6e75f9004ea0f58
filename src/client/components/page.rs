use dioxus::prelude::*;

/// Full-height wrapper that keeps page content clear of the fixed navbar.
#[component]
pub fn PageContainer(class: Option<&'static str>, children: Element) -> Element {
    let class = class.unwrap_or_default();

    rsx!(
        main {
            class: "min-h-screen pt-[64px] p-4 {class}",
            {children}
        }
    )
}
