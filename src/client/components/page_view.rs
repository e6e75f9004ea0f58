use dioxus::document::Title;
use dioxus::prelude::*;

use crate::{
    client::pages::{LoginPage, LogoutPage},
    config::AppConfig,
    routing::Page,
};

/// Resolves `path` against the route table of the [`AppConfig`] provided as context.
pub fn use_page(path: &str) -> Page {
    let config = use_context::<AppConfig>();
    config.routes.resolve(path)
}

/// Renders the page the configured route table maps `path` to.
#[component]
pub fn PageView(path: String) -> Element {
    let page = use_page(&path);
    let title = page.title();

    let body = match page {
        Page::Login => rsx!(LoginPage {}),
        Page::Logout => rsx!(LogoutPage {}),
    };

    rsx!(
        Title { "{title}" }
        {body}
    )
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use dioxus::dioxus_core::VirtualDom;

    use super::*;
    use crate::routing::RouteTable;

    #[derive(Clone, Default)]
    struct Resolved(Rc<RefCell<Vec<Page>>>);

    fn ResolveUnknownAndLogin() -> Element {
        let resolved = use_context::<Resolved>();
        resolved.0.borrow_mut().push(use_page("/missing"));
        resolved.0.borrow_mut().push(use_page("/login"));
        rsx!()
    }

    fn resolve_with(config: AppConfig) -> Vec<Page> {
        let resolved = Resolved::default();

        let mut dom = VirtualDom::new(ResolveUnknownAndLogin)
            .with_root_context(config)
            .with_root_context(resolved.clone());
        dom.rebuild_in_place();

        let pages = resolved.0.borrow().clone();
        pages
    }

    #[test]
    fn resolves_through_context_route_table() {
        let routes = RouteTable::builder(Page::Logout)
            .route("/login", Page::Login)
            .build()
            .unwrap();
        let config = AppConfig {
            routes,
            ..AppConfig::default()
        };

        assert_eq!(resolve_with(config), vec![Page::Logout, Page::Login]);
    }

    #[test]
    fn standard_config_falls_back_to_login() {
        assert_eq!(
            resolve_with(AppConfig::default()),
            vec![Page::Login, Page::Login]
        );
    }
}
