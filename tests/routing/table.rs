//! Tests for what each router route renders through the configured route table.

use analytics_dashboard::{client::router::Route, config::AppConfig, routing::Page};

fn page_for(config: &AppConfig, route: Route) -> Page {
    config.routes.resolve(&route.to_string())
}

/// Tests the page rendered for each route with the default configuration.
///
/// Expected: root renders the Login fallback, /login renders Login, /logout renders Logout
#[test]
fn renders_expected_page_per_route() {
    let config = AppConfig::from_vars(None, None, None).unwrap();

    assert_eq!(page_for(&config, Route::Home {}), Page::Login);
    assert_eq!(page_for(&config, Route::Login {}), Page::Login);
    assert_eq!(page_for(&config, Route::Logout {}), Page::Logout);
}

/// Tests that an unknown path, after the router redirect, renders the fallback.
///
/// Expected: Page::Login
#[test]
fn unknown_path_renders_fallback_after_redirect() {
    let config = AppConfig::default();
    let route: Route = "/does/not/exist".parse().unwrap();

    assert_eq!(page_for(&config, route), config.routes.fallback());
}
