//! Tests for parsing browser paths into router routes.

use std::str::FromStr;

use analytics_dashboard::client::router::Route;

/// Tests that the login and logout paths map to their own routes.
///
/// Expected: Route::Login and Route::Logout
#[test]
fn parses_known_paths() {
    assert_eq!(Route::from_str("/login").unwrap(), Route::Login {});
    assert_eq!(Route::from_str("/logout").unwrap(), Route::Logout {});
    assert_eq!(Route::from_str("/").unwrap(), Route::Home {});
}

/// Tests that unknown paths redirect to the root route.
///
/// Expected: Route::Home for every unknown path
#[test]
fn redirects_unknown_paths_to_root() {
    for path in ["/admin", "/admin/auth", "/user", "/login/extra"] {
        assert_eq!(Route::from_str(path).unwrap(), Route::Home {}, "path {:?}", path);
    }
}

/// Tests that routes render back to the paths they were parsed from.
///
/// Expected: "/", "/login", "/logout"
#[test]
fn routes_display_as_paths() {
    assert_eq!(Route::Home {}.to_string(), "/");
    assert_eq!(Route::Login {}.to_string(), "/login");
    assert_eq!(Route::Logout {}.to_string(), "/logout");
}
