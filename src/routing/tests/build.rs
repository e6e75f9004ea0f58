//! Tests for RouteTableBuilder::build validation.

use crate::{
    error::route::RouteTableError,
    routing::{Page, RouteTable},
};

/// Tests building a table equivalent to the standard one.
///
/// Expected: Ok, equal to RouteTable::standard()
#[test]
fn builds_standard_equivalent() {
    let table = RouteTable::builder(Page::Login)
        .named_route("login", "/login", Page::Login)
        .route("/logout", Page::Logout)
        .build()
        .unwrap();

    assert_eq!(table, RouteTable::standard());
}

/// Tests that an empty table still resolves through the fallback.
///
/// Expected: Ok, every path resolves to the fallback
#[test]
fn empty_table_resolves_fallback() {
    let table = RouteTable::builder(Page::Login).build().unwrap();

    assert!(table.is_empty());
    assert_eq!(table.resolve("/logout"), Page::Login);
}

/// Tests rejecting the same path registered twice.
///
/// Expected: Err(RouteTableError::DuplicatePath)
#[test]
fn rejects_duplicate_path() {
    let result = RouteTable::builder(Page::Login)
        .route("/login", Page::Login)
        .route("/login", Page::Logout)
        .build();

    assert_eq!(
        result.unwrap_err(),
        RouteTableError::DuplicatePath("/login".to_string())
    );
}

/// Tests rejecting the same name on two paths.
///
/// Expected: Err(RouteTableError::DuplicateName)
#[test]
fn rejects_duplicate_name() {
    let result = RouteTable::builder(Page::Login)
        .named_route("auth", "/login", Page::Login)
        .named_route("auth", "/logout", Page::Logout)
        .build();

    assert_eq!(
        result.unwrap_err(),
        RouteTableError::DuplicateName("auth".to_string())
    );
}

/// Tests rejecting relative paths.
///
/// Expected: Err(RouteTableError::InvalidPath)
#[test]
fn rejects_path_without_leading_slash() {
    let result = RouteTable::builder(Page::Login)
        .route("logout", Page::Logout)
        .build();

    assert_eq!(
        result.unwrap_err(),
        RouteTableError::InvalidPath("logout".to_string())
    );
}
