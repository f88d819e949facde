//! Tests for the routing system.
//!
//! Validates route recognition, the role-guard decision table, and the
//! post-login destination handling.

use crate::routes::{GuardOutcome, MainRoute, guard_decision, login_destination};
use shared::models::UserRole;
use yew_router::Routable;

#[test]
fn routes_recognize_their_paths() {
    assert_eq!(MainRoute::recognize("/"), Some(MainRoute::Home));
    assert_eq!(MainRoute::recognize("/login"), Some(MainRoute::Login));
    assert_eq!(MainRoute::recognize("/signup"), Some(MainRoute::Signup));
    assert_eq!(MainRoute::recognize("/stores"), Some(MainRoute::Stores));
    assert_eq!(MainRoute::recognize("/admin"), Some(MainRoute::Admin));
    assert_eq!(MainRoute::recognize("/owner"), Some(MainRoute::Owner));
    assert_eq!(MainRoute::recognize("/profile"), Some(MainRoute::Profile));
}

#[test]
fn unknown_path_falls_back_to_not_found() {
    assert_eq!(MainRoute::recognize("/no-such"), Some(MainRoute::NotFound));
}

#[test]
fn absent_user_is_sent_to_login() {
    assert_eq!(
        guard_decision(None, &[UserRole::Admin]),
        GuardOutcome::RedirectToLogin
    );
    assert_eq!(
        guard_decision(None, &[UserRole::Owner]),
        GuardOutcome::RedirectToLogin
    );
    assert_eq!(guard_decision(None, &[]), GuardOutcome::RedirectToLogin);
}

#[test]
fn wrong_role_is_sent_home() {
    assert_eq!(
        guard_decision(Some(UserRole::User), &[UserRole::Admin]),
        GuardOutcome::RedirectHome
    );
    assert_eq!(
        guard_decision(Some(UserRole::Admin), &[UserRole::Owner]),
        GuardOutcome::RedirectHome
    );
}

#[test]
fn matching_role_is_allowed() {
    assert_eq!(
        guard_decision(Some(UserRole::Admin), &[UserRole::Admin]),
        GuardOutcome::Allow
    );
    assert_eq!(
        guard_decision(Some(UserRole::Owner), &[UserRole::Owner]),
        GuardOutcome::Allow
    );
}

#[test]
fn empty_role_list_admits_any_authenticated_user() {
    for role in UserRole::ALL {
        assert_eq!(guard_decision(Some(role), &[]), GuardOutcome::Allow);
    }
}

#[test]
fn login_returns_to_the_requested_screen() {
    assert_eq!(login_destination(Some("/owner")), MainRoute::Owner);
    assert_eq!(login_destination(Some("/profile")), MainRoute::Profile);
}

#[test]
fn login_defaults_to_home() {
    assert_eq!(login_destination(None), MainRoute::Home);
}

#[test]
fn nav_labels_follow_role() {
    assert_eq!(MainRoute::Stores.nav_label(None), Some("Stores"));
    assert_eq!(MainRoute::Admin.nav_label(Some(UserRole::User)), None);
    assert_eq!(
        MainRoute::Admin.nav_label(Some(UserRole::Admin)),
        Some("Admin")
    );
    assert_eq!(
        MainRoute::Owner.nav_label(Some(UserRole::Owner)),
        Some("Owner")
    );
    assert_eq!(MainRoute::Owner.nav_label(Some(UserRole::Admin)), None);
    assert_eq!(MainRoute::Login.nav_label(None), None);
}
