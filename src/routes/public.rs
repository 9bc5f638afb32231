use super::{LOGIN_PATH, REGISTER_PATH};
use crate::models::{RouteEntry, ViewId};

/// Public Route Declarations
///
/// Defines the paths that are **unauthenticated** and reachable by any session.
/// These are the identity gateway: the login view the guard redirects to, and
/// the registration view for new accounts.
///
/// Security Mandate:
/// These entries must stay `protected = false` no matter how the table is
/// reorganized. The guard's redirect-to-login transition relies on the login
/// path resolving as public; a protected login path would send the guard in a
/// circle.
pub fn public_routes() -> Vec<RouteEntry> {
    vec![
        // /login — credential entry point, target of every guard redirect.
        RouteEntry::view(LOGIN_PATH, ViewId::Login, false),
        // /register — account creation, part of the identity flow handled by
        // the backend; public so a logged-out visitor can sign up.
        RouteEntry::view(REGISTER_PATH, ViewId::Register, false),
    ]
}
