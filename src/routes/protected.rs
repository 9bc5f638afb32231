use crate::models::{RouteEntry, ViewId};

/// Protected Route Declarations
///
/// Defines the layout tree gated by the Navigation Guard. Every view here
/// requires a credential to be present; an unauthenticated attempt is rewritten
/// to the login path by the guard, never rejected with an error.
///
/// The bare parent `/` never renders on its own: its default (empty-pattern)
/// child redirects into the DNS-log view, so entering the root always lands a
/// session on a concrete child.
pub fn protected_routes() -> RouteEntry {
    RouteEntry::parent(
        "/",
        vec![
            // Default child: entering `/` redirects to the dns_logs sibling.
            RouteEntry::redirect("", "dns_logs"),
            // /dns_logs — captured DNS query log, the portal's home view.
            RouteEntry::view("dns_logs", ViewId::DnsLogs, true),
            // /rebind — DNS rebinding rule management.
            RouteEntry::view("rebind", ViewId::Rebind, true),
        ],
    )
}
