use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

// --- Core Navigation Schemas (Shared with the Rendering Layer) ---

/// ViewId
///
/// Identifies a renderable view in the portal. The navigation core never renders
/// anything itself; it only instructs the external rendering layer which view a
/// settled path maps to. The variants mirror the portal's component set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum ViewId {
    Login,
    Register,
    DnsLogs,
    Rebind,
}

/// RouteTarget
///
/// What a route entry yields when its pattern matches. Making redirects a
/// first-class target (rather than a conditional inside resolution) keeps the
/// "entering this pattern redirects elsewhere" rule visible in the table itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteTarget {
    /// The matched path renders this view directly.
    View(ViewId),
    /// The matched path is rewritten to the named path before rendering.
    Redirect(String),
}

/// RouteEntry
///
/// One static mapping rule in the Route Table. Entries are declared once at
/// startup and compiled into the immutable table; they are never mutated at
/// runtime.
///
/// Invariants (enforced at compile time by `RouteTable::compile`):
/// - Patterns are unique across the flattened table.
/// - At most one catch-all wildcard exists and it is evaluated last.
/// - Exactly one entry is a bare-parent default-redirect child (empty pattern).
#[derive(Debug, Clone)]
pub struct RouteEntry {
    /// Path template. Absolute for top-level entries (`/login`), relative for
    /// children (`dns_logs`), empty for the parent's default child.
    pub pattern: String,
    /// The view or redirect this entry resolves to.
    pub target: RouteTarget,
    /// Whether the Navigation Guard requires a credential for this entry.
    pub protected: bool,
    /// Nested child entries, resolved relative to this entry's matched prefix.
    pub children: Vec<RouteEntry>,
}

impl RouteEntry {
    /// Leaf entry rendering a view.
    pub fn view(pattern: &str, view: ViewId, protected: bool) -> Self {
        Self {
            pattern: pattern.to_string(),
            target: RouteTarget::View(view),
            protected,
            children: Vec::new(),
        }
    }

    /// Entry that rewrites the matched path to `to` instead of rendering.
    pub fn redirect(pattern: &str, to: &str) -> Self {
        Self {
            pattern: pattern.to_string(),
            target: RouteTarget::Redirect(to.to_string()),
            protected: false,
            children: Vec::new(),
        }
    }

    /// Parent layout entry with nested children. A parent never renders alone;
    /// its empty-pattern child decides what entering the bare parent path does.
    pub fn parent(pattern: &str, children: Vec<RouteEntry>) -> Self {
        Self {
            pattern: pattern.to_string(),
            target: RouteTarget::Redirect(pattern.to_string()),
            protected: false,
            children,
        }
    }
}

/// Resolution
///
/// The total output of `RouteTable::resolve`. Every path string resolves to one
/// of these two shapes; there is no user-observable "not found" state in this
/// design (unmatched paths are absorbed by the wildcard redirect).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub enum Resolution {
    /// The path maps to a view, with its protection classification.
    View { view: ViewId, protected: bool },
    /// The path is rewritten; the rendering layer should navigate to `to`.
    Redirect { to: String },
}

/// NavigationAttempt
///
/// One request to move from one path to another. Ephemeral: created per
/// user-initiated or programmatic navigation, consumed by the guard for exactly
/// one decision, then discarded.
///
/// The `id` is a per-attempt correlation identifier so trace records emitted by
/// the guard can be tied back to the attempt that produced them, the same way
/// the backend correlates log lines with an `x-request-id` uuid.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct NavigationAttempt {
    pub id: Uuid,
    pub from: String,
    pub to: String,
}

impl NavigationAttempt {
    pub fn new(from: &str, to: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            from: from.to_string(),
            to: to.to_string(),
        }
    }
}

/// Decision
///
/// The terminal outcome of one guard evaluation. Exactly one decision is made
/// per attempt, synchronously; there is no retry and no other variant (absence
/// of a credential is the normal signal for `RedirectTo`, not an error).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub enum Decision {
    /// The attempt completes to its target path unmodified.
    Proceed,
    /// The attempt is rewritten; the rendering layer should navigate to the
    /// contained path instead. The rewritten navigation re-enters the guard.
    RedirectTo(String),
}

/// TraceRecord
///
/// Diagnostic record handed to the observer hook after each guard decision.
/// Purely observational: it is produced strictly after the decision is made and
/// must never influence control flow. Tests assert on decisions, not on these.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct TraceRecord {
    /// Correlation id of the attempt this record belongs to.
    pub attempt_id: Uuid,
    pub from: String,
    pub to: String,
    pub decision: Decision,
    #[ts(type = "string")]
    pub at: DateTime<Utc>,
}
