/// Route Table Module Index
///
/// Organizes the portal's static path surface into access-segregated modules,
/// mirroring how the rendering layer groups its views. The split makes the
/// access class of every path explicit at the module level rather than buried
/// in per-entry flags scattered through one list.
///
/// The table is declared once, compiled at startup, and immutable thereafter.
/// Resolution is a total function: every path string, including arbitrary
/// unmatched ones, resolves to something (the wildcard redirect); there is no
/// "404" terminal state in this design.

/// Paths accessible to all sessions (login, registration). These are the
/// gateway paths and must remain public regardless of credential state,
/// otherwise the guard's login redirect could loop.
pub mod public;

/// Paths gated by the Navigation Guard. Nested under the layout parent `/`,
/// whose default child redirects to the DNS-log view.
pub mod protected;

use crate::models::{Resolution, RouteEntry, RouteTarget};

// --- Path Constants (the externally visible contract) ---

pub const LOGIN_PATH: &str = "/login";
pub const REGISTER_PATH: &str = "/register";
/// Where the bare parent and every unmatched path land.
pub const DEFAULT_PATH: &str = "/dns_logs";
/// Catch-all pattern, matching any otherwise-unresolved path.
pub const WILDCARD: &str = "*";

/// CompiledRoute
///
/// One flattened rule of the compiled table: an absolute path, its target, and
/// its protection classification. Children have been joined onto their parent's
/// prefix and relative redirect targets made absolute.
#[derive(Debug, Clone)]
struct CompiledRoute {
    path: String,
    target: RouteTarget,
    protected: bool,
}

/// RouteTable
///
/// The immutable, compiled form of the portal's route declarations. Owned by
/// the router subsystem for the entire process lifetime; `resolve` is a pure
/// lookup with no side effects.
pub struct RouteTable {
    routes: Vec<CompiledRoute>,
    /// Redirect target of the catch-all wildcard, applied when no declared
    /// pattern matches. Holding it separately (rather than as a scan
    /// fallthrough) makes the totality of `resolve` structural.
    fallback: String,
}

/// route_table
///
/// Assembles the portal's entire path surface: public gateway paths, the
/// protected layout tree, and the wildcard redirect of last resort.
pub fn route_table() -> RouteTable {
    let mut entries = public::public_routes();
    entries.push(protected::protected_routes());
    // The wildcard must be declared last; compile() enforces this.
    entries.push(RouteEntry::redirect(WILDCARD, DEFAULT_PATH));
    RouteTable::compile(entries)
}

impl RouteTable {
    /// compile
    ///
    /// Flattens the declared entries into absolute-path rules and validates the
    /// table invariants. Runs once at startup.
    ///
    /// # Panics
    /// Fails fast on a malformed declaration: duplicate patterns, a wildcard
    /// that is not last or does not redirect, or a parent without exactly one
    /// default (empty-pattern) child. A table violating these could drop paths
    /// or loop, so starting up with one is never acceptable.
    pub fn compile(entries: Vec<RouteEntry>) -> Self {
        let mut routes: Vec<CompiledRoute> = Vec::new();
        let mut fallback: Option<String> = None;

        for entry in &entries {
            assert!(
                fallback.is_none(),
                "FATAL: the catch-all wildcard must be the last route entry"
            );

            if entry.pattern == WILDCARD {
                match &entry.target {
                    RouteTarget::Redirect(to) => fallback = Some(to.clone()),
                    RouteTarget::View(_) => {
                        panic!("FATAL: the catch-all wildcard must redirect, not render")
                    }
                }
                continue;
            }

            if entry.children.is_empty() {
                routes.push(CompiledRoute {
                    path: normalize(&entry.pattern),
                    target: entry.target.clone(),
                    protected: entry.protected,
                });
                continue;
            }

            // Nested children resolve relative to the parent's matched prefix.
            // The empty-pattern child supplies the bare parent's resolution, so
            // exactly one must exist.
            let defaults = entry
                .children
                .iter()
                .filter(|child| child.pattern.is_empty())
                .count();
            assert_eq!(
                defaults, 1,
                "FATAL: a parent entry requires exactly one default child"
            );

            for child in &entry.children {
                let target = match &child.target {
                    RouteTarget::Redirect(to) => RouteTarget::Redirect(join(&entry.pattern, to)),
                    RouteTarget::View(view) => RouteTarget::View(*view),
                };
                routes.push(CompiledRoute {
                    path: join(&entry.pattern, &child.pattern),
                    target,
                    protected: child.protected,
                });
            }
        }

        let fallback =
            fallback.expect("FATAL: route table requires a catch-all wildcard redirect");

        // Pattern uniqueness across the flattened table.
        for (i, route) in routes.iter().enumerate() {
            assert!(
                routes[..i].iter().all(|other| other.path != route.path),
                "FATAL: duplicate route pattern {}",
                route.path
            );
        }

        Self { routes, fallback }
    }

    /// resolve
    ///
    /// Resolves a path string to a target view (with its protection flag) or a
    /// redirect. Total and deterministic: exact static matches first, in
    /// declaration order, then the wildcard redirect of last resort.
    pub fn resolve(&self, path: &str) -> Resolution {
        let path = normalize(path);

        for route in &self.routes {
            if route.path == path {
                return match &route.target {
                    RouteTarget::View(view) => Resolution::View {
                        view: *view,
                        protected: route.protected,
                    },
                    RouteTarget::Redirect(to) => Resolution::Redirect { to: to.clone() },
                };
            }
        }

        Resolution::Redirect {
            to: self.fallback.clone(),
        }
    }
}

/// normalize
///
/// Canonicalizes a path string for matching: empty input becomes the root path
/// and a trailing slash is insignificant (`/dns_logs/` matches `/dns_logs`).
fn normalize(path: &str) -> String {
    let trimmed = path.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        trimmed.to_string()
    }
}

/// join
///
/// Joins a child pattern (or relative redirect target) onto its parent's
/// prefix. An empty child denotes the bare parent path; an absolute child is
/// kept as-is.
fn join(parent: &str, child: &str) -> String {
    if child.is_empty() {
        return normalize(parent);
    }
    if child.starts_with('/') {
        return normalize(child);
    }
    let parent = normalize(parent);
    if parent == "/" {
        format!("/{child}")
    } else {
        format!("{parent}/{child}")
    }
}
