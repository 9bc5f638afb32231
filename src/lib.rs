use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// --- Module Structure ---

// Core navigation services and components.
pub mod auth;
pub mod config;
pub mod guard;
pub mod models;

// Module for the static path surface (Public, Protected, wildcard fallback).
pub mod routes;

// --- Public Re-exports ---

// Makes the core types easily accessible to the host UI shell.
pub use auth::{CredentialState, CredentialStore, FileTokenStore, MockCredentialStore};
pub use config::{Env, NavConfig};
pub use guard::{DecisionObserver, NavigationGuard};
pub use models::{Decision, NavigationAttempt, Resolution, TraceRecord, ViewId};
pub use routes::{DEFAULT_PATH, LOGIN_PATH, REGISTER_PATH, RouteTable, route_table};

/// Upper bound on redirect hops while settling one navigation. The table's
/// invariants (login is public, the wildcard redirects to a declared view)
/// keep real chains at two hops or fewer; exceeding the cap is a programming
/// error in the route declarations.
const MAX_REDIRECT_HOPS: usize = 8;

/// SettledNavigation
///
/// The terminal outcome of following a navigation to completion: the path the
/// session actually landed on and the view the rendering layer should draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettledNavigation {
    pub path: String,
    pub view: ViewId,
}

/// Navigator
///
/// The navigation core's unified entry point, composing the immutable Route
/// Table with the Navigation Guard. The host UI shell constructs one per
/// session and calls `before_each` for every attempted transition.
pub struct Navigator {
    table: RouteTable,
    guard: NavigationGuard,
}

impl Navigator {
    /// new
    ///
    /// Builds the navigator from the portal's static route declarations and an
    /// injected read-only credential capability.
    pub fn new(credentials: CredentialState) -> Self {
        Self {
            table: route_table(),
            guard: NavigationGuard::new(credentials),
        }
    }

    /// Builds the navigator over the durable token store resolved by config,
    /// the production wiring used by the host shell.
    pub fn from_config(config: &NavConfig) -> Self {
        let credentials: CredentialState =
            Arc::new(FileTokenStore::new(config.token_store_path.clone()));
        Self::new(credentials)
    }

    /// Registers a diagnostic observer on the underlying guard.
    pub fn with_observer(mut self, observer: DecisionObserver) -> Self {
        self.guard = self.guard.with_observer(observer);
        self
    }

    /// Pure route-table lookup, exposed for the rendering layer.
    pub fn resolve(&self, path: &str) -> Resolution {
        self.table.resolve(path)
    }

    /// before_each
    ///
    /// The hook the host framework invokes for every attempted transition:
    /// classifies the target via the route table, then lets the guard decide.
    /// A `RedirectTo` decision means the framework navigates to the rewritten
    /// path instead, which re-enters this hook as a fresh attempt.
    pub fn before_each(&self, attempt: &NavigationAttempt) -> Decision {
        let resolution = self.table.resolve(&attempt.to);
        self.guard.before_each(attempt, &resolution)
    }

    /// settle
    ///
    /// Follows one user-initiated navigation to its terminal view, re-entering
    /// the guard for each rewritten path exactly as the host framework would.
    /// Total: every input settles on some view (unmatched paths fall to the
    /// wildcard redirect, unauthenticated protected attempts land on login).
    pub fn settle(&self, from: &str, to: &str) -> SettledNavigation {
        let mut current = to.to_string();
        let mut previous = from.to_string();

        for _ in 0..MAX_REDIRECT_HOPS {
            let attempt = NavigationAttempt::new(&previous, &current);
            match self.before_each(&attempt) {
                Decision::Proceed => {
                    // A proceed on a view is terminal; a proceed can only be
                    // issued for a resolved view, so the match below is total.
                    if let Resolution::View { view, .. } = self.table.resolve(&current) {
                        return SettledNavigation {
                            path: current,
                            view,
                        };
                    }
                    unreachable!("guard proceeded on a non-view resolution");
                }
                Decision::RedirectTo(next) => {
                    previous = current;
                    current = next;
                }
            }
        }

        unreachable!("redirect chain exceeded {MAX_REDIRECT_HOPS} hops");
    }
}

/// init_tracing
///
/// Initializes the diagnostic subscriber for the host shell at startup. The
/// format follows the runtime environment: pretty output for local debugging,
/// JSON for ingestion by centralized log aggregators in production. The filter
/// prioritizes RUST_LOG, falling back to a sensible local default.
pub fn init_tracing(config: &NavConfig) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "dnslog_portal=debug".into());

    match config.env {
        Env::Local => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().pretty())
                .init();
        }
        Env::Production => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
    }

    tracing::info!("navigation core starting in {:?} mode", config.env);
}
