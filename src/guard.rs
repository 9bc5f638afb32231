use std::sync::Arc;

use chrono::Utc;

use crate::auth::CredentialState;
use crate::models::{Decision, NavigationAttempt, Resolution, TraceRecord};
use crate::routes::LOGIN_PATH;

/// DecisionObserver
///
/// Callback invoked with a diagnostic TraceRecord after each guard decision.
/// Strictly post-decision: the observer can never influence control flow, so
/// tests assert on decisions without depending on it.
pub type DecisionObserver = Arc<dyn Fn(&TraceRecord) + Send + Sync>;

/// NavigationGuard
///
/// The decision function gating entry to protected views, invoked before each
/// navigation completes. Holds a read-only credential capability injected at
/// construction time (never an ambient global), which keeps the decision logic
/// pure and independently testable.
///
/// Decision rule, terminal after one evaluation per attempt:
/// - Table-level redirects pass through unchanged (the rewritten navigation
///   re-enters the guard on its own).
/// - Public views always proceed.
/// - Protected views proceed when a token is present, otherwise redirect to
///   the login path. Absence of a credential is the normal signal for that
///   branch, not an error; nothing here escapes to a caller as a fault.
pub struct NavigationGuard {
    credentials: CredentialState,
    observer: Option<DecisionObserver>,
}

impl NavigationGuard {
    pub fn new(credentials: CredentialState) -> Self {
        Self {
            credentials,
            observer: None,
        }
    }

    /// Registers a diagnostic observer. At most one; registering again
    /// replaces the previous hook.
    pub fn with_observer(mut self, observer: DecisionObserver) -> Self {
        self.observer = Some(observer);
        self
    }

    /// before_each
    ///
    /// Evaluates one navigation attempt against the target's route-table
    /// classification and produces the final decision. Fully synchronous, no
    /// suspension point, exactly one decision per attempt.
    pub fn before_each(&self, attempt: &NavigationAttempt, resolution: &Resolution) -> Decision {
        tracing::debug!(attempt_id = %attempt.id, to = %attempt.to, "route guard triggered");

        let decision = match resolution {
            // The table already rewrote the path; nothing for the guard to add.
            Resolution::Redirect { to } => Decision::RedirectTo(to.clone()),
            Resolution::View {
                protected: false, ..
            } => Decision::Proceed,
            Resolution::View {
                protected: true, ..
            } => {
                // Presence check only; the token stays opaque here.
                if self.credentials.token().is_some() {
                    Decision::Proceed
                } else {
                    Decision::RedirectTo(LOGIN_PATH.to_string())
                }
            }
        };

        self.trace(attempt, &decision);
        decision
    }

    /// trace
    ///
    /// Emits the diagnostic record for a decision that has already been made:
    /// a tracing event plus the observer callback, in that order. Invoked after
    /// the decision, never before.
    fn trace(&self, attempt: &NavigationAttempt, decision: &Decision) {
        match decision {
            Decision::Proceed => {
                tracing::debug!(
                    attempt_id = %attempt.id,
                    to = %attempt.to,
                    "auth check passed, proceeding"
                );
            }
            Decision::RedirectTo(to) if to == LOGIN_PATH => {
                tracing::debug!(
                    attempt_id = %attempt.id,
                    to = %attempt.to,
                    "no token found, redirecting to login"
                );
            }
            Decision::RedirectTo(to) => {
                tracing::debug!(
                    attempt_id = %attempt.id,
                    from_path = %attempt.to,
                    to = %to,
                    "path rewritten by route table"
                );
            }
        }

        if let Some(observer) = &self.observer {
            observer(&TraceRecord {
                attempt_id: attempt.id,
                from: attempt.from.clone(),
                to: attempt.to.clone(),
                decision: decision.clone(),
                at: Utc::now(),
            });
        }
    }
}
