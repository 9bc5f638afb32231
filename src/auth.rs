use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

// 1. CredentialStore Contract

/// CredentialStore
///
/// Defines the abstract, read-only contract for asking "is a credential
/// present?". This trait allows us to swap the concrete implementation—from the
/// real durable store (FileTokenStore) in the running portal to the in-memory
/// Mock (MockCredentialStore) during testing—without affecting the guard.
///
/// The navigation core never mutates, inspects, or validates the token; it is
/// an opaque value owned by the authentication subsystem. Issuance, expiry, and
/// logout all happen outside this crate.
pub trait CredentialStore: Send + Sync {
    /// Returns the currently held opaque token, or None when the session is
    /// unauthenticated. Must reflect externally driven changes (login/logout)
    /// made between navigation attempts.
    fn token(&self) -> Option<String>;
}

// 2. The Real Implementation (Durable Client-Side Storage)

/// FileTokenStore
///
/// The concrete implementation backed by a token file in durable client-side
/// storage, surviving reloads within the same session origin. The
/// authentication subsystem writes this file on successful login and removes it
/// on logout or expiry.
///
/// Every call re-reads the file rather than caching: read-your-writes is
/// provided by the storage layer, and the guard must observe a logout that
/// happened between two attempts.
#[derive(Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    /// Constructs the store over the token location resolved by NavConfig.
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl CredentialStore for FileTokenStore {
    /// token
    ///
    /// A missing file, an unreadable file, or a file containing only whitespace
    /// all mean "no credential". None of these are errors; absence is the
    /// normal signal for the guard's redirect branch.
    fn token(&self) -> Option<String> {
        fs::read_to_string(&self.path)
            .ok()
            .map(|raw| raw.trim().to_string())
            .filter(|token| !token.is_empty())
    }
}

// 3. The Mock Implementation (For Unit Tests)

/// MockCredentialStore
///
/// A mock implementation of `CredentialStore` used exclusively for testing.
/// This lets guard tests pin the session's credential state without touching
/// the filesystem, isolating the test boundary.
#[derive(Clone, Default)]
pub struct MockCredentialStore {
    token: Option<String>,
}

impl MockCredentialStore {
    /// An unauthenticated session.
    pub fn anonymous() -> Self {
        Self { token: None }
    }

    /// A session holding an opaque token. The value is never inspected, so any
    /// non-empty string will do.
    pub fn with_token(token: &str) -> Self {
        Self {
            token: Some(token.to_string()),
        }
    }
}

impl CredentialStore for MockCredentialStore {
    fn token(&self) -> Option<String> {
        self.token.clone()
    }
}

/// CredentialState
///
/// The concrete type used to share read-only credential access across the
/// navigation core. Injected into the guard at construction time so the
/// decision function stays pure and independently testable.
pub type CredentialState = Arc<dyn CredentialStore>;
