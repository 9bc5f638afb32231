use std::env;
use std::path::PathBuf;

/// NavConfig
///
/// Holds the navigation core's configuration. Immutable once loaded, so the
/// compiled route table and the guard see a consistent view for the whole
/// application session.
///
/// Note that the route table itself is *not* configurable: the path surface is
/// a static contract with the rendering layer, declared in `routes/`.
#[derive(Clone, Debug)]
pub struct NavConfig {
    // Runtime environment marker. Controls log formatting (pretty vs JSON).
    pub env: Env,
    // Location of the durable credential token file. This is the client-side
    // storage the authentication subsystem writes on login and clears on
    // logout; the navigation core only ever reads it.
    pub token_store_path: PathBuf,
}

/// Env
///
/// Defines the runtime context, used to switch the diagnostic output between
/// human-readable local logging and structured production logging.
#[derive(Clone, PartialEq, Debug)]
pub enum Env {
    Local,
    Production,
}

impl Default for NavConfig {
    /// default
    ///
    /// Provides a safe, non-panicking NavConfig instance primarily used for test
    /// setup, without requiring any environment variables to be set.
    fn default() -> Self {
        Self {
            env: Env::Local,
            token_store_path: PathBuf::from(".dnslog-portal/token"),
        }
    }
}

impl NavConfig {
    /// load
    ///
    /// The canonical function for initializing the configuration at startup.
    /// Reads all parameters from environment variables and implements the
    /// fail-fast principle.
    ///
    /// # Panics
    /// Panics if the token store location is not set in Production. Starting
    /// without it would make every session look unauthenticated and trap users
    /// on the login view.
    pub fn load() -> Self {
        // Load .env file settings before the environment is read. The host
        // shell owns no startup sequence of its own, so the canonical loader
        // takes care of it.
        dotenv::dotenv().ok();

        let env_str = env::var("APP_ENV").unwrap_or_else(|_| "local".to_string());
        let env = match env_str.as_str() {
            "production" => Env::Production,
            _ => Env::Local,
        };

        let token_store_path = match env {
            Env::Production => env::var("TOKEN_STORE_PATH")
                .map(PathBuf::from)
                .expect("FATAL: TOKEN_STORE_PATH must be set in production."),
            // In local, fall back to a well-known location under the working
            // directory so a fresh checkout works without any setup.
            Env::Local => env::var("TOKEN_STORE_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(".dnslog-portal/token")),
        };

        Self {
            env,
            token_store_path,
        }
    }
}
