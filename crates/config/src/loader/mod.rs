//! Layered configuration loading.
//!
//! Responsibilities:
//! - Load configuration from seed defaults, a JSON file, `.env` files,
//!   prefixed environment variables and explicit overrides.
//! - Provide a builder-pattern `ConfigLoader` that deep-merges the layers into a `ConfigStore`.
//! - Enforce `DOTENV_DISABLED` gate to prevent accidental dotenv loading in tests.
//!
//! Does NOT handle:
//! - Writing configuration back to disk (see `persistence.rs`).
//!
//! Invariants / Assumptions:
//! - Precedence, lowest to highest: defaults, file, environment, overrides.
//! - Layer precedence does not depend on the order builder methods are called in.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.

mod builder;
mod env;

pub use builder::ConfigLoader;
pub use env::env_var_or_none;

#[cfg(test)]
mod tests;
