//! Sandbox/production environment selection.
//!
//! Every provider exposes two parallel endpoint sets; sandbox moves no real
//! money. The concrete endpoint literals live in the provider modules — this
//! module only carries the selector and the labels echoed in results.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which set of provider endpoints to target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Test endpoints; no real money movement.
    Sandbox,
    /// Live endpoints.
    Production,
}

impl Environment {
    /// The label providers and merchants use for this environment.
    ///
    /// Sandbox is conventionally labelled `"test"` in provider dashboards
    /// and in the result objects this crate returns.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Sandbox => "test",
            Self::Production => "production",
        }
    }

    /// Returns `true` for [`Environment::Production`].
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }

    /// Picks the matching endpoint from a `(sandbox, production)` pair.
    #[must_use]
    pub const fn select(self, sandbox: &'static str, production: &'static str) -> &'static str {
        match self {
            Self::Sandbox => sandbox,
            Self::Production => production,
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
