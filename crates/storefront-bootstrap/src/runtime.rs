//! Runtime environment flag read once at startup.

use serde::Serialize;

/// Environment variable marking the alternate runtime.
pub const ALTERNATE_RUNTIME_ENV: &str = "STOREFRONT_ALTERNATE_RUNTIME";

/// Facts about the hosting runtime that influence backend selection.
///
/// The alternate runtime cannot load the primary storage driver, so storage is
/// always downgraded to the in-memory backend there. That limitation belongs to
/// one legacy platform; revisit once it is no longer a deployment target.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RuntimeEnvironment {
    alternate_runtime: bool,
}

impl RuntimeEnvironment {
    /// The standard runtime.
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            alternate_runtime: false,
        }
    }

    /// The alternate runtime.
    #[must_use]
    pub const fn alternate() -> Self {
        Self {
            alternate_runtime: true,
        }
    }

    /// Read [`ALTERNATE_RUNTIME_ENV`] from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_flag_value(std::env::var(ALTERNATE_RUNTIME_ENV).ok().as_deref())
    }

    /// Interpret a raw flag value.
    #[must_use]
    pub fn from_flag_value(value: Option<&str>) -> Self {
        Self {
            alternate_runtime: env_flag_value(value),
        }
    }

    /// Whether the alternate runtime is in effect.
    #[must_use]
    pub const fn is_alternate(self) -> bool {
        self.alternate_runtime
    }
}

/// Interpret an environment flag; `1`, `true`, `yes` and `on` are truthy.
#[must_use]
pub fn env_flag_value(value: Option<&str>) -> bool {
    value.is_some_and(|v| {
        matches!(
            v.trim().to_ascii_lowercase().as_str(),
            "1" | "true" | "yes" | "on"
        )
    })
}
