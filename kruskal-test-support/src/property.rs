//! Environment overrides for property-based test runs.
//!
//! Every proptest suite in the workspace reads its case count and fork mode
//! through [`ProptestRunProfile`], so CI can raise coverage or isolate cases
//! in subprocesses without touching test code.

use std::env;

/// Environment variable overriding the number of cases per property.
pub const PROGTEST_CASES_ENV_KEY: &str = "PROGTEST_CASES";
/// Environment variable enabling forked proptest execution.
pub const KRUSKAL_PBT_FORK_ENV_KEY: &str = "KRUSKAL_PBT_FORK";

/// Resolved proptest settings for a suite.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ProptestRunProfile {
    cases: u32,
    fork: bool,
}

impl ProptestRunProfile {
    /// Reads the overrides from the environment, falling back to the given
    /// defaults when a variable is unset or malformed.
    ///
    /// Malformed values are reported with a `warn` event and otherwise
    /// ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use kruskal_test_support::property::ProptestRunProfile;
    ///
    /// let profile = ProptestRunProfile::load(32, false);
    /// assert!(profile.cases() > 0);
    /// ```
    #[must_use]
    pub fn load(default_cases: u32, default_fork: bool) -> Self {
        Self {
            cases: override_or(PROGTEST_CASES_ENV_KEY, default_cases, parse_cases),
            fork: override_or(KRUSKAL_PBT_FORK_ENV_KEY, default_fork, parse_switch),
        }
    }

    /// Cases to run per property. Always positive.
    #[must_use]
    pub const fn cases(&self) -> u32 {
        self.cases
    }

    /// Whether each case runs in a forked subprocess.
    #[must_use]
    pub const fn fork(&self) -> bool {
        self.fork
    }
}

fn override_or<T>(key: &'static str, default: T, parse: fn(&str) -> Result<T, &'static str>) -> T {
    let Ok(raw) = env::var(key) else {
        return default;
    };
    parse(&raw).unwrap_or_else(|reason| {
        ::tracing::warn!(
            env = key,
            raw = %raw,
            reason,
            "ignoring malformed property-test override",
        );
        default
    })
}

fn parse_cases(raw: &str) -> Result<u32, &'static str> {
    match raw.trim().parse::<u32>() {
        Ok(0) => Err("case count must be positive"),
        Ok(cases) => Ok(cases),
        Err(_) => Err("case count must be an unsigned integer"),
    }
}

fn parse_switch(raw: &str) -> Result<bool, &'static str> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err("expected true/false, 1/0, yes/no or on/off"),
    }
}
