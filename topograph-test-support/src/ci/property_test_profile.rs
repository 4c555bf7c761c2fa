//! Environment-driven proptest tuning shared by every property suite.
//!
//! CI raises the case count for nightly runs and may fork each case into its
//! own process; local runs keep the suite's defaults.

use std::env;

use proptest::test_runner::Config as ProptestConfig;

/// Environment variable overriding the number of cases per property.
pub const PROPTEST_CASES_ENV_KEY: &str = "PROPTEST_CASES";
/// Environment variable toggling per-case process forking.
pub const TOPOGRAPH_PBT_FORK_ENV_KEY: &str = "TOPOGRAPH_PBT_FORK";

/// Case count and fork mode resolved for one property suite.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProptestRunProfile {
    cases: u32,
    fork: bool,
}

impl ProptestRunProfile {
    /// Reads overrides from the environment, falling back to the defaults.
    ///
    /// Invalid overrides are logged and ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use topograph_test_support::ci::property_test_profile::ProptestRunProfile;
    ///
    /// let profile = ProptestRunProfile::load(64, false);
    /// assert!(profile.cases() > 0);
    /// ```
    #[must_use]
    pub fn load(default_cases: u32, default_fork: bool) -> Self {
        let cases = env::var(PROPTEST_CASES_ENV_KEY).ok();
        let fork = env::var(TOPOGRAPH_PBT_FORK_ENV_KEY).ok();
        Self::from_overrides(default_cases, default_fork, cases.as_deref(), fork.as_deref())
    }

    /// Resolves a profile from raw override strings.
    ///
    /// # Examples
    ///
    /// ```
    /// use topograph_test_support::ci::property_test_profile::ProptestRunProfile;
    ///
    /// let profile = ProptestRunProfile::from_overrides(64, false, Some("500"), Some("on"));
    /// assert_eq!(profile.cases(), 500);
    /// assert!(profile.fork());
    /// ```
    #[must_use]
    pub fn from_overrides(
        default_cases: u32,
        default_fork: bool,
        cases: Option<&str>,
        fork: Option<&str>,
    ) -> Self {
        Self {
            cases: resolve(PROPTEST_CASES_ENV_KEY, cases, default_cases, parse_cases),
            fork: resolve(TOPOGRAPH_PBT_FORK_ENV_KEY, fork, default_fork, parse_switch),
        }
    }

    /// Number of cases to run per property.
    #[must_use]
    pub const fn cases(&self) -> u32 {
        self.cases
    }

    /// Whether each case runs in a forked subprocess.
    #[must_use]
    pub const fn fork(&self) -> bool {
        self.fork
    }

    /// Proptest runner configuration carrying this profile.
    ///
    /// # Examples
    ///
    /// ```
    /// use topograph_test_support::ci::property_test_profile::ProptestRunProfile;
    ///
    /// let config = ProptestRunProfile::from_overrides(32, false, None, None).proptest_config();
    /// assert_eq!(config.cases, 32);
    /// ```
    #[must_use]
    pub fn proptest_config(&self) -> ProptestConfig {
        ProptestConfig {
            cases: self.cases,
            fork: self.fork,
            ..ProptestConfig::default()
        }
    }
}

/// Proptest configuration for a suite, honouring the environment overrides.
#[must_use]
pub fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    ProptestRunProfile::load(default_cases, false).proptest_config()
}

fn resolve<T>(key: &'static str, raw: Option<&str>, default: T, parse: fn(&str) -> Option<T>) -> T {
    let Some(raw) = raw else {
        return default;
    };
    parse(raw).unwrap_or_else(|| {
        tracing::warn!(env = key, raw, "ignoring invalid property-test override");
        default
    })
}

fn parse_cases(raw: &str) -> Option<u32> {
    raw.trim().parse::<u32>().ok().filter(|&cases| cases > 0)
}

fn parse_switch(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn defaults_apply_without_overrides() {
        let profile = ProptestRunProfile::from_overrides(64, false, None, None);
        assert_eq!(profile.cases(), 64);
        assert!(!profile.fork());
    }

    #[rstest]
    #[case("1", 1)]
    #[case(" 250 ", 250)]
    #[case("25000", 25_000)]
    fn valid_case_counts_override_the_default(#[case] raw: &str, #[case] expected: u32) {
        let profile = ProptestRunProfile::from_overrides(64, false, Some(raw), None);
        assert_eq!(profile.cases(), expected);
    }

    #[rstest]
    #[case("0")]
    #[case("-1")]
    #[case("many")]
    fn invalid_case_counts_keep_the_default(#[case] raw: &str) {
        let profile = ProptestRunProfile::from_overrides(64, false, Some(raw), None);
        assert_eq!(profile.cases(), 64);
    }

    #[rstest]
    #[case("TRUE", true)]
    #[case("on", true)]
    #[case("1", true)]
    #[case("off", false)]
    #[case("No", false)]
    #[case("0", false)]
    fn fork_switch_accepts_common_spellings(#[case] raw: &str, #[case] expected: bool) {
        let profile = ProptestRunProfile::from_overrides(8, !expected, None, Some(raw));
        assert_eq!(profile.fork(), expected);
    }

    #[test]
    fn proptest_config_carries_the_profile() {
        let config = ProptestRunProfile::from_overrides(8, false, Some("40"), Some("yes"))
            .proptest_config();
        assert_eq!(config.cases, 40);
        assert!(config.fork);
        assert_eq!(config.max_shrink_iters, ProptestConfig::default().max_shrink_iters);
    }

    #[rstest]
    #[case("")]
    #[case("maybe")]
    #[case("2")]
    fn unknown_fork_values_keep_the_default(#[case] raw: &str) {
        let profile = ProptestRunProfile::from_overrides(8, true, None, Some(raw));
        assert!(profile.fork());
    }
}
