// SPDX-License-Identifier: MPL-2.0
//! Compile-time feature flags.
//!
//! The registry is a `const` value: every flag is known when the crate is
//! built and nothing can change it afterwards. UI code gates whole sections on
//! a flag's `enabled` field.
//!
//! ```
//! use meetdeck::features::{Feature, FEATURES};
//!
//! assert!(FEATURES.meetings.enabled);
//! assert!(FEATURES.is_enabled(Feature::Meetings));
//! ```

use std::fmt;
use std::str::FromStr;

/// Enablement metadata attached to a single feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Capability {
    pub enabled: bool,
}

impl Capability {
    #[must_use]
    pub const fn enabled() -> Self {
        Self { enabled: true }
    }

    #[must_use]
    pub const fn disabled() -> Self {
        Self { enabled: false }
    }
}

/// Every feature known to the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    /// The meetings section of the main screen.
    Meetings,
}

impl Feature {
    /// All features, in declaration order.
    pub const ALL: [Feature; 1] = [Feature::Meetings];

    /// Stable key used in logs and on the command line.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Feature::Meetings => "meetings",
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a string does not name a known feature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownFeature(pub String);

impl fmt::Display for UnknownFeature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown feature: {}", self.0)
    }
}

impl std::error::Error for UnknownFeature {}

impl FromStr for Feature {
    type Err = UnknownFeature;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Feature::ALL
            .into_iter()
            .find(|feature| feature.name() == s)
            .ok_or_else(|| UnknownFeature(s.to_string()))
    }
}

/// The full flag set. One field per [`Feature`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Features {
    pub meetings: Capability,
}

/// Flags compiled into this build.
pub const FEATURES: Features = Features {
    meetings: Capability::enabled(),
};

impl Features {
    #[must_use]
    pub const fn capability(&self, feature: Feature) -> Capability {
        match feature {
            Feature::Meetings => self.meetings,
        }
    }

    #[must_use]
    pub const fn is_enabled(&self, feature: Feature) -> bool {
        self.capability(feature).enabled
    }

    /// String-keyed lookup for callers that only have a name.
    ///
    /// Unknown names yield `None`.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<Capability> {
        name.parse::<Feature>()
            .ok()
            .map(|feature| self.capability(feature))
    }

    /// Iterates `(name, capability)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, Capability)> + '_ {
        Feature::ALL
            .into_iter()
            .map(move |feature| (feature.name(), self.capability(feature)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meetings_is_enabled() {
        assert!(FEATURES.meetings.enabled);
        assert!(FEATURES.is_enabled(Feature::Meetings));
    }

    #[test]
    fn repeated_reads_are_identical() {
        let first = FEATURES;
        for _ in 0..10 {
            assert_eq!(FEATURES, first);
            assert_eq!(FEATURES.capability(Feature::Meetings), first.meetings);
        }
    }

    #[test]
    fn lookup_by_name() {
        assert_eq!(FEATURES.lookup("meetings"), Some(Capability::enabled()));
        assert_eq!(FEATURES.lookup("calendar"), None);
        assert_eq!(FEATURES.lookup(""), None);
    }

    #[test]
    fn feature_names_round_trip_through_from_str() {
        for feature in Feature::ALL {
            assert_eq!(feature.name().parse::<Feature>(), Ok(feature));
        }
        assert!("Meetings".parse::<Feature>().is_err());
    }

    #[test]
    fn iter_lists_every_feature_once() {
        let entries: Vec<_> = FEATURES.iter().collect();
        assert_eq!(entries, vec![("meetings", Capability::enabled())]);
    }

    #[test]
    fn disabled_capability_is_not_enabled() {
        let features = Features {
            meetings: Capability::disabled(),
        };
        assert!(!features.is_enabled(Feature::Meetings));
    }
}
