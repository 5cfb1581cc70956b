//! Module dedicated to alias configuration.
//!
//! The panel mirrors every mailbox into the alias table so catch-all
//! and regular delivery can coexist. Settings here decide who may
//! edit those generated aliases, which aliases every new domain
//! starts with, and how many goto addresses the overview displays.

use serde::Deserialize;

/// An alias created for every new domain.
///
/// Declared as a list so the creation order is stable.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct DefaultAlias {
    /// The local part of the alias, e.g. `postmaster`.
    pub name: String,

    /// The address the alias delivers to.
    pub address: String,
}

impl DefaultAlias {
    pub fn new(name: impl ToString, address: impl ToString) -> Self {
        Self {
            name: name.to_string(),
            address: address.to_string(),
        }
    }
}

/// Upper bound on goto addresses shown per alias in the overview.
///
/// The legacy format overloaded `0` to mean "no limit"; the two
/// meanings are kept apart here.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum GotoLimit {
    /// Show every goto address.
    #[default]
    Unlimited,
    /// Show at most this many goto addresses, hide the rest behind
    /// an "and X more" marker.
    Bounded(usize),
}

impl GotoLimit {
    /// Decode the legacy integer form, where `0` means unlimited.
    pub(crate) fn from_legacy(limit: usize) -> Self {
        match limit {
            0 => Self::Unlimited,
            n => Self::Bounded(n),
        }
    }

    /// Encode back to the legacy integer form.
    pub fn as_legacy(&self) -> usize {
        match self {
            Self::Unlimited => 0,
            Self::Bounded(n) => *n,
        }
    }

    /// Return `true` if a goto list of the given length would be
    /// truncated in the overview.
    pub fn truncates(&self, count: usize) -> bool {
        match self {
            Self::Unlimited => false,
            Self::Bounded(n) => count > *n,
        }
    }
}

/// The alias configuration.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AliasConfig {
    /// Let admins edit the aliases the panel generates for mailboxes.
    pub control: bool,

    /// Let domain admins edit user aliases.
    pub control_admin: bool,

    /// Let domain admins edit the default aliases.
    pub special_control: bool,

    /// Goto addresses shown per alias in the overview.
    pub goto_limit: GotoLimit,

    /// Aliases created for every new domain, in declaration order.
    pub default_aliases: Vec<DefaultAlias>,
}

impl Default for AliasConfig {
    fn default() -> Self {
        Self {
            control: false,
            control_admin: false,
            special_control: false,
            goto_limit: GotoLimit::default(),
            default_aliases: default_aliases(),
        }
    }
}

pub(crate) fn default_aliases() -> Vec<DefaultAlias> {
    ["abuse", "hostmaster", "postmaster", "webmaster"]
        .into_iter()
        .map(|name| DefaultAlias::new(name, format!("{name}@change-this-to-your.domain.tld")))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::GotoLimit;

    #[test]
    fn goto_limit_from_legacy() {
        assert_eq!(GotoLimit::from_legacy(0), GotoLimit::Unlimited);
        assert_eq!(GotoLimit::from_legacy(3), GotoLimit::Bounded(3));
    }

    #[test]
    fn goto_limit_truncation() {
        assert!(!GotoLimit::Unlimited.truncates(1000));
        assert!(!GotoLimit::Bounded(5).truncates(5));
        assert!(GotoLimit::Bounded(5).truncates(6));
    }

    #[test]
    fn goto_limit_round_trips() {
        for limit in [0, 1, 42] {
            assert_eq!(GotoLimit::from_legacy(limit).as_legacy(), limit);
        }
    }
}
