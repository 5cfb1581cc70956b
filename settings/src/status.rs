//! Module dedicated to status indicator configuration.
//!
//! The overview can prepend a colored block to every alias and
//! mailbox row: one color when delivery looks broken, one for
//! POP/IMAP mailboxes, and custom colors for destinations the
//! operator cares about (a shell host, an exchange server, a
//! subdomain).

use crate::{Error, Result};

pub const DEFAULT_STATUS_TEXT: &str = "&nbsp;&nbsp;";
pub const DEFAULT_UNDELIVERABLE_COLOR: &str = "tomato";
pub const DEFAULT_POPIMAP_COLOR: &str = "darkgrey";

/// Indicator for aliases that appear to deliver to a non-existent
/// account.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UndeliverableConfig {
    pub enable: bool,

    /// Background color of the indicator block.
    pub color: String,

    /// Destination domains that are never flagged, typically external
    /// systems mail is knowingly forwarded to.
    pub exceptions: Vec<String>,
}

impl Default for UndeliverableConfig {
    fn default() -> Self {
        Self {
            enable: false,
            color: DEFAULT_UNDELIVERABLE_COLOR.into(),
            exceptions: Vec::new(),
        }
    }
}

/// Indicator for regular POP/IMAP mailboxes.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PopImapConfig {
    pub enable: bool,

    /// Background color of the indicator block.
    pub color: String,
}

impl Default for PopImapConfig {
    fn default() -> Self {
        Self {
            enable: false,
            color: DEFAULT_POPIMAP_COLOR.into(),
        }
    }
}

/// A colored indicator attached to a custom destination domain.
///
/// Built from two index-correlated legacy lists: the domain at
/// position N pairs with the color at position N.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CustomIndicator {
    pub domain: String,
    pub color: String,
}

/// The status indicator configuration.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct StatusConfig {
    /// Show the status column at all.
    pub enable: bool,

    /// Display a legend explaining the colors.
    pub show_key: bool,

    /// Text rendered on the colored background.
    pub text: String,

    pub undeliverable: UndeliverableConfig,
    pub popimap: PopImapConfig,

    /// Custom indicators, in declaration order.
    pub custom: Vec<CustomIndicator>,

    /// How many custom indicators are active; `0` disables them.
    pub custom_count: usize,
}

impl StatusConfig {
    /// The active custom indicators, i.e. the first
    /// [`custom_count`](Self::custom_count) declared ones.
    pub fn active_custom(&self) -> &[CustomIndicator] {
        let count = self.custom_count.min(self.custom.len());
        &self.custom[..count]
    }
}

/// Pair the two legacy custom indicator lists by index.
///
/// Both lists must have the same length, and the active count must
/// not exceed it.
pub(crate) fn pair_custom(
    domains: Vec<String>,
    colors: Vec<String>,
    count: usize,
) -> Result<Vec<CustomIndicator>> {
    if domains.len() != colors.len() {
        return Err(Error::MismatchedCustomIndicatorsError(
            domains.len(),
            colors.len(),
        ));
    }

    if count > domains.len() {
        return Err(Error::InvalidCustomIndicatorCountError(count, domains.len()));
    }

    Ok(domains
        .into_iter()
        .zip(colors)
        .map(|(domain, color)| CustomIndicator { domain, color })
        .collect())
}

#[cfg(test)]
mod tests {
    use crate::Error;

    #[test]
    fn pair_custom_by_index() {
        let indicators = super::pair_custom(
            vec!["sub.domain.ext".into(), "domain2.ext".into()],
            vec!["lightgreen".into(), "lightblue".into()],
            2,
        )
        .unwrap();

        assert_eq!(indicators[0].domain, "sub.domain.ext");
        assert_eq!(indicators[0].color, "lightgreen");
        assert_eq!(indicators[1].domain, "domain2.ext");
        assert_eq!(indicators[1].color, "lightblue");
    }

    #[test]
    fn pair_custom_rejects_mismatched_lengths() {
        assert!(matches!(
            super::pair_custom(
                vec!["sub.domain.ext".into(), "domain2.ext".into()],
                vec!["lightgreen".into()],
                1,
            ),
            Err(Error::MismatchedCustomIndicatorsError(2, 1))
        ));
    }

    #[test]
    fn pair_custom_rejects_oversized_count() {
        assert!(matches!(
            super::pair_custom(vec!["domain.ext".into()], vec!["lightblue".into()], 2),
            Err(Error::InvalidCustomIndicatorCountError(2, 1))
        ));
    }
}
