//! Module dedicated to mail transport configuration.
//!
//! Domains can be routed through different transports. The declared
//! option list feeds the selection widget in declaration order, and
//! the default transport must be one of its members.

use tracing::debug;

use crate::{Error, Result};

pub const DEFAULT_TRANSPORT: &str = "virtual";

/// The transport options declared when none are configured: virtual
/// accounts, system accounts and backup MX relays.
pub const DEFAULT_TRANSPORT_OPTIONS: [&str; 3] = ["virtual", "local", "relay"];

/// The mail transport configuration.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TransportConfig {
    /// Let admins pick a transport per domain.
    pub enable: bool,

    /// The selectable transports, in declaration order.
    pub options: Vec<String>,

    /// The transport preselected for new domains. Always a member of
    /// [`options`](Self::options).
    pub default: String,
}

impl TransportConfig {
    /// Build a transport configuration, checking that the default is
    /// a member of the option list.
    pub(crate) fn new(enable: bool, options: Vec<String>, default: String) -> Result<Self> {
        if !options.iter().any(|option| option == &default) {
            return Err(Error::InvalidTransportDefaultError(default, options));
        }

        debug!(default = %default, "transport options validated");

        Ok(Self {
            enable,
            options,
            default,
        })
    }
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            enable: false,
            options: DEFAULT_TRANSPORT_OPTIONS.map(String::from).to_vec(),
            default: DEFAULT_TRANSPORT.into(),
        }
    }
}
