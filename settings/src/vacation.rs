//! Module dedicated to vacation auto-reply configuration.

pub const DEFAULT_VACATION_DOMAIN: &str = "autoreply.change-this-to-your.domain.tld";

/// The vacation auto-reply configuration.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VacationConfig {
    /// Offer virtual vacation auto-replies to mailbox users.
    pub enable: bool,

    /// The auto-reply pseudo-domain routed to the vacation
    /// handler. Does not need to resolve in DNS.
    pub domain: String,

    /// Let users manage their own vacation status.
    pub control: bool,

    /// Let domain admins edit user vacation status.
    pub control_admin: bool,
}

impl Default for VacationConfig {
    fn default() -> Self {
        Self {
            enable: false,
            domain: DEFAULT_VACATION_DOMAIN.into(),
            control: true,
            control_admin: true,
        }
    }
}
