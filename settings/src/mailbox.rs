//! Module dedicated to mailbox defaults.
//!
//! Settings here shape how new mailboxes are laid out on disk and
//! which limits a freshly created domain starts with.

pub const DEFAULT_DOMAIN_ALIASES: u32 = 10;
pub const DEFAULT_DOMAIN_MAILBOXES: u32 = 10;
pub const DEFAULT_DOMAIN_MAX_QUOTA: u32 = 10;

pub const DEFAULT_WELCOME_TEXT: &str = "Hi,

Welcome to your new account.
";

/// The mailbox defaults configuration.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MailboxConfig {
    /// Store mailboxes in a per-domain directory,
    /// e.g. `domain.tld/user@domain.tld`.
    pub domain_path: bool,

    /// Keep the domain part in the mailbox directory name,
    /// e.g. `user@domain.tld` instead of `user`.
    pub domain_in_mailbox: bool,

    /// Default alias count limit for new domains.
    pub aliases: u32,

    /// Default mailbox count limit for new domains.
    pub mailboxes: u32,

    /// Default quota limit for new domains, in MB.
    pub max_quota: u32,

    /// Message sent to every newly created mailbox.
    pub welcome_text: String,

    /// Check the domain part of new addresses against DNS before
    /// accepting the mailbox.
    pub check_domain_dns: bool,
}

impl Default for MailboxConfig {
    fn default() -> Self {
        Self {
            domain_path: false,
            domain_in_mailbox: true,
            aliases: DEFAULT_DOMAIN_ALIASES,
            mailboxes: DEFAULT_DOMAIN_MAILBOXES,
            max_quota: DEFAULT_DOMAIN_MAX_QUOTA,
            welcome_text: DEFAULT_WELCOME_TEXT.into(),
            check_domain_dns: true,
        }
    }
}
