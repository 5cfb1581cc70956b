//! Module dedicated to lifecycle hooks.
//!
//! After a mailbox or domain changes, the panel can run an external
//! command (to create directories, update indexes, clean caches) and
//! can pre-create IMAP subfolders for new mailboxes.

use process::Command;

/// IMAP subfolder provisioning for new mailboxes.
///
/// Modeled as one unit: a folder list without a host to create it on
/// cannot be represented, so a half-configured group is impossible
/// once the configuration is loaded.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SubfolderConfig {
    /// Subfolders created and subscribed for every new mailbox.
    pub folders: Vec<String>,

    /// The IMAP server to create them on.
    pub host: String,

    /// TCP port, when the server does not listen on the default one.
    pub port: Option<u16>,

    /// Extra connection flags, e.g. `notls` or `novalidate-cert`.
    pub options: Vec<String>,
}

/// External commands run after account lifecycle events.
///
/// Unset hooks mean the corresponding event passes silently. The
/// commands run with the privileges of the panel process, which may
/// be restricted by the host system.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct HookConfig {
    /// Run after a mailbox has been created.
    pub mailbox_postcreation: Option<Command>,

    /// Run after a mailbox has been deleted.
    pub mailbox_postdeletion: Option<Command>,

    /// Run after a domain has been deleted.
    pub domain_postdeletion: Option<Command>,

    /// IMAP subfolder provisioning, when configured.
    pub mailbox_subdirs: Option<SubfolderConfig>,
}
