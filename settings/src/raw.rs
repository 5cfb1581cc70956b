//! Module dedicated to the on-disk representation of the panel
//! configuration.
//!
//! The [`RawConfig`] structure mirrors the legacy flat key namespace:
//! one field per setting, every field optional, feature toggles kept
//! as plain `YES`/`NO` strings. Decoding those legacy literals into
//! proper Rust types happens in one explicit step, while converting
//! into [`PanelConfig`](crate::PanelConfig), so the string literals
//! never leak past this boundary.

use serde::Deserialize;

use crate::{alias::DefaultAlias, Error, Result};

/// The raw panel configuration, as declared in the static source.
///
/// Field names match the legacy setting names one to one: they are
/// the compatibility surface for existing deployments. Settings that
/// were never declared are rejected at parse time rather than
/// silently ignored.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RawConfig {
    /// Deployment safety gate. The panel refuses to serve anything
    /// until this has been explicitly switched to `true`.
    pub configured: Option<bool>,

    pub admin_url: Option<String>,
    pub default_language: Option<String>,

    // Database connection.
    pub database_type: Option<String>,
    pub database_host: Option<String>,
    pub database_user: Option<String>,
    pub database_password: Option<String>,
    pub database_name: Option<String>,
    pub database_prefix: Option<String>,
    pub database_tables: Option<RawTables>,

    // Site admin and mail server.
    pub admin_email: Option<String>,
    pub smtp_server: Option<String>,
    pub smtp_port: Option<i64>,

    // Passwords.
    pub encrypt: Option<String>,
    pub min_password_length: Option<i64>,
    pub generate_password: Option<String>,
    pub show_password: Option<String>,

    pub page_size: Option<i64>,
    pub default_aliases: Option<Vec<DefaultAlias>>,

    // Mailbox layout and per-domain defaults.
    pub domain_path: Option<String>,
    pub domain_in_mailbox: Option<String>,
    pub aliases: Option<i64>,
    pub mailboxes: Option<i64>,
    pub maxquota: Option<i64>,

    // Quota enforcement.
    pub quota: Option<String>,
    pub quota_multiplier: Option<i64>,

    // Transport maps.
    pub transport: Option<String>,
    pub transport_options: Option<Vec<String>>,
    pub transport_default: Option<String>,

    // Vacation auto-reply.
    pub vacation: Option<String>,
    pub vacation_domain: Option<String>,
    pub vacation_control: Option<String>,
    pub vacation_control_admin: Option<String>,

    // Alias permissions.
    pub alias_control: Option<String>,
    pub alias_control_admin: Option<String>,
    pub special_alias_control: Option<String>,
    pub alias_goto_limit: Option<i64>,

    // Feature tabs and audit log.
    pub backup: Option<String>,
    pub sendmail: Option<String>,
    pub logging: Option<String>,

    // Cosmetic text.
    pub show_header_text: Option<String>,
    pub header_text: Option<String>,
    pub user_footer_link: Option<String>,
    pub show_footer_text: Option<String>,
    pub footer_text: Option<String>,
    pub footer_link: Option<String>,
    pub welcome_text: Option<String>,

    pub emailcheck_resolve_domain: Option<String>,

    // Status indicators.
    pub show_status: Option<String>,
    pub show_status_key: Option<String>,
    pub show_status_text: Option<String>,
    pub show_undeliverable: Option<String>,
    pub show_undeliverable_color: Option<String>,
    pub show_undeliverable_exceptions: Option<Vec<String>>,
    pub show_popimap: Option<String>,
    pub show_popimap_color: Option<String>,
    pub show_custom_count: Option<i64>,
    pub show_custom_domains: Option<Vec<String>>,
    pub show_custom_colors: Option<Vec<String>>,

    // Lifecycle hooks.
    pub mailbox_postcreation_script: Option<String>,
    pub mailbox_postdeletion_script: Option<String>,
    pub domain_postdeletion_script: Option<String>,

    // IMAP subfolder provisioning. The host is only meaningful
    // together with the folder list, the conversion folds them into
    // one optional group.
    pub create_mailbox_subdirs: Option<Vec<String>>,
    pub create_mailbox_subdirs_host: Option<String>,
    pub create_mailbox_subdirs_hostport: Option<i64>,
    pub create_mailbox_subdirs_hostoptions: Option<Vec<String>>,
}

/// Raw logical-to-physical table name overrides.
///
/// Every field is optional: overriding one table name leaves the
/// seven others at their defaults.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RawTables {
    pub admin: Option<String>,
    pub alias: Option<String>,
    pub domain: Option<String>,
    pub domain_admins: Option<String>,
    pub log: Option<String>,
    pub mailbox: Option<String>,
    pub vacation: Option<String>,
    pub vacation_notification: Option<String>,
}

/// Decode a legacy `YES`/`NO` toggle.
///
/// Any other literal is an error: the original configuration format
/// treated everything non-affirmative as `NO`, which hid typos until
/// the feature silently stayed off in production.
pub(crate) fn toggle(key: &'static str, value: Option<&str>, default: bool) -> Result<bool> {
    match value {
        None => Ok(default),
        Some("YES") => Ok(true),
        Some("NO") => Ok(false),
        Some(other) => Err(Error::ParseToggleError(key, other.to_owned())),
    }
}

/// Decode an integer setting into its target width, rejecting values
/// the target type cannot hold (negative counts, oversized ports).
pub(crate) fn uint<T>(key: &'static str, value: Option<i64>, default: T) -> Result<T>
where
    T: TryFrom<i64>,
{
    match value {
        None => Ok(default),
        Some(n) => T::try_from(n).map_err(|_| Error::ParseIntegerSettingError(key, n)),
    }
}

/// Decode an integer setting that only makes sense strictly positive
/// (page sizes, minimum lengths).
pub(crate) fn positive(key: &'static str, value: Option<i64>, default: usize) -> Result<usize> {
    match value {
        None => Ok(default),
        Some(n) if n >= 1 => {
            usize::try_from(n).map_err(|_| Error::ParseIntegerSettingError(key, n))
        }
        Some(n) => Err(Error::ParseIntegerSettingError(key, n)),
    }
}

#[cfg(test)]
mod tests {
    use crate::Error;

    #[test]
    fn toggle() {
        assert!(matches!(super::toggle("quota", Some("YES"), false), Ok(true)));
        assert!(matches!(super::toggle("quota", Some("NO"), true), Ok(false)));
        assert!(matches!(super::toggle("quota", None, true), Ok(true)));

        // lowercase and arbitrary literals are rejected, not defaulted
        assert!(matches!(
            super::toggle("quota", Some("yes"), false),
            Err(Error::ParseToggleError("quota", lit)) if lit == "yes"
        ));
        assert!(matches!(
            super::toggle("quota", Some("MAYBE"), false),
            Err(Error::ParseToggleError("quota", lit)) if lit == "MAYBE"
        ));
    }

    #[test]
    fn positive() {
        assert!(matches!(super::positive("page_size", Some(25), 10), Ok(25)));
        assert!(matches!(super::positive("page_size", None, 10), Ok(10)));
        assert!(matches!(
            super::positive("page_size", Some(0), 10),
            Err(Error::ParseIntegerSettingError("page_size", 0))
        ));
        assert!(matches!(
            super::positive("page_size", Some(-3), 10),
            Err(Error::ParseIntegerSettingError("page_size", -3))
        ));
    }

    #[test]
    fn uint() {
        assert!(matches!(super::uint::<u16>("smtp_port", Some(25), 0), Ok(25)));
        assert!(matches!(super::uint::<u16>("smtp_port", None, 25), Ok(25)));
        assert!(matches!(
            super::uint::<u16>("smtp_port", Some(-1), 0),
            Err(Error::ParseIntegerSettingError("smtp_port", -1))
        ));
        assert!(matches!(
            super::uint::<u16>("smtp_port", Some(70000), 0),
            Err(Error::ParseIntegerSettingError("smtp_port", 70000))
        ));
    }
}
