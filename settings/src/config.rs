//! Module dedicated to the panel configuration.
//!
//! This module contains the representation of the loaded, validated
//! configuration named [`PanelConfig`], plus the one-time load path
//! that produces it from the static TOML source.

use std::{fs, path::Path};

use process::Command;
use shellexpand_utils::shellexpand_str;
use tracing::debug;

use crate::{
    alias::{self, AliasConfig, GotoLimit},
    database::{
        DatabaseConfig, LogicalTable, TableNames, DEFAULT_DATABASE_HOST, DEFAULT_DATABASE_NAME,
        DEFAULT_DATABASE_USER,
    },
    hooks::{HookConfig, SubfolderConfig},
    mailbox::{
        MailboxConfig, DEFAULT_DOMAIN_ALIASES, DEFAULT_DOMAIN_MAILBOXES, DEFAULT_DOMAIN_MAX_QUOTA,
        DEFAULT_WELCOME_TEXT,
    },
    password::{PasswordConfig, DEFAULT_MIN_PASSWORD_LENGTH},
    quota::{QuotaConfig, DEFAULT_QUOTA_MULTIPLIER},
    raw::{positive, toggle, uint, RawConfig},
    smtp::{SmtpConfig, DEFAULT_SMTP_HOST, DEFAULT_SMTP_PORT},
    status::{
        self, PopImapConfig, StatusConfig, UndeliverableConfig, DEFAULT_POPIMAP_COLOR,
        DEFAULT_STATUS_TEXT, DEFAULT_UNDELIVERABLE_COLOR,
    },
    transport::{TransportConfig, DEFAULT_TRANSPORT, DEFAULT_TRANSPORT_OPTIONS},
    ui::{
        FooterConfig, HeaderConfig, UiConfig, DEFAULT_FOOTER_LINK, DEFAULT_FOOTER_TEXT,
        DEFAULT_HEADER_TEXT, DEFAULT_LANGUAGE, DEFAULT_PAGE_SIZE, DEFAULT_USER_FOOTER_LINK,
    },
    vacation::{VacationConfig, DEFAULT_VACATION_DOMAIN},
    Error, Result,
};

/// The panel configuration.
///
/// Root of the typed settings tree every other component reads.
/// Built exactly once at startup via [`PanelConfig::load`], immutable
/// afterwards; components receive it by reference. A value of this
/// type always passed the full validation pass, including the
/// deployment safety gate.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PanelConfig {
    /// Email address provisioning mails are sent from.
    pub admin_email: String,

    /// Record admin actions in the log table.
    pub logging: bool,

    /// The database connection configuration.
    pub database: DatabaseConfig,

    /// The mail server configuration.
    pub smtp: SmtpConfig,

    /// The password policy configuration.
    pub password: PasswordConfig,

    /// The mailbox defaults configuration.
    pub mailbox: MailboxConfig,

    /// The quota enforcement configuration.
    pub quota: QuotaConfig,

    /// The mail transport configuration.
    pub transport: TransportConfig,

    /// The vacation auto-reply configuration.
    pub vacation: VacationConfig,

    /// The alias configuration.
    pub alias: AliasConfig,

    /// The status indicator configuration.
    pub status: StatusConfig,

    /// The lifecycle hooks configuration.
    pub hooks: HookConfig,

    /// The presentation configuration.
    pub ui: UiConfig,
}

impl PanelConfig {
    /// Load the configuration from the static TOML source at the
    /// given path.
    ///
    /// This is the only I/O the library performs, done once during
    /// process initialization, before any request handling starts.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading panel configuration");

        let source = fs::read_to_string(path)
            .map_err(|err| Error::ReadConfigFileError(err, path.to_owned()))?;

        Self::from_toml_str(&source)
    }

    /// Load the configuration from an in-memory TOML source.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let raw: RawConfig = toml::from_str(source).map_err(Error::ParseConfigFileError)?;
        raw.try_into()
    }

    /// Return the physical name of the given logical table, with the
    /// configured prefix applied.
    pub fn table(&self, table: LogicalTable) -> String {
        self.database.table(table)
    }

    /// Find the hook run after a mailbox has been created.
    pub fn find_mailbox_postcreation_hook(&self) -> Option<&Command> {
        self.hooks.mailbox_postcreation.as_ref()
    }

    /// Find the hook run after a mailbox has been deleted.
    pub fn find_mailbox_postdeletion_hook(&self) -> Option<&Command> {
        self.hooks.mailbox_postdeletion.as_ref()
    }

    /// Find the hook run after a domain has been deleted.
    pub fn find_domain_postdeletion_hook(&self) -> Option<&Command> {
        self.hooks.domain_postdeletion.as_ref()
    }

    /// Return `true` if mailbox quota is enforced.
    pub fn is_quota_enforced(&self) -> bool {
        self.quota.enforce
    }

    /// Return `true` if vacation auto-replies are available to users.
    pub fn is_vacation_enabled(&self) -> bool {
        self.vacation.enable
    }
}

impl TryFrom<RawConfig> for PanelConfig {
    type Error = Error;

    fn try_from(raw: RawConfig) -> Result<Self> {
        // Deployment safety gate: a template configuration must not
        // reach production unnoticed.
        if !raw.configured.unwrap_or(false) {
            return Err(Error::NotConfiguredError);
        }

        let table_defaults = TableNames::default();
        let tables = raw.database_tables.unwrap_or_default();
        let database = DatabaseConfig {
            kind: match raw.database_type.as_deref() {
                Some(kind) => kind.parse()?,
                None => Default::default(),
            },
            host: raw
                .database_host
                .unwrap_or_else(|| DEFAULT_DATABASE_HOST.into()),
            user: raw
                .database_user
                .unwrap_or_else(|| DEFAULT_DATABASE_USER.into()),
            password: raw.database_password.unwrap_or_default(),
            name: raw
                .database_name
                .unwrap_or_else(|| DEFAULT_DATABASE_NAME.into()),
            prefix: raw.database_prefix.unwrap_or_default(),
            tables: TableNames {
                admin: tables.admin.unwrap_or(table_defaults.admin),
                alias: tables.alias.unwrap_or(table_defaults.alias),
                domain: tables.domain.unwrap_or(table_defaults.domain),
                domain_admins: tables.domain_admins.unwrap_or(table_defaults.domain_admins),
                log: tables.log.unwrap_or(table_defaults.log),
                mailbox: tables.mailbox.unwrap_or(table_defaults.mailbox),
                vacation: tables.vacation.unwrap_or(table_defaults.vacation),
                vacation_notification: tables
                    .vacation_notification
                    .unwrap_or(table_defaults.vacation_notification),
            },
        };

        let smtp = SmtpConfig {
            host: raw.smtp_server.unwrap_or_else(|| DEFAULT_SMTP_HOST.into()),
            port: uint("smtp_port", raw.smtp_port, DEFAULT_SMTP_PORT)?,
        };

        let password = PasswordConfig {
            scheme: match raw.encrypt.as_deref() {
                Some(scheme) => scheme.parse()?,
                None => Default::default(),
            },
            min_length: positive(
                "min_password_length",
                raw.min_password_length,
                DEFAULT_MIN_PASSWORD_LENGTH,
            )?,
            generate: toggle("generate_password", raw.generate_password.as_deref(), false)?,
            show: toggle("show_password", raw.show_password.as_deref(), false)?,
        };

        let mailbox = MailboxConfig {
            domain_path: toggle("domain_path", raw.domain_path.as_deref(), false)?,
            domain_in_mailbox: toggle(
                "domain_in_mailbox",
                raw.domain_in_mailbox.as_deref(),
                true,
            )?,
            aliases: uint("aliases", raw.aliases, DEFAULT_DOMAIN_ALIASES)?,
            mailboxes: uint("mailboxes", raw.mailboxes, DEFAULT_DOMAIN_MAILBOXES)?,
            max_quota: uint("maxquota", raw.maxquota, DEFAULT_DOMAIN_MAX_QUOTA)?,
            welcome_text: raw
                .welcome_text
                .unwrap_or_else(|| DEFAULT_WELCOME_TEXT.into()),
            check_domain_dns: toggle(
                "emailcheck_resolve_domain",
                raw.emailcheck_resolve_domain.as_deref(),
                true,
            )?,
        };

        let quota = QuotaConfig {
            enforce: toggle("quota", raw.quota.as_deref(), false)?,
            multiplier: uint("quota_multiplier", raw.quota_multiplier, DEFAULT_QUOTA_MULTIPLIER)?,
        };

        let transport = TransportConfig::new(
            toggle("transport", raw.transport.as_deref(), false)?,
            raw.transport_options
                .unwrap_or_else(|| DEFAULT_TRANSPORT_OPTIONS.map(String::from).to_vec()),
            raw.transport_default
                .unwrap_or_else(|| DEFAULT_TRANSPORT.into()),
        )?;

        let vacation = VacationConfig {
            enable: toggle("vacation", raw.vacation.as_deref(), false)?,
            domain: raw
                .vacation_domain
                .unwrap_or_else(|| DEFAULT_VACATION_DOMAIN.into()),
            control: toggle("vacation_control", raw.vacation_control.as_deref(), true)?,
            control_admin: toggle(
                "vacation_control_admin",
                raw.vacation_control_admin.as_deref(),
                true,
            )?,
        };

        let alias = AliasConfig {
            control: toggle("alias_control", raw.alias_control.as_deref(), false)?,
            control_admin: toggle(
                "alias_control_admin",
                raw.alias_control_admin.as_deref(),
                false,
            )?,
            special_control: toggle(
                "special_alias_control",
                raw.special_alias_control.as_deref(),
                false,
            )?,
            goto_limit: GotoLimit::from_legacy(uint(
                "alias_goto_limit",
                raw.alias_goto_limit,
                0,
            )?),
            default_aliases: raw.default_aliases.unwrap_or_else(alias::default_aliases),
        };

        let custom_count = uint("show_custom_count", raw.show_custom_count, 0)?;
        let status = StatusConfig {
            enable: toggle("show_status", raw.show_status.as_deref(), false)?,
            show_key: toggle("show_status_key", raw.show_status_key.as_deref(), false)?,
            text: raw
                .show_status_text
                .unwrap_or_else(|| DEFAULT_STATUS_TEXT.into()),
            undeliverable: UndeliverableConfig {
                enable: toggle("show_undeliverable", raw.show_undeliverable.as_deref(), false)?,
                color: raw
                    .show_undeliverable_color
                    .unwrap_or_else(|| DEFAULT_UNDELIVERABLE_COLOR.into()),
                exceptions: raw.show_undeliverable_exceptions.unwrap_or_default(),
            },
            popimap: PopImapConfig {
                enable: toggle("show_popimap", raw.show_popimap.as_deref(), false)?,
                color: raw
                    .show_popimap_color
                    .unwrap_or_else(|| DEFAULT_POPIMAP_COLOR.into()),
            },
            custom: status::pair_custom(
                raw.show_custom_domains.unwrap_or_default(),
                raw.show_custom_colors.unwrap_or_default(),
                custom_count,
            )?,
            custom_count,
        };

        let hooks = HookConfig {
            mailbox_postcreation: raw
                .mailbox_postcreation_script
                .map(|cmd| Command::new(shellexpand_str(cmd))),
            mailbox_postdeletion: raw
                .mailbox_postdeletion_script
                .map(|cmd| Command::new(shellexpand_str(cmd))),
            domain_postdeletion: raw
                .domain_postdeletion_script
                .map(|cmd| Command::new(shellexpand_str(cmd))),
            mailbox_subdirs: match raw.create_mailbox_subdirs {
                Some(folders) => {
                    let host = raw.create_mailbox_subdirs_host.ok_or(
                        Error::MissingDependentSettingError(
                            "create_mailbox_subdirs",
                            "create_mailbox_subdirs_host",
                        ),
                    )?;

                    let port = match raw.create_mailbox_subdirs_hostport {
                        None => None,
                        Some(port) => Some(u16::try_from(port).map_err(|_| {
                            Error::ParseIntegerSettingError("create_mailbox_subdirs_hostport", port)
                        })?),
                    };

                    Some(SubfolderConfig {
                        folders,
                        host,
                        port,
                        options: raw.create_mailbox_subdirs_hostoptions.unwrap_or_default(),
                    })
                }
                None => {
                    // Orphan dependents point at a half-deleted group.
                    let orphan = if raw.create_mailbox_subdirs_host.is_some() {
                        Some("create_mailbox_subdirs_host")
                    } else if raw.create_mailbox_subdirs_hostport.is_some() {
                        Some("create_mailbox_subdirs_hostport")
                    } else if raw.create_mailbox_subdirs_hostoptions.is_some() {
                        Some("create_mailbox_subdirs_hostoptions")
                    } else {
                        None
                    };

                    if let Some(orphan) = orphan {
                        return Err(Error::MissingDependentSettingError(
                            orphan,
                            "create_mailbox_subdirs",
                        ));
                    }

                    None
                }
            },
        };

        let ui = UiConfig {
            admin_url: raw.admin_url.unwrap_or_default(),
            language: raw
                .default_language
                .unwrap_or_else(|| DEFAULT_LANGUAGE.into()),
            page_size: positive("page_size", raw.page_size, DEFAULT_PAGE_SIZE)?,
            header: HeaderConfig {
                show: toggle("show_header_text", raw.show_header_text.as_deref(), false)?,
                text: raw
                    .header_text
                    .unwrap_or_else(|| DEFAULT_HEADER_TEXT.into()),
            },
            footer: FooterConfig {
                show: toggle("show_footer_text", raw.show_footer_text.as_deref(), true)?,
                text: raw
                    .footer_text
                    .unwrap_or_else(|| DEFAULT_FOOTER_TEXT.into()),
                link: raw
                    .footer_link
                    .unwrap_or_else(|| DEFAULT_FOOTER_LINK.into()),
            },
            user_footer_link: raw
                .user_footer_link
                .unwrap_or_else(|| DEFAULT_USER_FOOTER_LINK.into()),
            show_backup_tab: toggle("backup", raw.backup.as_deref(), true)?,
            show_sendmail_tab: toggle("sendmail", raw.sendmail.as_deref(), true)?,
        };

        debug!("panel configuration validated");

        Ok(Self {
            admin_email: raw.admin_email.unwrap_or_default(),
            logging: toggle("logging", raw.logging.as_deref(), true)?,
            database,
            smtp,
            password,
            mailbox,
            quota,
            transport,
            vacation,
            alias,
            status,
            hooks,
            ui,
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::{Error, PanelConfig, RawConfig};

    fn configured() -> RawConfig {
        RawConfig {
            configured: Some(true),
            ..Default::default()
        }
    }

    #[test]
    fn unmodified_defaults_are_gated() {
        assert!(matches!(
            PanelConfig::try_from(RawConfig::default()),
            Err(Error::NotConfiguredError)
        ));
        assert!(matches!(
            PanelConfig::try_from(RawConfig {
                configured: Some(false),
                ..Default::default()
            }),
            Err(Error::NotConfiguredError)
        ));
    }

    #[test]
    fn gated_defaults_resolve() {
        let config = PanelConfig::try_from(configured()).unwrap();

        assert_eq!(config.database.host, "localhost");
        assert_eq!(config.smtp.port, 25);
        assert_eq!(config.password.min_length, 5);
        assert_eq!(config.ui.page_size, 10);
        assert_eq!(config.quota.multiplier, 1024000);
        assert!(!config.is_quota_enforced());
        assert!(config.logging);
        assert!(config.hooks.mailbox_subdirs.is_none());
    }

    #[test]
    fn subfolder_host_without_folders_is_rejected() {
        let raw = RawConfig {
            create_mailbox_subdirs_host: Some("localhost".into()),
            ..configured()
        };

        assert!(matches!(
            PanelConfig::try_from(raw),
            Err(Error::MissingDependentSettingError(
                "create_mailbox_subdirs_host",
                "create_mailbox_subdirs",
            ))
        ));
    }
}
