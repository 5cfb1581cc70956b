//! Module dedicated to the legacy flat-namespace view of the
//! configuration.
//!
//! Historical panel code addressed every setting by a flat string
//! key. [`PanelConfig::get`] keeps that namespace readable for code
//! that has not migrated to the typed tree yet; the typed fields stay
//! the source of truth.

use crate::{database::LogicalTable, Error, PanelConfig, Result};

/// A configuration value rendered in the legacy flat namespace.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Value {
    /// A decoded feature toggle or gate.
    Bool(bool),
    /// An integer setting.
    Int(i64),
    /// A free-form text setting.
    Str(String),
    /// An ordered list of strings.
    List(Vec<String>),
    /// An ordered list of key/value pairs.
    Map(Vec<(String, String)>),
    /// An optional setting that was left unset.
    Unset,
}

impl Value {
    fn str(s: &str) -> Self {
        Self::Str(s.to_owned())
    }

    fn opt_str(s: Option<impl ToString>) -> Self {
        match s {
            Some(s) => Self::Str(s.to_string()),
            None => Self::Unset,
        }
    }
}

impl PanelConfig {
    /// Look up a setting by its legacy flat name.
    ///
    /// Every declared setting resolves; asking for a name that was
    /// never declared is an error, not a silent default.
    pub fn get(&self, key: &str) -> Result<Value> {
        match key {
            // a successfully loaded configuration passed the gate
            "configured" => Ok(Value::Bool(true)),

            "admin_url" => Ok(Value::str(&self.ui.admin_url)),
            "default_language" => Ok(Value::str(&self.ui.language)),

            "database_type" => Ok(Value::Str(self.database.kind.to_string())),
            "database_host" => Ok(Value::str(&self.database.host)),
            "database_user" => Ok(Value::str(&self.database.user)),
            "database_password" => Ok(Value::str(&self.database.password)),
            "database_name" => Ok(Value::str(&self.database.name)),
            "database_prefix" => Ok(Value::str(&self.database.prefix)),
            "database_tables" => Ok(Value::Map(
                LogicalTable::ALL
                    .into_iter()
                    .map(|table| {
                        (
                            table.key().to_owned(),
                            self.database.tables.name(table).to_owned(),
                        )
                    })
                    .collect(),
            )),

            "admin_email" => Ok(Value::str(&self.admin_email)),
            "smtp_server" => Ok(Value::str(&self.smtp.host)),
            "smtp_port" => Ok(Value::Int(self.smtp.port.into())),

            "encrypt" => Ok(Value::Str(self.password.scheme.to_string())),
            "min_password_length" => Ok(Value::Int(self.password.min_length as i64)),
            "generate_password" => Ok(Value::Bool(self.password.generate)),
            "show_password" => Ok(Value::Bool(self.password.show)),

            "page_size" => Ok(Value::Int(self.ui.page_size as i64)),
            "default_aliases" => Ok(Value::Map(
                self.alias
                    .default_aliases
                    .iter()
                    .map(|alias| (alias.name.clone(), alias.address.clone()))
                    .collect(),
            )),

            "domain_path" => Ok(Value::Bool(self.mailbox.domain_path)),
            "domain_in_mailbox" => Ok(Value::Bool(self.mailbox.domain_in_mailbox)),
            "aliases" => Ok(Value::Int(self.mailbox.aliases.into())),
            "mailboxes" => Ok(Value::Int(self.mailbox.mailboxes.into())),
            "maxquota" => Ok(Value::Int(self.mailbox.max_quota.into())),
            "welcome_text" => Ok(Value::str(&self.mailbox.welcome_text)),
            "emailcheck_resolve_domain" => Ok(Value::Bool(self.mailbox.check_domain_dns)),

            "quota" => Ok(Value::Bool(self.quota.enforce)),
            "quota_multiplier" => Ok(Value::Int(self.quota.multiplier as i64)),

            "transport" => Ok(Value::Bool(self.transport.enable)),
            "transport_options" => Ok(Value::List(self.transport.options.clone())),
            "transport_default" => Ok(Value::str(&self.transport.default)),

            "vacation" => Ok(Value::Bool(self.vacation.enable)),
            "vacation_domain" => Ok(Value::str(&self.vacation.domain)),
            "vacation_control" => Ok(Value::Bool(self.vacation.control)),
            "vacation_control_admin" => Ok(Value::Bool(self.vacation.control_admin)),

            "alias_control" => Ok(Value::Bool(self.alias.control)),
            "alias_control_admin" => Ok(Value::Bool(self.alias.control_admin)),
            "special_alias_control" => Ok(Value::Bool(self.alias.special_control)),
            "alias_goto_limit" => Ok(Value::Int(self.alias.goto_limit.as_legacy() as i64)),

            "backup" => Ok(Value::Bool(self.ui.show_backup_tab)),
            "sendmail" => Ok(Value::Bool(self.ui.show_sendmail_tab)),
            "logging" => Ok(Value::Bool(self.logging)),

            "show_header_text" => Ok(Value::Bool(self.ui.header.show)),
            "header_text" => Ok(Value::str(&self.ui.header.text)),
            "user_footer_link" => Ok(Value::str(&self.ui.user_footer_link)),
            "show_footer_text" => Ok(Value::Bool(self.ui.footer.show)),
            "footer_text" => Ok(Value::str(&self.ui.footer.text)),
            "footer_link" => Ok(Value::str(&self.ui.footer.link)),

            "show_status" => Ok(Value::Bool(self.status.enable)),
            "show_status_key" => Ok(Value::Bool(self.status.show_key)),
            "show_status_text" => Ok(Value::str(&self.status.text)),
            "show_undeliverable" => Ok(Value::Bool(self.status.undeliverable.enable)),
            "show_undeliverable_color" => Ok(Value::str(&self.status.undeliverable.color)),
            "show_undeliverable_exceptions" => {
                Ok(Value::List(self.status.undeliverable.exceptions.clone()))
            }
            "show_popimap" => Ok(Value::Bool(self.status.popimap.enable)),
            "show_popimap_color" => Ok(Value::str(&self.status.popimap.color)),
            "show_custom_count" => Ok(Value::Int(self.status.custom_count as i64)),
            "show_custom_domains" => Ok(Value::List(
                self.status
                    .custom
                    .iter()
                    .map(|indicator| indicator.domain.clone())
                    .collect(),
            )),
            "show_custom_colors" => Ok(Value::List(
                self.status
                    .custom
                    .iter()
                    .map(|indicator| indicator.color.clone())
                    .collect(),
            )),

            "mailbox_postcreation_script" => {
                Ok(Value::opt_str(self.hooks.mailbox_postcreation.as_deref()))
            }
            "mailbox_postdeletion_script" => {
                Ok(Value::opt_str(self.hooks.mailbox_postdeletion.as_deref()))
            }
            "domain_postdeletion_script" => {
                Ok(Value::opt_str(self.hooks.domain_postdeletion.as_deref()))
            }

            "create_mailbox_subdirs" => Ok(match &self.hooks.mailbox_subdirs {
                Some(subdirs) => Value::List(subdirs.folders.clone()),
                None => Value::Unset,
            }),
            "create_mailbox_subdirs_host" => Ok(Value::opt_str(
                self.hooks.mailbox_subdirs.as_ref().map(|s| &s.host),
            )),
            "create_mailbox_subdirs_hostport" => {
                Ok(match self.hooks.mailbox_subdirs.as_ref().and_then(|s| s.port) {
                    Some(port) => Value::Int(port.into()),
                    None => Value::Unset,
                })
            }
            "create_mailbox_subdirs_hostoptions" => Ok(match &self.hooks.mailbox_subdirs {
                Some(subdirs) => Value::List(subdirs.options.clone()),
                None => Value::Unset,
            }),

            unknown => Err(Error::FindSettingError(unknown.to_owned())),
        }
    }
}
