//! Module dedicated to database configuration.
//!
//! The panel persists accounts, aliases and domains in a relational
//! database. This module describes the connection parameters and the
//! mapping from the logical table names used by application code to
//! the physical names in the schema.

use std::{fmt, str::FromStr};

use crate::{Error, Result};

pub const DEFAULT_DATABASE_HOST: &str = "localhost";
pub const DEFAULT_DATABASE_USER: &str = "admin";
pub const DEFAULT_DATABASE_NAME: &str = "mail";

/// The database driver the panel connects with.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum DatabaseKind {
    /// MySQL 3.23 and 4.0.
    #[default]
    MySql,
    /// MySQL 4.1 and later.
    MySqlI,
    /// PostgreSQL.
    PgSql,
}

impl FromStr for DatabaseKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "mysql" => Ok(Self::MySql),
            "mysqli" => Ok(Self::MySqlI),
            "pgsql" => Ok(Self::PgSql),
            unknown => Err(Error::ParseDatabaseKindError(unknown.to_owned())),
        }
    }
}

impl fmt::Display for DatabaseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MySql => write!(f, "mysql"),
            Self::MySqlI => write!(f, "mysqli"),
            Self::PgSql => write!(f, "pgsql"),
        }
    }
}

/// Stable identifiers application code uses to refer to tables,
/// decoupled from the physical names via [`TableNames`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LogicalTable {
    Admin,
    Alias,
    Domain,
    DomainAdmins,
    Log,
    Mailbox,
    Vacation,
    VacationNotification,
}

impl LogicalTable {
    pub const ALL: [Self; 8] = [
        Self::Admin,
        Self::Alias,
        Self::Domain,
        Self::DomainAdmins,
        Self::Log,
        Self::Mailbox,
        Self::Vacation,
        Self::VacationNotification,
    ];

    /// The legacy setting key of this logical table.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Alias => "alias",
            Self::Domain => "domain",
            Self::DomainAdmins => "domain_admins",
            Self::Log => "log",
            Self::Mailbox => "mailbox",
            Self::Vacation => "vacation",
            Self::VacationNotification => "vacation_notification",
        }
    }
}

/// Logical-to-physical table name mapping.
///
/// Defaults map every logical name to itself; deployments sharing a
/// database with other software remap individual tables.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TableNames {
    pub admin: String,
    pub alias: String,
    pub domain: String,
    pub domain_admins: String,
    pub log: String,
    pub mailbox: String,
    pub vacation: String,
    pub vacation_notification: String,
}

impl TableNames {
    /// Return the physical name of the given logical table, without
    /// the database prefix.
    pub fn name(&self, table: LogicalTable) -> &str {
        match table {
            LogicalTable::Admin => &self.admin,
            LogicalTable::Alias => &self.alias,
            LogicalTable::Domain => &self.domain,
            LogicalTable::DomainAdmins => &self.domain_admins,
            LogicalTable::Log => &self.log,
            LogicalTable::Mailbox => &self.mailbox,
            LogicalTable::Vacation => &self.vacation,
            LogicalTable::VacationNotification => &self.vacation_notification,
        }
    }
}

impl Default for TableNames {
    fn default() -> Self {
        Self {
            admin: "admin".into(),
            alias: "alias".into(),
            domain: "domain".into(),
            domain_admins: "domain_admins".into(),
            log: "log".into(),
            mailbox: "mailbox".into(),
            vacation: "vacation".into(),
            vacation_notification: "vacation_notification".into(),
        }
    }
}

/// The database connection configuration.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DatabaseConfig {
    /// The database driver.
    pub kind: DatabaseKind,

    /// The database server host name.
    pub host: String,

    /// The database server login.
    pub user: String,

    /// The database server password.
    pub password: String,

    /// The name of the database holding the panel schema.
    pub name: String,

    /// Prefix prepended to every physical table name.
    pub prefix: String,

    /// The logical-to-physical table name mapping.
    pub tables: TableNames,
}

impl DatabaseConfig {
    /// Return the physical name of the given logical table, with the
    /// configured prefix applied.
    pub fn table(&self, table: LogicalTable) -> String {
        format!("{}{}", self.prefix, self.tables.name(table))
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            kind: DatabaseKind::default(),
            host: DEFAULT_DATABASE_HOST.into(),
            user: DEFAULT_DATABASE_USER.into(),
            password: String::new(),
            name: DEFAULT_DATABASE_NAME.into(),
            prefix: String::new(),
            tables: TableNames::default(),
        }
    }
}
