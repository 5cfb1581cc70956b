//! Module dedicated to password policy configuration.

use std::{fmt, str::FromStr};

use crate::{Error, Result};

pub const DEFAULT_MIN_PASSWORD_LENGTH: usize = 5;

/// The scheme account passwords are stored with.
///
/// The hashing itself happens in the account management layer; this
/// setting only selects which scheme it applies.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum PasswordScheme {
    /// The panel's internal MD5 crypt.
    #[default]
    Md5Crypt,
    /// Whatever the host system uses as its crypt default.
    System,
    /// No hashing at all.
    Cleartext,
}

impl FromStr for PasswordScheme {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "md5crypt" => Ok(Self::Md5Crypt),
            "system" => Ok(Self::System),
            "cleartext" => Ok(Self::Cleartext),
            unknown => Err(Error::ParsePasswordSchemeError(unknown.to_owned())),
        }
    }
}

impl fmt::Display for PasswordScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Md5Crypt => write!(f, "md5crypt"),
            Self::System => write!(f, "system"),
            Self::Cleartext => write!(f, "cleartext"),
        }
    }
}

/// The password policy configuration.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PasswordConfig {
    /// The storage scheme for account passwords.
    pub scheme: PasswordScheme,

    /// Minimum length accepted when users set a password.
    pub min_length: usize,

    /// Generate a random password for new mailboxes and admins and
    /// display it, instead of asking for one.
    pub generate: bool,

    /// Always show the password after adding a mailbox or admin.
    pub show: bool,
}

impl Default for PasswordConfig {
    fn default() -> Self {
        Self {
            scheme: PasswordScheme::default(),
            min_length: DEFAULT_MIN_PASSWORD_LENGTH,
            generate: false,
            show: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::PasswordScheme;
    use crate::Error;

    #[test]
    fn parse_password_scheme() {
        assert_eq!(
            "md5crypt".parse::<PasswordScheme>().unwrap(),
            PasswordScheme::Md5Crypt
        );
        assert_eq!(
            "system".parse::<PasswordScheme>().unwrap(),
            PasswordScheme::System
        );
        assert_eq!(
            "cleartext".parse::<PasswordScheme>().unwrap(),
            PasswordScheme::Cleartext
        );
        assert!(matches!(
            "plain".parse::<PasswordScheme>(),
            Err(Error::ParsePasswordSchemeError(scheme)) if scheme == "plain"
        ));
    }

    #[test]
    fn password_scheme_round_trips() {
        for scheme in [
            PasswordScheme::Md5Crypt,
            PasswordScheme::System,
            PasswordScheme::Cleartext,
        ] {
            assert_eq!(scheme.to_string().parse::<PasswordScheme>().unwrap(), scheme);
        }
    }
}
