//! Module dedicated to presentation settings.

pub const DEFAULT_LANGUAGE: &str = "en";
pub const DEFAULT_PAGE_SIZE: usize = 10;

pub const DEFAULT_HEADER_TEXT: &str = ":: Mail Admin ::";
pub const DEFAULT_FOOTER_TEXT: &str = "Return to change-this-to-your.domain.tld";
pub const DEFAULT_FOOTER_LINK: &str = "http://change-this-to-your.domain.tld";
pub const DEFAULT_USER_FOOTER_LINK: &str = "http://change-this-to-your.domain.tld/main";

/// The header banner configuration.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct HeaderConfig {
    pub show: bool,
    pub text: String,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            show: false,
            text: DEFAULT_HEADER_TEXT.into(),
        }
    }
}

/// The footer configuration, shown on every page.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FooterConfig {
    pub show: bool,
    pub text: String,
    pub link: String,
}

impl Default for FooterConfig {
    fn default() -> Self {
        Self {
            show: true,
            text: DEFAULT_FOOTER_TEXT.into(),
            link: DEFAULT_FOOTER_LINK.into(),
        }
    }
}

/// The presentation configuration of the panel.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UiConfig {
    /// Complete URL of the panel installation.
    pub admin_url: String,

    /// Interface language code.
    pub language: String,

    /// Entries per listing page.
    pub page_size: usize,

    pub header: HeaderConfig,
    pub footer: FooterConfig,

    /// Link shown under the Main menu for logged-in users.
    pub user_footer_link: String,

    /// Show the backup tab.
    pub show_backup_tab: bool,

    /// Show the send-mail tab.
    pub show_sendmail_tab: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            admin_url: String::new(),
            language: DEFAULT_LANGUAGE.into(),
            page_size: DEFAULT_PAGE_SIZE,
            header: HeaderConfig::default(),
            footer: FooterConfig::default(),
            user_footer_link: DEFAULT_USER_FOOTER_LINK.into(),
            show_backup_tab: true,
            show_sendmail_tab: true,
        }
    }
}
