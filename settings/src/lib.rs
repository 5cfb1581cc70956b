//! Rust library to manage the configuration of a mail account
//! administration panel.
//!
//! The panel itself (account creation, password handling, rendering)
//! lives elsewhere; this library owns the settings those components
//! read. It loads a static TOML source once at startup, decodes the
//! legacy flat key namespace into a typed tree and refuses to hand out
//! a configuration that has not been explicitly switched on for
//! production.
//!
//! The entry point is [`PanelConfig`]: build it with
//! [`PanelConfig::load`] or [`PanelConfig::from_toml_str`], then share
//! it by reference. There is no way to mutate a loaded configuration.

pub mod alias;
pub mod config;
pub mod database;
mod error;
pub mod hooks;
pub mod lookup;
pub mod mailbox;
pub mod password;
pub mod quota;
pub mod raw;
pub mod smtp;
pub mod status;
pub mod transport;
pub mod ui;
pub mod vacation;

#[doc(inline)]
pub use self::{
    config::PanelConfig,
    error::{Error, Result},
    lookup::Value,
    raw::RawConfig,
};
