use std::{fs, io::Write};

use settings::{
    alias::GotoLimit,
    database::{DatabaseKind, LogicalTable},
    password::PasswordScheme,
    Error, PanelConfig, Value,
};

#[test]
fn refuses_to_load_the_unmodified_template() {
    assert!(matches!(
        PanelConfig::from_toml_str(""),
        Err(Error::NotConfiguredError)
    ));

    assert!(matches!(
        PanelConfig::from_toml_str("configured = false"),
        Err(Error::NotConfiguredError)
    ));
}

#[test_log::test]
fn loads_once_the_gate_is_switched_on() {
    let config = PanelConfig::from_toml_str(
        r#"
        configured = true
        database_type = "pgsql"
        database_host = "db.internal"
        database_user = "panel"
        database_password = "secret"
        database_name = "mail"
        "#,
    )
    .unwrap();

    assert_eq!(config.database.kind, DatabaseKind::PgSql);
    assert_eq!(config.database.host, "db.internal");
    assert_eq!(config.database.user, "panel");
    assert_eq!(config.database.password, "secret");
    assert_eq!(config.database.name, "mail");
}

#[test_log::test]
fn loads_from_a_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "configured = true").unwrap();

    let config = PanelConfig::load(file.path()).unwrap();
    assert_eq!(config.smtp.host, "localhost");

    fs::remove_file(file.path()).unwrap();
    assert!(matches!(
        PanelConfig::load(file.path()),
        Err(Error::ReadConfigFileError(_, path)) if path == file.path()
    ));
}

#[test]
fn rejects_toggle_literals_outside_yes_and_no() {
    let err = PanelConfig::from_toml_str(
        r#"
        configured = true
        quota = "MAYBE"
        "#,
    )
    .unwrap_err();

    assert!(matches!(
        err,
        Error::ParseToggleError("quota", literal) if literal == "MAYBE"
    ));

    // lowercase is rejected too, not silently treated as NO
    assert!(PanelConfig::from_toml_str(
        r#"
        configured = true
        vacation = "yes"
        "#,
    )
    .is_err());
}

#[test]
fn rejects_unknown_enum_literals() {
    assert!(matches!(
        PanelConfig::from_toml_str(
            r#"
            configured = true
            database_type = "oracle"
            "#,
        ),
        Err(Error::ParseDatabaseKindError(kind)) if kind == "oracle"
    ));

    assert!(matches!(
        PanelConfig::from_toml_str(
            r#"
            configured = true
            encrypt = "rot13"
            "#,
        ),
        Err(Error::ParsePasswordSchemeError(scheme)) if scheme == "rot13"
    ));
}

#[test]
fn rejects_unknown_settings() {
    assert!(matches!(
        PanelConfig::from_toml_str(
            r#"
            configured = true
            databse_host = "typo.internal"
            "#,
        ),
        Err(Error::ParseConfigFileError(_))
    ));
}

#[test]
fn transport_default_must_be_a_declared_option() {
    let config = PanelConfig::from_toml_str(
        r#"
        configured = true
        transport = "YES"
        transport_options = ["virtual", "local", "relay"]
        transport_default = "virtual"
        "#,
    )
    .unwrap();

    assert_eq!(config.transport.options, ["virtual", "local", "relay"]);
    assert_eq!(config.transport.default, "virtual");

    assert!(matches!(
        PanelConfig::from_toml_str(
            r#"
            configured = true
            transport = "YES"
            transport_options = ["virtual", "local", "relay"]
            transport_default = "bogus"
            "#,
        ),
        Err(Error::InvalidTransportDefaultError(default, _)) if default == "bogus"
    ));
}

#[test]
fn subfolders_require_their_host() {
    assert!(matches!(
        PanelConfig::from_toml_str(
            r#"
            configured = true
            create_mailbox_subdirs = ["Spam"]
            "#,
        ),
        Err(Error::MissingDependentSettingError(
            "create_mailbox_subdirs",
            "create_mailbox_subdirs_host",
        ))
    ));

    let config = PanelConfig::from_toml_str(
        r#"
        configured = true
        create_mailbox_subdirs = ["Spam", "Drafts"]
        create_mailbox_subdirs_host = "imap.internal"
        create_mailbox_subdirs_hostport = 143
        create_mailbox_subdirs_hostoptions = ["notls"]
        "#,
    )
    .unwrap();

    let subdirs = config.hooks.mailbox_subdirs.unwrap();
    assert_eq!(subdirs.folders, ["Spam", "Drafts"]);
    assert_eq!(subdirs.host, "imap.internal");
    assert_eq!(subdirs.port, Some(143));
    assert_eq!(subdirs.options, ["notls"]);
}

#[test]
fn table_names_default_to_themselves_and_override_individually() {
    let config = PanelConfig::from_toml_str("configured = true").unwrap();

    for table in LogicalTable::ALL {
        assert_eq!(config.database.tables.name(table), table.key());
    }

    let config = PanelConfig::from_toml_str(
        r#"
        configured = true
        database_prefix = "panel_"

        [database_tables]
        alias = "forwardings"
        "#,
    )
    .unwrap();

    assert_eq!(config.database.tables.alias, "forwardings");
    assert_eq!(config.database.tables.mailbox, "mailbox");
    assert_eq!(config.table(LogicalTable::Alias), "panel_forwardings");
    assert_eq!(config.table(LogicalTable::Mailbox), "panel_mailbox");
}

#[test]
fn custom_indicators_pair_domains_with_colors_by_index() {
    let config = PanelConfig::from_toml_str(
        r#"
        configured = true
        show_status = "YES"
        show_custom_count = 2
        show_custom_domains = ["sub.domain.ext", "domain2.ext"]
        show_custom_colors = ["lightgreen", "lightblue"]
        "#,
    )
    .unwrap();

    let active = config.status.active_custom();
    assert_eq!(active.len(), 2);
    assert_eq!(active[0].domain, "sub.domain.ext");
    assert_eq!(active[0].color, "lightgreen");
    assert_eq!(active[1].domain, "domain2.ext");
    assert_eq!(active[1].color, "lightblue");

    assert!(matches!(
        PanelConfig::from_toml_str(
            r#"
            configured = true
            show_custom_domains = ["sub.domain.ext", "domain2.ext"]
            show_custom_colors = ["lightgreen"]
            "#,
        ),
        Err(Error::MismatchedCustomIndicatorsError(2, 1))
    ));

    assert!(matches!(
        PanelConfig::from_toml_str(
            r#"
            configured = true
            show_custom_count = 3
            show_custom_domains = ["sub.domain.ext"]
            show_custom_colors = ["lightgreen"]
            "#,
        ),
        Err(Error::InvalidCustomIndicatorCountError(3, 1))
    ));
}

#[test]
fn goto_limit_keeps_zero_and_bounded_apart() {
    let config = PanelConfig::from_toml_str("configured = true").unwrap();
    assert_eq!(config.alias.goto_limit, GotoLimit::Unlimited);

    let config = PanelConfig::from_toml_str(
        r#"
        configured = true
        alias_goto_limit = 5
        "#,
    )
    .unwrap();
    assert_eq!(config.alias.goto_limit, GotoLimit::Bounded(5));
    assert!(config.alias.goto_limit.truncates(6));

    assert!(matches!(
        PanelConfig::from_toml_str(
            r#"
            configured = true
            alias_goto_limit = -1
            "#,
        ),
        Err(Error::ParseIntegerSettingError("alias_goto_limit", -1))
    ));
}

#[test]
fn defaults_resolve_for_every_supplemental_setting() {
    let config = PanelConfig::from_toml_str("configured = true").unwrap();

    assert_eq!(config.password.scheme, PasswordScheme::Md5Crypt);
    assert_eq!(config.password.min_length, 5);
    assert!(!config.password.generate);
    assert!(!config.password.show);

    assert_eq!(config.ui.page_size, 10);
    assert_eq!(config.ui.language, "en");
    assert!(!config.ui.header.show);
    assert!(config.ui.footer.show);
    assert!(config.ui.show_backup_tab);
    assert!(config.ui.show_sendmail_tab);

    assert!(!config.mailbox.domain_path);
    assert!(config.mailbox.domain_in_mailbox);
    assert_eq!(config.mailbox.aliases, 10);
    assert_eq!(config.mailbox.mailboxes, 10);
    assert_eq!(config.mailbox.max_quota, 10);
    assert!(config.mailbox.check_domain_dns);

    assert!(config.vacation.control);
    assert!(config.vacation.control_admin);
    assert!(config.logging);

    let names: Vec<_> = config
        .alias
        .default_aliases
        .iter()
        .map(|alias| alias.name.as_str())
        .collect();
    assert_eq!(names, ["abuse", "hostmaster", "postmaster", "webmaster"]);

    assert!(config.find_mailbox_postcreation_hook().is_none());
    assert!(config.find_mailbox_postdeletion_hook().is_none());
    assert!(config.find_domain_postdeletion_hook().is_none());
}

#[test]
fn lookup_resolves_declared_settings_only() {
    let config = PanelConfig::from_toml_str(
        r#"
        configured = true
        quota = "YES"
        quota_multiplier = 1048576
        mailbox_postcreation_script = "/usr/local/bin/mailbox-postcreation.sh"
        "#,
    )
    .unwrap();

    assert_eq!(config.get("configured").unwrap(), Value::Bool(true));
    assert_eq!(config.get("quota").unwrap(), Value::Bool(true));
    assert_eq!(config.get("quota_multiplier").unwrap(), Value::Int(1048576));
    assert_eq!(
        config.get("database_type").unwrap(),
        Value::Str("mysql".into())
    );
    assert_eq!(
        config.get("transport_options").unwrap(),
        Value::List(vec!["virtual".into(), "local".into(), "relay".into()])
    );
    assert_eq!(
        config.get("mailbox_postcreation_script").unwrap(),
        Value::Str("/usr/local/bin/mailbox-postcreation.sh".into())
    );
    assert_eq!(
        config.get("mailbox_postdeletion_script").unwrap(),
        Value::Unset
    );

    let tables = match config.get("database_tables").unwrap() {
        Value::Map(tables) => tables,
        value => panic!("expected a map, got {value:?}"),
    };
    assert_eq!(tables.len(), 8);
    assert!(tables.iter().all(|(logical, physical)| logical == physical));

    assert!(matches!(
        config.get("no_such_setting"),
        Err(Error::FindSettingError(key)) if key == "no_such_setting"
    ));
}

#[test]
fn hooks_run_the_configured_command() {
    let config = PanelConfig::from_toml_str(
        r#"
        configured = true
        domain_postdeletion_script = "sudo -u courier /usr/local/bin/domain-postdeletion.sh"
        "#,
    )
    .unwrap();

    let hook = config.find_domain_postdeletion_hook().unwrap();
    assert_eq!(
        hook.to_string(),
        "sudo -u courier /usr/local/bin/domain-postdeletion.sh"
    );
}
