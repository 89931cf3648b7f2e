use orders_router_config::{
    errors::RouterConfigError, get_config_from_file, get_config_from_str,
    get_configuration, RouterOptions, StaleNavigation,
};
use std::{fs::File, io::Write};
use tempfile::NamedTempFile;

const ENV_VARS: [(&str, Option<&str>); 4] = [
    ("ORDERS_ROUTER_PARAM_MARKER", None),
    ("ORDERS_ROUTER_ROOT_FALLBACK", None),
    ("ORDERS_ROUTER_STALE_NAVIGATION", None),
    ("ORDERS_ROUTER_OUTLET_ID", None),
];

const CARGO_TOML_CONTENT_OK: &str = r#"
[package]
name = "orders-front"

[package.metadata.orders-router]
param-marker = "$"
root-fallback = false
stale-navigation = "apply"
outlet-id = "outlet"
"#;

const CARGO_TOML_CONTENT_PARTIAL: &str = r#"
[package.metadata.orders-router]
outlet-id = "outlet"
"#;

const CARGO_TOML_CONTENT_ERR: &str = r#"
[package.metadata.orders-router]
- invalid toml -
"#;

const CARGO_TOML_CONTENT_NO_SECTION: &str = r#"
[package]
name = "orders-front"
"#;

fn write_tmp(content: &str) -> NamedTempFile {
    let tmp = NamedTempFile::new().unwrap();
    {
        let mut output = File::create(&tmp).unwrap();
        write!(output, "{content}").unwrap();
    }
    tmp
}

#[test]
fn get_config_from_str_ok() {
    let options = temp_env::with_vars(ENV_VARS, || {
        get_config_from_str(CARGO_TOML_CONTENT_OK).unwrap()
    });

    assert_eq!(options.param_marker, '$');
    assert!(!options.root_fallback);
    assert_eq!(options.stale_navigation, StaleNavigation::Apply);
    assert_eq!(options.outlet_id.as_ref(), "outlet");
}

#[test]
fn missing_keys_take_defaults() {
    let options = temp_env::with_vars(ENV_VARS, || {
        get_config_from_str(CARGO_TOML_CONTENT_PARTIAL).unwrap()
    });

    assert_eq!(
        options,
        RouterOptions::builder().outlet_id("outlet").build()
    );
}

#[test]
fn env_overrides_file() {
    let options = temp_env::with_vars(
        [
            ("ORDERS_ROUTER_PARAM_MARKER", None),
            ("ORDERS_ROUTER_ROOT_FALLBACK", Some("true")),
            ("ORDERS_ROUTER_STALE_NAVIGATION", None),
            ("ORDERS_ROUTER_OUTLET_ID", Some("from-env")),
        ],
        || get_config_from_str(CARGO_TOML_CONTENT_OK).unwrap(),
    );

    assert_eq!(options.param_marker, '$');
    assert!(options.root_fallback);
    assert_eq!(options.stale_navigation, StaleNavigation::Apply);
    assert_eq!(options.outlet_id.as_ref(), "from-env");
}

#[test]
fn get_config_from_file_ok() {
    let tmp = write_tmp(CARGO_TOML_CONTENT_OK);
    let options =
        temp_env::with_vars(ENV_VARS, || get_config_from_file(&tmp).unwrap());

    assert_eq!(options.stale_navigation, StaleNavigation::Apply);
    assert_eq!(options.outlet_id.as_ref(), "outlet");
}

#[test]
fn get_configuration_from_path() {
    let tmp = write_tmp(CARGO_TOML_CONTENT_OK);
    let path = tmp.path().to_string_lossy().to_string();
    let options = temp_env::with_vars(ENV_VARS, || {
        get_configuration(Some(&path)).unwrap()
    });

    assert_eq!(options.param_marker, '$');
}

#[test]
fn get_configuration_without_path_reads_env() {
    let options = temp_env::with_vars(
        [
            ("ORDERS_ROUTER_PARAM_MARKER", None),
            ("ORDERS_ROUTER_ROOT_FALLBACK", None),
            ("ORDERS_ROUTER_STALE_NAVIGATION", Some("apply")),
            ("ORDERS_ROUTER_OUTLET_ID", None),
        ],
        || get_configuration(None).unwrap(),
    );

    assert_eq!(
        options,
        RouterOptions::builder()
            .stale_navigation(StaleNavigation::Apply)
            .build()
    );
}

#[test]
fn get_config_from_invalid_file() {
    let tmp = write_tmp(CARGO_TOML_CONTENT_ERR);
    assert!(matches!(
        get_config_from_file(&tmp),
        Err(RouterConfigError::ConfigError(_))
    ));
}

#[test]
fn get_config_without_section() {
    assert_eq!(
        get_config_from_str(CARGO_TOML_CONTENT_NO_SECTION),
        Err(RouterConfigError::ConfigSectionNotFound)
    );
    assert_eq!(
        get_config_from_str(""),
        Err(RouterConfigError::ConfigSectionNotFound)
    );
}

#[test]
fn get_config_from_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Missing.toml");
    assert_eq!(
        get_config_from_file(&path),
        Err(RouterConfigError::ConfigNotFound)
    );
}
