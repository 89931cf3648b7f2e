#![forbid(unsafe_code)]

//! Options for the orders router.
//!
//! Options are read from the `[package.metadata.orders-router]` section of a
//! TOML manifest and can be overridden with `ORDERS_ROUTER_*` environment
//! variables. Every field has a default, so [`RouterOptions::default`] is a
//! complete configuration on its own.

pub mod errors;

use crate::errors::RouterConfigError;
use config::{Config, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::{env::VarError, fmt::Display, fs, path::Path, str::FromStr, sync::Arc};
use typed_builder::TypedBuilder;

const SECTION: &str = "package.metadata.orders-router";

/// How the router treats a resolution that finishes after a newer navigation
/// has already started.
#[derive(
    Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum StaleNavigation {
    /// Drop the stale result; only the latest navigation may mount a view.
    #[default]
    Discard,
    /// Mount whatever finishes last, even if it has been superseded.
    Apply,
}

impl FromStr for StaleNavigation {
    type Err = RouterConfigError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        stale_from_str(input)
    }
}

impl Display for StaleNavigation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StaleNavigation::Discard => f.write_str("discard"),
            StaleNavigation::Apply => f.write_str("apply"),
        }
    }
}

/// Router options. Field names are kebab-case in the manifest.
#[derive(TypedBuilder, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct RouterOptions {
    /// Prefix that turns a pattern segment into a named parameter.
    #[builder(default = ':')]
    pub param_marker: char,
    /// Whether an unmatched path falls back to the route registered as `/`.
    #[builder(default = true)]
    pub root_fallback: bool,
    #[builder(default)]
    pub stale_navigation: StaleNavigation,
    /// The `id` of the element views are mounted into, in browser hosts.
    #[builder(setter(into), default = Arc::from("app"))]
    pub outlet_id: Arc<str>,
}

impl Default for RouterOptions {
    fn default() -> Self {
        RouterOptions::builder().build()
    }
}

impl RouterOptions {
    /// Builds options from the defaults, overridden by any `ORDERS_ROUTER_*`
    /// variables present in the environment.
    pub fn try_from_env() -> Result<Self, RouterConfigError> {
        Self::default().with_env_overrides()
    }

    fn with_env_overrides(mut self) -> Result<Self, RouterConfigError> {
        if let Some(marker) = env_wo_default("ORDERS_ROUTER_PARAM_MARKER")? {
            self.param_marker = marker_from_str(&marker)?;
        }
        if let Some(fallback) = env_wo_default("ORDERS_ROUTER_ROOT_FALLBACK")?
        {
            self.root_fallback = bool_from_str(&fallback)?;
        }
        if let Some(stale) =
            env_wo_default("ORDERS_ROUTER_STALE_NAVIGATION")?
        {
            self.stale_navigation = stale_from_str(&stale)?;
        }
        if let Some(outlet) = env_wo_default("ORDERS_ROUTER_OUTLET_ID")? {
            self.outlet_id = outlet.into();
        }
        Ok(self)
    }
}

/// Loads options from a manifest on disk if `path` is given, otherwise from
/// the environment alone.
pub fn get_configuration(
    path: Option<&str>,
) -> Result<RouterOptions, RouterConfigError> {
    match path {
        Some(path) => get_config_from_file(&path),
        None => RouterOptions::try_from_env(),
    }
}

/// Loads options from the manifest at `path`, then applies environment
/// overrides.
pub fn get_config_from_file<P: AsRef<Path>>(
    path: &P,
) -> Result<RouterOptions, RouterConfigError> {
    let text = fs::read_to_string(path)
        .map_err(|_| RouterConfigError::ConfigNotFound)?;
    get_config_from_str(&text)
}

/// Parses options from manifest text, then applies environment overrides.
pub fn get_config_from_str(
    text: &str,
) -> Result<RouterOptions, RouterConfigError> {
    let config = Config::builder()
        .add_source(File::from_str(text, FileFormat::Toml))
        .build()?;
    let options = match config.get::<RouterOptions>(SECTION) {
        Ok(options) => options,
        Err(config::ConfigError::NotFound(_)) => {
            return Err(RouterConfigError::ConfigSectionNotFound)
        }
        Err(e) => return Err(e.into()),
    };
    options.with_env_overrides()
}

pub(crate) fn env_wo_default(
    key: &str,
) -> Result<Option<String>, RouterConfigError> {
    match std::env::var(key) {
        Ok(val) => Ok(Some(val)),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(_)) => {
            Err(RouterConfigError::EnvError(key.to_string()))
        }
    }
}

pub(crate) fn bool_from_str(input: &str) -> Result<bool, RouterConfigError> {
    let sanitized = input.to_lowercase();
    match sanitized.as_ref() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(RouterConfigError::ConfigError(format!(
            "{input} is not a supported boolean. Use 'true' or 'false'."
        ))),
    }
}

pub(crate) fn stale_from_str(
    input: &str,
) -> Result<StaleNavigation, RouterConfigError> {
    let sanitized = input.to_lowercase();
    match sanitized.as_ref() {
        "discard" => Ok(StaleNavigation::Discard),
        "apply" => Ok(StaleNavigation::Apply),
        _ => Err(RouterConfigError::ConfigError(format!(
            "{input} is not a supported stale navigation policy. Use \
             'discard' or 'apply'."
        ))),
    }
}

pub(crate) fn marker_from_str(input: &str) -> Result<char, RouterConfigError> {
    let mut chars = input.chars();
    match (chars.next(), chars.next()) {
        (Some(marker), None) if marker != '/' => Ok(marker),
        _ => Err(RouterConfigError::ConfigError(format!(
            "{input:?} is not a valid parameter marker. Use a single \
             character other than '/'."
        ))),
    }
}
