use std::borrow::Cow;

use crate::proxy::{error::Result, Proxy};

/// Scheme of the requests the resolved proxy will carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TargetScheme {
    #[default]
    Https,
    Http,
}

impl TargetScheme {
    /// Environment variables consulted for this scheme, in order.
    fn env_vars(&self) -> [&'static str; 4] {
        match self {
            Self::Https => ["HTTPS_PROXY", "https_proxy", "ALL_PROXY", "all_proxy"],
            Self::Http => ["HTTP_PROXY", "http_proxy", "ALL_PROXY", "all_proxy"],
        }
    }
}

/// Options for resolving the proxy to use.
#[derive(Debug, Clone)]
pub struct Config {
    /// Proxy given by the caller; takes precedence over the environment (optional).
    pub explicit: Option<String>,
    /// Look at the `*_PROXY` environment variables when no explicit proxy is given.
    pub use_env: bool,
    /// Selects which `*_PROXY` variable applies.
    pub target_scheme: TargetScheme,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            explicit: None,
            use_env: true,
            target_scheme: TargetScheme::default(),
        }
    }
}

/// Resolves the proxy described by `config`.
///
/// # Arguments
///
/// * `config`: The resolution options.
/// * `lookup`: Reads an environment variable by name.
///
/// # Returns
///
/// The parsed proxy, or the shared `DIRECT` proxy when nothing is configured.
pub fn resolve<F>(config: &Config, lookup: F) -> Result<Cow<'static, Proxy>>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(explicit) = &config.explicit {
        #[cfg(feature = "log")]
        log::debug!("using explicit proxy");
        return Proxy::parse(explicit);
    }

    if config.use_env {
        for name in config.target_scheme.env_vars() {
            if let Some(value) = lookup(name).filter(|v| !v.trim().is_empty()) {
                #[cfg(feature = "log")]
                log::debug!("using proxy from {}", name);
                return Proxy::parse(&value);
            }
        }
    }

    #[cfg(feature = "log")]
    log::debug!("no proxy configured, connecting directly");
    Ok(Cow::Borrowed(Proxy::no_proxy()))
}

/// Resolves the proxy using the process environment.
pub fn resolve_from_env(config: &Config) -> Result<Cow<'static, Proxy>> {
    resolve(config, |name| std::env::var(name).ok())
}
