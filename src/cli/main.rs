use std::borrow::Cow;

use argument::Cli;
use clap::Parser;
#[cfg(feature = "color")]
use colored::Colorize;
#[cfg(feature = "log")]
use proxycfg::initialize_logging;
use proxycfg::{resolve_from_env, Config, Proxy, TargetScheme};

mod argument;

fn main() {
    if let Err(e) = run_application() {
        eprintln!("Error: {:?}", e);
        std::process::exit(1);
    }
}

#[cfg(feature = "color")]
fn render_default(proxy: &Proxy) -> String {
    let text = proxy.to_string();
    if proxy.is_direct() {
        text.yellow().to_string()
    } else {
        text.green().to_string()
    }
}

#[cfg(not(feature = "color"))]
fn render_default(proxy: &Proxy) -> String {
    proxy.to_string()
}

/// Applies the credential overrides and renders the proxy in `format`.
fn render_proxy(
    mut proxy: Cow<'static, Proxy>,
    user: Option<String>,
    password: Option<String>,
    format: &str,
) -> anyhow::Result<String> {
    if user.is_some() {
        if proxy.is_direct() {
            anyhow::bail!("credentials cannot be used with a DIRECT connection");
        }
        let proxy = proxy.to_mut();
        proxy.set_user(user)?;
        proxy.set_password(password)?;
    }

    let output = match format {
        "text" => proxy.as_text().into_owned(),
        "json" => proxy.as_json(),
        "url" => proxy.as_url().unwrap_or_default(),
        _ => render_default(&proxy),
    };
    Ok(output)
}

fn run_application() -> anyhow::Result<()> {
    let options = Cli::parse();

    #[cfg(feature = "log")]
    {
        let log_level = match options.log_level.as_str() {
            "debug" => log::LevelFilter::Debug,
            "info" => log::LevelFilter::Info,
            "warn" => log::LevelFilter::Warn,
            "error" => log::LevelFilter::Error,
            "trace" => log::LevelFilter::Trace,
            _ => log::LevelFilter::Off,
        };
        initialize_logging(log_level)?;
    }

    let config = Config {
        explicit: options.proxy,
        use_env: !options.no_env,
        target_scheme: match options.scheme.as_str() {
            "http" => TargetScheme::Http,
            _ => TargetScheme::Https,
        },
    };
    let proxy = resolve_from_env(&config)?;
    let output = render_proxy(proxy, options.user, options.password, &options.format)?;
    println!("{}", output);
    Ok(())
}
