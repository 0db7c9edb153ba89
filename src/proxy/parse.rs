use std::{borrow::Cow, str::FromStr};

use url::{ParseError, Url};

use super::{
    error::{ProxyError, Result},
    models::{Proxy, ProxyKind},
};

impl FromStr for ProxyKind {
    type Err = ProxyError;

    fn from_str(kind: &str) -> Result<Self> {
        match kind.to_ascii_lowercase().as_str() {
            "direct" => Ok(Self::Direct),
            "http" | "https" => Ok(Self::Http),
            "socks" | "socks4" | "socks4a" | "socks5" | "socks5h" => Ok(Self::Socks),
            _ => Err(ProxyError::UnknownKind(kind.to_string())),
        }
    }
}

/// Percent-decodes one userinfo part; an empty part counts as unset.
fn decode_userinfo(part: &str) -> Result<Option<String>> {
    if part.is_empty() {
        return Ok(None);
    }
    urlencoding::decode(part)
        .map(|decoded| Some(decoded.into_owned()))
        .map_err(|_| ProxyError::InvalidArgument("proxy credentials are not valid utf-8".into()))
}

impl Proxy {
    /// Parses a proxy from its textual form.
    ///
    /// Accepts `DIRECT` (or an empty string), `<scheme>://[user[:password]@]host[:port]`
    /// and a bare `host:port`, which is taken as an HTTP proxy. Credentials are
    /// percent-decoded. Without an explicit port, `http` and `https` urls get
    /// their default port.
    ///
    /// # Returns
    ///
    /// The shared `DIRECT` proxy borrowed, or a newly built proxy.
    pub fn parse(input: &str) -> Result<Cow<'static, Proxy>> {
        let input = input.trim();
        if input.is_empty() || input.eq_ignore_ascii_case("direct") {
            return Ok(Cow::Borrowed(Proxy::no_proxy()));
        }

        let parsed = if input.contains("://") {
            Url::parse(input)
        } else {
            Url::parse(&format!("http://{}", input))
        };
        let url = parsed.map_err(|e| match e {
            ParseError::InvalidPort => ProxyError::InvalidPort(input.to_string()),
            ParseError::EmptyHost => ProxyError::MissingHost(input.to_string()),
            other => ProxyError::InvalidUrl(other),
        })?;

        let kind = url.scheme().parse::<ProxyKind>()?;
        let host = url
            .host_str()
            .filter(|host| !host.is_empty())
            .ok_or_else(|| ProxyError::MissingHost(input.to_string()))?;
        let user = decode_userinfo(url.username())?;
        let password = url.password().map(decode_userinfo).transpose()?.flatten();

        Proxy::new(kind, Some(host), url.port_or_known_default(), user, password)
            .map(Cow::Owned)
    }
}

impl FromStr for Proxy {
    type Err = ProxyError;

    fn from_str(input: &str) -> Result<Self> {
        Proxy::parse(input).map(Cow::into_owned)
    }
}
