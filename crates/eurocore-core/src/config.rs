use std::{env, fmt, fs, path::Path, time::Duration};

use crate::{errors::Error, Result};

/// Per-request timeout applied to every HTTP call.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Age after which the bearer token is considered stale and re-fetched.
///
/// The server's real expiry is unknown to the client; one hour is a
/// conservative proxy.
pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_secs(60 * 60);

/// Connection settings for a eurocore client.
#[derive(Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub username: String,
    pub password: String,
    pub timeout: Duration,
    pub refresh_interval: Duration,
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("timeout", &self.timeout)
            .field("refresh_interval", &self.refresh_interval)
            .finish()
    }
}

impl ClientConfig {
    pub fn new(
        base_url: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            username: username.into(),
            password: password.into(),
            timeout: DEFAULT_TIMEOUT,
            refresh_interval: DEFAULT_REFRESH_INTERVAL,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_refresh_interval(mut self, interval: Duration) -> Self {
        self.refresh_interval = interval;
        self
    }

    /// Load settings from the environment, reading `.env` first if present.
    ///
    /// Only the command-line binary uses this; library callers build the
    /// config themselves.
    pub fn load() -> Result<Self> {
        load_dotenv_if_present(Path::new(".env"));
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let required = |key: &str| {
            lookup(key)
                .and_then(non_empty)
                .ok_or_else(|| Error::Config(format!("{key} environment variable is required")))
        };

        let base_url = required("EUROCORE_URL")?;
        let username = required("EUROCORE_USERNAME")?;
        let password = required("EUROCORE_PASSWORD")?;

        let timeout = match lookup("EUROCORE_TIMEOUT_MS") {
            Some(v) => Duration::from_millis(parse_u64("EUROCORE_TIMEOUT_MS", &v)?),
            None => DEFAULT_TIMEOUT,
        };
        let refresh_interval = match lookup("EUROCORE_REFRESH_SECS") {
            Some(v) => Duration::from_secs(parse_u64("EUROCORE_REFRESH_SECS", &v)?),
            None => DEFAULT_REFRESH_INTERVAL,
        };

        Ok(Self {
            base_url,
            username,
            password,
            timeout,
            refresh_interval,
        })
    }
}

fn parse_u64(key: &str, raw: &str) -> Result<u64> {
    raw.trim()
        .parse::<u64>()
        .map_err(|e| Error::Config(format!("{key} must be a non-negative integer: {e}")))
}

fn load_dotenv_if_present(path: &Path) {
    let Ok(contents) = fs::read_to_string(path) else {
        return;
    };

    for (k, v) in parse_dotenv(&contents) {
        if env::var_os(&k).is_some() {
            continue; // do not override existing env
        }
        env::set_var(k, v);
    }
    tracing::debug!(path = %path.display(), "loaded dotenv file");
}

fn parse_dotenv(contents: &str) -> Vec<(String, String)> {
    let mut out = Vec::new();
    for raw in contents.lines() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((k, v)) = line.split_once('=') else {
            continue;
        };

        let key = k.trim();
        if key.is_empty() {
            continue;
        }

        let mut val = v.trim().to_string();
        // Strip optional surrounding quotes.
        if val.len() >= 2
            && ((val.starts_with('"') && val.ends_with('"'))
                || (val.starts_with('\'') && val.ends_with('\'')))
        {
            val = val[1..val.len() - 1].to_string();
        }

        out.push((key.to_string(), val));
    }
    out
}

fn non_empty(s: String) -> Option<String> {
    if s.trim().is_empty() {
        None
    } else {
        Some(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn new_uses_defaults() {
        let cfg = ClientConfig::new("http://x", "u", "p");
        assert_eq!(cfg.timeout, DEFAULT_TIMEOUT);
        assert_eq!(cfg.refresh_interval, Duration::from_secs(3600));
    }

    #[test]
    fn loads_required_and_optional_values() {
        let cfg = ClientConfig::from_lookup(lookup(&[
            ("EUROCORE_URL", "https://api.example/"),
            ("EUROCORE_USERNAME", "admin"),
            ("EUROCORE_PASSWORD", "hunter2"),
            ("EUROCORE_TIMEOUT_MS", "2500"),
            ("EUROCORE_REFRESH_SECS", " 600 "),
        ]))
        .unwrap();
        assert_eq!(cfg.base_url, "https://api.example/");
        assert_eq!(cfg.username, "admin");
        assert_eq!(cfg.password, "hunter2");
        assert_eq!(cfg.timeout, Duration::from_millis(2500));
        assert_eq!(cfg.refresh_interval, Duration::from_secs(600));
    }

    #[test]
    fn missing_password_is_config_error() {
        let err = ClientConfig::from_lookup(lookup(&[
            ("EUROCORE_URL", "https://api.example"),
            ("EUROCORE_USERNAME", "admin"),
            ("EUROCORE_PASSWORD", "  "),
        ]))
        .unwrap_err();
        assert!(matches!(err, Error::Config(ref m) if m.contains("EUROCORE_PASSWORD")));
    }

    #[test]
    fn bad_timeout_is_config_error() {
        let err = ClientConfig::from_lookup(lookup(&[
            ("EUROCORE_URL", "https://api.example"),
            ("EUROCORE_USERNAME", "admin"),
            ("EUROCORE_PASSWORD", "pw"),
            ("EUROCORE_TIMEOUT_MS", "soon"),
        ]))
        .unwrap_err();
        assert!(matches!(err, Error::Config(ref m) if m.contains("EUROCORE_TIMEOUT_MS")));
    }

    #[test]
    fn debug_redacts_password() {
        let cfg = ClientConfig::new("http://x", "u", "secret-pw");
        let dbg = format!("{cfg:?}");
        assert!(!dbg.contains("secret-pw"));
        assert!(dbg.contains("<redacted>"));
    }

    #[test]
    fn dotenv_parsing_skips_comments_and_strips_quotes() {
        let parsed = parse_dotenv(
            "# comment\n\nEUROCORE_URL=\"https://x\"\nEUROCORE_USERNAME = 'bob'\nnot a pair\n=novalue\n",
        );
        assert_eq!(
            parsed,
            vec![
                ("EUROCORE_URL".to_string(), "https://x".to_string()),
                ("EUROCORE_USERNAME".to_string(), "bob".to_string()),
            ]
        );
    }
}
