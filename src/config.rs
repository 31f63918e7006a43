use reqwest::Url;

use crate::error::ProbeError;

pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_PORT: u16 = 8081;

/// Where the dapp API lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeConfig {
    pub host: String,
    pub port: u16,
    /// Overrides `host` and `port` when set.
    pub base_url: Option<String>,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            base_url: None,
        }
    }
}

impl ProbeConfig {
    /// Reads `--host`, `--port` and `--base-url` from the argument list.
    /// The first element is the program name and is skipped; unknown
    /// arguments are ignored.
    pub fn from_args(args: &[String]) -> Result<Self, ProbeError> {
        let mut config = Self::default();

        let mut i = 1;
        while i < args.len() {
            let value = args.get(i + 1);
            match (args[i].as_str(), value) {
                ("--host", Some(host)) => {
                    config.host = host.clone();
                    i += 1;
                }
                ("--port", Some(port)) => {
                    config.port = port
                        .parse::<u16>()
                        .map_err(|_| ProbeError::InvalidPort(port.clone()))?;
                    i += 1;
                }
                ("--base-url", Some(url)) => {
                    config.base_url = Some(url.clone());
                    i += 1;
                }
                _ => {}
            }
            i += 1;
        }

        Ok(config)
    }

    pub fn base_url(&self) -> Result<Url, ProbeError> {
        let raw = match self.base_url.as_deref().map(str::trim) {
            Some(url) if !url.is_empty() => url.to_string(),
            _ => format!("http://{}:{}", self.host, self.port),
        };

        let url = Url::parse(&raw).map_err(|error| ProbeError::InvalidUrl(format!("{}: {}", raw, error)))?;

        match url.scheme() {
            "http" | "https" => {}
            other => return Err(ProbeError::InvalidUrl(format!("unsupported scheme {}", other))),
        }

        if url.host_str().is_none() {
            return Err(ProbeError::InvalidUrl(format!("{}: host is missing", raw)));
        }

        Ok(url)
    }
}
