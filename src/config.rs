use std::{
    env,
    net::{IpAddr, Ipv4Addr, SocketAddr},
    time::Duration,
};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_SESSION_TTL: Duration = Duration::from_secs(30 * 60);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub addr: SocketAddr,
    /// How long a session may sit idle before its records are dropped.
    pub session_ttl: Duration,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort(String),
    InvalidHost(String),
    InvalidSessionTtl(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidPort(value) => write!(f, "PORT must be a number from 0 to 65535, got {value:?}"),
            Self::InvalidHost(value) => write!(f, "HOST must be an IP address, got {value:?}"),
            Self::InvalidSessionTtl(value) => {
                write!(f, "SESSION_TTL must be a non-zero duration like \"30m\", got {value:?}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let ip = match get("HOST") {
            Some(value) => value
                .trim()
                .parse::<IpAddr>()
                .map_err(|_| ConfigError::InvalidHost(value))?,
            None => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
        };
        let port = match get("PORT") {
            Some(value) => value
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(value))?,
            None => DEFAULT_PORT,
        };
        let session_ttl = match get("SESSION_TTL") {
            Some(value) => humantime::parse_duration(value.trim())
                .ok()
                .filter(|ttl| !ttl.is_zero())
                .ok_or(ConfigError::InvalidSessionTtl(value))?,
            None => DEFAULT_SESSION_TTL,
        };

        Ok(Self {
            addr: SocketAddr::new(ip, port),
            session_ttl,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_to_all_interfaces_on_8080() {
        let config = config(&[]).unwrap();
        assert_eq!(config.addr, SocketAddr::from(([0, 0, 0, 0], 8080)));
        assert_eq!(config.session_ttl, Duration::from_secs(1800));
    }

    #[test]
    fn reads_host_port_and_ttl() {
        let config = config(&[("HOST", "127.0.0.1"), ("PORT", " 3000 "), ("SESSION_TTL", "2h 30m")]).unwrap();
        assert_eq!(config.addr, SocketAddr::from(([127, 0, 0, 1], 3000)));
        assert_eq!(config.session_ttl, Duration::from_secs(9000));
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(config(&[("PORT", "eighty")]), Err(ConfigError::InvalidPort(_))));
        assert!(matches!(config(&[("HOST", "localhost")]), Err(ConfigError::InvalidHost(_))));
        assert!(matches!(
            config(&[("SESSION_TTL", "soon")]),
            Err(ConfigError::InvalidSessionTtl(_))
        ));
        assert!(matches!(
            config(&[("SESSION_TTL", "0s")]),
            Err(ConfigError::InvalidSessionTtl(_))
        ));
    }
}
