use std::net::{IpAddr, Ipv4Addr, SocketAddr};

const DEFAULT_PORT: u16 = 3000;

/// Process configuration, read once at startup. `database_url` is
/// optional: without it the app serves the seeded in-memory store.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub log_level: String,
    pub database_url: Option<String>,
}

fn env_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .filter(|value| !value.trim().is_empty())
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            host: env_var("HOST")
                .and_then(|value| value.parse().ok())
                .unwrap_or(IpAddr::V4(Ipv4Addr::UNSPECIFIED)),
            port: env_var("PORT")
                .and_then(|value| value.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            log_level: env_var("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            database_url: env_var("DATABASE_URL"),
        }
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // One test mutates the process environment; keeping it all in a single
    // function avoids racing parallel tests over the same variables.
    #[test]
    fn reads_overrides_and_falls_back_to_defaults() {
        std::env::set_var("HOST", "127.0.0.1");
        std::env::set_var("PORT", "8123");
        std::env::set_var("DATABASE_URL", "postgres://localhost/slowka");

        let config = Config::from_env();
        assert_eq!(config.bind_addr().to_string(), "127.0.0.1:8123");
        assert_eq!(
            config.database_url.as_deref(),
            Some("postgres://localhost/slowka")
        );

        std::env::set_var("DATABASE_URL", "   ");
        std::env::remove_var("HOST");
        std::env::remove_var("PORT");

        let config = Config::from_env();
        assert_eq!(config.host, IpAddr::V4(Ipv4Addr::UNSPECIFIED));
        assert_eq!(config.port, DEFAULT_PORT);
        // Blank URLs count as unset.
        assert_eq!(config.database_url, None);

        std::env::remove_var("DATABASE_URL");
    }
}
