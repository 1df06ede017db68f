use std::collections::HashMap;
use std::env;
use std::str::FromStr;

use tracing::Level;

pub struct AppConfigurationBuilder {
    pub host: Option<String>,
    pub port: Option<String>,
    pub log_level: Option<Level>,
}

impl AppConfigurationBuilder {
    pub fn new() -> Self {
        AppConfigurationBuilder {
            host: None,
            port: None,
            log_level: None,
        }
    }

    pub fn host(&mut self, value: String) -> &mut Self {
        self.host = Some(value);
        self
    }

    pub fn port(&mut self, value: String) -> &mut Self {
        self.port = Some(value);
        self
    }

    pub fn log_level(&mut self, value: Level) -> &mut Self {
        self.log_level = Some(value);
        self
    }

    pub fn load_env(&mut self) -> &mut Self {
        self.host = env::var(EnvNames::HOST).ok();
        self.port = env::var(EnvNames::PORT).ok();
        self.log_level = env::var(EnvNames::LOG_LEVEL)
            .map(|v| Level::from_str(v.as_str()).unwrap())
            .ok();

        self
    }

    pub fn build(&self) -> AppConfiguration {
        AppConfiguration::new(
            self.host.clone().unwrap_or("0.0.0.0".to_string()),
            self.port.clone().unwrap_or("5000".to_string()),
            self.log_level.unwrap_or(Level::INFO),
        )
    }
}

impl Default for AppConfigurationBuilder {
    fn default() -> Self {
        AppConfigurationBuilder::new()
    }
}

#[derive(Debug, Clone)]
pub struct AppConfiguration {
    host: String,
    port: String,
    log_level: Level,
}

impl AppConfiguration {
    pub fn new(host: String, port: String, log_level: Level) -> Self {
        AppConfiguration {
            host,
            port,
            log_level,
        }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> &str {
        &self.port
    }

    pub fn log_level(&self) -> Level {
        self.log_level
    }

    pub fn envs(&self) -> HashMap<String, String> {
        let mut envs = HashMap::new();

        envs.insert(EnvNames::HOST.to_owned(), self.host.to_owned());
        envs.insert(EnvNames::PORT.to_owned(), self.port.to_owned());
        envs.insert(EnvNames::LOG_LEVEL.to_owned(), self.log_level.to_string());

        envs
    }
}

pub struct EnvNames;

impl EnvNames {
    pub const HOST: &'static str = "HOST";
    pub const PORT: &'static str = "PORT";
    pub const LOG_LEVEL: &'static str = "LOG_LEVEL";
}
