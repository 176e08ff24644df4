use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_LOG_FILTER: &str = "info";

/// 环境变量前缀，如 RECEIPT_PROCESSOR_SERVER__PORT=9000
const ENV_PREFIX: &str = "RECEIPT_PROCESSOR";

/// 可选配置文件 (receipt-processor.toml / .json / .yaml)
const CONFIG_FILE: &str = "receipt-processor";

/// 应用配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub log: LogConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// RUST_LOG 未设置时使用的过滤规则
    pub filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: DEFAULT_HOST.to_string(),
                port: DEFAULT_PORT,
            },
            log: LogConfig {
                filter: DEFAULT_LOG_FILTER.to_string(),
            },
        }
    }
}

impl AppConfig {
    /// 加载配置: 默认值 -> 配置文件 -> 环境变量
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with(Self::environment())
    }

    fn environment() -> Environment {
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
    }

    fn load_with(env: Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("server.host", DEFAULT_HOST)?
            .set_default("server.port", i64::from(DEFAULT_PORT))?
            .set_default("log.filter", DEFAULT_LOG_FILTER)?
            .add_source(File::with_name(CONFIG_FILE).required(false))
            .add_source(env)
            .build()?
            .try_deserialize()
    }

    /// 监听地址
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
