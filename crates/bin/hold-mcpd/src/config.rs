use clap::{Parser, builder::BoolishValueParser};
use std::error::Error;
use std::fmt;
use std::net::SocketAddr;
use std::path::PathBuf;

use hold_api::DEFAULT_API_ADDR;
use hold_mcp::server::DEFAULT_MCP_HTTP_ADDR;

const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Parser, Debug)]
#[command(name = "hold-mcpd", version, about = "Holding invoice MCP daemon.")]
#[allow(clippy::struct_excessive_bools)]
struct CliArgs {
    #[arg(long, env = "HOLD_SEED_PATH")]
    seed_path: Option<PathBuf>,

    #[arg(
        long = "stdio",
        env = "HOLD_ENABLE_STDIO",
        default_value_t = false,
        value_parser = BoolishValueParser::new()
    )]
    enable_stdio: bool,

    #[arg(
        long,
        env = "HOLD_MCP_SERVE",
        default_value_t = true,
        value_parser = BoolishValueParser::new()
    )]
    mcp_serve: bool,

    #[arg(long, env = "HOLD_MCP_HTTP_ADDR", default_value = DEFAULT_MCP_HTTP_ADDR)]
    mcp_http_addr: SocketAddr,

    #[arg(
        long,
        env = "HOLD_MCP_STATEFUL",
        default_value_t = true,
        value_parser = BoolishValueParser::new()
    )]
    mcp_stateful: bool,

    #[arg(
        long,
        env = "HOLD_API_SERVE",
        default_value_t = false,
        value_parser = BoolishValueParser::new()
    )]
    api_serve: bool,

    #[arg(long, env = "HOLD_API_ADDR", default_value = DEFAULT_API_ADDR)]
    api_addr: SocketAddr,

    #[arg(long, env = "HOLD_API_PUBLIC_URL")]
    api_public_url: Option<String>,

    #[arg(long, env = "HOLD_OPENAPI_PATH")]
    openapi_path: Option<PathBuf>,

    #[arg(
        long,
        env = "HOLD_OPENAPI_ONLY",
        default_value_t = false,
        value_parser = BoolishValueParser::new()
    )]
    openapi_only: bool,

    #[arg(long, env = "HOLD_LOG", default_value = DEFAULT_LOG_FILTER)]
    log_filter: String,
}

/// Runtime configuration loaded from CLI arguments and environment variables.
#[derive(Debug, Clone)]
#[allow(clippy::struct_excessive_bools)]
pub struct HoldConfig {
    pub seed_path: Option<PathBuf>,
    pub enable_stdio: bool,
    pub mcp_serve: bool,
    pub mcp_http_addr: SocketAddr,
    pub mcp_stateful: bool,
    pub api_serve: bool,
    pub api_addr: SocketAddr,
    pub api_public_url: Option<String>,
    pub openapi_path: Option<PathBuf>,
    pub openapi_only: bool,
    pub log_filter: String,
}

#[derive(Debug)]
pub enum ConfigError {
    MissingSetting(&'static str),
    InvalidSetting { name: &'static str, value: String },
    NothingToServe,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingSetting(name) => write!(f, "missing required setting: {name}"),
            Self::InvalidSetting { name, value } => {
                write!(f, "invalid {name} value: {value}")
            }
            Self::NothingToServe => write!(
                f,
                "no server enabled: set HOLD_ENABLE_STDIO, HOLD_MCP_SERVE, or HOLD_API_SERVE"
            ),
        }
    }
}

impl Error for ConfigError {}

impl HoldConfig {
    pub fn from_args() -> Result<Self, ConfigError> {
        let args = CliArgs::parse();
        Self::try_from(args)
    }
}

fn non_empty_path(
    path: Option<PathBuf>,
    name: &'static str,
) -> Result<Option<PathBuf>, ConfigError> {
    match path {
        Some(path) if path.as_os_str().is_empty() => Err(ConfigError::InvalidSetting {
            name,
            value: String::new(),
        }),
        other => Ok(other),
    }
}

impl TryFrom<CliArgs> for HoldConfig {
    type Error = ConfigError;

    fn try_from(args: CliArgs) -> Result<Self, Self::Error> {
        let seed_path = non_empty_path(args.seed_path, "HOLD_SEED_PATH")?;
        let openapi_path = non_empty_path(args.openapi_path, "HOLD_OPENAPI_PATH")?;
        let api_public_url = args
            .api_public_url
            .filter(|value| !value.trim().is_empty());

        if args.openapi_only && openapi_path.is_none() {
            return Err(ConfigError::MissingSetting("HOLD_OPENAPI_PATH"));
        }

        if !args.openapi_only && !args.enable_stdio && !args.mcp_serve && !args.api_serve {
            return Err(ConfigError::NothingToServe);
        }

        if args.log_filter.trim().is_empty() {
            return Err(ConfigError::InvalidSetting {
                name: "HOLD_LOG",
                value: args.log_filter,
            });
        }

        if args.mcp_serve && args.api_serve && args.mcp_http_addr == args.api_addr {
            return Err(ConfigError::InvalidSetting {
                name: "HOLD_API_ADDR",
                value: args.api_addr.to_string(),
            });
        }

        Ok(Self {
            seed_path,
            enable_stdio: args.enable_stdio,
            mcp_serve: args.mcp_serve,
            mcp_http_addr: args.mcp_http_addr,
            mcp_stateful: args.mcp_stateful,
            api_serve: args.api_serve,
            api_addr: args.api_addr,
            api_public_url,
            openapi_path,
            openapi_only: args.openapi_only,
            log_filter: args.log_filter,
        })
    }
}
