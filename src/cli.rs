// src/cli.rs
use crate::config::DEFAULT_CONFIG_PATH;
use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "uptime-checker", version, about = "Checks servers once and pushes a notification for those that are down")]
pub struct Cli {
    /// Config filename
    #[arg(short = 'c', long = "config", default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Log filter, overrides RUST_LOG
    #[arg(long = "log-level")]
    pub log_level: Option<String>,
}

impl Cli {
    pub fn parse_from_env() -> Self {
        Self::parse_args(std::env::args_os())
    }

    pub fn parse_args<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self::parse_from(normalize_args(args))
    }
}

/// Rewrites single-dash long flags (`-config x`, `-config=x`) to their `--` form.
fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    const LONG_FLAGS: [&str; 2] = ["config", "log-level"];

    let mut normalized = Vec::new();
    let mut takes_value = false;

    for arg in args.into_iter().map(Into::into) {
        if std::mem::take(&mut takes_value) {
            normalized.push(arg);
            continue;
        }

        let flag = arg
            .to_str()
            .and_then(|text| text.strip_prefix('-'))
            .filter(|rest| !rest.starts_with('-'))
            .map(|rest| rest.split_once('=').map_or((rest, false), |(name, _)| (name, true)))
            .filter(|(name, _)| LONG_FLAGS.contains(name));

        match flag {
            Some((_, inline_value)) => {
                takes_value = !inline_value;
                normalized.push(OsString::from(format!("-{}", arg.to_string_lossy())));
            }
            None => {
                takes_value = matches!(arg.to_str(), Some("-c" | "--config" | "--log-level"));
                normalized.push(arg);
            }
        }
    }

    normalized
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_path() {
        let cli = Cli::parse_args(["uptime-checker"]);
        assert_eq!(cli.config, PathBuf::from("conf.yaml"));
    }

    #[test]
    fn test_single_dash_config_flag() {
        let cli = Cli::parse_args(["uptime-checker", "-config", "servers.yaml"]);
        assert_eq!(cli.config, PathBuf::from("servers.yaml"));

        let cli = Cli::parse_args(["uptime-checker", "-config=other.yaml"]);
        assert_eq!(cli.config, PathBuf::from("other.yaml"));
    }

    #[test]
    fn test_double_dash_and_short_flags() {
        let cli = Cli::parse_args(["uptime-checker", "--config", "a.yaml"]);
        assert_eq!(cli.config, PathBuf::from("a.yaml"));

        let cli = Cli::parse_args(["uptime-checker", "-c", "b.yaml", "--log-level", "debug"]);
        assert_eq!(cli.config, PathBuf::from("b.yaml"));
        assert_eq!(cli.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_config_value_is_not_rewritten() {
        let cli = Cli::parse_args(["uptime-checker", "--config", "-config"]);
        assert_eq!(cli.config, PathBuf::from("-config"));
    }
}
