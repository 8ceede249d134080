use clap::{Args, Parser, Subcommand};

use mailgate_types::models::DEFAULT_UPSTREAM_BASE_URL;
use mailgate_types::{CredentialPolicy, IndexMode};

#[derive(Parser)]
#[command(
    name = "mailgate",
    about = "mailgate - read-only gateway for the mail-service REST API",
    version = env!("CARGO_PKG_VERSION"),
    author,
    propagate_version = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub config: ConfigArgs,

    #[arg(short, long, env = "RUST_LOG", default_value = "info", global = true)]
    pub log_level: String,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Start the gateway (default if no command specified)")]
    Serve,

    #[command(about = "List the forwarded routes")]
    Routes {
        #[arg(short, long, help = "Output as JSON")]
        json: bool,
    },

    #[command(about = "Validate configuration and exit")]
    Check,
}

/// Startup configuration. Precedence: flag > environment > `.env` > default.
#[derive(Args, Debug, Clone)]
pub struct ConfigArgs {
    #[arg(
        long,
        env = "MAIL_API_BASE_URL",
        default_value = DEFAULT_UPSTREAM_BASE_URL,
        global = true,
        help = "Base URL of the upstream mail API"
    )]
    pub upstream_url: String,

    #[arg(
        long,
        env = "MAIL_API_KEY",
        hide_env_values = true,
        global = true,
        help = "Static upstream credential (required with --credential-policy static)"
    )]
    pub api_key: Option<String>,

    #[arg(
        long,
        env = "MAILGATE_CREDENTIAL_POLICY",
        default_value = "static",
        value_parser = parse_credential_policy,
        global = true,
        help = "Where the upstream credential comes from: static | per_request"
    )]
    pub credential_policy: CredentialPolicy,

    #[arg(
        long,
        env = "MAILGATE_TIMEOUT_SECS",
        default_value_t = mailgate_types::models::default_request_timeout(),
        global = true,
        help = "Upstream request timeout in seconds"
    )]
    pub timeout_secs: u64,

    #[arg(long, env = "MAILGATE_BIND", default_value = "127.0.0.1", global = true)]
    pub bind: String,

    #[arg(short, long, env = "MAILGATE_PORT", default_value = "5000", global = true)]
    pub port: u16,

    #[arg(
        long,
        env = "MAILGATE_INDEX_MODE",
        default_value = "landing",
        value_parser = parse_index_mode,
        global = true,
        help = "What GET / serves: landing | docs"
    )]
    pub index_mode: IndexMode,
}

fn parse_credential_policy(s: &str) -> Result<CredentialPolicy, String> {
    CredentialPolicy::from_string(s)
        .ok_or_else(|| format!("unknown credential policy '{}' (expected static or per_request)", s))
}

fn parse_index_mode(s: &str) -> Result<IndexMode, String> {
    IndexMode::from_string(s)
        .ok_or_else(|| format!("unknown index mode '{}' (expected landing or docs)", s))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_policy_values() {
        assert_eq!(parse_credential_policy("per_request"), Ok(CredentialPolicy::PerRequest));
        assert!(parse_credential_policy("maybe").is_err());
        assert_eq!(parse_index_mode("docs"), Ok(IndexMode::Docs));
    }

    #[test]
    fn test_flags_override_defaults() {
        let cli = Cli::try_parse_from([
            "mailgate",
            "--upstream-url",
            "https://mail.example.org",
            "--credential-policy",
            "per-request",
            "--timeout-secs",
            "3",
            "routes",
            "--json",
        ])
        .unwrap();

        assert_eq!(cli.config.upstream_url, "https://mail.example.org");
        assert_eq!(cli.config.credential_policy, CredentialPolicy::PerRequest);
        assert_eq!(cli.config.timeout_secs, 3);
        assert!(matches!(cli.command, Some(Commands::Routes { json: true })));
    }
}
