//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "dcprobe",
    bin_name = "dcprobe",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{1f50e} Validate a management endpoint and list its datacenters",
    long_about = "dcprobe builds a connection descriptor for a management \
                  endpoint, obtains a validated session from a validator \
                  backend, and queries the datacenter inventory.",
    after_help = "EXAMPLES:\n\
        \x20 dcprobe datacenters --host 192.168.1.86 -u root -p password --force\n\
        \x20 dcprobe datacenters --host vcenter.local --inventory ./inventory.toml --format list\n\
        \x20 dcprobe check --host vcenter.local -u admin\n\
        \x20 dcprobe completions bash > /usr/share/bash-completion/completions/dcprobe",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Connect to the endpoint and list its datacenters.
    #[command(
        visible_aliases = ["dc", "ls"],
        about = "List datacenters behind an endpoint",
        after_help = "EXAMPLES:\n\
            \x20 dcprobe datacenters --host 192.168.1.86 -u root -p password\n\
            \x20 dcprobe datacenters --host vcenter.local --format json\n\
            \x20 DCPROBE_PASSWORD=secret dcprobe dc --host vcenter.local -u root"
    )]
    Datacenters(DatacentersArgs),

    /// Validate connection parameters without querying anything.
    #[command(
        about = "Check that a validator session can be established",
        after_help = "EXAMPLES:\n\
            \x20 dcprobe check --host 192.168.1.86 -u root -p password\n\
            \x20 dcprobe check --host vcenter.local --force"
    )]
    Check(CheckArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 dcprobe completions bash > ~/.local/share/bash-completion/completions/dcprobe\n\
            \x20 dcprobe completions zsh  > ~/.zfunc/_dcprobe\n\
            \x20 dcprobe completions fish > ~/.config/fish/completions/dcprobe.fish"
    )]
    Completions(CompletionsArgs),
}

// ── connection args ───────────────────────────────────────────────────────────

/// Connection parameters shared by `datacenters` and `check`.
///
/// Everything here used to be a hardcoded literal in the installer this
/// tool grew out of; each field now resolves flag > environment > config
/// file > default.
#[derive(Debug, Args)]
pub struct ConnectionArgs {
    /// Target host (address or hostname, optionally `host:port`).
    #[arg(
        short = 'H',
        long = "host",
        value_name = "HOST",
        env = "DCPROBE_HOST",
        help = "Endpoint host address"
    )]
    pub host: Option<String>,

    /// Username for basic authentication.
    #[arg(
        short = 'u',
        long = "username",
        value_name = "USER",
        env = "DCPROBE_USERNAME",
        help = "Endpoint username"
    )]
    pub username: Option<String>,

    /// Password for basic authentication.
    ///
    /// Prefer `DCPROBE_PASSWORD` or the interactive prompt over passing
    /// this on the command line (shell history).
    #[arg(
        short = 'p',
        long = "password",
        value_name = "PASS",
        env = "DCPROBE_PASSWORD",
        hide_env_values = true,
        help = "Endpoint password"
    )]
    pub password: Option<String>,

    /// Resource path below the endpoint root.
    #[arg(
        long = "path",
        value_name = "PATH",
        help = "Resource path (default: endpoint root)"
    )]
    pub path: Option<String>,

    /// Proceed despite warnings (interpreted by the validator backend).
    #[arg(long = "force", help = "Proceed despite validation warnings")]
    pub force: bool,

    /// Inventory fixture answering for the endpoint.
    #[arg(
        long = "inventory",
        value_name = "FILE",
        env = "DCPROBE_INVENTORY",
        help = "Inventory fixture file (TOML)"
    )]
    pub inventory: Option<PathBuf>,
}

// ── datacenters ───────────────────────────────────────────────────────────────

/// Arguments for `dcprobe datacenters`.
#[derive(Debug, Args)]
pub struct DatacentersArgs {
    #[command(flatten)]
    pub connection: ConnectionArgs,

    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `datacenters` command.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ListFormat {
    /// Human-readable labelled lines.
    Table,
    /// One name per line.
    List,
    /// JSON array.
    Json,
    /// CSV rows.
    Csv,
}

// ── check ─────────────────────────────────────────────────────────────────────

/// Arguments for `dcprobe check`.
#[derive(Debug, Args)]
pub struct CheckArgs {
    #[command(flatten)]
    pub connection: ConnectionArgs,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `dcprobe completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_datacenters_command() {
        let cli = Cli::parse_from([
            "dcprobe",
            "datacenters",
            "--host",
            "192.168.1.86",
            "-u",
            "root",
            "-p",
            "password",
            "--force",
        ]);
        let Commands::Datacenters(args) = cli.command else {
            panic!("expected datacenters command");
        };
        assert_eq!(args.connection.host.as_deref(), Some("192.168.1.86"));
        assert!(args.connection.force);
    }

    #[test]
    fn datacenters_alias_dc() {
        let cli = Cli::parse_from(["dcprobe", "dc", "--host", "h"]);
        assert!(matches!(cli.command, Commands::Datacenters(_)));
    }

    #[test]
    fn datacenters_alias_ls() {
        let cli = Cli::parse_from(["dcprobe", "ls", "--host", "h"]);
        assert!(matches!(cli.command, Commands::Datacenters(_)));
    }

    #[test]
    fn path_and_force_default_off() {
        let cli = Cli::parse_from(["dcprobe", "check", "--host", "h"]);
        let Commands::Check(args) = cli.command else {
            panic!("expected check command");
        };
        assert!(args.connection.path.is_none());
        assert!(!args.connection.force);
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        // clap should reject --quiet --verbose together
        let result = Cli::try_parse_from(["dcprobe", "--quiet", "--verbose", "check"]);
        assert!(result.is_err());
    }
}
