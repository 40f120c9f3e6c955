//! Command implementations and shared argument-resolution helpers.
//!
//! Each command file translates CLI arguments into core domain values,
//! calls the application service, and displays results. No business logic
//! lives here.

pub mod check;
pub mod completions;
pub mod datacenters;

use std::path::PathBuf;

use tracing::debug;

use dcprobe_adapters::StaticValidatorFactory;
use dcprobe_core::domain::ConnectionDescriptor;

use crate::{
    cli::ConnectionArgs,
    config::AppConfig,
    error::{CliError, CliResult},
};

// ── Descriptor resolution ─────────────────────────────────────────────────────

/// Resolve connection arguments into a validated [`ConnectionDescriptor`].
///
/// Precedence per field: CLI flag > environment (handled by clap `env`
/// attributes) > config file > built-in default. The original installer
/// hardcoded every one of these values; nothing is embedded here.
pub fn resolve_descriptor(
    args: &ConnectionArgs,
    config: &AppConfig,
) -> CliResult<ConnectionDescriptor> {
    let host = args
        .host
        .clone()
        .or_else(|| config.connection.host.clone())
        .unwrap_or_default(); // empty host is rejected by the domain below

    let username = args
        .username
        .clone()
        .or_else(|| config.connection.username.clone());

    let password = match (&username, &args.password) {
        (Some(user), None) => prompt_password(user)?,
        (_, given) => given.clone(),
    };

    let path = args
        .path
        .clone()
        .or_else(|| config.connection.path.clone())
        .unwrap_or_default();

    let force = args.force || config.connection.force;

    let mut builder = ConnectionDescriptor::builder()
        .host(host)
        .path(path)
        .force(force);

    if let Some(user) = username {
        builder = builder.username(user);
    }
    if let Some(pass) = password {
        builder = builder.password(pass);
    }

    let descriptor = builder.build().map_err(|e| CliError::Core(e.into()))?;

    debug!(descriptor = %descriptor, "Connection descriptor resolved");
    Ok(descriptor)
}

/// Ask for the password interactively when a username was given without
/// one. Only fires on a real terminal; piped invocations fall through to
/// domain validation (which rejects the half-pair with a suggestion).
#[cfg(feature = "interactive")]
fn prompt_password(username: &str) -> CliResult<Option<String>> {
    use std::io::IsTerminal as _;

    if !std::io::stdin().is_terminal() {
        return Ok(None);
    }

    let password = dialoguer::Password::new()
        .with_prompt(format!("Password for {username}"))
        .interact()
        .map_err(|e| CliError::IoError {
            message: "failed to read password".into(),
            source: std::io::Error::other(e.to_string()),
        })?;

    Ok(Some(password))
}

#[cfg(not(feature = "interactive"))]
fn prompt_password(_username: &str) -> CliResult<Option<String>> {
    Ok(None)
}

// ── Backend resolution ────────────────────────────────────────────────────────

/// Build the validator backend for this invocation.
///
/// The shipped backend answers from an inventory fixture; the flag, the
/// `DCPROBE_INVENTORY` variable, and the `[inventory]` config section all
/// name the same thing.
pub fn resolve_backend(
    args: &ConnectionArgs,
    config: &AppConfig,
) -> CliResult<StaticValidatorFactory> {
    let path: PathBuf = args
        .inventory
        .clone()
        .or_else(|| config.inventory.path.clone())
        .ok_or(CliError::NoBackendConfigured)?;

    if !path.exists() {
        return Err(CliError::InventoryNotFound { path });
    }

    StaticValidatorFactory::from_toml_file(&path).map_err(CliError::Core)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use dcprobe_core::{domain::DomainError, error::ProbeError};

    fn conn_args() -> ConnectionArgs {
        ConnectionArgs {
            host: None,
            username: None,
            password: None,
            path: None,
            force: false,
            inventory: None,
        }
    }

    // ── resolve_descriptor precedence ─────────────────────────────────────

    #[test]
    fn flag_host_wins_over_config() {
        let mut args = conn_args();
        args.host = Some("flag.local".into());

        let mut config = AppConfig::default();
        config.connection.host = Some("config.local".into());

        let d = resolve_descriptor(&args, &config).unwrap();
        assert_eq!(d.host(), "flag.local");
    }

    #[test]
    fn config_host_fills_missing_flag() {
        let mut config = AppConfig::default();
        config.connection.host = Some("config.local".into());

        let d = resolve_descriptor(&conn_args(), &config).unwrap();
        assert_eq!(d.host(), "config.local");
    }

    #[test]
    fn no_host_anywhere_is_a_user_error() {
        let err = resolve_descriptor(&conn_args(), &AppConfig::default()).unwrap_err();
        assert!(matches!(
            err,
            CliError::Core(ProbeError::Domain(DomainError::MissingHost))
        ));
    }

    #[test]
    fn config_force_is_honoured() {
        let mut args = conn_args();
        args.host = Some("h".into());

        let mut config = AppConfig::default();
        config.connection.force = true;

        let d = resolve_descriptor(&args, &config).unwrap();
        assert!(d.force());
    }

    #[test]
    fn path_defaults_to_root() {
        let mut args = conn_args();
        args.host = Some("h".into());

        let d = resolve_descriptor(&args, &AppConfig::default()).unwrap();
        assert_eq!(d.path(), "");
    }

    #[test]
    fn full_pair_resolves_to_credentials() {
        let mut args = conn_args();
        args.host = Some("192.168.1.86".into());
        args.username = Some("root".into());
        args.password = Some("password".into());

        let d = resolve_descriptor(&args, &AppConfig::default()).unwrap();
        assert_eq!(d.credentials().unwrap().username(), "root");
    }

    #[test]
    fn username_without_password_fails_off_terminal() {
        // Under `cargo test` stdin is not a TTY, so the interactive prompt
        // never fires and the half-pair reaches domain validation.
        let mut args = conn_args();
        args.host = Some("h".into());
        args.username = Some("root".into());

        let err = resolve_descriptor(&args, &AppConfig::default()).unwrap_err();
        assert!(matches!(
            err,
            CliError::Core(ProbeError::Domain(DomainError::IncompleteCredentials { .. }))
        ));
    }

    // ── resolve_backend ───────────────────────────────────────────────────

    #[test]
    fn missing_backend_everywhere_is_a_config_error() {
        let err = resolve_backend(&conn_args(), &AppConfig::default()).unwrap_err();
        assert!(matches!(err, CliError::NoBackendConfigured));
    }

    #[test]
    fn nonexistent_inventory_path_is_not_found() {
        let mut args = conn_args();
        args.inventory = Some(PathBuf::from("/definitely/not/here.toml"));

        let err = resolve_backend(&args, &AppConfig::default()).unwrap_err();
        assert!(matches!(err, CliError::InventoryNotFound { .. }));
    }
}
