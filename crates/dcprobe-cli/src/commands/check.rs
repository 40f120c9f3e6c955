//! Implementation of the `dcprobe check` command.
//!
//! Connect-only validation: succeeds iff a validator session can be
//! established for the resolved descriptor. Nothing is queried.

use tracing::instrument;

use dcprobe_core::application::BootstrapService;

use crate::{
    cli::{CheckArgs, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

#[instrument(skip_all)]
pub fn execute(
    args: CheckArgs,
    _global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let descriptor = super::resolve_descriptor(&args.connection, &config)?;

    let shown_url = descriptor
        .display_url()
        .map_err(|e| CliError::Core(e.into()))?;
    output.info(&format!("Server URL: {shown_url}"))?;

    let backend = super::resolve_backend(&args.connection, &config)?;
    let service = BootstrapService::new(Box::new(backend));

    service.check(&descriptor).map_err(CliError::Core)?;

    output.success(&format!(
        "Validator session established for {}",
        descriptor.host()
    ))?;
    Ok(())
}
