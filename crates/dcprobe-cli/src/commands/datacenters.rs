//! Implementation of the `dcprobe datacenters` command.
//!
//! Dispatch sequence:
//! 1. Resolve the connection descriptor (flags, env, config)
//! 2. Resolve the validator backend
//! 3. Establish a session and query the inventory via `BootstrapService`
//! 4. Render the result in the requested format
//!
//! The sequence is printed exactly as the backend returned it — one line
//! per datacenter, no reordering, no filtering.

use tracing::{info, instrument};

use dcprobe_core::application::BootstrapService;

use crate::{
    cli::{DatacentersArgs, ListFormat, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Fixed label prefixed to every datacenter line in table output.
const DC_LABEL: &str = "DC";

#[instrument(skip_all)]
pub fn execute(
    args: DatacentersArgs,
    _global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // 1. Resolve connection parameters
    let descriptor = super::resolve_descriptor(&args.connection, &config)?;

    let shown_url = descriptor
        .display_url()
        .map_err(|e| CliError::Core(e.into()))?;

    if matches!(args.format, ListFormat::Table) {
        output.info(&format!("Server URL: {shown_url}"))?;
        output.info(&format!("Descriptor: {descriptor}"))?;
    }

    // 2. Build the backend and 3. run the probe
    let backend = super::resolve_backend(&args.connection, &config)?;
    let service = BootstrapService::new(Box::new(backend));

    let datacenters = service.datacenters(&descriptor).map_err(CliError::Core)?;
    info!(count = datacenters.len(), "Datacenter inventory received");

    // 4. Render
    match args.format {
        ListFormat::Table => {
            if datacenters.is_empty() {
                output.info("No datacenters visible to this session")?;
                return Ok(());
            }
            output.header("Datacenters:")?;
            for dc in &datacenters {
                output.labeled(DC_LABEL, dc.name())?;
            }
        }

        ListFormat::List => {
            // Bypasses OutputManager because list output must stay
            // machine-consumable even in non-TTY pipes.
            for dc in &datacenters {
                println!("{dc}");
            }
        }

        ListFormat::Json => {
            // Serialise as a JSON array to stdout (bypasses OutputManager
            // because JSON output must be parseable even in non-TTY pipes).
            let names: Vec<&str> = datacenters.iter().map(|d| d.name()).collect();
            let json = serde_json::to_string_pretty(&names).map_err(|e| CliError::InvalidInput {
                message: format!("cannot serialise datacenter list: {e}"),
                source: Some(Box::new(e)),
            })?;
            println!("{json}");
        }

        ListFormat::Csv => {
            println!("name");
            for dc in &datacenters {
                println!("{dc}");
            }
        }
    }

    Ok(())
}
