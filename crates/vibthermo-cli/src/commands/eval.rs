use crate::cli::EvalArgs;
use crate::config::{PartialRunConfig, RunConfig};
use crate::error::Result;
use crate::report;
use tracing::{info, warn};
use vibthermo::core::io::table;
use vibthermo::workflows::sweep;

pub fn run(args: EvalArgs) -> Result<()> {
    let partial_config = PartialRunConfig::load(&args.model)?;
    info!("Merging configuration from file and CLI arguments...");
    let RunConfig {
        model,
        temperatures,
    } = partial_config.merge_with_cli(&args.model, &args.temperatures)?;

    info!(
        "Evaluating {} model at {} temperature(s).",
        model.class(),
        temperatures.len()
    );
    let rows = sweep::run(&model, &temperatures)?;

    if rows.is_empty() {
        warn!("No temperatures to evaluate.");
    }
    print!("{}", report::render_table(model.class(), &rows));

    if let Some(output) = &args.output {
        info!("Writing property table to {:?}", output);
        table::write_table(output, &rows)?;
        println!("Property table written to {}", output.display());
    }
    Ok(())
}
