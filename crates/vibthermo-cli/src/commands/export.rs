use crate::cli::ExportArgs;
use crate::config::PartialRunConfig;
use crate::error::Result;
use tracing::info;
use vibthermo::core::io::model_file;

pub fn run(args: ExportArgs) -> Result<()> {
    let partial_config = PartialRunConfig::load(&args.model)?;
    let config = partial_config.merge_with_cli(&args.model, &[])?;

    info!(
        "Exporting {} model to {:?}",
        config.model.class(),
        &args.output
    );
    model_file::write_model(&args.output, &config.model)?;
    println!(
        "{} model written to {}",
        config.model.class(),
        args.output.display()
    );
    Ok(())
}
