use clap::Parser;
use renorm::utils::{logger, validation::Validate};
use renorm::{CliConfig, Engine, LocalStorage, NormalizePipeline, RenormError, ReportPipeline};

fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting renorm");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        fail(e);
    }

    let storage = LocalStorage::new();
    let result = if config.report {
        Engine::new(ReportPipeline::new(storage, config)).run()
    } else {
        Engine::new(NormalizePipeline::new(storage, config)).run()
    };

    if let Err(e) = result {
        fail(e);
    }
}

/// Terminal error path: the fixed message goes to stderr, details to the log.
fn fail(err: RenormError) -> ! {
    tracing::error!("Run failed: {:?}", err);
    eprintln!("{err}");
    std::process::exit(1);
}
