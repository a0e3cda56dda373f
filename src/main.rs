use clap::Parser;
use csv_refinery::utils::{logger, validation::Validate};
use csv_refinery::{
    CliConfig, CsvLoader, EtlEngine, MultiFormatWriter, OutputConfig, RefineryPipeline,
};

fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting csv-refinery CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let writer = MultiFormatWriter::new(OutputConfig::under(&config.output_path));
    let pipeline = RefineryPipeline::new(CsvLoader::new(), writer, config.input_file.clone());
    let engine = EtlEngine::new(pipeline);

    // The one recovery boundary: a failed file is reported, not propagated.
    match engine.run() {
        Ok(artifacts) => {
            tracing::info!("✅ Processing completed successfully!");
            println!("✅ Processing completed successfully!");
            for artifact in &artifacts {
                println!("📁 {} output: {}", artifact.format, artifact.path.display());
            }
        }
        Err(e) => {
            tracing::error!("❌ Processing failed at {} stage: {}", e.stage(), e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }
}
