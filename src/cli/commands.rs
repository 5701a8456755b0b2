use crate::cli::args::{Cli, Commands};
use crate::error::Result;
use crate::models::LevelSelection;
use crate::processors::{ConversionConfig, Converter};
use crate::readers::{DataSource, StationReader};
use crate::settings::Settings;
use crate::utils::filename::{data_output_path, inventory_output_path};
use crate::utils::progress::ProgressReporter;
use crate::writers::InventoryWriter;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use tracing::info;

pub async fn run(cli: Cli) -> Result<()> {
    let verbose = cli.verbose;
    init_logging(verbose);

    let settings = Settings::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Convert {
            input,
            level,
            surface,
            output_file,
        } => {
            // Level problems surface before any input is fetched
            let config = match (surface, level) {
                (true, _) => ConversionConfig::new(LevelSelection::Surface),
                (false, Some(code)) => ConversionConfig::from_level_code(code)?,
                (false, None) => settings.conversion_config()?,
            };

            let source = DataSource::from_input(input, &settings.data_url);
            let output_file = output_file
                .unwrap_or_else(|| data_output_path(&settings.output_dir, config.level));

            println!("Converting IGRA monthly data...");
            println!("Input: {}", source);
            println!("Level: {}", config.level);
            println!("Output file: {}", output_file.display());

            let reader = source.open().await?;
            let writer = create_output(&output_file)?;

            let progress = ProgressReporter::new_spinner("Converting records...", verbose);
            let summary = Converter::new(config).convert(reader, writer, Some(&progress))?;
            progress.finish_with_message(&format!(
                "Wrote {} records",
                summary.records_written
            ));

            println!("\n{}", summary.summary());
            println!("Conversion complete!");
        }

        Commands::Inventory { input, output_file } => {
            let source = DataSource::from_input(input, &settings.stations_url);
            let output_file = match output_file {
                Some(path) => path,
                None => inventory_output_path(&settings.output_dir)?,
            };

            println!("Writing IGRA station inventory...");
            println!("Input: {}", source);
            println!("Output file: {}", output_file.display());

            let reader = source.open().await?;
            let stations = StationReader::new().read_stations(reader)?;
            info!("Loaded {} stations", stations.len());

            let mut writer = InventoryWriter::new(create_output(&output_file)?);
            let count = writer.write_stations(&stations)?;
            writer.finish()?;

            println!("Wrote {} stations", count);
        }
    }

    Ok(())
}

fn create_output(path: &Path) -> Result<BufWriter<File>> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    Ok(BufWriter::new(File::create(path)?))
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("igra_processor={}", level)));

    // A subscriber may already be installed when run from tests
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .try_init();
}
