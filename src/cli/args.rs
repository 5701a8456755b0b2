use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "igra-processor")]
#[command(about = "Convert IGRA monthly radiosonde temperatures to GHCN-M format")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,

    #[arg(
        long,
        global = true,
        help = "Settings file (TOML) [default: ./igra.toml if present]"
    )]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert monthly means for one level into a GHCN-M data file
    Convert {
        #[arg(
            short,
            long,
            help = "Local IGRA monthly file, plain or .gz [default: download the archive]"
        )]
        input: Option<PathBuf>,

        #[arg(
            short,
            long,
            conflicts_with = "surface",
            help = "Pressure level in hPa, or 9999 for surface [default: from settings]"
        )]
        level: Option<i32>,

        #[arg(long, help = "Convert surface observations")]
        surface: bool,

        #[arg(
            short,
            long,
            help = "Output data file path [default: output/igra-level{LEVEL}.dat]"
        )]
        output_file: Option<PathBuf>,
    },

    /// Write the GHCN-M station inventory for IGRA stations
    Inventory {
        #[arg(
            short,
            long,
            help = "Local IGRA station list [default: download igra-stations.txt]"
        )]
        input: Option<PathBuf>,

        #[arg(
            short,
            long,
            help = "Output inventory path [default: latest output/*.dat with .inv extension]"
        )]
        output_file: Option<PathBuf>,
    },
}
