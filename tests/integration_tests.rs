use clap::Parser;
use flate2::write::GzEncoder;
use flate2::Compression;
use igra_processor::cli::{run, Cli};
use igra_processor::models::LevelSelection;
use igra_processor::readers::DataSource;
use igra_processor::{ConversionConfig, Converter, ProcessingError};
use pretty_assertions::assert_eq;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tempfile::TempDir;

const MONTHLY: &str = "\
01001 1950 01 9999 -52 30
01001 1950 01 1000 -61 30
01001 1950 02 1000 -9999 0
01001 1951 07 1000 103 28
01001 1951 08 1000 97 27
03005 1962 01 1000 21 31
03005 1962 01 500 -334 31
03005 1963 04 1000 -9999 0
";

const STATIONS: &str = "\
NO  01001  JAN MAYEN                            70.93   -8.67    9      1947 2012
UK  03005  LERWICK                              60.13   -1.18   84 G    1948 2012
";

fn write_gzip(path: &Path, content: &str) {
    let mut encoder = GzEncoder::new(File::create(path).unwrap(), Compression::default());
    encoder.write_all(content.as_bytes()).unwrap();
    encoder.finish().unwrap();
}

fn cli(args: &[&str]) -> Cli {
    let mut argv = vec!["igra-processor"];
    argv.extend_from_slice(args);
    Cli::try_parse_from(argv).expect("valid arguments")
}

#[tokio::test]
async fn test_convert_command_end_to_end() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let input = temp_dir.path().join("temp_00z.mly.gz");
    let output = temp_dir.path().join("out").join("igra-level1000.dat");
    write_gzip(&input, MONTHLY);

    run(cli(&[
        "convert",
        "--input",
        input.to_str().unwrap(),
        "--level",
        "1000",
        "--output-file",
        output.to_str().unwrap(),
    ]))
    .await
    .unwrap();

    let content = std::fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = content.lines().collect();

    // 03005/1963 has only a missing value and is dropped
    assert_eq!(lines.len(), 3);
    assert!(lines.iter().all(|l| l.len() == 115));

    assert_eq!(&lines[0][..19], "IGR010015001950TAVG");
    assert_eq!(&lines[0][19..35], " -610  f-9999   ");
    assert_eq!(&lines[1][..19], "IGR010015001951TAVG");
    assert_eq!(&lines[1][67..83], " 1030  f  970  f");
    assert_eq!(&lines[2][..19], "IGR030055001962TAVG");
    assert_eq!(&lines[2][19..27], "  210  f");
}

#[tokio::test]
async fn test_inventory_matches_data_identifiers() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let stations = temp_dir.path().join("igra-stations.txt");
    let data = temp_dir.path().join("igra-level1000.dat");
    let inventory = temp_dir.path().join("igra-level1000.inv");
    std::fs::write(&stations, STATIONS).unwrap();

    let converter = Converter::new(ConversionConfig::new(LevelSelection::Pressure(1000)));
    converter
        .convert(MONTHLY.as_bytes(), File::create(&data).unwrap(), None)
        .unwrap();

    run(cli(&[
        "inventory",
        "--input",
        stations.to_str().unwrap(),
        "--output-file",
        inventory.to_str().unwrap(),
    ]))
    .await
    .unwrap();

    let inventory = std::fs::read_to_string(&inventory).unwrap();
    let inventory_lines: Vec<&str> = inventory.lines().collect();
    assert_eq!(inventory_lines.len(), 2);
    assert!(inventory_lines.iter().all(|l| l.len() == 107));
    assert_eq!(
        &inventory_lines[1][..68],
        "IGR03005500  60.1300   -1.1800   84.0 LERWICK                       "
    );

    let data = std::fs::read_to_string(&data).unwrap();
    let inventory_ids: Vec<&str> = inventory_lines.iter().map(|l| &l[..11]).collect();
    for line in data.lines() {
        assert!(inventory_ids.contains(&&line[..11]));
    }
}

#[tokio::test]
async fn test_surface_conversion() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let input = temp_dir.path().join("temp_00z.mly");
    std::fs::write(&input, MONTHLY).unwrap();

    let reader = DataSource::File(input).open().await.unwrap();
    let mut output = Vec::new();
    let summary = Converter::surface()
        .convert(reader, &mut output, None)
        .unwrap();

    let output = String::from_utf8(output).unwrap();
    assert_eq!(output.lines().count(), 1);
    assert_eq!(&output[..27], "IGR010015001950TAVG -520  f");
    assert_eq!(summary.rows_kept, 1);
    assert_eq!(summary.lines_read, 8);
}

#[tokio::test]
async fn test_missing_input_fails_before_output() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let output = temp_dir.path().join("igra-level1000.dat");

    let result = run(cli(&[
        "convert",
        "--input",
        temp_dir.path().join("absent.mly").to_str().unwrap(),
        "--level",
        "1000",
        "--output-file",
        output.to_str().unwrap(),
    ]))
    .await;

    assert!(matches!(result, Err(ProcessingError::SourceUnavailable(_))));
    assert!(!output.exists());
}

#[tokio::test]
async fn test_invalid_level_fails_before_processing() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let input = temp_dir.path().join("temp_00z.mly");
    let output = temp_dir.path().join("igra-level5000.dat");
    std::fs::write(&input, MONTHLY).unwrap();

    let result = run(cli(&[
        "convert",
        "--input",
        input.to_str().unwrap(),
        "--level",
        "5000",
        "--output-file",
        output.to_str().unwrap(),
    ]))
    .await;

    assert!(matches!(result, Err(ProcessingError::Config(_))));
    assert!(!output.exists());
}
