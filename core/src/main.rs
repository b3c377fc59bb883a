use clap::Parser;
use log::{debug, error, info, warn};
use nii2dcm_core::cli::{Cli, OutputFormat};
use nii2dcm_core::dataset::validate::is_ready;
use nii2dcm_core::{Dataset, DatasetBuilder, DatasetSummary, Result, TextReport, ValidationIssue};
use std::process;

fn main() {
    let cli = Cli::parse();

    // Setup logging
    setup_logging(cli.verbose);

    let mut ds = match build(&cli) {
        Ok(ds) => ds,
        Err(e) => {
            error!("Failed to build dataset: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let issues = ds.validate();
    for issue in &issues {
        warn!("{}", issue);
    }
    if cli.validate && !is_ready(&issues) {
        eprintln!("Error: dataset failed validation, not written");
        output_summary(&ds, &issues, cli.format);
        process::exit(2);
    }

    match ds.save_as() {
        Ok(path) => {
            info!("Wrote {}", path.display());
            ds.set_filename(path);
        }
        Err(e) => {
            error!("Failed to write dataset: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }

    output_summary(&ds, &issues, cli.format);
}

fn setup_logging(verbose: bool) {
    if verbose {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Debug)
            .init();
    } else {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();
    }
}

fn build(cli: &Cli) -> Result<Dataset> {
    let mut ds = DatasetBuilder::new()
        .filename(&cli.output)
        .modality(cli.modality.into())
        .build()?;
    info!(
        "Built {} dataset for {}",
        ds.modality(),
        ds.filename().display()
    );

    if let Some(photometric) = cli.photometric {
        ds.set("PhotometricInterpretation", photometric.as_str())?;
    }

    for assignment in &cli.set {
        debug!("Setting {} = '{}'", assignment.keyword, assignment.value);
        ds.set_text(&assignment.keyword, &assignment.value)?;
    }

    if let Some(n) = cli.instance_number {
        let uid = ds.assign_instance(n)?;
        debug!("Assigned instance {} with UID {}", n, uid);
    }

    Ok(ds)
}

fn output_summary(ds: &Dataset, issues: &[ValidationIssue], format: OutputFormat) {
    let summary = DatasetSummary::from_dataset(ds);
    match format {
        OutputFormat::Text => {
            let report = TextReport::new(&summary).with_issues(issues);
            println!("{}", report);
        }
        OutputFormat::Json => {
            #[cfg(feature = "json")]
            {
                let value = serde_json::json!({
                    "dataset": summary,
                    "issues": issues,
                });
                match serde_json::to_string_pretty(&value) {
                    Ok(json) => println!("{}", json),
                    Err(e) => {
                        eprintln!("Error: Failed to serialize to JSON: {}", e);
                        process::exit(1);
                    }
                }
            }
            #[cfg(not(feature = "json"))]
            {
                let _ = (summary, issues);
                eprintln!("Error: JSON output requires the 'json' feature");
                process::exit(1);
            }
        }
    }
}
