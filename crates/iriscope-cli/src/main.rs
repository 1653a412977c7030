use anyhow::Result;
use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use log::LevelFilter;
use std::path::PathBuf;

use iriscope_cli::commands::info;
use iriscope_cli::commands::predict::{self, PredictConfig};
use iriscope_classifiers::predictor::Sample;

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or("IRISCOPE_LOG", "error,iriscope=info"))
        .init();

    let matches = Command::new("iriscope")
        .version(clap::crate_version!())
        .about("\u{1F338} Iriscope - Iris species prediction from morphological measurements")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("predict")
                .about("Classify a single specimen from four measurements")
                .arg(
                    Arg::new("sepal_length")
                        .long("sepal-length")
                        .help("Sepal length in cm (suggested range 4.3-7.9)")
                        .required(true)
                        .allow_negative_numbers(true)
                        .value_parser(clap::value_parser!(f32))
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("sepal_width")
                        .long("sepal-width")
                        .help("Sepal width in cm (suggested range 2.0-4.4)")
                        .required(true)
                        .allow_negative_numbers(true)
                        .value_parser(clap::value_parser!(f32))
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("petal_length")
                        .long("petal-length")
                        .help("Petal length in cm (suggested range 1.0-6.9)")
                        .required(true)
                        .allow_negative_numbers(true)
                        .value_parser(clap::value_parser!(f32))
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("petal_width")
                        .long("petal-width")
                        .help("Petal width in cm (suggested range 0.1-2.5)")
                        .required(true)
                        .allow_negative_numbers(true)
                        .value_parser(clap::value_parser!(f32))
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("config")
                        .help("Path to prediction configuration file (JSON)")
                        .required(false)
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("output_file")
                        .short('o')
                        .long("output")
                        .help("Path to write the HTML report. Defaults to iriscope_report.html.")
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("image_dir")
                        .long("image-dir")
                        .help("Directory searched for per-species illustration images.")
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::DirPath),
                )
                .arg(
                    Arg::new("no_report")
                        .long("no-report")
                        .help("Disable HTML report generation.")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(Command::new("info").about("Show the bundled reference dataset summary"))
        .help_template(
            "{usage-heading} {usage}\n\n\
             {about-with-newline}\n\
             Version {version}\n\n\
             {all-args}{after-help}",
        )
        .get_matches();

    match matches.subcommand() {
        Some(("predict", sub_m)) => handle_predict(sub_m),
        Some(("info", _)) => handle_info(),
        _ => unreachable!("Subcommand is required by CLI configuration"),
    }
}

fn handle_predict(matches: &ArgMatches) -> Result<()> {
    let mut config = if let Some(config_path) = matches.get_one::<PathBuf>("config") {
        eprintln!("[Iriscope::Predict] Using config: {:?}", config_path);
        predict::load_predict_config(config_path)?
    } else {
        PredictConfig::default()
    };

    if let Some(output) = matches.get_one::<PathBuf>("output_file") {
        config.report_path = output.clone();
    }
    if let Some(dir) = matches.get_one::<PathBuf>("image_dir") {
        config.image_dir = dir.clone();
    }
    if matches.get_flag("no_report") {
        config.report = false;
    }

    let sample = Sample::new(
        *matches.get_one::<f32>("sepal_length").unwrap(),
        *matches.get_one::<f32>("sepal_width").unwrap(),
        *matches.get_one::<f32>("petal_length").unwrap(),
        *matches.get_one::<f32>("petal_width").unwrap(),
    );

    match predict::run_predict(&sample, &config) {
        Ok(outcome) => {
            predict::write_prediction_output(&outcome);
            if config.report {
                predict::write_prediction_report(&sample, &outcome, &config)?;
                eprintln!("[Iriscope::Predict] Report written to {:?}", config.report_path);
            }
            Ok(())
        }
        Err(e) => {
            log::error!("Prediction failed: {:#}", e);
            std::process::exit(1)
        }
    }
}

fn handle_info() -> Result<()> {
    match info::print_dataset_summary() {
        Ok(()) => Ok(()),
        Err(e) => {
            log::error!("Dataset summary failed: {:#}", e);
            std::process::exit(1)
        }
    }
}
