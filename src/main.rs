use std::path::PathBuf;

use clap::{Parser, Subcommand};

use cardia::config;
use cardia::models::{EcgInputs, Sex};
use cardia::pipeline::dataset;
use cardia::pipeline::inference::{ForestModel, LabelCodec};
use cardia::pipeline::ingest;
use cardia::triage::{self, Assessment, SessionState};

#[derive(Parser)]
#[command(name = "cardia")]
#[command(about = "ECG report triage: extract datasets, prepare training data, assess patients")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract structured records from report text into a dataset CSV
    Extract {
        /// Report text file (form-feed page breaks) or directory of files
        input: PathBuf,
        /// Dataset CSV to write
        #[arg(long, default_value = config::DEFAULT_DATASET_FILE)]
        output: PathBuf,
    },
    /// Turn a dataset CSV into an imputed training matrix plus label codec
    Prepare {
        /// Dataset CSV produced by `extract`
        input: PathBuf,
        /// Training matrix CSV to write
        #[arg(long, default_value = "features.csv")]
        matrix: PathBuf,
        /// Label codec JSON to write
        #[arg(long, default_value = config::DEFAULT_CODEC_FILE)]
        labels: PathBuf,
    },
    /// Assess one ECG and print the result card
    Assess {
        /// Forest artifact exported by the trainer
        #[arg(long, default_value = config::DEFAULT_MODEL_FILE)]
        model: PathBuf,
        /// Label codec written by `prepare`
        #[arg(long, default_value = config::DEFAULT_CODEC_FILE)]
        labels: PathBuf,
        /// Age in years
        #[arg(long, default_value_t = 45.0)]
        age: f64,
        /// Male or Female
        #[arg(long, default_value = "Male", value_parser = parse_sex)]
        sex: Sex,
        /// Heart rate in bpm
        #[arg(long, default_value_t = 70.0)]
        hr: f64,
        /// P duration in ms
        #[arg(long, default_value_t = 90.0)]
        p: f64,
        /// PR interval in ms
        #[arg(long, default_value_t = 160.0)]
        pr: f64,
        /// QRS duration in ms
        #[arg(long, default_value_t = 100.0)]
        qrs: f64,
        /// QT interval in ms
        #[arg(long, default_value_t = 400.0)]
        qt: f64,
        /// Corrected QT in ms
        #[arg(long, default_value_t = 430.0)]
        qtc: f64,
        /// P axis in degrees
        #[arg(long, default_value_t = 60.0)]
        p_axis: f64,
        /// QRS axis in degrees
        #[arg(long, default_value_t = 50.0)]
        qrs_axis: f64,
        /// T axis in degrees
        #[arg(long, default_value_t = 70.0)]
        t_axis: f64,
        /// RV5 amplitude in mV
        #[arg(long, default_value_t = 1.0)]
        rv5: f64,
        /// SV1 amplitude in mV
        #[arg(long, default_value_t = 1.0)]
        sv1: f64,
    },
}

fn parse_sex(s: &str) -> Result<Sex, String> {
    Sex::from_str(s).ok_or_else(|| format!("expected Male or Female, got {s:?}"))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    cardia::init_tracing();
    tracing::info!("{} v{}", config::APP_NAME, config::APP_VERSION);

    let cli = Cli::parse();
    match cli.command {
        Commands::Extract { input, output } => {
            let summary = ingest::ingest_path(&input, &output)?;
            println!(
                "Extracted {} records from {} pages ({} rejected) into {}",
                summary.accepted,
                summary.pages,
                summary.rejected,
                output.display()
            );
        }
        Commands::Prepare {
            input,
            matrix,
            labels,
        } => {
            let loaded = dataset::read_csv(&input)?;
            let prepared = dataset::prepare_training_data(&loaded);
            dataset::write_matrix_csv(&prepared, &matrix)?;
            prepared.codec.save(&labels)?;
            println!(
                "Prepared {} rows across {} classes ({} unlabeled) into {} and {}",
                prepared.len(),
                prepared.codec.len(),
                prepared.unlabeled,
                matrix.display(),
                labels.display()
            );
        }
        Commands::Assess {
            model,
            labels,
            age,
            sex,
            hr,
            p,
            pr,
            qrs,
            qt,
            qtc,
            p_axis,
            qrs_axis,
            t_axis,
            rv5,
            sv1,
        } => {
            let forest = ForestModel::load(&model)?;
            let codec = LabelCodec::load(&labels)?;
            let inputs = EcgInputs {
                age_years: age,
                sex,
                heart_rate_bpm: hr,
                p_duration_ms: p,
                pr_interval_ms: pr,
                qrs_duration_ms: qrs,
                qt_interval_ms: qt,
                qtc_interval_ms: qtc,
                p_axis_deg: p_axis,
                qrs_axis_deg: qrs_axis,
                t_axis_deg: t_axis,
                rv5_mv: rv5,
                sv1_mv: sv1,
            };

            let session = SessionState::Assessed(triage::assess(&forest, &codec, &inputs));
            if let Some(assessment) = session.assessment() {
                print_card(assessment);
            }
        }
    }
    Ok(())
}

fn print_card(assessment: &Assessment) {
    println!();
    println!("  {}", assessment.decision.label);
    println!("  {}", assessment.explanation);
    println!();
    println!("  Confidence: {:.1}%", assessment.decision.confidence);
    println!("  Risk Level: {}", assessment.risk.as_str());
    println!("  Decision Source: {}", assessment.decision.source.as_str());
}
