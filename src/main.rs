use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::LevelFilter;

use resume_pdf::{generate, Options, PageSettings};

/// Page formats offered on the command line.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum PageSize {
    A4,
    Letter,
}

impl From<PageSize> for PageSettings {
    fn from(size: PageSize) -> Self {
        match size {
            PageSize::A4 => PageSettings::default(),
            PageSize::Letter => PageSettings::letter(),
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for LevelFilter {
    fn from(level: CliLogLevel) -> Self {
        match level {
            CliLogLevel::Error => LevelFilter::Error,
            CliLogLevel::Warn => LevelFilter::Warn,
            CliLogLevel::Info => LevelFilter::Info,
            CliLogLevel::Debug => LevelFilter::Debug,
            CliLogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Generate a styled resume PDF from a JSON record.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// JSON file holding the resume record
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Where to write the PDF
    #[arg(short, long, default_value = "beautiful_resume.pdf")]
    output: PathBuf,

    /// Format of the pages
    #[arg(long, value_enum, default_value = "a4")]
    page_size: PageSize,

    /// Write uncompressed content streams
    #[arg(long)]
    no_compress: bool,

    /// Set logging level
    #[arg(short, long, value_enum, default_value = "info")]
    log_level: CliLogLevel,
}

fn init_logging(level: CliLogLevel) {
    env_logger::Builder::new()
        .filter_level(level.into())
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

fn run(args: &Args) -> Result<()> {
    let mut options = Options {
        page: args.page_size.into(),
        ..Options::default()
    };
    options.serialize.compress_content_streams = !args.no_compress;

    generate(&args.input, &args.output, &options).with_context(|| {
        format!(
            "failed to turn {} into {}",
            args.input.display(),
            args.output.display()
        )
    })
}

/// The message shown when generation fails, with every cause listed once.
fn failure_report(err: &anyhow::Error) -> String {
    let mut report = String::from("An error occurred while generating the PDF.");
    for cause in err.chain() {
        report.push_str("\n  caused by: ");
        report.push_str(&cause.to_string());
    }
    report
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.log_level);

    match run(&args) {
        Ok(()) => {
            println!("PDF generated successfully at: {}", args.output.display());
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{}", failure_report(&err));
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use anyhow::Context;

    use resume_pdf::error::{DecodeError, Error};

    use crate::failure_report;

    #[test]
    fn each_cause_is_reported_once() {
        let err = Err::<(), _>(Error::Decode(DecodeError::NotAnObject))
            .context("failed to turn in.json into out.pdf")
            .unwrap_err();
        let report = failure_report(&err);

        assert!(report.starts_with("An error occurred while generating the PDF."));
        assert_eq!(report.matches("failed to turn in.json into out.pdf").count(), 1);
        assert_eq!(report.matches("decoding failed").count(), 1);
        assert_eq!(report.matches("input is not a JSON object").count(), 2);
        assert_eq!(report.lines().count(), 4);
    }
}
