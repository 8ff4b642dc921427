use std::fs;
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use minuteplan::config::{self, AppConfig};
use minuteplan::export::{default_output_path, save_json, save_workbook};
use minuteplan::pipeline::{MinutesProcessor, OpenAiClient};

#[derive(Debug, Default)]
struct Args {
    input: Option<PathBuf>,
    output_dir: Option<PathBuf>,
    json_only: bool,
}

fn print_usage() {
    eprintln!(
        "Usage: {} [OPTIONS] [MINUTES_FILE]\n\n\
         Reads meeting-minutes text from MINUTES_FILE (or stdin) and writes a\n\
         structured project plan as JSON and as a spreadsheet.\n\n\
         Options:\n\
           -o, --output <DIR>   Output directory (default: MINUTES_OUTPUT_DIR or .)\n\
               --json-only      Skip the spreadsheet export\n\
           -h, --help           Show this help\n\n\
         The OpenAI API key is read from OPENAI_API_KEY.",
        config::APP_NAME
    );
}

fn parse_args() -> Result<Args, String> {
    let mut result = Args::default();
    let args: Vec<String> = std::env::args().collect();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--output" | "-o" => {
                i += 1;
                let dir = args.get(i).ok_or("--output requires a directory")?;
                result.output_dir = Some(PathBuf::from(dir));
            }
            "--json-only" => result.json_only = true,
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            flag if flag.starts_with('-') => {
                return Err(format!("Unknown option: {flag}"));
            }
            path => {
                if result.input.is_some() {
                    return Err("More than one input file given".into());
                }
                result.input = Some(PathBuf::from(path));
            }
        }
        i += 1;
    }
    Ok(result)
}

fn read_input(args: &Args) -> std::io::Result<String> {
    match &args.input {
        Some(path) => fs::read_to_string(path),
        None => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

fn run(args: Args, config: AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let raw_text = read_input(&args)?;

    let client = OpenAiClient::new(
        &config.api_key,
        &config.base_url,
        &config.model,
        config.timeout_secs,
    )?;
    let processor = MinutesProcessor::new(Box::new(client));
    let extraction = processor.process(&raw_text)?;
    let minutes = &extraction.minutes;

    let output_dir = args.output_dir.unwrap_or(config.output_dir);
    fs::create_dir_all(&output_dir)?;

    let json_path = default_output_path(minutes, &output_dir, "json");
    save_json(minutes, &json_path)?;

    let workbook_path = if args.json_only {
        None
    } else {
        let path = default_output_path(minutes, &output_dir, "xlsx");
        save_workbook(minutes, &path)?;
        Some(path)
    };

    println!(
        "Meeting:   {}",
        minutes.meeting_title.as_deref().unwrap_or("(untitled)")
    );
    println!(
        "Date:      {}",
        minutes.meeting_date.as_deref().unwrap_or("(unknown)")
    );
    if !minutes.attendees.is_empty() {
        println!("Attendees: {}", minutes.attendees.join(", "));
    }
    if let Some(summary) = &minutes.summary {
        println!("Summary:   {summary}");
    }
    println!("Items:     {} extracted", minutes.items.len());
    if extraction.skipped_items > 0 {
        println!("           {} skipped as malformed", extraction.skipped_items);
    }
    println!("JSON:      {}", json_path.display());
    if let Some(path) = workbook_path {
        println!("Workbook:  {}", path.display());
    }
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    let args = match parse_args() {
        Ok(args) => args,
        Err(message) => {
            eprintln!("{message}");
            print_usage();
            return ExitCode::FAILURE;
        }
    };

    match run(args, AppConfig::from_env()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
