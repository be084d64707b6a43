use anyhow::{Context, Result};
use lead_intake_config::Config;
use lead_intake_engine::{
    Formatter, LinkStyle, PhoneMask, Submission, SubmissionForm, SubmissionRecord, SummaryStyle,
};
use std::{
    env, fs,
    io::{self, Read},
    path::{Path, PathBuf},
    process,
    time::SystemTime,
};

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Format { input: Option<PathBuf> },
    Phone { values: Vec<String> },
    Compose { submission: PathBuf, evaluation: Option<PathBuf> },
}

impl Command {
    fn parse(args: &[String]) -> Option<Self> {
        match args {
            [cmd] if cmd == "format" => Some(Command::Format { input: None }),
            [cmd, file] if cmd == "format" => Some(Command::Format {
                input: Some(PathBuf::from(file)),
            }),
            [cmd, values @ ..] if cmd == "phone" && !values.is_empty() => Some(Command::Phone {
                values: values.to_vec(),
            }),
            [cmd, submission] if cmd == "compose" => Some(Command::Compose {
                submission: PathBuf::from(submission),
                evaluation: None,
            }),
            [cmd, submission, evaluation] if cmd == "compose" => Some(Command::Compose {
                submission: PathBuf::from(submission),
                evaluation: Some(PathBuf::from(evaluation)),
            }),
            _ => None,
        }
    }
}

fn print_usage(program: &str) {
    eprintln!("Usage: {program} format [FILE]");
    eprintln!("       {program} phone VALUE...");
    eprintln!("       {program} compose SUBMISSION.toml [EVALUATION.txt]");
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args: Vec<String> = env::args().collect();
    let program = args.first().map_or("lead-intake", String::as_str);

    let Some(command) = Command::parse(args.get(1..).unwrap_or_default()) else {
        print_usage(program);
        process::exit(1);
    };

    let config_path = Config::config_path();
    if config_path.exists() {
        log::debug!("Using config file {}", config_path.display());
    } else {
        log::debug!("No config file at {}, using defaults", config_path.display());
    }
    let config = match Config::load_or_default() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            eprintln!("Fix or remove {}", config_path.display());
            process::exit(1);
        }
    };

    match command {
        Command::Format { input } => format_text(&config, input.as_deref()),
        Command::Phone { values } => {
            for line in mask_phones(&values) {
                println!("{line}");
            }
            Ok(())
        }
        Command::Compose {
            submission,
            evaluation,
        } => compose(&config, &submission, evaluation.as_deref()),
    }
}

fn format_text(config: &Config, input: Option<&Path>) -> Result<()> {
    let raw = match input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut raw = String::new();
            io::stdin().read_to_string(&mut raw)?;
            raw
        }
    };

    let formatter = Formatter::new(LinkStyle {
        color: config.links.color.clone(),
        break_threshold: config.links.break_threshold,
    });
    println!("{}", formatter.format(&raw));
    Ok(())
}

/// Feeds the values through one mask, as successive edits of a single field,
/// and returns one report line per value.
fn mask_phones(values: &[String]) -> Vec<String> {
    let mut mask = PhoneMask::new();
    values
        .iter()
        .map(|value| {
            let line = match mask.apply(value, Some(value.len())) {
                Some(edit) => {
                    let cursor = edit.cursor.unwrap_or_default();
                    format!("{}\t(cursor {cursor})", edit.value)
                }
                None => format!("{}\t(unchanged)", mask.previous()),
            };
            log::debug!("phone mask {value:?} -> {line:?}");
            line
        })
        .collect()
}

fn compose(config: &Config, submission_path: &Path, evaluation_path: Option<&Path>) -> Result<()> {
    let content = fs::read_to_string(submission_path)
        .with_context(|| format!("Failed to read {}", submission_path.display()))?;
    let form: SubmissionForm = toml::from_str(&content)
        .with_context(|| format!("Failed to parse {}", submission_path.display()))?;
    let submission = Submission::from_form(form)?;

    let evaluation = evaluation_path
        .map(|path| {
            fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
        })
        .transpose()?;

    let style = SummaryStyle {
        accent_color: config.summary.accent_color.clone(),
        missing_value: config.summary.missing_value.clone(),
    };
    let html = submission.summary_html(evaluation.as_deref(), &style);
    let record = SubmissionRecord::new(&submission, evaluation.as_deref(), SystemTime::now());

    fs::create_dir_all(&config.outbox_path).with_context(|| {
        format!("Failed to create outbox {}", config.outbox_path.display())
    })?;
    let html_path = config.outbox_path.join(format!("{}.html", record.id));
    let record_path = config.outbox_path.join(format!("{}.toml", record.id));
    fs::write(&html_path, html)?;
    fs::write(&record_path, toml::to_string_pretty(&record)?)?;

    log::info!("Subject: {}", submission.subject());
    log::info!("Wrote {} and {}", html_path.display(), record_path.display());
    println!("{}", record.id);
    Ok(())
}
