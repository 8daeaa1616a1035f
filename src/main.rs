use clap::Parser;
use read_time::adapters::json;
use read_time::utils::{logger, validation::Validate};
use read_time::{CliConfig, ReadTime, ReadTimeError, ReadTimeExtension, Settings, Subject, Value};
use std::io::Read;

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::debug!("CLI config: {:?}", cli);

    let (extension, read_time) = match run(&cli) {
        Ok(result) => result,
        Err(e) => {
            tracing::error!("Read time failed: {} (Category: {:?})", e, e.category());
            eprintln!("{}", e.user_friendly_message());
            std::process::exit(e.exit_code());
        }
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&read_time)?);
    } else {
        println!("{}", extension.render(&read_time));
    }

    Ok(())
}

type DefaultExtension = ReadTimeExtension<read_time::TypeNameClassifier, read_time::WhitespaceAnalyzer>;

fn run(cli: &CliConfig) -> read_time::Result<(DefaultExtension, ReadTime)> {
    let mut settings = match &cli.config {
        Some(path) => Settings::from_file(path).map_err(|e| {
            tracing::error!("Failed to load settings from {}", path.display());
            config_error(e)
        })?,
        None => Settings::default(),
    };
    cli.apply(&mut settings);
    settings.validate()?;

    let raw = read_input(cli)?;
    let value = if cli.filter {
        Value::Text(raw)
    } else {
        json::parse_document(&raw)?
    };

    let extension = ReadTimeExtension::from_settings(&settings)?;
    let read_time = if cli.filter {
        extension.read_time_filter(&value, None)?
    } else {
        extension.read_time(Subject::from(&value), None)?
    };

    tracing::info!(
        "Estimated {} seconds at {} words per minute",
        read_time.total_seconds(),
        settings.reading.words_per_minute
    );

    Ok((extension, read_time))
}

// A settings file that cannot be read is a configuration problem, not an
// input one.
fn config_error(e: ReadTimeError) -> ReadTimeError {
    match e {
        ReadTimeError::IoError(io) => ReadTimeError::ConfigValidationError {
            field: "config".to_string(),
            message: io.to_string(),
        },
        other => other,
    }
}

fn read_input(cli: &CliConfig) -> read_time::Result<String> {
    match &cli.input {
        Some(path) => Ok(std::fs::read_to_string(path)?),
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}
