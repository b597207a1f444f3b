// Binary entry point for the commute calculator.
use anyhow::Result;
use arbeitsweg::cli;
use arbeitsweg::client::MapsClient;
use arbeitsweg::comparator::{CommuteCalculator, PanelOutcome};
use arbeitsweg::config::Config;
use arbeitsweg::panels::PanelRegistry;
use arbeitsweg::paths::AppPaths;
use arbeitsweg::report;
use simplelog::{ColorChoice, CombinedLogger, LevelFilter, TermLogger, TerminalMode, WriteLogger};
use std::env;
use std::fs::File;

#[derive(Default)]
struct CliArgs {
    query: Option<String>,
    home: Option<String>,
    work: Option<String>,
    start: Option<String>,
    end: Option<String>,
    from: Option<String>,
    to: Option<String>,
}

fn parse_args(args: &[String]) -> Result<Option<CliArgs>> {
    let mut parsed = CliArgs::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        let target = match arg.as_str() {
            "--help" | "-h" | "help" => return Ok(None),
            "--query" => &mut parsed.query,
            "--home" => &mut parsed.home,
            "--work" => &mut parsed.work,
            "--start" => &mut parsed.start,
            "--end" => &mut parsed.end,
            "--from" => &mut parsed.from,
            "--to" => &mut parsed.to,
            other => {
                anyhow::bail!("Unknown argument '{}' (see --help)", other);
            }
        };
        let value = iter
            .next()
            .ok_or_else(|| anyhow::anyhow!("Missing value for '{}'", arg))?;
        *target = Some(value.clone());
    }
    Ok(Some(parsed))
}

fn init_logging(config: &Config) {
    let level = match config.log_level.as_str() {
        "error" => LevelFilter::Error,
        "warn" => LevelFilter::Warn,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        _ => LevelFilter::Info,
    };

    let term = TermLogger::new(
        level,
        simplelog::Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );

    let result = match AppPaths::get_log_file_path().and_then(|p| Ok(File::create(p)?)) {
        Ok(file) => CombinedLogger::init(vec![
            term,
            WriteLogger::new(LevelFilter::Debug, simplelog::Config::default(), file),
        ]),
        Err(_) => CombinedLogger::init(vec![term]),
    };
    if result.is_err() {
        eprintln!("Logger already initialized");
    }
}

/// Loads the config, writing the default file on first run so the user has
/// something to put the API key into.
fn load_or_create_config() -> Result<Config> {
    match Config::load() {
        Ok(config) => Ok(config),
        Err(e) if Config::is_missing_config_error(&e) => {
            let config = Config::default();
            config.save()?;
            anyhow::bail!(
                "No config found. A default was written to {} - set api_key and rerun.",
                Config::get_path_string()?
            );
        }
        Err(e) => Err(e),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let argv: Vec<String> = env::args().collect();
    let binary_name = argv
        .first()
        .map(|s| s.as_str())
        .unwrap_or("arbeitsweg")
        .to_string();

    let Some(args) = parse_args(&argv[1..])? else {
        cli::print_help(&binary_name);
        return Ok(());
    };

    let config = load_or_create_config()?;
    init_logging(&config);

    if config.api_key.is_empty() {
        anyhow::bail!(
            "api_key is empty in {} - a routing-provider key is required.",
            Config::get_path_string()?
        );
    }

    let mut registry = match &args.query {
        Some(query) => PanelRegistry::from_query_string(query, &config),
        None => PanelRegistry::new(&config),
    };

    // CLI overrides: addresses patch the first panel, times and the date
    // range apply to every panel.
    if let Some(first) = registry.panels_mut().first_mut() {
        if let Some(home) = &args.home {
            first.home_address = home.clone();
        }
        if let Some(work) = &args.work {
            first.work_address = work.clone();
        }
    }
    for panel in registry.panels_mut() {
        if let Some(start) = &args.start {
            panel.work_start = chrono::NaiveTime::parse_from_str(start, "%H:%M")
                .map_err(|e| anyhow::anyhow!("Invalid --start '{}': {}", start, e))?;
        }
        if let Some(end) = &args.end {
            panel.work_end = chrono::NaiveTime::parse_from_str(end, "%H:%M")
                .map_err(|e| anyhow::anyhow!("Invalid --end '{}': {}", end, e))?;
        }
        if let Some(from) = &args.from {
            panel.start_date = Some(from.clone());
        }
        if let Some(to) = &args.to {
            panel.end_date = Some(to.clone());
        }
    }

    let client = MapsClient::new(&config.endpoint, &config.api_key);
    let calculator = CommuteCalculator::new(&client, config.reference_date());

    for (index, panel) in registry.panels().iter().enumerate() {
        println!("=== Berechnung {} ===", index + 1);
        println!("Von: {}", panel.home_address);
        println!("Nach: {}", panel.work_address);
        println!();

        // A geocoding failure clears the panel to placeholders; every other
        // failure already degraded to its own section inside calculate().
        let outcome = match calculator.calculate(panel).await {
            Ok(outcome) => outcome,
            Err(e) => {
                log::error!("Berechnung {} failed: {}", index + 1, e);
                PanelOutcome::default()
            }
        };
        println!("{}", report::render_panel(&outcome));
    }

    Ok(())
}
