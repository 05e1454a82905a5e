//! Entry point: parse CLI, scrape careers, merge onto the roster.

use clap::Parser;
use serde_json::{json, Map, Value};
use tracing::info;
use tracing_subscriber::EnvFilter;

use cfb_careers::{
    batch::{BatchReport, Orchestrator},
    cli::Cli,
    fetch::HttpTransport,
    roster::Roster,
    Result, ScrapeError,
};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let roster = Roster::load(&cli.input, cli.insecure_input).await?;
    let names = roster.player_names();
    info!(players = names.len(), "roster loaded");

    let config = cli.scrape_config();
    let transport = HttpTransport::new(&config.user_agent)?;
    let orchestrator = Orchestrator::new(transport, config);
    let report = orchestrator.run(&names).await;

    if report.records.is_empty() {
        return Err(ScrapeError::NoData);
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report_json(&report))?);
    } else {
        roster.write_augmented(&report.records, &cli.output)?;
        info!(
            output = %cli.output.display(),
            players = report.records.len(),
            skipped = report.failures.len(),
            "done"
        );
    }
    Ok(())
}

fn report_json(report: &BatchReport) -> Value {
    let players: Vec<Value> = report
        .records
        .iter()
        .map(|record| {
            let mut map = Map::new();
            map.insert("player".to_string(), json!(record.player_name));
            for (name, value) in &record.fields {
                map.insert(name.clone(), json!(value));
            }
            Value::Object(map)
        })
        .collect();
    json!({ "players": players, "failures": report.failures })
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "cfb_careers=debug,info" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
