use std::fs;
use std::process::ExitCode;

use clap::Parser;
use serde::Deserialize;
use tracing::{error, info};

use classgen::cli::Args;
use classgen::config::Config;
use classgen::logging::setup_logging;
use classgen::scheduling::sat::BacktrackingSolver;
use classgen::scheduling::{FindSchedulesRequest, InMemoryCatalog, Schedule, Section, find_schedules};

/// On-disk shape of `--catalog`: one term's worth of sections, loaded into
/// an `InMemoryCatalog` (spec §1: catalog persistence is an external
/// collaborator; this is the toy stand-in for local experimentation).
#[derive(Debug, Deserialize)]
struct CatalogFixture {
    term: String,
    sections: Vec<Section>,
}

/// The produced response shape (spec §6.3): sections plus `more_like_this`
/// identifiers, leaving paging/envelope to the (out-of-scope) surrounding
/// service.
#[derive(Debug, serde::Serialize)]
struct ScheduleResponse<'a> {
    sections: &'a [Section],
    more_like_this: &'a [String],
}

fn response(schedules: &[Schedule]) -> Vec<ScheduleResponse<'_>> {
    schedules
        .iter()
        .map(|schedule| ScheduleResponse {
            sections: schedule.sections(),
            more_like_this: schedule.more_like_this(),
        })
        .collect()
}

fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let args = Args::parse();

    let config: Config = figment::Figment::new()
        .merge(figment::providers::Env::raw())
        .extract()
        .unwrap_or_default();
    setup_logging(&config);

    info!(
        version = env!("CARGO_PKG_VERSION"),
        "starting schedule generation"
    );

    let fixture_text = match fs::read_to_string(&args.catalog) {
        Ok(text) => text,
        Err(err) => {
            error!(path = ?args.catalog, %err, "failed to read catalog fixture");
            return ExitCode::FAILURE;
        }
    };
    let fixture: CatalogFixture = match serde_json::from_str(&fixture_text) {
        Ok(fixture) => fixture,
        Err(err) => {
            error!(path = ?args.catalog, %err, "failed to parse catalog fixture");
            return ExitCode::FAILURE;
        }
    };

    let request_text = match fs::read_to_string(&args.request) {
        Ok(text) => text,
        Err(err) => {
            error!(path = ?args.request, %err, "failed to read request");
            return ExitCode::FAILURE;
        }
    };
    let request: FindSchedulesRequest = match serde_json::from_str(&request_text) {
        Ok(request) => request,
        Err(err) => {
            error!(path = ?args.request, %err, "failed to parse request");
            return ExitCode::FAILURE;
        }
    };

    let mut catalog = InMemoryCatalog::new();
    catalog.load_term(fixture.term, fixture.sections);

    let num_schedules = args.num_schedules.unwrap_or(config.default_num_schedules);
    let schedules = find_schedules(
        &request,
        &catalog,
        &BacktrackingSolver,
        num_schedules,
        config.similarity_threshold,
    );

    info!(count = schedules.len(), "schedule generation complete");
    match serde_json::to_string_pretty(&response(&schedules)) {
        Ok(json) => println!("{json}"),
        Err(err) => {
            error!(%err, "failed to serialize response");
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}
