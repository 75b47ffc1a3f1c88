use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use cricket_stats::{
    chart::{file_stem, write_charts},
    client::HttpClient,
    cricbuzz::Cricbuzz,
    pipeline::fetch_player_record,
    report::{self, Failure},
};
use inquire::{InquireError, Text};
use log::{debug, LevelFilter};

#[derive(Parser)]
struct Opts {
    /// Player to look up; asked for interactively when omitted
    player_name: Option<String>,
    /// Directory the SVG charts are written to
    #[arg(long, default_value = ".")]
    chart_dir: PathBuf,
    /// Only print the statistics; write no charts
    #[arg(long)]
    no_charts: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    pretty_env_logger::formatted_builder()
        .filter_level(LevelFilter::Warn)
        .parse_default_env()
        .init();

    let opts = Opts::parse();
    let player_name = match opts.player_name {
        Some(player_name) => player_name,
        None => match Text::new("Enter player name:").prompt() {
            Ok(player_name) => player_name,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {
                return Ok(ExitCode::FAILURE)
            }
            Err(e) => return Err(e.into()),
        },
    };

    let client = HttpClient::new()?;
    let record = match fetch_player_record::<Cricbuzz>(&client, &player_name).await {
        Ok(scraped) => scraped.value,
        Err(e) => {
            debug!("{e:?}");
            println!("{}", Failure(&e));
            return Ok(ExitCode::FAILURE);
        }
    };

    report::print(&record);
    if !opts.no_charts {
        let stem = file_stem(
            record
                .name()
                .as_ref()
                .map_or(player_name.as_str(), |name| name.as_ref()),
        );
        for path in write_charts(&record, &opts.chart_dir, &stem)? {
            println!("Saved chart to {}", path.display());
        }
    }
    Ok(ExitCode::SUCCESS)
}
