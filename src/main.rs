use std::process::ExitCode;

use clap::Parser;
use tracing::info;

use wingister::app::App;
use wingister::cli::Cli;
use wingister::config::Settings;
use wingister::github::GistClient;
use wingister::{GistMenuService, Result, logging};

fn main() -> ExitCode {
    let cli = Cli::parse();
    let _guard = logging::init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("wingister: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let settings = Settings::resolve(&cli);
    info!(user = %settings.username, api_base = %settings.api_base, "starting");

    let client = GistClient::new(&settings.api_base, settings.timeout)?;
    let mut service = GistMenuService::new(client);

    if cli.json {
        let model = service.fetch_gist_menu(&settings.username);
        println!("{}", serde_json::to_string_pretty(&*model)?);
        return Ok(());
    }

    let mut app = App::new(service, settings.username, cli.dir);
    let mut terminal = ratatui::init();
    let result = app.run(&mut terminal);
    ratatui::restore();

    Ok(result?)
}
