mod app;
mod books;
mod config;
mod modals;
mod paths;
mod toast;

use std::fs::{self, File};

use log::{info, LevelFilter};
use simplelog::WriteLogger;
use verne_api::VerneClient;
use verne_dom::Terminal;

use crate::app::App;
use crate::config::Config;

fn init_logging() {
    paths::rotate_logs();
    let Some(path) = paths::log_file() else { return };
    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }
    if let Ok(file) = File::create(&path) {
        let _ = WriteLogger::init(LevelFilter::Debug, simplelog::Config::default(), file);
    }
}

#[tokio::main]
async fn main() {
    init_logging();

    let config = Config::from_env();
    info!("starting with api url {}", config.api_url);

    let client = match VerneClient::new(&config.api_url) {
        Ok(client) => client,
        Err(err) => {
            eprintln!("invalid VERNE_API_URL: {err}");
            std::process::exit(2);
        }
    };

    let terminal = match Terminal::new() {
        Ok(terminal) => terminal,
        Err(err) => {
            eprintln!("failed to initialize terminal: {err}");
            std::process::exit(1);
        }
    };

    if let Err(err) = App::new(client, terminal).run().await {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
