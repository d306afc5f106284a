mod app;
mod cli;
mod config;
mod consts;
mod error;
mod hook;
mod output;
mod terminal;
mod title;
mod transcript;
mod utils;

use clap::Parser;

use cli::{Cli, Commands};
use config::Config;
use utils::set_debug;

fn main() {
    let cli = Cli::parse();

    // Hooks run inside the host session; stay quiet unless debugging
    let config = if cli.debug {
        Config::load()
    } else {
        Config::load_quiet()
    };
    let cli = cli.with_config(&config);
    set_debug(cli.debug);

    match cli.command {
        Commands::Title { stdout } => {
            let code = app::handle_title(&cli, stdout);
            if code != 0 {
                std::process::exit(code);
            }
        }
        Commands::Statusline { json } => app::handle_statusline(&cli, json),
    }
}
