use clap::Parser;
use questlog::cli::commands::{Cli, Commands};
use questlog::cli::handlers;

fn main() {
    let cli = Cli::parse();
    let dir = cli.dir.clone();

    match cli.command {
        None => {
            // No subcommand → launch TUI
            if let Err(e) = questlog::tui::run(dir.as_deref()) {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
        Some(Commands::Init(args)) => {
            // Init is handled before directory discovery
            if let Err(e) = handlers::cmd_init(args) {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
        Some(_) => {
            if let Err(e) = handlers::dispatch(cli) {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
    }
}
