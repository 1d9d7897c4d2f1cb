use anyhow::Result;
use chunk_organize::cli::{Cli, run_command};
use chunk_organize::config::Config;
use chunk_organize::init;
use chunk_organize::menu::{print_goodbye, show_main_menu};
use clap::Parser;
use console::{Term, style};
use log::{info, warn};

fn main() -> Result<()> {
    init::init();
    let cli = Cli::parse();

    // Load config and set locale
    let mut config = Config::new();
    rust_i18n::set_locale(config.settings.language.as_str());

    if let Some(command) = &cli.command {
        return run_command(command, &config.settings);
    }

    let term = Term::stdout();
    loop {
        match show_main_menu(&term, &mut config) {
            Ok(true) => {}
            Ok(false) => {
                term.clear_screen()?;
                print_goodbye();
                info!("Program exited normally");
                break;
            }
            Err(e) => {
                warn!("Program error: {e}");
                eprintln!("{} {:#}", style("Error:").red().bold(), e);
                break;
            }
        }
    }

    Ok(())
}
