//! # Command Line Interface
//! 
//! The command tree is in `cli.rs`, subcommands are run from the `commands` module.

mod cli;

use env_logger;
#[cfg(windows)]
use colored;
use log::error;
use bbckit::commands;
use bbckit::commands::CommandError;

fn main() -> Result<(),Box<dyn std::error::Error>>
{
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    #[cfg(windows)]
    let _ = colored::control::set_virtual_terminal(true);
    let main_cmd = cli::build_cli();
    let matches = main_cmd.clone().get_matches();

    // Detokenize a BBC BASIC program

    if let Some(cmd) = matches.subcommand_matches("detokenize") {
        return commands::detokenize::detokenize(cmd);
    }

    // Shell completions

    if let Some(cmd) = matches.subcommand_matches("completions") {
        return commands::completions::generate(main_cmd,cmd);
    }

    error!("No subcommand was found, try `bbckit --help`");
    return Err(Box::new(CommandError::InvalidCommand));
}
