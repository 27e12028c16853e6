mod cli;

use std::process;
use clap::Parser;
use mkfont::{generate, Config, Error, Result};
use mkfont::utils::init_logging;
use cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    let config = Config::new(cli.debug);
    init_logging(&config);

    if let Err(err) = run(cli.command, &config) {
        println!("{}", err);
        process::exit(1);
    }
}

fn run(command: Command, config: &Config) -> Result<()> {
    match command {
        Command::Ui => Err(Error::Unsupported(
            "the drag-and-drop front end is not part of this build; use `mkfont package <path> [output]`"
                .to_string(),
        )),
        Command::Package { path, output } => {
            let output_path = generate(&[path], output.as_deref(), config)?;
            println!("Generated package(s) here:");
            println!("{}", output_path.display());
            Ok(())
        }
    }
}
