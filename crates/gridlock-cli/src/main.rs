//! Gridlock CLI: the `gridlock` command.

mod cli;
mod commands;
mod support;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Process { command } => commands::process::run(command),

        Commands::Resource { command } => commands::resource::run(command),

        Commands::Hold { command } => commands::hold::run(command),

        Commands::Wait { command } => commands::wait::run(command),

        Commands::Scenario { command } => commands::scenario::run(command),

        Commands::Reset { model, json } => commands::reset::run(model, json),

        Commands::Show { model, json } => commands::show::run(model, json),

        Commands::Detect { model, json } => commands::detect::run(model, json),

        Commands::Trace { step, model, json } => commands::trace::run(step, model, json),

        Commands::Report { model, json } => commands::report::run(model, json),
    }
}
