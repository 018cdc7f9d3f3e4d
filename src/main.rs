use clap::Parser;

mod cli;
mod commands;
mod domain;
mod services;

pub use cli::*;
pub use commands::*;
pub use domain::constants::*;
pub use domain::errors::SpecError;
pub use domain::models::*;
pub use services::apply::apply_to_files;
pub use services::bits::BitPattern;
pub use services::logging::init_logging;
pub use services::output::{notice, print_one, print_out};
pub use services::prompt::confirm;
pub use services::resolver::{apply_whitespace_policy, resolve_sources};
pub use services::scan::{collect_targets, default_exclusions};
pub use services::storage::{audit, load_config, resolve_options};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if handle_header_commands(&cli)? {
        return Ok(());
    }
    if handle_fixture_commands(&cli)? {
        return Ok(());
    }

    Ok(())
}
