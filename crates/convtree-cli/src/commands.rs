use crate::args::{Cli, Commands};
use crate::handlers;
use anyhow::Result;

pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Show {
            file,
            index,
            full,
            ids,
        } => handlers::show::handle(&file, index, full, ids),

        Commands::List { file, format } => handlers::list::handle(&file, format),
    }
}
