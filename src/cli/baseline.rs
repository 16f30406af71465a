use clap::{Parser, Subcommand};

use crate::{session::Session, state::Mode, storage::Storage};

#[derive(Parser)]
pub struct BaselineArgs {
    #[command(subcommand)]
    command: BaselineCommand,
}

impl BaselineArgs {
    pub fn run<S: Storage>(self, session: &mut Session<S>) {
        match self.command {
            BaselineCommand::Set { mode } => session.set_baseline(mode),
            BaselineCommand::Clear { mode } => session.clear_baseline(mode),
        }
    }
}

#[derive(Subcommand)]
enum BaselineCommand {
    /// Freeze the current parameters as the baseline.
    Set {
        #[clap(value_enum)]
        mode: Mode,
    },

    /// Drop the baseline.
    Clear {
        #[clap(value_enum)]
        mode: Mode,
    },
}
