use std::io;

use anyhow::Result;

use super::run_pipeline;
use crate::{apply::interactive_apply, cli::args::ApplyCommand};

pub fn apply(cmd: ApplyCommand) -> Result<()> {
    let run = run_pipeline(&cmd.common)?;

    if run.replacements.is_empty() {
        println!("Nothing to apply.");
        return Ok(());
    }

    let stdin = io::stdin();
    interactive_apply(
        &run.replacements,
        &mut stdin.lock(),
        &mut io::stdout().lock(),
    )?;

    Ok(())
}
