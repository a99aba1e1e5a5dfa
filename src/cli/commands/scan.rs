use anyhow::Result;

use super::run_pipeline;
use crate::{cli::args::ScanCommand, report};

pub fn scan(cmd: ScanCommand) -> Result<()> {
    let run = run_pipeline(&cmd.common)?;

    report::print_replacements(&run.replacements, cmd.common.verbose);

    if let Some(report_path) = &cmd.report {
        report::export_csv(report_path, &run.replacements)?;
        println!("Exported report to {}", report_path.display());
    }

    Ok(())
}
