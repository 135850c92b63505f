use anyhow::Result;

use super::super::args::FamiliesCommand;
use super::{CommandResult, CommandSummary, FamiliesSummary};
use crate::core::{RunContext, sync::discover};

pub fn families(cmd: FamiliesCommand) -> Result<CommandResult> {
    let ctx = RunContext::new(&cmd.common, None)?;
    let (families, _) = discover(&ctx);

    Ok(CommandResult {
        summary: CommandSummary::Families(FamiliesSummary {
            root: ctx.root,
            registry: ctx.registry,
            families,
        }),
        error_count: 0,
        exit_on_errors: false,
    })
}
