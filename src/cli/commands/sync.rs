use anyhow::{Result, bail};

use super::super::args::SyncCommand;
use super::{CommandResult, CommandSummary, SyncSummary};
use crate::{
    backend::{CommandBackend, TranslationBackend},
    config::CONFIG_FILE_NAME,
    core::{RunContext, run_sync},
};

pub fn sync(cmd: SyncCommand) -> Result<CommandResult> {
    let args = &cmd.args;
    let ctx = RunContext::new(&args.common, args.changed_files.as_deref())?;

    let backend = if args.apply {
        let Some(config) = &ctx.backend else {
            bail!(
                "--apply requires a translation backend: set 'backend.command' in {}",
                CONFIG_FILE_NAME
            );
        };
        Some(CommandBackend::new(
            config.command.clone(),
            config.args.clone(),
            &ctx.root,
        ))
    } else {
        None
    };

    let report = run_sync(
        &ctx,
        backend.as_ref().map(|b| b as &dyn TranslationBackend),
    );
    let error_count = report.problem_count();

    Ok(CommandResult {
        summary: CommandSummary::Sync(SyncSummary {
            changed_file_count: ctx.changes.len(),
            scan_dirs: ctx.scan_dirs,
            registry: ctx.registry,
            root: ctx.root,
            report,
        }),
        error_count,
        exit_on_errors: true,
    })
}
