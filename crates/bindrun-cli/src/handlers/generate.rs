//! Generate command handler

use super::utils::WorkspaceContext;
use crate::cli::GenerateArgs;
use crate::error::Result;
use crate::output::OutputWriter;
use bindrun_core::Generator;
use std::time::Instant;
use tracing::{info, instrument};

/// Handle the generate command
#[instrument(skip(ctx, output), fields(dry_run = args.dry_run))]
pub fn handle_generate(
    args: GenerateArgs,
    ctx: &WorkspaceContext,
    output: &mut OutputWriter,
) -> Result<()> {
    let layout = ctx.layout(args.profile, args.library_name.as_deref());
    let generator = Generator::new(layout);

    if args.dry_run {
        output.info("Dry run; nothing will be written")?;
        output.writeln(&generator.invocation().display())?;
        return Ok(());
    }

    info!(
        library = %generator.layout().library_file.display(),
        "starting binding generation"
    );

    let spinner = output.spinner("Generating bindings...");
    let started = Instant::now();
    let result = generator.run();
    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }
    result?;

    output.success(&format!(
        "✓ Bindings written to {} in {:.2}s",
        generator.layout().bindings_dir.display(),
        started.elapsed().as_secs_f64()
    ))?;

    Ok(())
}
