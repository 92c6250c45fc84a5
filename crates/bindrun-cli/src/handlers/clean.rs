//! Clean command handler

use super::utils::WorkspaceContext;
use crate::error::Result;
use crate::output::OutputWriter;
use bindrun_core::outdir;
use tracing::instrument;

/// Handle the clean command: just the output-directory reset, no
/// generator invocation.
#[instrument(skip(ctx, output))]
pub fn handle_clean(ctx: &WorkspaceContext, output: &mut OutputWriter) -> Result<()> {
    let layout = ctx.layout(None, None);
    outdir::reset(&layout.bindings_dir)?;
    output.success(&format!("✓ Cleared {}", layout.bindings_dir.display()))?;
    Ok(())
}
