//! Paths command handler

use super::utils::WorkspaceContext;
use crate::cli::OutputFormat;
use crate::error::Result;
use crate::output::OutputWriter;
use bindrun_core::{Layout, Platform, RootSource};
use serde::Serialize;
use tracing::instrument;

/// Resolved layout plus how it was resolved, for machine output.
#[derive(Serialize)]
struct PathsReport<'a> {
    platform: Platform,
    root_source: RootSource,
    #[serde(flatten)]
    layout: &'a Layout,
}

/// Handle the paths command: print the resolved layout without touching
/// the filesystem.
#[instrument(skip(ctx, output))]
pub fn handle_paths(ctx: &WorkspaceContext, output: &mut OutputWriter) -> Result<()> {
    let layout = ctx.layout(None, None);

    match output.format() {
        OutputFormat::Json => output.data(&PathsReport {
            platform: ctx.platform,
            root_source: ctx.root_source,
            layout: &layout,
        }),
        OutputFormat::Human => {
            output.writeln(&format!("platform:        {}", ctx.platform))?;
            output.writeln(&format!("root:            {}", layout.root.display()))?;
            output.writeln(&format!("bindings dir:    {}", layout.bindings_dir.display()))?;
            output.writeln(&format!("binaries dir:    {}", layout.binaries_dir.display()))?;
            output.writeln(&format!("library:         {}", layout.library_file.display()))?;
            output.writeln(&format!("generator:       {}", layout.generator.display()))?;
            output.writeln(&format!("bindgen config:  {}", layout.bindgen_config.display()))
        }
    }
}
