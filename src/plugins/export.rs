//! Export plugin: renders the paragraph list through the format renderers.

use serde::Deserialize;

use crate::export::{render, ExportFormat};
use crate::plugins::{Plugin, PluginCategory, PluginContext, PluginInfo, PluginOutput};
use crate::Result;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExportOptions {
    pub format: ExportFormat,
}

pub struct Export;

impl Plugin for Export {
    fn info(&self) -> PluginInfo {
        PluginInfo {
            name: "export",
            description: "Render the transcript as text, markdown, srt, json, or html",
            category: PluginCategory::Output,
        }
    }

    fn execute(&self, ctx: PluginContext<'_>) -> Result<PluginOutput> {
        let opts: ExportOptions = ctx.parse_options()?;
        let rendered = render(ctx.paragraphs, opts.format)?;
        Ok(PluginOutput::Export(rendered))
    }
}
