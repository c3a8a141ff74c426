use crate::args::ViewModeArgs;
use crate::handlers::HandlerContext;
use crate::presentation::presenters;
use anyhow::{Context, Result};
use pagekit_engine::{headings_from_markdown, index_headings};
use std::path::Path;

pub fn handle(
    ctx: &HandlerContext,
    file: &Path,
    max_depth: Option<u32>,
    fragment: Option<String>,
    lang: Option<String>,
    view_mode: &ViewModeArgs,
) -> Result<()> {
    let catalog = ctx.catalog(lang.as_deref())?;

    let markdown = std::fs::read_to_string(file)
        .with_context(|| format!("failed to read {}", file.display()))?;

    let nodes = headings_from_markdown(&markdown);
    let max_depth = max_depth.unwrap_or(ctx.config.toc.max_depth);
    let index = index_headings(&nodes, Some(max_depth));

    let view_model = presenters::present_toc(
        &file.display().to_string(),
        &index,
        max_depth,
        fragment.as_deref(),
        &catalog,
    );
    ctx.render(view_model, view_mode.resolve())
}
