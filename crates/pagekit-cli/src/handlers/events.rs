use crate::args::ViewModeArgs;
use crate::handlers::HandlerContext;
use crate::presentation::presenters;
use anyhow::{Context, Result};
use pagekit_runtime::EventsPanel;
use pagekit_sources::{EventSource, source_from_endpoint};

pub fn handle(
    ctx: &HandlerContext,
    endpoint: Option<String>,
    lang: Option<String>,
    view_mode: &ViewModeArgs,
) -> Result<()> {
    let catalog = ctx.catalog(lang.as_deref())?;

    let source = match endpoint.as_deref() {
        Some(endpoint) => source_from_endpoint(endpoint)?,
        None => ctx.config.events_source()?,
    };
    let description = source.describe();
    tracing::debug!(source = %description, "loading events");

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to start the async runtime")?;

    let state = runtime.block_on(async move {
        let mut panel = EventsPanel::mount(source);
        panel.settled().await
    });

    let view_model = presenters::present_events_panel(
        &state,
        &catalog,
        description,
        ctx.config.events.discord_url.clone(),
    );
    ctx.render(view_model, view_mode.resolve())
}
