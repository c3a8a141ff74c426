use crate::handlers::HandlerContext;
use crate::presentation::{ViewMode, presenters};
use anyhow::Result;

pub fn handle(ctx: &HandlerContext) -> Result<()> {
    let view_model = presenters::present_guidance(ctx.config_path().exists(), &ctx.config);
    ctx.render(view_model, ViewMode::default())
}
