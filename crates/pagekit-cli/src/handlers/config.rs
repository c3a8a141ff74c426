use crate::handlers::HandlerContext;
use crate::presentation::{ViewMode, presenters};
use anyhow::Result;

pub fn show(ctx: &HandlerContext) -> Result<()> {
    let view_model = presenters::present_config(ctx.data_dir(), &ctx.config_path(), &ctx.config);
    ctx.render(view_model, ViewMode::default())
}
