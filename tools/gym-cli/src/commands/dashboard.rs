//! Dashboard sliders.

use std::sync::Arc;

use anyhow::Result;
use gym_catalog::prelude::*;

use super::DashboardArgs;
use crate::context::Context;

/// Run the dashboard command.
pub async fn run(args: DashboardArgs, ctx: &Context) -> Result<()> {
    let page = DashboardPage::new(Arc::new(ctx.catalog_api()), ctx.notifier());

    let spinner = ctx.output.spinner("Loading dashboard...");
    page.load().await;
    spinner.finish_and_clear();

    let mut state = page.snapshot();
    if let Some(limit) = args.limit {
        state.bestsellers.rows.truncate(limit);
        state.new_arrivals.rows.truncate(limit);
    }

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "bestsellers": state.bestsellers,
            "new": state.new_arrivals,
        }));
        return Ok(());
    }

    ctx.output.header("Хиты продаж");
    ctx.output.products(&state.bestsellers.rows);

    ctx.output.header("Новинки");
    ctx.output.products(&state.new_arrivals.rows);

    Ok(())
}
