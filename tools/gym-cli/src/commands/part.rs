//! Part detail.

use std::sync::Arc;

use anyhow::{bail, Result};
use gym_catalog::prelude::*;

use super::PartArgs;
use crate::context::Context;
use crate::output::stock_badge;

/// Run the part command.
pub async fn run(args: PartArgs, ctx: &Context) -> Result<()> {
    let page = PartPage::new(Arc::new(ctx.catalog_api()), ctx.notifier());

    let spinner = ctx.output.spinner(&format!("Loading part {}...", args.id));
    let view = page.load(args.id).await;
    spinner.finish_and_clear();

    let product = match view {
        PartView::Found(product) => product,
        PartView::NotFound => {
            if ctx.output.is_json() {
                ctx.output.json(&serde_json::Value::Null);
            } else {
                ctx.output.warn(&format!("Part {} not found", args.id));
            }
            return Ok(());
        }
        // The notifier has already printed the cause.
        PartView::Loading => bail!("Could not load part {}", args.id),
    };

    if ctx.output.is_json() {
        ctx.output.json(&product);
        return Ok(());
    }

    ctx.output.header(&page.title());
    ctx.output.kv("Артикул", &product.vendor_code);
    ctx.output.kv("Цена", &format!("{} ₽", product.price_display()));
    ctx.output.kv("В наличии", &stock_badge(&product));
    ctx.output.kv("Производитель тренажера", &product.gym_manufacturer);
    ctx.output.kv("Производитель запчасти", &product.parts_manufacturer);
    if !product.compatibility.is_empty() {
        ctx.output.kv("Совместимость", &product.compatibility);
    }
    if product.bestseller {
        ctx.output.list_item("Хит продаж");
    }
    if product.is_new {
        ctx.output.list_item("Новинка");
    }

    if !product.description.is_empty() {
        println!("\n{}", product.description);
    }

    let images = product.image_urls();
    if !images.is_empty() {
        ctx.output.header("Images");
        for url in &images {
            ctx.output.list_item(url);
        }
    }

    Ok(())
}
