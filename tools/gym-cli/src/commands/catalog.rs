//! Catalog browsing.

use std::sync::Arc;

use anyhow::Result;
use gym_catalog::prelude::*;
use serde::Serialize;

use super::CatalogArgs;
use crate::context::Context;

/// What `gym catalog --json` prints.
#[derive(Serialize)]
struct CatalogReport<'a> {
    url: String,
    sort: SortMode,
    pagination: Pagination,
    facets: Vec<&'static str>,
    gym: Vec<String>,
    parts: Vec<String>,
    listing: &'a ProductListing,
}

/// Run the catalog command.
pub async fn run(args: CatalogArgs, ctx: &Context) -> Result<()> {
    let router = Arc::new(MemoryRouter::from_url(&args.url));
    let page = ctx.catalog_page(router.clone());

    let spinner = ctx.output.spinner("Loading catalog...");
    page.mount().await;
    if let Some(number) = args.page {
        spinner.set_message(format!("Loading page {}...", number));
        page.page_change(number.saturating_sub(1)).await;
    }
    if let Some(sort) = args.sort {
        page.change_sort(sort.into()).await;
    }
    spinner.finish_and_clear();

    render(&page, &router, ctx);
    Ok(())
}

/// Print the catalog page as it stands.
pub fn render(page: &CatalogPage, router: &MemoryRouter, ctx: &Context) {
    let state = page.snapshot();
    let listing = state.products.listing();
    let pagination = page.pagination();
    let sort = page.sort_mode();

    if ctx.output.is_json() {
        ctx.output.json(&CatalogReport {
            url: router.url(),
            sort,
            pagination,
            facets: state.active_facets.labels(),
            gym: state.manufacturers.checked_titles(ManufacturerList::Gym),
            parts: state.manufacturers.checked_titles(ManufacturerList::Parts),
            listing,
        });
        return;
    }

    ctx.output.header("Каталог");
    ctx.output.kv("url", &router.url());
    ctx.output.kv("sort", sort.display_name());
    ctx.output.kv(
        "page",
        &format!(
            "{} / {} ({} parts)",
            pagination.page + 1,
            pagination.total_pages.max(1),
            pagination.total
        ),
    );
    if state.filters_in_query() {
        ctx.output.kv("filters", &state.active_facets.labels().join(", "));
    }

    for list in ManufacturerList::ALL {
        let titles = state.manufacturers.checked_titles(list);
        if !titles.is_empty() {
            ctx.output.kv(list.block_title(), &titles.join(", "));
        }
    }
    if state.price.touched {
        ctx.output.kv(
            "price",
            &format!("{} - {}", state.price.range.from, state.price.range.to),
        );
    }

    println!();
    ctx.output.products(&listing.rows);

    for nav in router.history() {
        ctx.output.debug(&format!("{:?} {}", nav.kind, nav.url));
    }
}
