//! Interactive filter panel.

use std::sync::Arc;

use anyhow::{bail, Result};
use dialoguer::{Input, MultiSelect, Select};
use gym_catalog::prelude::*;

use super::{catalog, FilterArgs};
use crate::context::Context;

#[derive(Debug, Clone, Copy)]
enum Action {
    Toggle(ManufacturerList),
    ResetList(ManufacturerList),
    RemoveChip,
    Price,
    Apply,
    Reset,
    Show,
    Quit,
}

impl Action {
    fn label(&self) -> String {
        match self {
            Action::Toggle(list) => list.panel_title().to_string(),
            Action::ResetList(list) => format!("Сбросить: {}", list.panel_title()),
            Action::RemoveChip => "Remove a selected manufacturer".to_string(),
            Action::Price => "Цена".to_string(),
            Action::Apply => "Показать".to_string(),
            Action::Reset => "Сбросить".to_string(),
            Action::Show => "Show catalog".to_string(),
            Action::Quit => "Quit".to_string(),
        }
    }
}

/// Actions offered for the current panel state.
fn actions(view: &PanelView) -> Vec<Action> {
    let mut actions = vec![
        Action::Toggle(ManufacturerList::Gym),
        Action::Toggle(ManufacturerList::Parts),
        Action::Price,
    ];
    if view.layout == PanelLayout::Mobile {
        if !view.gym_reset_disabled {
            actions.push(Action::ResetList(ManufacturerList::Gym));
        }
        if !view.parts_reset_disabled {
            actions.push(Action::ResetList(ManufacturerList::Parts));
        }
    }
    if !view.chips.is_empty() {
        actions.push(Action::RemoveChip);
    }
    if !view.apply_disabled {
        actions.push(Action::Apply);
    }
    if !view.reset_disabled {
        actions.push(Action::Reset);
    }
    actions.extend([Action::Show, Action::Quit]);
    actions
}

/// Run the filter command.
pub async fn run(args: FilterArgs, ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        bail!("The filter panel is interactive; use `gym catalog --json` instead");
    }

    let router = Arc::new(MemoryRouter::from_url(&args.url));
    let page = Arc::new(ctx.catalog_page(router.clone()));
    let panel = FilterPanel::for_width(page.clone(), args.width);

    let spinner = ctx.output.spinner("Loading catalog...");
    page.mount().await;
    spinner.finish_and_clear();

    if panel.layout() == PanelLayout::Mobile {
        panel.open_popup();
    }
    ctx.output.info(&format!("{:?} filter panel", panel.layout()));

    loop {
        let view = panel.view();
        print_panel(&view, ctx);

        if view.layout == PanelLayout::Mobile && !view.popup_open {
            catalog::render(&page, &router, ctx);
            break;
        }

        let actions = actions(&view);
        let labels: Vec<String> = actions.iter().map(Action::label).collect();
        let selection = Select::new()
            .with_prompt("Filter")
            .items(&labels)
            .default(0)
            .interact()?;

        match actions[selection] {
            Action::Toggle(list) => toggle_list(&panel, &view, list)?,
            Action::ResetList(list) => panel.reset_list(list),
            Action::RemoveChip => remove_chip(&panel, &view)?,
            Action::Price => set_price(&panel, &view, ctx)?,
            Action::Apply => {
                let spinner = ctx.output.spinner("Applying filters...");
                panel.apply().await;
                spinner.finish_and_clear();
                if panel.layout() == PanelLayout::Desktop {
                    catalog::render(&page, &router, ctx);
                }
            }
            Action::Reset => {
                let spinner = ctx.output.spinner("Resetting filters...");
                panel.reset().await;
                spinner.finish_and_clear();
                catalog::render(&page, &router, ctx);
            }
            Action::Show => catalog::render(&page, &router, ctx),
            Action::Quit => break,
        }
    }

    Ok(())
}

fn print_panel(view: &PanelView, ctx: &Context) {
    ctx.output.header("Фильтры");
    for list in ManufacturerList::ALL {
        let checked: Vec<&str> = view
            .entries(list)
            .iter()
            .filter(|e| e.checked)
            .map(|e| e.title.as_str())
            .collect();
        let value = if checked.is_empty() {
            "-".to_string()
        } else {
            checked.join(", ")
        };
        ctx.output.kv(list.panel_title(), &value);
    }

    let marker = if view.price.touched { "" } else { " (not set)" };
    ctx.output.kv(
        "Цена",
        &format!("{} - {}{}", view.price.range.from, view.price.range.to, marker),
    );
}

fn toggle_list(panel: &FilterPanel, view: &PanelView, list: ManufacturerList) -> Result<()> {
    let entries = view.entries(list);
    let titles: Vec<&str> = entries.iter().map(|e| e.title.as_str()).collect();
    let defaults: Vec<bool> = entries.iter().map(|e| e.checked).collect();

    let selected = MultiSelect::new()
        .with_prompt(list.panel_title())
        .items(&titles)
        .defaults(&defaults)
        .interact()?;

    for (index, entry) in entries.iter().enumerate() {
        let checked = selected.contains(&index);
        if checked != entry.checked {
            panel.toggle(list, &entry.id, checked);
        }
    }
    Ok(())
}

fn remove_chip(panel: &FilterPanel, view: &PanelView) -> Result<()> {
    let labels: Vec<String> = view
        .chips
        .iter()
        .map(|chip| format!("{} {}", chip.list.block_title(), chip.title))
        .collect();

    let selection = Select::new()
        .with_prompt("Remove")
        .items(&labels)
        .default(0)
        .interact()?;

    panel.remove_chip(&view.chips[selection]);
    Ok(())
}

fn set_price(panel: &FilterPanel, view: &PanelView, ctx: &Context) -> Result<()> {
    let from: f64 = Input::new()
        .with_prompt("Цена от")
        .default(view.price.range.from)
        .interact_text()?;
    let to: f64 = Input::new()
        .with_prompt("Цена до")
        .default(view.price.range.to)
        .interact_text()?;

    let in_bounds = |value: f64| value.is_finite() && (0.0..=view.price_ceiling).contains(&value);
    if !in_bounds(from) || !in_bounds(to) {
        ctx.output.warn(&format!("Price must be between 0 and {}", view.price_ceiling));
        return Ok(());
    }

    panel.set_price_range(PriceRange::new(from, to));
    Ok(())
}
