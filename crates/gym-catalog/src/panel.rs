//! Filter panel view model.
//!
//! The desktop panel sits beside the list; the mobile one is a popup with
//! per-list "reset all" buttons that closes itself on apply. Both render
//! from the same [`PanelView`] and mutate state only through the catalog
//! page.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use serde::Serialize;

use crate::catalog::{ManufacturerEntry, ManufacturerList};
use crate::ids::ManufacturerId;
use crate::limits::CatalogLimits;
use crate::pages::CatalogPage;
use crate::search::PriceRange;
use crate::store::PriceFilter;

/// Panel variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelLayout {
    Desktop,
    Mobile,
}

impl PanelLayout {
    /// Mobile at or below the breakpoint.
    pub fn for_width(width: u32, limits: &CatalogLimits) -> Self {
        if width <= limits.mobile_breakpoint {
            PanelLayout::Mobile
        } else {
            PanelLayout::Desktop
        }
    }
}

/// A checked manufacturer shown in the block above the list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManufacturerChip {
    pub list: ManufacturerList,
    pub id: ManufacturerId,
    pub title: String,
}

/// Everything the panel renders.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanelView {
    pub layout: PanelLayout,
    pub popup_open: bool,
    pub gym: Vec<ManufacturerEntry>,
    pub parts: Vec<ManufacturerEntry>,
    pub price: PriceFilter,
    pub price_ceiling: f64,
    pub apply_disabled: bool,
    pub reset_disabled: bool,
    /// Per-list "reset all" (mobile only), disabled when nothing is checked.
    pub gym_reset_disabled: bool,
    pub parts_reset_disabled: bool,
    pub chips: Vec<ManufacturerChip>,
}

impl PanelView {
    pub fn entries(&self, list: ManufacturerList) -> &[ManufacturerEntry] {
        match list {
            ManufacturerList::Gym => &self.gym,
            ManufacturerList::Parts => &self.parts,
        }
    }
}

pub struct FilterPanel {
    page: Arc<CatalogPage>,
    layout: PanelLayout,
    popup_open: AtomicBool,
}

impl FilterPanel {
    pub fn new(page: Arc<CatalogPage>, layout: PanelLayout) -> Self {
        Self {
            page,
            layout,
            popup_open: AtomicBool::new(false),
        }
    }

    /// Pick the layout from the viewport width.
    pub fn for_width(page: Arc<CatalogPage>, width: u32) -> Self {
        let layout = PanelLayout::for_width(width, page.limits());
        Self::new(page, layout)
    }

    pub fn layout(&self) -> PanelLayout {
        self.layout
    }

    pub fn open_popup(&self) {
        self.popup_open.store(true, Ordering::SeqCst);
    }

    pub fn close_popup(&self) {
        self.popup_open.store(false, Ordering::SeqCst);
    }

    pub fn view(&self) -> PanelView {
        let state = self.page.snapshot();
        let reset_disabled = state.reset_disabled();

        let chips = ManufacturerList::ALL
            .into_iter()
            .flat_map(|list| {
                state.manufacturers.checked(list).map(move |e| ManufacturerChip {
                    list,
                    id: e.id.clone(),
                    title: e.title.clone(),
                })
            })
            .collect();

        PanelView {
            layout: self.layout,
            popup_open: self.popup_open.load(Ordering::SeqCst),
            gym: state.manufacturers.entries(ManufacturerList::Gym).to_vec(),
            parts: state.manufacturers.entries(ManufacturerList::Parts).to_vec(),
            price: state.price,
            price_ceiling: self.page.limits().price_ceiling,
            apply_disabled: state.filters_busy || reset_disabled,
            reset_disabled,
            gym_reset_disabled: !state.manufacturers.any_checked(ManufacturerList::Gym),
            parts_reset_disabled: !state.manufacturers.any_checked(ManufacturerList::Parts),
            chips,
        }
    }

    pub fn toggle(&self, list: ManufacturerList, id: &ManufacturerId, checked: bool) -> bool {
        self.page.toggle_manufacturer(list, id, checked)
    }

    /// Uncheck a manufacturer from its chip.
    pub fn remove_chip(&self, chip: &ManufacturerChip) -> bool {
        self.page.toggle_manufacturer(chip.list, &chip.id, false)
    }

    pub fn set_price_range(&self, range: PriceRange) {
        self.page.set_price_range(range);
    }

    pub fn reset_list(&self, list: ManufacturerList) {
        self.page.uncheck_all(list);
    }

    /// Apply the selection; the mobile popup closes once it settles.
    pub async fn apply(&self) {
        self.page.apply_filters().await;
        if self.layout == PanelLayout::Mobile {
            self.close_popup();
        }
    }

    pub async fn reset(&self) {
        self.page.reset_filters().await;
    }
}
