//! Keeping filter state, the URL query and the product list in agreement.
//!
//! Two directions:
//!
//! - **Restore** (first render): read the facets the URL carries, check the
//!   matching manufacturers, move the price slider and fetch the filtered
//!   page once.
//! - **Apply** (user action): derive facets from the panel state, write them
//!   to the URL with `offset=1` and fetch the first filtered page.
//!
//! Reset is the apply of an empty selection, plus `first=cheap`.

use crate::catalog::{ManufacturerList, ProductListing};
use crate::error::CatalogResult;
use crate::notify::Notification;
use crate::pages::{CatalogPage, CatalogState};
use crate::search::{params, CatalogRequest, FacetSet, QueryMap, SortMode};

/// Remove every filter-owned parameter, leaving `offset`, `first` and
/// anything unknown in place.
pub fn remove_filter_params(query: &mut QueryMap) {
    for key in params::FILTERS {
        query.remove(key);
    }
}

/// 0-based page from the `offset` parameter; `None` unless it is a whole
/// number greater than zero.
pub(crate) fn page_from_query(query: &QueryMap) -> Option<u32> {
    query
        .get(params::OFFSET)?
        .trim()
        .parse::<u32>()
        .ok()
        .filter(|offset| *offset > 0)
        .map(|offset| offset - 1)
}

/// What an apply writes to the URL and requests from the service.
#[derive(Debug, Clone, PartialEq)]
pub struct ApplyPlan {
    /// Facets to activate: price only if the slider was touched, each
    /// manufacturer list only if something in it is checked.
    pub facets: FacetSet,
    /// 0-based page to show; applying always starts over.
    pub page: u32,
}

impl ApplyPlan {
    /// Derive the plan from the panel state.
    pub fn from_state(state: &CatalogState) -> Self {
        let mut facets = FacetSet::none();
        if state.price.touched {
            facets = facets.with_price(state.price.range.rounded_up());
        }
        for list in ManufacturerList::ALL {
            facets = facets.with_titles(list, state.manufacturers.checked_titles(list));
        }

        Self { facets, page: 0 }
    }

    /// The URL query after applying: stale facets dropped, active ones
    /// written, `offset` pointing at the plan's page.
    pub fn query(&self, current: &QueryMap) -> QueryMap {
        let mut query = current.clone();
        remove_filter_params(&mut query);
        self.facets.write_query(&mut query);
        query.set(params::OFFSET, (self.page + 1).to_string());
        query
    }

    pub fn request(&self, limit: u32) -> CatalogRequest {
        CatalogRequest::page(self.page, limit).with_facets(self.facets.clone())
    }
}

impl CatalogPage {
    /// Restore filter state from the URL on first render.
    ///
    /// Undecodable percent-encoding shows the localized warning and leaves
    /// the filters unapplied; other failures show a generic error. Nothing
    /// is fetched unless at least one facet is valid.
    pub async fn restore_filters_from_query(&self) {
        let query = self.router.query();
        let page = page_from_query(&query).unwrap_or(0);

        let facets = match FacetSet::from_query(&query, &self.limits) {
            Ok(facets) => facets,
            Err(err) if err.is_malformed_query() => {
                tracing::warn!(error = %err, "Ignoring filters from malformed URL");
                self.notifier.notify(Notification::invalid_filter_url());
                return;
            }
            Err(err) => {
                self.report(&err);
                return;
            }
        };

        if facets.is_empty() {
            return;
        }

        tracing::info!(facets = ?facets.labels(), page, "Restoring filters from URL");
        {
            let mut state = self.lock();
            for list in ManufacturerList::ALL {
                if let Some(titles) = facets.titles(list) {
                    state.manufacturers.restore_from_titles(list, titles);
                }
            }
            if let Some(range) = facets.price {
                state.price.set(range);
            }
            state.active_facets = facets.clone();
        }

        match self.fetch_page(page, &facets).await {
            Ok(listing) => self.lock().filtered.set(listing),
            Err(err) => self.report(&err),
        }
    }

    /// Apply the panel selection: update the URL and fetch the first page.
    ///
    /// Checkbox and slider state is kept as the user left it even if the
    /// navigation or the fetch fails.
    pub async fn apply_filters(&self) {
        let (plan, token) = {
            let mut state = self.lock();
            state.filters_busy = true;
            let plan = ApplyPlan::from_state(&state);
            state.active_facets = plan.facets.clone();
            (plan, state.products.issue_token())
        };

        tracing::info!(facets = ?plan.facets.labels(), "Applying filters");
        match self.push_and_fetch(&plan).await {
            Ok(()) => {
                let listing = self.lock().filtered.take();
                if let Some(listing) = listing {
                    self.commit(token, plan.page, listing, self.sort_mode());
                }
            }
            Err(err) => self.report(&err),
        }

        self.lock().filters_busy = false;
    }

    async fn push_and_fetch(&self, plan: &ApplyPlan) -> CatalogResult<()> {
        self.router.push_shallow(plan.query(&self.router.query())).await?;
        let listing = self.api.fetch_parts(&plan.request(self.limits.page_size)).await?;
        self.lock().filtered.set(listing);
        Ok(())
    }

    /// Clear every filter, sort cheapest first and go back to page one.
    ///
    /// Local filter state is cleared only once the unfiltered page is in and
    /// the URL no longer carries filters; a failure leaves both untouched.
    pub async fn reset_filters(&self) {
        let token = {
            let mut state = self.lock();
            state.spinner = true;
            state.products.issue_token()
        };

        tracing::info!("Resetting filters");
        match self.fetch_and_reset_query().await {
            Ok(listing) => {
                {
                    let mut state = self.lock();
                    state.manufacturers.reset();
                    state.price.reset(self.limits.default_price_range);
                    state.active_facets = FacetSet::none();
                    state.filtered.clear();
                }
                self.commit(token, 0, listing, SortMode::Cheap);
            }
            Err(err) => self.report(&err),
        }

        self.lock().spinner = false;
    }

    async fn fetch_and_reset_query(&self) -> CatalogResult<ProductListing> {
        let listing = self.fetch_page(0, &FacetSet::none()).await?;

        let mut query = self.router.query();
        remove_filter_params(&mut query);
        query.set(params::FIRST, SortMode::Cheap.as_str());
        query.set(params::OFFSET, "1");
        self.router.push_shallow(query).await?;

        Ok(listing)
    }
}
