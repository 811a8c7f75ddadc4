//! Catalog page container.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::api::CatalogApi;
use crate::catalog::{ManufacturerList, ProductListing};
use crate::error::{CatalogError, CatalogResult};
use crate::ids::ManufacturerId;
use crate::limits::CatalogLimits;
use crate::notify::{Notification, Notifier};
use crate::reconcile::page_from_query;
use crate::router::Router;
use crate::search::{params, CatalogRequest, FacetSet, Pagination, PriceRange, SortMode};
use crate::store::{
    FilteredProductListStore, ManufacturerFilterStore, PriceFilter, ProductListStore, RequestToken,
};

/// Everything the catalog page renders from.
#[derive(Debug, Clone)]
pub struct CatalogState {
    pub manufacturers: ManufacturerFilterStore,
    pub products: ProductListStore,
    pub filtered: FilteredProductListStore,
    pub price: PriceFilter,
    /// 0-based page on screen.
    pub current_page: u32,
    /// Facets currently reflected in the URL.
    pub active_facets: FacetSet,
    pub spinner: bool,
    /// Set while an apply is in flight.
    pub filters_busy: bool,
}

impl CatalogState {
    pub fn new(limits: &CatalogLimits) -> Self {
        Self {
            manufacturers: ManufacturerFilterStore::new(),
            products: ProductListStore::new(),
            filtered: FilteredProductListStore::new(),
            price: PriceFilter::new(limits.default_price_range),
            current_page: 0,
            active_facets: FacetSet::none(),
            spinner: false,
            filters_busy: false,
        }
    }

    /// Whether the URL carries at least one valid filter facet.
    pub fn filters_in_query(&self) -> bool {
        !self.active_facets.is_empty()
    }

    /// Reset is pointless when nothing is selected.
    pub fn reset_disabled(&self) -> bool {
        !(self.price.touched
            || self.manufacturers.any_checked(ManufacturerList::Gym)
            || self.manufacturers.any_checked(ManufacturerList::Parts))
    }
}

/// The catalog page: filters, sorting and pagination over the remote list.
///
/// State lives behind a lock that is never held across a network call, so
/// overlapping operations interleave the way UI callbacks do. Listing fetches
/// carry request tokens; only the newest response reaches the screen.
pub struct CatalogPage {
    pub(crate) api: Arc<dyn CatalogApi>,
    pub(crate) router: Arc<dyn Router>,
    pub(crate) notifier: Arc<dyn Notifier>,
    pub(crate) limits: CatalogLimits,
    state: Mutex<CatalogState>,
}

impl CatalogPage {
    pub fn new(
        api: Arc<dyn CatalogApi>,
        router: Arc<dyn Router>,
        notifier: Arc<dyn Notifier>,
        limits: CatalogLimits,
    ) -> Self {
        Self {
            api,
            router,
            notifier,
            state: Mutex::new(CatalogState::new(&limits)),
            limits,
        }
    }

    pub fn limits(&self) -> &CatalogLimits {
        &self.limits
    }

    pub(crate) fn lock(&self) -> MutexGuard<'_, CatalogState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// A copy of the current state.
    pub fn snapshot(&self) -> CatalogState {
        self.lock().clone()
    }

    /// The page currently on screen.
    pub fn listing(&self) -> ProductListing {
        self.lock().products.listing().clone()
    }

    pub fn pagination(&self) -> Pagination {
        let state = self.lock();
        Pagination::new(
            state.current_page,
            self.limits.page_size,
            state.products.listing().count,
        )
    }

    /// Sort mode from the `first` parameter.
    pub fn sort_mode(&self) -> SortMode {
        SortMode::from_param(self.router.query().get(params::FIRST))
    }

    /// First render: restore filters from the URL, then load the page.
    pub async fn mount(&self) {
        self.restore_filters_from_query().await;
        self.load_products().await;
    }

    /// Load the page named by `offset`.
    ///
    /// A missing or invalid `offset` is replaced with `1`. A page past the
    /// end is clamped and the corrected `offset` pushed. Results already
    /// fetched by filter restoration are used instead of fetching again.
    pub async fn load_products(&self) {
        self.lock().spinner = true;

        let mut query = self.router.query();
        let requested = match page_from_query(&query) {
            Some(page) => page,
            None => {
                tracing::debug!(offset = ?query.get(params::OFFSET), "Invalid offset, resetting to first page");
                query.set(params::OFFSET, "1");
                if let Err(err) = self.router.replace(query.clone()).await {
                    self.report(&err);
                }
                0
            }
        };

        if let Err(err) = self.load_page(requested).await {
            self.report(&err);
        }

        self.lock().spinner = false;
    }

    async fn load_page(&self, requested: u32) -> CatalogResult<()> {
        let (token, facets, filtered) = {
            let mut state = self.lock();
            let filtered = if state.filters_in_query() {
                state.filtered.take()
            } else {
                None
            };
            (state.products.issue_token(), state.active_facets.clone(), filtered)
        };

        let mut listing = match filtered {
            Some(listing) => listing,
            None => self.fetch_page(requested, &facets).await?,
        };

        let page = self.limits.clamp_page(requested, listing.count);
        if page != requested {
            tracing::debug!(requested, page, count = listing.count, "Clamping page");
            listing = self.fetch_page(page, &facets).await?;
            if !self.lock().products.is_latest(token) {
                tracing::debug!(page, "Dropping stale page load");
                return Ok(());
            }
            self.push_offset(page).await?;
        }

        self.commit(token, page, listing, self.sort_mode());
        Ok(())
    }

    /// Switch to 0-based page `selected`, clamped to the current page count.
    pub async fn page_change(&self, selected: u32) {
        let (token, facets, count) = {
            let mut state = self.lock();
            state.spinner = true;
            (
                state.products.issue_token(),
                state.active_facets.clone(),
                state.products.listing().count,
            )
        };
        let page = self.limits.clamp_page(selected, count);

        match self.fetch_and_push(token, page, &facets).await {
            Ok(Some(listing)) => {
                self.commit(token, page, listing, self.sort_mode());
            }
            Ok(None) => tracing::debug!(page, "Dropping stale page change"),
            Err(err) => self.report(&err),
        }

        self.lock().spinner = false;
    }

    /// Fetch `page` and point `offset` at it, unless a newer fetch started
    /// meanwhile.
    async fn fetch_and_push(
        &self,
        token: RequestToken,
        page: u32,
        facets: &FacetSet,
    ) -> CatalogResult<Option<ProductListing>> {
        let listing = self.fetch_page(page, facets).await?;
        if !self.lock().products.is_latest(token) {
            return Ok(None);
        }

        self.push_offset(page).await?;
        Ok(Some(listing))
    }

    /// Shallow-push `offset` for `page` onto the query as it is now, so
    /// parameters written while a fetch was pending survive.
    async fn push_offset(&self, page: u32) -> CatalogResult<()> {
        let mut query = self.router.query();
        query.set(params::OFFSET, (page + 1).to_string());
        self.router.push_shallow(query).await
    }

    /// Re-order the current page and record the mode in the URL.
    pub async fn change_sort(&self, mode: SortMode) {
        self.lock().products.sort(mode);

        let mut query = self.router.query();
        query.set(params::FIRST, mode.as_str());
        if let Err(err) = self.router.push_shallow(query).await {
            self.report(&err);
        }
    }

    /// Check or uncheck one manufacturer. Returns `false` if `id` is unknown.
    pub fn toggle_manufacturer(&self, list: ManufacturerList, id: &ManufacturerId, checked: bool) -> bool {
        self.lock().manufacturers.toggle(list, id, checked)
    }

    /// Uncheck every entry of one list.
    pub fn uncheck_all(&self, list: ManufacturerList) {
        self.lock().manufacturers.uncheck_all(list);
    }

    /// Move the price slider.
    pub fn set_price_range(&self, range: PriceRange) {
        self.lock().price.set(range);
    }

    pub(crate) async fn fetch_page(&self, page: u32, facets: &FacetSet) -> CatalogResult<ProductListing> {
        let request = CatalogRequest::page(page, self.limits.page_size).with_facets(facets.clone());
        tracing::debug!(path = %request.to_path(), "Fetching parts");
        self.api.fetch_parts(&request).await
    }

    /// Commit a listing for `page` if `token` is still the newest.
    pub(crate) fn commit(
        &self,
        token: RequestToken,
        page: u32,
        listing: ProductListing,
        mode: SortMode,
    ) -> bool {
        let mut state = self.lock();
        if !state.products.commit(token, listing) {
            tracing::debug!(token = token.get(), "Dropping stale listing");
            return false;
        }
        state.products.sort(mode);
        state.current_page = page;
        true
    }

    /// Generic error toast.
    pub(crate) fn report(&self, err: &CatalogError) {
        tracing::error!(error = %err, "Catalog operation failed");
        self.notifier.notify(Notification::from(err));
    }
}
