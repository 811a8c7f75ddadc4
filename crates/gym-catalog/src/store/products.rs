//! Product list stores.

use crate::catalog::ProductListing;
use crate::search::SortMode;

/// Generation tag handed out for each listing fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

impl RequestToken {
    pub fn get(&self) -> u64 {
        self.0
    }
}

/// The page of products currently on screen.
///
/// Fetches take a [`RequestToken`] before going out; a response is only
/// committed while its token is still the newest one issued, so a slow
/// response cannot overwrite a later one.
#[derive(Debug, Clone, Default)]
pub struct ProductListStore {
    listing: ProductListing,
    generation: u64,
}

impl ProductListStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current listing.
    pub fn listing(&self) -> &ProductListing {
        &self.listing
    }

    /// Issue a token for a new fetch; older tokens become stale.
    pub fn issue_token(&mut self) -> RequestToken {
        self.generation += 1;
        RequestToken(self.generation)
    }

    /// Whether `token` is the newest one issued.
    pub fn is_latest(&self, token: RequestToken) -> bool {
        token.0 == self.generation
    }

    /// Commit a fetched listing if its token is still the newest.
    ///
    /// Returns `false` and drops the listing otherwise.
    pub fn commit(&mut self, token: RequestToken, listing: ProductListing) -> bool {
        if !self.is_latest(token) {
            return false;
        }
        self.listing = listing;
        true
    }

    /// Re-order the current page in place.
    pub fn sort(&mut self, mode: SortMode) {
        self.listing.sort_by_mode(mode);
    }
}

/// Results fetched while applying or restoring filters.
///
/// The catalog page takes them on its next load instead of fetching again.
#[derive(Debug, Clone, Default)]
pub struct FilteredProductListStore {
    listing: Option<ProductListing>,
}

impl FilteredProductListStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, listing: ProductListing) {
        self.listing = Some(listing);
    }

    /// Take the stored listing, leaving the store empty.
    pub fn take(&mut self) -> Option<ProductListing> {
        self.listing.take()
    }

    pub fn clear(&mut self) {
        self.listing = None;
    }
}
