//! Catalog page behavior against an in-memory catalog and router.

mod common;

use common::{titles, FakeCatalogApi, Harness};
use gym_catalog::prelude::*;
use gym_catalog::search::encode_titles;
use gym_catalog::{NavigationKind, INVALID_FILTER_URL};

fn offsets(listing: &ProductListing) -> Vec<i64> {
    listing.rows.iter().map(|p| p.id.get()).collect()
}

// ---------------------------------------------------------------------------
// Restoring filters from the URL
// ---------------------------------------------------------------------------

#[tokio::test]
async fn mount_restores_price_and_gym_with_one_combined_fetch() {
    let h = Harness::new(
        "/catalog?offset=2&gym=%5B%22Technogym%22%5D&priceFrom=1500&priceTo=3000",
        100,
    );

    h.page.mount().await;

    let state = h.page.snapshot();
    assert_eq!(h.checked(ManufacturerList::Gym), titles(&["Technogym"]));
    assert!(h.checked(ManufacturerList::Parts).is_empty());
    assert_eq!(state.price.range, PriceRange::new(1500.0, 3000.0));
    assert!(state.price.touched);
    assert!(state.filters_in_query());
    assert_eq!(state.current_page, 1);

    assert_eq!(
        h.api.requests(),
        vec!["/gym-parts?limit=20&offset=1&priceFrom=1500&priceTo=3000&gym=%5B%22Technogym%22%5D"]
    );
    assert!(h.notifications.is_empty());
    assert!(h.router.history().is_empty());
}

#[tokio::test]
async fn mount_restores_every_facet() {
    let h = Harness::new(
        "/catalog?offset=1&gym=%5B%22Cybex%22%2C%22Matrix%20%22%5D&parts=%5B%22Grips%22%5D&priceFrom=0&priceTo=10000",
        45,
    );

    h.page.mount().await;

    assert_eq!(h.checked(ManufacturerList::Gym), titles(&["Matrix ", "Cybex"]));
    assert_eq!(h.checked(ManufacturerList::Parts), titles(&["Grips"]));
    assert_eq!(h.page.snapshot().price.range, PriceRange::new(0.0, 10000.0));
    assert_eq!(h.api.requests().len(), 1);
    assert!(h.api.requests()[0].contains("&parts=%5B%22Grips%22%5D"));
}

#[tokio::test]
async fn restoration_leaves_unlisted_entries_alone() {
    let h = Harness::new("/catalog?offset=1&gym=%5B%22Technogym%22%5D", 10);
    h.check(ManufacturerList::Gym, "Panatta");

    h.page.mount().await;

    assert_eq!(
        h.checked(ManufacturerList::Gym),
        titles(&["Technogym", "Panatta"])
    );
}

#[tokio::test]
async fn malformed_escape_warns_once_and_skips_filters() {
    let h = Harness::new("/catalog?offset=1&gym=%E0%A4%A", 30);

    h.page.mount().await;

    let notes = h.notifications.entries();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].level, NotificationLevel::Warning);
    assert_eq!(notes[0].message, INVALID_FILTER_URL);

    assert!(h.checked(ManufacturerList::Gym).is_empty());
    assert!(!h.page.snapshot().filters_in_query());
    // Only the plain page load went out.
    assert_eq!(h.api.requests(), vec!["/gym-parts?limit=20&offset=0"]);
    assert_eq!(h.page.listing().len(), 20);
}

#[tokio::test]
async fn invalid_filter_json_reports_an_error() {
    let h = Harness::new("/catalog?offset=1&parts=Grips", 30);

    h.page.mount().await;

    let notes = h.notifications.entries();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].level, NotificationLevel::Error);
    assert!(h.checked(ManufacturerList::Parts).is_empty());
    assert_eq!(h.api.requests(), vec!["/gym-parts?limit=20&offset=0"]);
}

#[tokio::test]
async fn out_of_range_price_is_ignored() {
    let h = Harness::new("/catalog?offset=1&priceFrom=1500&priceTo=20000", 30);

    h.page.mount().await;

    let state = h.page.snapshot();
    assert!(!state.price.touched);
    assert_eq!(state.price.range, PriceRange::new(1000.0, 9000.0));
    assert_eq!(h.api.requests(), vec!["/gym-parts?limit=20&offset=0"]);
    assert!(h.notifications.is_empty());
}

#[tokio::test]
async fn restoration_fetch_failure_is_reported() {
    let api = FakeCatalogApi::new(30);
    api.fail_with("connection refused");
    let h = Harness::with_api("/catalog?offset=1&gym=%5B%22Cybex%22%5D", api);

    h.page.mount().await;

    // Checkboxes are restored even though the list could not be fetched.
    assert_eq!(h.checked(ManufacturerList::Gym), titles(&["Cybex"]));
    let notes = h.notifications.entries();
    assert!(!notes.is_empty());
    assert!(notes.iter().all(|n| n.message == "connection refused"));
}

// ---------------------------------------------------------------------------
// Initial load and pagination
// ---------------------------------------------------------------------------

#[tokio::test]
async fn missing_offset_is_replaced_with_first_page() {
    let h = Harness::new("/catalog?first=popular", 30);

    h.page.mount().await;

    let history = h.router.history();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].kind, NavigationKind::Replace);
    assert_eq!(history[0].url, "/catalog?first=popular&offset=1");
    assert_eq!(h.page.snapshot().current_page, 0);
}

#[tokio::test]
async fn zero_offset_is_invalid() {
    let h = Harness::new("/catalog?offset=0", 30);

    h.page.mount().await;

    assert_eq!(h.router.url(), "/catalog?offset=1");
    assert_eq!(h.api.requests(), vec!["/gym-parts?limit=20&offset=0"]);
}

#[tokio::test]
async fn deep_link_past_the_end_is_clamped() {
    let h = Harness::new("/catalog?offset=40", 95);

    h.page.mount().await;

    assert_eq!(
        h.api.requests(),
        vec!["/gym-parts?limit=20&offset=39", "/gym-parts?limit=20&offset=4"]
    );
    assert_eq!(h.router.url(), "/catalog?offset=5");
    let state = h.page.snapshot();
    assert_eq!(state.current_page, 4);
    assert_eq!(h.page.listing().len(), 15);
    assert_eq!(h.page.pagination().total_pages, 5);
}

#[tokio::test]
async fn page_is_sorted_by_first_param() {
    let h = Harness::new("/catalog?offset=1&first=expensive", 50);

    h.page.mount().await;

    let prices: Vec<f64> = h.page.listing().rows.iter().map(|p| p.price).collect();
    assert!(prices.windows(2).all(|w| w[0] >= w[1]));
}

#[tokio::test]
async fn page_change_pushes_offset_and_keeps_other_params() {
    let h = Harness::new("/catalog?offset=1&first=popular", 100);
    h.page.mount().await;

    h.page.page_change(2).await;

    assert_eq!(h.router.url(), "/catalog?offset=3&first=popular");
    assert_eq!(h.api.requests().last().unwrap(), "/gym-parts?limit=20&offset=2");
    assert_eq!(h.page.snapshot().current_page, 2);

    let popularity: Vec<i64> = h.page.listing().rows.iter().map(|p| p.popularity).collect();
    assert!(popularity.windows(2).all(|w| w[0] >= w[1]));
}

#[tokio::test]
async fn page_change_is_clamped() {
    let h = Harness::new("/catalog?offset=1", 45);
    h.page.mount().await;

    h.page.page_change(17).await;

    assert_eq!(h.page.snapshot().current_page, 2);
    assert_eq!(h.router.url(), "/catalog?offset=3");
}

#[tokio::test]
async fn page_change_keeps_restored_facets() {
    let h = Harness::new("/catalog?offset=1&parts=%5B%22Grips%22%5D", 100);
    h.page.mount().await;

    h.page.page_change(1).await;

    assert_eq!(
        h.api.requests().last().unwrap(),
        "/gym-parts?limit=20&offset=1&parts=%5B%22Grips%22%5D"
    );
    assert_eq!(h.router.query().get("parts"), Some(r#"["Grips"]"#));
    assert_eq!(h.router.query().get("offset"), Some("2"));
}

#[tokio::test]
async fn stale_page_response_is_dropped() {
    let h = Harness::new("/catalog?offset=1", 100);
    h.page.mount().await;
    let gate = h.api.gate_page(1);

    let slow = h.page.page_change(1);
    let fast = async {
        h.page.page_change(2).await;
        gate.notify_one();
    };
    tokio::join!(slow, fast);

    assert_eq!(h.page.snapshot().current_page, 2);
    assert!(offsets(&h.page.listing()).iter().all(|id| (41..=60).contains(id)));
    assert_eq!(h.router.url(), "/catalog?offset=3");
}

#[tokio::test]
async fn fetch_failure_keeps_previous_page() {
    let h = Harness::new("/catalog?offset=1", 100);
    h.page.mount().await;
    let before = h.page.listing();

    h.api.fail_with("502 Bad Gateway");
    h.page.page_change(3).await;

    assert_eq!(h.page.listing(), before);
    assert_eq!(h.page.snapshot().current_page, 0);
    assert_eq!(h.notifications.entries(), vec![Notification::error("502 Bad Gateway")]);
    assert!(!h.page.snapshot().spinner);
}

// ---------------------------------------------------------------------------
// Sorting
// ---------------------------------------------------------------------------

#[tokio::test]
async fn change_sort_reorders_page_and_records_mode() {
    let h = Harness::new("/catalog?offset=2", 100);
    h.page.mount().await;
    let requests = h.api.requests().len();

    h.page.change_sort(SortMode::Expensive).await;

    let prices: Vec<f64> = h.page.listing().rows.iter().map(|p| p.price).collect();
    assert!(prices.windows(2).all(|w| w[0] >= w[1]));
    assert_eq!(h.router.url(), "/catalog?offset=2&first=expensive");
    // Sorting never refetches.
    assert_eq!(h.api.requests().len(), requests);
}

#[tokio::test]
async fn sort_change_during_pending_page_change_survives() {
    let h = Harness::new("/catalog?offset=1", 100);
    h.page.mount().await;
    let gate = h.api.gate_page(1);

    let pending = h.page.page_change(1);
    let sort = async {
        h.page.change_sort(SortMode::Expensive).await;
        gate.notify_one();
    };
    tokio::join!(pending, sort);

    let query = h.router.query();
    assert_eq!(query.get("first"), Some("expensive"));
    assert_eq!(query.get("offset"), Some("2"));
    assert_eq!(h.page.snapshot().current_page, 1);

    let prices: Vec<f64> = h.page.listing().rows.iter().map(|p| p.price).collect();
    assert!(prices.windows(2).all(|w| w[0] >= w[1]));
}

// ---------------------------------------------------------------------------
// Applying filters
// ---------------------------------------------------------------------------

#[tokio::test]
async fn apply_from_later_page_returns_to_first_page() {
    let h = Harness::new("/catalog?offset=1", 200);
    h.page.mount().await;
    h.page.page_change(3).await;
    assert_eq!(h.page.snapshot().current_page, 3);

    h.check(ManufacturerList::Gym, "Life Fitness");
    h.check(ManufacturerList::Gym, "Technogym");
    h.page.apply_filters().await;

    let query = h.router.query();
    let expected = encode_titles(&titles(&["Life Fitness", "Technogym"]));
    assert_eq!(query.get("offset"), Some("1"));
    assert_eq!(query.get("gym"), Some(expected.as_str()));
    assert!(!query.contains("priceFrom"));
    assert!(!query.contains("parts"));

    assert_eq!(
        h.api.requests().last().unwrap(),
        &format!("/gym-parts?limit=20&offset=0&gym={}", expected)
    );
    let state = h.page.snapshot();
    assert_eq!(state.current_page, 0);
    assert!(!state.filters_busy);
    assert!(state.filters_in_query());
}

#[tokio::test]
async fn applying_twice_is_idempotent() {
    let h = Harness::new("/catalog?offset=1", 60);
    h.page.mount().await;
    h.check(ManufacturerList::Parts, "Rollers");
    h.page.set_price_range(PriceRange::new(1999.5, 4200.0));

    h.page.apply_filters().await;
    let first_url = h.router.url();
    h.page.apply_filters().await;

    assert_eq!(h.router.url(), first_url);
    let requests = h.api.requests();
    let n = requests.len();
    assert_eq!(requests[n - 1], requests[n - 2]);
    assert_eq!(
        requests[n - 1],
        "/gym-parts?limit=20&offset=0&priceFrom=2000&priceTo=4200&parts=%5B%22Rollers%22%5D"
    );
}

#[tokio::test]
async fn apply_drops_facets_that_were_cleared() {
    let h = Harness::new(
        "/catalog?offset=2&gym=%5B%22Cybex%22%5D&priceFrom=1500&priceTo=3000",
        60,
    );
    h.page.mount().await;

    h.page.uncheck_all(ManufacturerList::Gym);
    h.page.apply_filters().await;

    let query = h.router.query();
    assert!(!query.contains("gym"));
    assert_eq!(query.get("priceFrom"), Some("1500"));
    assert_eq!(query.get("priceTo"), Some("3000"));
}

#[tokio::test]
async fn apply_failure_keeps_selection() {
    let h = Harness::new("/catalog?offset=1", 60);
    h.page.mount().await;
    h.check(ManufacturerList::Gym, "Precor");
    h.api.fail_with("timeout");

    h.page.apply_filters().await;

    assert_eq!(h.checked(ManufacturerList::Gym), titles(&["Precor"]));
    let state = h.page.snapshot();
    assert!(!state.filters_busy);
    assert_eq!(h.notifications.entries(), vec![Notification::error("timeout")]);
}

#[tokio::test]
async fn applied_filters_survive_a_reload() {
    let h = Harness::new("/catalog?offset=1", 60);
    h.page.mount().await;
    h.check(ManufacturerList::Gym, "Star Trac ");
    h.page.set_price_range(PriceRange::new(2500.0, 7000.0));
    h.page.apply_filters().await;

    let reloaded = Harness::new(&h.router.url(), 60);
    reloaded.page.mount().await;

    assert_eq!(
        reloaded.checked(ManufacturerList::Gym),
        titles(&["Star Trac "])
    );
    assert_eq!(
        reloaded.page.snapshot().price.range,
        PriceRange::new(2500.0, 7000.0)
    );
    assert_eq!(
        reloaded.api.requests(),
        vec![h.api.requests().last().unwrap().clone()]
    );
}

// ---------------------------------------------------------------------------
// Reset
// ---------------------------------------------------------------------------

#[tokio::test]
async fn reset_clears_state_and_query() {
    let h = Harness::new(
        "/catalog?offset=2&first=popular&gym=%5B%22Cybex%22%5D&parts=%5B%22Grips%22%5D&priceFrom=2000&priceTo=4000",
        60,
    );
    h.page.mount().await;

    h.page.reset_filters().await;

    let state = h.page.snapshot();
    assert!(h.checked(ManufacturerList::Gym).is_empty());
    assert!(h.checked(ManufacturerList::Parts).is_empty());
    assert_eq!(state.price.range, PriceRange::new(1000.0, 9000.0));
    assert!(!state.price.touched);
    assert!(!state.filters_in_query());
    assert_eq!(state.current_page, 0);

    let query = h.router.query();
    for key in ["gym", "parts", "priceFrom", "priceTo"] {
        assert!(!query.contains(key), "{} still in query", key);
    }
    assert_eq!(query.get("first"), Some("cheap"));
    assert_eq!(query.get("offset"), Some("1"));
    assert_eq!(h.api.requests().last().unwrap(), "/gym-parts?limit=20&offset=0");

    let prices: Vec<f64> = h.page.listing().rows.iter().map(|p| p.price).collect();
    assert!(prices.windows(2).all(|w| w[0] <= w[1]));
}

#[tokio::test]
async fn failed_reset_keeps_filters_and_query() {
    let url = "/catalog?offset=1&gym=%5B%22Cybex%22%5D&priceFrom=2000&priceTo=4000";
    let h = Harness::new(url, 60);
    h.page.mount().await;
    let before = h.page.listing();

    h.api.fail_with("timeout");
    h.page.reset_filters().await;

    let state = h.page.snapshot();
    assert_eq!(h.checked(ManufacturerList::Gym), titles(&["Cybex"]));
    assert_eq!(state.price.range, PriceRange::new(2000.0, 4000.0));
    assert!(state.price.touched);
    assert!(state.filters_in_query());
    assert!(!state.spinner);
    assert_eq!(h.page.listing(), before);

    assert_eq!(h.router.url(), url);
    assert_eq!(h.notifications.entries(), vec![Notification::error("timeout")]);
}

#[tokio::test]
async fn page_change_after_reset_is_unfiltered() {
    let h = Harness::new("/catalog?offset=1&gym=%5B%22Cybex%22%5D", 60);
    h.page.mount().await;
    h.page.reset_filters().await;

    h.page.page_change(1).await;

    assert_eq!(h.api.requests().last().unwrap(), "/gym-parts?limit=20&offset=1");
}
