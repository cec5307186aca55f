use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;
use unimart_query::{
    filter_active, filter_by_location, filter_by_seller, filter_by_user_id, generate_listing_id,
    is_active, top_by_views, trending, Listing, DEFAULT_TOP_COUNT,
};

fn make(id: &str, views: u64, deleted: bool, location: Option<&str>, seller_id: &str) -> Listing {
    let posted = Utc.with_ymd_and_hms(2025, 9, 1, 12, 0, 0).unwrap();
    let mut l = Listing::new(id, format!("Item {id}"), 10.0, "Seller", seller_id, posted);
    l.views = views;
    l.deleted = deleted;
    l.location = location.map(str::to_string);
    l
}

fn ids(listings: &[&Listing]) -> Vec<String> {
    listings.iter().map(|l| l.id.to_string()).collect()
}

/// Three listings: one active, one soft-deleted, one from the store with
/// no deleted flag at all.
fn campus_fixture() -> Vec<Listing> {
    Listing::list_from_json(
        r#"[
            {"id":"1","title":"A","price":1,"seller":"S1","sellerId":"u1","postedTime":"2025-09-01T00:00:00Z",
             "deleted":false,"views":5,"location":"Robarts Library"},
            {"id":"2","title":"B","price":1,"seller":"S1","sellerId":"u1","postedTime":"2025-09-01T00:00:00Z",
             "deleted":true,"views":100,"location":"Robarts Library"},
            {"id":"3","title":"C","price":1,"seller":"S2","sellerId":"u2","postedTime":"2025-09-01T00:00:00Z",
             "views":2,"location":"St. George Campus"}
        ]"#,
    )
    .unwrap()
}

// ── Scenario ─────────────────────────────────────────────────────

#[test]
fn campus_scenario() {
    let l = campus_fixture();
    assert_eq!(ids(&filter_active(&l)), ["1", "3"]);
    assert_eq!(ids(&top_by_views(&l, 1)), ["1"]);
    assert_eq!(ids(&filter_by_location(&l, "robarts")), ["1"]);
    assert_eq!(ids(&filter_by_user_id(&l, "u1")), ["1"]);
}

#[test]
fn empty_input_yields_empty_output() {
    let l: Vec<Listing> = Vec::new();
    assert!(filter_active(&l).is_empty());
    assert!(top_by_views(&l, 4).is_empty());
    assert!(trending(&l).is_empty());
    assert!(filter_by_location(&l, "robarts").is_empty());
    assert!(filter_by_location(&l, "").is_empty());
    assert!(filter_by_seller(&l, "Seller").is_empty());
    assert!(filter_by_user_id(&l, "u1").is_empty());
}

// ── is_active / filter_active ────────────────────────────────────

#[test]
fn is_active_follows_deleted_flag() {
    assert!(is_active(&make("1", 0, false, None, "u1")));
    assert!(!is_active(&make("1", 0, true, None, "u1")));
}

#[test]
fn filter_active_preserves_order() {
    let l = vec![
        make("c", 0, false, None, "u1"),
        make("a", 0, true, None, "u1"),
        make("b", 0, false, None, "u1"),
    ];
    assert_eq!(ids(&filter_active(&l)), ["c", "b"]);
}

#[test]
fn filter_active_does_not_touch_input() {
    let l = campus_fixture();
    let before = l.clone();
    let _ = filter_active(&l);
    let _ = top_by_views(&l, 3);
    assert_eq!(l, before);
}

// ── top_by_views ─────────────────────────────────────────────────

#[test]
fn top_by_views_sorts_descending() {
    let l = vec![
        make("low", 1, false, None, "u1"),
        make("high", 50, false, None, "u1"),
        make("mid", 10, false, None, "u1"),
    ];
    assert_eq!(ids(&top_by_views(&l, 3)), ["high", "mid", "low"]);
}

#[test]
fn top_by_views_zero_count_is_empty() {
    assert!(top_by_views(&campus_fixture(), 0).is_empty());
}

#[test]
fn top_by_views_count_larger_than_active_set_returns_all_active() {
    assert_eq!(ids(&top_by_views(&campus_fixture(), 10)), ["1", "3"]);
}

#[test]
fn top_by_views_ignores_deleted_even_if_most_viewed() {
    let fixture = campus_fixture();
    let top = top_by_views(&fixture, 1);
    assert_eq!(top[0].id, "1");
}

#[test]
fn missing_views_rank_as_zero_and_keep_input_order() {
    let l = Listing::list_from_json(
        r#"[
            {"id":"x","title":"X","price":1,"seller":"S","sellerId":"u","postedTime":"2025-09-01T00:00:00Z"},
            {"id":"seen","title":"S","price":1,"seller":"S","sellerId":"u","postedTime":"2025-09-01T00:00:00Z","views":3},
            {"id":"y","title":"Y","price":1,"seller":"S","sellerId":"u","postedTime":"2025-09-01T00:00:00Z"}
        ]"#,
    )
    .unwrap();
    assert_eq!(ids(&top_by_views(&l, 3)), ["seen", "x", "y"]);
}

#[test]
fn trending_uses_default_count() {
    let l: Vec<Listing> = (0..10).map(|i| make(&i.to_string(), i, false, None, "u1")).collect();
    let top = trending(&l);
    assert_eq!(top.len(), DEFAULT_TOP_COUNT);
    assert_eq!(ids(&top), ["9", "8", "7", "6"]);
}

// ── filter_by_location ───────────────────────────────────────────

#[test]
fn blank_location_means_no_filter() {
    let l = campus_fixture();
    assert_eq!(filter_by_location(&l, ""), filter_active(&l));
    assert_eq!(filter_by_location(&l, "   "), filter_active(&l));
    assert_eq!(filter_by_location(&l, "\t\n"), filter_active(&l));
}

#[test]
fn location_match_is_case_insensitive_substring() {
    let l = campus_fixture();
    assert_eq!(ids(&filter_by_location(&l, "GEORGE")), ["3"]);
    assert_eq!(ids(&filter_by_location(&l, "library")), ["1"]);
    assert!(filter_by_location(&l, "Scarborough").is_empty());
}

#[test]
fn listings_without_location_never_match_non_blank_query() {
    let l = vec![
        make("none", 0, false, None, "u1"),
        make("some", 0, false, Some("Bahen Centre"), "u1"),
    ];
    assert_eq!(ids(&filter_by_location(&l, "e")), ["some"]);
    assert_eq!(filter_by_location(&l, "").len(), 2);
}

#[test]
fn non_blank_location_query_is_not_trimmed() {
    let l = vec![make("1", 0, false, Some("Robarts Library"), "u1")];
    assert_eq!(filter_by_location(&l, "robarts ").len(), 1);
    assert!(filter_by_location(&l, " robarts").is_empty());
}

// ── filter_by_seller / filter_by_user_id ─────────────────────────

#[test]
fn seller_name_match_is_exact() {
    let mut a = make("a", 0, false, None, "u1");
    a.seller = "Alice".into();
    let mut b = make("b", 0, false, None, "u2");
    b.seller = "alice".into();
    let mut c = make("c", 0, true, None, "u1");
    c.seller = "Alice".into();
    let l = vec![a, b, c];

    assert_eq!(ids(&filter_by_seller(&l, "Alice")), ["a"]);
    assert_eq!(ids(&filter_by_seller(&l, "alice")), ["b"]);
    assert!(filter_by_seller(&l, "Ali").is_empty());
}

#[test]
fn user_id_match_is_exact_and_case_sensitive() {
    let l = campus_fixture();
    assert_eq!(ids(&filter_by_user_id(&l, "u2")), ["3"]);
    assert!(filter_by_user_id(&l, "U1").is_empty());
    assert!(filter_by_user_id(&l, "u").is_empty());
}

#[test]
fn user_id_is_authoritative_when_display_names_collide() {
    let mut mine = make("mine", 0, false, None, "u1");
    mine.seller = "Sam".into();
    let mut theirs = make("theirs", 0, false, None, "u2");
    theirs.seller = "Sam".into();
    let l = vec![mine, theirs];

    assert_eq!(filter_by_seller(&l, "Sam").len(), 2);
    assert_eq!(ids(&filter_by_user_id(&l, "u1")), ["mine"]);
}

// ── generate_listing_id ──────────────────────────────────────────

#[test]
fn generated_ids_are_distinct() {
    let a = generate_listing_id();
    let b = generate_listing_id();
    assert_ne!(a, b);
    assert!(a.generated_at_millis().is_some());
}
