use std::sync::Arc;

use directory_core::ProfileId;
use serde_json::Value;
use services::{FetchError, StatusCode};
use dioxus::prelude::WritableExt;
use tokio::sync::Notify;

use super::test_harness::{
    StubReply, ViewKind, profile, profile_json, profiles_json, setup_view_harness,
};

fn position(html: &str, needle: &str) -> usize {
    html.find(needle)
        .unwrap_or_else(|| panic!("missing {needle} in {html}"))
}

#[tokio::test(flavor = "current_thread")]
async fn listing_renders_one_card_per_record_in_order() {
    let mut harness = setup_view_harness(ViewKind::Listing, "1");
    harness.fetcher.push(StubReply::ok(profiles_json(&[
        profile("7", "Ada Lovelace", "https://a.test/7.png"),
        profile("2", "Grace Hopper", "https://a.test/2.png"),
        profile("5", "Alan Turing", "https://a.test/5.png"),
    ])));

    harness.rebuild();
    harness.settle().await;
    let html = harness.render();

    assert!(html.contains("Team Directory"), "missing title in {html}");
    assert!(html.contains("3 Profiles"), "missing count badge in {html}");
    assert_eq!(html.matches("data-profile-id=").count(), 3);
    let first = position(&html, "data-profile-id=\"7\"");
    let second = position(&html, "data-profile-id=\"2\"");
    let third = position(&html, "data-profile-id=\"5\"");
    assert!(first < second && second < third, "cards out of order in {html}");
    assert!(html.contains("Data fetched successfully!"), "missing notice in {html}");
    assert_eq!(harness.fetcher.requested(), vec!["/api/test"]);
}

#[tokio::test(flavor = "current_thread")]
async fn listing_shows_loading_before_reply() {
    let mut harness = setup_view_harness(ViewKind::Listing, "1");
    let gate = Arc::new(Notify::new());
    harness
        .fetcher
        .push(StubReply::ok(profiles_json(&[])).gated(gate.clone()));

    harness.rebuild();
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Loading Profiles"), "missing loading panel in {html}");

    gate.notify_one();
    harness.settle().await;
    let html = harness.render();
    assert!(!html.contains("Loading Profiles"), "still loading in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn listing_empty_collection_shows_empty_state() {
    let mut harness = setup_view_harness(ViewKind::Listing, "1");
    harness.fetcher.push(StubReply::ok(Value::Array(Vec::new())));

    harness.rebuild();
    harness.settle().await;
    let html = harness.render();

    assert!(html.contains("0 Profiles"), "missing count badge in {html}");
    assert!(html.contains("No profiles found"), "missing empty state in {html}");
    assert!(!html.contains("data-profile-id="), "unexpected card in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn listing_error_then_retry_recovers() {
    let mut harness = setup_view_harness(ViewKind::Listing, "1");
    harness
        .fetcher
        .push(StubReply::err(FetchError::HttpStatus(StatusCode::INTERNAL_SERVER_ERROR)));
    harness.fetcher.push(StubReply::ok(profiles_json(&[profile(
        "1",
        "Ada Lovelace",
        "https://a.test/1.png",
    )])));

    harness.rebuild();
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Oops! Something went wrong"), "missing error title in {html}");
    assert!(html.contains("HTTP error! status: 500"), "missing status text in {html}");
    assert!(html.contains("Failed to fetch data."), "missing failure notice in {html}");
    assert!(html.contains("Try Again"), "missing retry in {html}");

    harness.act(|handles| handles.refresh().call(())).await;
    let html = harness.render();
    assert!(html.contains("1 Profile"), "missing count badge in {html}");
    assert!(html.contains("Ada Lovelace"), "missing card in {html}");
    assert_eq!(harness.fetcher.requested().len(), 2);
}

#[tokio::test(flavor = "current_thread")]
async fn listing_refresh_with_same_data_keeps_cards() {
    let mut harness = setup_view_harness(ViewKind::Listing, "1");
    let records = [
        profile("1", "Ada Lovelace", "https://a.test/1.png"),
        profile("2", "Grace Hopper", "https://a.test/2.png"),
    ];
    harness.fetcher.push(StubReply::ok(profiles_json(&records)));
    harness.fetcher.push(StubReply::ok(profiles_json(&records)));

    harness.rebuild();
    harness.settle().await;
    let before = harness.render();

    harness.act(|handles| handles.refresh().call(())).await;
    let after = harness.render();

    assert_eq!(before, after);
    assert_eq!(harness.fetcher.requested().len(), 2);
}

#[tokio::test(flavor = "current_thread")]
async fn listing_drops_stale_reply_after_refresh() {
    let mut harness = setup_view_harness(ViewKind::Listing, "1");
    let gate = Arc::new(Notify::new());
    harness.fetcher.push(
        StubReply::ok(profiles_json(&[profile("1", "Stale Person", "")])).gated(gate.clone()),
    );
    harness
        .fetcher
        .push(StubReply::ok(profiles_json(&[profile("2", "Fresh Person", "")])));

    harness.rebuild();
    harness.settle().await;
    harness.act(|handles| handles.refresh().call(())).await;
    gate.notify_one();
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("Fresh Person"), "missing latest data in {html}");
    assert!(!html.contains("Stale Person"), "stale data rendered in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn listing_invalid_avatar_uses_generated_fallback() {
    let mut harness = setup_view_harness(ViewKind::Listing, "1");
    harness
        .fetcher
        .push(StubReply::ok(profiles_json(&[profile("1", "Ada Lovelace", "not a url")])));

    harness.rebuild();
    harness.settle().await;
    let html = harness.render();

    assert!(html.contains("https://ui-avatars.com/api/?name=Ada+Lovelace"), "missing fallback in {html}");
    assert!(!html.contains("not a url"), "invalid avatar rendered in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn profile_renders_detail_sections() {
    let mut harness = setup_view_harness(ViewKind::Profile, "3");
    harness.fetcher.push(StubReply::ok(profile_json(&profile(
        "3",
        "Alan Turing",
        "https://a.test/3.png",
    ))));

    harness.rebuild();
    harness.settle().await;
    let html = harness.render();

    assert!(html.contains("Profile Details"), "missing title in {html}");
    assert!(html.contains("Alan Turing"), "missing name in {html}");
    assert!(html.contains("alan.turing@company.com"), "missing email in {html}");
    assert!(html.contains("EMP-0003"), "missing employee id in {html}");
    assert!(html.contains("Joined Company"), "missing timeline in {html}");
    assert!(html.contains("/5"), "missing skill rating in {html}");
    assert_eq!(harness.fetcher.requested(), vec!["/api/test/3"]);
}

#[tokio::test(flavor = "current_thread")]
async fn profile_not_found_shows_status_and_retries() {
    let mut harness = setup_view_harness(ViewKind::Profile, "999");
    harness
        .fetcher
        .push(StubReply::err(FetchError::HttpStatus(StatusCode::NOT_FOUND)));
    harness
        .fetcher
        .push(StubReply::ok(profile_json(&profile("999", "Late Arrival", ""))));

    harness.rebuild();
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Profile Not Found"), "missing error title in {html}");
    assert!(html.contains("Profile not found (404)"), "missing status text in {html}");
    assert!(html.contains("Back to Listing"), "missing back action in {html}");

    harness.act(|handles| handles.retry().call(())).await;
    let html = harness.render();
    assert!(html.contains("Late Arrival"), "missing retried profile in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn profile_null_body_renders_nothing() {
    let mut harness = setup_view_harness(ViewKind::Profile, "1");
    harness.fetcher.push(StubReply::ok(Value::Null));

    harness.rebuild();
    harness.settle().await;
    let html = harness.render();

    assert!(!html.contains("Loading Profile"), "still loading in {html}");
    assert!(!html.contains("Profile Not Found"), "unexpected error in {html}");
    assert!(!html.contains("Profile Details"), "unexpected detail in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn profile_id_change_shows_loading_then_new_profile() {
    let mut harness = setup_view_harness(ViewKind::Profile, "1");
    let gate = Arc::new(Notify::new());
    harness
        .fetcher
        .push(StubReply::ok(profile_json(&profile("1", "First Person", ""))));
    harness.fetcher.push(
        StubReply::ok(profile_json(&profile("2", "Second Person", ""))).gated(gate.clone()),
    );

    harness.rebuild();
    harness.settle().await;
    assert!(harness.render().contains("First Person"));

    harness
        .act(|handles| handles.profile_id().set("2".to_string()))
        .await;
    let html = harness.render();
    assert!(html.contains("Loading Profile"), "missing loading panel in {html}");
    assert!(!html.contains("First Person"), "old profile rendered in {html}");

    gate.notify_one();
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Second Person"), "missing new profile in {html}");
    assert!(!html.contains("First Person"), "old profile rendered in {html}");
    assert!(!html.contains("Loading Profile"), "still loading in {html}");
    assert_eq!(harness.fetcher.requested(), vec!["/api/test/1", "/api/test/2"]);
}

#[tokio::test(flavor = "current_thread")]
async fn app_navigates_listing_to_profile_and_back() {
    let mut harness = setup_view_harness(ViewKind::App, "1");
    let records = [profile("1", "Ada Lovelace", "https://a.test/1.png")];
    harness.fetcher.push(StubReply::ok(profiles_json(&records)));
    harness
        .fetcher
        .push(StubReply::err(FetchError::HttpStatus(StatusCode::NOT_FOUND)));
    harness.fetcher.push(StubReply::ok(profiles_json(&records)));

    harness.rebuild();
    harness.settle().await;
    assert!(harness.render().contains("1 Profile"));

    let id = ProfileId::new("1").unwrap();
    harness
        .act(move |handles| handles.open_profile().call(id))
        .await;
    let html = harness.render();
    assert!(html.contains("Profile not found (404)"), "missing detail error in {html}");

    harness.act(|handles| handles.back().call(())).await;
    let html = harness.render();
    assert!(html.contains("Team Directory"), "missing listing in {html}");
    assert_eq!(
        harness.fetcher.requested(),
        vec!["/api/test", "/api/test/1", "/api/test"]
    );
}

#[tokio::test(flavor = "current_thread")]
async fn app_details_action_lands_on_not_found() {
    let mut harness = setup_view_harness(ViewKind::App, "1");
    harness.fetcher.push(StubReply::ok(profiles_json(&[profile(
        "4",
        "Katherine Johnson",
        "",
    )])));

    harness.rebuild();
    harness.settle().await;

    let id = ProfileId::new("4").unwrap();
    harness
        .act(move |handles| handles.open_details().call(id))
        .await;
    let html = harness.render();
    assert!(html.contains("Page not found"), "missing not found page in {html}");
    assert!(html.contains("/profile/4/details"), "missing path in {html}");
    assert_eq!(harness.fetcher.requested(), vec!["/api/test"]);
}

#[tokio::test(flavor = "current_thread")]
async fn app_discards_profile_reply_after_leaving_page() {
    let mut harness = setup_view_harness(ViewKind::App, "1");
    let gate = Arc::new(Notify::new());
    let records = [profile("1", "Ada Lovelace", "https://a.test/1.png")];
    harness.fetcher.push(StubReply::ok(profiles_json(&records)));
    harness.fetcher.push(
        StubReply::ok(profile_json(&profile("1", "Ada Lovelace", ""))).gated(gate.clone()),
    );
    harness.fetcher.push(StubReply::ok(profiles_json(&records)));

    harness.rebuild();
    harness.settle().await;

    let id = ProfileId::new("1").unwrap();
    harness
        .act(move |handles| handles.open_profile().call(id))
        .await;
    assert!(harness.render().contains("Loading Profile"));

    harness.act(|handles| handles.back().call(())).await;
    gate.notify_one();
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("Team Directory"), "missing listing in {html}");
    assert!(html.contains("1 Profile"), "missing count badge in {html}");
    assert!(!html.contains("Profile Details"), "late detail rendered in {html}");
    assert!(!html.contains("Loading Profile"), "detail loading rendered in {html}");
    assert_eq!(
        harness.fetcher.requested(),
        vec!["/api/test", "/api/test/1", "/api/test"]
    );
}
