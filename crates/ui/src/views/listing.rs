use dioxus::prelude::*;
use dioxus_router::use_navigator;
use directory_core::ProfileId;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::avatar::Avatar;
use crate::views::{LoadingPanel, ViewError, ViewState, use_async_resource};
use crate::vm::{ProfileCardVm, map_profile_cards, profile_count_label};

#[derive(Clone, Debug, PartialEq)]
struct ListingData {
    cards: Vec<ProfileCardVm>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum NoticeKind {
    Success,
    Failure,
}

#[component]
pub fn ListingView() -> Element {
    let ctx = use_context::<AppContext>();
    let directory = ctx.directory();
    let navigator = use_navigator();
    let mut notice_dismissed = use_signal(|| false);

    let profiles = use_async_resource(move || {
        let directory = directory.clone();
        async move {
            let items = directory
                .list_profiles()
                .await
                .map_err(|err| ViewError::from_fetch(&err))?;
            Ok::<_, ViewError>(ListingData {
                cards: map_profile_cards(&items),
            })
        }
    });

    let refresh = use_callback(move |()| {
        notice_dismissed.set(false);
        let mut profiles = profiles;
        profiles.trigger();
    });
    let open_profile = use_callback(move |id: ProfileId| {
        let _ = navigator.push(Route::Profile { id: id.to_string() });
    });
    let open_details = use_callback(move |id: ProfileId| {
        let _ = navigator.push(Route::profile_details(&id));
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<crate::views::ViewTestHandles>() {
                handles.register_listing(refresh, open_profile, open_details);
            }
        }
    }

    let dismiss = move |_: MouseEvent| notice_dismissed.set(true);

    match profiles.state() {
        ViewState::Idle | ViewState::Loading => rsx! {
            LoadingPanel {
                title: "Loading Profiles",
                detail: "Please wait while we fetch the data...",
            }
        },
        ViewState::Error(err) => rsx! {
            div { class: "page page--centered page--error",
                if !notice_dismissed() {
                    StatusNotice { kind: NoticeKind::Failure, on_dismiss: dismiss }
                }
                div { class: "panel panel--error",
                    h2 { class: "panel-title", "Oops! Something went wrong" }
                    p { class: "panel-text error-message", "{err.message()}" }
                    button {
                        class: "btn btn-danger",
                        r#type: "button",
                        onclick: move |_| refresh.call(()),
                        "Try Again"
                    }
                }
            }
        },
        ViewState::Ready(data) => {
            let count_label = profile_count_label(data.cards.len());
            rsx! {
                div { class: "page listing-page",
                    if !notice_dismissed() {
                        StatusNotice { kind: NoticeKind::Success, on_dismiss: dismiss }
                    }
                    header { class: "view-header",
                        h1 { class: "view-title", "Team Directory" }
                        p { class: "view-subtitle", "Discover our talented team members" }
                        span { class: "count-badge", "{count_label}" }
                    }
                    main { class: "listing-main",
                        if data.cards.is_empty() {
                            div { class: "empty-state",
                                h3 { "No profiles found" }
                                p { "Check back later for team member profiles." }
                            }
                        } else {
                            div { class: "profile-grid",
                                for card in data.cards {
                                    ProfileCard {
                                        key: "{card.id}",
                                        card: card.clone(),
                                        on_view_profile: open_profile,
                                        on_view_details: open_details,
                                    }
                                }
                            }
                        }
                        div { class: "refresh-row",
                            button {
                                class: "btn btn-primary",
                                r#type: "button",
                                onclick: move |_| refresh.call(()),
                                "Refresh Data"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ProfileCard(
    card: ProfileCardVm,
    on_view_profile: Callback<ProfileId>,
    on_view_details: Callback<ProfileId>,
) -> Element {
    let profile_id = card.id.clone();
    let details_id = card.id.clone();

    rsx! {
        article { class: "profile-card", "data-profile-id": "{card.id}",
            div { class: "profile-card__banner" }
            div { class: "profile-card__avatar",
                Avatar { avatar: card.avatar.clone(), class: "avatar avatar--card" }
                span { class: "status-dot" }
            }
            div { class: "profile-card__body",
                h3 { class: "profile-card__name", "{card.name}" }
                span { class: "title-badge", "{card.title}" }
                if let Some(description) = card.description.as_ref() {
                    p { class: "profile-card__description", "{description}" }
                }
                p { class: "profile-card__joined", "Joined {card.joined_str}" }
                div { class: "profile-card__actions",
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        onclick: move |_| on_view_profile.call(profile_id.clone()),
                        "View Profile"
                    }
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| on_view_details.call(details_id.clone()),
                        "View Details"
                    }
                }
            }
        }
    }
}

#[component]
fn StatusNotice(kind: NoticeKind, on_dismiss: EventHandler<MouseEvent>) -> Element {
    let (class, text) = match kind {
        NoticeKind::Success => ("notice notice--success", "Data fetched successfully!"),
        NoticeKind::Failure => ("notice notice--failure", "Failed to fetch data."),
    };

    rsx! {
        div { class: "{class}", role: "status",
            span { "{text}" }
            button {
                class: "notice-dismiss",
                r#type: "button",
                onclick: move |evt| on_dismiss.call(evt),
                "Dismiss"
            }
        }
    }
}
