use dioxus::prelude::*;
use dioxus_router::use_navigator;
use directory_core::ProfileId;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::avatar::Avatar;
use crate::views::{LoadingPanel, ViewError, ViewState, use_async_resource};
use crate::vm::{ProfileDetailVm, map_profile_detail};

/// Detail page for one profile. Refetches whenever `id` changes.
#[component]
pub fn ProfileView(id: String) -> Element {
    let ctx = use_context::<AppContext>();
    let directory = ctx.directory();
    let navigator = use_navigator();

    let profile = use_async_resource(use_reactive((&id,), move |(id,)| {
        let directory = directory.clone();
        async move {
            let id = ProfileId::new(id).map_err(|err| ViewError::new(err.to_string()))?;
            let profile = directory
                .get_profile(&id)
                .await
                .map_err(|err| ViewError::profile_lookup(&err))?;
            Ok::<_, ViewError>(profile.as_ref().map(map_profile_detail))
        }
    }));

    let retry = use_callback(move |()| {
        let mut profile = profile;
        profile.trigger();
    });
    let back_to_listing = use_callback(move |()| {
        let _ = navigator.push(Route::Listing {});
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<crate::views::ViewTestHandles>() {
                handles.register_profile(retry, back_to_listing);
            }
        }
    }

    match profile.state() {
        ViewState::Idle | ViewState::Loading => rsx! {
            LoadingPanel {
                title: "Loading Profile",
                detail: "Please wait while we fetch the profile data...",
            }
        },
        ViewState::Error(err) => rsx! {
            div { class: "page page--centered page--error",
                div { class: "panel panel--error",
                    h2 { class: "panel-title", "Profile Not Found" }
                    p { class: "panel-text error-message", "{err.message()}" }
                    div { class: "panel-actions",
                        button {
                            class: "btn btn-danger",
                            r#type: "button",
                            onclick: move |_| retry.call(()),
                            "Try Again"
                        }
                        button {
                            class: "btn btn-muted",
                            r#type: "button",
                            onclick: move |_| back_to_listing.call(()),
                            "Back to Listing"
                        }
                    }
                }
            }
        },
        // Fetched but empty renders nothing.
        ViewState::Ready(None) => rsx! {},
        ViewState::Ready(Some(detail)) => rsx! {
            ProfileDetails { detail, on_back: back_to_listing }
        },
    }
}

#[component]
fn ProfileDetails(detail: ProfileDetailVm, on_back: Callback<()>) -> Element {
    rsx! {
        div { class: "page profile-page", "data-profile-id": "{detail.id}",
            header { class: "view-header",
                button {
                    class: "btn btn-link",
                    r#type: "button",
                    onclick: move |_| on_back.call(()),
                    "Back to Team Directory"
                }
                h1 { class: "view-title", "Profile Details" }
                p { class: "view-subtitle", "Complete information about team member" }
            }
            main { class: "profile-layout",
                aside { class: "profile-summary",
                    div { class: "profile-summary__identity",
                        Avatar { avatar: detail.avatar.clone(), class: "avatar avatar--detail" }
                        h2 { class: "profile-summary__name", "{detail.name}" }
                        span { class: "title-badge", "{detail.title}" }
                    }
                    section { class: "profile-contact",
                        h3 { "Contact Information" }
                        ul {
                            li { class: "contact-email", "{detail.contact_email}" }
                            li { class: "contact-phone", "{detail.phone}" }
                            li { class: "contact-location", "{detail.location}" }
                        }
                    }
                }
                div { class: "profile-sections",
                    section { class: "profile-section",
                        h3 { "About" }
                        if let Some(description) = detail.description.as_ref() {
                            p { class: "profile-about", "{description}" }
                        }
                        p { class: "profile-about profile-about--extra", "{detail.about_extra}" }
                    }
                    section { class: "profile-section",
                        h3 { "Professional Details" }
                        dl { class: "profile-facts",
                            dt { "Current Position" }
                            dd { "{detail.title}" }
                            dt { "Department" }
                            dd { "{detail.department}" }
                            dt { "Employee ID" }
                            dd { "{detail.employee_id}" }
                            dt { "Experience" }
                            dd { "{detail.experience}" }
                        }
                    }
                    section { class: "profile-section",
                        h3 { "Timeline" }
                        ol { class: "timeline",
                            li {
                                p { class: "timeline-title", "Joined Company" }
                                p { class: "timeline-text", "{detail.joined_str}" }
                            }
                            li {
                                p { class: "timeline-title", "Profile Created" }
                                p { class: "timeline-text", "Account setup completed" }
                            }
                            li {
                                p { class: "timeline-title", "Last Updated" }
                                p { class: "timeline-text", "Profile information updated" }
                            }
                        }
                    }
                    section { class: "profile-section",
                        h3 { "Skills & Performance" }
                        div { class: "skills",
                            for skill in detail.skills.iter() {
                                div { key: "{skill.name}", class: "skill",
                                    div { class: "skill-header",
                                        h4 { "{skill.name}" }
                                        span { class: "skill-rating", "{skill.rating}/5" }
                                    }
                                    div { class: "skill-bar",
                                        div {
                                            class: "skill-bar__fill",
                                            style: "width: {skill.bar_percent}%",
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
