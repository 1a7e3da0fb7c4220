use dioxus::prelude::*;

use crate::vm::AvatarVm;

/// Profile image that swaps to the generated placeholder on the first load
/// error, and never again after that.
#[component]
pub fn Avatar(avatar: AvatarVm, class: &'static str) -> Element {
    let mut failed = use_signal(|| None::<String>);
    let src = avatar.src(failed.read().as_deref()).to_string();
    let alt = avatar.alt.clone();

    rsx! {
        img {
            class: "{class}",
            src: "{src}",
            alt: "{alt}",
            onerror: move |_| {
                let next = avatar.failure_to_record(failed.peek().as_deref());
                if let Some(url) = next {
                    log::debug!("avatar {url} failed to load, using placeholder");
                    failed.set(Some(url));
                }
            },
        }
    }
}
