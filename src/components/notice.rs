use dioxus::prelude::*;

use crate::stores::notice_store::{dismiss_notice, NOTICE};
use crate::stores::settings_store::SETTINGS;

/// Shows the current notice at the top of the screen.
/// Click to dismiss; otherwise it goes away after the configured timeout.
#[component]
pub fn NoticeBanner() -> Element {
    let notice = NOTICE.read().clone();

    // Schedule the dismissal of whichever notice is showing. A timer that
    // outlives its notice finds a different id and does nothing.
    use_effect(move || {
        let Some(id) = NOTICE.read().as_ref().map(|n| n.id) else {
            return;
        };
        let timeout_ms = SETTINGS.peek().notice_timeout_ms;

        spawn(async move {
            gloo_timers::future::TimeoutFuture::new(timeout_ms).await;
            dismiss_notice(id);
        });
    });

    let Some(notice) = notice else {
        return rsx! {};
    };
    let id = notice.id;

    rsx! {
        div {
            class: "fixed top-4 left-1/2 -translate-x-1/2 z-50 max-w-sm px-4 py-3 rounded-lg bg-foreground text-background text-sm shadow-lg cursor-pointer",
            role: "status",
            onclick: move |_| dismiss_notice(id),
            "{notice.message}"
        }
    }
}
