use dioxus::prelude::*;

use crate::components::UserProfile;
use crate::stores::matches::CURRENT_USER;

#[component]
pub fn Me() -> Element {
    let me = CURRENT_USER.read().clone();

    rsx! {
        if let Some(profile) = me {
            UserProfile { profile: profile }
        } else {
            div {
                class: "p-8 text-center text-muted-foreground",
                "Your profile is not available."
            }
        }
    }
}
