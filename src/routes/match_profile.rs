use dioxus::prelude::*;

use crate::components::UserProfile;
use crate::routes::Route;
use crate::stores::matches::find_match;

/// Someone else's profile, looked up by name.
///
/// Moving between matches keeps this screen mounted; the profile screen
/// notices the new identity and refreshes itself.
#[component]
pub fn MatchProfile(name: String) -> Element {
    let profile = find_match(&name);

    rsx! {
        if let Some(profile) = profile {
            UserProfile { profile: profile, is_other: true }
        } else {
            div {
                class: "p-8 text-center",
                p {
                    class: "text-muted-foreground mb-4",
                    "We couldn't find {name}."
                }
                Link {
                    to: Route::Matches {},
                    class: "text-pink-500 hover:underline",
                    "Back to matches"
                }
            }
        }
    }
}
