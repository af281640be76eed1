use dioxus::prelude::*;

use crate::routes::Route;
use crate::stores::profiles::Profile;
use crate::utils::profile_info::{format_match_percent, name_and_age};

/// Entry in the matches list, linking to the full profile
#[component]
pub fn MatchCard(profile: Profile) -> Element {
    let heading = name_and_age(&profile);
    let percent = format_match_percent(profile.percent);

    rsx! {
        Link {
            to: Route::MatchProfile { name: profile.name.clone() },
            class: "flex items-center gap-4 p-4 border-b border-border hover:bg-accent transition",
            img {
                class: "w-16 h-16 rounded-full object-cover bg-muted",
                src: "{profile.get_avatar_url()}",
                alt: "{profile.get_initials()}"
            }
            div {
                class: "flex-1 min-w-0",
                p {
                    class: "font-semibold truncate",
                    "{heading}"
                }
                p {
                    class: "text-sm text-muted-foreground truncate",
                    "{profile.bio}"
                }
            }
            span {
                class: "text-sm font-semibold text-pink-500",
                "{percent}"
            }
        }
    }
}
