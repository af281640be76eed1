use dioxus::prelude::*;

use crate::components::MatchCard;
use crate::stores::matches::MATCHES;

#[component]
pub fn Matches() -> Element {
    let matches = MATCHES.read().clone();

    rsx! {
        div {
            class: "h-full overflow-y-auto",
            div {
                class: "sticky top-0 z-10 bg-background/80 backdrop-blur-sm border-b border-border px-4 py-3",
                h2 {
                    class: "text-xl font-bold",
                    "Matches"
                }
            }

            if matches.is_empty() {
                div {
                    class: "p-8 text-center text-muted-foreground",
                    "No matches yet."
                }
            }

            for profile in matches {
                MatchCard {
                    key: "{profile.name}",
                    profile: profile
                }
            }
        }
    }
}
