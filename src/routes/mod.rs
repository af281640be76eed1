use dioxus::prelude::*;

pub mod me;
pub mod matches;
pub mod match_profile;
pub mod not_found;

use me::Me;
use matches::Matches;
use match_profile::MatchProfile;
use not_found::NotFound;

use crate::components::icons::{Glyph, Icon};
use crate::components::NoticeBanner;

/// App routes
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/")]
        Me {},

        #[route("/matches")]
        Matches {},

        #[route("/matches/:name")]
        MatchProfile { name: String },
    #[end_layout]

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

#[component]
fn Layout() -> Element {
    rsx! {
        div {
            class: "flex flex-col h-screen max-w-md mx-auto bg-background",

            NoticeBanner {}

            main {
                class: "flex-1 min-h-0",
                Outlet::<Route> {}
            }

            // Bottom tab bar
            nav {
                class: "flex border-t border-border bg-background",
                TabLink {
                    to: Route::Matches {},
                    glyph: Glyph::Users,
                    label: "Matches"
                }
                TabLink {
                    to: Route::Me {},
                    glyph: Glyph::Person,
                    label: "Me"
                }
            }
        }
    }
}

#[component]
fn TabLink(to: Route, glyph: Glyph, label: &'static str) -> Element {
    let current_route = use_route::<Route>();

    // A match profile belongs to the Matches tab
    let is_active = match (&to, &current_route) {
        (Route::Me {}, Route::Me {}) => true,
        (Route::Matches {}, Route::Matches {} | Route::MatchProfile { .. }) => true,
        _ => false,
    };

    let color_class = if is_active { "text-pink-500" } else { "text-muted-foreground" };

    rsx! {
        Link {
            to: to,
            class: "flex-1 flex flex-col items-center gap-1 py-2 text-xs {color_class}",
            Icon { glyph: glyph, class: "w-6 h-6" }
            span {
                "{label}"
            }
        }
    }
}
