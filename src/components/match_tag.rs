use dioxus::prelude::*;

use crate::components::icons::{Glyph, Icon};

/// Gradient pill with the match percentage, floated above the info card
#[component]
pub fn MatchTag(percent: String) -> Element {
    rsx! {
        div {
            class: "relative z-[3] -mb-4 mx-auto w-fit flex items-center gap-1 px-4 py-1.5 rounded-full bg-gradient-to-r from-pink-500 to-orange-400 text-white text-sm font-semibold shadow",
            Icon { glyph: Glyph::Heart, class: "w-4 h-4", filled: true }
            "{percent} match"
        }
    }
}
