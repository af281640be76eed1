use dioxus::prelude::*;

use crate::components::icons::{Glyph, Icon};
use crate::components::MatchTag;
use crate::hooks::use_profile_view;
use crate::stores::profile_view::{PhotoStatus, ViewMode};
use crate::stores::profiles::Profile;
use crate::utils::profile_info::{format_match_percent, info_lines, name_and_age, InfoField};

fn info_glyph(field: InfoField) -> Glyph {
    match field {
        InfoField::BloodType => Glyph::Droplet,
        InfoField::Birthplace => Glyph::Globe,
        InfoField::Height => Glyph::Person,
        InfoField::Measurements => Glyph::Heart,
    }
}

/// Profile screen for one member
///
/// With `is_other` set the screen shows someone else's profile: a back
/// button, the match tag and the chat controls appear, and the photo grid is
/// looked up by name instead of showing the placeholder set.
#[component]
pub fn UserProfile(profile: Profile, #[props(default = false)] is_other: bool) -> Element {
    let profile_view = use_profile_view(profile.clone(), ViewMode::from_is_other(is_other));

    let view = profile_view.view();
    let state = view.read();
    let mode = state.mode();
    let photos = state.photos().to_vec();
    let status = state.photo_status().clone();
    let background_height = state.background_height();
    drop(state); // Release borrow before rendering

    let lines = profile.full_info.as_ref().map(info_lines);
    let heading = name_and_age(&profile);
    let container_id = profile_view.container_id();

    rsx! {
        div {
            id: "{container_id}",
            class: "relative flex flex-col h-full overflow-y-auto bg-background",

            img {
                class: "w-full aspect-[0.9] object-cover",
                src: "{profile.get_avatar_url()}",
                alt: "{profile.name}"
            }

            if mode.is_other() {
                button {
                    class: "absolute top-[30px] left-0 w-[60px] h-[60px] flex items-center justify-center text-white",
                    "aria-label": "Back",
                    onclick: move |_| profile_view.back(),
                    Icon { glyph: Glyph::ChevronLeft, class: "w-10 h-10" }
                }
            }

            div {
                class: "relative z-[2]",
                div {
                    class: "absolute -top-[25px] w-full px-5",
                    onresize: move |evt| {
                        match evt.data().get_border_box_size() {
                            Ok(size) => profile_view.measured(size.height),
                            Err(e) => log::debug!("Info block size unavailable: {:?}", e),
                        }
                    },

                    if mode.is_other() {
                        MatchTag { percent: format_match_percent(profile.percent) }
                    }

                    // Info card
                    div {
                        class: "flex flex-col items-center text-center rounded-2xl bg-card shadow px-2.5 pt-2.5 pb-4",
                        if mode.is_other() {
                            div { class: "h-2.5" }
                        }
                        h1 {
                            class: "text-xl font-bold",
                            "{heading}"
                        }
                        if !profile.bio.is_empty() {
                            p {
                                class: "text-muted-foreground whitespace-pre-wrap",
                                "{profile.bio}"
                            }
                        }
                        if let Some(lines) = lines {
                            div {
                                class: "w-full pl-2.5 mt-2.5 text-left",
                                for line in lines {
                                    p {
                                        key: "{line.field.label()}",
                                        class: "flex items-center gap-1 text-muted-foreground",
                                        Icon { glyph: info_glyph(line.field), class: "w-4 h-4" }
                                        "{line.field.label()}: {line.value}"
                                    }
                                }
                            }
                        }
                    }

                    if mode.is_other() {
                        div {
                            class: "flex flex-row items-center justify-center mx-auto pt-5",
                            button {
                                class: "w-[55px] h-[55px] rounded-full bg-gradient-to-r from-pink-500 to-orange-400 text-white flex items-center justify-center",
                                "aria-label": "More options",
                                onclick: move |_| log::info!("More options requested"),
                                Icon { glyph: Glyph::MoreHorizontal, class: "w-4 h-4" }
                            }
                            button {
                                class: "ml-5 h-[55px] px-5 rounded-full bg-gradient-to-r from-pink-500 to-orange-400 text-white flex items-center gap-2",
                                onclick: move |_| log::info!("Chat requested"),
                                Icon { glyph: Glyph::MessageCircle, class: "w-4 h-4" }
                                "Start Chatting"
                            }
                        }
                    }

                    // Photos card
                    div {
                        class: "mt-5 rounded-2xl bg-card shadow px-5 pt-4",
                        h2 {
                            class: "text-xl font-bold mb-2.5",
                            "Photos"
                        }
                        {
                            match status {
                                PhotoStatus::Resolving => rsx! {
                                    p {
                                        class: "text-sm text-muted-foreground mb-2",
                                        "Loading photos..."
                                    }
                                },
                                PhotoStatus::Failed(reason) => rsx! {
                                    p {
                                        class: "text-sm text-muted-foreground mb-2",
                                        title: "{reason}",
                                        "Couldn't refresh photos, showing the last ones we had."
                                    }
                                },
                                PhotoStatus::Ready => rsx! {},
                            }
                        }
                        div {
                            class: "grid grid-cols-2 gap-x-[4%]",
                            for (index, photo) in photos.into_iter().enumerate() {
                                img {
                                    key: "{index}",
                                    class: "w-full aspect-[2/3] object-cover rounded-2xl mb-4",
                                    src: "{photo}",
                                    alt: "Photo {index + 1}"
                                }
                            }
                        }
                    }
                }
            }

            // Background behind the overlapping info block
            div {
                class: "w-full bg-muted",
                style: "height: {background_height}px;",
            }
        }
    }
}
