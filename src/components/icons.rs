use dioxus::prelude::*;

/// Glyphs used on the profile screens (lucide outlines)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Glyph {
    ChevronLeft,
    Droplet,
    Globe,
    Person,
    Heart,
    MoreHorizontal,
    MessageCircle,
    Users,
}

#[derive(Props, Clone, PartialEq)]
pub struct IconProps {
    pub glyph: Glyph,
    #[props(default = "w-5 h-5".to_string())]
    pub class: String,
    #[props(default = false)]
    pub filled: bool,
}

#[component]
pub fn Icon(props: IconProps) -> Element {
    let fill_value = if props.filled { "currentColor" } else { "none" };
    rsx! {
        svg {
            class: "{props.class}",
            xmlns: "http://www.w3.org/2000/svg",
            width: "24",
            height: "24",
            view_box: "0 0 24 24",
            fill: "{fill_value}",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            {glyph_shapes(props.glyph)}
        }
    }
}

fn glyph_shapes(glyph: Glyph) -> Element {
    match glyph {
        Glyph::ChevronLeft => rsx! {
            path { d: "m15 18-6-6 6-6" }
        },
        Glyph::Droplet => rsx! {
            path { d: "M12 22a7 7 0 0 0 7-7c0-2-1-3.9-3-5.5s-3.5-4-4-6.5c-.5 2.5-2 4.9-4 6.5C6 10.1 5 12 5 15a7 7 0 0 0 7 7z" }
        },
        Glyph::Globe => rsx! {
            circle { cx: "12", cy: "12", r: "10" }
            path { d: "M12 2a14.5 14.5 0 0 0 0 20 14.5 14.5 0 0 0 0-20" }
            path { d: "M2 12h20" }
        },
        Glyph::Person => rsx! {
            path { d: "M19 21v-2a4 4 0 0 0-4-4H9a4 4 0 0 0-4 4v2" }
            circle { cx: "12", cy: "7", r: "4" }
        },
        Glyph::Heart => rsx! {
            path { d: "M19 14c1.49-1.46 3-3.21 3-5.5A5.5 5.5 0 0 0 16.5 3c-1.76 0-3 .5-4.5 2-1.5-1.5-2.74-2-4.5-2A5.5 5.5 0 0 0 2 8.5c0 2.3 1.5 4.05 3 5.5l7 7Z" }
        },
        Glyph::MoreHorizontal => rsx! {
            circle { cx: "12", cy: "12", r: "1" }
            circle { cx: "19", cy: "12", r: "1" }
            circle { cx: "5", cy: "12", r: "1" }
        },
        Glyph::MessageCircle => rsx! {
            path { d: "M7.9 20A9 9 0 1 0 4 16.1L2 22Z" }
        },
        Glyph::Users => rsx! {
            path { d: "M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2" }
            circle { cx: "9", cy: "7", r: "4" }
            path { d: "M22 21v-2a4 4 0 0 0-3-3.87" }
            path { d: "M16 3.13a4 4 0 0 1 0 7.75" }
        },
    }
}
