use dioxus::prelude::*;

use crate::routes::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    log::debug!("No route for /{}", path);

    rsx! {
        div {
            class: "min-h-screen flex flex-col items-center justify-center gap-4",
            h1 {
                class: "text-2xl font-bold",
                "Page not found"
            }
            p {
                class: "text-muted-foreground",
                "/{path}"
            }
            Link {
                to: Route::Me {},
                class: "text-pink-500 hover:underline",
                "Go to your profile"
            }
        }
    }
}
