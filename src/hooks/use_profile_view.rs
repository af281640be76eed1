use dioxus::prelude::*;
use std::rc::Rc;

use crate::services::image_source::{ImageResolver, PlaceholderImageResolver};
use crate::stores::notice_store::show_notice;
use crate::stores::profile_view::{LayoutPresenter, PhotoOutcome, ProfileViewController, ViewMode};
use crate::stores::profiles::Profile;
use crate::stores::settings_store::SETTINGS;

/// Presenter backed by the browser DOM and the app router
#[derive(Clone)]
pub struct DomPresenter {
    #[cfg_attr(not(target_family = "wasm"), allow(dead_code))]
    container_id: String,
}

impl LayoutPresenter for DomPresenter {
    #[cfg_attr(not(target_family = "wasm"), allow(unused_variables))]
    fn scroll_to(&self, x: f64, y: f64, animated: bool) {
        #[cfg(target_family = "wasm")]
        {
            let element = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.get_element_by_id(&self.container_id));

            match element {
                Some(element) => {
                    let options = web_sys::ScrollToOptions::new();
                    options.set_left(x);
                    options.set_top(y);
                    options.set_behavior(if animated {
                        web_sys::ScrollBehavior::Smooth
                    } else {
                        web_sys::ScrollBehavior::Instant
                    });
                    element.scroll_to_with_scroll_to_options(&options);
                }
                None => {
                    log::debug!("Scroll container {} not mounted yet", self.container_id);
                }
            }
        }
    }

    fn go_back(&self) {
        navigator().go_back();
    }
}

/// Handle returned by [`use_profile_view`]
#[derive(Clone, Copy)]
pub struct UseProfileView {
    container_id: Signal<String>,
    view: Signal<ProfileViewController<DomPresenter>>,
}

impl UseProfileView {
    /// DOM id to put on the scrollable container
    pub fn container_id(&self) -> String {
        self.container_id.read().clone()
    }

    pub fn view(&self) -> Signal<ProfileViewController<DomPresenter>> {
        self.view
    }

    /// Feed the rendered height of the info block
    pub fn measured(&self, height: f64) {
        let mut view = self.view;
        view.write().on_layout_measured(height);
    }

    pub fn back(&self) {
        self.view.peek().request_back();
    }
}

/// Profile screen state hook
///
/// Keeps a [`ProfileViewController`] for the lifetime of the screen and
/// notifies it whenever `profile` changes. Photo requests are resolved in the
/// background; failures surface as a notice and leave the grid as it was.
///
/// # Example
/// ```
/// let profile_view = use_profile_view(profile.clone(), ViewMode::Other);
///
/// // In your rsx:
/// div { id: "{profile_view.container_id()}", class: "overflow-y-auto" }
/// ```
pub fn use_profile_view(profile: Profile, mode: ViewMode) -> UseProfileView {
    let container_id = use_signal(|| format!("profile-scroll-{}", uuid::Uuid::new_v4()));
    let mut view = use_signal(|| {
        ProfileViewController::new(
            mode,
            DomPresenter {
                container_id: container_id.peek().clone(),
            },
        )
    });

    let resolver = use_hook(|| {
        Rc::new(PlaceholderImageResolver::from_settings(&SETTINGS.peek())) as Rc<dyn ImageResolver>
    });

    // Runs after mount and again whenever the parent hands us a different profile;
    // the controller itself ignores re-renders of the same person
    use_effect(use_reactive((&profile,), move |(profile,)| {
        let Some(request) = view.write().on_profile_changed(&profile) else {
            return;
        };

        let resolver = resolver.clone();
        spawn(async move {
            let resolution = request.resolve(resolver.as_ref()).await;
            if let PhotoOutcome::Failed(message) = view.write().apply(resolution) {
                show_notice(format!("Couldn't load photos: {}", message));
            }
        });
    }));

    UseProfileView { container_id, view }
}
