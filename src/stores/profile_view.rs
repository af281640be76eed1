//! State behind a single profile screen
//!
//! The controller keeps the photo grid, the scroll position and the measured
//! background height in step with whichever profile the screen is showing.
//! It knows nothing about Dioxus: the host feeds it profile changes and layout
//! measurements, runs the photo requests it hands out, and passes the answers
//! back through [`ProfileViewController::apply`].
//!
//! Photo requests are tagged with a generation. Only the answer to the most
//! recent request may touch the photo set; anything older is dropped on
//! arrival, whatever order the resolver answers in.

use crate::services::image_source::{ImageResolver, ResolveError};
use crate::stores::profiles::{Profile, ProfileKey};

/// Height of the trailing spacer before the info block has been measured
pub const DEFAULT_BACKGROUND_HEIGHT: f64 = 600.0;

/// How far the info block overlaps the spacer behind it
pub const LAYOUT_OVERLAP_OFFSET: f64 = 5.0;

const DEFAULT_PHOTOS: [&str; 4] = [
    "https://source.unsplash.com/random/400x600",
    "https://source.unsplash.com/random/401x600",
    "https://source.unsplash.com/random/400x601",
    "https://source.unsplash.com/random/401x601",
];

/// Photo set shown on one's own profile and before anything is resolved
pub fn default_photos() -> Vec<String> {
    DEFAULT_PHOTOS.iter().map(|s| s.to_string()).collect()
}

/// Whose profile the screen shows
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewMode {
    Own,
    Other,
}

impl ViewMode {
    pub fn from_is_other(is_other: bool) -> Self {
        if is_other {
            ViewMode::Other
        } else {
            ViewMode::Own
        }
    }

    pub fn is_other(&self) -> bool {
        matches!(self, ViewMode::Other)
    }
}

/// What the controller needs from the rendering layer
pub trait LayoutPresenter {
    fn scroll_to(&self, x: f64, y: f64, animated: bool);
    fn go_back(&self);
}

/// Where the photo grid's content stands
#[derive(Clone, Debug, PartialEq)]
pub enum PhotoStatus {
    Ready,
    Resolving,
    /// The last request failed; the previous photos are still shown
    Failed(String),
}

/// A photo lookup handed out by the controller
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PhotoRequest {
    generation: u64,
    pub name: String,
}

impl PhotoRequest {
    /// Ask the resolver and pair the answer with this request
    pub async fn resolve<R>(self, resolver: &R) -> PhotoResolution
    where
        R: ImageResolver + ?Sized,
    {
        let result = resolver.resolve(&self.name).await;
        PhotoResolution {
            request: self,
            result,
        }
    }
}

/// A resolver answer, still tagged with the request it belongs to
#[derive(Clone, Debug, PartialEq)]
pub struct PhotoResolution {
    pub request: PhotoRequest,
    pub result: Result<Vec<String>, ResolveError>,
}

/// What happened to a resolver answer
#[derive(Clone, Debug, PartialEq)]
pub enum PhotoOutcome {
    Applied,
    /// A newer request was issued after this one
    Discarded,
    /// The answer was current but unusable; the previous photos remain
    Failed(String),
}

pub struct ProfileViewController<P> {
    mode: ViewMode,
    presenter: P,
    current: Option<ProfileKey>,
    generation: u64,
    photos: Vec<String>,
    photo_status: PhotoStatus,
    background_height: f64,
}

impl<P: LayoutPresenter> ProfileViewController<P> {
    /// Fresh screen state. The profile itself is only taken into account by
    /// the first [`on_profile_changed`](Self::on_profile_changed) call, which
    /// the host makes once the screen is mounted.
    pub fn new(mode: ViewMode, presenter: P) -> Self {
        Self {
            mode,
            presenter,
            current: None,
            generation: 0,
            photos: default_photos(),
            photo_status: PhotoStatus::Ready,
            background_height: DEFAULT_BACKGROUND_HEIGHT,
        }
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn photos(&self) -> &[String] {
        &self.photos
    }

    pub fn photo_status(&self) -> &PhotoStatus {
        &self.photo_status
    }

    pub fn background_height(&self) -> f64 {
        self.background_height
    }

    /// React to the screen being pointed at `profile`.
    ///
    /// Does nothing when `profile` has the same identity as the one already
    /// shown. Otherwise scrolls back to the top and either resets the photos
    /// (own profile) or returns the request the host must resolve.
    pub fn on_profile_changed(&mut self, profile: &Profile) -> Option<PhotoRequest> {
        let key = profile.key();
        if self.current.as_ref() == Some(&key) {
            return None;
        }

        log::debug!("Profile view switching to {} ({:?})", key.as_str(), self.mode);
        self.current = Some(key);
        self.presenter.scroll_to(0.0, 0.0, false);

        // Any request still out there belongs to the previous profile
        self.generation += 1;

        match self.mode {
            ViewMode::Other => {
                self.photo_status = PhotoStatus::Resolving;
                Some(PhotoRequest {
                    generation: self.generation,
                    name: profile.name.clone(),
                })
            }
            ViewMode::Own => {
                self.photos = default_photos();
                self.photo_status = PhotoStatus::Ready;
                None
            }
        }
    }

    /// Apply a resolver answer if it is still the latest one
    pub fn apply(&mut self, resolution: PhotoResolution) -> PhotoOutcome {
        let PhotoResolution { request, result } = resolution;

        if request.generation != self.generation {
            log::debug!(
                "Dropping photos for {} (generation {}, current {})",
                request.name,
                request.generation,
                self.generation
            );
            return PhotoOutcome::Discarded;
        }

        match result {
            Ok(photos) if !photos.is_empty() => {
                log::debug!("Showing {} photos for {}", photos.len(), request.name);
                self.photos = photos;
                self.photo_status = PhotoStatus::Ready;
                PhotoOutcome::Applied
            }
            Ok(_) => self.fail(&request, ResolveError::Malformed("no photos".to_string())),
            Err(e) => self.fail(&request, e),
        }
    }

    fn fail(&mut self, request: &PhotoRequest, error: ResolveError) -> PhotoOutcome {
        log::warn!("Could not load photos for {}: {}", request.name, error);
        let message = error.to_string();
        self.photo_status = PhotoStatus::Failed(message.clone());
        PhotoOutcome::Failed(message)
    }

    /// The info block was laid out at `measured_height`
    pub fn on_layout_measured(&mut self, measured_height: f64) {
        self.background_height = measured_height - LAYOUT_OVERLAP_OFFSET;
    }

    /// Leave the screen. Only meaningful when viewing someone else; returns
    /// whether navigation was requested.
    pub fn request_back(&self) -> bool {
        if !self.mode.is_other() {
            log::debug!("Ignoring back request on own profile");
            return false;
        }
        self.presenter.go_back();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;
    use std::time::Duration;

    #[derive(Clone, Debug, PartialEq)]
    enum Call {
        ScrollTo { x: f64, y: f64, animated: bool },
        GoBack,
    }

    #[derive(Clone, Default)]
    struct RecordingPresenter {
        calls: Rc<RefCell<Vec<Call>>>,
    }

    impl LayoutPresenter for RecordingPresenter {
        fn scroll_to(&self, x: f64, y: f64, animated: bool) {
            self.calls.borrow_mut().push(Call::ScrollTo { x, y, animated });
        }

        fn go_back(&self) {
            self.calls.borrow_mut().push(Call::GoBack);
        }
    }

    /// Answers each name after its own delay and counts lookups
    #[derive(Default)]
    struct ScriptedResolver {
        answers: HashMap<String, (u64, Result<Vec<String>, ResolveError>)>,
        lookups: RefCell<Vec<String>>,
    }

    impl ScriptedResolver {
        fn answer(mut self, name: &str, delay_ms: u64, photos: &[&str]) -> Self {
            let photos = photos.iter().map(|s| s.to_string()).collect();
            self.answers.insert(name.to_string(), (delay_ms, Ok(photos)));
            self
        }

        fn fail(mut self, name: &str, error: ResolveError) -> Self {
            self.answers.insert(name.to_string(), (0, Err(error)));
            self
        }
    }

    #[async_trait(?Send)]
    impl ImageResolver for ScriptedResolver {
        async fn resolve(&self, display_name: &str) -> Result<Vec<String>, ResolveError> {
            self.lookups.borrow_mut().push(display_name.to_string());
            let (delay_ms, result) = self
                .answers
                .get(display_name)
                .cloned()
                .unwrap_or_else(|| (0, Err(ResolveError::Unavailable("unscripted".into()))));
            tokio::time::sleep(Duration::from_millis(delay_ms)).await;
            result
        }
    }

    fn profile(name: &str) -> Profile {
        Profile {
            name: name.to_string(),
            avatar: format!("https://example.com/{}.jpg", name),
            age: 25,
            bio: "Hello".to_string(),
            percent: Some(80),
            full_info: None,
        }
    }

    fn controller(mode: ViewMode) -> (ProfileViewController<RecordingPresenter>, RecordingPresenter) {
        let presenter = RecordingPresenter::default();
        (ProfileViewController::new(mode, presenter.clone()), presenter)
    }

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_initial_state_uses_defaults() {
        let (view, _) = controller(ViewMode::Own);
        assert_eq!(view.photos(), default_photos().as_slice());
        assert_eq!(view.photos().len(), 4);
        assert_eq!(view.background_height(), DEFAULT_BACKGROUND_HEIGHT);
        assert_eq!(view.photo_status(), &PhotoStatus::Ready);
    }

    #[test]
    fn test_own_profile_changes_never_request_photos() {
        let (mut view, presenter) = controller(ViewMode::Own);

        for name in ["Linh", "Mai", "Linh", "Ha"] {
            assert!(view.on_profile_changed(&profile(name)).is_none());
            assert_eq!(view.photos(), default_photos().as_slice());
        }

        let scrolls = presenter
            .calls
            .borrow()
            .iter()
            .filter(|c| matches!(c, Call::ScrollTo { .. }))
            .count();
        assert_eq!(scrolls, 4);
    }

    #[test]
    fn test_profile_change_scrolls_to_top_without_animation() {
        let (mut view, presenter) = controller(ViewMode::Other);
        view.on_profile_changed(&profile("Linh"));
        assert_eq!(
            presenter.calls.borrow().as_slice(),
            &[Call::ScrollTo { x: 0.0, y: 0.0, animated: false }]
        );
    }

    #[test]
    fn test_same_identity_is_not_a_change() {
        let (mut view, presenter) = controller(ViewMode::Other);
        assert!(view.on_profile_changed(&profile("Linh")).is_some());

        let mut rebuilt = profile("Linh");
        rebuilt.bio = "Updated bio".to_string();
        assert!(view.on_profile_changed(&rebuilt).is_none());
        assert_eq!(presenter.calls.borrow().len(), 1);
        assert_eq!(view.photo_status(), &PhotoStatus::Resolving);
    }

    #[tokio::test]
    async fn test_other_profile_change_applies_resolved_photos() {
        let resolver = ScriptedResolver::default().answer("Linh", 0, &["a.jpg", "b.jpg"]);
        let (mut view, _) = controller(ViewMode::Other);

        let request = view.on_profile_changed(&profile("Linh")).unwrap();
        assert_eq!(request.name, "Linh");
        assert_eq!(view.photo_status(), &PhotoStatus::Resolving);

        let outcome = view.apply(request.resolve(&resolver).await);
        assert_eq!(outcome, PhotoOutcome::Applied);
        assert_eq!(view.photos(), strings(&["a.jpg", "b.jpg"]).as_slice());
        assert_eq!(view.photo_status(), &PhotoStatus::Ready);
        assert_eq!(resolver.lookups.borrow().as_slice(), &["Linh".to_string()]);
    }

    #[tokio::test]
    async fn test_late_answer_for_previous_profile_is_discarded() {
        // Linh's photos arrive well after Mai's
        let resolver = ScriptedResolver::default()
            .answer("Linh", 40, &["linh-1.jpg"])
            .answer("Mai", 5, &["mai-1.jpg", "mai-2.jpg"]);
        let view = RefCell::new(controller(ViewMode::Other).0);

        let first = view.borrow_mut().on_profile_changed(&profile("Linh")).unwrap();
        let second = view.borrow_mut().on_profile_changed(&profile("Mai")).unwrap();
        assert!(second.generation > first.generation);

        let order = RefCell::new(Vec::new());
        tokio::join!(
            async {
                let resolution = first.resolve(&resolver).await;
                order.borrow_mut().push("Linh");
                view.borrow_mut().apply(resolution)
            },
            async {
                let resolution = second.resolve(&resolver).await;
                order.borrow_mut().push("Mai");
                view.borrow_mut().apply(resolution)
            },
        );

        assert_eq!(order.borrow().as_slice(), &["Mai", "Linh"]);
        assert_eq!(
            view.borrow().photos(),
            strings(&["mai-1.jpg", "mai-2.jpg"]).as_slice()
        );
    }

    #[test]
    fn test_stale_answer_is_discarded_in_either_order() {
        let (mut view, _) = controller(ViewMode::Other);
        let first = view.on_profile_changed(&profile("Linh")).unwrap();
        let second = view.on_profile_changed(&profile("Mai")).unwrap();

        let mai = PhotoResolution {
            request: second,
            result: Ok(strings(&["mai.jpg"])),
        };
        let linh = PhotoResolution {
            request: first,
            result: Ok(strings(&["linh.jpg"])),
        };

        assert_eq!(view.apply(linh.clone()), PhotoOutcome::Discarded);
        assert_eq!(view.photos(), default_photos().as_slice());
        assert_eq!(view.apply(mai), PhotoOutcome::Applied);
        assert_eq!(view.apply(linh), PhotoOutcome::Discarded);
        assert_eq!(view.photos(), strings(&["mai.jpg"]).as_slice());
    }

    #[tokio::test]
    async fn test_failed_lookup_keeps_previous_photos() {
        let resolver = ScriptedResolver::default()
            .answer("Linh", 0, &["linh.jpg"])
            .fail("Mai", ResolveError::Unavailable("timeout".to_string()));
        let (mut view, _) = controller(ViewMode::Other);

        let request = view.on_profile_changed(&profile("Linh")).unwrap();
        view.apply(request.resolve(&resolver).await);

        let request = view.on_profile_changed(&profile("Mai")).unwrap();
        let outcome = view.apply(request.resolve(&resolver).await);

        assert!(matches!(outcome, PhotoOutcome::Failed(ref msg) if msg.contains("timeout")));
        assert_eq!(view.photos(), strings(&["linh.jpg"]).as_slice());
        assert!(matches!(view.photo_status(), PhotoStatus::Failed(_)));
    }

    #[tokio::test]
    async fn test_empty_answer_keeps_previous_photos() {
        let resolver = ScriptedResolver::default().answer("Linh", 0, &[]);
        let (mut view, _) = controller(ViewMode::Other);

        let request = view.on_profile_changed(&profile("Linh")).unwrap();
        let outcome = view.apply(request.resolve(&resolver).await);

        assert!(matches!(outcome, PhotoOutcome::Failed(_)));
        assert_eq!(view.photos(), default_photos().as_slice());
    }

    #[test]
    fn test_layout_measurement_subtracts_overlap() {
        let (mut view, _) = controller(ViewMode::Own);
        for h in [5.0, 5.5, 120.0, 600.0, 1234.25] {
            view.on_layout_measured(h);
            assert_eq!(view.background_height(), h - 5.0);
        }
    }

    #[test]
    fn test_back_only_on_other_profiles() {
        let (view, presenter) = controller(ViewMode::Own);
        assert!(!view.request_back());
        assert!(presenter.calls.borrow().is_empty());

        let (view, presenter) = controller(ViewMode::Other);
        assert!(view.request_back());
        assert_eq!(presenter.calls.borrow().as_slice(), &[Call::GoBack]);
    }

    #[test]
    fn test_view_mode_from_flag() {
        assert_eq!(ViewMode::from_is_other(true), ViewMode::Other);
        assert_eq!(ViewMode::from_is_other(false), ViewMode::Own);
        assert!(!ViewMode::Own.is_other());
    }
}
