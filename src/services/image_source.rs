use async_trait::async_trait;
use std::fmt;

use crate::stores::settings_store::AppSettings;

/// Why a photo set could not be resolved
#[derive(Debug, Clone, PartialEq)]
pub enum ResolveError {
    /// The display name cannot be used as a lookup key
    InvalidName(String),
    /// The image service could not be reached or refused the request
    Unavailable(String),
    /// The image service answered with something that is not a photo set
    Malformed(String),
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidName(name) => write!(f, "Cannot look up photos for name {:?}", name),
            Self::Unavailable(msg) => write!(f, "Image service unavailable: {}", msg),
            Self::Malformed(msg) => write!(f, "Image service returned a bad photo set: {}", msg),
        }
    }
}

impl std::error::Error for ResolveError {}

/// Resolves a member's display name to the image locations of their photos.
///
/// Implementations may be slow; callers must not assume answers arrive in
/// request order.
#[async_trait(?Send)]
pub trait ImageResolver {
    async fn resolve(&self, display_name: &str) -> Result<Vec<String>, ResolveError>;
}

/// Builds photo URLs from the configured placeholder image service without
/// touching the network.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceholderImageResolver {
    source: String,
    count: usize,
    width: u32,
    height: u32,
}

impl PlaceholderImageResolver {
    pub fn from_settings(settings: &AppSettings) -> Self {
        Self {
            source: settings.photo_source.trim_end_matches('/').to_string(),
            count: settings.photo_count,
            width: settings.photo_width,
            height: settings.photo_height,
        }
    }

    fn photo_url(&self, seed: &str, index: usize) -> String {
        // Nudge the size per photo (400x600, 401x600, 400x601, ...) so the
        // service does not hand back the same cached image for every slot
        let width = self.width + (index % 2) as u32;
        let height = self.height + ((index / 2) % 2) as u32;
        format!(
            "{}/{}x{}?{}&sig={}",
            self.source,
            width,
            height,
            urlencoding::encode(seed),
            index
        )
    }
}

#[async_trait(?Send)]
impl ImageResolver for PlaceholderImageResolver {
    async fn resolve(&self, display_name: &str) -> Result<Vec<String>, ResolveError> {
        let seed = display_name.trim();
        if seed.is_empty() {
            return Err(ResolveError::InvalidName(display_name.to_string()));
        }
        if self.count == 0 {
            return Err(ResolveError::Malformed("photo count is zero".to_string()));
        }

        log::debug!("Resolving {} placeholder photos for {}", self.count, seed);

        Ok((0..self.count).map(|i| self.photo_url(seed, i)).collect())
    }
}
