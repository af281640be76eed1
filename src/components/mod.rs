// UI Components
// This module contains all reusable UI components

pub mod icons;
pub mod match_card;
pub mod match_tag;
pub mod notice;
pub mod user_profile;

pub use match_card::MatchCard;
pub use match_tag::MatchTag;
pub use notice::NoticeBanner;
pub use user_profile::UserProfile;
