pub mod use_profile_view;

pub use use_profile_view::use_profile_view;
