// Global state management
// Stores provide shared state across the application

pub mod matches;
pub mod notice_store;
pub mod profile_view;
pub mod profiles;
pub mod settings_store;
