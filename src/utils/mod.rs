// Utility functions
// Helper functions for common operations

pub mod profile_info;
