//! Frontend configuration

/// Storefront client configuration
pub struct StoreConfig;

impl StoreConfig {
    /// localStorage key for the bearer token
    pub const TOKEN_KEY: &'static str = "pf_auth_token";

    /// localStorage key for the cached user profile (cleared with the token)
    pub const PROFILE_KEY: &'static str = "pf_auth_user";

    /// localStorage key for the theme preference (survives logout)
    pub const THEME_KEY: &'static str = "pf_theme";

    /// localStorage key for the sound toggle (survives logout)
    pub const SOUND_KEY: &'static str = "pf_sound_enabled";
}

/// Get the base URL for API calls
pub fn base_url() -> String {
    // Try to get from window location
    if let Some(window) = web_sys::window() {
        if let Ok(location) = window.location().origin() {
            return location;
        }
    }

    // Default to relative URLs
    String::new()
}
