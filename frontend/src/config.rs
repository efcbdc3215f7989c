use shared::constants::DEFAULT_API_BASE_URL;
use web_sys::window;

pub fn get_api_base_url() -> String {
    // The backend serves this page, so API calls go to the same origin
    if let Some(window) = window() {
        if let Ok(host) = window.location().host() {
            if !host.is_empty() {
                let protocol = window.location().protocol().unwrap_or_else(|_| "http:".to_string());
                return format!("{}//{}", protocol, host);
            }
        }
    }

    // Opened from disk or a test harness
    DEFAULT_API_BASE_URL.to_string()
}
