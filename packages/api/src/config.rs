//! Backend location.

/// Base URL used when no override is compiled in.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000/api";

/// Base URL of the REST backend.
///
/// Resolved at build time from the `WARDEN_API_URL` environment variable;
/// wasm has no process environment, so a runtime lookup is not an option.
pub fn base_url() -> String {
    option_env!("WARDEN_API_URL")
        .unwrap_or(DEFAULT_BASE_URL)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_base_url_points_at_the_local_backend() {
        if option_env!("WARDEN_API_URL").is_none() {
            assert_eq!(base_url(), "http://localhost:5000/api");
        }
    }
}
