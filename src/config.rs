//! Application Configuration
//!
//! Where the food service lives and how the table pages.

/// Service location used when nothing overrides it
pub const DEFAULT_API_BASE: &str = "http://localhost:8080";

/// `<meta name="comidas-api-base" content="...">` overrides the base URL at run time
pub const API_BASE_META: &str = "comidas-api-base";

pub const DEFAULT_PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Base URL of the REST service, without a trailing slash
    pub api_base_url: String,
    /// Table rows per page
    pub page_size: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        // COMIDAS_API_BASE is read at build time
        let base = option_env!("COMIDAS_API_BASE").unwrap_or(DEFAULT_API_BASE);
        Self {
            api_base_url: normalize_base(base).unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl AppConfig {
    /// Defaults plus the page's meta tag override, if any
    pub fn load() -> Self {
        let config = Self::default();
        match read_meta_base() {
            Some(base) => config.with_api_base_url(&base),
            None => config,
        }
    }

    /// Override the base URL; blank values are ignored
    #[must_use]
    pub fn with_api_base_url(mut self, base: &str) -> Self {
        if let Some(base) = normalize_base(base) {
            self.api_base_url = base;
        }
        self
    }
}

fn normalize_base(base: &str) -> Option<String> {
    let trimmed = base.trim().trim_end_matches('/');
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[cfg(target_arch = "wasm32")]
fn read_meta_base() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let selector = format!("meta[name=\"{}\"]", API_BASE_META);
    let meta = document.query_selector(&selector).ok()??;
    meta.get_attribute("content")
}

#[cfg(not(target_arch = "wasm32"))]
fn read_meta_base() -> Option<String> {
    None
}
