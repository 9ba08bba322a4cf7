use serde::Deserialize;

/// Query parameters for paginated listings.
///
/// `page` is zero-based. Out of range `per_page` values are clamped by the service.
#[derive(Deserialize)]
pub struct PaginationParam {
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_per_page")]
    pub per_page: u64,
}

fn default_per_page() -> u64 {
    20
}
