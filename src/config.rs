use typed_builder::TypedBuilder;

pub const BASE_URL: &str = "https://opensnow.com";
pub const STATE_PATH: &str = "/state/";

/// Column widths of the aligned report.
pub const NAME_WIDTH: usize = 30;
pub const VALUE_WIDTH: usize = 5;

#[derive(Clone, Debug, TypedBuilder)]
pub struct SiteConfig {
    #[builder(default = BASE_URL.to_owned(), setter(into))]
    pub base_url: String,
    #[builder(default = STATE_PATH.to_owned(), setter(into))]
    pub state_path: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}
