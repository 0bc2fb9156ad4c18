use std::sync::Arc;

use storefront_core::application::StorefrontService;
use url::Url;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: StorefrontService,
    /// Base for resolving relative picture paths. Always ends with `/`.
    pub api_url: Arc<Url>,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: StorefrontService, api_url: Url) -> Self {
        Self {
            args,
            service,
            api_url: Arc::new(api_url),
        }
    }
}
