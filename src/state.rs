//! Shared application state injected into every handler.

use std::sync::Arc;
use std::time::Instant;

use crate::application::services::{LinkService, RedirectService};
use crate::config::ShortenerSettings;
use crate::domain::repositories::UrlRepository;
use crate::infrastructure::cache::CacheService;
use crate::utils::code_generator::RandomCodeGenerator;

/// Link service over any store backend with random code generation.
pub type AppLinkService = LinkService<dyn UrlRepository, RandomCodeGenerator>;

/// Redirect service over any store backend.
pub type AppRedirectService = RedirectService<dyn UrlRepository>;

/// Cheaply cloneable handle to the services.
///
/// Both services share one repository handle, so shortening and redirects see
/// the same store.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<AppLinkService>,
    pub redirect_service: Arc<AppRedirectService>,
    pub cache: Arc<dyn CacheService>,
    pub started_at: Instant,
}

impl AppState {
    pub fn new(
        repository: Arc<dyn UrlRepository>,
        cache: Arc<dyn CacheService>,
        settings: &ShortenerSettings,
    ) -> Self {
        let link_service = LinkService::new(
            Arc::clone(&repository),
            RandomCodeGenerator::new(settings.code_length),
            settings.max_attempts,
            settings.base_url.clone(),
        );
        let redirect_service =
            RedirectService::new(repository, Arc::clone(&cache), settings.code_length);

        Self {
            link_service: Arc::new(link_service),
            redirect_service: Arc::new(redirect_service),
            cache,
            started_at: Instant::now(),
        }
    }
}
