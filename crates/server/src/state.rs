use eduseek_core::{Config, SanitizedConfig, VideoSearchService};

/// Shared application state
pub struct AppState {
    config: Config,
    search: VideoSearchService,
}

impl AppState {
    pub fn new(config: Config, search: VideoSearchService) -> Self {
        Self { config, search }
    }

    pub fn sanitized_config(&self) -> SanitizedConfig {
        SanitizedConfig::from(&self.config)
    }

    pub fn search(&self) -> &VideoSearchService {
        &self.search
    }
}
