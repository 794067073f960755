pub mod config;
pub mod metrics;
pub mod search;
pub mod testing;

pub use config::{
    load_config, load_config_from_str, validate_config, Config, ConfigError, RetryConfig,
    SanitizedConfig, ServerConfig, VideoSearchConfig,
};
pub use search::{
    apply_facets, backoff_delay, Classification, FailureCause, FallbackCatalog, FetchError,
    Language, Level, RawVideoItem, ResultSource, RetryController, RetryPolicy, RetryState,
    SearchOutcome, SearchRequest, Sleeper, Subject, TokioSleeper, VideoRecord, VideoSearchService,
    VideoSource, YoutubeSource,
};
