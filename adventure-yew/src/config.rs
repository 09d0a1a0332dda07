/// Runtime settings for the browser app
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Path of the offline-caching worker script, relative to the page
    pub service_worker_path: String,
    /// Pause before showing a result, in milliseconds
    pub simulated_delay_ms: u32,
}

impl AppConfig {
    pub const DEFAULT_SERVICE_WORKER_PATH: &'static str = "./sw.js";
    pub const DEFAULT_SIMULATED_DELAY_MS: u32 = 1000;

    pub fn new() -> Self {
        Self {
            service_worker_path: Self::DEFAULT_SERVICE_WORKER_PATH.to_string(),
            simulated_delay_ms: Self::DEFAULT_SIMULATED_DELAY_MS,
        }
    }

    /// Defaults overridden by `ADVENTURE_SW_PATH` / `ADVENTURE_DELAY_MS` at build time
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("ADVENTURE_SW_PATH"),
            option_env!("ADVENTURE_DELAY_MS"),
        )
    }

    fn from_values(sw_path: Option<&str>, delay_ms: Option<&str>) -> Self {
        let mut config = Self::new();
        if let Some(path) = sw_path.filter(|path| !path.is_empty()) {
            config.service_worker_path = path.to_string();
        }
        if let Some(delay) = delay_ms.and_then(|delay| delay.parse().ok()) {
            config.simulated_delay_ms = delay;
        }
        config
    }

    pub fn with_simulated_delay(mut self, delay_ms: u32) -> Self {
        self.simulated_delay_ms = delay_ms;
        self
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}
