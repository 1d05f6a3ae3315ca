use std::{collections::HashMap, fs};

pub const DEFAULT_FACT_URL: &str = "https://uselessfacts.jsph.pl/api/v2/facts/random?language=en";

#[derive(Debug, Clone)]
pub struct Settings {
    pub fact_url: String,
    pub simulated_latency_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            fact_url: DEFAULT_FACT_URL.into(),
            simulated_latency_ms: 300,
        }
    }
}

pub fn load_settings() -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string("factfeed.toml") {
        if let Ok(file_cfg) = toml::from_str::<HashMap<String, String>>(&raw) {
            if let Some(v) = file_cfg.get("fact_url") {
                settings.fact_url = v.clone();
            }
            if let Some(v) = file_cfg.get("simulated_latency_ms") {
                if let Ok(parsed) = v.parse::<u64>() {
                    settings.simulated_latency_ms = parsed;
                }
            }
        }
    }

    if let Ok(v) = std::env::var("FACT_URL") {
        settings.fact_url = v;
    }
    if let Ok(v) = std::env::var("APP__FACT_URL") {
        settings.fact_url = v;
    }

    if let Ok(v) = std::env::var("APP__SIMULATED_LATENCY_MS") {
        if let Ok(parsed) = v.parse::<u64>() {
            settings.simulated_latency_ms = parsed;
        }
    }

    settings
}

pub fn normalize_fact_url(raw: &str) -> String {
    let raw = raw.trim();

    if raw.is_empty() {
        return Settings::default().fact_url;
    }

    if raw.contains("://") {
        return raw.to_string();
    }

    format!("https://{raw}")
}
