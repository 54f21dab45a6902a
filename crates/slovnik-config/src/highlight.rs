use std::env;

use serde::{Deserialize, Serialize};

fn default_abbreviations() -> Vec<String> {
    vec!["sb".to_string(), "sth".to_string()]
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct HighlightConfig {
    /// Whole-word tokens rendered in the secondary emphasis style
    #[serde(default = "default_abbreviations")]
    pub abbreviations: Vec<String>,
}

impl HighlightConfig {
    pub fn new() -> Self {
        // Comma-separated override, e.g. SLOVNIK_ABBREVIATIONS=sb,sth,etc
        let abbreviations: Vec<String> = env::var("SLOVNIK_ABBREVIATIONS")
            .map(|v| {
                v.split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        if abbreviations.is_empty() {
            return Self::default();
        }

        Self { abbreviations }
    }
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            abbreviations: default_abbreviations(),
        }
    }
}
