use serde::{Deserialize, Serialize};

use self::highlight::HighlightConfig;
use self::network::NetworkConfig;

pub mod highlight;
pub mod network;

#[derive(Default, Serialize, Deserialize, Clone)]
pub struct Config {
    pub network: NetworkConfig,
    pub highlight: HighlightConfig,
}

impl Config {
    pub fn new() -> Self {
        Config {
            network: NetworkConfig::new(),
            highlight: HighlightConfig::new(),
        }
    }
}
