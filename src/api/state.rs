use crate::core::AppConfig;
use crate::script::RestaurantInfo;

pub struct AppState {
    pub config: AppConfig,
    // Facts shown on the info panel
    pub restaurant: RestaurantInfo,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            restaurant: RestaurantInfo::default(),
        }
    }
}
