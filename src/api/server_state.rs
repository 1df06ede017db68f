use std::sync::Arc;

use crate::application::app_configuration::AppConfiguration;
use crate::domain::store::UserStore;

#[derive(Clone)]
pub struct ServerState {
    pub config: AppConfiguration,
    pub user_store: Arc<dyn UserStore>,
}

impl ServerState {
    pub fn new(config: AppConfiguration, user_store: Arc<dyn UserStore>) -> Self {
        ServerState { config, user_store }
    }
}
