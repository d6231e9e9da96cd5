mod theme;

use dioxus::prelude::*;

use crate::{
    api::{ApiClient, ContractService, ProfileService, ProjectService, RequestService},
    config::AppConfig,
    loading::prelude::*,
};

/// Creates the app-wide services and provides them to the component tree.
///
/// Called once, from the root component.
pub fn use_init_services() -> LoadingController {
    log::debug!("init_services - start");
    let config = use_context_provider(AppConfig::load);
    use_context_provider(|| ApiClient::new(config.api_base_url.clone()));
    let _ = use_init_interaction_lock();
    let loading_controller = use_init_loading_controller();
    log::debug!("init_services - finished");
    loading_controller
}

pub fn use_app_config() -> AppConfig {
    use_context()
}

pub fn use_api_client() -> ApiClient {
    use_context()
}

pub fn use_project_service() -> ProjectService {
    ProjectService::new(use_api_client())
}

pub fn use_contract_service() -> ContractService {
    ContractService::new(use_api_client())
}

pub fn use_request_service() -> RequestService {
    RequestService::new(use_api_client())
}

pub fn use_profile_service() -> ProfileService {
    ProfileService::new(use_api_client())
}

pub mod prelude {
    pub use super::theme::Theme;

    pub mod state_management {
        pub use super::super::theme::THEME;
        pub use super::super::{
            use_app_config, use_contract_service, use_profile_service, use_project_service,
            use_request_service,
        };
    }
}
