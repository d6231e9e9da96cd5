#![windows_subsystem = "windows"]
mod api;
mod components;
mod config;
mod helper_hooks;
mod loading;
mod state_management;
mod utils;
mod views;

mod prelude {
    pub use super::components::alerts::{alert_error, alert_info, alert_success, alert_warn};
    pub use super::helper_hooks::prelude::*;
    pub use super::loading::prelude::*;
    pub use super::state_management::prelude::*;
    pub use dioxus::prelude::*;
}

use serde::{Deserialize, Serialize};

use api::models::{ContractId, ProjectId, RequestId};
use components::alerts::AlertsContainer;
use prelude::*;

use views::{
    contracts::{
        add::AddContractView, details::ContractDetailsView,
        project_list::ContractProjectListView, select::SelectContractView, ContractListView,
    },
    help::HelpView,
    home::{DashboardView, HomeView, ProjectHomeView},
    main_layout::MainLayout,
    profile::EditProfileView,
    projects::{
        details::ProjectDetailsView,
        form::{CreateProjectView, EditProjectView},
        ProjectDashboardView,
    },
    requests::{create::CreateRequestView, details::RequestDetailsView, RequestListView},
};

#[derive(Clone, Routable, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[rustfmt::skip]
pub enum Route {
    #[layout(MainLayout)]
        #[route("/")]
        HomeView {},
        #[route("/project-home")]
        ProjectHomeView {},
        #[route("/dashboard")]
        DashboardView {},
        #[route("/project-dashboard")]
        ProjectDashboardView {},
        #[route("/project-details/:id")]
        ProjectDetailsView { id: ProjectId },
        #[route("/create-project")]
        CreateProjectView {},
        #[route("/edit-project/:id")]
        EditProjectView { id: ProjectId },
        #[route("/contract")]
        ContractListView {},
        #[route("/contract-details/:id")]
        ContractDetailsView { id: ContractId },
        #[route("/contract-project-list/:project_id")]
        ContractProjectListView { project_id: ProjectId },
        #[route("/add-contract/:project_id")]
        AddContractView { project_id: ProjectId },
        #[route("/select-contract/:project_id")]
        SelectContractView { project_id: ProjectId },
        #[route("/requests")]
        RequestListView {},
        #[route("/request-details/:id")]
        RequestDetailsView { id: RequestId },
        #[route("/create-request/:contract_id")]
        CreateRequestView { contract_id: ContractId },
        #[route("/edit-profile")]
        EditProfileView {},
        #[route("/help")]
        HelpView {},
        #[route("/:..route")]
        PageNotFound { route: Vec<String> },
}

static TITLE: &str = "Grant Desk";

#[allow(non_snake_case)]
fn App() -> Element {
    log::debug!("App reload");

    let _ = crate::state_management::use_init_services();

    use_drop(|| log::debug!("App Dropped"));

    rsx! {
        document::Title { "{TITLE}" }
        document::Stylesheet { href: asset!("/assets/tailwind.css") }

        div {
            id: "app",
            class: "text-base",
            class: if matches!(prelude::state_management::THEME(), Theme::Dark) { "dark" },
            AlertsContainer {}
            Router::<Route> {}
        }
    }
}

#[component]
fn PageNotFound(route: Vec<String>) -> Element {
    rsx! {
        h1 { class: "text-3xl font-black", "Page not found" }
        p { "We are terribly sorry, but the page you requested doesn't exist." }
        pre { color: "red", "log:\nattemped to navigate to: {route:?}" }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp_micros()
        .init();

    log::info!("starting app");

    #[cfg(feature = "desktop")]
    {
        use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
        LaunchBuilder::desktop()
            .with_cfg(
                Config::new().with_menu(None).with_window(
                    WindowBuilder::new()
                        .with_title(TITLE)
                        .with_inner_size(LogicalSize::new(1600, 1000))
                        .with_resizable(true),
                ),
            )
            .launch(App)
    }

    #[cfg(not(feature = "desktop"))]
    dioxus::launch(App)
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::loading::{resolver::resolve, variant::SkeletonKind};

    #[test]
    fn unknown_paths_land_on_page_not_found() {
        let route: Route = "/no/such/page".parse().unwrap();
        assert_eq!(
            route,
            Route::PageNotFound {
                route: vec!["no".to_owned(), "such".to_owned(), "page".to_owned()]
            }
        );
    }

    #[test]
    fn route_paths_feed_the_skeleton_resolver() {
        let cases = [
            (Route::RequestListView {}, SkeletonKind::RequestList),
            (Route::ContractListView {}, SkeletonKind::ContractList),
            (Route::ProjectDetailsView { id: 4 }, SkeletonKind::ProjectDetails),
            (Route::ContractDetailsView { id: 9 }, SkeletonKind::ContractDetails),
            (Route::HelpView {}, SkeletonKind::Help),
            (Route::EditProfileView {}, SkeletonKind::Card),
            (Route::CreateRequestView { contract_id: 2 }, SkeletonKind::Card),
            (Route::SelectContractView { project_id: 1 }, SkeletonKind::Table),
            (Route::HomeView {}, SkeletonKind::Dashboard),
        ];
        for (route, kind) in cases {
            let path = route.to_string();
            assert_eq!(resolve(&path, SkeletonVariant::Auto), kind, "{path}");
            assert_eq!(path.parse::<Route>().unwrap(), route);
        }
    }
}
