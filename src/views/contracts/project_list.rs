use crate::prelude::*;

use crate::{
    api::models::{ContractStatus, ProjectId},
    components::{
        badge::status_options,
        filter_bar::FilterBar,
        misc::{BackButton, EmptyState, LoadError},
        pagination::Pagination,
    },
    utils::CCStr,
    views::{LinkButton, TitledView},
    Route,
};

use super::{ContractTable, ContractTarget};

#[component]
pub fn ContractProjectListView(project_id: ProjectId) -> Element {
    log::debug!("ContractProjectListView Rendered");

    let loader = use_loading_controller();
    let service = state_management::use_contract_service();
    let mut query = helper_hooks::use_list_query();

    let contracts = helper_hooks::use_tracked_resource(loader, SkeletonVariant::Auto, move || {
        let service = service.clone();
        let query = query();
        async move { service.list_for_project(project_id, &query).await }
    });

    use_drop(|| log::debug!("ContractProjectListView Dropped"));

    rsx! {
        TitledView {
            title: CCStr::from("Project contracts"),
            subtitle: CCStr::from(format!("Contracts of project #{project_id}")),
            left: rsx! {
                BackButton { route: Route::ProjectDetailsView { id: project_id } }
            },
            right: rsx! {
                LinkButton { route: Route::AddContractView { project_id }, "Add contract" }
            },
            FilterBar {
                query,
                statuses: status_options::<ContractStatus>(),
                placeholder: "Search contracts by title or vendor",
            }
            match &*contracts.read() {
                Some(Ok(page)) if page.items.is_empty() => rsx! {
                    EmptyState { message: "This project has no contract yet" }
                },
                Some(Ok(page)) => rsx! {
                    ContractTable { contracts: page.items.clone(), target: ContractTarget::Details }
                    Pagination {
                        info: page.info(),
                        on_change: move |p| query.with_mut(|q| q.page = p),
                    }
                },
                Some(Err(e)) => rsx! {
                    LoadError { message: e.clone() }
                },
                None => rsx! {},
            }
        }
    }
}
