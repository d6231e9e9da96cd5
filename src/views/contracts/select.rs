use crate::prelude::*;

use crate::{
    api::models::{ContractStatus, ListQuery, ProjectId},
    components::{
        misc::{BackButton, EmptyState, LoadError},
        pagination::Pagination,
    },
    utils::CCStr,
    views::TitledView,
    Route,
};

use super::{ContractTable, ContractTarget};

/// First step of a payment request: picking the signed contract it is drawn on
#[component]
pub fn SelectContractView(project_id: ProjectId) -> Element {
    log::debug!("SelectContractView Rendered");

    let loader = use_loading_controller();
    let service = state_management::use_contract_service();
    let page_size = state_management::use_app_config().page_size;
    let mut query = use_signal(|| {
        ListQuery::new(page_size).with_status(Some(ContractStatus::Signed.query_value()))
    });

    let contracts = helper_hooks::use_tracked_resource(loader, SkeletonVariant::Table, move || {
        let service = service.clone();
        let query = query();
        async move { service.list_for_project(project_id, &query).await }
    });

    use_drop(|| log::debug!("SelectContractView Dropped"));

    rsx! {
        TitledView {
            title: CCStr::from("Select a contract"),
            subtitle: CCStr::from("Payment requests are drawn on a signed contract"),
            left: rsx! {
                BackButton { route: Route::ProjectDetailsView { id: project_id } }
            },
            match &*contracts.read() {
                Some(Ok(page)) if page.items.is_empty() => rsx! {
                    EmptyState { message: "This project has no signed contract" }
                },
                Some(Ok(page)) => rsx! {
                    ContractTable { contracts: page.items.clone(), target: ContractTarget::NewRequest }
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
