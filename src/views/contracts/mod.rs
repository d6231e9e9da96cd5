use crate::prelude::*;

use crate::{
    api::models::{Contract, ContractStatus},
    components::{
        badge::{status_options, StatusBadge},
        filter_bar::FilterBar,
        misc::{EmptyState, LoadError},
        pagination::Pagination,
    },
    utils::{date_to_string, format_amount, CCStr},
    views::{LinkButton, TitledView},
    Route,
};

pub mod add;
pub mod details;
pub mod project_list;
pub mod select;

#[component]
pub fn ContractListView() -> Element {
    log::debug!("ContractListView Rendered");

    let loader = use_loading_controller();
    let service = state_management::use_contract_service();
    let mut query = helper_hooks::use_list_query();

    let contracts = helper_hooks::use_tracked_resource(loader, SkeletonVariant::Auto, move || {
        let service = service.clone();
        let query = query();
        async move { service.list(&query).await }
    });

    use_drop(|| log::debug!("ContractListView Dropped"));

    rsx! {
        TitledView {
            title: CCStr::from("Contracts"),
            subtitle: CCStr::from("Contracts signed with vendors, across every project"),
            right: rsx! {
                LinkButton { route: Route::ProjectDashboardView {}, primary: false, "Projects" }
            },
            FilterBar {
                query,
                statuses: status_options::<ContractStatus>(),
                placeholder: "Search contracts by title or vendor",
            }
            match &*contracts.read() {
                Some(Ok(page)) if page.items.is_empty() => rsx! {
                    EmptyState { message: "No contract matches these filters" }
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

/// Where clicking a contract row leads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContractTarget {
    Details,
    NewRequest,
}

impl ContractTarget {
    fn route(self, contract: &Contract) -> Route {
        match self {
            ContractTarget::Details => Route::ContractDetailsView { id: contract.id },
            ContractTarget::NewRequest => Route::CreateRequestView {
                contract_id: contract.id,
            },
        }
    }
}

#[component]
pub fn ContractTable(contracts: Vec<Contract>, target: ContractTarget) -> Element {
    rsx! {
        div { class: "overflow-x-auto",
            table { class: "table table-zebra",
                thead {
                    tr {
                        th { "Title" }
                        th { "Vendor" }
                        th { "Status" }
                        th { class: "text-right", "Amount" }
                        th { "Signed on" }
                    }
                }
                tbody {
                    for contract in contracts {
                        tr {
                            key: "{contract.id}",
                            class: "hover:bg-primary/10 cursor-pointer",
                            onclick: {
                                let route = target.route(&contract);
                                move |_| {
                                    navigator().push(route.clone());
                                }
                            },
                            td { class: "font-bold", "{contract.title}" }
                            td { "{contract.vendor}" }
                            td {
                                StatusBadge::<ContractStatus> { status: contract.status }
                            }
                            td { class: "text-right font-mono", {format_amount(contract.amount)} }
                            td {
                                {contract.signed_on.map(date_to_string).unwrap_or_else(|| "-".to_owned())}
                            }
                        }
                    }
                }
            }
        }
    }
}
