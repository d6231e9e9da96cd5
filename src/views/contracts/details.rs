use crate::prelude::*;

use futures_util::future::try_join;

use crate::{
    api::models::{Contract, ContractId, ContractStatus, ListQuery, Request, RequestStatus},
    components::{
        badge::StatusBadge,
        misc::{BackButton, DetailField, EmptyState, LoadError, StatCard},
    },
    utils::{date_to_string, format_amount, CCStr},
    views::{requests::RequestTable, LinkButton, TitledView},
    Route,
};

const REQUESTS_PREVIEW: u32 = 10;

#[component]
pub fn ContractDetailsView(id: ContractId) -> Element {
    log::debug!("ContractDetailsView Rendered");

    let loader = use_loading_controller();
    let contract_service = state_management::use_contract_service();
    let request_service = state_management::use_request_service();

    let details = helper_hooks::use_tracked_resource(loader, SkeletonVariant::Auto, move || {
        let contract_service = contract_service.clone();
        let request_service = request_service.clone();
        async move {
            let query = ListQuery::new(REQUESTS_PREVIEW);
            try_join(
                contract_service.get(id),
                request_service.list_for_contract(id, &query),
            )
            .await
        }
    });

    use_drop(|| log::debug!("ContractDetailsView Dropped"));

    rsx! {
        match &*details.read() {
            Some(Ok((contract, requests))) => rsx! {
                TitledView {
                    title: contract.title.clone(),
                    subtitle: CCStr::from(format!("Contract #{} with {}", contract.id, contract.vendor)),
                    left: rsx! {
                        BackButton { route: Route::ContractProjectListView { project_id: contract.project_id } }
                    },
                    right: rsx! {
                        if contract.status == ContractStatus::Signed {
                            LinkButton { route: Route::CreateRequestView { contract_id: id }, "New request" }
                        }
                    },
                    ContractFigures { contract: contract.clone(), requests: requests.items.clone() }
                    ContractFields { contract: contract.clone(), request_count: requests.total }
                    h3 { class: "text-2xl font-bold mt-8 mb-4", "Payment requests" }
                    if requests.items.is_empty() {
                        EmptyState { message: "No payment request against this contract" }
                    } else {
                        RequestTable { requests: requests.items.clone() }
                    }
                }
            },
            Some(Err(e)) => rsx! {
                BackButton { route: Route::ContractListView {} }
                LoadError { message: e.clone() }
            },
            None => rsx! {},
        }
    }
}

/// Sum of the requests that were not rejected
fn committed_amount(requests: &[Request]) -> f64 {
    requests
        .iter()
        .filter(|r| r.status != RequestStatus::Rejected)
        .map(|r| r.amount)
        .sum()
}

#[component]
fn ContractFigures(contract: Contract, requests: Vec<Request>) -> Element {
    let committed = committed_amount(&requests);
    let paid: f64 = requests
        .iter()
        .filter(|r| r.status == RequestStatus::Paid)
        .map(|r| r.amount)
        .sum();
    rsx! {
        div { class: "stats stats-vertical lg:stats-horizontal w-full mb-6",
            StatCard {
                title: "Contract amount",
                value: CCStr::from(format_amount(contract.amount)),
            }
            StatCard {
                title: "Requested",
                value: CCStr::from(format_amount(committed)),
                hint: "Rejected requests excluded",
            }
            StatCard {
                title: "Paid",
                value: CCStr::from(format_amount(paid)),
            }
        }
    }
}

#[component]
fn ContractFields(contract: Contract, request_count: u64) -> Element {
    let project_id = contract.project_id;
    rsx! {
        div { class: "grid grid-cols-2 lg:grid-cols-4 gap-4",
            DetailField { label: "Title", "{contract.title}" }
            DetailField { label: "Vendor", "{contract.vendor}" }
            DetailField { label: "Status",
                StatusBadge::<ContractStatus> { status: contract.status }
            }
            DetailField { label: "Amount", {format_amount(contract.amount)} }
            DetailField { label: "Signed on",
                {contract.signed_on.map(date_to_string).unwrap_or_else(|| "-".to_owned())}
            }
            DetailField { label: "Project",
                Link {
                    class: "link link-primary",
                    to: Route::ProjectDetailsView { id: project_id },
                    "Project #{project_id}"
                }
            }
            DetailField { label: "Reference", "#{contract.id}" }
            DetailField { label: "Requests", "{request_count}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::api::models::RequestStep;

    fn request(amount: f64, status: RequestStatus) -> Request {
        Request {
            id: 1,
            project_id: 1,
            contract_id: Some(1),
            title: CCStr::from("r"),
            requested_by: CCStr::from("Ada"),
            amount,
            status,
            submitted_at: chrono::Utc::now(),
            steps: vec![RequestStep {
                label: CCStr::from("Submitted"),
                done: true,
            }],
        }
    }

    #[test]
    fn rejected_requests_are_not_committed() {
        let requests = vec![
            request(100.0, RequestStatus::Approved),
            request(40.0, RequestStatus::Rejected),
            request(10.5, RequestStatus::Paid),
        ];
        assert_eq!(committed_amount(&requests), 110.5);
        assert_eq!(committed_amount(&[]), 0.0);
    }
}
