use crate::prelude::*;

use futures_util::future::try_join;

use crate::{
    api::models::{Request, RequestStatus},
    components::{
        badge::{status_options, StatusBadge},
        filter_bar::FilterBar,
        misc::{EmptyState, LoadError, StatCard},
        pagination::Pagination,
    },
    utils::{datetime_to_string, format_amount, CCStr},
    views::{LinkButton, TitledView},
    Route,
};

pub mod create;
pub mod details;

#[component]
pub fn RequestListView() -> Element {
    log::debug!("RequestListView Rendered");

    let loader = use_loading_controller();
    let request_service = state_management::use_request_service();
    let project_service = state_management::use_project_service();
    let mut query = helper_hooks::use_list_query();

    // Figures and listing share one tracked load, re-run when the query changes
    let listing = helper_hooks::use_tracked_resource(loader, SkeletonVariant::Auto, move || {
        let request_service = request_service.clone();
        let project_service = project_service.clone();
        let query = query();
        async move { try_join(project_service.stats(), request_service.list(&query)).await }
    });

    use_drop(|| log::debug!("RequestListView Dropped"));

    rsx! {
        TitledView {
            title: CCStr::from("Payment requests"),
            subtitle: CCStr::from("Requests drawn on signed contracts"),
            right: rsx! {
                LinkButton { route: Route::ContractListView {}, "New request" }
            },
            FilterBar {
                query,
                statuses: status_options::<RequestStatus>(),
                placeholder: "Search requests by title or requester",
            }
            match &*listing.read() {
                Some(Ok((stats, page))) => rsx! {
                    div { class: "stats stats-vertical lg:stats-horizontal w-full mb-6",
                        StatCard {
                            title: "Matching requests",
                            value: CCStr::from(page.total.to_string()),
                        }
                        StatCard {
                            title: "Pending review",
                            value: CCStr::from(stats.pending_requests.to_string()),
                        }
                        StatCard {
                            title: "Open contracts",
                            value: CCStr::from(stats.open_contracts.to_string()),
                        }
                        StatCard {
                            title: "Total budget",
                            value: CCStr::from(format_amount(stats.total_budget)),
                        }
                    }
                    if page.items.is_empty() {
                        EmptyState { message: "No request matches these filters" }
                    } else {
                        RequestTable { requests: page.items.clone() }
                        Pagination {
                            info: page.info(),
                            on_change: move |p| query.with_mut(|q| q.page = p),
                        }
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

#[component]
pub fn RequestTable(requests: Vec<Request>) -> Element {
    rsx! {
        div { class: "overflow-x-auto",
            table { class: "table table-zebra",
                thead {
                    tr {
                        th { "Title" }
                        th { "Requested by" }
                        th { "Status" }
                        th { "Progress" }
                        th { class: "text-right", "Amount" }
                        th { "Submitted" }
                    }
                }
                tbody {
                    for request in requests {
                        RequestRow { key: "{request.id}", request }
                    }
                }
            }
        }
    }
}

#[component]
fn RequestRow(request: Request) -> Element {
    let id = request.id;
    let (done, total) = request.progress();
    rsx! {
        tr {
            class: "hover:bg-primary/10 cursor-pointer",
            onclick: move |_| {
                navigator().push(Route::RequestDetailsView { id });
            },
            td { class: "font-bold", "{request.title}" }
            td { "{request.requested_by}" }
            td {
                StatusBadge::<RequestStatus> { status: request.status }
            }
            td {
                progress {
                    class: "progress progress-primary w-24",
                    value: "{done}",
                    max: "{total.max(1)}",
                }
            }
            td { class: "text-right font-mono", {format_amount(request.amount)} }
            td { {datetime_to_string(request.submitted_at)} }
        }
    }
}
