use crate::prelude::*;

use crate::{
    api::models::{Request, RequestId, RequestStatus, RequestStep},
    components::{
        badge::StatusBadge,
        misc::{BackButton, DetailField, LoadError},
    },
    utils::{datetime_to_string, format_amount, CCStr},
    views::{LinkButton, TitledView},
    Route,
};

#[component]
pub fn RequestDetailsView(id: RequestId) -> Element {
    log::debug!("RequestDetailsView Rendered");

    let loader = use_loading_controller();
    let service = state_management::use_request_service();

    let request = helper_hooks::use_tracked_resource(loader, SkeletonVariant::Auto, move || {
        let service = service.clone();
        async move { service.get(id).await }
    });

    use_drop(|| log::debug!("RequestDetailsView Dropped"));

    rsx! {
        match &*request.read() {
            Some(Ok(request)) => rsx! {
                TitledView {
                    title: request.title.clone(),
                    subtitle: CCStr::from(format!("Payment request #{}", request.id)),
                    left: rsx! {
                        BackButton { route: Route::RequestListView {} }
                    },
                    right: rsx! {
                        LinkButton {
                            route: Route::ProjectDetailsView { id: request.project_id },
                            primary: false,
                            "Project"
                        }
                        if let Some(contract_id) = request.contract_id {
                            LinkButton {
                                route: Route::ContractDetailsView { id: contract_id },
                                primary: false,
                                "Contract"
                            }
                        }
                    },
                    div { class: "flex gap-8",
                        RequestSteps { steps: request.steps.clone() }
                        RequestFields { request: request.clone() }
                    }
                }
            },
            Some(Err(e)) => rsx! {
                BackButton { route: Route::RequestListView {} }
                LoadError { message: e.clone() }
            },
            None => rsx! {},
        }
    }
}

#[component]
fn RequestSteps(steps: Vec<RequestStep>) -> Element {
    rsx! {
        aside { class: "w-72 shrink-0",
            ul { class: "steps steps-vertical",
                for (i , step) in steps.iter().enumerate() {
                    li {
                        key: "{i}",
                        class: "step",
                        class: if step.done { "step-primary" },
                        "{step.label}"
                    }
                }
            }
        }
    }
}

#[component]
fn RequestFields(request: Request) -> Element {
    let (done, total) = request.progress();
    rsx! {
        div { class: "grow grid grid-cols-2 lg:grid-cols-3 gap-4 content-start",
            DetailField { label: "Status",
                StatusBadge::<RequestStatus> { status: request.status }
            }
            DetailField { label: "Amount", {format_amount(request.amount)} }
            DetailField { label: "Requested by", "{request.requested_by}" }
            DetailField { label: "Submitted", {datetime_to_string(request.submitted_at)} }
            DetailField { label: "Progress", "{done} / {total} steps" }
            DetailField { label: "Reference", "#{request.id}" }
        }
    }
}
