use crate::prelude::*;

use futures_util::future::try_join;

use crate::{
    api::models::{ListQuery, Project, ProjectId, ProjectStatus},
    components::{
        badge::StatusBadge,
        misc::{BackButton, DetailField, EmptyState, LoadError},
    },
    utils::{date_to_string, format_amount, CCStr},
    views::{
        contracts::{ContractTable, ContractTarget},
        LinkButton, TitledView,
    },
    Route,
};

const CONTRACTS_PREVIEW: u32 = 5;

#[component]
pub fn ProjectDetailsView(id: ProjectId) -> Element {
    log::debug!("ProjectDetailsView Rendered");

    let loader = use_loading_controller();
    let project_service = state_management::use_project_service();
    let contract_service = state_management::use_contract_service();

    let details = helper_hooks::use_tracked_resource(loader, SkeletonVariant::Auto, move || {
        let project_service = project_service.clone();
        let contract_service = contract_service.clone();
        async move {
            let query = ListQuery::new(CONTRACTS_PREVIEW);
            try_join(
                project_service.get(id),
                contract_service.list_for_project(id, &query),
            )
            .await
        }
    });

    use_drop(|| log::debug!("ProjectDetailsView Dropped"));

    rsx! {
        match &*details.read() {
            Some(Ok((project, contracts))) => rsx! {
                TitledView {
                    title: project.name.clone(),
                    subtitle: CCStr::from(format!("Project #{}", project.id)),
                    left: rsx! {
                        BackButton { route: Route::ProjectDashboardView {} }
                    },
                    right: rsx! {
                        LinkButton { route: Route::EditProjectView { id }, primary: false, "Edit" }
                        LinkButton { route: Route::AddContractView { project_id: id }, "Add contract" }
                    },
                    div { class: "flex gap-8",
                        ProjectLifecycle { status: project.status }
                        div { class: "grow flex flex-col gap-6",
                            ProjectFields { project: project.clone() }
                            div { class: "flex justify-between items-end",
                                h3 { class: "text-2xl font-bold", "Contracts" }
                                div { class: "flex gap-2",
                                    LinkButton {
                                        route: Route::ContractProjectListView { project_id: id },
                                        primary: false,
                                        "All contracts ({contracts.total})"
                                    }
                                    LinkButton {
                                        route: Route::SelectContractView { project_id: id },
                                        primary: false,
                                        "New request"
                                    }
                                }
                            }
                            if contracts.items.is_empty() {
                                EmptyState { message: "No contract attached to this project" }
                            } else {
                                ContractTable { contracts: contracts.items.clone(), target: ContractTarget::Details }
                            }
                        }
                    }
                }
            },
            Some(Err(e)) => rsx! {
                BackButton { route: Route::ProjectDashboardView {} }
                LoadError { message: e.clone() }
            },
            None => rsx! {},
        }
    }
}

/// Lifecycle of a project drawn as vertical steps, `OnHold` sitting between
/// `Active` and `Completed`
#[component]
fn ProjectLifecycle(status: ProjectStatus) -> Element {
    let reached = ProjectStatus::ALL
        .iter()
        .position(|s| *s == status)
        .unwrap_or_default();
    rsx! {
        aside { class: "w-72 shrink-0",
            ul { class: "steps steps-vertical",
                for (i , step) in ProjectStatus::ALL.iter().enumerate() {
                    li {
                        key: "{step.query_value()}",
                        class: "step",
                        class: if i <= reached { "step-primary" },
                        {step.label()}
                    }
                }
            }
        }
    }
}

#[component]
fn ProjectFields(project: Project) -> Element {
    rsx! {
        div { class: "grid grid-cols-2 lg:grid-cols-3 gap-4",
            DetailField { label: "Owner", "{project.owner}" }
            DetailField { label: "Status",
                StatusBadge::<ProjectStatus> { status: project.status }
            }
            DetailField { label: "Budget", {format_amount(project.budget)} }
            DetailField { label: "Start date", {date_to_string(project.start_date)} }
            DetailField { label: "End date",
                {project.end_date.map(date_to_string).unwrap_or_else(|| "-".to_owned())}
            }
            DetailField { label: "Description", "{project.description}" }
        }
    }
}
