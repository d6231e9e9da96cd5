use crate::prelude::*;

use crate::{
    api::models::{Project, ProjectStatus},
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

pub mod details;
pub mod form;

#[component]
pub fn ProjectDashboardView() -> Element {
    log::debug!("ProjectDashboardView Rendered");

    let loader = use_loading_controller();
    let service = state_management::use_project_service();
    let mut query = helper_hooks::use_list_query();

    let projects = helper_hooks::use_tracked_resource(loader, SkeletonVariant::Auto, move || {
        let service = service.clone();
        let query = query();
        async move { service.list(&query).await }
    });

    use_drop(|| log::debug!("ProjectDashboardView Dropped"));

    rsx! {
        TitledView {
            title: CCStr::from("Projects"),
            subtitle: CCStr::from("Every project you manage"),
            right: rsx! {
                LinkButton { route: Route::CreateProjectView {}, "New project" }
            },
            FilterBar {
                query,
                statuses: status_options::<ProjectStatus>(),
                placeholder: "Search projects by name or owner",
            }
            match &*projects.read() {
                Some(Ok(page)) if page.items.is_empty() => rsx! {
                    EmptyState { message: "No project matches these filters" }
                },
                Some(Ok(page)) => rsx! {
                    ProjectTable { projects: page.items.clone() }
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

#[component]
fn ProjectTable(projects: Vec<Project>) -> Element {
    rsx! {
        div { class: "overflow-x-auto",
            table { class: "table table-zebra",
                thead {
                    tr {
                        th { "Name" }
                        th { "Owner" }
                        th { "Status" }
                        th { class: "text-right", "Budget" }
                        th { "Start" }
                        th { "End" }
                    }
                }
                tbody {
                    for project in projects {
                        ProjectRow { key: "{project.id}", project }
                    }
                }
            }
        }
    }
}

#[component]
fn ProjectRow(project: Project) -> Element {
    let id = project.id;
    rsx! {
        tr {
            class: "hover:bg-primary/10 cursor-pointer",
            onclick: move |_| {
                navigator().push(Route::ProjectDetailsView { id });
            },
            td { class: "font-bold", "{project.name}" }
            td { "{project.owner}" }
            td {
                StatusBadge::<ProjectStatus> { status: project.status }
            }
            td { class: "text-right font-mono", {format_amount(project.budget)} }
            td { {date_to_string(project.start_date)} }
            td {
                if let Some(end) = project.end_date {
                    {date_to_string(end)}
                } else {
                    "-"
                }
            }
        }
    }
}
