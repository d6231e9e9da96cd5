use crate::prelude::*;

use futures_util::future::try_join;

use crate::{
    api::models::{ListQuery, Project, ProjectStatus},
    components::{
        badge::StatusBadge,
        misc::{EmptyState, LoadError, StatCard},
    },
    utils::{date_to_string, format_amount, CCStr},
    views::{LinkButton, TitledView},
    Route,
};

const RECENT_PROJECTS: u32 = 5;

#[component]
pub fn HomeView() -> Element {
    log::debug!("HomeView Rendered");
    use_drop(|| log::debug!("HomeView Dropped"));

    rsx! {
        TitledView {
            title: CCStr::from("Welcome"),
            subtitle: CCStr::from("Overview of your projects, contracts and payment requests"),
            right: rsx! {
                LinkButton { route: Route::CreateProjectView {}, "New project" }
            },
            DashboardContent {}
        }
    }
}

#[component]
pub fn ProjectHomeView() -> Element {
    log::debug!("ProjectHomeView Rendered");
    use_drop(|| log::debug!("ProjectHomeView Dropped"));

    rsx! {
        TitledView {
            title: CCStr::from("Projects"),
            subtitle: CCStr::from("Where your projects stand"),
            right: rsx! {
                LinkButton { route: Route::ProjectDashboardView {}, primary: false, "All projects" }
                LinkButton { route: Route::CreateProjectView {}, "New project" }
            },
            DashboardContent {}
        }
    }
}

#[component]
pub fn DashboardView() -> Element {
    log::debug!("DashboardView Rendered");
    use_drop(|| log::debug!("DashboardView Dropped"));

    rsx! {
        TitledView {
            title: CCStr::from("Dashboard"),
            subtitle: CCStr::from("Key figures"),
            DashboardContent {}
        }
    }
}

/// Stat cards followed by the most recent projects
#[component]
fn DashboardContent() -> Element {
    log::debug!("DashboardContent Rendered");

    let loader = use_loading_controller();
    let service = state_management::use_project_service();

    // One tracked load, the overlay stays up until both parts arrived
    let dashboard = helper_hooks::use_tracked_resource(loader, SkeletonVariant::Auto, move || {
        let service = service.clone();
        async move {
            let query = ListQuery::new(RECENT_PROJECTS)
                .with_status(Some(ProjectStatus::Active.query_value()));
            try_join(service.stats(), service.list(&query)).await
        }
    });

    use_drop(|| log::debug!("DashboardContent Dropped"));

    rsx! {
        match &*dashboard.read() {
            Some(Ok((stats, recent))) => rsx! {
                div { class: "stats stats-vertical lg:stats-horizontal w-full mb-8",
                    StatCard {
                        title: "Active projects",
                        value: CCStr::from(stats.active_projects.to_string()),
                    }
                    StatCard {
                        title: "Open contracts",
                        value: CCStr::from(stats.open_contracts.to_string()),
                    }
                    StatCard {
                        title: "Pending requests",
                        value: CCStr::from(stats.pending_requests.to_string()),
                        hint: "Awaiting review",
                    }
                    StatCard {
                        title: "Total budget",
                        value: CCStr::from(format_amount(stats.total_budget)),
                    }
                }
                h3 { class: "text-2xl font-bold mb-4", "Active projects" }
                if recent.items.is_empty() {
                    EmptyState { message: "No active project yet" }
                } else {
                    div { class: "grid grid-cols-1 lg:grid-cols-2 xl:grid-cols-3 gap-4",
                        for project in recent.items.iter() {
                            ProjectCard { key: "{project.id}", project: project.clone() }
                        }
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

#[component]
fn ProjectCard(project: Project) -> Element {
    let id = project.id;
    rsx! {
        div {
            class: "card card-border bg-base-100 shadow-md hover:shadow-xl cursor-pointer",
            onclick: move |_| {
                navigator().push(Route::ProjectDetailsView { id });
            },
            div { class: "card-body",
                div { class: "flex justify-between items-center",
                    h4 { class: "card-title", "{project.name}" }
                    StatusBadge::<ProjectStatus> { status: project.status }
                }
                p { class: "text-sm text-base-content/70 line-clamp-2", "{project.description}" }
                div { class: "flex justify-between text-sm",
                    span { "Budget: {format_amount(project.budget)}" }
                    span { "Since {date_to_string(project.start_date)}" }
                }
            }
        }
    }
}
