use crate::prelude::*;

use chrono::NaiveDate;

use crate::{
    api::models::{Project, ProjectDraft, ProjectId, ProjectStatus},
    components::{
        badge::status_options,
        inputs::{DateField, InputField, SelectField, TextAreaField},
        misc::{BackButton, LoadError},
    },
    utils::{log_error, CCStr},
    views::TitledView,
    Route,
};

#[component]
pub fn CreateProjectView() -> Element {
    log::debug!("CreateProjectView Rendered");
    use_drop(|| log::debug!("CreateProjectView Dropped"));

    rsx! {
        TitledView {
            title: CCStr::from("New project"),
            subtitle: CCStr::from("Describe the project you want to fund"),
            left: rsx! {
                BackButton { route: Route::ProjectDashboardView {} }
            },
            ProjectForm {}
        }
    }
}

#[component]
pub fn EditProjectView(id: ProjectId) -> Element {
    log::debug!("EditProjectView Rendered");

    let loader = use_loading_controller();
    let service = state_management::use_project_service();
    let project = helper_hooks::use_tracked_resource(loader, SkeletonVariant::Card, move || {
        let service = service.clone();
        async move { service.get(id).await }
    });

    use_drop(|| log::debug!("EditProjectView Dropped"));

    rsx! {
        TitledView {
            title: CCStr::from("Edit project"),
            subtitle: CCStr::from(format!("Project #{id}")),
            left: rsx! {
                BackButton { route: Route::ProjectDetailsView { id } }
            },
            match &*project.read() {
                Some(Ok(project)) => rsx! {
                    ProjectForm { key: "{project.id}", project: project.clone() }
                },
                Some(Err(e)) => rsx! {
                    LoadError { message: e.clone() }
                },
                None => rsx! {},
            }
        }
    }
}

/// Creates a project when `project` is `None`, updates it otherwise
#[component]
fn ProjectForm(project: Option<Project>) -> Element {
    log::debug!("ProjectForm Rendered");

    let loader = use_loading_controller();
    let service = state_management::use_project_service();

    let existing_id = project.as_ref().map(|p| p.id);
    let initial = project.as_ref().map(ProjectDraft::from);

    let name = use_signal(|| initial.as_ref().map(|d| d.name.clone()).unwrap_or_default());
    let owner = use_signal(|| initial.as_ref().map(|d| d.owner.clone()).unwrap_or_default());
    let description = use_signal(|| {
        initial
            .as_ref()
            .map(|d| d.description.clone())
            .unwrap_or_default()
    });
    let budget = use_signal(|| initial.as_ref().map(|d| d.budget).unwrap_or_default());
    let status = use_signal(|| {
        Some(
            initial
                .as_ref()
                .map(|d| d.status)
                .unwrap_or(ProjectStatus::Draft)
                .query_value(),
        )
    });
    let start_date = use_signal(|| {
        initial
            .as_ref()
            .map(|d| d.start_date)
            .or_else(|| Some(chrono::Utc::now().date_naive()))
    });
    let end_date = use_signal(|| initial.as_ref().and_then(|d| d.end_date));
    let mut submitting = use_signal(|| false);

    let draft = use_memo(move || {
        build_draft(
            &name(),
            &owner(),
            &description(),
            budget(),
            status().as_deref(),
            start_date(),
            end_date(),
        )
    });

    let submit = move |_| {
        let Ok(draft) = draft() else {
            return;
        };
        let service = service.clone();
        submitting.set(true);
        spawn(async move {
            let result = loader
                .track(SkeletonVariant::Card, async {
                    match existing_id {
                        Some(id) => service.update(id, &draft).await,
                        None => service.create(&draft).await,
                    }
                })
                .await;
            submitting.set(false);
            match result {
                Ok(project) => {
                    alert_success(format!("Project \"{}\" saved", project.name));
                    navigator().push(Route::ProjectDetailsView { id: project.id });
                }
                Err(e) => alert_error(log_error(e)),
            }
        });
    };

    use_drop(|| log::debug!("ProjectForm Dropped"));

    rsx! {
        div { class: "max-w-3xl grid grid-cols-2 gap-x-6",
            InputField { title: "Name", value: name }
            InputField { title: "Owner", value: owner }
            div { class: "col-span-2",
                TextAreaField { title: "Description", value: description }
            }
            InputField {
                title: "Budget",
                value: budget,
                r#type: "number",
                placeholder: "0.00",
            }
            SelectField {
                title: "Status",
                options: status_options::<ProjectStatus>(),
                value: status,
            }
            DateField { title: "Start date", value: start_date }
            DateField { title: "End date", value: end_date }
            if let Err(ref reason) = *draft.read() {
                div { class: "col-span-2 text-error text-sm mt-2", "{reason}" }
            }
            div { class: "col-span-2 flex justify-end mt-4",
                button {
                    class: "btn btn-primary",
                    disabled: draft.read().is_err() || submitting(),
                    onclick: submit,
                    if existing_id.is_some() {
                        "Save changes"
                    } else {
                        "Create project"
                    }
                }
            }
        }
    }
}

fn build_draft(
    name: &str,
    owner: &str,
    description: &str,
    budget: f64,
    status: Option<&str>,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
) -> Result<ProjectDraft, CCStr> {
    let name = name.trim();
    if name.is_empty() {
        return Err(CCStr::from("A name is required"));
    }
    let owner = owner.trim();
    if owner.is_empty() {
        return Err(CCStr::from("An owner is required"));
    }
    if !budget.is_finite() || budget < 0.0 {
        return Err(CCStr::from("The budget cannot be negative"));
    }
    let status = status
        .and_then(ProjectStatus::from_query_value)
        .ok_or_else(|| CCStr::from("A status is required"))?;
    let start_date = start_date.ok_or_else(|| CCStr::from("A start date is required"))?;
    if end_date.is_some_and(|end| end < start_date) {
        return Err(CCStr::from("The end date is before the start date"));
    }
    Ok(ProjectDraft {
        name: name.to_owned(),
        description: description.trim().to_owned(),
        owner: owner.to_owned(),
        status,
        budget,
        start_date,
        end_date,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(y, m, d)
    }

    #[test]
    fn draft_is_trimmed() {
        let draft = build_draft(
            "  Well  ",
            " Ada ",
            " Village water well ",
            1500.0,
            Some("active"),
            date(2025, 1, 1),
            None,
        )
        .unwrap();
        assert_eq!(draft.name, "Well");
        assert_eq!(draft.owner, "Ada");
        assert_eq!(draft.description, "Village water well");
        assert_eq!(draft.status, ProjectStatus::Active);
    }

    #[test]
    fn draft_rejects_invalid_input() {
        let base = |name: &str, budget: f64, end: Option<NaiveDate>| {
            build_draft(name, "Ada", "", budget, Some("draft"), date(2025, 6, 1), end)
        };
        assert!(base("", 1.0, None).is_err());
        assert!(base("Well", -1.0, None).is_err());
        assert!(base("Well", f64::NAN, None).is_err());
        assert!(base("Well", 1.0, date(2025, 5, 31)).is_err());
        assert!(base("Well", 1.0, date(2025, 6, 1)).is_ok());
        assert!(build_draft("Well", "Ada", "", 1.0, None, date(2025, 6, 1), None).is_err());
        assert!(build_draft("Well", "Ada", "", 1.0, Some("draft"), None, None).is_err());
    }
}
