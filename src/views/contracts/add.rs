use crate::prelude::*;

use crate::{
    api::models::{ContractDraft, ProjectId},
    components::{inputs::InputField, misc::BackButton},
    utils::{log_error, CCStr},
    views::TitledView,
    Route,
};

#[component]
pub fn AddContractView(project_id: ProjectId) -> Element {
    log::debug!("AddContractView Rendered");

    let loader = use_loading_controller();
    let service = state_management::use_contract_service();

    let title = use_signal(String::new);
    let vendor = use_signal(String::new);
    let amount = use_signal(|| 0.0_f64);
    let mut submitting = use_signal(|| false);

    let draft = use_memo(move || build_draft(project_id, &title(), &vendor(), amount()));

    let submit = move |_| {
        let Ok(draft) = draft() else {
            return;
        };
        let service = service.clone();
        submitting.set(true);
        spawn(async move {
            let result = loader
                .track(SkeletonVariant::Card, service.create(&draft))
                .await;
            submitting.set(false);
            match result {
                Ok(contract) => {
                    alert_success(format!("Contract \"{}\" added", contract.title));
                    navigator().push(Route::ContractDetailsView { id: contract.id });
                }
                Err(e) => alert_error(log_error(e)),
            }
        });
    };

    use_drop(|| log::debug!("AddContractView Dropped"));

    rsx! {
        TitledView {
            title: CCStr::from("Add a contract"),
            subtitle: CCStr::from(format!("New vendor contract for project #{project_id}")),
            left: rsx! {
                BackButton { route: Route::ProjectDetailsView { id: project_id } }
            },
            div { class: "max-w-xl flex flex-col",
                InputField { title: "Title", value: title }
                InputField { title: "Vendor", value: vendor }
                InputField {
                    title: "Amount",
                    value: amount,
                    r#type: "number",
                    placeholder: "0.00",
                }
                if let Err(ref reason) = *draft.read() {
                    div { class: "text-error text-sm mt-2", "{reason}" }
                }
                div { class: "flex justify-end mt-4",
                    button {
                        class: "btn btn-primary",
                        disabled: draft.read().is_err() || submitting(),
                        onclick: submit,
                        "Add contract"
                    }
                }
            }
        }
    }
}

fn build_draft(
    project_id: ProjectId,
    title: &str,
    vendor: &str,
    amount: f64,
) -> Result<ContractDraft, CCStr> {
    let title = title.trim();
    if title.is_empty() {
        return Err(CCStr::from("A title is required"));
    }
    let vendor = vendor.trim();
    if vendor.is_empty() {
        return Err(CCStr::from("A vendor is required"));
    }
    if !amount.is_finite() || amount <= 0.0 {
        return Err(CCStr::from("The amount must be positive"));
    }
    Ok(ContractDraft {
        project_id,
        title: title.to_owned(),
        vendor: vendor.to_owned(),
        amount,
    })
}
