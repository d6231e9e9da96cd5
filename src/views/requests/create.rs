use crate::prelude::*;

use crate::{
    api::models::{Contract, ContractId, ContractStatus, RequestDraft},
    components::{
        inputs::InputField,
        misc::{BackButton, DetailField, LoadError},
    },
    utils::{format_amount, log_error, CCStr},
    views::TitledView,
    Route,
};

#[component]
pub fn CreateRequestView(contract_id: ContractId) -> Element {
    log::debug!("CreateRequestView Rendered");

    let loader = use_loading_controller();
    let service = state_management::use_contract_service();

    let contract = helper_hooks::use_tracked_resource(loader, SkeletonVariant::Auto, move || {
        let service = service.clone();
        async move { service.get(contract_id).await }
    });

    use_drop(|| log::debug!("CreateRequestView Dropped"));

    rsx! {
        TitledView {
            title: CCStr::from("New payment request"),
            subtitle: CCStr::from(format!("Drawn on contract #{contract_id}")),
            left: rsx! {
                BackButton { route: Route::ContractDetailsView { id: contract_id } }
            },
            match &*contract.read() {
                Some(Ok(contract)) => rsx! {
                    RequestForm { contract: contract.clone() }
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
fn RequestForm(contract: Contract) -> Element {
    log::debug!("RequestForm Rendered");

    let loader = use_loading_controller();
    let service = state_management::use_request_service();

    let title = use_signal(String::new);
    let amount = use_signal(|| 0.0_f64);
    let mut submitting = use_signal(|| false);

    let draft = use_memo({
        let contract = contract.clone();
        move || build_draft(&contract, &title(), amount())
    });

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
                Ok(request) => {
                    alert_success(format!("Request \"{}\" submitted", request.title));
                    navigator().push(Route::RequestDetailsView { id: request.id });
                }
                Err(e) => alert_error(log_error(e)),
            }
        });
    };

    use_drop(|| log::debug!("RequestForm Dropped"));

    rsx! {
        div { class: "max-w-xl flex flex-col",
            div { class: "grid grid-cols-2 gap-4 mb-4",
                DetailField { label: "Contract", "{contract.title}" }
                DetailField { label: "Vendor", "{contract.vendor}" }
                DetailField { label: "Contract amount", {format_amount(contract.amount)} }
            }
            InputField { title: "Title", value: title }
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
                    "Submit request"
                }
            }
        }
    }
}

fn build_draft(contract: &Contract, title: &str, amount: f64) -> Result<RequestDraft, CCStr> {
    if contract.status != ContractStatus::Signed {
        return Err(CCStr::from(format!(
            "Requests can only be drawn on a signed contract, this one is {}",
            contract.status
        )));
    }
    let title = title.trim();
    if title.is_empty() {
        return Err(CCStr::from("A title is required"));
    }
    if !amount.is_finite() || amount <= 0.0 {
        return Err(CCStr::from("The amount must be positive"));
    }
    if amount > contract.amount {
        return Err(CCStr::from(format!(
            "The amount exceeds the contract amount of {}",
            format_amount(contract.amount)
        )));
    }
    Ok(RequestDraft {
        contract_id: contract.id,
        title: title.to_owned(),
        amount,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contract(status: ContractStatus) -> Contract {
        Contract {
            id: 3,
            project_id: 1,
            title: CCStr::from("Drilling"),
            vendor: CCStr::from("Acme"),
            amount: 1000.0,
            status,
            signed_on: None,
        }
    }

    #[test]
    fn request_is_capped_by_the_contract() {
        let signed = contract(ContractStatus::Signed);
        let draft = build_draft(&signed, " First instalment ", 1000.0).unwrap();
        assert_eq!(draft.contract_id, 3);
        assert_eq!(draft.title, "First instalment");

        assert!(build_draft(&signed, "Too much", 1000.01).is_err());
        assert!(build_draft(&signed, "Nothing", 0.0).is_err());
        assert!(build_draft(&signed, "", 10.0).is_err());
    }

    #[test]
    fn unsigned_contracts_take_no_request() {
        for status in [
            ContractStatus::Pending,
            ContractStatus::Expired,
            ContractStatus::Terminated,
        ] {
            assert!(build_draft(&contract(status), "Instalment", 10.0).is_err());
        }
    }
}
