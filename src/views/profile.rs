use crate::prelude::*;

use crate::{
    api::models::Profile,
    components::{
        inputs::InputField,
        misc::{Divider, LoadError},
    },
    utils::{log_error, CCStr},
    views::TitledView,
};

#[component]
pub fn EditProfileView() -> Element {
    log::debug!("EditProfileView Rendered");

    let loader = use_loading_controller();
    let service = state_management::use_profile_service();
    let config = state_management::use_app_config();

    let profile = helper_hooks::use_tracked_resource(loader, SkeletonVariant::Auto, move || {
        let service = service.clone();
        async move { service.get().await }
    });

    use_drop(|| log::debug!("EditProfileView Dropped"));

    rsx! {
        TitledView {
            title: CCStr::from("Profile"),
            subtitle: CCStr::from("How you appear to the other members of your organization"),
            match &*profile.read() {
                Some(Ok(profile)) => rsx! {
                    ProfileForm { profile: profile.clone() }
                },
                Some(Err(e)) => rsx! {
                    LoadError { message: e.clone() }
                },
                None => rsx! {},
            }
            Divider { "Application" }
            div { class: "text-sm text-base-content/70 flex flex-col gap-1",
                span { "Backend: {config.api_base_url}" }
                span { "Page size: {config.page_size}" }
                span { "Loading placeholder: {config.default_variant}" }
            }
        }
    }
}

#[component]
fn ProfileForm(profile: Profile) -> Element {
    let loader = use_loading_controller();
    let service = state_management::use_profile_service();

    let name = use_signal(|| profile.name.clone());
    let email = use_signal(|| profile.email.clone());
    let organization = use_signal(|| profile.organization.clone());
    let mut submitting = use_signal(|| false);

    let updated = use_memo(move || validate_profile(&name(), &email(), &organization()));
    let unchanged = use_memo(move || updated.read().as_ref().is_ok_and(|p| *p == profile));

    let submit = move |_| {
        let Ok(updated) = updated() else {
            return;
        };
        let service = service.clone();
        submitting.set(true);
        spawn(async move {
            let result = loader
                .track(SkeletonVariant::Card, service.update(&updated))
                .await;
            submitting.set(false);
            match result {
                Ok(_) => alert_success("Profile updated"),
                Err(e) => alert_error(log_error(e)),
            }
        });
    };

    rsx! {
        div { class: "max-w-xl flex flex-col",
            InputField { title: "Name", value: name }
            InputField { title: "Email", value: email, r#type: "email" }
            InputField { title: "Organization", value: organization }
            if let Err(ref reason) = *updated.read() {
                div { class: "text-error text-sm mt-2", "{reason}" }
            }
            div { class: "flex justify-end mt-4",
                button {
                    class: "btn btn-primary",
                    disabled: updated.read().is_err() || unchanged() || submitting(),
                    onclick: submit,
                    "Save profile"
                }
            }
        }
    }
}

fn validate_profile(name: &str, email: &str, organization: &str) -> Result<Profile, CCStr> {
    let name = name.trim();
    if name.is_empty() {
        return Err(CCStr::from("A name is required"));
    }
    let email = email.trim();
    let valid_email = email
        .split_once('@')
        .is_some_and(|(user, domain)| !user.is_empty() && domain.contains('.'));
    if !valid_email {
        return Err(CCStr::from("The email address is not valid"));
    }
    Ok(Profile {
        name: name.to_owned(),
        email: email.to_owned(),
        organization: organization.trim().to_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_validation() {
        let profile = validate_profile(" Ada ", "ada@example.org ", " NGO ").unwrap();
        assert_eq!(profile.name, "Ada");
        assert_eq!(profile.email, "ada@example.org");
        assert_eq!(profile.organization, "NGO");

        assert!(validate_profile("", "ada@example.org", "").is_err());
        assert!(validate_profile("Ada", "ada.example.org", "").is_err());
        assert!(validate_profile("Ada", "@example.org", "").is_err());
        assert!(validate_profile("Ada", "ada@localhost", "").is_err());
        assert!(validate_profile("Ada", "ada@example.org", "").is_ok());
    }
}
