use crate::prelude::*;

/// Text-like input bound to a signal.
///
/// The signal is only updated when the typed text parses as `T`, otherwise the
/// field is flagged until the user fixes it.
#[component]
pub fn InputField<T: 'static + Clone + PartialEq + core::fmt::Display + core::str::FromStr>(
    title: &'static str,
    mut value: Signal<T>,
    r#type: Option<&'static str>,
    placeholder: Option<&'static str>,
) -> Element {
    let mut invalid = use_signal(|| false);

    rsx! {
        fieldset { class: "fieldset",
            legend { class: "fieldset-legend", {title} }
            input {
                r#type: r#type.unwrap_or("text"),
                class: "input w-full",
                class: if invalid() { "input-error" },
                placeholder,
                value: "{value.read()}",
                oninput: move |evt| match evt.value().parse() {
                    Ok(v) => {
                        invalid.set(false);
                        value.set(v);
                    }
                    Err(_) => invalid.set(true),
                },
            }
        }
    }
}

#[component]
pub fn TextAreaField(title: &'static str, mut value: Signal<String>) -> Element {
    rsx! {
        fieldset { class: "fieldset",
            legend { class: "fieldset-legend", {title} }
            textarea {
                class: "textarea w-full h-24",
                value: "{value.read()}",
                oninput: move |evt| value.set(evt.value()),
            }
        }
    }
}

/// Date input bound to an optional date, an empty field meaning `None`
#[component]
pub fn DateField(title: &'static str, mut value: Signal<Option<chrono::NaiveDate>>) -> Element {
    let text = use_memo(move || value().map(crate::utils::date_to_string).unwrap_or_default());
    rsx! {
        fieldset { class: "fieldset",
            legend { class: "fieldset-legend", {title} }
            input {
                r#type: "date",
                class: "input w-full",
                value: "{text}",
                oninput: move |evt| {
                    let raw = evt.value();
                    if raw.is_empty() {
                        value.set(None);
                    } else if let Ok(d) = chrono::NaiveDate::parse_from_str(&raw, "%Y-%m-%d") {
                        value.set(Some(d));
                    }
                },
            }
        }
    }
}

/// Select over a fixed set of options, `None` being the "any" entry
#[component]
pub fn SelectField(
    title: Option<&'static str>,
    any_label: Option<&'static str>,
    options: Vec<(String, &'static str)>,
    mut value: Signal<Option<String>>,
) -> Element {
    let current = value().unwrap_or_default();
    rsx! {
        fieldset { class: "fieldset",
            if let Some(title) = title {
                legend { class: "fieldset-legend", {title} }
            }
            select {
                class: "select",
                onchange: move |evt| {
                    let v = evt.value();
                    value.set((!v.is_empty()).then_some(v));
                },
                if let Some(any_label) = any_label {
                    option { value: "", selected: current.is_empty(), {any_label} }
                }
                for (v , label) in options {
                    option { key: "{v}", selected: current == v, value: "{v}", {label} }
                }
            }
        }
    }
}
