use crate::prelude::*;

use crate::utils::CCStr;

#[component]
pub fn Divider(children: Element) -> Element {
    rsx! {
        div { class: "divider text-base-content/60 text-base text-nowrap mt-6 mb-4",
            {children}
        }
    }
}

/// Reusable back button component for navigation
#[component]
pub fn BackButton(route: crate::Route) -> Element {
    let click_back = move |_| {
        navigator().push(route.clone());
    };

    rsx! {
        button { class: "btn btn-outline btn-primary", onclick: click_back, "← Back" }
    }
}

/// Label/value pair of a details page
#[component]
pub fn DetailField(label: &'static str, children: Element) -> Element {
    rsx! {
        div { class: "flex flex-col",
            span { class: "text-xs uppercase text-base-content/60", {label} }
            span { class: "text-lg font-semibold", {children} }
        }
    }
}

#[component]
pub fn StatCard(title: &'static str, value: CCStr, hint: Option<&'static str>) -> Element {
    rsx! {
        div { class: "stat border border-base-300 rounded-box",
            div { class: "stat-title", {title} }
            div { class: "stat-value text-primary", {value} }
            if let Some(hint) = hint {
                div { class: "stat-desc", {hint} }
            }
        }
    }
}

/// Shown in place of a view's content when its fetch failed
#[component]
pub fn LoadError(message: CCStr) -> Element {
    rsx! {
        div { role: "alert", class: "alert alert-error alert-soft",
            span { "Could not load this page: {message}" }
        }
    }
}

#[component]
pub fn EmptyState(message: &'static str) -> Element {
    rsx! {
        div { class: "py-12 text-center text-base-content/60 italic", {message} }
    }
}
