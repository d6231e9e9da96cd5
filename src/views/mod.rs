use crate::prelude::*;

use crate::{utils::CCStr, Route};

pub mod contracts;
pub mod help;
pub mod home;
pub mod main_layout;
pub mod profile;
pub mod projects;
pub mod requests;

#[component]
fn TitledView(
    title: CCStr,
    subtitle: CCStr,
    left: Option<Element>,
    right: Option<Element>,
    children: Element,
) -> Element {
    rsx! {
        div { class: "flex justify-between items-end gap-4 mb-2",
            div { class: "flex items-end gap-4",
                {left}
                div {
                    h1 { class: "text-4xl font-black", {title} }
                    h2 { class: "text-base font-light", {subtitle} }
                }
            }
            div { class: "flex gap-2", {right} }
        }
        div { class: "mb-4 h-px border-t border-solid border-gray-500" }
        {children}
    }
}

/// Navigation button used in view headers
#[component]
pub fn LinkButton(route: Route, primary: Option<bool>, children: Element) -> Element {
    let style = if primary.unwrap_or(true) {
        "btn btn-primary"
    } else {
        "btn btn-outline"
    };
    rsx! {
        Link {
            class: style,
            to: route,
            {children}
        }
    }
}
