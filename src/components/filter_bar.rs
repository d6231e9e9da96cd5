use crate::prelude::*;

use crate::{api::models::ListQuery, components::inputs::SelectField};

/// Search box and status filter driving a [ListQuery].
///
/// Applying the filters goes back to the first page.
#[component]
pub fn FilterBar(
    mut query: Signal<ListQuery>,
    statuses: Vec<(String, &'static str)>,
    placeholder: &'static str,
) -> Element {
    let mut search = use_signal(|| query.peek().search.clone().unwrap_or_default());
    let status = use_signal(|| query.peek().status.clone());

    let mut apply = move || {
        let updated = query
            .peek()
            .clone()
            .with_page(1)
            .with_search(search())
            .with_status(status());
        if updated != *query.peek() {
            log::debug!("FilterBar - applying {updated:?}");
            query.set(updated);
        }
    };

    rsx! {
        div { class: "flex flex-wrap items-end gap-4 mb-4",
            label { class: "input grow",
                input {
                    r#type: "search",
                    class: "grow",
                    placeholder,
                    value: "{search}",
                    oninput: move |evt| search.set(evt.value()),
                    onkeydown: move |evt| {
                        if evt.key() == Key::Enter {
                            apply();
                        }
                    },
                }
            }
            SelectField { any_label: "All statuses", options: statuses, value: status }
            button { class: "btn btn-primary", onclick: move |_| apply(), "Filter" }
        }
    }
}
