use crate::prelude::*;

use super::{StepsSidebar, FORM_CARD_BLOCKS};

/// A single animated placeholder block
#[component]
pub(super) fn Shimmer(class: &'static str) -> Element {
    rsx! {
        div { class: "skeleton {class}" }
    }
}

#[component]
pub(super) fn SkeletonHeader(action_buttons: usize) -> Element {
    rsx! {
        div { class: "flex justify-between items-end gap-4 mb-6",
            div { class: "flex flex-col gap-2",
                Shimmer { class: "h-10 w-80" }
                Shimmer { class: "h-4 w-56" }
            }
            div { class: "flex gap-2",
                for i in 0..action_buttons {
                    Shimmer { key: "{i}", class: "h-10 w-32 rounded-btn" }
                }
            }
        }
    }
}

#[component]
pub(super) fn StatCards(count: usize) -> Element {
    rsx! {
        div { class: "grid grid-cols-2 lg:grid-cols-4 gap-4 mb-6",
            for i in 0..count {
                div { key: "{i}", class: "card border border-base-300 p-4 flex flex-col gap-3",
                    Shimmer { class: "h-4 w-24" }
                    Shimmer { class: "h-8 w-32" }
                    Shimmer { class: "h-3 w-20" }
                }
            }
        }
    }
}

#[component]
pub(super) fn FilterBar() -> Element {
    rsx! {
        div { class: "flex gap-4 mb-4",
            Shimmer { class: "h-10 grow" }
            Shimmer { class: "h-10 w-48" }
            Shimmer { class: "h-10 w-24" }
        }
    }
}

#[component]
pub(super) fn TableBlock(rows: usize, columns: usize) -> Element {
    rsx! {
        div { class: "border border-base-300 rounded-box overflow-hidden mb-6",
            div { class: "grid gap-4 p-3 bg-base-200", style: "grid-template-columns: repeat({columns}, minmax(0, 1fr));",
                for c in 0..columns {
                    Shimmer { key: "h{c}", class: "h-4 w-3/4" }
                }
            }
            for r in 0..rows {
                div {
                    key: "{r}",
                    class: "grid gap-4 p-3 border-t border-base-300",
                    style: "grid-template-columns: repeat({columns}, minmax(0, 1fr));",
                    for c in 0..columns {
                        Shimmer { key: "{r}-{c}", class: cell_class(c) }
                    }
                }
            }
        }
    }
}

fn cell_class(column: usize) -> &'static str {
    if column == 0 {
        "h-4 w-full"
    } else {
        "h-4 w-2/3"
    }
}

#[component]
pub(super) fn StepsSidebarBlock(sidebar: StepsSidebar) -> Element {
    let width_class = sidebar.width.class();
    rsx! {
        aside { class: "shrink-0 flex flex-col gap-5 pr-6 border-r border-base-300 {width_class}",
            for i in 0..sidebar.steps {
                div { key: "{i}", class: "flex items-center gap-3",
                    Shimmer { class: "size-8 shrink-0 rounded-full" }
                    Shimmer { class: "h-4 grow" }
                }
            }
        }
    }
}

#[component]
pub(super) fn DetailFields(count: usize) -> Element {
    rsx! {
        div { class: "grid grid-cols-1 md:grid-cols-2 gap-x-8 gap-y-4 mb-6",
            for i in 0..count {
                div { key: "{i}", class: "flex flex-col gap-2",
                    Shimmer { class: "h-3 w-24" }
                    Shimmer { class: "h-5 w-3/4" }
                }
            }
        }
    }
}

#[component]
pub(super) fn FormCard() -> Element {
    // heading + label/input pairs + button
    const PAIRS: usize = (FORM_CARD_BLOCKS - 2) / 2;
    rsx! {
        div { class: "card border border-base-300 p-6 mb-6 flex flex-col gap-4 max-w-3xl",
            Shimmer { class: "h-6 w-48" }
            for i in 0..PAIRS {
                div { key: "{i}", class: "flex flex-col gap-2",
                    Shimmer { class: "h-3 w-32" }
                    Shimmer { class: "h-10 w-full" }
                }
            }
            Shimmer { class: "h-10 w-28 self-end rounded-btn" }
        }
    }
}

#[component]
pub(super) fn ExtraCards() -> Element {
    rsx! {
        div { class: "grid grid-cols-1 md:grid-cols-2 gap-4",
            for i in 0..2 {
                div { key: "{i}", class: "card border border-base-300 p-4 flex flex-col gap-3",
                    Shimmer { class: "h-5 w-40" }
                    Shimmer { class: "h-4 w-full" }
                    Shimmer { class: "h-4 w-5/6" }
                }
            }
        }
    }
}
