use crate::prelude::*;

use crate::api::models::PageInfo;

/// Page numbers to offer around `current`, at most `width` of them
pub fn page_window(current: u32, total: u32, width: u32) -> Vec<u32> {
    let total = total.max(1);
    let current = current.clamp(1, total);
    let width = width.clamp(1, total);
    let start = current
        .saturating_sub(width / 2)
        .max(1)
        .min(total - width + 1);
    (start..start + width).collect()
}

#[component]
pub fn Pagination(info: PageInfo, on_change: EventHandler<u32>) -> Element {
    let page = info.page;
    let pages = page_window(page, info.total_pages, 5);
    rsx! {
        div { class: "flex items-center justify-between mt-4",
            span { class: "text-sm text-base-content/60", "{info.total} result(s)" }
            div { class: "join",
                button {
                    class: "join-item btn btn-sm",
                    disabled: !info.has_previous,
                    onclick: move |_| on_change.call(page.saturating_sub(1).max(1)),
                    "«"
                }
                for p in pages {
                    button {
                        key: "{p}",
                        class: "join-item btn btn-sm",
                        class: if p == page { "btn-active btn-primary" },
                        onclick: move |_| on_change.call(p),
                        "{p}"
                    }
                }
                button {
                    class: "join-item btn btn-sm",
                    disabled: !info.has_next,
                    onclick: move |_| on_change.call(page + 1),
                    "»"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_is_centered_when_possible() {
        assert_eq!(page_window(5, 10, 5), vec![3, 4, 5, 6, 7]);
    }

    #[test]
    fn window_sticks_to_the_edges() {
        assert_eq!(page_window(1, 10, 5), vec![1, 2, 3, 4, 5]);
        assert_eq!(page_window(10, 10, 5), vec![6, 7, 8, 9, 10]);
    }

    #[test]
    fn window_never_exceeds_total() {
        assert_eq!(page_window(2, 3, 5), vec![1, 2, 3]);
        assert_eq!(page_window(1, 0, 5), vec![1]);
        assert_eq!(page_window(42, 3, 5), vec![1, 2, 3]);
    }
}
