use crate::prelude::*;

use super::{
    blocks::{
        DetailFields, ExtraCards, FilterBar, FormCard, SkeletonHeader, StatCards,
        StepsSidebarBlock, TableBlock,
    },
    SkeletonOptions, SkeletonShape,
};
use crate::loading::{interaction_lock::use_interaction_guard, variant::SkeletonKind};

/// Full skeleton page for `kind`.
///
/// Holds the interaction lock while mounted, the page behind it can neither
/// scroll nor be clicked.
#[component]
pub fn SkeletonView(kind: SkeletonKind, #[props(default)] options: SkeletonOptions) -> Element {
    log::debug!("SkeletonView Rendered: {kind}");

    use_interaction_guard();

    let shape = SkeletonShape::for_kind(kind).with_options(options);

    use_drop(move || log::debug!("SkeletonView Dropped: {kind}"));

    rsx! {
        div {
            class: "flex gap-6",
            "aria-busy": "true",
            "data-skeleton": "{kind}",
            if let Some(sidebar) = shape.sidebar {
                StepsSidebarBlock { sidebar }
            }
            div { class: "grow min-w-0",
                if shape.title {
                    SkeletonHeader { action_buttons: shape.action_buttons }
                }
                if shape.stat_cards > 0 {
                    StatCards { count: shape.stat_cards }
                }
                if shape.filter_bar {
                    FilterBar {}
                }
                if shape.detail_fields > 0 {
                    DetailFields { count: shape.detail_fields }
                }
                if shape.table_rows > 0 {
                    TableBlock { rows: shape.table_rows, columns: shape.table_columns }
                }
                for i in 0..shape.form_cards {
                    FormCard { key: "{i}" }
                }
                if shape.extra_cards {
                    ExtraCards {}
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::{
        cell::{Cell, RefCell},
        rc::Rc,
    };

    use dioxus::dioxus_core::NoOpMutations;

    use crate::loading::interaction_lock::{InteractionLock, InteractionSurface};

    #[derive(Clone, Default)]
    struct Calls(Rc<RefCell<Vec<bool>>>);
    impl InteractionSurface for Calls {
        fn suppress(&self) {
            self.0.borrow_mut().push(true);
        }
        fn restore(&self) {
            self.0.borrow_mut().push(false);
        }
    }

    thread_local! {
        static CALLS: Calls = Calls::default();
        static SHOWN: Cell<Option<Signal<bool>>> = const { Cell::new(None) };
    }

    fn calls() -> Vec<bool> {
        CALLS.with(|c| c.0.borrow().clone())
    }

    #[test]
    fn skeleton_locks_the_page_until_unmounted() {
        fn app() -> Element {
            use_context_provider(|| InteractionLock::new(CALLS.with(Clone::clone)));
            let shown = use_signal(|| true);
            use_hook(|| SHOWN.with(|s| s.set(Some(shown))));
            rsx! {
                if shown() {
                    SkeletonView { kind: SkeletonKind::ContractDetails }
                }
            }
        }

        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        assert_eq!(calls(), vec![true]);

        let mut shown = SHOWN.with(Cell::get).expect("app rendered");
        dom.in_runtime(|| shown.set(false));
        dom.mark_dirty(ScopeId::APP);
        dom.render_immediate(&mut NoOpMutations);
        assert_eq!(calls(), vec![true, false]);

        drop(dom);
        assert_eq!(calls(), vec![true, false]);
    }
}
