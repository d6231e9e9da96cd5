use dioxus::prelude::*;

use std::future::Future;

use super::{
    resolver,
    variant::{SkeletonKind, SkeletonVariant},
};

/// The app-wide loading flag and the skeleton variant requested for it.
///
/// There is a single instance for the whole application: when two fetches
/// overlap, the last one to write decides whether the overlay is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoaderState {
    pub loading: bool,
    pub variant: SkeletonVariant,
}

impl LoaderState {
    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    /// Only affects the next (or current) overlay, never shows or hides it
    pub fn set_variant(&mut self, variant: SkeletonVariant) {
        self.variant = variant;
    }

    pub fn start(&mut self, variant: SkeletonVariant) {
        self.set_variant(variant);
        self.set_loading(true);
    }

    pub fn finish(&mut self) {
        self.set_loading(false);
    }

    /// The skeleton to render over `route`, if any
    pub fn overlay(&self, route: &str) -> Option<SkeletonKind> {
        self.loading
            .then(|| resolver::resolve(route, self.variant))
    }
}

/// Handle on the [`LoaderState`] of the running application.
///
/// It is `Copy` and meant to be handed explicitly to whatever performs a data
/// fetch. Views get it once through [`use_loading_controller`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoadingController {
    state: Signal<LoaderState>,
}

impl LoadingController {
    pub fn new(state: Signal<LoaderState>) -> Self {
        Self { state }
    }

    /// Reactive read of the flag, subscribes the current scope
    pub fn loading(&self) -> bool {
        self.state.read().loading
    }

    /// Reactive read of the variant, subscribes the current scope
    pub fn variant(&self) -> SkeletonVariant {
        self.state.read().variant
    }

    /// Reactive read of the whole state
    pub fn state(&self) -> LoaderState {
        *self.state.read()
    }

    /// Non-reactive read of the whole state
    pub fn snapshot(&self) -> LoaderState {
        *self.state.peek()
    }

    pub fn set_loading(self, loading: bool) {
        log::debug!("LoadingController - set_loading({loading})");
        let mut state = self.state;
        state.write().set_loading(loading);
    }

    pub fn set_variant(self, variant: SkeletonVariant) {
        log::debug!("LoadingController - set_variant({variant})");
        let mut state = self.state;
        state.write().set_variant(variant);
    }

    pub fn start(self, variant: SkeletonVariant) {
        log::debug!("LoadingController - start({variant})");
        let mut state = self.state;
        state.write().start(variant);
    }

    pub fn finish(self) {
        log::debug!("LoadingController - finish");
        let mut state = self.state;
        state.write().finish();
    }

    /// Shows the overlay until the returned ticket is dropped
    pub fn begin(self, variant: SkeletonVariant) -> LoadingTicket {
        self.start(variant);
        LoadingTicket {
            controller: Some(self),
        }
    }

    /// Runs `fut` under the loading overlay.
    ///
    /// The flag is cleared when `fut` completes, whatever its output, and also
    /// when the returned future is dropped before completion (e.g. the view
    /// that spawned it unmounted).
    pub async fn track<F: Future>(self, variant: SkeletonVariant, fut: F) -> F::Output {
        let ticket = self.begin(variant);
        let output = fut.await;
        ticket.finish();
        output
    }
}

/// Clears the loading flag exactly once, on [`LoadingTicket::finish`] or drop
#[derive(Debug)]
#[must_use = "dropping the ticket immediately hides the overlay"]
pub struct LoadingTicket {
    controller: Option<LoadingController>,
}

impl LoadingTicket {
    pub fn finish(mut self) {
        self.clear();
    }

    fn clear(&mut self) {
        if let Some(controller) = self.controller.take() {
            let mut state = controller.state;
            // The root scope may already be gone when the app is shutting down
            let write = state.try_write();
            match write {
                Ok(mut s) => s.finish(),
                Err(e) => log::debug!("LoadingTicket - state unavailable: {e}"),
            };
        }
    }
}

impl Drop for LoadingTicket {
    fn drop(&mut self) {
        self.clear();
    }
}

/// Creates the application's [`LoadingController`] and provides it to the tree.
///
/// Must be called exactly once, from the root component.
pub fn use_init_loading_controller() -> LoadingController {
    let state = use_signal(LoaderState::default);
    use_context_provider(|| LoadingController::new(state))
}

/// Returns the application's [`LoadingController`].
///
/// # Panics
///
/// Panics if no ancestor called [`use_init_loading_controller`]. A missing
/// provider is a wiring bug and must not degrade into an inert overlay.
pub fn use_loading_controller() -> LoadingController {
    use_hook(|| match try_consume_context::<LoadingController>() {
        Some(controller) => controller,
        None => panic!(
            "use_loading_controller called outside of the loading provider scope; \
            call use_init_loading_controller in the root component"
        ),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_starts_idle_in_auto_mode() {
        let state = LoaderState::default();
        assert!(!state.loading);
        assert_eq!(state.variant, SkeletonVariant::Auto);
        assert_eq!(state.overlay("/requests"), None);
    }

    #[test]
    fn set_variant_does_not_show_the_overlay() {
        let mut state = LoaderState::default();
        state.set_variant(SkeletonVariant::Table);
        assert!(!state.loading);
        assert_eq!(state.overlay("/help"), None);
        state.set_loading(true);
        assert_eq!(state.overlay("/help"), Some(SkeletonKind::Table));
    }

    #[test]
    fn last_write_wins() {
        let mut state = LoaderState::default();
        state.set_loading(true);
        state.set_loading(false);
        assert_eq!(state.overlay("/"), None);

        // Two overlapping fetches, the first to finish hides the overlay
        state.start(SkeletonVariant::Auto);
        state.start(SkeletonVariant::Card);
        state.finish();
        assert!(!state.loading);
        assert_eq!(state.variant, SkeletonVariant::Card);
    }

    #[test]
    fn auto_overlay_follows_the_route() {
        let mut state = LoaderState::default();
        state.start(SkeletonVariant::Auto);
        assert_eq!(state.overlay("/requests"), Some(SkeletonKind::RequestList));
        assert_eq!(state.overlay("/create-project"), Some(SkeletonKind::Card));
        assert_eq!(state.overlay("/nowhere"), Some(SkeletonKind::Page));
    }

    #[test]
    fn tickets_clear_the_flag_on_every_path() {
        fn app() -> Element {
            let controller = use_init_loading_controller();
            use_hook(move || {
                let ticket = controller.begin(SkeletonVariant::Card);
                assert_eq!(
                    controller.snapshot(),
                    LoaderState {
                        loading: true,
                        variant: SkeletonVariant::Card
                    }
                );
                drop(ticket);
                assert!(!controller.snapshot().loading);

                let ticket = controller.begin(SkeletonVariant::Auto);
                ticket.finish();
                assert!(!controller.snapshot().loading);
            });
            rsx! {}
        }

        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
    }

    #[test]
    fn track_clears_the_flag_when_dropped_in_flight() {
        use futures_util::FutureExt;

        fn app() -> Element {
            let controller = use_init_loading_controller();
            use_hook(move || {
                let in_flight = controller.track(SkeletonVariant::Table, async move {
                    assert!(controller.snapshot().loading);
                    std::future::pending::<()>().await
                });
                // polled once, then dropped
                assert_eq!(in_flight.now_or_never(), None);
                assert!(!controller.snapshot().loading);

                let done = controller.track(SkeletonVariant::Card, async { 7 });
                assert_eq!(done.now_or_never(), Some(7));
                assert!(!controller.snapshot().loading);
            });
            rsx! {}
        }

        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
    }

    #[test]
    fn joined_fetches_keep_the_overlay_until_the_slowest() {
        use futures_util::{future::try_join, task::noop_waker};
        use std::{
            cell::Cell,
            rc::Rc,
            task::{Context, Poll},
        };

        fn app() -> Element {
            let controller = use_init_loading_controller();
            use_hook(move || {
                let slow_done = Rc::new(Cell::new(false));
                let slow = {
                    let slow_done = slow_done.clone();
                    std::future::poll_fn(move |_| match slow_done.get() {
                        true => Poll::Ready(Ok::<_, ()>("contracts")),
                        false => Poll::Pending,
                    })
                };
                let fast = async { Ok::<_, ()>("stats") };

                let mut page_load =
                    Box::pin(controller.track(SkeletonVariant::Auto, try_join(fast, slow)));
                let waker = noop_waker();
                let mut cx = Context::from_waker(&waker);

                assert!(page_load.as_mut().poll(&mut cx).is_pending());
                assert!(controller.snapshot().loading);

                slow_done.set(true);
                assert_eq!(
                    page_load.as_mut().poll(&mut cx),
                    Poll::Ready(Ok(("stats", "contracts")))
                );
                assert!(!controller.snapshot().loading);
            });
            rsx! {}
        }

        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
    }

    #[test]
    fn views_find_the_root_controller() {
        fn app() -> Element {
            let root = use_init_loading_controller();
            rsx! {
                Child { root }
            }
        }

        #[component]
        fn Child(root: LoadingController) -> Element {
            let controller = use_loading_controller();
            assert_eq!(controller, root);
            rsx! {}
        }

        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
    }
}
