use dioxus::prelude::*;

use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

/// Something that can stop the page behind an overlay from scrolling and
/// receiving pointer events
pub trait InteractionSurface: 'static {
    fn suppress(&self);
    fn restore(&self);
}

/// The document body of the running application
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentSurface;
impl InteractionSurface for DocumentSurface {
    fn suppress(&self) {
        log::debug!("DocumentSurface - suppress");
        document::eval(
            r#"
            document.body.style.overflow = "hidden";
            document.body.style.pointerEvents = "none";
        "#,
        );
    }

    fn restore(&self) {
        log::debug!("DocumentSurface - restore");
        document::eval(
            r#"
            document.body.style.overflow = "";
            document.body.style.pointerEvents = "";
        "#,
        );
    }
}

struct LockInner {
    holders: Cell<usize>,
    surface: Box<dyn InteractionSurface>,
}

/// Reference counted lock over an [`InteractionSurface`].
///
/// The surface is suppressed when the first guard is acquired and restored
/// when the last one is released, so overlapping overlays (one unmounting
/// while the next mounts) never restore the page early.
#[derive(Clone)]
pub struct InteractionLock {
    inner: Rc<LockInner>,
}

impl PartialEq for InteractionLock {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl core::fmt::Debug for InteractionLock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InteractionLock")
            .field("holders", &self.inner.holders.get())
            .finish_non_exhaustive()
    }
}

impl InteractionLock {
    pub fn new(surface: impl InteractionSurface) -> Self {
        Self {
            inner: Rc::new(LockInner {
                holders: Cell::new(0),
                surface: Box::new(surface),
            }),
        }
    }

    pub fn holders(&self) -> usize {
        self.inner.holders.get()
    }

    pub fn is_locked(&self) -> bool {
        self.holders() > 0
    }

    pub fn acquire(&self) -> InteractionGuard {
        let holders = self.inner.holders.get();
        if holders == 0 {
            self.inner.surface.suppress();
        }
        self.inner.holders.set(holders + 1);
        InteractionGuard {
            lock: Some(self.clone()),
        }
    }

    fn release(&self) {
        let holders = self.inner.holders.get();
        debug_assert!(holders > 0, "interaction lock released more than acquired");
        let holders = holders.saturating_sub(1);
        self.inner.holders.set(holders);
        if holders == 0 {
            self.inner.surface.restore();
        }
    }
}

/// Holds the [`InteractionLock`] until released or dropped, whichever comes first
#[must_use = "the lock is released as soon as the guard is dropped"]
pub struct InteractionGuard {
    lock: Option<InteractionLock>,
}

impl InteractionGuard {
    pub fn release(mut self) {
        self.release_inner();
    }

    fn release_inner(&mut self) {
        if let Some(lock) = self.lock.take() {
            lock.release();
        }
    }
}

impl Drop for InteractionGuard {
    fn drop(&mut self) {
        self.release_inner();
    }
}

/// Provides the application's [`InteractionLock`], backed by the document body
pub fn use_init_interaction_lock() -> InteractionLock {
    use_context_provider(|| InteractionLock::new(DocumentSurface))
}

/// Holds the application's [`InteractionLock`] for as long as the calling
/// component is mounted
pub fn use_interaction_guard() {
    let guard = use_hook(|| {
        let lock = consume_context::<InteractionLock>();
        Rc::new(RefCell::new(Some(lock.acquire())))
    });
    use_drop(move || {
        if let Some(guard) = guard.borrow_mut().take() {
            guard.release();
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records suppress/restore calls, `true` meaning suppress
    #[derive(Clone, Default)]
    struct RecordingSurface(Rc<RefCell<Vec<bool>>>);
    impl InteractionSurface for RecordingSurface {
        fn suppress(&self) {
            self.0.borrow_mut().push(true);
        }
        fn restore(&self) {
            self.0.borrow_mut().push(false);
        }
    }
    impl RecordingSurface {
        fn calls(&self) -> Vec<bool> {
            self.0.borrow().clone()
        }
    }

    #[test]
    fn single_guard_suppresses_then_restores() {
        let surface = RecordingSurface::default();
        let lock = InteractionLock::new(surface.clone());

        let guard = lock.acquire();
        assert!(lock.is_locked());
        assert_eq!(surface.calls(), vec![true]);

        drop(guard);
        assert!(!lock.is_locked());
        assert_eq!(surface.calls(), vec![true, false]);
    }

    #[test]
    fn explicit_release_is_not_repeated_on_drop() {
        let surface = RecordingSurface::default();
        let lock = InteractionLock::new(surface.clone());

        lock.acquire().release();
        assert_eq!(lock.holders(), 0);
        assert_eq!(surface.calls(), vec![true, false]);
    }

    #[test]
    fn overlapping_guards_restore_once_at_the_end() {
        let surface = RecordingSurface::default();
        let lock = InteractionLock::new(surface.clone());

        let first = lock.acquire();
        let second = lock.acquire();
        assert_eq!(lock.holders(), 2);
        drop(first);
        assert!(lock.is_locked());
        let third = lock.acquire();
        drop(second);
        drop(third);

        assert!(!lock.is_locked());
        assert_eq!(surface.calls(), vec![true, false]);
    }

    #[test]
    fn rapid_cycles_do_not_leak() {
        let surface = RecordingSurface::default();
        let lock = InteractionLock::new(surface.clone());

        for _ in 0..100 {
            let guard = lock.acquire();
            drop(guard);
        }

        assert!(!lock.is_locked());
        let calls = surface.calls();
        assert_eq!(calls.len(), 200);
        assert_eq!(calls.last(), Some(&false));
    }

    #[test]
    fn unmounting_the_component_releases_the_lock() {
        thread_local! {
            static SURFACE: RecordingSurface = RecordingSurface::default();
        }

        fn app() -> Element {
            use_context_provider(|| InteractionLock::new(SURFACE.with(Clone::clone)));
            rsx! {
                Locked {}
            }
        }

        #[component]
        fn Locked() -> Element {
            use_interaction_guard();
            rsx! {}
        }

        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        assert_eq!(SURFACE.with(RecordingSurface::calls), vec![true]);

        drop(dom);
        assert_eq!(SURFACE.with(RecordingSurface::calls), vec![true, false]);
    }
}
