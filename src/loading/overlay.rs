use crate::prelude::*;

use super::{
    controller::LoadingController,
    skeleton::{SkeletonOptions, SkeletonView},
};

/// Full-viewport skeleton shown while the [`LoadingController`] flag is up.
///
/// The skeleton is picked from the controller's variant or, in auto mode, from
/// the current route, then adjusted by `options`.
#[component]
pub fn LoadingOverlay(
    controller: LoadingController,
    #[props(default)] options: SkeletonOptions,
) -> Element {
    let route = use_route::<crate::Route>();
    let path = route.to_string();
    let overlay = controller.state().overlay(&path);

    log::debug!("LoadingOverlay Rendered: {path} -> {overlay:?}");

    rsx! {
        if let Some(kind) = overlay {
            div {
                class: "fixed inset-0 z-30 pt-16 px-8 overflow-hidden bg-base-100 pointer-events-auto",
                role: "progressbar",
                SkeletonView { key: "{kind}", kind, options }
            }
        }
    }
}
