use crate::prelude::*;

use std::future::Future;

use crate::{
    api::models::ListQuery,
    utils::{log_error_ccstr, CCStr},
};

use super::utils::FResource;

/// A [Resource] whose every run is tracked by the loading overlay.
///
/// Like [use_resource], it re-runs when a signal read by `future` (outside of
/// the returned future) changes. Errors are logged, reported as an alert and
/// kept in the resource so the view can render them.
///
/// An `Auto` variant is replaced by the configured default variant, which is
/// `Auto` too unless the user pinned one.
pub fn use_tracked_resource<T, E, Fut>(
    loader: LoadingController,
    variant: SkeletonVariant,
    mut future: impl FnMut() -> Fut + 'static,
) -> FResource<T>
where
    T: 'static,
    E: core::fmt::Display,
    Fut: Future<Output = Result<T, E>> + 'static,
{
    let configured = state_management::use_app_config().default_variant;
    let variant = match variant {
        SkeletonVariant::Auto => configured,
        pinned => pinned,
    };
    use_resource(move || {
        let fut = future();
        async move {
            loader.track(variant, fut).await.map_err(|e| {
                let e: CCStr = log_error_ccstr(e);
                alert_error(e.clone());
                e
            })
        }
    })
}

/// Pagination and filter state of a listing view
pub fn use_list_query() -> Signal<ListQuery> {
    let page_size = state_management::use_app_config().page_size;
    use_signal(|| ListQuery::new(page_size))
}
