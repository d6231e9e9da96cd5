//! # Loading Module
//!
//! Page-level loading orchestration: one app-wide loading flag, a skeleton
//! overlay drawn while it is up, and the logic picking which skeleton to draw.
//!
//! ## Core Concepts
//!
//! - [`LoadingController`](controller::LoadingController): `Copy` handle on the
//!   app-wide [`LoaderState`](controller::LoaderState). Fetches run through
//!   [`LoadingController::track`](controller::LoadingController::track) so the
//!   flag is cleared however they end.
//! - [`SkeletonVariant`](variant::SkeletonVariant): what a page asks for;
//!   `Auto` lets the route decide.
//! - [`resolve`](resolver::resolve): maps `(route, variant)` to a
//!   [`SkeletonKind`](variant::SkeletonKind) using the ordered
//!   [`ROUTE_RULES`](resolver::ROUTE_RULES) table.
//! - [`SkeletonView`](skeleton::SkeletonView): renders a kind and holds the
//!   [`InteractionLock`](interaction_lock::InteractionLock) while mounted.
//!
//! ## Example Usage
//!
//! ```rust
//! use crate::loading::prelude::*;
//!
//! #[component]
//! fn ProjectCount() -> Element {
//!     let loader = use_loading_controller();
//!     let count = use_resource(move || async move {
//!         loader.track(SkeletonVariant::Auto, fetch_project_count()).await
//!     });
//!     rsx! { "{count:?}" }
//! }
//! ```

pub mod controller;
pub mod interaction_lock;
pub mod overlay;
pub mod resolver;
pub mod skeleton;
pub mod variant;

pub mod prelude {
    pub use super::controller::{
        use_init_loading_controller, use_loading_controller, LoadingController,
    };
    pub use super::interaction_lock::use_init_interaction_lock;
    pub use super::overlay::LoadingOverlay;
    pub use super::variant::SkeletonVariant;
}
