mod tracked;
mod utils;

pub mod prelude {
    pub mod helper_hooks {
        pub use super::super::tracked::{use_list_query, use_tracked_resource};
    }
}
