pub mod alerts;
pub mod badge;
pub mod filter_bar;
pub mod inputs;
pub mod misc;
pub mod pagination;
