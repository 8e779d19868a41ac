pub(super) mod echo;
mod error;
pub(super) mod listing;
pub(super) mod proxy;
