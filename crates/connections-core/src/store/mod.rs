pub mod loader;
pub mod phone;
pub mod snapshot;
