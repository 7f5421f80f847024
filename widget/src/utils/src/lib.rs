pub mod config;
#[cfg(feature = "csr")]
pub mod dom;
pub mod error;
pub mod fade;
pub mod media;
pub mod scheduler;
pub mod visibility;
