pub mod backend;
pub mod diag;
#[cfg(feature = "backend-mock")]
pub mod mock;
