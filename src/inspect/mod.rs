pub mod bounds;
pub mod checksum;
pub mod engine;
pub mod session;
