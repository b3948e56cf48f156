pub mod filter;
pub mod service;

pub use filter::*;
pub use service::*;
