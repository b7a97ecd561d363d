mod counter;
mod service;

pub use counter::*;
pub use service::*;
