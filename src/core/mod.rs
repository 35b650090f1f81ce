pub mod engine;
pub mod lookups;

pub use crate::domain::model::{Coordinates, PassList, PassWindow};
pub use crate::domain::ports::{EndpointProvider, LookupChain};
pub use crate::utils::error::Result;
