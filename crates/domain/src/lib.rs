pub mod entities;
pub mod errors;
pub mod repositories;

pub use entities::*;
pub use errors::{DispatchError, DispatchResult};
pub use repositories::*;
