pub mod aggregate;
pub mod context;
pub mod http_handlers;
pub mod lookup;
pub mod status;

pub use aggregate::*;
pub use context::*;
pub use http_handlers::*;
pub use lookup::*;
pub use status::*;
