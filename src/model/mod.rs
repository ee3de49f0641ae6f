pub mod fallback;
pub mod group;
pub mod par;
pub mod score;
pub mod scoreboard;
pub mod types;
pub mod utils;

pub use fallback::*;
pub use group::*;
pub use par::*;
pub use score::*;
pub use scoreboard::*;
pub use types::*;
pub use utils::*;
