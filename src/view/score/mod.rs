pub mod banner;
pub mod leaderboard;
pub mod skeleton;
pub mod utils;

pub use banner::*;
pub use leaderboard::*;
pub use skeleton::*;
pub use utils::*;
