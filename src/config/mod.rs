pub mod load;
pub mod save;
pub mod types;

pub use types::{ChunkSettings, Config, Language, MAX_RECENT_PATHS, MergeSettings, UserSettings};
