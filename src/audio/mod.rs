pub mod playback;

pub use playback::{play_files, select_player};
