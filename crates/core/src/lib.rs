pub mod config;
pub mod content;
pub mod game;
pub mod mapgen;
pub mod render;
pub mod rng;
pub mod session;
pub mod state;
pub mod types;

pub use config::{ConfigError, EngineConfig};
pub use game::apply;
pub use render::{Frame, render};
pub use session::{Key, Session, command_for};
pub use state::{GameState, Map, MessageLog, Room};
pub use types::*;
