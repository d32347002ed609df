//! Adapter module - drives the engine with a line-delimited JSON protocol
//!
//! A presentation layer (terminal UI, GUI, test harness) talks to the engine by
//! writing one JSON command per line and reading one JSON reply per line. The
//! default transport is stdio, but [`run`] accepts any async byte stream.
//!
//! # Message Types
//!
//! ## Client → Engine
//!
//! - **new_game**: start a fresh game for 2 to 4 teams
//! - **load**: resume the saved game
//! - **place** / **clear**: put a letter on a cell or take it back
//! - **select** / **clear_selection**: move the active cell
//! - **reset_turn**: take back every tentative letter
//! - **end_turn**: validate, score, advance and save
//! - **observe**: ask for a full snapshot
//!
//! ## Engine → Client
//!
//! - **ack**: command applied
//! - **turn**: verdict of `end_turn`
//! - **observation**: board, scores, current player, tentative placements
//! - **error**: code and message
//!
//! Every command may carry a `seq` number, echoed back in its replies.
//!
//! # Environment Variables
//!
//! - `WORDGRID_SAVE_PATH`: save file (default: "wordgrid_game.json")
//! - `WORDGRID_DICTIONARY`: word list, one word per line (default: "word_list.txt")
//! - `WORDGRID_TEAMS`: team count for a new game (default: 2)
//! - `WORDGRID_RESUME`: set to "1" or "true" to resume the saved game at startup
//!
//! # Example Protocol Flow
//!
//! ```text
//! Client -> Engine: {"type":"new_game","seq":1,"teams":2}
//! Engine -> Client: {"type":"ack","seq":1}
//! Client -> Engine: {"type":"place","seq":2,"row":7,"col":6,"letter":"C"}
//! Engine -> Client: {"type":"ack","seq":2}
//! ...
//! Client -> Engine: {"type":"end_turn","seq":5}
//! Engine -> Client: {"type":"turn","seq":5,"player":0,"next_player":1,"accepted":true,"reason":null,...}
//! ```

pub mod protocol;
pub mod server;
pub mod session;

pub use wordgrid_core as core;
pub use wordgrid_types as types;

// Re-export protocol types for convenience
pub use protocol::*;
pub use server::{run, serve_stdio, AdapterConfig};
pub use session::{Replies, Session};
