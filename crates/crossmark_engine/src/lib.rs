//! Crossmark engine - tic-tac-toe board and rules.
//!
//! The engine is a synchronous, in-memory state machine over a 3x3 grid.
//! It owns no I/O: a presentation layer translates its own input events
//! into [`Position`]s, calls [`GameSession::play_round`], and renders the
//! returned [`RoundStatus`].
//!
//! # Example
//!
//! ```
//! use crossmark_engine::{GameSession, Player, Players, Position, RoundPolicy, RoundStatus};
//!
//! let mut session = GameSession::new(Players::default(), RoundPolicy::Standard);
//! let status = session.play_round(Position::Center)?;
//! assert_eq!(status, RoundStatus::Continue { next: Player::O });
//! # Ok::<(), crossmark_engine::EngineError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod error;
mod players;
mod position;
mod rules;
mod session;
mod types;

pub use action::Move;
pub use error::EngineError;
pub use players::Players;
pub use position::Position;
pub use rules::{LINES, check_winner, have_winner, is_full};
pub use session::{GameSession, GameStatus, RoundPolicy, RoundStatus};
pub use types::{Board, Cell, Player};
