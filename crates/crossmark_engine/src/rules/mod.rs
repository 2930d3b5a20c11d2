//! Game rules.
//!
//! Pure functions over a [`Board`](crate::Board). Rules are kept apart from
//! board storage so the session can compose them per round policy.

mod draw;
mod win;

pub use draw::is_full;
pub use win::{LINES, check_winner, have_winner};
