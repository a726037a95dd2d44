//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board) value. Nothing here stores
//! whose turn it is or whether the game is over; both are derived from the
//! cells every time.

pub mod draw;
pub mod moves;
pub mod transition;
pub mod turn;
pub mod utility;
pub mod win;

pub use draw::{is_full, terminal};
pub use moves::actions;
pub use transition::result;
pub use turn::player;
pub use utility::utility;
pub use win::{completed_lines, winner};
