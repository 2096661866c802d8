//! Board renderer.
//!
//! Surface geometry, the winning-line animation and the canvas painter.
//! Nothing here touches game rules; the painter only reads a [`Board`].
//!
//! [`Board`]: crate::games::tictactoe::Board

mod animation;
mod canvas;
mod surface;

pub use animation::{DEFAULT_STEP, LineAnimation};
pub use canvas::{BoardView, Theme, pointer_offset};
pub use surface::{Point, Segment, Surface};
