//! Console front end: menu loop, prompts and ASCII rendering.
//!
//! - `Session`: the numbered menu driving rounds, simulations and history
//! - `Presenter`: where text goes and answers come from
//! - `render`: pure string builders for every screen

mod menu;
mod presenter;
pub mod render;

pub use menu::{MenuChoice, Session};
pub use presenter::{ConsolePresenter, Presenter};
