pub mod demo;
pub mod scene;
pub mod terminal;

pub use demo::Demo;
pub use scene::{compose_image, compose_text, Placement};
pub use terminal::{canvas_for_terminal, terminal_size, Screen, CURSOR_HOME};
