mod app;
mod color_input;

pub use app::{App, Layout};
