pub mod board;
pub mod gui;
pub mod logging;
pub mod settings;
