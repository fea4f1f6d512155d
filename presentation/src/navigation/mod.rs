//! Navigation adapters for the terminal

mod console;

pub use console::ConsoleNavigator;
