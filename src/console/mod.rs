// file: src/console/mod.rs
// description: interactive console module exports
// reference: internal module structure

mod actions;
pub mod menu;
mod session;

#[cfg(test)]
mod testing;

pub use menu::Command;
pub use session::ConsoleSession;
