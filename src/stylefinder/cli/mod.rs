mod commands;
mod render;
mod session;
mod setup;

pub use commands::run;
