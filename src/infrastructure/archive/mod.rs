//! Archive tool adapters

mod command;

pub use command::CommandArchiveBuilder;
