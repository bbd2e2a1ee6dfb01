pub mod command;

pub use command::CommandDecoder;
