pub mod command;
pub mod notify;
pub mod options;
pub mod save;
pub mod tiddler;
