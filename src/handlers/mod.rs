// Handlers module

pub mod chat;
pub mod diagnostics;
pub mod greeting;
pub mod history;

pub use chat::chat_handler;
pub use diagnostics::diagnostics_handler;
pub use greeting::{hello_handler, root_handler};
pub use history::history_handler;
