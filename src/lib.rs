pub mod api;
pub mod call;
pub mod cli;
pub mod core;
pub mod responder;
pub mod script;
