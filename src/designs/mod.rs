pub mod common;
pub mod contact;
pub mod portfolio;
pub mod shell;
