pub mod flows;
pub mod input;
pub mod models;
pub mod prompter;
