pub mod format_command;
pub mod one_shot;
