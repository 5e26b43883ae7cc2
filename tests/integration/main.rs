mod common;
mod config;
mod one_shot;
