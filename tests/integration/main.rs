#[path = "../common/mod.rs"]
mod common;

mod interfaces;
mod lifecycle;
mod stepping;
mod world_files;
