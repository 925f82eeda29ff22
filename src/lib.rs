pub mod block;
pub mod camera;
pub mod config;
pub mod data;
pub mod event;
pub mod input;
pub mod math;
pub mod state;
pub mod util;
