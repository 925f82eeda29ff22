pub mod block;
pub mod registry;
