pub mod game;
pub mod inventory;
pub mod player;
pub mod world;
