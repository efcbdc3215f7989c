pub mod constants;
pub mod controller;
pub mod error;
pub mod history;
pub mod rotation;
pub mod shared_roulette_game;
