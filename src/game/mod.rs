pub mod adapter;
pub mod board;
pub mod divercite;
pub mod inventory;
pub mod piece;
pub mod player;
