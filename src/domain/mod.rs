pub mod constants;
pub mod tiles;
