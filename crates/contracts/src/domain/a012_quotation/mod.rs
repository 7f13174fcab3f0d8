pub mod aggregate;
pub mod board;
pub mod seed;
