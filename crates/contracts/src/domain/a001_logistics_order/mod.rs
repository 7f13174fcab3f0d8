pub mod aggregate;
pub mod batch;
pub mod board;
pub mod seed;
