pub mod aggregate;
pub mod board;
pub mod calculator;
pub mod currency;
pub mod export;
pub mod seed;
pub mod stats;
