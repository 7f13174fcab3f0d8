pub mod aggregate;
pub mod board;
pub mod columns;
pub mod form;
pub mod seed;
