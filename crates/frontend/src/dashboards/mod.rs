pub mod d400_console_overview;

pub use d400_console_overview::ConsoleOverview;
