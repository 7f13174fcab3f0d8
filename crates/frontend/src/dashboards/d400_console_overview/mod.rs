pub mod ui;

pub use ui::overview::ConsoleOverview;
