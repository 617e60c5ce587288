pub mod api;
pub mod model;
pub mod results_table;
pub mod theme_display;
pub mod view;

pub use results_table::ResultsTable;
pub use theme_display::ThemeDisplay;
pub use view::SearchBar;
