//! UI Components
//!
//! Leptos components of the food admin screen.

mod dialog_host;
mod food_form_modal;
mod food_table;
mod pagination;
mod search_bar;

pub use dialog_host::{DialogHost, SignalDialogs};
pub use food_form_modal::FoodFormModal;
pub use food_table::FoodTable;
pub use pagination::Pagination;
pub use search_bar::SearchBar;
