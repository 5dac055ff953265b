pub mod menu_handler;

pub use menu_handler::{__path_get_menu, get_menu};
