mod dirs;
mod settings;

pub use dirs::Directories;
pub use settings::{Config, default_menu_items};
