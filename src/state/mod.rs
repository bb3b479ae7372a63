// State management module.
// Handles navigation, menu data, and notices for the menu UI.

pub mod menu;
pub mod navigation;
pub mod notice;

pub use menu::{LoadingState, MenuState};
pub use navigation::{BreadcrumbNode, NavigationStack, ROOT_TITLE, ViewLevel};
pub use notice::{Notice, NoticeLevel};
