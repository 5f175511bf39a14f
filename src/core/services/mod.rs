pub mod folder_service;
pub mod item_service;

pub use folder_service::{FolderEntry, FolderService};
pub use item_service::{ItemService, TrashSummary};
