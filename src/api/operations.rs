//! The Eagle API operations. Each one is a single executor call bound to
//! its endpoint and success schema.

use super::client::EagleClient;
use super::endpoints;
use super::models::{
    AddBookmarkParams, AddItemFromPathParams, AddItemFromUrlParams, AddItemsFromPathsParams,
    AddItemsFromUrlsParams, CreateFolderParams, ItemIdParams, ItemListParams, MoveToTrashParams,
    RenameFolderParams, SwitchLibraryParams, UpdateFolderParams, UpdateItemParams,
};
use crate::error::ApiError;
use crate::schema::{
    Acknowledged, ApplicationInfo, CreatedFolder, FolderSummary, Item, LibraryInfo, RecentFolder,
    RenamedFolder, Success, UpdatedFolder,
};

impl EagleClient {
    // Application

    pub async fn get_application_info(&self) -> Result<ApplicationInfo, ApiError> {
        self.execute::<Success<ApplicationInfo>, _>(endpoints::APPLICATION_INFO, &())
            .await
    }

    // Folders

    pub async fn create_folder(
        &self,
        params: &CreateFolderParams,
    ) -> Result<CreatedFolder, ApiError> {
        self.execute::<Success<CreatedFolder>, _>(endpoints::FOLDER_CREATE, params)
            .await
    }

    pub async fn rename_folder(
        &self,
        params: &RenameFolderParams,
    ) -> Result<RenamedFolder, ApiError> {
        self.execute::<Success<RenamedFolder>, _>(endpoints::FOLDER_RENAME, params)
            .await
    }

    pub async fn update_folder(
        &self,
        params: &UpdateFolderParams,
    ) -> Result<UpdatedFolder, ApiError> {
        self.execute::<Success<UpdatedFolder>, _>(endpoints::FOLDER_UPDATE, params)
            .await
    }

    pub async fn get_folder_list(&self) -> Result<Vec<FolderSummary>, ApiError> {
        self.execute::<Success<Vec<FolderSummary>>, _>(endpoints::FOLDER_LIST, &())
            .await
    }

    pub async fn get_recent_folder_list(&self) -> Result<Vec<RecentFolder>, ApiError> {
        self.execute::<Success<Vec<RecentFolder>>, _>(endpoints::FOLDER_LIST_RECENT, &())
            .await
    }

    // Items

    pub async fn add_item_from_url(&self, params: &AddItemFromUrlParams) -> Result<(), ApiError> {
        self.execute::<Acknowledged, _>(endpoints::ITEM_ADD_FROM_URL, params)
            .await
    }

    pub async fn add_items_from_urls(
        &self,
        params: &AddItemsFromUrlsParams,
    ) -> Result<(), ApiError> {
        self.execute::<Acknowledged, _>(endpoints::ITEM_ADD_FROM_URLS, params)
            .await
    }

    pub async fn add_item_from_path(&self, params: &AddItemFromPathParams) -> Result<(), ApiError> {
        self.execute::<Acknowledged, _>(endpoints::ITEM_ADD_FROM_PATH, params)
            .await
    }

    pub async fn add_items_from_paths(
        &self,
        params: &AddItemsFromPathsParams,
    ) -> Result<(), ApiError> {
        self.execute::<Acknowledged, _>(endpoints::ITEM_ADD_FROM_PATHS, params)
            .await
    }

    pub async fn add_bookmark(&self, params: &AddBookmarkParams) -> Result<(), ApiError> {
        self.execute::<Acknowledged, _>(endpoints::ITEM_ADD_BOOKMARK, params)
            .await
    }

    pub async fn get_item_info(&self, id: &str) -> Result<Item, ApiError> {
        self.execute::<Success<Item>, _>(endpoints::ITEM_INFO, &ItemIdParams::new(id))
            .await
    }

    /// Path of the item's thumbnail file on the machine running Eagle.
    pub async fn get_item_thumbnail(&self, id: &str) -> Result<String, ApiError> {
        self.execute::<Success<String>, _>(endpoints::ITEM_THUMBNAIL, &ItemIdParams::new(id))
            .await
    }

    pub async fn get_item_list(&self, params: &ItemListParams) -> Result<Vec<Item>, ApiError> {
        self.execute::<Success<Vec<Item>>, _>(endpoints::ITEM_LIST, params)
            .await
    }

    /// Eagle reports success even for IDs it does not know.
    pub async fn move_items_to_trash(&self, params: &MoveToTrashParams) -> Result<(), ApiError> {
        self.execute::<Acknowledged, _>(endpoints::ITEM_MOVE_TO_TRASH, params)
            .await
    }

    pub async fn refresh_item_palette(&self, id: &str) -> Result<(), ApiError> {
        self.execute::<Acknowledged, _>(endpoints::ITEM_REFRESH_PALETTE, &ItemIdParams::new(id))
            .await
    }

    pub async fn refresh_item_thumbnail(&self, id: &str) -> Result<(), ApiError> {
        self.execute::<Acknowledged, _>(
            endpoints::ITEM_REFRESH_THUMBNAIL,
            &ItemIdParams::new(id),
        )
        .await
    }

    pub async fn update_item(&self, params: &UpdateItemParams) -> Result<Item, ApiError> {
        self.execute::<Success<Item>, _>(endpoints::ITEM_UPDATE, params)
            .await
    }

    // Library

    pub async fn get_library_info(&self) -> Result<LibraryInfo, ApiError> {
        self.execute::<Success<LibraryInfo>, _>(endpoints::LIBRARY_INFO, &())
            .await
    }

    pub async fn get_library_history(&self) -> Result<Vec<String>, ApiError> {
        self.execute::<Success<Vec<String>>, _>(endpoints::LIBRARY_HISTORY, &())
            .await
    }

    pub async fn switch_library(&self, params: &SwitchLibraryParams) -> Result<(), ApiError> {
        self.execute::<Acknowledged, _>(endpoints::LIBRARY_SWITCH, params)
            .await
    }
}
