//! Endpoint descriptors, one per operation.

use super::transport::HttpMethod;

/// Static pairing of HTTP method and path for one server operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    pub method: HttpMethod,
    pub path: &'static str,
}

const fn get(path: &'static str) -> Endpoint {
    Endpoint {
        method: HttpMethod::Get,
        path,
    }
}

const fn post(path: &'static str) -> Endpoint {
    Endpoint {
        method: HttpMethod::Post,
        path,
    }
}

pub const APPLICATION_INFO: Endpoint = get("/api/application/info");

pub const FOLDER_CREATE: Endpoint = post("/api/folder/create");
pub const FOLDER_RENAME: Endpoint = post("/api/folder/rename");
pub const FOLDER_UPDATE: Endpoint = post("/api/folder/update");
pub const FOLDER_LIST: Endpoint = get("/api/folder/list");
pub const FOLDER_LIST_RECENT: Endpoint = get("/api/folder/listRecent");

pub const ITEM_ADD_FROM_URL: Endpoint = post("/api/item/addFromURL");
pub const ITEM_ADD_FROM_URLS: Endpoint = post("/api/item/addFromURLs");
pub const ITEM_ADD_FROM_PATH: Endpoint = post("/api/item/addFromPath");
pub const ITEM_ADD_FROM_PATHS: Endpoint = post("/api/item/addFromPaths");
pub const ITEM_ADD_BOOKMARK: Endpoint = post("/api/item/addBookmark");
pub const ITEM_INFO: Endpoint = get("/api/item/info");
pub const ITEM_THUMBNAIL: Endpoint = get("/api/item/thumbnail");
pub const ITEM_LIST: Endpoint = get("/api/item/list");
pub const ITEM_MOVE_TO_TRASH: Endpoint = post("/api/item/moveToTrash");
pub const ITEM_REFRESH_PALETTE: Endpoint = post("/api/item/refreshPalette");
pub const ITEM_REFRESH_THUMBNAIL: Endpoint = post("/api/item/refreshThumbnail");
pub const ITEM_UPDATE: Endpoint = post("/api/item/update");

pub const LIBRARY_INFO: Endpoint = get("/api/library/info");
pub const LIBRARY_HISTORY: Endpoint = get("/api/library/history");
pub const LIBRARY_SWITCH: Endpoint = post("/api/library/switch");

pub const ALL: [Endpoint; 21] = [
    APPLICATION_INFO,
    FOLDER_CREATE,
    FOLDER_RENAME,
    FOLDER_UPDATE,
    FOLDER_LIST,
    FOLDER_LIST_RECENT,
    ITEM_ADD_FROM_URL,
    ITEM_ADD_FROM_URLS,
    ITEM_ADD_FROM_PATH,
    ITEM_ADD_FROM_PATHS,
    ITEM_ADD_BOOKMARK,
    ITEM_INFO,
    ITEM_THUMBNAIL,
    ITEM_LIST,
    ITEM_MOVE_TO_TRASH,
    ITEM_REFRESH_PALETTE,
    ITEM_REFRESH_THUMBNAIL,
    ITEM_UPDATE,
    LIBRARY_INFO,
    LIBRARY_HISTORY,
    LIBRARY_SWITCH,
];
