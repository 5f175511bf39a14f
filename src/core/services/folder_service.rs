use crate::AppError;
use crate::api::client::EagleClient;
use crate::schema::{ChildFolder, FolderSummary};

/// A folder from the tree, flattened with its position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderEntry {
    pub id: String,
    pub name: String,
    pub depth: usize,
    /// Names from the root down to this folder, joined with `/`.
    pub path: String,
}

pub struct FolderService {
    client: EagleClient,
}

impl FolderService {
    pub fn new(client: EagleClient) -> Self {
        Self { client }
    }

    pub async fn list_flat(&self) -> Result<Vec<FolderEntry>, AppError> {
        let folders = self.client.get_folder_list().await?;
        Ok(Self::flatten(&folders))
    }

    /// Folders whose name matches `name`, case-insensitively.
    pub async fn find_by_name(&self, name: &str) -> Result<Vec<FolderEntry>, AppError> {
        let needle = name.to_lowercase();
        Ok(self
            .list_flat()
            .await?
            .into_iter()
            .filter(|entry| entry.name.to_lowercase() == needle)
            .collect())
    }

    /// Depth-first, parents before children, siblings in server order.
    pub fn flatten(folders: &[FolderSummary]) -> Vec<FolderEntry> {
        let mut entries = Vec::new();
        for folder in folders {
            entries.push(FolderEntry {
                id: folder.id.clone(),
                name: folder.name.clone(),
                depth: 0,
                path: folder.name.clone(),
            });
            for child in &folder.children {
                Self::walk(child, 1, &folder.name, &mut entries);
            }
        }
        entries
    }

    fn walk(folder: &ChildFolder, depth: usize, parent_path: &str, entries: &mut Vec<FolderEntry>) {
        let path = format!("{}/{}", parent_path, folder.name);
        entries.push(FolderEntry {
            id: folder.id.clone(),
            name: folder.name.clone(),
            depth,
            path: path.clone(),
        });
        for child in &folder.children {
            Self::walk(child, depth + 1, &path, entries);
        }
    }
}
