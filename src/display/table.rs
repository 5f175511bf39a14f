use crate::core::services::FolderEntry;
use crate::schema::{ApplicationInfo, Item, LibraryInfo, RecentFolder};
use crate::utils::text::{format_size, format_timestamp_millis, truncate_text};
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table, presets};

const NAME_WIDTH: usize = 40;
const TAGS_WIDTH: usize = 30;

/// Formatter for table output
pub struct TableDisplay {
    use_colors: bool,
}

impl Default for TableDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl TableDisplay {
    pub fn new() -> Self {
        Self { use_colors: true }
    }

    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    /// Item list with an omission note when `limit` cuts it short.
    pub fn render_items(&self, items: &[Item], limit: Option<usize>) -> String {
        if items.is_empty() {
            return "No items found.".to_string();
        }

        let mut table = self.new_table(&["ID", "Name", "Ext", "Size", "Dimensions", "Tags"]);
        let shown = limit.unwrap_or(items.len()).min(items.len());

        for item in &items[..shown] {
            table.add_row(vec![
                self.id_cell(&item.id),
                Cell::new(truncate_text(&item.name, NAME_WIDTH)),
                Cell::new(&item.ext),
                Cell::new(format_size(&item.size)),
                Cell::new(format!("{}x{}", item.width, item.height)),
                self.dim_cell(truncate_text(&item.tags.join(", "), TAGS_WIDTH)),
            ]);
        }

        let mut output = table.to_string();
        if shown < items.len() {
            output.push_str(&format!("\nShowing {} of {} items", shown, items.len()));
        }
        output
    }

    /// Key/value view of a single item.
    pub fn render_item_detail(&self, item: &Item) -> String {
        let mut table = self.new_table(&["Field", "Value"]);
        let rows = [
            ("ID", item.id.clone()),
            ("Name", item.name.clone()),
            ("Extension", item.ext.clone()),
            ("Size", format_size(&item.size)),
            ("Dimensions", format!("{}x{}", item.width, item.height)),
            ("Tags", item.tags.join(", ")),
            ("Folders", item.folders.join(", ")),
            ("URL", item.url.clone()),
            ("Annotation", item.annotation.clone()),
            ("Modified", format_timestamp_millis(&item.modification_time)),
            ("Deleted", item.is_deleted.to_string()),
        ];
        for (field, value) in rows {
            table.add_row(vec![self.label_cell(field), Cell::new(value)]);
        }
        table.to_string()
    }

    /// Flattened folder tree, indented by depth.
    pub fn render_folders(&self, folders: &[FolderEntry]) -> String {
        if folders.is_empty() {
            return "No folders found.".to_string();
        }

        let mut table = self.new_table(&["ID", "Name", "Path"]);
        for folder in folders {
            let indented = format!("{}{}", "  ".repeat(folder.depth), folder.name);
            table.add_row(vec![
                self.id_cell(&folder.id),
                Cell::new(truncate_text(&indented, NAME_WIDTH)),
                self.dim_cell(folder.path.clone()),
            ]);
        }
        table.to_string()
    }

    pub fn render_recent_folders(&self, folders: &[RecentFolder]) -> String {
        if folders.is_empty() {
            return "No recently used folders.".to_string();
        }

        let mut table = self.new_table(&["ID", "Name", "Modified"]);
        for folder in folders {
            table.add_row(vec![
                self.id_cell(&folder.id),
                Cell::new(truncate_text(&folder.name, NAME_WIDTH)),
                Cell::new(format_timestamp_millis(&folder.modification_time)),
            ]);
        }
        table.to_string()
    }

    pub fn render_application_info(&self, info: &ApplicationInfo) -> String {
        let mut table = self.new_table(&["Field", "Value"]);
        table.add_row(vec![self.label_cell("Version"), Cell::new(&info.version)]);
        table.add_row(vec![
            self.label_cell("Build"),
            Cell::new(&info.build_version),
        ]);
        table.add_row(vec![self.label_cell("Platform"), Cell::new(&info.platform)]);
        if let Some(path) = &info.exec_path {
            table.add_row(vec![self.label_cell("Executable"), Cell::new(path)]);
        }
        table.to_string()
    }

    pub fn render_library_info(&self, info: &LibraryInfo) -> String {
        let mut table = self.new_table(&["Field", "Value"]);
        let rows = [
            ("Library", info.library.name.clone()),
            ("Path", info.library.path.clone()),
            ("Folders", info.folders.len().to_string()),
            ("Smart folders", info.smart_folders.len().to_string()),
            ("Tag groups", info.tags_groups.len().to_string()),
            ("Quick access", info.quick_access.len().to_string()),
            ("Eagle version", info.application_version.clone()),
            ("Modified", format_timestamp_millis(&info.modification_time)),
        ];
        for (field, value) in rows {
            table.add_row(vec![self.label_cell(field), Cell::new(value)]);
        }
        table.to_string()
    }

    pub fn render_library_history(&self, paths: &[String]) -> String {
        if paths.is_empty() {
            return "No libraries in history.".to_string();
        }

        let mut table = self.new_table(&["#", "Library path"]);
        for (index, path) in paths.iter().enumerate() {
            table.add_row(vec![self.id_cell(&(index + 1).to_string()), Cell::new(path)]);
        }
        table.to_string()
    }

    fn new_table(&self, headers: &[&str]) -> Table {
        let mut table = Table::new();
        table.load_preset(presets::UTF8_FULL);
        table.set_content_arrangement(ContentArrangement::Dynamic);

        let header: Vec<Cell> = headers
            .iter()
            .map(|title| {
                if self.use_colors {
                    Cell::new(title).add_attribute(Attribute::Bold).fg(Color::Cyan)
                } else {
                    Cell::new(title)
                }
            })
            .collect();
        table.set_header(header);
        table
    }

    fn id_cell(&self, id: &str) -> Cell {
        if self.use_colors {
            Cell::new(id).fg(Color::Cyan)
        } else {
            Cell::new(id)
        }
    }

    fn label_cell(&self, label: &str) -> Cell {
        if self.use_colors {
            Cell::new(label).add_attribute(Attribute::Bold)
        } else {
            Cell::new(label)
        }
    }

    fn dim_cell(&self, text: String) -> Cell {
        if self.use_colors {
            Cell::new(text).fg(Color::DarkGrey)
        } else {
            Cell::new(text)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn plain() -> TableDisplay {
        TableDisplay::new().with_colors(false)
    }

    fn item(id: &str, name: &str) -> Item {
        serde_json::from_value(json!({
            "id": id,
            "name": name,
            "size": 2048,
            "ext": "jpg",
            "tags": ["cat", "cute"],
            "folders": ["F1"],
            "isDeleted": false,
            "url": "https://example.com",
            "annotation": "",
            "modificationTime": 1700000000000_i64,
            "width": 640,
            "height": 480,
            "lastModified": 1700000000000_i64,
            "palettes": []
        }))
        .unwrap()
    }

    #[test]
    fn test_render_items() {
        let output = plain().render_items(&[item("K1", "sunset")], None);
        assert!(output.contains("K1"));
        assert!(output.contains("sunset"));
        assert!(output.contains("2.0 KB"));
        assert!(output.contains("640x480"));
        assert!(output.contains("cat, cute"));
    }

    #[test]
    fn test_render_items_with_limit() {
        let items = vec![item("K1", "a"), item("K2", "b"), item("K3", "c")];
        let output = plain().render_items(&items, Some(2));
        assert!(output.contains("K2"));
        assert!(!output.contains("K3"));
        assert!(output.contains("Showing 2 of 3 items"));
    }

    #[test]
    fn test_render_empty_lists() {
        let display = plain();
        assert_eq!(display.render_items(&[], None), "No items found.");
        assert_eq!(display.render_folders(&[]), "No folders found.");
        assert_eq!(display.render_library_history(&[]), "No libraries in history.");
    }

    #[test]
    fn test_render_folders_indents_children() {
        let folders = vec![
            FolderEntry {
                id: "R1".to_string(),
                name: "Design".to_string(),
                depth: 0,
                path: "Design".to_string(),
            },
            FolderEntry {
                id: "C1".to_string(),
                name: "Logos".to_string(),
                depth: 1,
                path: "Design/Logos".to_string(),
            },
        ];
        let output = plain().render_folders(&folders);
        assert!(output.contains("Logos"));
        assert!(output.contains("Design/Logos"));
        assert!(output.contains("R1"));
    }

    #[test]
    fn test_render_item_detail() {
        let output = plain().render_item_detail(&item("K1", "sunset"));
        assert!(output.contains("Annotation"));
        assert!(output.contains("2023-11-14"));
    }

    #[test]
    fn test_render_library_history_numbers_rows() {
        let paths = vec!["/a.library".to_string(), "/b.library".to_string()];
        let output = plain().render_library_history(&paths);
        assert!(output.contains("/b.library"));
        assert!(output.contains(" 2 "));
    }
}
