use crate::api::client::{ClientConfig, EagleClient};
use crate::api::models::{
    AddBookmarkParams, AddItemFromPathParams, AddItemFromUrlParams, AddItemsFromPathsParams,
    AddItemsFromUrlsParams, CreateFolderParams, ItemListParams, MoveToTrashParams, PathItem,
    RenameFolderParams, SwitchLibraryParams, UpdateFolderParams, UpdateItemParams, UrlItem,
};
use crate::cli::main_types::{
    AppCommands, Commands, ConfigCommands, FolderCommands, ItemCommands, LibraryCommands,
};
use crate::core::services::{FolderService, ItemService};
use crate::display::TableDisplay;
use crate::error::{AppError, CliError};
use crate::schema::{Color, Order};
use crate::storage::config::{Config, Profile};
use crate::utils::logging::VerboseLogger;
use crate::utils::validation::{parse_port, validate_host, validate_star, validate_url};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Settings taken from the global command-line flags.
#[derive(Debug, Clone)]
pub struct DispatchOptions {
    pub profile_name: String,
    pub config_path: Option<PathBuf>,
    pub json: bool,
    pub verbose: bool,
}

/// Endpoint resolution: explicit flags, then the profile, then the defaults.
pub fn resolve_client_config(
    profile: Option<&Profile>,
    host: Option<String>,
    port: Option<u16>,
) -> Result<ClientConfig, AppError> {
    let mut config = profile.map(Profile::client_config).unwrap_or_default();
    if let Some(host) = host {
        validate_host(&host)?;
        config.host = host;
    }
    if let Some(port) = port {
        config.port = port;
    }
    Ok(config)
}

pub struct Dispatcher {
    config: Config,
    options: DispatchOptions,
    client: EagleClient,
    logger: VerboseLogger,
    display: TableDisplay,
}

impl Dispatcher {
    pub fn new(
        config: Config,
        options: DispatchOptions,
        client_config: ClientConfig,
    ) -> Result<Self, AppError> {
        let client = EagleClient::new(client_config)?;
        Ok(Self::with_client(config, options, client))
    }

    pub fn with_client(config: Config, options: DispatchOptions, client: EagleClient) -> Self {
        let logger = VerboseLogger::new(options.verbose);
        Self {
            config,
            options,
            client,
            logger,
            display: TableDisplay::new(),
        }
    }

    pub async fn dispatch(&self, command: Commands) -> Result<(), AppError> {
        let output = self.run(command).await?;
        println!("{}", output);
        Ok(())
    }

    /// Execute a command and return what should be printed.
    pub async fn run(&self, command: Commands) -> Result<String, AppError> {
        self.logger
            .log(&format!("Using Eagle API at {}", self.client.base_url()));
        match command {
            Commands::App { command } => self.handle_app_command(command).await,
            Commands::Folder { command } => self.handle_folder_command(command).await,
            Commands::Item { command } => self.handle_item_command(command).await,
            Commands::Library { command } => self.handle_library_command(command).await,
            Commands::Config { command } => self.handle_config_command(command),
        }
    }

    async fn handle_app_command(&self, command: AppCommands) -> Result<String, AppError> {
        match command {
            AppCommands::Info => {
                self.logger.log("Attempting app info command");
                let info = self.client.get_application_info().await?;
                self.emit(&info, |info| self.display.render_application_info(info))
            }
        }
    }

    async fn handle_folder_command(&self, command: FolderCommands) -> Result<String, AppError> {
        match command {
            FolderCommands::Create { name, parent } => {
                self.logger
                    .log(&format!("Attempting folder create - name: {}", name));
                let params = CreateFolderParams {
                    parent_folder_id: parent,
                    ..CreateFolderParams::new(name)
                };
                let folder = self.client.create_folder(&params).await?;
                self.emit(&folder, |f| format!("Created folder '{}' ({})", f.name, f.id))
            }
            FolderCommands::Rename { id, name } => {
                self.logger
                    .log(&format!("Attempting folder rename - id: {}", id));
                let params = RenameFolderParams {
                    folder_id: id,
                    new_name: name,
                };
                let folder = self.client.rename_folder(&params).await?;
                self.emit(&folder, |f| format!("Renamed folder {} to '{}'", f.id, f.name))
            }
            FolderCommands::Update {
                id,
                name,
                description,
                color,
            } => {
                self.logger
                    .log(&format!("Attempting folder update - id: {}", id));
                let new_color = color
                    .map(|c| c.parse::<Color>())
                    .transpose()
                    .map_err(CliError::InvalidArguments)?;
                let params = UpdateFolderParams {
                    new_name: name,
                    new_description: description,
                    new_color,
                    ..UpdateFolderParams::new(id)
                };
                let folder = self.client.update_folder(&params).await?;
                self.emit(&folder, |f| format!("Updated folder '{}' ({})", f.name, f.id))
            }
            FolderCommands::List => {
                self.logger.log("Attempting folder list command");
                let folders = self.client.get_folder_list().await?;
                if self.options.json {
                    return self.to_json(&folders);
                }
                Ok(self
                    .display
                    .render_folders(&FolderService::flatten(&folders)))
            }
            FolderCommands::Recent => {
                self.logger.log("Attempting folder recent command");
                let folders = self.client.get_recent_folder_list().await?;
                self.emit(&folders, |f| self.display.render_recent_folders(f))
            }
            FolderCommands::Find { name } => {
                self.logger
                    .log(&format!("Attempting folder find - name: {}", name));
                let service = FolderService::new(self.client.clone());
                let matches = service.find_by_name(&name).await?;
                if self.options.json {
                    let ids: Vec<&str> = matches.iter().map(|m| m.id.as_str()).collect();
                    return self.to_json(&ids);
                }
                Ok(self.display.render_folders(&matches))
            }
        }
    }

    async fn handle_item_command(&self, command: ItemCommands) -> Result<String, AppError> {
        match command {
            ItemCommands::AddUrl {
                url,
                name,
                website,
                annotation,
                tag,
                folder,
                header,
            } => {
                self.logger
                    .log(&format!("Attempting item add-url - url: {}", url));
                validate_url(&url)?;
                let params = AddItemFromUrlParams {
                    name,
                    website,
                    annotation,
                    tags: non_empty(tag),
                    folder_id: folder,
                    headers: parse_headers(&header)?,
                    ..AddItemFromUrlParams::new(url)
                };
                self.client.add_item_from_url(&params).await?;
                self.acknowledge("Item added")
            }
            ItemCommands::AddUrls { urls, folder } => {
                self.logger
                    .log(&format!("Attempting item add-urls - count: {}", urls.len()));
                for url in &urls {
                    validate_url(url)?;
                }
                let count = urls.len();
                let params = AddItemsFromUrlsParams {
                    items: urls.into_iter().map(UrlItem::new).collect(),
                    folder_id: folder,
                };
                self.client.add_items_from_urls(&params).await?;
                self.acknowledge(&format!("{} items added", count))
            }
            ItemCommands::AddPath {
                path,
                name,
                website,
                annotation,
                tag,
                folder,
            } => {
                self.logger
                    .log(&format!("Attempting item add-path - path: {}", path));
                let params = AddItemFromPathParams {
                    name,
                    website,
                    annotation,
                    tags: non_empty(tag),
                    folder_id: folder,
                    ..AddItemFromPathParams::new(path)
                };
                self.client.add_item_from_path(&params).await?;
                self.acknowledge("Item added")
            }
            ItemCommands::AddPaths { paths, folder } => {
                self.logger.log(&format!(
                    "Attempting item add-paths - count: {}",
                    paths.len()
                ));
                let count = paths.len();
                let params = AddItemsFromPathsParams {
                    items: paths.into_iter().map(PathItem::new).collect(),
                    folder_id: folder,
                };
                self.client.add_items_from_paths(&params).await?;
                self.acknowledge(&format!("{} items added", count))
            }
            ItemCommands::AddBookmark {
                url,
                name,
                tag,
                folder,
            } => {
                self.logger
                    .log(&format!("Attempting item add-bookmark - url: {}", url));
                validate_url(&url)?;
                let params = AddBookmarkParams {
                    name,
                    tags: non_empty(tag),
                    folder_id: folder,
                    ..AddBookmarkParams::new(url)
                };
                self.client.add_bookmark(&params).await?;
                self.acknowledge("Bookmark added")
            }
            ItemCommands::Info { id } => {
                self.logger.log(&format!("Attempting item info - id: {}", id));
                let item = self.client.get_item_info(&id).await?;
                self.emit(&item, |item| self.display.render_item_detail(item))
            }
            ItemCommands::Thumbnail { id } => {
                self.logger
                    .log(&format!("Attempting item thumbnail - id: {}", id));
                let path = self.client.get_item_thumbnail(&id).await?;
                self.emit(&path, |path| path.clone())
            }
            ItemCommands::List {
                limit,
                offset,
                order_by,
                keyword,
                ext,
                tag,
                folder,
            } => {
                self.logger
                    .log(&format!("Attempting item list - limit: {}", limit));
                let order_by = order_by
                    .map(|o| o.parse::<Order>())
                    .transpose()
                    .map_err(CliError::InvalidArguments)?;
                let params = ItemListParams {
                    limit: Some(limit),
                    offset,
                    order_by,
                    keyword,
                    ext,
                    tags: non_empty(tag),
                    folders: non_empty(folder),
                };
                let service = ItemService::new(self.client.clone());
                let items = service.list(&params).await?;
                self.emit(&items, |items| self.display.render_items(items, None))
            }
            ItemCommands::FindTagged { tags, limit } => {
                self.logger
                    .log(&format!("Attempting item find-tagged - tags: {:?}", tags));
                let service = ItemService::new(self.client.clone());
                let mut items = service.find_by_tags(&tags).await?;
                if self.options.json {
                    if let Some(limit) = limit {
                        items.truncate(limit);
                    }
                    return self.to_json(&items);
                }
                Ok(self.display.render_items(&items, limit))
            }
            ItemCommands::Trash { ids } => {
                self.logger
                    .log(&format!("Attempting item trash - ids: {:?}", ids));
                let count = ids.len();
                let params = MoveToTrashParams { item_ids: ids };
                self.client.move_items_to_trash(&params).await?;
                self.acknowledge(&format!("Moved {} items to trash", count))
            }
            ItemCommands::TrashAll {
                batch_size,
                max_rounds,
            } => {
                self.logger.log(&format!(
                    "Attempting item trash-all - batch size: {}, max rounds: {}",
                    batch_size, max_rounds
                ));
                if batch_size == 0 {
                    return Err(CliError::InvalidArguments(
                        "--batch-size must be greater than 0".to_string(),
                    )
                    .into());
                }
                let service = ItemService::new(self.client.clone());
                let summary = service.trash_all(batch_size, max_rounds).await?;
                if self.options.json {
                    return self.to_json(&serde_json::json!({
                        "submitted": summary.submitted,
                        "rounds": summary.rounds,
                        "complete": summary.complete,
                    }));
                }
                let mut message = format!(
                    "Moved {} items to trash in {} rounds",
                    summary.submitted, summary.rounds
                );
                if !summary.complete {
                    message.push_str(" (items remain, run again to continue)");
                }
                Ok(message)
            }
            ItemCommands::RefreshPalette { id } => {
                self.logger
                    .log(&format!("Attempting item refresh-palette - id: {}", id));
                self.client.refresh_item_palette(&id).await?;
                self.acknowledge("Palette refreshed")
            }
            ItemCommands::RefreshThumbnail { id } => {
                self.logger
                    .log(&format!("Attempting item refresh-thumbnail - id: {}", id));
                self.client.refresh_item_thumbnail(&id).await?;
                self.acknowledge("Thumbnail refreshed")
            }
            ItemCommands::Update {
                id,
                tag,
                annotation,
                url,
                star,
            } => {
                self.logger
                    .log(&format!("Attempting item update - id: {}", id));
                if let Some(star) = star {
                    validate_star(star)?;
                }
                let params = UpdateItemParams {
                    tags: non_empty(tag),
                    annotation,
                    url,
                    star,
                    ..UpdateItemParams::new(id)
                };
                let item = self.client.update_item(&params).await?;
                self.emit(&item, |item| self.display.render_item_detail(item))
            }
        }
    }

    async fn handle_library_command(&self, command: LibraryCommands) -> Result<String, AppError> {
        match command {
            LibraryCommands::Info => {
                self.logger.log("Attempting library info command");
                let info = self.client.get_library_info().await?;
                self.emit(&info, |info| self.display.render_library_info(info))
            }
            LibraryCommands::History => {
                self.logger.log("Attempting library history command");
                let history = self.client.get_library_history().await?;
                self.emit(&history, |paths| self.display.render_library_history(paths))
            }
            LibraryCommands::Switch { path } => {
                self.logger
                    .log(&format!("Attempting library switch - path: {}", path));
                let params = SwitchLibraryParams {
                    library_path: path.clone(),
                };
                self.client.switch_library(&params).await?;
                self.acknowledge(&format!("Switched to library {}", path))
            }
        }
    }

    fn handle_config_command(&self, command: ConfigCommands) -> Result<String, AppError> {
        match command {
            ConfigCommands::Show => {
                self.logger.log("Attempting config show command");
                if self.options.json {
                    return self.to_json(&self.config);
                }

                let mut output = String::from("Current Configuration:\n=====================\n");
                output.push_str(&format!(
                    "Default Profile: {}\n",
                    self.config.default_profile.as_deref().unwrap_or("(not set)")
                ));
                output.push_str(&format!("Active Profile: {}\n", self.options.profile_name));
                output.push_str(&format!("Endpoint: {}\n", self.client.base_url()));

                output.push_str("\nProfiles:");
                if self.config.profiles.is_empty() {
                    output.push_str("\n  No profiles configured");
                }
                for (name, profile) in &self.config.profiles {
                    output.push_str(&format!("\n  [{}]", name));
                    output.push_str(&format!("\n    Host: {}", profile.host));
                    output.push_str(&format!("\n    Port: {}", profile.port));
                    if let Some(timeout) = profile.timeout_seconds {
                        output.push_str(&format!("\n    Timeout: {} seconds", timeout));
                    }
                }
                Ok(output)
            }
            ConfigCommands::Set { key, value } => {
                self.logger.log(&format!(
                    "Attempting config set - key: {}, value: {}",
                    key, value
                ));
                let config = apply_config_value(
                    self.config.clone(),
                    &self.options.profile_name,
                    &key,
                    &value,
                )?;
                config.save(self.options.config_path.clone())?;
                Ok(format!(
                    "Set {} = {} for profile '{}'",
                    key, value, self.options.profile_name
                ))
            }
        }
    }

    /// JSON in `--json` mode, otherwise the table rendering.
    fn emit<T: Serialize>(&self, value: &T, render: impl FnOnce(&T) -> String) -> Result<String, AppError> {
        if self.options.json {
            self.to_json(value)
        } else {
            Ok(render(value))
        }
    }

    fn acknowledge(&self, message: &str) -> Result<String, AppError> {
        if self.options.json {
            self.to_json(&serde_json::json!({ "status": "success" }))
        } else {
            Ok(format!("✅ {}", message))
        }
    }

    fn to_json<T: Serialize + ?Sized>(&self, value: &T) -> Result<String, AppError> {
        serde_json::to_string_pretty(value)
            .map_err(|e| CliError::OutputFormat(e.to_string()).into())
    }
}

/// Set `key` on the named profile, creating the profile if needed.
pub fn apply_config_value(
    mut config: Config,
    profile_name: &str,
    key: &str,
    value: &str,
) -> Result<Config, AppError> {
    let mut profile = config.get_profile(profile_name).cloned().unwrap_or_default();
    match key {
        "host" => {
            validate_host(value)?;
            profile.host = value.to_string();
        }
        "port" => profile.port = parse_port(value)?,
        "timeout" => {
            profile.timeout_seconds = match value {
                "none" | "0" => None,
                secs => Some(secs.parse::<u64>().map_err(|_| {
                    CliError::InvalidArguments(format!(
                        "Invalid timeout '{}': expected seconds or 'none'",
                        secs
                    ))
                })?),
            };
        }
        other => {
            return Err(CliError::UnknownConfigKey {
                key: other.to_string(),
            }
            .into());
        }
    }

    config.set_profile(profile_name.to_string(), profile);
    if config.default_profile.is_none() {
        config.default_profile = Some(profile_name.to_string());
    }
    Ok(config)
}

fn non_empty(values: Vec<String>) -> Option<Vec<String>> {
    if values.is_empty() { None } else { Some(values) }
}

/// Parse repeated `Name=Value` header flags.
fn parse_headers(raw: &[String]) -> Result<Option<BTreeMap<String, String>>, AppError> {
    if raw.is_empty() {
        return Ok(None);
    }
    let mut headers = BTreeMap::new();
    for entry in raw {
        let (name, value) = entry.split_once('=').ok_or_else(|| {
            CliError::InvalidArguments(format!(
                "Invalid header '{}': expected Name=Value",
                entry
            ))
        })?;
        headers.insert(name.trim().to_string(), value.trim().to_string());
    }
    Ok(Some(headers))
}
