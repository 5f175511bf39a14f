use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "eagle-cli")]
#[command(about = "Command line interface for the Eagle app local API")]
#[command(version)]
pub struct Cli {
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(short, long, global = true)]
    pub profile: Option<String>,

    #[arg(long, global = true)]
    pub config_dir: Option<String>,

    /// Eagle API host (overrides the profile)
    #[arg(long, global = true, env = "EAGLE_HOST")]
    pub host: Option<String>,

    /// Eagle API port (overrides the profile)
    #[arg(long, global = true, env = "EAGLE_PORT")]
    pub port: Option<u16>,

    /// Print validated results as JSON instead of tables
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Eagle application information
    App {
        #[command(subcommand)]
        command: AppCommands,
    },
    /// Folder management
    Folder {
        #[command(subcommand)]
        command: FolderCommands,
    },
    /// Item management
    Item {
        #[command(subcommand)]
        command: ItemCommands,
    },
    /// Library information and switching
    Library {
        #[command(subcommand)]
        command: LibraryCommands,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum AppCommands {
    /// Show the running Eagle version and platform
    Info,
}

#[derive(Subcommand, Debug)]
pub enum FolderCommands {
    /// Create a folder
    Create {
        name: String,
        /// Parent folder ID
        #[arg(long)]
        parent: Option<String>,
    },
    /// Rename a folder
    Rename { id: String, name: String },
    /// Update a folder's name, description or color
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
        /// red, orange, green, yellow, aqua, blue, purple or pink
        #[arg(long)]
        color: Option<String>,
    },
    /// List the folder tree
    List,
    /// List recently used folders
    Recent,
    /// Find folders by name (case-insensitive)
    Find { name: String },
}

#[derive(Subcommand, Debug)]
pub enum ItemCommands {
    /// Add an item from a URL
    AddUrl {
        url: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        website: Option<String>,
        #[arg(long)]
        annotation: Option<String>,
        #[arg(long, action = clap::ArgAction::Append)]
        tag: Vec<String>,
        #[arg(long)]
        folder: Option<String>,
        /// Request header in Name=Value format
        #[arg(long, action = clap::ArgAction::Append)]
        header: Vec<String>,
    },
    /// Add several items from URLs
    AddUrls {
        #[arg(required = true)]
        urls: Vec<String>,
        #[arg(long)]
        folder: Option<String>,
    },
    /// Add an item from a local file
    AddPath {
        path: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        website: Option<String>,
        #[arg(long)]
        annotation: Option<String>,
        #[arg(long, action = clap::ArgAction::Append)]
        tag: Vec<String>,
        #[arg(long)]
        folder: Option<String>,
    },
    /// Add several items from local files
    AddPaths {
        #[arg(required = true)]
        paths: Vec<String>,
        #[arg(long)]
        folder: Option<String>,
    },
    /// Save a bookmark
    AddBookmark {
        url: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long, action = clap::ArgAction::Append)]
        tag: Vec<String>,
        #[arg(long)]
        folder: Option<String>,
    },
    /// Show one item
    Info { id: String },
    /// Print the thumbnail path of an item
    Thumbnail { id: String },
    /// List items
    List {
        #[arg(long, default_value = "20")]
        limit: u32,
        #[arg(long)]
        offset: Option<u32>,
        /// e.g. CREATEDATE, -CREATEDATE, FILESIZE, NAME, RESOLUTION
        #[arg(long)]
        order_by: Option<String>,
        #[arg(long)]
        keyword: Option<String>,
        #[arg(long)]
        ext: Option<String>,
        #[arg(long, action = clap::ArgAction::Append)]
        tag: Vec<String>,
        #[arg(long, action = clap::ArgAction::Append)]
        folder: Vec<String>,
    },
    /// List items carrying every given tag
    FindTagged {
        #[arg(required = true)]
        tags: Vec<String>,
        /// Show at most this many matches
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Move items to the trash
    Trash {
        #[arg(required = true)]
        ids: Vec<String>,
    },
    /// Move every item in the library to the trash
    TrashAll {
        #[arg(long, default_value = "200")]
        batch_size: u32,
        #[arg(long, default_value = "50")]
        max_rounds: usize,
    },
    /// Recompute an item's color palette
    RefreshPalette { id: String },
    /// Regenerate an item's thumbnail
    RefreshThumbnail { id: String },
    /// Update an item's tags, annotation, URL or rating
    Update {
        id: String,
        #[arg(long, action = clap::ArgAction::Append)]
        tag: Vec<String>,
        #[arg(long)]
        annotation: Option<String>,
        #[arg(long)]
        url: Option<String>,
        /// Rating from 0 to 5
        #[arg(long)]
        star: Option<u8>,
    },
}

#[derive(Subcommand, Debug)]
pub enum LibraryCommands {
    /// Show the current library
    Info,
    /// List recently opened libraries
    History,
    /// Switch to another library
    Switch { path: String },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show the current configuration
    Show,
    /// Set a value on the active profile (host, port or timeout)
    Set {
        /// Configuration key
        key: String,
        /// Configuration value
        value: String,
    },
}
