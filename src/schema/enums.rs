use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Folder and tag-group colors accepted by Eagle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Orange,
    Green,
    Yellow,
    Aqua,
    Blue,
    Purple,
    Pink,
}

impl Color {
    pub const ALL: [Color; 8] = [
        Color::Red,
        Color::Orange,
        Color::Green,
        Color::Yellow,
        Color::Aqua,
        Color::Blue,
        Color::Purple,
        Color::Pink,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Orange => "orange",
            Color::Green => "green",
            Color::Yellow => "yellow",
            Color::Aqua => "aqua",
            Color::Blue => "blue",
            Color::Purple => "purple",
            Color::Pink => "pink",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Color {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::ALL
            .iter()
            .copied()
            .find(|color| color.as_str() == s)
            .ok_or_else(|| format!("unknown color '{}'", s))
    }
}

/// Sort order tokens. A leading `-` means descending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Order {
    #[serde(rename = "MANUAL")]
    Manual,
    #[serde(rename = "CREATEDATE")]
    CreateDate,
    #[serde(rename = "-CREATEDATE")]
    CreateDateDesc,
    #[serde(rename = "FILESIZE")]
    FileSize,
    #[serde(rename = "-FILESIZE")]
    FileSizeDesc,
    #[serde(rename = "NAME")]
    Name,
    #[serde(rename = "-NAME")]
    NameDesc,
    #[serde(rename = "RESOLUTION")]
    Resolution,
    #[serde(rename = "-RESOLUTION")]
    ResolutionDesc,
}

impl Order {
    pub const ALL: [Order; 9] = [
        Order::Manual,
        Order::CreateDate,
        Order::CreateDateDesc,
        Order::FileSize,
        Order::FileSizeDesc,
        Order::Name,
        Order::NameDesc,
        Order::Resolution,
        Order::ResolutionDesc,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Order::Manual => "MANUAL",
            Order::CreateDate => "CREATEDATE",
            Order::CreateDateDesc => "-CREATEDATE",
            Order::FileSize => "FILESIZE",
            Order::FileSizeDesc => "-FILESIZE",
            Order::Name => "NAME",
            Order::NameDesc => "-NAME",
            Order::Resolution => "RESOLUTION",
            Order::ResolutionDesc => "-RESOLUTION",
        }
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Order {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Order::ALL
            .iter()
            .copied()
            .find(|order| order.as_str() == s)
            .ok_or_else(|| format!("unknown sort order '{}'", s))
    }
}
