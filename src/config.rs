//! YAML configuration for the clock face and the blog renderer. Every field
//! has a default, so an empty document is a valid configuration:
//!
//! ```yaml
//! face:
//!   centre: { x: 150, y: 150 }
//!   bezel_radius: 100
//!   second_hand_length: 90
//! site:
//!   posts_path: /post/
//!   index_title: Posts
//!   theme:
//!     post: "<h1>{{ .title }}</h1>{{ .body }}"
//! ```

use crate::clockface::Face;
use crate::render::{self, PostRenderer, Theme};
use serde::Deserialize;
use std::fmt;
use std::io::Read;

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub face: Face,
    pub site: Site,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Site {
    /// Prefix for post URLs on the index page.
    pub posts_path: String,
    pub index_title: String,
    pub theme: Theme,
}

impl Default for Site {
    fn default() -> Self {
        Site {
            posts_path: String::from("/post/"),
            index_title: String::from("Posts"),
            theme: Theme::default(),
        }
    }
}

impl Config {
    pub fn from_yaml(input: &str) -> Result<Config> {
        match input.trim().is_empty() {
            true => Ok(Config::default()),
            false => Ok(serde_yaml::from_str(input)?),
        }
    }

    pub fn from_reader<R: Read>(mut r: R) -> Result<Config> {
        let mut input = String::new();
        r.read_to_string(&mut input)?;
        Config::from_yaml(&input)
    }

    /// Builds a [`PostRenderer`] from the `site` section.
    pub fn renderer(&self) -> render::Result<PostRenderer> {
        PostRenderer::with_theme(
            &self.site.theme,
            &self.site.posts_path,
            &self.site.index_title,
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// Represents an error loading a [`Config`].
#[derive(Debug)]
pub enum Error {
    /// Returned when the configuration isn't valid YAML or doesn't match the
    /// expected shape.
    DeserializeYaml(serde_yaml::Error),

    /// Returned when reading the configuration fails.
    Io(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::DeserializeYaml(err) => {
                write!(f, "Loading configuration: {}", err)
            }
            Error::Io(err) => write!(f, "Reading configuration: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::DeserializeYaml(err) => Some(err),
            Error::Io(err) => Some(err),
        }
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(err: serde_yaml::Error) -> Error {
        Error::DeserializeYaml(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Error {
        Error::Io(err)
    }
}
