//! Defines the [`Post`] type and the logic for parsing posts from markdown
//! sources with YAML frontmatter.

use serde::Deserialize;
use std::fmt;

/// A blog post. The `body` is markdown; conversion to HTML happens at render
/// time (see [`crate::render`]).
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Post {
    #[serde(rename = "Title")]
    pub title: String,

    #[serde(default, rename = "Description")]
    pub description: String,

    #[serde(skip)]
    pub body: String,

    /// Tags in the order the author listed them.
    #[serde(default, rename = "Tags")]
    pub tags: Vec<String>,
}

impl Post {
    /// The title lowercased with spaces turned into `-`, e.g. `Hello World`
    /// becomes `hello-world`. Punctuation is kept, so distinct titles keep
    /// distinct links.
    pub fn sanitised_title(&self) -> String {
        self.title.replace(' ', "-").to_lowercase()
    }

    /// Parses a post from a source string structured as follows:
    ///
    /// 1. Initial frontmatter fence (`---`)
    /// 2. YAML frontmatter with the field `Title` and optionally `Description`
    ///    and `Tags`
    /// 3. Terminal frontmatter fence (`---`)
    /// 4. Markdown body
    ///
    /// For example:
    ///
    /// ```md
    /// ---
    /// Title: Hello, world!
    /// Description: A greeting
    /// Tags: [greet, intro]
    /// ---
    /// # Hello
    ///
    /// World
    /// ```
    pub fn from_source(input: &str) -> Result<Post> {
        let (yaml_start, yaml_stop, body_start) = frontmatter_indices(input)?;
        let mut post: Post = serde_yaml::from_str(&input[yaml_start..yaml_stop])?;
        post.body = input[body_start..]
            .trim_start_matches(&['\r', '\n'][..])
            .to_owned();
        Ok(post)
    }
}

fn frontmatter_indices(input: &str) -> Result<(usize, usize, usize)> {
    const FENCE: &str = "---";
    if !input.starts_with(FENCE) {
        return Err(Error::FrontmatterMissingStartFence);
    }
    match input[FENCE.len()..].find("\n---") {
        None => Err(Error::FrontmatterMissingEndFence),
        Some(offset) => Ok((
            FENCE.len(),                            // yaml_start
            FENCE.len() + offset + 1,               // yaml_stop
            FENCE.len() + offset + 1 + FENCE.len(), // body_start
        )),
    }
}

/// Represents the result of a [`Post`]-parse operation.
pub type Result<T> = std::result::Result<T, Error>;

/// Represents an error parsing a [`Post`] object.
#[derive(Debug)]
pub enum Error {
    /// Returned when a post source is missing its starting frontmatter
    /// fence (`---`).
    FrontmatterMissingStartFence,

    /// Returned when the starting fence was found but the terminal one was
    /// missing.
    FrontmatterMissingEndFence,

    /// Returned when there was an error parsing the frontmatter as YAML.
    DeserializeYaml(serde_yaml::Error),
}

impl fmt::Display for Error {
    /// Displays an [`Error`] as human-readable text.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::FrontmatterMissingStartFence => {
                write!(f, "Post must begin with `---`")
            }
            Error::FrontmatterMissingEndFence => {
                write!(f, "Missing closing `---`")
            }
            Error::DeserializeYaml(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::FrontmatterMissingStartFence => None,
            Error::FrontmatterMissingEndFence => None,
            Error::DeserializeYaml(err) => Some(err),
        }
    }
}

impl From<serde_yaml::Error> for Error {
    /// Converts a [`serde_yaml::Error`] into an [`Error`]. It allows us to use
    /// the `?` operator for [`serde_yaml`] deserialization functions.
    fn from(err: serde_yaml::Error) -> Error {
        Error::DeserializeYaml(err)
    }
}
