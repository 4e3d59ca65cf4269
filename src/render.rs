//! Exports [`PostRenderer`], which templates [`Post`]s into HTML pages: one
//! page per post and an index page listing posts in order.

use crate::post::Post;
use crate::value::index_value;
use gtmpl::{Context, Template, Value};
use serde::Deserialize;
use std::fmt;
use std::io::Write;
use tracing::debug;

const LAYOUT_TEMPLATE: &str = include_str!("../templates/layout.html");
const POST_TEMPLATE: &str = include_str!("../templates/post.html");
const INDEX_TEMPLATE: &str = include_str!("../templates/index.html");

/// The template sources for a site. `layout` is prepended to both `post` and
/// `index` before parsing, so it is the place for `{{ define }}` blocks that
/// the page templates pull in with `{{ template }}`. The built-in layout
/// defines `top` and `bottom`.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub layout: String,
    pub post: String,
    pub index: String,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            layout: LAYOUT_TEMPLATE.to_owned(),
            post: POST_TEMPLATE.to_owned(),
            index: INDEX_TEMPLATE.to_owned(),
        }
    }
}

/// Renders posts and post indices. Both templates are parsed up front; a
/// [`PostRenderer`] only exists if they parsed.
pub struct PostRenderer {
    post_template: Template,
    index_template: Template,

    /// The prefix for post page URLs on the index page (a post's URL is
    /// `{posts_path}{sanitised_title}`).
    posts_path: String,

    /// The title of the index page.
    index_title: String,
}

impl PostRenderer {
    /// Builds a renderer from the built-in theme, linking posts under
    /// `/post/`.
    pub fn new() -> Result<PostRenderer> {
        PostRenderer::with_theme(&Theme::default(), "/post/", "Posts")
    }

    pub fn with_theme(
        theme: &Theme,
        posts_path: &str,
        index_title: &str,
    ) -> Result<PostRenderer> {
        let renderer = PostRenderer {
            post_template: parse_template(&[theme.layout.as_str(), theme.post.as_str()])?,
            index_template: parse_template(&[theme.layout.as_str(), theme.index.as_str()])?,
            posts_path: posts_path.to_owned(),
            index_title: index_title.to_owned(),
        };
        debug!(posts_path, "parsed post and index templates");
        Ok(renderer)
    }

    /// Renders `post` as a full page into `w`.
    pub fn render<W: Write>(&self, w: &mut W, post: &Post) -> Result<()> {
        debug!(title = %post.title, "rendering post");
        execute(&self.post_template, w, post.to_value(&self.posts_path))
    }

    /// Renders an index page linking to each of `posts`, in the given order.
    pub fn render_index<W: Write>(&self, w: &mut W, posts: &[Post]) -> Result<()> {
        debug!(posts = posts.len(), "rendering index");
        execute(
            &self.index_template,
            w,
            index_value(&self.index_title, posts, &self.posts_path),
        )
    }
}

// Appends the template sources and parses the result into a single template.
fn parse_template(sources: &[&str]) -> Result<Template> {
    let mut contents = String::new();
    for source in sources {
        contents.push_str(source);
        contents.push(' ');
    }

    let mut template = Template::default();
    template.parse(&contents).map_err(Error::ParseTemplate)?;
    Ok(template)
}

fn execute<W: Write>(template: &Template, w: &mut W, value: Value) -> Result<()> {
    template
        .execute(w, &Context::from(value).map_err(Error::Execute)?)
        .map_err(Error::Execute)
}

/// The result of a fallible rendering operation.
pub type Result<T> = std::result::Result<T, Error>;

/// Represents an error building a [`PostRenderer`] or rendering a page.
#[derive(Debug)]
pub enum Error {
    /// Returned when the template set fails to parse. Fatal to renderer
    /// construction.
    ParseTemplate(String),

    /// Returned when applying a template fails, including failures writing
    /// the output.
    Execute(String),
}

impl fmt::Display for Error {
    /// Displays an [`Error`] as presentable text.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::ParseTemplate(err) => write!(f, "Parsing templates: {}", err),
            Error::Execute(err) => write!(f, "Rendering: {}", err),
        }
    }
}

impl std::error::Error for Error {}
