//! Converts [`Post`]s into [`Value`]s for templating. Every string that
//! came from the author is HTML-escaped here; the rendered body is the only
//! field passed through verbatim.

use crate::markdown;
use crate::post::Post;
use gtmpl::Value;
use pulldown_cmark::escape::escape_html;
use std::collections::HashMap;

impl Post {
    /// The URL of the post's page, e.g. `/post/hello-world`.
    pub fn url(&self, posts_path: &str) -> String {
        format!("{}{}", posts_path, self.sanitised_title())
    }

    /// Converts the post into the value handed to the post template. The
    /// result is a [`Value::Object`] with fields `title`, `description`,
    /// `tags`, `url`, and `body`, where `body` is the markdown rendered to
    /// HTML.
    pub fn to_value(&self, posts_path: &str) -> Value {
        let mut m = self.common_fields(posts_path);
        m.insert(
            "tags".to_owned(),
            Value::Array(self.tags.iter().map(|t| Value::String(escape(t))).collect()),
        );
        m.insert("body".to_owned(), Value::String(markdown::to_html(&self.body)));
        Value::Object(m)
    }

    /// Converts the post into an entry for the index template: the same as
    /// [`Post::to_value`] minus `tags` and `body`.
    pub fn summarize(&self, posts_path: &str) -> Value {
        Value::Object(self.common_fields(posts_path))
    }

    fn common_fields(&self, posts_path: &str) -> HashMap<String, Value> {
        let mut m: HashMap<String, Value> = HashMap::new();
        m.insert("title".to_owned(), Value::String(escape(&self.title)));
        m.insert(
            "description".to_owned(),
            Value::String(escape(&self.description)),
        );
        m.insert("url".to_owned(), Value::String(escape(&self.url(posts_path))));
        m
    }
}

/// The value handed to the index template: a [`Value::Object`] with the page
/// `title` and the summarized `posts` in their given order.
pub fn index_value(title: &str, posts: &[Post], posts_path: &str) -> Value {
    let mut m: HashMap<String, Value> = HashMap::new();
    m.insert("title".to_owned(), Value::String(escape(title)));
    m.insert(
        "posts".to_owned(),
        Value::Array(posts.iter().map(|p| p.summarize(posts_path)).collect()),
    );
    Value::Object(m)
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    // writing into a String can't fail
    let _ = escape_html(&mut out, s);
    out
}
