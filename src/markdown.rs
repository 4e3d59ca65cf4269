//! Converts post bodies from markdown to HTML. Headings receive an `id`
//! attribute derived from their text so that sections can be linked to.

use pulldown_cmark::{html, CowStr, Event, Options, Parser, Tag};
use std::collections::{HashSet, VecDeque};

/// Converts markdown to an HTML fragment. Conversion is total: any input
/// produces output, possibly empty.
pub fn to_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_FOOTNOTES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_TASKLISTS);

    let mut out = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(
        &mut out,
        HeadingAnchors::new(Parser::new_ext(markdown, options)),
    );
    out
}

/// Wraps an [`Event`] stream and replaces each heading's start and end tags
/// with raw HTML carrying an `id`. The ID is the slug of the heading's text,
/// suffixed with `-1`, `-2`, ... until it differs from every ID issued so far.
struct HeadingAnchors<'a, I> {
    events: I,
    pending: VecDeque<Event<'a>>,
    issued: HashSet<String>,
}

impl<'a, I: Iterator<Item = Event<'a>>> HeadingAnchors<'a, I> {
    fn new(events: I) -> Self {
        HeadingAnchors {
            events,
            pending: VecDeque::new(),
            issued: HashSet::new(),
        }
    }

    fn unique_id(&mut self, text: &str) -> String {
        let mut base = slug::slugify(text);
        if base.is_empty() {
            base = String::from("section");
        }
        let mut id = base.clone();
        let mut n = 0;
        while !self.issued.insert(id.clone()) {
            n += 1;
            id = format!("{}-{}", base, n);
        }
        id
    }

    /// Buffers everything up to the end of the heading opened at `level`.
    fn buffer_heading(&mut self, level: u32) {
        let mut text = String::new();
        let mut inner = Vec::new();
        for event in &mut self.events {
            match &event {
                Event::End(Tag::Heading(_)) => break,
                Event::Text(s) | Event::Code(s) => text.push_str(s),
                _ => {}
            }
            inner.push(event);
        }

        let id = self.unique_id(&text);
        self.pending.push_back(Event::Html(CowStr::from(format!(
            r#"<h{} id="{}">"#,
            level, id
        ))));
        self.pending.extend(inner);
        self.pending
            .push_back(Event::Html(CowStr::from(format!("</h{}>\n", level))));
    }
}

impl<'a, I: Iterator<Item = Event<'a>>> Iterator for HeadingAnchors<'a, I> {
    type Item = Event<'a>;

    fn next(&mut self) -> Option<Event<'a>> {
        if let Some(event) = self.pending.pop_front() {
            return Some(event);
        }
        match self.events.next()? {
            Event::Start(Tag::Heading(level)) => {
                self.buffer_heading(level);
                self.pending.pop_front()
            }
            event => Some(event),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_paragraph() {
        assert_eq!("<p>Hello <em>world</em></p>\n", to_html("Hello *world*"));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!("", to_html(""));
    }

    #[test]
    fn test_heading_ids() {
        assert_eq!(
            "<h1 id=\"hello-world\">Hello <code>World</code></h1>\n<p>text</p>\n",
            to_html("# Hello `World`\n\ntext"),
        );
    }

    #[test]
    fn test_duplicate_heading_ids() {
        let html = to_html("## Setup\n\n## Setup\n\n## Setup\n");
        assert!(html.contains(r#"<h2 id="setup">"#));
        assert!(html.contains(r#"<h2 id="setup-1">"#));
        assert!(html.contains(r#"<h2 id="setup-2">"#));
    }

    #[test]
    fn test_suffixed_heading_id_does_not_collide() {
        let html = to_html("## Setup\n\n## Setup\n\n## Setup 1\n");
        assert_eq!(1, html.matches(r#"id="setup""#).count());
        assert_eq!(1, html.matches(r#"id="setup-1""#).count());
        assert!(html.contains(r#"<h2 id="setup-1-1">Setup 1</h2>"#));
    }

    #[test]
    fn test_escapes_text() {
        assert_eq!("<p>a &lt; b</p>\n", to_html("a < b"));
    }

    #[test]
    fn test_extensions() {
        let html = to_html("~~gone~~\n\n| a | b |\n|---|---|\n| 1 | 2 |\n");
        assert!(html.contains("<del>gone</del>"));
        assert!(html.contains("<table>"));
        assert!(html.contains("<td>1</td>"));
    }
}
