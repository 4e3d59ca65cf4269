//! The library code for `clockface`. It holds two independent pieces:
//!
//! 1. Clock geometry ([`crate::clockface`]): converting a [`time::TimeOfDay`]
//!    into the endpoints of a clock's hands, first on the unit circle and
//!    then in screen space, plus an SVG writer for a full face
//!    ([`crate::svg`]).
//! 2. A blog renderer ([`crate::render`]): parsing [`post::Post`]s from
//!    markdown with YAML frontmatter and templating them into post pages and
//!    an index page.
//!
//! Nothing here touches the file system; input and output go through
//! strings and [`std::io`] readers and writers.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]

pub mod clockface;
pub mod config;
pub mod markdown;
pub mod post;
pub mod render;
pub mod svg;
pub mod time;
pub mod value;
