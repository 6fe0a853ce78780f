#![deny(warnings)]
#![warn(missing_docs)]
#![forbid(unsafe_code)]
//! `wikigen` is a crate for generating Wikipedia-style articles with the
//! [Gemini `generateContent` API].
//!
//! To get started, create a [`Generator`] with your API key (usually via
//! [`Generator::from_env`]) and call [`Generator::generate`] with a [`Topic`].
//! On success you get an [`Article`] with the raw markdown text and a
//! suggested download file name.
//!
//! [Gemini `generateContent` API]: <https://ai.google.dev/api/generate-content>
//!
//! See the `demos` directory for a small CLI built on this crate.

pub mod key;
pub use key::Key;

pub mod client;
pub use client::Client;

pub mod model;
pub use model::Model;

pub mod topic;
pub use topic::Topic;

pub mod prompt;
pub use prompt::Prompt;

pub mod request;
pub use request::Request;

pub mod response;
pub use response::Response;

pub mod article;
pub use article::Article;

pub mod generate;
pub use generate::{GenerateText, Generator};

/// Re-exports of commonly used crates to avoid version conflicts and reduce
/// dependency bloat.
pub mod exports {
    pub use async_trait;
    #[cfg(feature = "log")]
    pub use log;
    pub use reqwest;
    pub use serde;
    pub use serde_json;
    pub use zeroize;
}

/// Re-export of `serde_json::json!` for convenience because this is used
/// frequently.
pub use exports::serde_json::json;
