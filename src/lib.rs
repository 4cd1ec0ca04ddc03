//! Template-driven entity extraction for encyclopedia media articles.
//!
//! An [`article::ArticleRecord`] is parsed into a [`document::Document`] by an
//! external [`document::MarkupParser`], then turned into a flat list of
//! [`entities::Entity`] records (media, seasons, episodes) by a
//! [`extractor::Strategy`].

pub mod article;
pub mod batch;
pub mod config;
pub mod document;
pub mod entities;
pub mod extractor;
pub mod handlers;

pub use extractor::{ExtractError, Extraction, MediaStrategy, Strategy};
