//! HTTP request handlers

pub mod documents;
pub mod query;
