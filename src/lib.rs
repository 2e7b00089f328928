pub mod api;
pub mod config;
pub mod data_models;
pub mod extractor;
pub mod fetcher;
pub mod url_utils;
