//! Main module for rootword library functionality

pub mod config;
pub mod formats;
pub mod fragment;
pub mod lexicon;
pub mod pattern;
pub mod pipeline;
pub mod segmentation;
pub mod testing;
