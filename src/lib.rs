#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod config;
pub mod fragments;
pub mod generator;
pub mod models;
#[cfg(not(target_arch = "wasm32"))]
pub mod output;

pub use config::{FragmentConfig, MergePolicy, TagOptions};
pub use generator::FragmentGenerator;
pub use models::{AssetKind, FragmentArtifacts, FragmentFile, TagFragment};
