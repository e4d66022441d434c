pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod protocol;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::{CliConfig, Command};
pub use crate::config::ClientConfig;

pub use crate::adapters::HttpTransport;
pub use crate::core::{
    edit_score::score, handle::TransportHandle, language_id::LanguageIdentifier,
    morphology::MorphologyAnalyzer, normalization::Normalizer, segmentation::SentenceSegmenter,
};
pub use crate::domain::model::{
    Analysis, DictionaryItem, EditScore, LanguageScore, Morpheme, NormalizationResult,
    SentenceAnalysis, WordAnalysis,
};
pub use crate::domain::ports::{ConfigProvider, Connection, Transport};
pub use crate::utils::error::{ClientError, Result};
