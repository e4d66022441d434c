pub mod edit_score;
pub mod handle;
pub mod invoker;
pub mod language_id;
pub mod morphology;
pub mod normalization;
pub mod segmentation;

#[cfg(test)]
pub(crate) mod testing;

pub use crate::domain::model::{
    EditScore, LanguageScore, NormalizationResult, SentenceAnalysis, WordAnalysis,
};
pub use crate::domain::ports::{ConfigProvider, Connection, Transport};
pub use crate::utils::error::Result;
