//! Wire contracts of the remote NLP service.
//!
//! Messages follow the proto3 JSON mapping: lowerCamelCase field names, and
//! fields holding their default value may be absent from a response.

pub mod langid;
pub mod morphology;
pub mod normalization;
pub mod preprocessing;

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RpcMethod {
    pub service: &'static str,
    pub name: &'static str,
}

impl RpcMethod {
    pub const fn new(service: &'static str, name: &'static str) -> Self {
        Self { service, name }
    }

    /// HTTP 路徑，例如 `/zemberek.langid.LanguageIdService/GetScoresTr`
    pub fn path(&self) -> String {
        format!("/{}/{}", self.service, self.name)
    }
}

impl fmt::Display for RpcMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.service, self.name)
    }
}
