//! Wire model for the analysis service.
//!
//! Every facet of [`AnalysisResult`] is optional: the service may omit a
//! section or send `null`, and the record still decodes. Display code treats
//! an absent facet as "render nothing".

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::AnalysisError;

pub const PDF_MIME: &str = "application/pdf";

/// A selected certificate file, validated as a PDF and ready to upload once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisRequest {
    filename: String,
    mime: String,
    bytes: Vec<u8>,
}

impl AnalysisRequest {
    /// Builds a request from an explicit MIME type. Anything other than
    /// `application/pdf` is rejected before it can reach the network.
    pub fn new(
        filename: impl Into<String>,
        mime: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Result<Self, AnalysisError> {
        let filename = filename.into();
        let mime = mime.into();
        if !mime.trim().eq_ignore_ascii_case(PDF_MIME) {
            return Err(AnalysisError::InvalidInput { filename, mime });
        }
        Ok(Self {
            filename,
            mime: PDF_MIME.to_string(),
            bytes,
        })
    }

    /// Builds a request, deriving the MIME type from the filename extension.
    pub fn from_file(filename: impl Into<String>, bytes: Vec<u8>) -> Result<Self, AnalysisError> {
        let filename = filename.into();
        let mime = mime_for_filename(&filename);
        Self::new(filename, mime, bytes)
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn mime(&self) -> &str {
        &self.mime
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn into_parts(self) -> (String, String, Vec<u8>) {
        (self.filename, self.mime, self.bytes)
    }
}

/// Extension-based MIME lookup, mirroring what browsers report as `File.type`.
pub fn mime_for_filename(filename: &str) -> &'static str {
    let ext = filename
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "pdf" => PDF_MIME,
        "txt" => "text/plain",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "json" => "application/json",
        "html" | "htm" => "text/html",
        _ => "application/octet-stream",
    }
}

/// Base64-encoded image as delivered by the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EncodedImage(pub String);

impl EncodedImage {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AnalysisResult {
    #[serde(default)]
    pub certificate_preview: Option<EncodedImage>,
    #[serde(default)]
    pub ocr: Option<OcrData>,
    #[serde(default)]
    pub metadata: Option<MetadataData>,
    #[serde(default)]
    pub qr: Option<QrData>,
    #[serde(default)]
    pub logo_detection: Option<LogoDetection>,
    #[serde(default)]
    pub tamper_report: Option<TamperReport>,
    #[serde(default)]
    pub trust_evaluation: Option<TrustEvaluation>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct OcrData {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub course: Option<String>,
    #[serde(default)]
    pub issuer: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub certificate_id: Option<String>,
    #[serde(default)]
    pub raw_text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct MetadataData {
    #[serde(default)]
    pub created_date: Option<String>,
    #[serde(default)]
    pub modified_date: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub software: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub flags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct QrData {
    #[serde(default, deserialize_with = "null_as_default")]
    pub found: bool,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub validation: QrValidation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum QrValidation {
    Valid,
    Invalid,
    Unverifiable,
    #[default]
    #[serde(other)]
    Unknown,
}

impl QrValidation {
    pub fn as_str(self) -> &'static str {
        match self {
            QrValidation::Valid => "valid",
            QrValidation::Invalid => "invalid",
            QrValidation::Unverifiable => "unverifiable",
            QrValidation::Unknown => "unknown",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct LogoDetection {
    #[serde(default, deserialize_with = "null_as_default")]
    pub matches: Vec<LogoMatch>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub flag: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogoMatch {
    pub name: String,
    /// Match confidence in `[0, 1]`.
    pub confidence: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct TamperReport {
    /// Manipulation likelihood in `[0, 1]`.
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default)]
    pub heatmap: Option<EncodedImage>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct TrustEvaluation {
    /// Integer confidence in `[0, 100]`.
    #[serde(default)]
    pub trust_score: Option<u32>,
    #[serde(default)]
    pub verdict: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub reasons: Vec<String>,
}

/// Response of the secondary hash endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashDigest {
    pub sha256: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_length: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_used: Option<String>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
