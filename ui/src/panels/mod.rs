//! One display panel per facet of the analysis record.
//!
//! Every panel takes a single optional slice and renders nothing when it is
//! absent. The `*_view` builders hold the presentation logic so it can be
//! checked without a renderer.

mod heatmap;
mod image;
mod logo;
mod metadata;
mod ocr;
mod preview;
mod qr;
mod trust;
mod verdict;

pub use heatmap::{heatmap_view, HeatmapPanel, HeatmapView};
pub use image::image_data_url;
pub use logo::{logo_view, LogoPanel, LogoRow, LogoView};
pub use metadata::{metadata_view, FlagView, MetadataPanel, MetadataView};
pub use ocr::{ocr_view, OcrPanel, OcrView};
pub use preview::{preview_source, CertificatePreview};
pub use qr::{qr_view, QrDetails, QrPanel, QrView};
pub use trust::{trust_view, TrustScorePanel, TrustView};
pub use verdict::{verdict_view, VerdictPanel, VerdictView};
