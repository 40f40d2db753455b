use api::model::EncodedImage;
use base64::{engine::general_purpose::STANDARD, Engine as _};

const PNG_MAGIC: &[u8] = &[0x89, b'P', b'N', b'G'];
const JPEG_MAGIC: &[u8] = &[0xFF, 0xD8, 0xFF];

/// `data:` URL for an encoded image blob. The MIME type is sniffed from the
/// leading bytes; PNG is assumed when the prefix is not recognised.
pub fn image_data_url(image: &EncodedImage) -> String {
    let data = image.as_str().trim();
    if data.starts_with("data:") {
        return data.to_string();
    }
    format!("data:{};base64,{data}", sniff_mime(data))
}

fn sniff_mime(encoded: &str) -> &'static str {
    // 12 base64 chars decode to 9 bytes, enough for either signature.
    let prefix: String = encoded.chars().take(12).collect();
    match STANDARD.decode(prefix.as_bytes()) {
        Ok(bytes) if bytes.starts_with(JPEG_MAGIC) => "image/jpeg",
        Ok(bytes) if bytes.starts_with(PNG_MAGIC) => "image/png",
        _ => "image/png",
    }
}
