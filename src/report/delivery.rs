use base64::{engine::general_purpose::STANDARD, Engine as _};
use thiserror::Error;

/// Download name offered to the browser
pub const FILENAME: &str = "Educated_Investor_Spec_Sheet.pdf";

/// Generic binary type so browsers download rather than preview
pub const CONTENT_TYPE: &str = "application/octet-stream";

#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("invalid base64 document: {0}")]
    Decode(#[from] base64::DecodeError),
}

/// Encode document bytes for a text channel (standard alphabet, padded)
pub fn encode(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

pub fn decode(encoded: &str) -> Result<Vec<u8>, DeliveryError> {
    Ok(STANDARD.decode(encoded.trim())?)
}

/// `data:` URI usable as the `href` of a download link
pub fn download_href(bytes: &[u8]) -> String {
    format!("data:{};base64,{}", CONTENT_TYPE, encode(bytes))
}

/// `Content-Disposition` header value for a direct download
pub fn content_disposition() -> String {
    format!("attachment; filename=\"{}\"", FILENAME)
}
