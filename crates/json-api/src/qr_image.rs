//! QR image rendering.
//!
//! The rasterizer is an external collaborator; this module is the one seam
//! between the API and the `qrcode` crate, producing the inline image the
//! generator UI shows and prints.

use base64::{Engine as _, engine::general_purpose::STANDARD};
use qrcode::{EcLevel, QrCode, render::svg, types::QrError};

/// Render a wire string as an SVG QR code wrapped in a data URL.
///
/// Error-correction level M matches what the scanning apps are calibrated
/// against.
///
/// # Errors
///
/// Returns an error when the payload cannot fit into a QR code; wire
/// strings are bounded at 76 ASCII characters, far below that limit.
pub(crate) fn render_svg_data_url(qr_data: &str) -> Result<String, QrError> {
    let code = QrCode::with_error_correction_level(qr_data.as_bytes(), EcLevel::M)?;

    let image = code
        .render::<svg::Color<'_>>()
        .min_dimensions(512, 512)
        .build();

    Ok(format!(
        "data:image/svg+xml;base64,{}",
        STANDARD.encode(image)
    ))
}
