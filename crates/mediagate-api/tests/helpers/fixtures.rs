//! Test fixtures: minimal PNG/JPEG/PDF/video/audio blobs.

/// Minimal valid 1x1 PNG bytes.
pub fn create_minimal_png() -> Vec<u8> {
    vec![
        0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44,
        0x52, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x02, 0x00, 0x00, 0x00, 0x90,
        0x77, 0x53, 0xDE, 0x00, 0x00, 0x00, 0x0C, 0x49, 0x44, 0x41, 0x54, 0x08, 0xD7, 0x63, 0xF8,
        0x00, 0x00, 0x00, 0x00, 0x01, 0x00, 0x01, 0x00, 0x18, 0xDD, 0x8D, 0x89, 0x00, 0x00, 0x00,
        0x00, 0x49, 0x45, 0x4E, 0x44, 0xAE, 0x42, 0x60, 0x82,
    ]
}

/// JPEG-looking payload of exactly `size` bytes (SOI marker, zero fill, EOI marker).
pub fn create_test_jpeg(size: usize) -> Vec<u8> {
    let mut jpeg = vec![0u8; size.max(4)];
    jpeg[..2].copy_from_slice(&[0xFF, 0xD8]);
    let len = jpeg.len();
    jpeg[len - 2..].copy_from_slice(&[0xFF, 0xD9]);
    jpeg
}

/// Minimal PDF.
pub fn create_test_pdf() -> Vec<u8> {
    b"%PDF-1.4
1 0 obj
<< /Type /Catalog /Pages 2 0 R >>
endobj
trailer
<< /Root 1 0 R >>
%%EOF"
        .to_vec()
}

/// Minimal MP4 (ftyp + mdat).
pub fn create_test_video() -> Vec<u8> {
    let mut mp4 = Vec::new();
    mp4.extend_from_slice(&[0x00, 0x00, 0x00, 0x20]);
    mp4.extend_from_slice(b"ftyp");
    mp4.extend_from_slice(b"isom");
    mp4.extend_from_slice(&[0x00, 0x00, 0x02, 0x00]);
    mp4.extend_from_slice(b"isomiso2mp41");
    mp4.extend_from_slice(&[0x00, 0x00, 0x00, 0x08]);
    mp4.extend_from_slice(b"mdat");
    mp4
}

/// Minimal MP3 (ID3v2 header + one frame sync).
pub fn create_test_audio() -> Vec<u8> {
    let mut mp3 = b"ID3".to_vec();
    mp3.extend_from_slice(&[0x03, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]);
    mp3.extend_from_slice(&[0xFF, 0xFB, 0x90, 0x64]);
    mp3
}

pub const TEST_BOUNDARY: &str = "mediagate-test-boundary";

/// Hand-built `multipart/form-data` body with one file part, for requests that need an
/// exact `Content-Length` or a malformed stream. `terminated = false` drops the closing
/// boundary.
pub fn raw_multipart_file(
    field: &str,
    filename: &str,
    mime: &str,
    data: &[u8],
    terminated: bool,
) -> Vec<u8> {
    let mut body = format!(
        "--{TEST_BOUNDARY}\r\n\
         Content-Disposition: form-data; name=\"{field}\"; filename=\"{filename}\"\r\n\
         Content-Type: {mime}\r\n\r\n"
    )
    .into_bytes();
    body.extend_from_slice(data);
    if terminated {
        body.extend_from_slice(format!("\r\n--{TEST_BOUNDARY}--\r\n").as_bytes());
    }
    body
}

pub fn multipart_content_type() -> String {
    format!("multipart/form-data; boundary={TEST_BOUNDARY}")
}
