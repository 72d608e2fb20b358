//! Response body decoding for the encodings advertised in `Accept-Encoding`

use std::io::Read;

use bytes::Bytes;
use flate2::read::{DeflateDecoder, GzDecoder, ZlibDecoder};
use http::HeaderMap;
use http::header::{CONTENT_ENCODING, CONTENT_LENGTH};

use crate::error::{self, Result};

/// Decoded bodies larger than this are refused (64MB).
const READ_LIMIT: u64 = 64 * 1024 * 1024;

/// Content codings this client can undo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentEncoding {
    Gzip,
    Deflate,
    Identity,
}

impl ContentEncoding {
    /// Reads the `Content-Encoding` header. Unknown codings yield `None`.
    #[must_use]
    pub fn from_headers(headers: &HeaderMap) -> Option<Self> {
        let Some(value) = headers.get(CONTENT_ENCODING) else {
            return Some(ContentEncoding::Identity);
        };
        match value.to_str().ok()?.trim().to_ascii_lowercase().as_str() {
            "gzip" | "x-gzip" => Some(ContentEncoding::Gzip),
            "deflate" => Some(ContentEncoding::Deflate),
            "identity" | "" => Some(ContentEncoding::Identity),
            _ => None,
        }
    }
}

/// Undoes the response's content coding in place.
///
/// On success the `Content-Encoding` and `Content-Length` headers are removed
/// since they no longer describe the body. Unknown codings are passed through
/// untouched.
///
/// # Errors
///
/// Returns a decode error if the body is corrupt or exceeds the size limit.
pub fn decode_body(headers: &mut HeaderMap, body: Bytes) -> Result<Bytes> {
    // 204, 304 and most redirects carry the header with nothing to decode.
    if body.is_empty() {
        return Ok(body);
    }

    let decoded = match ContentEncoding::from_headers(headers) {
        Some(ContentEncoding::Identity) => return Ok(body),
        None => {
            tracing::debug!(
                "leaving body with unsupported content encoding {:?} as-is",
                headers.get(CONTENT_ENCODING)
            );
            return Ok(body);
        }
        Some(ContentEncoding::Gzip) => read_limited(GzDecoder::new(&body[..]))?,
        // "deflate" is zlib-wrapped per RFC 9110, but raw deflate is common in the wild.
        Some(ContentEncoding::Deflate) => match read_limited(ZlibDecoder::new(&body[..])) {
            Ok(decoded) => decoded,
            Err(_) => read_limited(DeflateDecoder::new(&body[..]))?,
        },
    };

    headers.remove(CONTENT_ENCODING);
    headers.remove(CONTENT_LENGTH);
    Ok(Bytes::from(decoded))
}

fn read_limited<R: Read>(decoder: R) -> Result<Vec<u8>> {
    let mut output = Vec::new();
    decoder
        .take(READ_LIMIT + 1)
        .read_to_end(&mut output)
        .map_err(error::decode)?;
    if output.len() as u64 > READ_LIMIT {
        return Err(error::decode("decompressed body exceeds safety limit"));
    }
    Ok(output)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use flate2::Compression;
    use flate2::write::{GzEncoder, ZlibEncoder};
    use http::HeaderValue;

    use super::*;

    fn headers_with(encoding: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_ENCODING, HeaderValue::from_static(encoding));
        headers.insert(CONTENT_LENGTH, HeaderValue::from_static("10"));
        headers
    }

    #[test]
    fn decodes_gzip_and_strips_headers() {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(b"success").unwrap();
        let body = Bytes::from(encoder.finish().unwrap());

        let mut headers = headers_with("gzip");
        let decoded = decode_body(&mut headers, body).unwrap();
        assert_eq!(&decoded[..], b"success");
        assert!(headers.get(CONTENT_ENCODING).is_none());
        assert!(headers.get(CONTENT_LENGTH).is_none());
    }

    #[test]
    fn decodes_zlib_deflate() {
        let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(b"members").unwrap();
        let body = Bytes::from(encoder.finish().unwrap());

        let mut headers = headers_with("deflate");
        assert_eq!(&decode_body(&mut headers, body).unwrap()[..], b"members");
    }

    #[test]
    fn identity_and_unknown_pass_through() {
        let mut headers = HeaderMap::new();
        let body = Bytes::from_static(b"plain");
        assert_eq!(decode_body(&mut headers, body.clone()).unwrap(), body);

        let mut headers = headers_with("br");
        assert_eq!(decode_body(&mut headers, body.clone()).unwrap(), body);
        assert!(headers.get(CONTENT_ENCODING).is_some());
    }

    #[test]
    fn empty_encoded_body_passes_through() {
        for encoding in ["gzip", "deflate"] {
            let mut headers = headers_with(encoding);
            let decoded = decode_body(&mut headers, Bytes::new()).unwrap();
            assert!(decoded.is_empty());
            assert_eq!(headers[CONTENT_ENCODING], encoding);
        }
    }

    #[test]
    fn corrupt_gzip_is_a_decode_error() {
        let mut headers = headers_with("gzip");
        let err = decode_body(&mut headers, Bytes::from_static(b"not gzip")).unwrap_err();
        assert!(err.is_decode());
    }
}
