use crate::github::GitHubClient;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tracing::debug;

/// In-memory avatar cache keyed by absolute image URL.
///
/// `fetch_image` is best-effort and never surfaces an error: a missing
/// avatar is not operation-fatal, so every failure resolves to `None` and
/// the caller falls back to its placeholder. Entries live for the life of
/// the cache; nothing evicts them.
///
/// Concurrent fetches of the same uncached URL are not coalesced. Both
/// in-flight downloads can complete and both insert; the writes are
/// independent key/value inserts, so the race is benign (last one wins).
pub struct ImageCache {
    client: GitHubClient,
    images: Mutex<HashMap<String, Arc<Vec<u8>>>>,
}

impl ImageCache {
    pub fn new(client: GitHubClient) -> Self {
        ImageCache {
            client,
            images: Mutex::new(HashMap::new()),
        }
    }

    /// Return the image at `url`, downloading and caching it on first use.
    ///
    /// A hit answers from memory with zero I/O. On a miss, any transport
    /// error, non-200 status, or payload that is not a recognizable image
    /// resolves to `None` without populating the cache.
    pub async fn fetch_image(&self, url: &str) -> Option<Arc<Vec<u8>>> {
        if url::Url::parse(url).is_err() {
            return None;
        }

        if let Some(image) = self.lookup(url) {
            debug!(url, "image cache hit");
            return Some(image);
        }

        let bytes = self.client.fetch_bytes(url).await.ok()?;
        if !is_image(&bytes) {
            debug!(url, "downloaded payload is not an image");
            return None;
        }

        let image = Arc::new(bytes);
        self.images
            .lock()
            .expect("image cache lock poisoned")
            .insert(url.to_string(), Arc::clone(&image));
        debug!(url, "image cached");
        Some(image)
    }

    /// Number of cached entries.
    pub fn len(&self) -> usize {
        self.images.lock().expect("image cache lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lookup(&self, url: &str) -> Option<Arc<Vec<u8>>> {
        self.images
            .lock()
            .expect("image cache lock poisoned")
            .get(url)
            .map(Arc::clone)
    }
}

/// Magic-number sniff for the formats GitHub serves avatars in. Stands in
/// for a full decoder: a payload that passes is handed to the caller as-is.
fn is_image(bytes: &[u8]) -> bool {
    const PNG: &[u8] = &[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];
    const JPEG: &[u8] = &[0xff, 0xd8, 0xff];
    const GIF87: &[u8] = b"GIF87a";
    const GIF89: &[u8] = b"GIF89a";
    const BMP: &[u8] = b"BM";

    bytes.starts_with(PNG)
        || bytes.starts_with(JPEG)
        || bytes.starts_with(GIF87)
        || bytes.starts_with(GIF89)
        || bytes.starts_with(BMP)
        || (bytes.len() >= 12 && &bytes[0..4] == b"RIFF" && &bytes[8..12] == b"WEBP")
}

#[cfg(test)]
mod tests {
    use super::is_image;

    #[test]
    fn sniffs_common_formats() {
        assert!(is_image(&[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a, 0x00]));
        assert!(is_image(&[0xff, 0xd8, 0xff, 0xe0]));
        assert!(is_image(b"GIF89a......"));
        assert!(is_image(b"RIFF\x00\x00\x00\x00WEBPVP8 "));
    }

    #[test]
    fn rejects_non_image_payloads() {
        assert!(!is_image(b""));
        assert!(!is_image(b"<!DOCTYPE html>"));
        assert!(!is_image(b"{\"message\":\"Not Found\"}"));
    }
}
