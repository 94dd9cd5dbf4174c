use std::io::Cursor;
use std::path::Path;
use std::sync::Arc;

use crate::foundation::error::{AvatarError, AvatarResult};

/// PNG bytes of one rendered avatar.
///
/// Immutable and cheap to clone; the same buffer is shared with the cache.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct EncodedAvatar {
    bytes: Arc<[u8]>,
}

impl EncodedAvatar {
    /// Borrow the PNG bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Copy the PNG bytes into a new vector.
    pub fn to_vec(&self) -> Vec<u8> {
        self.bytes.to_vec()
    }

    /// Decode into an RGBA8 image. Undecodable bytes are a [`AvatarError::RenderFailure`].
    pub fn to_image(&self) -> AvatarResult<image::RgbaImage> {
        let img = image::load_from_memory_with_format(&self.bytes, image::ImageFormat::Png)
            .map_err(|e| AvatarError::render_failure(format!("decode avatar png: {e}")))?;
        Ok(img.to_rgba8())
    }

    /// Readable, seekable stream over the PNG bytes.
    pub fn to_reader(&self) -> Cursor<EncodedAvatar> {
        Cursor::new(self.clone())
    }

    /// Write the PNG bytes to `path`, replacing any existing file.
    pub fn save_to(&self, path: impl AsRef<Path>) -> AvatarResult<()> {
        let path = path.as_ref();
        std::fs::write(path, &self.bytes).map_err(|e| AvatarError::io(path, e))
    }
}

impl From<Vec<u8>> for EncodedAvatar {
    fn from(bytes: Vec<u8>) -> Self {
        Self {
            bytes: bytes.into(),
        }
    }
}

impl AsRef<[u8]> for EncodedAvatar {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl std::ops::Deref for EncodedAvatar {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.bytes
    }
}

impl std::fmt::Debug for EncodedAvatar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EncodedAvatar")
            .field("len", &self.bytes.len())
            .finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/avatar/output.rs"]
mod tests;
