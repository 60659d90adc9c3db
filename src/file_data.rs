use anyhow::Result;

/// Size of the buffer owned by every [`FileData`].
pub const MAX_LENGTH: usize = 10;

/// Fixed-size heap buffer. Cloning copies the bytes into a fresh allocation,
/// and the buffer is freed when the owner is dropped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileData {
    text: Box<[u8; MAX_LENGTH]>,
}

impl Default for FileData {
    fn default() -> Self {
        Self { text: Box::new([0; MAX_LENGTH]) }
    }
}

impl FileData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Zero-padded copy of `bytes`; longer input is rejected.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() > MAX_LENGTH {
            anyhow::bail!(
                "{} bytes do not fit in a {}-byte buffer",
                bytes.len(),
                MAX_LENGTH
            );
        }
        let mut data = Self::default();
        data.text[..bytes.len()].copy_from_slice(bytes);
        Ok(data)
    }

    pub fn as_bytes(&self) -> &[u8; MAX_LENGTH] {
        &self.text
    }

    pub fn as_bytes_mut(&mut self) -> &mut [u8; MAX_LENGTH] {
        &mut self.text
    }
}
