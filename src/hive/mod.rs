//! Minimal read-only parser for Windows registry hive files.
//!
//! Understands just enough of the regf format to walk keys and read
//! values: the 4096-byte base block, allocated cells, `nk` key nodes
//! with `lf`/`lh`/`li`/`ri` subkey lists, and `vk` value records with
//! inline or cell-backed data. The whole file is held in memory and
//! parsed on demand; nothing is ever written back.

mod key;
mod value;

pub use key::KeyNode;
pub use value::Value;

use std::path::Path;

use crate::error::{Result, RuntrailError};

/// Length of the base block at the start of every hive file.
const HEADER_LEN: usize = 4096;
/// Cell offsets are relative to the first hive bin, which follows the
/// base block.
const HBIN_BASE: usize = 4096;
/// Offset of the root key cell offset within the base block.
const ROOT_CELL_FIELD: usize = 36;
/// Marker stored where a cell offset field holds no offset.
pub(crate) const INVALID_OFFSET: u32 = 0xFFFF_FFFF;

/// An in-memory registry hive.
#[derive(Debug)]
pub struct Hive {
    data: Vec<u8>,
}

impl Hive {
    /// Read a hive file from disk.
    pub fn open(path: &Path) -> Result<Self> {
        let data = std::fs::read(path)?;
        Self::from_bytes(data)
    }

    /// Wrap an already-loaded hive image, validating its base block.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        if data.len() < HEADER_LEN {
            return Err(RuntrailError::InvalidHive {
                message: format!("file is {} bytes, smaller than the base block", data.len()),
            });
        }
        if &data[0..4] != b"regf" {
            return Err(RuntrailError::InvalidHive {
                message: "missing regf signature".to_string(),
            });
        }
        let major = u32_at(&data, 20);
        if major != 1 {
            return Err(RuntrailError::InvalidHive {
                message: format!("unsupported format major version {major}"),
            });
        }
        Ok(Self { data })
    }

    /// The raw hive image.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// The root key of the hive.
    pub fn root(&self) -> Result<KeyNode<'_>> {
        KeyNode::at(self, u32_at(&self.data, ROOT_CELL_FIELD))
    }

    /// Walk a backslash-separated key path from the root. Segment
    /// matching is case-insensitive, like the registry itself.
    pub fn open_key(&self, path: &str) -> Result<KeyNode<'_>> {
        let mut node = self.root()?;
        for segment in path.split('\\').filter(|s| !s.is_empty()) {
            node = node
                .subkey(segment)?
                .ok_or_else(|| RuntrailError::KeyNotFound {
                    path: path.to_string(),
                })?;
        }
        Ok(node)
    }

    /// Payload of the allocated cell at a hive-bin-relative offset.
    ///
    /// A cell starts with an `i32` size, negative while allocated; the
    /// payload is the remainder of the cell. Free cells and offsets
    /// outside the image are corruption from this parser's point of
    /// view.
    pub(crate) fn cell(&self, offset: u32) -> Result<&[u8]> {
        if offset == INVALID_OFFSET {
            return Err(RuntrailError::InvalidHive {
                message: "reference through an unset cell offset".to_string(),
            });
        }
        let start = HBIN_BASE + offset as usize;
        let Some(header) = self.data.get(start..start + 4) else {
            return Err(RuntrailError::InvalidHive {
                message: format!("cell offset {offset:#x} is outside the hive"),
            });
        };
        let size = i32::from_le_bytes([header[0], header[1], header[2], header[3]]);
        if size >= 0 {
            return Err(RuntrailError::InvalidHive {
                message: format!("cell at {offset:#x} is not allocated"),
            });
        }
        let cell_len = size.unsigned_abs() as usize;
        if cell_len < 4 {
            return Err(RuntrailError::InvalidHive {
                message: format!("cell at {offset:#x} is shorter than its own header"),
            });
        }
        let payload_len = cell_len - 4;
        self.data
            .get(start + 4..start + 4 + payload_len)
            .ok_or_else(|| RuntrailError::InvalidHive {
                message: format!("cell at {offset:#x} runs past the end of the hive"),
            })
    }
}

// Field readers for verified-length buffers. Callers check the
// enclosing length once; these never fail.

pub(crate) fn u16_at(data: &[u8], offset: usize) -> u16 {
    u16::from_le_bytes([data[offset], data[offset + 1]])
}

pub(crate) fn u32_at(data: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        data[offset],
        data[offset + 1],
        data[offset + 2],
        data[offset + 3],
    ])
}

pub(crate) fn i64_at(data: &[u8], offset: usize) -> i64 {
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&data[offset..offset + 8]);
    i64::from_le_bytes(bytes)
}

/// Decode a key or value name. Compressed names hold one byte per
/// character, interpreted as Latin-1; uncompressed names are UTF-16LE.
pub(crate) fn decode_name(bytes: &[u8], compressed: bool) -> String {
    if compressed {
        bytes.iter().map(|&b| b as char).collect()
    } else {
        let units: Vec<u16> = bytes
            .chunks_exact(2)
            .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
            .collect();
        String::from_utf16_lossy(&units)
    }
}
