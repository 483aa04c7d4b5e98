//! Key nodes and subkey list traversal.

use tracing::warn;

use crate::error::{Result, RuntrailError};
use crate::hive::{decode_name, u16_at, u32_at, Hive, Value, INVALID_OFFSET};

/// Fixed portion of an `nk` cell, up to the start of the name.
const KEY_HEADER_LEN: usize = 76;
/// Key flag: the name is stored compressed (one byte per character).
const KEY_NAME_COMPRESSED: u16 = 0x0020;
/// Subkey lists may nest through `ri` indirection; real hives stay
/// shallow, so anything deeper is treated as a structural loop.
const MAX_LIST_DEPTH: usize = 8;

/// A key in a registry hive.
pub struct KeyNode<'h> {
    hive: &'h Hive,
    name: String,
    subkey_count: u32,
    subkey_list: u32,
    value_count: u32,
    value_list: u32,
}

impl<'h> KeyNode<'h> {
    /// Parse the `nk` cell at the given offset.
    pub(crate) fn at(hive: &'h Hive, offset: u32) -> Result<Self> {
        let payload = hive.cell(offset)?;
        if payload.len() < KEY_HEADER_LEN {
            return Err(RuntrailError::InvalidHive {
                message: format!("key cell at {offset:#x} is truncated"),
            });
        }
        if &payload[0..2] != b"nk" {
            return Err(RuntrailError::InvalidHive {
                message: format!("expected a key cell at {offset:#x}"),
            });
        }
        let flags = u16_at(payload, 2);
        let name_len = u16_at(payload, 72) as usize;
        let name_bytes = payload
            .get(KEY_HEADER_LEN..KEY_HEADER_LEN + name_len)
            .ok_or_else(|| RuntrailError::InvalidHive {
                message: format!("key name at {offset:#x} exceeds its cell"),
            })?;
        Ok(Self {
            hive,
            name: decode_name(name_bytes, flags & KEY_NAME_COMPRESSED != 0),
            subkey_count: u32_at(payload, 20),
            subkey_list: u32_at(payload, 28),
            value_count: u32_at(payload, 36),
            value_list: u32_at(payload, 40),
        })
    }

    /// The key's own name, without any path.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All direct subkeys, in list order.
    pub fn subkeys(&self) -> Result<Vec<KeyNode<'h>>> {
        if self.subkey_count == 0 || self.subkey_list == INVALID_OFFSET {
            return Ok(Vec::new());
        }
        let mut offsets = Vec::with_capacity(self.subkey_count as usize);
        collect_subkey_offsets(self.hive, self.subkey_list, 0, &mut offsets)?;
        offsets
            .into_iter()
            .map(|offset| KeyNode::at(self.hive, offset))
            .collect()
    }

    /// The direct subkey with the given name, matched case-insensitively.
    pub fn subkey(&self, name: &str) -> Result<Option<KeyNode<'h>>> {
        Ok(self
            .subkeys()?
            .into_iter()
            .find(|key| key.name.eq_ignore_ascii_case(name)))
    }

    /// All values of this key.
    ///
    /// A value cell that cannot be read is logged and skipped rather
    /// than failing the whole key; an unreadable value list still fails.
    pub fn values(&self) -> Result<Vec<Value>> {
        if self.value_count == 0 || self.value_list == INVALID_OFFSET {
            return Ok(Vec::new());
        }
        let list = self.hive.cell(self.value_list)?;
        let count = self.value_count as usize;
        if list.len() < count * 4 {
            return Err(RuntrailError::InvalidHive {
                message: format!("value list of '{}' is truncated", self.name),
            });
        }
        let mut values = Vec::with_capacity(count);
        for index in 0..count {
            let offset = u32_at(list, index * 4);
            match Value::at(self.hive, offset) {
                Ok(value) => values.push(value),
                Err(err) => warn!("skipping unreadable value in '{}': {}", self.name, err),
            }
        }
        Ok(values)
    }
}

/// Flatten a subkey list into key cell offsets. `lf` and `lh` lists
/// pair each offset with a four-byte hint, `li` holds bare offsets, and
/// `ri` points at further lists.
fn collect_subkey_offsets(
    hive: &Hive,
    list_offset: u32,
    depth: usize,
    out: &mut Vec<u32>,
) -> Result<()> {
    if depth > MAX_LIST_DEPTH {
        return Err(RuntrailError::InvalidHive {
            message: "subkey lists nest too deeply".to_string(),
        });
    }
    let payload = hive.cell(list_offset)?;
    if payload.len() < 4 {
        return Err(RuntrailError::InvalidHive {
            message: format!("subkey list at {list_offset:#x} is truncated"),
        });
    }
    let count = u16_at(payload, 2) as usize;
    match &payload[0..2] {
        b"lf" | b"lh" => {
            if payload.len() < 4 + count * 8 {
                return Err(RuntrailError::InvalidHive {
                    message: format!("subkey list at {list_offset:#x} is truncated"),
                });
            }
            for index in 0..count {
                out.push(u32_at(payload, 4 + index * 8));
            }
        }
        b"li" => {
            if payload.len() < 4 + count * 4 {
                return Err(RuntrailError::InvalidHive {
                    message: format!("subkey list at {list_offset:#x} is truncated"),
                });
            }
            for index in 0..count {
                out.push(u32_at(payload, 4 + index * 4));
            }
        }
        b"ri" => {
            if payload.len() < 4 + count * 4 {
                return Err(RuntrailError::InvalidHive {
                    message: format!("subkey list at {list_offset:#x} is truncated"),
                });
            }
            for index in 0..count {
                collect_subkey_offsets(hive, u32_at(payload, 4 + index * 4), depth + 1, out)?;
            }
        }
        other => {
            return Err(RuntrailError::InvalidHive {
                message: format!(
                    "unrecognized subkey list signature {:02x}{:02x} at {list_offset:#x}",
                    other[0], other[1]
                ),
            });
        }
    }
    Ok(())
}
