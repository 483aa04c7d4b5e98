//! Value records and their data.

use crate::error::{Result, RuntrailError};
use crate::hive::{decode_name, u16_at, u32_at, Hive};

/// Fixed portion of a `vk` cell, up to the start of the name.
const VALUE_HEADER_LEN: usize = 20;
/// Value flag: the name is stored compressed (one byte per character).
const VALUE_NAME_COMPRESSED: u16 = 0x0001;
/// Data size bit marking data stored inline in the offset field.
const DATA_IN_OFFSET: u32 = 0x8000_0000;

/// A value of a registry key.
#[derive(Debug, Clone, PartialEq)]
pub struct Value {
    /// Value name; a key's default value has an empty name.
    pub name: String,
    /// Registry type code as stored (3 is REG_BINARY).
    pub data_type: u32,
    /// Raw data bytes.
    pub data: Vec<u8>,
}

impl Value {
    /// Parse the `vk` cell at the given offset.
    pub(crate) fn at(hive: &Hive, offset: u32) -> Result<Self> {
        let payload = hive.cell(offset)?;
        if payload.len() < VALUE_HEADER_LEN {
            return Err(RuntrailError::InvalidHive {
                message: format!("value cell at {offset:#x} is truncated"),
            });
        }
        if &payload[0..2] != b"vk" {
            return Err(RuntrailError::InvalidHive {
                message: format!("expected a value cell at {offset:#x}"),
            });
        }
        let name_len = u16_at(payload, 2) as usize;
        let raw_size = u32_at(payload, 4);
        let data_offset = u32_at(payload, 8);
        let data_type = u32_at(payload, 12);
        let flags = u16_at(payload, 16);
        let name = if name_len == 0 {
            String::new()
        } else {
            let bytes = payload
                .get(VALUE_HEADER_LEN..VALUE_HEADER_LEN + name_len)
                .ok_or_else(|| RuntrailError::InvalidHive {
                    message: format!("value name at {offset:#x} exceeds its cell"),
                })?;
            decode_name(bytes, flags & VALUE_NAME_COMPRESSED != 0)
        };
        let data = read_data(hive, raw_size, data_offset, offset)?;
        Ok(Self {
            name,
            data_type,
            data,
        })
    }
}

/// Fetch value data, inline from the offset field or from its own cell.
/// Data cells are padded to cell alignment, so the declared length may
/// be shorter than the cell payload but never longer.
fn read_data(hive: &Hive, raw_size: u32, data_offset: u32, value_offset: u32) -> Result<Vec<u8>> {
    if raw_size & DATA_IN_OFFSET != 0 {
        let len = (raw_size & !DATA_IN_OFFSET) as usize;
        if len > 4 {
            return Err(RuntrailError::InvalidHive {
                message: format!("inline data of value at {value_offset:#x} claims {len} bytes"),
            });
        }
        return Ok(data_offset.to_le_bytes()[..len].to_vec());
    }
    let len = raw_size as usize;
    if len == 0 {
        return Ok(Vec::new());
    }
    let cell = hive.cell(data_offset)?;
    let bytes = cell.get(..len).ok_or_else(|| RuntrailError::InvalidHive {
        message: format!("data of value at {value_offset:#x} exceeds its cell"),
    })?;
    Ok(bytes.to_vec())
}
