//! Shared fixtures: synthetic regf hive images built byte by byte.
// Shared between test binaries; not every binary uses every helper.
#![allow(dead_code)]

use runtrail::userassist::{rot13, USERASSIST_KEY};

/// Declarative description of a registry key for [`build_hive`].
pub struct KeySpec {
    name: String,
    values: Vec<(String, Vec<u8>)>,
    children: Vec<KeySpec>,
}

impl KeySpec {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            values: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn value(mut self, name: &str, data: Vec<u8>) -> Self {
        self.values.push((name.to_string(), data));
        self
    }

    pub fn child(mut self, child: KeySpec) -> Self {
        self.children.push(child);
        self
    }
}

/// Serialize a key tree into a minimal but well-formed hive image:
/// 4096-byte base block, one hive bin, cells with negative allocated
/// sizes, `nk`/`vk`/`lf` records and ASCII names.
pub fn build_hive(root: KeySpec) -> Vec<u8> {
    let mut writer = CellWriter::new();
    let root_offset = writer.write_key(&root);
    writer.finish(root_offset)
}

/// Hive with the given names and payloads stored (ROT13-encoded, as on
/// a real system) under `UserAssist\{provider}\Count`.
pub fn userassist_hive(provider_guid: &str, values: &[(&str, Vec<u8>)]) -> Vec<u8> {
    let mut count = KeySpec::new("Count");
    for (name, data) in values {
        count = count.value(&rot13(name), data.clone());
    }
    let mut node = KeySpec::new(provider_guid).child(count);
    for segment in USERASSIST_KEY.rsplit('\\') {
        node = KeySpec::new(segment).child(node);
    }
    build_hive(KeySpec::new("ROOT").child(node))
}

/// A 16-byte count record payload.
pub fn legacy_record(session_id: i32, used_count: i32, filetime: i64) -> Vec<u8> {
    let mut data = Vec::with_capacity(16);
    data.extend_from_slice(&session_id.to_le_bytes());
    data.extend_from_slice(&used_count.to_le_bytes());
    data.extend_from_slice(&filetime.to_le_bytes());
    data
}

/// A 72-byte count record payload with zeroed padding.
pub fn modern_record(
    session_id: i32,
    used_count: i32,
    focus_count: i32,
    focus_time_ms: i32,
    filetime: i64,
) -> Vec<u8> {
    let mut data = Vec::with_capacity(72);
    data.extend_from_slice(&session_id.to_le_bytes());
    data.extend_from_slice(&used_count.to_le_bytes());
    data.extend_from_slice(&focus_count.to_le_bytes());
    data.extend_from_slice(&focus_time_ms.to_le_bytes());
    data.resize(60, 0);
    data.extend_from_slice(&filetime.to_le_bytes());
    data.resize(72, 0);
    data
}

const HBIN_HEADER_LEN: usize = 32;
const UNSET: u32 = 0xFFFF_FFFF;

/// Accumulates cells for a single hive bin. Cell offsets are relative
/// to the start of the bin, which begins with a 32-byte `hbin` header.
struct CellWriter {
    cells: Vec<u8>,
}

impl CellWriter {
    fn new() -> Self {
        Self {
            cells: vec![0u8; HBIN_HEADER_LEN],
        }
    }

    /// Append an allocated cell, 8-byte aligned, returning its offset.
    fn push_cell(&mut self, payload: &[u8]) -> u32 {
        let offset = self.cells.len() as u32;
        let total = 4 + payload.len();
        let padded = (total + 7) & !7;
        self.cells
            .extend_from_slice(&(-(padded as i32)).to_le_bytes());
        self.cells.extend_from_slice(payload);
        self.cells.resize(offset as usize + padded, 0);
        offset
    }

    /// Write a key, its values, and its subtree. Returns the `nk` cell
    /// offset, so parents are always written after their children.
    fn write_key(&mut self, spec: &KeySpec) -> u32 {
        let child_offsets: Vec<(u32, &str)> = spec
            .children
            .iter()
            .map(|child| (self.write_key(child), child.name.as_str()))
            .collect();

        let subkey_list = if child_offsets.is_empty() {
            UNSET
        } else {
            let mut list = Vec::new();
            list.extend_from_slice(b"lf");
            list.extend_from_slice(&(child_offsets.len() as u16).to_le_bytes());
            for (offset, name) in &child_offsets {
                list.extend_from_slice(&offset.to_le_bytes());
                let mut hint = [0u8; 4];
                for (i, b) in name.bytes().take(4).enumerate() {
                    hint[i] = b;
                }
                list.extend_from_slice(&hint);
            }
            self.push_cell(&list)
        };

        let value_list = if spec.values.is_empty() {
            UNSET
        } else {
            let offsets: Vec<u32> = spec
                .values
                .iter()
                .map(|(name, data)| self.write_value(name, data))
                .collect();
            let mut list = Vec::new();
            for offset in offsets {
                list.extend_from_slice(&offset.to_le_bytes());
            }
            self.push_cell(&list)
        };

        let mut nk = Vec::new();
        nk.extend_from_slice(b"nk");
        nk.extend_from_slice(&0x0020u16.to_le_bytes()); // compressed name
        nk.resize(20, 0);
        nk.extend_from_slice(&(spec.children.len() as u32).to_le_bytes());
        nk.extend_from_slice(&0u32.to_le_bytes()); // volatile subkey count
        nk.extend_from_slice(&subkey_list.to_le_bytes());
        nk.extend_from_slice(&UNSET.to_le_bytes()); // volatile subkey list
        nk.extend_from_slice(&(spec.values.len() as u32).to_le_bytes());
        nk.extend_from_slice(&value_list.to_le_bytes());
        nk.extend_from_slice(&UNSET.to_le_bytes()); // security
        nk.extend_from_slice(&UNSET.to_le_bytes()); // class name
        nk.resize(72, 0);
        nk.extend_from_slice(&(spec.name.len() as u16).to_le_bytes());
        nk.extend_from_slice(&0u16.to_le_bytes()); // class name length
        nk.extend_from_slice(spec.name.as_bytes());
        self.push_cell(&nk)
    }

    /// Write a `vk` cell, with data inline when it fits the offset field.
    fn write_value(&mut self, name: &str, data: &[u8]) -> u32 {
        let (raw_size, data_offset) = if data.len() <= 4 {
            let mut inline = [0u8; 4];
            inline[..data.len()].copy_from_slice(data);
            (
                data.len() as u32 | 0x8000_0000,
                u32::from_le_bytes(inline),
            )
        } else {
            (data.len() as u32, self.push_cell(data))
        };

        let mut vk = Vec::new();
        vk.extend_from_slice(b"vk");
        vk.extend_from_slice(&(name.len() as u16).to_le_bytes());
        vk.extend_from_slice(&raw_size.to_le_bytes());
        vk.extend_from_slice(&data_offset.to_le_bytes());
        vk.extend_from_slice(&3u32.to_le_bytes()); // REG_BINARY
        vk.extend_from_slice(&0x0001u16.to_le_bytes()); // compressed name
        vk.extend_from_slice(&0u16.to_le_bytes()); // spare
        vk.extend_from_slice(name.as_bytes());
        self.push_cell(&vk)
    }

    /// Prepend the base block and `hbin` header around the cells.
    fn finish(mut self, root_offset: u32) -> Vec<u8> {
        let bin_len = self.cells.len() as u32;
        self.cells[0..4].copy_from_slice(b"hbin");
        self.cells[4..8].copy_from_slice(&0u32.to_le_bytes());
        self.cells[8..12].copy_from_slice(&bin_len.to_le_bytes());

        let mut image = vec![0u8; 4096];
        image[0..4].copy_from_slice(b"regf");
        image[4..8].copy_from_slice(&1u32.to_le_bytes()); // primary sequence
        image[8..12].copy_from_slice(&1u32.to_le_bytes()); // secondary sequence
        image[16..20].copy_from_slice(&5u32.to_le_bytes()); // minor version
        image[20..24].copy_from_slice(&1u32.to_le_bytes()); // major version
        image[36..40].copy_from_slice(&root_offset.to_le_bytes());
        image[40..44].copy_from_slice(&bin_len.to_le_bytes());
        image.extend_from_slice(&self.cells);
        image
    }
}
