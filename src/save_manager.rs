//! Checksummed save slots on disk.
//!
//! File format per slot:
//! - Magic tag (8 bytes)
//! - Payload length (4 bytes)
//! - Bincode-encoded [`SaveData`] (variable)
//! - SHA256 checksum over the three fields above (32 bytes)

use crate::core::constants::SAVE_FILE_MAGIC;
use crate::snapshot::SaveData;
use directories::ProjectDirs;
use sha2::{Digest, Sha256};
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

/// A loadable slot, as shown on a load menu.
#[derive(Debug, Clone, PartialEq)]
pub struct SlotInfo {
    pub slot: u32,
    pub saved_at: i64,
    /// Champion name, if the save holds an active run.
    pub champion: Option<String>,
    pub wave: u32,
}

pub struct SaveManager {
    save_dir: PathBuf,
}

impl SaveManager {
    /// Open the platform save directory, creating it if needed.
    pub fn new() -> io::Result<Self> {
        let project_dirs = ProjectDirs::from("com", "arena", "arena").ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, "could not determine config directory")
        })?;
        Self::with_dir(project_dirs.config_dir().to_path_buf())
    }

    /// Open an explicit directory instead of the platform default.
    pub fn with_dir(save_dir: PathBuf) -> io::Result<Self> {
        fs::create_dir_all(&save_dir)?;
        Ok(Self { save_dir })
    }

    fn slot_path(&self, slot: u32) -> PathBuf {
        self.save_dir.join(format!("slot{slot}.save"))
    }

    pub fn slot_exists(&self, slot: u32) -> bool {
        self.slot_path(slot).exists()
    }

    /// Write a snapshot into a slot.
    pub fn save(&self, slot: u32, data: &SaveData) -> io::Result<()> {
        let payload =
            bincode::serialize(data).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        let payload_len = payload.len() as u32;

        let mut hasher = Sha256::new();
        hasher.update(SAVE_FILE_MAGIC.to_le_bytes());
        hasher.update(payload_len.to_le_bytes());
        hasher.update(&payload);
        let checksum = hasher.finalize();

        let mut file = fs::File::create(self.slot_path(slot))?;
        file.write_all(&SAVE_FILE_MAGIC.to_le_bytes())?;
        file.write_all(&payload_len.to_le_bytes())?;
        file.write_all(&payload)?;
        file.write_all(&checksum)?;
        Ok(())
    }

    /// Read a slot back. Fails with [`io::ErrorKind::InvalidData`] on a
    /// bad magic tag, a checksum mismatch, or undecodable payload; the
    /// caller decides whether that means starting over.
    pub fn load(&self, slot: u32) -> io::Result<SaveData> {
        let mut file = fs::File::open(self.slot_path(slot))?;

        let mut magic_bytes = [0u8; 8];
        file.read_exact(&mut magic_bytes)?;
        let magic = u64::from_le_bytes(magic_bytes);
        if magic != SAVE_FILE_MAGIC {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!(
                    "bad save tag: expected 0x{SAVE_FILE_MAGIC:016X}, got 0x{magic:016X}"
                ),
            ));
        }

        let mut length_bytes = [0u8; 4];
        file.read_exact(&mut length_bytes)?;
        let payload_len = u32::from_le_bytes(length_bytes);

        let mut payload = vec![0u8; payload_len as usize];
        file.read_exact(&mut payload)?;

        let mut stored_checksum = [0u8; 32];
        file.read_exact(&mut stored_checksum)?;

        let mut hasher = Sha256::new();
        hasher.update(magic_bytes);
        hasher.update(length_bytes);
        hasher.update(&payload);
        let computed = hasher.finalize();
        if stored_checksum != computed.as_slice() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "save checksum mismatch",
            ));
        }

        bincode::deserialize(&payload).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    /// Remove a slot.
    pub fn delete(&self, slot: u32) -> io::Result<()> {
        fs::remove_file(self.slot_path(slot))
    }

    /// Survey the save directory. Slots that fail to load are skipped
    /// rather than sinking the whole listing, so one corrupt file never
    /// hides the healthy saves next to it.
    pub fn list_slots(&self) -> Vec<SlotInfo> {
        let entries = match fs::read_dir(&self.save_dir) {
            Ok(entries) => entries,
            Err(_) => return Vec::new(),
        };

        let mut slots = Vec::new();
        for entry in entries.flatten() {
            let name = entry.file_name();
            let Some(slot) = parse_slot_name(&name.to_string_lossy()) else {
                continue;
            };
            let Ok(data) = self.load(slot) else {
                continue;
            };
            slots.push(SlotInfo {
                slot,
                saved_at: data.saved_at,
                champion: data.player.map(|p| p.name),
                wave: data.wave,
            });
        }
        slots.sort_by_key(|info| info.slot);
        slots
    }
}

fn parse_slot_name(name: &str) -> Option<u32> {
    name.strip_prefix("slot")?.strip_suffix(".save")?.parse().ok()
}
