//! Theme persistence collaborator.
//!
//! The catalog hands the full ordered theme list to a `ThemeStorage` after
//! every mutation and asks it for a saved list on construction. The wire
//! format is bincode of `Vec<Theme>`.
//!
//! ## Stock Implementations
//!
//! - `MemoryStorage`: blobs in a shared in-process map (tests, embedding)
//! - `FileStorage`: one file per catalog key under a directory

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use rustc_hash::FxHashMap;

use super::theme::Theme;
use crate::core::StoreError;

/// Loads and saves an ordered list of themes under a key.
pub trait ThemeStorage: Send + std::fmt::Debug {
    /// Load the list saved under `key`, or `None` if nothing was saved.
    fn load(&self, key: &str) -> Result<Option<Vec<Theme>>, StoreError>;

    /// Replace the list saved under `key`.
    fn save(&mut self, key: &str, themes: &[Theme]) -> Result<(), StoreError>;
}

/// Encode a theme list in the storage wire format.
pub fn encode_themes(themes: &[Theme]) -> Result<Vec<u8>, StoreError> {
    bincode::serialize(themes).map_err(StoreError::Encode)
}

/// Decode a theme list from the storage wire format.
pub fn decode_themes(bytes: &[u8]) -> Result<Vec<Theme>, StoreError> {
    bincode::deserialize(bytes).map_err(StoreError::Decode)
}

/// In-process storage.
///
/// Clones share the same map, so two catalogs built from clones of one
/// `MemoryStorage` see each other's saves.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    blobs: Arc<Mutex<FxHashMap<String, Vec<u8>>>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store raw bytes under `key`, bypassing encoding.
    #[doc(hidden)]
    pub fn insert_raw(&self, key: impl Into<String>, bytes: Vec<u8>) {
        self.lock().insert(key.into(), bytes);
    }

    /// Check if anything is stored under `key`.
    #[doc(hidden)]
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.lock().contains_key(key)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, FxHashMap<String, Vec<u8>>> {
        // A panic while holding the lock cannot leave a half-written blob.
        self.blobs.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl ThemeStorage for MemoryStorage {
    fn load(&self, key: &str) -> Result<Option<Vec<Theme>>, StoreError> {
        self.lock()
            .get(key)
            .map(|bytes| decode_themes(bytes))
            .transpose()
    }

    fn save(&mut self, key: &str, themes: &[Theme]) -> Result<(), StoreError> {
        let bytes = encode_themes(themes)?;
        self.lock().insert(key.to_string(), bytes);
        Ok(())
    }
}

/// Storage backed by one bincode file per key.
#[derive(Clone, Debug)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Store files under `dir`. The directory is created on first save.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File path for a key.
    ///
    /// Bytes outside `[a-z0-9_-]` are written as `%XX`, so distinct keys
    /// never share a file, even on case-insensitive file systems.
    #[must_use]
    pub fn path_for(&self, key: &str) -> PathBuf {
        let mut file = String::with_capacity(key.len() + 4);
        for byte in key.bytes() {
            match byte {
                b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' => file.push(char::from(byte)),
                _ => {
                    let _ = write!(file, "%{byte:02X}");
                }
            }
        }
        file.push_str(".bin");
        self.dir.join(file)
    }
}

impl ThemeStorage for FileStorage {
    fn load(&self, key: &str) -> Result<Option<Vec<Theme>>, StoreError> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        let bytes = fs::read(&path)?;
        decode_themes(&bytes).map(Some)
    }

    fn save(&mut self, key: &str, themes: &[Theme]) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir)?;
        let bytes = encode_themes(themes)?;

        // Write then rename so a crash never leaves a truncated list.
        let path = self.path_for(key);
        let tmp = path.with_extension("bin.tmp");
        fs::write(&tmp, bytes)?;
        if let Err(e) = fs::rename(&tmp, &path) {
            let _ = fs::remove_file(&tmp);
            return Err(e.into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::themes::{RgbaColor, ThemeId};

    fn sample() -> Vec<Theme> {
        vec![
            Theme::new(ThemeId::new(1), "Letters", RgbaColor::RED, 3, "ABCDEF"),
            Theme::new(ThemeId::new(2), "Faces", RgbaColor::YELLOW, 2, "😀😃😄"),
        ]
    }

    #[test]
    fn test_memory_storage_missing_key() {
        let storage = MemoryStorage::new();
        assert!(storage.load("nothing").unwrap().is_none());
    }

    #[test]
    fn test_memory_storage_shared_between_clones() {
        let storage = MemoryStorage::new();
        let mut writer = storage.clone();

        writer.save("k", &sample()).unwrap();

        assert!(storage.contains("k"));
        assert_eq!(storage.load("k").unwrap(), Some(sample()));
    }

    #[test]
    fn test_memory_storage_corrupt_blob() {
        let storage = MemoryStorage::new();
        storage.insert_raw("k", vec![0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x01]);

        assert!(matches!(storage.load("k"), Err(StoreError::Decode(_))));
    }

    #[test]
    fn test_file_storage_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut storage = FileStorage::new(dir.path().join("themes"));

        assert!(storage.load("ThemeStore:Main").unwrap().is_none());

        storage.save("ThemeStore:Main", &sample()).unwrap();
        assert_eq!(storage.load("ThemeStore:Main").unwrap(), Some(sample()));
    }

    #[test]
    fn test_file_storage_escapes_key() {
        let storage = FileStorage::new("/tmp/x");
        let path = storage.path_for("ThemeStore:my themes");
        assert_eq!(path.file_name().unwrap(), "%54heme%53tore%3Amy%20themes.bin");
        assert_eq!(path.parent().unwrap(), Path::new("/tmp/x"));
    }

    #[test]
    fn test_file_storage_keys_never_collide() {
        let storage = FileStorage::new("/tmp/x");
        let keys = [
            "ThemeStore:My Themes",
            "ThemeStore:My_Themes",
            "ThemeStore:my_themes",
            "ThemeStore:🐶",
            "ThemeStore:🐱",
            "ThemeStore:_",
            "ThemeStore:%5F",
            "ThemeStore:../up",
        ];

        let files: Vec<String> = keys
            .iter()
            .map(|k| storage.path_for(k).file_name().unwrap().to_string_lossy().to_lowercase())
            .collect();
        for (i, a) in files.iter().enumerate() {
            assert!(!a.contains('/'));
            for b in &files[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_file_storage_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut storage = FileStorage::new(dir.path());
        storage.save("k", &sample()).unwrap();

        // Renaming onto a directory fails
        let target = storage.path_for("blocked");
        fs::create_dir_all(target.join("inner")).unwrap();
        assert!(matches!(storage.save("blocked", &sample()), Err(StoreError::Io(_))));

        let names: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert!(names.iter().all(|n| !n.ends_with(".tmp")));
        assert!(names.contains(&"k.bin".to_string()));
    }
}
