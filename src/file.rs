// src/file.rs

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::config::consts::OUTPUT_EXT;
use crate::core::sanitize::file_stem;
use crate::error::{Result, ShotMapError};

/// `{player_with_underscores}_{season}.png`
pub fn output_file_name(player: &str, season: &str) -> String {
    format!("{}_{}.{}", file_stem(player), season.trim(), OUTPUT_EXT)
}

/// Write fully-encoded bytes, creating parent directories as needed.
/// Overwrites whatever is there.
pub fn write_output(path: &Path, bytes: &[u8]) -> Result<PathBuf> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    fs::write(path, bytes)?;
    Ok(path.to_path_buf())
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(ShotMapError::Io(std::io::Error::other(format!(
            "Path exists but is not a directory: {}",
            dir.display()
        ))));
    }
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tmp_dir(name: &str) -> PathBuf {
        let mut p = std::env::temp_dir();
        p.push(format!("shot_map_file_{}", name));
        let _ = fs::remove_dir_all(&p);
        p
    }

    #[test]
    fn file_name_replaces_spaces() {
        assert_eq!(output_file_name("Erling Haaland", "2022"), "Erling_Haaland_2022.png");
        assert_eq!(output_file_name("Mohamed  Salah", " 2017 "), "Mohamed_Salah_2017.png");
    }

    #[test]
    fn write_creates_parents_and_overwrites() {
        let dir = tmp_dir("overwrite");
        let path = dir.join("nested").join("x.png");
        write_output(&path, b"first").unwrap();
        write_output(&path, b"second").unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"second");
    }

    #[test]
    fn a_file_in_the_way_of_the_directory_is_an_error() {
        let dir = tmp_dir("blocked");
        fs::create_dir_all(&dir).unwrap();
        let blocker = dir.join("blocker");
        fs::write(&blocker, b"").unwrap();
        assert!(write_output(&blocker.join("x.png"), b"png").is_err());
    }
}
