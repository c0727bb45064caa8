use crate::save;

#[derive(Debug)]
pub struct ScannedRom {
    pub path: std::path::PathBuf,
    pub game: &'static tango_gamedb::Game,
}

#[derive(Debug)]
pub struct ScannedSave {
    pub path: std::path::PathBuf,
    pub format: &'static save::Format,
    pub rom_names: Vec<&'static [u8; 16]>,
}

fn scan_files<T>(path: &std::path::Path, mut f: impl FnMut(&std::path::Path, Vec<u8>) -> Option<T>) -> Vec<T> {
    let mut found = vec![];

    for entry in walkdir::WalkDir::new(path).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                log::error!("failed to read entry: {:?}", e);
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let buf = match std::fs::read(path) {
            Ok(buf) => buf,
            Err(e) => {
                log::warn!("{}: {}", path.display(), e);
                continue;
            }
        };

        if let Some(v) = f(path, buf) {
            found.push(v);
        }
    }

    found
}

/// Finds every uncorrupted ROM of a known game under `path`, sorted by path.
pub fn scan_roms(path: &std::path::Path) -> Vec<ScannedRom> {
    let mut roms = scan_files(path, |path, rom| match tango_gamedb::detect(&rom) {
        Ok(game) => {
            log::info!("roms folder: {}: {:?}", path.display(), game.family_and_variant);
            Some(ScannedRom {
                path: path.to_path_buf(),
                game,
            })
        }
        Err(e) => {
            log::warn!("roms folder: {}: {}", path.display(), e);
            None
        }
    });
    roms.sort_by(|a, b| a.path.cmp(&b.path));
    roms
}

/// Finds every SRAM dump under `path` that some known format accepts, sorted by path.
pub fn scan_saves(path: &std::path::Path) -> Vec<ScannedSave> {
    let mut saves = scan_files(path, |path, buf| match save::sniff(&buf) {
        Ok(sniffed) => {
            log::info!(
                "{}: {} ({})",
                path.display(),
                sniffed.format.name,
                sniffed
                    .rom_names
                    .iter()
                    .map(|name| String::from_utf8_lossy(&name[..]).into_owned())
                    .collect::<Vec<_>>()
                    .join(", ")
            );
            Some(ScannedSave {
                path: path.to_path_buf(),
                format: sniffed.format,
                rom_names: sniffed.rom_names,
            })
        }
        Err(crate::Error::SniffFailed(errors)) => {
            log::warn!(
                "{}:\n{}",
                path.display(),
                errors
                    .iter()
                    .map(|(name, e)| format!("{}: {}", name, e))
                    .collect::<Vec<_>>()
                    .join("\n")
            );
            None
        }
        Err(e) => {
            log::warn!("{}: {}", path.display(), e);
            None
        }
    });
    saves.sort_by(|a, b| a.path.cmp(&b.path));
    saves
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bn6_dump() -> Vec<u8> {
        let format = &crate::game::bn6::save::FORMAT;
        let mut raw = vec![0u8; format.raw_size];
        raw[format.marker_offset..format.marker_offset + 20].copy_from_slice(b"REXE6 F 20060110a US");
        let checksum = format
            .compute_checksum(&raw, 0, &crate::game::bn6::save::BR6E_00)
            .unwrap();
        raw[format.checksum_offset..format.checksum_offset + 4].copy_from_slice(&checksum.to_le_bytes());
        format.raw_to_dump(&raw).unwrap()
    }

    #[test]
    fn test_scan_saves() {
        let _ = env_logger::builder().is_test(true).try_init();
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("nested")).unwrap();
        std::fs::write(dir.path().join("nested").join("b.sav"), bn6_dump()).unwrap();
        std::fs::write(dir.path().join("a.sav"), bn6_dump()).unwrap();
        std::fs::write(dir.path().join("garbage.sav"), vec![0xffu8; 0x10000]).unwrap();
        std::fs::write(dir.path().join("short.sav"), b"nope").unwrap();

        let saves = scan_saves(dir.path());
        assert_eq!(
            saves.iter().map(|s| s.path.clone()).collect::<Vec<_>>(),
            vec![dir.path().join("a.sav"), dir.path().join("nested").join("b.sav")]
        );
        for save in &saves {
            assert_eq!(save.format.name, "bn6");
            assert_eq!(save.rom_names, vec![tango_gamedb::BR6E_00.rom_name]);
        }
    }

    #[test]
    fn test_scan_roms_skips_unknown_and_corrupt() {
        let _ = env_logger::builder().is_test(true).try_init();
        let dir = tempfile::tempdir().unwrap();
        let mut rom = vec![0u8; 0x200];
        rom[tango_gamedb::ROM_NAME_OFFSET..tango_gamedb::ROM_NAME_OFFSET + 16]
            .copy_from_slice(tango_gamedb::BR6E_00.rom_name);
        std::fs::write(dir.path().join("corrupt.gba"), &rom).unwrap();
        std::fs::write(dir.path().join("tiny.gba"), b"gba").unwrap();

        assert!(scan_roms(dir.path()).is_empty());
    }

    #[test]
    fn test_scan_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        assert!(scan_roms(&dir.path().join("missing")).is_empty());
        assert!(scan_saves(&dir.path().join("missing")).is_empty());
    }
}
