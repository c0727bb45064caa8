//! Per-generation tables: save layouts, ROM offsets and text parsers.
pub mod bn1;
pub mod bn2;
pub mod bn3;
pub mod bn4;
pub mod bn5;
pub mod bn6;
pub mod exe45;

use crate::{rom, save};

/// Every known save format, in the order sniffing tries them.
pub static FORMATS: &[&save::Format] = &[
    &bn1::save::FORMAT,
    &bn2::save::FORMAT,
    &bn3::save::FORMAT,
    &bn4::save::FORMAT,
    &exe45::save::FORMAT,
    &bn5::save::FORMAT,
    &bn6::save::FORMAT,
];

pub fn find_format(name: &str) -> Option<&'static save::Format> {
    FORMATS.iter().find(|format| format.name == name).copied()
}

static ROM_TABLES: &[(&[u8; 16], &rom::RomTable)] = &[
    (tango_gamedb::AREJ_00.rom_name, &bn1::rom::AREJ_00),
    (tango_gamedb::AREE_00.rom_name, &bn1::rom::AREE_00),
    (tango_gamedb::AE2J_00_AC.rom_name, &bn2::rom::AE2J_00_AC),
    (tango_gamedb::AE2E_00.rom_name, &bn2::rom::AE2E_00),
    (tango_gamedb::A6BJ_01.rom_name, &bn3::rom::A6BJ_01),
    (tango_gamedb::A3XJ_01.rom_name, &bn3::rom::A3XJ_01),
    (tango_gamedb::A6BE_00.rom_name, &bn3::rom::A6BE_00),
    (tango_gamedb::A3XE_00.rom_name, &bn3::rom::A3XE_00),
    (tango_gamedb::B4WJ_01.rom_name, &bn4::rom::B4WJ_01),
    (tango_gamedb::B4BJ_00.rom_name, &bn4::rom::B4BJ_00),
    (tango_gamedb::B4WE_00.rom_name, &bn4::rom::B4WE_00),
    (tango_gamedb::B4BE_00.rom_name, &bn4::rom::B4BE_00),
    (tango_gamedb::BR4J_00.rom_name, &exe45::rom::BR4J_00),
    (tango_gamedb::BRBJ_00.rom_name, &bn5::rom::BRBJ_00),
    (tango_gamedb::BRKJ_00.rom_name, &bn5::rom::BRKJ_00),
    (tango_gamedb::BRBE_00.rom_name, &bn5::rom::BRBE_00),
    (tango_gamedb::BRKE_00.rom_name, &bn5::rom::BRKE_00),
    (tango_gamedb::BR5J_00.rom_name, &bn6::rom::BR5J_00),
    (tango_gamedb::BR6J_00.rom_name, &bn6::rom::BR6J_00),
    (tango_gamedb::BR5E_00.rom_name, &bn6::rom::BR5E_00),
    (tango_gamedb::BR6E_00.rom_name, &bn6::rom::BR6E_00),
];

/// The decoding table for a ROM, looked up by its embedded name.
pub fn rom_table(rom_name: &[u8]) -> Option<&'static rom::RomTable> {
    ROM_TABLES
        .iter()
        .find(|(name, _)| &name[..] == rom_name)
        .map(|(_, table)| *table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_known_rom_has_a_table() {
        for game in tango_gamedb::GAMES {
            assert!(rom_table(game.rom_name).is_some(), "{}", game.rom_name_lossy());
        }
        assert!(rom_table(b"MEGAMAN6_FXXBR6P").is_none());
    }

    #[test]
    fn test_every_known_rom_has_a_save_variant() {
        for game in tango_gamedb::GAMES {
            let (format, variant) = save::find_variant(game.rom_name).unwrap();
            assert_eq!(variant.rom_name, game.rom_name);
            assert_eq!(format.name, game.family_and_variant.0.replace("exe", "bn").replace("bn45", "exe45"));
        }
    }

    #[test]
    fn test_formats_fit_their_fields() {
        for format in FORMATS {
            let max_shift = if format.shift_offset.is_some() { 0x1fc } else { 0 };
            assert!(format.marker_offset + max_shift + 20 <= format.raw_size, "{}", format.name);
            assert!(format.checksum_offset + max_shift + 4 <= format.raw_size, "{}", format.name);
            assert!(format.dump_start + format.raw_size <= save::DUMP_SIZE, "{}", format.name);
            if let Some(mask_offset) = format.mask_offset {
                assert!(mask_offset + 4 <= format.raw_size, "{}", format.name);
            }
        }
    }

    #[test]
    fn test_find_format() {
        assert_eq!(find_format("bn6").unwrap().raw_size, 0x6710);
        assert!(find_format("bn7").is_none());
    }
}
