#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Region {
    US,
    JP,
}

#[derive(Debug, PartialEq, Eq)]
pub struct Game {
    pub rom_name: &'static [u8; 16],
    pub title: &'static str,
    pub family_and_variant: (&'static str, u8),
    pub rom_code_and_revision: (&'static [u8; 4], u8),
    pub crc32: u32,
    pub region: Region,
}

impl Game {
    /// Games with the same netplay compatibility tag can be matched against each other.
    pub fn netplay_compatibility(&self) -> &'static str {
        self.family_and_variant.0
    }

    pub fn rom_name_lossy(&self) -> String {
        String::from_utf8_lossy(self.rom_name).into_owned()
    }
}

// BN1
pub const AREJ_00: Game = Game {
    rom_name: b"ROCKMAN_EXE\0AREJ",
    title: "Rockman EXE",
    family_and_variant: ("exe1", 0),
    rom_code_and_revision: (b"AREJ", 0x00),
    crc32: 0xd9516e50,
    region: Region::JP,
};

pub const AREE_00: Game = Game {
    rom_name: b"MEGAMAN_BN\0\0AREE",
    title: "Mega Man Battle Network",
    family_and_variant: ("bn1", 0),
    rom_code_and_revision: (b"AREE", 0x00),
    crc32: 0x1d347971,
    region: Region::US,
};

// BN2
pub const AE2J_00_AC: Game = Game {
    rom_name: b"ROCKMAN_EXE2AE2J",
    title: "Rockman EXE 2",
    family_and_variant: ("exe2", 0),
    rom_code_and_revision: (b"AE2J", 0x00),
    crc32: 0x46eed8d,
    region: Region::JP,
};

pub const AE2E_00: Game = Game {
    rom_name: b"MEGAMAN_EXE2AE2E",
    title: "Mega Man Battle Network 2",
    family_and_variant: ("bn2", 0),
    rom_code_and_revision: (b"AE2E", 0x00),
    crc32: 0x6d961f82,
    region: Region::US,
};

// BN3
pub const A6BJ_01: Game = Game {
    rom_name: b"ROCKMAN_EXE3A6BJ",
    title: "Rockman EXE 3",
    family_and_variant: ("exe3", 0),
    rom_code_and_revision: (b"A6BJ", 0x01),
    crc32: 0xe48e6bc9,
    region: Region::JP,
};

pub const A3XJ_01: Game = Game {
    rom_name: b"ROCK_EXE3_BKA3XJ",
    title: "Rockman EXE 3 Black",
    family_and_variant: ("exe3", 1),
    rom_code_and_revision: (b"A3XJ", 0x01),
    crc32: 0xfd57493b,
    region: Region::JP,
};

pub const A6BE_00: Game = Game {
    rom_name: b"MEGA_EXE3_WHA6BE",
    title: "Mega Man Battle Network 3 White",
    family_and_variant: ("bn3", 0),
    rom_code_and_revision: (b"A6BE", 0x00),
    crc32: 0x0be4410a,
    region: Region::US,
};

pub const A3XE_00: Game = Game {
    rom_name: b"MEGA_EXE3_BLA3XE",
    title: "Mega Man Battle Network 3 Blue",
    family_and_variant: ("bn3", 1),
    rom_code_and_revision: (b"A3XE", 0x01),
    crc32: 0xc0c780f9,
    region: Region::US,
};

// BN4
pub const B4WJ_01: Game = Game {
    rom_name: b"ROCK_EXE4_RSB4WJ",
    title: "Rockman EXE 4 Tournament Red Sun",
    family_and_variant: ("exe4", 0),
    rom_code_and_revision: (b"B4WJ", 0x01),
    crc32: 0xcf0e8b05,
    region: Region::JP,
};

pub const B4BJ_00: Game = Game {
    rom_name: b"ROCK_EXE4_BMB4BJ",
    title: "Rockman EXE 4 Tournament Blue Moon",
    family_and_variant: ("exe4", 1),
    rom_code_and_revision: (b"B4BJ", 0x00),
    crc32: 0xed7c5b50,
    region: Region::JP,
};

pub const B4WE_00: Game = Game {
    rom_name: b"MEGAMANBN4RSB4WE",
    title: "Mega Man Battle Network 4 Red Sun",
    family_and_variant: ("bn4", 0),
    rom_code_and_revision: (b"B4WE", 0x00),
    crc32: 0x2120695c,
    region: Region::US,
};

pub const B4BE_00: Game = Game {
    rom_name: b"MEGAMANBN4BMB4BE",
    title: "Mega Man Battle Network 4 Blue Moon",
    family_and_variant: ("bn4", 1),
    rom_code_and_revision: (b"B4BE", 0x00),
    crc32: 0x758a46e9,
    region: Region::US,
};

// EXE4.5
pub const BR4J_00: Game = Game {
    rom_name: b"ROCKEXE4.5ROBR4J",
    title: "Rockman EXE 4.5 Real Operation",
    family_and_variant: ("exe45", 0),
    rom_code_and_revision: (b"BR4J", 0x00),
    crc32: 0xa646601b,
    region: Region::JP,
};

// BN5
pub const BRBJ_00: Game = Game {
    rom_name: b"ROCKEXE5_TOBBRBJ",
    title: "Rockman EXE 5 Team of Blues",
    family_and_variant: ("exe5", 0),
    rom_code_and_revision: (b"BRBJ", 0x00),
    crc32: 0xc73f23c0,
    region: Region::JP,
};

pub const BRKJ_00: Game = Game {
    rom_name: b"ROCKEXE5_TOCBRKJ",
    title: "Rockman EXE 5 Team of Colonel",
    family_and_variant: ("exe5", 1),
    rom_code_and_revision: (b"BRKJ", 0x00),
    crc32: 0x16842635,
    region: Region::JP,
};

pub const BRBE_00: Game = Game {
    rom_name: b"MEGAMAN5_TP_BRBE",
    title: "Mega Man Battle Network 5 Team Protoman",
    family_and_variant: ("bn5", 0),
    rom_code_and_revision: (b"BRBE", 0x00),
    crc32: 0xa73e83a4,
    region: Region::US,
};

pub const BRKE_00: Game = Game {
    rom_name: b"MEGAMAN5_TC_BRKE",
    title: "Mega Man Battle Network 5 Team Colonel",
    family_and_variant: ("bn5", 1),
    rom_code_and_revision: (b"BRKE", 0x00),
    crc32: 0xa552f683,
    region: Region::US,
};

// BN6
pub const BR5J_00: Game = Game {
    rom_name: b"ROCKEXE6_GXXBR5J",
    title: "Rockman EXE 6 Dennoujuu Gregar",
    family_and_variant: ("exe6", 0),
    rom_code_and_revision: (b"BR5J", 0x00),
    crc32: 0x6285918a,
    region: Region::JP,
};

pub const BR6J_00: Game = Game {
    rom_name: b"ROCKEXE6_RXXBR6J",
    title: "Rockman EXE 6 Dennoujuu Falzar",
    family_and_variant: ("exe6", 1),
    rom_code_and_revision: (b"BR6J", 0x00),
    crc32: 0x2dfb603e,
    region: Region::JP,
};

pub const BR5E_00: Game = Game {
    rom_name: b"MEGAMAN6_GXXBR5E",
    title: "Mega Man Battle Network 6 Cybeast Gregar",
    family_and_variant: ("bn6", 0),
    rom_code_and_revision: (b"BR5E", 0x00),
    crc32: 0x79452182,
    region: Region::US,
};

pub const BR6E_00: Game = Game {
    rom_name: b"MEGAMAN6_FXXBR6E",
    title: "Mega Man Battle Network 6 Cybeast Falzar",
    family_and_variant: ("bn6", 1),
    rom_code_and_revision: (b"BR6E", 0x00),
    crc32: 0xdee6f2a9,
    region: Region::US,
};

pub const GAMES: &[&Game] = &[
    &AREJ_00,
    &AREE_00,
    &AE2J_00_AC,
    &AE2E_00,
    &A6BJ_01,
    &A3XJ_01,
    &A6BE_00,
    &A3XE_00,
    &B4WJ_01,
    &B4BJ_00,
    &B4WE_00,
    &B4BE_00,
    &BR4J_00,
    &BRBJ_00,
    &BRKJ_00,
    &BRBE_00,
    &BRKE_00,
    &BR5J_00,
    &BR6J_00,
    &BR5E_00,
    &BR6E_00,
];

pub const ROM_NAME_OFFSET: usize = 0xa0;

#[derive(thiserror::Error, Debug)]
pub enum DetectError {
    #[error("rom too small: {0} bytes")]
    TooSmall(usize),
    #[error("unknown rom: {0:?}")]
    UnknownRom(String),
    #[error("crc32 mismatch for {name:?}: expected {expected:08x}, got {actual:08x}")]
    CrcMismatch { name: String, expected: u32, actual: u32 },
}

pub fn find_by_rom_name(rom_name: &[u8]) -> Option<&'static Game> {
    GAMES.iter().find(|game| &game.rom_name[..] == rom_name).copied()
}

pub fn find_by_family_and_variant(family: &str, variant: u8) -> Option<&'static Game> {
    GAMES
        .iter()
        .find(|game| game.family_and_variant == (family, variant))
        .copied()
}

/// Identifies a ROM by its embedded name, then confirms it is uncorrupted via its CRC32.
pub fn detect(rom: &[u8]) -> Result<&'static Game, DetectError> {
    let rom_name = rom
        .get(ROM_NAME_OFFSET..ROM_NAME_OFFSET + 16)
        .ok_or(DetectError::TooSmall(rom.len()))?;

    let game = find_by_rom_name(rom_name)
        .ok_or_else(|| DetectError::UnknownRom(String::from_utf8_lossy(rom_name).into_owned()))?;

    let crc32 = crc32fast::hash(rom);
    if crc32 != game.crc32 {
        return Err(DetectError::CrcMismatch {
            name: game.rom_name_lossy(),
            expected: game.crc32,
            actual: crc32,
        });
    }

    Ok(game)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fake_rom(name: &[u8; 16]) -> Vec<u8> {
        let mut rom = vec![0u8; 0x200];
        rom[ROM_NAME_OFFSET..ROM_NAME_OFFSET + 16].copy_from_slice(name);
        rom
    }

    #[test]
    fn test_rom_names_are_unique() {
        for (i, a) in GAMES.iter().enumerate() {
            for b in &GAMES[i + 1..] {
                assert_ne!(a.rom_name, b.rom_name);
                assert_ne!(a.family_and_variant, b.family_and_variant);
            }
        }
    }

    #[test]
    fn test_find_by_rom_name() {
        assert_eq!(find_by_rom_name(b"MEGAMAN6_FXXBR6E"), Some(&BR6E_00));
        assert_eq!(find_by_rom_name(b"MEGAMAN_BN\0\0AREE"), Some(&AREE_00));
        assert_eq!(find_by_rom_name(b"MEGAMAN6_FXXBR6P"), None);
    }

    #[test]
    fn test_detect_unknown() {
        assert!(matches!(
            detect(&fake_rom(b"NOT A REAL GAME!")),
            Err(DetectError::UnknownRom(_))
        ));
        assert!(matches!(detect(&[0u8; 4]), Err(DetectError::TooSmall(4))));
    }

    #[test]
    fn test_detect_crc_mismatch() {
        let rom = fake_rom(b"ROCKEXE6_GXXBR5J");
        match detect(&rom) {
            Err(DetectError::CrcMismatch { expected, actual, .. }) => {
                assert_eq!(expected, 0x6285918a);
                assert_eq!(actual, crc32fast::hash(&rom));
            }
            r => panic!("unexpected result: {:?}", r),
        }
    }

    #[test]
    fn test_netplay_compatibility() {
        assert_eq!(BR5J_00.netplay_compatibility(), "exe6");
        assert_eq!(BR4J_00.netplay_compatibility(), "exe45");
    }
}
