use crate::save::{
    ChipEncoding, FolderCount, FolderLayout, Format, Layout, Marker, ModcardLayout, ModcardRebuild, NaviLayout,
    NavicustLayout, Position, RegularChip, Variant,
};

// Folder state is kept per navi, in the stats block of whichever one is current.
const FOLDER: FolderLayout = FolderLayout {
    count: FolderCount::At(Position::Absolute(0x1c09)),
    chips: Position::Absolute(0x2178),
    per_navi: None,
    encoding: ChipEncoding::Packed,
    equipped: Some(Position::NaviStats(0x2d)),
    regular: RegularChip::InPlace(Position::NaviStats(0x2e)),
    tags: Some(Position::NaviStats(0x56)),
    packs: Some(Position::Absolute(0x2230)),
};

const fn navi(stats: usize) -> NaviLayout {
    NaviLayout {
        current: Position::Absolute(0x1b81),
        stats: Position::Absolute(stats),
        stats_stride: 0x64,
        regular_memory: 0x09,
        base_hp: 0x3e,
        current_hp: 0x40,
        max_hp: 0x42,
    }
}

const fn navicust(parts: usize, tiles: usize) -> NavicustLayout {
    NavicustLayout {
        parts: Position::Absolute(parts),
        count: 30,
        col: 0x3,
        row: 0x4,
        rot: 0x5,
        compressed: 0x6,
        tiles: Position::Absolute(tiles),
        width: 7,
        height: 7,
        command_line: 3,
        has_out_of_bounds: true,
    }
}

static JP_LAYOUT: Layout = Layout {
    folder: Some(FOLDER),
    navicust: Some(navicust(0x4150, 0x410c)),
    modcards: Some(ModcardLayout::Count56 {
        count: Position::Absolute(0x65f0),
        slots: Position::Absolute(0x6620),
        rebuild: ModcardRebuild::Loaded {
            loaded: Position::Absolute(0x5047),
            source: Position::Absolute(0x06bf),
            count: 118,
        },
    }),
    navi: Some(navi(0x478c)),
};

// Modcards were removed outside Japan.
static US_LAYOUT: Layout = Layout {
    folder: Some(FOLDER),
    navicust: Some(navicust(0x4190, 0x414c)),
    modcards: None,
    navi: Some(navi(0x47cc)),
};

pub static BR5J_00: Variant = Variant {
    rom_name: tango_gamedb::BR5J_00.rom_name,
    checksum_seed: 0x72,
    add_first_byte: false,
    modcard_key: 0x43,
    layout: &JP_LAYOUT,
};

pub static BR6J_00: Variant = Variant {
    rom_name: tango_gamedb::BR6J_00.rom_name,
    checksum_seed: 0x18,
    add_first_byte: false,
    modcard_key: 0x8d,
    layout: &JP_LAYOUT,
};

pub static BR5E_00: Variant = Variant {
    rom_name: tango_gamedb::BR5E_00.rom_name,
    checksum_seed: 0x72,
    add_first_byte: false,
    modcard_key: 0,
    layout: &US_LAYOUT,
};

pub static BR6E_00: Variant = Variant {
    rom_name: tango_gamedb::BR6E_00.rom_name,
    checksum_seed: 0x18,
    add_first_byte: false,
    modcard_key: 0,
    layout: &US_LAYOUT,
};

pub static BR5P_00: Variant = Variant {
    rom_name: b"MEGAMAN6_GXXBR5P",
    checksum_seed: 0x72,
    add_first_byte: false,
    modcard_key: 0,
    layout: &US_LAYOUT,
};

pub static BR6P_00: Variant = Variant {
    rom_name: b"MEGAMAN6_FXXBR6P",
    checksum_seed: 0x18,
    add_first_byte: false,
    modcard_key: 0,
    layout: &US_LAYOUT,
};

pub static FORMAT: Format = Format {
    name: "bn6",
    dump_start: 0x100,
    raw_size: 0x6710,
    mask_offset: Some(0x1064),
    shift_offset: None,
    marker_offset: 0x1c70,
    checksum_offset: 0x1c6c,
    sum_start: 0,
    markers: &[
        Marker {
            name: b"REXE6 F 20050924a JP",
            variants: &[&BR6J_00],
        },
        Marker {
            name: b"REXE6 G 20050924a JP",
            variants: &[&BR5J_00],
        },
        Marker {
            name: b"REXE6 F 20060110a US",
            variants: &[&BR6E_00],
        },
        Marker {
            name: b"REXE6 G 20060110a US",
            variants: &[&BR5E_00],
        },
        Marker {
            name: b"REXE6 F 20060110a PL",
            variants: &[&BR6P_00],
        },
        Marker {
            name: b"REXE6 G 20060110a PL",
            variants: &[&BR5P_00],
        },
    ],
};
