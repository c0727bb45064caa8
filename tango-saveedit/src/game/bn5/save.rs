use crate::save::{
    ChipEncoding, FolderCount, FolderLayout, Format, Layout, Marker, ModcardLayout, ModcardRebuild, NavicustLayout,
    Position, RegularChip, Variant,
};

static LAYOUT: Layout = Layout {
    folder: Some(FolderLayout {
        count: FolderCount::Fixed(3),
        chips: Position::Absolute(0x2df4),
        per_navi: None,
        encoding: ChipEncoding::Packed,
        equipped: Some(Position::Absolute(0x52d5)),
        regular: RegularChip::InPlace(Position::Absolute(0x52d6)),
        tags: None,
        packs: Some(Position::Absolute(0x2eac)),
    }),
    navicust: Some(NavicustLayout {
        parts: Position::Absolute(0x4d6c),
        count: 25,
        col: 0x2,
        row: 0x3,
        rot: 0x4,
        compressed: 0x5,
        tiles: Position::Absolute(0x4d48),
        width: 5,
        height: 5,
        command_line: 2,
        has_out_of_bounds: false,
    }),
    modcards: Some(ModcardLayout::Count56 {
        count: Position::Absolute(0x79a0),
        slots: Position::Absolute(0x79d0),
        rebuild: ModcardRebuild::Mirror {
            dst: Position::Absolute(0x60dc),
            src: Position::Absolute(0x1220),
            len: 0x200,
        },
    }),
    navi: None,
};

pub static BRBJ_00: Variant = Variant {
    rom_name: tango_gamedb::BRBJ_00.rom_name,
    checksum_seed: 0x72,
    add_first_byte: false,
    modcard_key: 0x43,
    layout: &LAYOUT,
};

pub static BRKJ_00: Variant = Variant {
    rom_name: tango_gamedb::BRKJ_00.rom_name,
    checksum_seed: 0x18,
    add_first_byte: false,
    modcard_key: 0x8d,
    layout: &LAYOUT,
};

pub static BRBE_00: Variant = Variant {
    rom_name: tango_gamedb::BRBE_00.rom_name,
    checksum_seed: 0x72,
    add_first_byte: false,
    modcard_key: 0x43,
    layout: &LAYOUT,
};

pub static BRKE_00: Variant = Variant {
    rom_name: tango_gamedb::BRKE_00.rom_name,
    checksum_seed: 0x18,
    add_first_byte: false,
    modcard_key: 0x8d,
    layout: &LAYOUT,
};

pub static FORMAT: Format = Format {
    name: "bn5",
    dump_start: 0x100,
    raw_size: 0x7c14,
    mask_offset: Some(0x1a34),
    shift_offset: None,
    marker_offset: 0x29e0,
    checksum_offset: 0x29dc,
    sum_start: 0,
    markers: &[
        Marker {
            name: b"REXE5TOB 20041104 JP",
            variants: &[&BRBJ_00],
        },
        Marker {
            name: b"REXE5TOK 20041104 JP",
            variants: &[&BRKJ_00],
        },
        Marker {
            name: b"REXE5TOB 20041006 US",
            variants: &[&BRBE_00],
        },
        Marker {
            name: b"REXE5TOK 20041006 US",
            variants: &[&BRKE_00],
        },
    ],
};
