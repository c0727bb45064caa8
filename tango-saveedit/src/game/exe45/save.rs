use crate::save::{ChipEncoding, FolderCount, FolderLayout, Format, Layout, Marker, Position, RegularChip, Variant};

// One folder per link navi, selected by the current navi.
static LAYOUT: Layout = Layout {
    folder: Some(FolderLayout {
        count: FolderCount::Fixed(1),
        chips: Position::Absolute(0x7500),
        per_navi: Some(Position::Absolute(0x4ad1)),
        encoding: ChipEncoding::Packed,
        equipped: None,
        regular: RegularChip::None,
        tags: None,
        packs: Some(Position::Absolute(0x52c8)),
    }),
    navicust: None,
    modcards: None,
    navi: None,
};

pub static BR4J_00: Variant = Variant {
    rom_name: tango_gamedb::BR4J_00.rom_name,
    checksum_seed: 0x38,
    add_first_byte: false,
    modcard_key: 0,
    layout: &LAYOUT,
};

pub static FORMAT: Format = Format {
    name: "exe45",
    dump_start: 0,
    raw_size: 0xc7a8,
    mask_offset: Some(0x3c84),
    shift_offset: None,
    marker_offset: 0x4ba8,
    checksum_offset: 0x4b88,
    sum_start: 0,
    markers: &[
        Marker {
            name: b"ROCKMANEXE4RO 040607",
            variants: &[&BR4J_00],
        },
        Marker {
            name: b"ROCKMANEXE4RO 041217",
            variants: &[&BR4J_00],
        },
    ],
};
