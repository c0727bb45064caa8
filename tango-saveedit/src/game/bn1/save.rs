use crate::save::{ChipEncoding, FolderCount, FolderLayout, Format, Layout, Marker, Position, RegularChip, Variant};

static LAYOUT: Layout = Layout {
    folder: Some(FolderLayout {
        count: FolderCount::Fixed(1),
        chips: Position::Absolute(0x01c0),
        per_navi: None,
        encoding: ChipEncoding::Bytes,
        equipped: None,
        regular: RegularChip::None,
        tags: None,
        packs: None,
    }),
    navicust: None,
    modcards: None,
    navi: None,
};

pub static AREJ_00: Variant = Variant {
    rom_name: tango_gamedb::AREJ_00.rom_name,
    checksum_seed: 0x16,
    add_first_byte: false,
    modcard_key: 0,
    layout: &LAYOUT,
};

pub static AREE_00: Variant = Variant {
    rom_name: tango_gamedb::AREE_00.rom_name,
    checksum_seed: 0x16,
    add_first_byte: false,
    modcard_key: 0,
    layout: &LAYOUT,
};

pub static FORMAT: Format = Format {
    name: "bn1",
    dump_start: 0,
    raw_size: 0x2308,
    mask_offset: None,
    shift_offset: None,
    marker_offset: 0x03fc,
    checksum_offset: 0x03f0,
    sum_start: 0,
    markers: &[
        Marker {
            name: b"ROCKMAN EXE 20010120",
            variants: &[&AREJ_00],
        },
        Marker {
            name: b"ROCKMAN EXE 20010727",
            variants: &[&AREE_00],
        },
    ],
};
