use crate::save::{ChipEncoding, FolderCount, FolderLayout, Format, Layout, Marker, Position, RegularChip, Variant};

static LAYOUT: Layout = Layout {
    folder: Some(FolderLayout {
        count: FolderCount::Fixed(3),
        chips: Position::Absolute(0x0ab0),
        per_navi: None,
        encoding: ChipEncoding::Wide,
        equipped: Some(Position::Absolute(0x0dc2)),
        regular: RegularChip::InPlace(Position::Absolute(0x0ddd)),
        tags: None,
        packs: None,
    }),
    navicust: None,
    modcards: None,
    navi: None,
};

pub static AE2J_00_AC: Variant = Variant {
    rom_name: tango_gamedb::AE2J_00_AC.rom_name,
    checksum_seed: 0x16,
    add_first_byte: false,
    modcard_key: 0,
    layout: &LAYOUT,
};

pub static AE2E_00: Variant = Variant {
    rom_name: tango_gamedb::AE2E_00.rom_name,
    checksum_seed: 0x16,
    add_first_byte: false,
    modcard_key: 0,
    layout: &LAYOUT,
};

// Both regions write the same marker and checksum, so a save always matches both.
pub static FORMAT: Format = Format {
    name: "bn2",
    dump_start: 0,
    raw_size: 0x3a78,
    mask_offset: None,
    shift_offset: None,
    marker_offset: 0x1198,
    checksum_offset: 0x114c,
    sum_start: 0,
    markers: &[Marker {
        name: b"ROCKMANEXE2 20011016",
        variants: &[&AE2J_00_AC, &AE2E_00],
    }],
};
