use crate::save::{
    ChipEncoding, FolderCount, FolderLayout, Format, Layout, Marker, ModcardLayout, NavicustLayout, Position,
    RegularChip, Variant,
};

static LAYOUT: Layout = Layout {
    folder: Some(FolderLayout {
        count: FolderCount::Fixed(3),
        chips: Position::Shifted(0x262c),
        per_navi: None,
        encoding: ChipEncoding::Packed,
        equipped: Some(Position::Shifted(0x2132)),
        regular: RegularChip::FirstOnly(Position::Shifted(0x214d)),
        tags: None,
        packs: Some(Position::Shifted(0x26e4)),
    }),
    navicust: Some(NavicustLayout {
        parts: Position::Shifted(0x4564),
        count: 25,
        col: 0x2,
        row: 0x3,
        rot: 0x4,
        compressed: 0x5,
        tiles: Position::Shifted(0x4540),
        width: 5,
        height: 5,
        command_line: 2,
        has_out_of_bounds: false,
    }),
    modcards: Some(ModcardLayout::Slots4 {
        slots: Position::Shifted(0x464c),
        count: 133,
    }),
    navi: None,
};

pub static B4WJ_01: Variant = Variant {
    rom_name: tango_gamedb::B4WJ_01.rom_name,
    checksum_seed: 0x16,
    add_first_byte: false,
    modcard_key: 0,
    layout: &LAYOUT,
};

pub static B4BJ_00: Variant = Variant {
    rom_name: tango_gamedb::B4BJ_00.rom_name,
    checksum_seed: 0x22,
    add_first_byte: false,
    modcard_key: 0,
    layout: &LAYOUT,
};

pub static B4WE_00: Variant = Variant {
    rom_name: tango_gamedb::B4WE_00.rom_name,
    checksum_seed: 0x16,
    add_first_byte: true,
    modcard_key: 0,
    layout: &LAYOUT,
};

pub static B4BE_00: Variant = Variant {
    rom_name: tango_gamedb::B4BE_00.rom_name,
    checksum_seed: 0x22,
    add_first_byte: true,
    modcard_key: 0,
    layout: &LAYOUT,
};

// The checksum leaves out the first byte, which US cartridges add back in. When it is zero a save matches both
// regions.
pub static FORMAT: Format = Format {
    name: "bn4",
    dump_start: 0,
    raw_size: 0x73d2,
    mask_offset: Some(0x1554),
    shift_offset: Some(0x1550),
    marker_offset: 0x2208,
    checksum_offset: 0x21e8,
    sum_start: 1,
    markers: &[Marker {
        name: b"ROCKMANEXE4 20031022",
        variants: &[&B4WJ_01, &B4BJ_00, &B4WE_00, &B4BE_00],
    }],
};
