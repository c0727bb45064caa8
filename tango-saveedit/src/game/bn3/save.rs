use crate::save::{Format, Layout, Marker, Variant};

// Folder, navicust and modcard offsets are not known for this generation.
static LAYOUT: Layout = Layout {
    folder: None,
    navicust: None,
    modcards: None,
    navi: None,
};

pub static A6BJ_01: Variant = Variant {
    rom_name: tango_gamedb::A6BJ_01.rom_name,
    checksum_seed: 0x16,
    add_first_byte: false,
    modcard_key: 0,
    layout: &LAYOUT,
};

pub static A6BE_00: Variant = Variant {
    rom_name: tango_gamedb::A6BE_00.rom_name,
    checksum_seed: 0x16,
    add_first_byte: false,
    modcard_key: 0,
    layout: &LAYOUT,
};

pub static A3XJ_01: Variant = Variant {
    rom_name: tango_gamedb::A3XJ_01.rom_name,
    checksum_seed: 0x22,
    add_first_byte: false,
    modcard_key: 0,
    layout: &LAYOUT,
};

pub static A3XE_00: Variant = Variant {
    rom_name: tango_gamedb::A3XE_00.rom_name,
    checksum_seed: 0x22,
    add_first_byte: false,
    modcard_key: 0,
    layout: &LAYOUT,
};

pub static FORMAT: Format = Format {
    name: "bn3",
    dump_start: 0,
    raw_size: 0x57b0,
    mask_offset: None,
    shift_offset: None,
    marker_offset: 0x1e00,
    checksum_offset: 0x1dd8,
    sum_start: 0,
    markers: &[
        Marker {
            name: b"ROCKMANEXE3 20021002",
            variants: &[&A6BJ_01, &A6BE_00, &A3XJ_01, &A3XE_00],
        },
        Marker {
            name: b"BBN3 v0.5.0 20021002",
            variants: &[&A6BJ_01, &A6BE_00, &A3XJ_01, &A3XE_00],
        },
    ],
};
