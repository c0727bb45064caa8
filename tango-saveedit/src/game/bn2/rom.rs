use crate::{msg, rom};

#[rustfmt::skip]
pub static AE2E_00_OFFSETS: rom::Offsets = rom::Offsets {
    chip_data:                      0x0800e450,
    chip_names_pointers:            0x0800b528,
    chip_icon_palette_pointer:      0x0800b890,
    element_icons_pointer:          0x08025fe0,
    element_icon_palette_pointer:   0x08005388,
    ..rom::Offsets::NONE
};

#[rustfmt::skip]
pub static AE2J_00_AC_OFFSETS: rom::Offsets = rom::Offsets {
    chip_data:                      0x0800e2fc,
    chip_names_pointers:            0x0800b528,
    chip_icon_palette_pointer:      0x0800b750,
    element_icons_pointer:          0x08025ec0,
    element_icon_palette_pointer:   0x08005384,
    ..rom::Offsets::NONE
};

pub static LAYOUT: rom::RomLayout = rom::RomLayout {
    chips: rom::ChipLayout {
        count: 315,
        record_size: 0x20,
        codes: 0x00..0x06,
        element: 0x06,
        class: rom::ClassEncoding::Standard,
        mb: Some(0x0a),
        dark: None,
        damage: 0x0c,
        cap_damage: false,
        icon_ptr: 0x14,
    },
    element_icons: 5,
    element_icons_skip: 0,
    ncp: None,
    modcard56s: 0,
};

pub fn parser(charset: &[&str]) -> msg::Parser<msg::Command> {
    msg::Parser::builder()
        .with_fallthrough_rule(msg::FallthroughBehavior::Stop)
        .add_charset_rules(charset, 0xe5)
        .add_stop_rule(b"\xe7")
        .add_text_rule(b"\xe8", "\n")
        .add_skip_rule(b"\xeb", 0)
        .add_skip_rule(b"\xec\x00", 1)
        .add_skip_rule(b"\xf1\x02", 0)
        .add_skip_rule(b"\xf1\x03", 0)
        .build()
}

pub static AE2E_00: rom::RomTable = rom::RomTable {
    layout: &LAYOUT,
    offsets: &AE2E_00_OFFSETS,
    parser,
    en_charset: super::charset::EN,
    ja_charset: super::charset::JA,
};

pub static AE2J_00_AC: rom::RomTable = rom::RomTable {
    layout: &LAYOUT,
    offsets: &AE2J_00_AC_OFFSETS,
    parser,
    en_charset: super::charset::EN,
    ja_charset: super::charset::JA,
};
