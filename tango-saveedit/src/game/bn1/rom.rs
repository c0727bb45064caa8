use crate::{msg, rom};

#[rustfmt::skip]
pub static AREE_00_OFFSETS: rom::Offsets = rom::Offsets {
    chip_data:                      0x08007d70,
    chip_names_pointers:            0x080145f4,
    chip_icon_palette_pointer:      0x08015ebc,
    element_icons_pointer:          0x0801a688,
    element_icon_palette_pointer:   0x08005a1c,
    ..rom::Offsets::NONE
};

#[rustfmt::skip]
pub static AREJ_00_OFFSETS: rom::Offsets = rom::Offsets {
    chip_data:                      0x08007d3c,
    chip_names_pointers:            0x08014578,
    chip_icon_palette_pointer:      0x08015e40,
    element_icons_pointer:          0x0801a5a4,
    element_icon_palette_pointer:   0x08005a0c,
    ..rom::Offsets::NONE
};

pub static LAYOUT: rom::RomLayout = rom::RomLayout {
    chips: rom::ChipLayout {
        count: 240,
        record_size: 0x1c,
        codes: 0x00..0x05,
        element: 0x05,
        class: rom::ClassEncoding::Standard,
        mb: None,
        dark: None,
        damage: 0x0c,
        cap_damage: false,
        icon_ptr: 0x10,
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
        .build()
}

pub static AREE_00: rom::RomTable = rom::RomTable {
    layout: &LAYOUT,
    offsets: &AREE_00_OFFSETS,
    parser,
    en_charset: super::charset::EN,
    ja_charset: super::charset::JA,
};

pub static AREJ_00: rom::RomTable = rom::RomTable {
    layout: &LAYOUT,
    offsets: &AREJ_00_OFFSETS,
    parser,
    en_charset: super::charset::EN,
    ja_charset: super::charset::JA,
};
