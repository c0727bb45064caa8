use crate::{msg, rom};

#[rustfmt::skip]
pub static BR4J_00_OFFSETS: rom::Offsets = rom::Offsets {
    chip_data:                      0x0801af0c,
    chip_names_pointers:            0x0803cb98,
    chip_icon_palette_pointer:      0x080168ec,
    element_icon_palette_pointer:   0x080d4ca0,
    element_icons_pointer:          0x080d4c94,
    ..rom::Offsets::NONE
};

pub static LAYOUT: rom::RomLayout = rom::RomLayout {
    chips: rom::ChipLayout {
        count: 389,
        record_size: 0x2c,
        codes: 0x00..0x04,
        element: 0x07,
        class: rom::ClassEncoding::Index(0x08),
        mb: Some(0x06),
        dark: Some((0x09, 0x20)),
        damage: 0x1a,
        cap_damage: true,
        icon_ptr: 0x20,
    },
    element_icons: 13,
    element_icons_skip: 0,
    ncp: None,
    modcard56s: 0,
};

pub fn parser(charset: &[&str]) -> msg::Parser<msg::Command> {
    msg::Parser::builder()
        .with_fallthrough_rule(msg::FallthroughBehavior::Stop)
        .add_charset_rules(charset, 0xe4)
        .add_stop_rule(b"\xe5")
        .add_text_rule(b"\xe8", "\n")
        .add_skip_rule(b"\xe6", 1)
        .add_skip_rule(b"\xe7\x01", 0)
        .add_skip_rule(b"\xe7\x02", 0)
        .add_skip_rule(b"\xe7\x03", 0)
        .add_skip_rule(b"\xed\x00", 2)
        .add_skip_rule(b"\xf0\x00", 1)
        .add_skip_rule(b"\xfc\x06", 0)
        .build()
}

// Only released in Japan, so both languages read the same glyphs.
pub static BR4J_00: rom::RomTable = rom::RomTable {
    layout: &LAYOUT,
    offsets: &BR4J_00_OFFSETS,
    parser,
    en_charset: super::charset::JA,
    ja_charset: super::charset::JA,
};
