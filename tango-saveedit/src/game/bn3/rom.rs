use crate::{msg, rom};

#[rustfmt::skip]
pub static A6BJ_01_OFFSETS: rom::Offsets = rom::Offsets {
    chip_data:                      0x08011474,
    chip_names_pointers:            0x08027c34,
    chip_icon_palette_pointer:      0x080335ec,
    element_icon_palette_pointer:   0x080335ec,
    element_icons_pointer:          0x080335e0,
    ncp_data:                       0x080398d8,
    ncp_names_pointer:              0x08027c44,
    ..rom::Offsets::NONE
};

#[rustfmt::skip]
pub static A3XJ_01_OFFSETS: rom::Offsets = rom::Offsets {
    chip_data:                      0x08011474,
    chip_names_pointers:            0x08027c1c,
    chip_icon_palette_pointer:      0x080335d4,
    element_icon_palette_pointer:   0x080335d4,
    element_icons_pointer:          0x080335c8,
    ncp_data:                       0x080398c0,
    ncp_names_pointer:              0x08027c2c,
    ..rom::Offsets::NONE
};

#[rustfmt::skip]
pub static A6BE_00_OFFSETS: rom::Offsets = rom::Offsets {
    chip_data:                      0x08011510,
    chip_names_pointers:            0x08027ad4,
    chip_icon_palette_pointer:      0x08033134,
    element_icon_palette_pointer:   0x08033134,
    element_icons_pointer:          0x08033128,
    ncp_data:                       0x08039420,
    ncp_names_pointer:              0x08027ae4,
    ..rom::Offsets::NONE
};

#[rustfmt::skip]
pub static A3XE_00_OFFSETS: rom::Offsets = rom::Offsets {
    chip_data:                      0x08011510,
    chip_names_pointers:            0x08027abc,
    chip_icon_palette_pointer:      0x0803311c,
    element_icon_palette_pointer:   0x0803311c,
    element_icons_pointer:          0x08033110,
    ncp_data:                       0x08039408,
    ncp_names_pointer:              0x08027acc,
    ..rom::Offsets::NONE
};

static NCP_COLORS: &[Option<rom::NavicustPartColor>] = &[
    None,
    Some(rom::NavicustPartColor::White),
    Some(rom::NavicustPartColor::Pink),
    Some(rom::NavicustPartColor::Yellow),
    Some(rom::NavicustPartColor::Red),
    Some(rom::NavicustPartColor::Blue),
    Some(rom::NavicustPartColor::Green),
    Some(rom::NavicustPartColor::Orange),
    Some(rom::NavicustPartColor::Purple),
    Some(rom::NavicustPartColor::Gray),
];

pub static LAYOUT: rom::RomLayout = rom::RomLayout {
    chips: rom::ChipLayout {
        count: 374,
        record_size: 0x20,
        codes: 0x00..0x06,
        element: 0x06,
        class: rom::ClassEncoding::Flags(0x13),
        mb: Some(0x0a),
        dark: None,
        damage: 0x0c,
        cap_damage: true,
        icon_ptr: 0x14,
    },
    element_icons: 5,
    element_icons_skip: 0x1e0,
    ncp: Some(rom::NcpLayout {
        count: (51, 4),
        dim: 5,
        colors: NCP_COLORS,
    }),
    modcard56s: 0,
};

pub fn parser(charset: &[&str]) -> msg::Parser<msg::Command> {
    msg::Parser::builder()
        .with_fallthrough_rule(msg::FallthroughBehavior::Stop)
        .add_charset_rules(charset, 0xe5)
        .add_stop_rule(b"\xe7")
        .add_text_rule(b"\xe8", "\n")
        .add_skip_rule(b"\xea\x00", 2)
        .add_skip_rule(b"\xea\xff", 2)
        .add_skip_rule(b"\xeb", 0)
        .add_skip_rule(b"\xec\x00", 1)
        .add_skip_rule(b"\xee\x02", 2)
        .add_skip_rule(b"\xf1\x02", 0)
        .add_skip_rule(b"\xf1\x03", 0)
        .build()
}

macro_rules! table {
    ($name:ident, $offsets:ident) => {
        pub static $name: rom::RomTable = rom::RomTable {
            layout: &LAYOUT,
            offsets: &$offsets,
            parser,
            en_charset: super::charset::EN,
            ja_charset: super::charset::JA,
        };
    };
}

table!(A6BJ_01, A6BJ_01_OFFSETS);
table!(A3XJ_01, A3XJ_01_OFFSETS);
table!(A6BE_00, A6BE_00_OFFSETS);
table!(A3XE_00, A3XE_00_OFFSETS);
