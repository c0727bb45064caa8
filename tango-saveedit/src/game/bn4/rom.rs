use crate::{msg, rom};

#[rustfmt::skip]
pub static B4WJ_01_OFFSETS: rom::Offsets = rom::Offsets {
    chip_data:                      0x0801972c,
    chip_names_pointers:            0x0804fa6c,
    chip_icon_palette_pointer:      0x080159d4,
    ncp_data:                       0x08045538,
    ncp_names_pointer:              0x0804fa7c,
    element_icon_palette_pointer:   0x081098ac,
    element_icons_pointer:          0x081098a0,
    ..rom::Offsets::NONE
};

#[rustfmt::skip]
pub static B4BJ_00_OFFSETS: rom::Offsets = rom::Offsets {
    chip_data:                      0x080196f8,
    chip_names_pointers:            0x0804fa3c,
    chip_icon_palette_pointer:      0x080159a0,
    ncp_data:                       0x08045504,
    ncp_names_pointer:              0x0804fa4c,
    element_icon_palette_pointer:   0x0810983c,
    element_icons_pointer:          0x08109830,
    ..rom::Offsets::NONE
};

#[rustfmt::skip]
pub static B4WE_00_OFFSETS: rom::Offsets = rom::Offsets {
    chip_data:                      0x080197ec,
    chip_names_pointers:            0x0804fb74,
    chip_icon_palette_pointer:      0x08015a78,
    ncp_data:                       0x0804563c,
    ncp_names_pointer:              0x0804fb84,
    element_icon_palette_pointer:   0x08106bd8,
    element_icons_pointer:          0x081099cc,
    ..rom::Offsets::NONE
};

#[rustfmt::skip]
pub static B4BE_00_OFFSETS: rom::Offsets = rom::Offsets {
    chip_data:                      0x080197ec,
    chip_names_pointers:            0x0804fb80,
    chip_icon_palette_pointer:      0x08015a78,
    ncp_data:                       0x08045644,
    ncp_names_pointer:              0x0804fb90,
    element_icon_palette_pointer:   0x081099e4,
    element_icons_pointer:          0x081099d8,
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
];

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
    ncp: Some(rom::NcpLayout {
        count: (47, 4),
        dim: 5,
        colors: NCP_COLORS,
    }),
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
        // e-Reader names.
        .add_skip_rule(b"\xff\x00", 1)
        .add_skip_rule(b"\xff\x01", 1)
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

table!(B4WJ_01, B4WJ_01_OFFSETS);
table!(B4BJ_00, B4BJ_00_OFFSETS);
table!(B4WE_00, B4WE_00_OFFSETS);
table!(B4BE_00, B4BE_00_OFFSETS);
