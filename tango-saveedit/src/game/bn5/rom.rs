use crate::{msg, rom};

#[rustfmt::skip]
pub static BRBJ_00_OFFSETS: rom::Offsets = rom::Offsets {
    chip_data:                      0x0801e1d0,
    chip_names_pointers:            0x08040a68,
    chip_icon_palette_pointer:      0x0804992c,
    ncp_data:                       0x0813d0cc,
    ncp_names_pointer:              0x08040a78,
    element_icon_palette_pointer:   0x08122ffc,
    element_icons_pointer:          0x08122ff4,
    modcard56_data:                 0x0813842c,
    modcard56_names_pointer:        0x081373c4,
    modcard56_effect_names_pointer: 0x081373d0,
};

#[rustfmt::skip]
pub static BRKJ_00_OFFSETS: rom::Offsets = rom::Offsets {
    chip_data:                      0x0801e1cc,
    chip_names_pointers:            0x08040a70,
    chip_icon_palette_pointer:      0x08049934,
    ncp_data:                       0x0813d1b4,
    ncp_names_pointer:              0x08040a80,
    element_icon_palette_pointer:   0x081230e4,
    element_icons_pointer:          0x081230dc,
    modcard56_data:                 0x08138514,
    modcard56_names_pointer:        0x081374ac,
    modcard56_effect_names_pointer: 0x081374b8,
};

#[rustfmt::skip]
pub static BRBE_00_OFFSETS: rom::Offsets = rom::Offsets {
    chip_data:                      0x0801e214,
    chip_names_pointers:            0x08040b84,
    chip_icon_palette_pointer:      0x0804a0f0,
    ncp_data:                       0x0813d540,
    ncp_names_pointer:              0x08040b94,
    element_icon_palette_pointer:   0x081233e0,
    element_icons_pointer:          0x081233d8,
    modcard56_data:                 0x08138874,
    modcard56_names_pointer:        0x0813780c,
    modcard56_effect_names_pointer: 0x08137818,
};

#[rustfmt::skip]
pub static BRKE_00_OFFSETS: rom::Offsets = rom::Offsets {
    chip_data:                      0x0801e210,
    chip_names_pointers:            0x08040b8c,
    chip_icon_palette_pointer:      0x0804a0f8,
    ncp_data:                       0x0813d628,
    ncp_names_pointer:              0x08040b9c,
    element_icon_palette_pointer:   0x081234c8,
    element_icons_pointer:          0x081234c0,
    modcard56_data:                 0x0813895c,
    modcard56_names_pointer:        0x081378f4,
    modcard56_effect_names_pointer: 0x08137900,
};

static NCP_COLORS: &[Option<rom::NavicustPartColor>] = &[
    None,
    Some(rom::NavicustPartColor::White),
    Some(rom::NavicustPartColor::Yellow),
    Some(rom::NavicustPartColor::Pink),
    Some(rom::NavicustPartColor::Red),
    Some(rom::NavicustPartColor::Blue),
    Some(rom::NavicustPartColor::Green),
];

pub static LAYOUT: rom::RomLayout = rom::RomLayout {
    chips: rom::ChipLayout {
        count: 423,
        record_size: 0x2c,
        codes: 0x00..0x04,
        element: 0x06,
        class: rom::ClassEncoding::Index(0x07),
        mb: Some(0x08),
        dark: Some((0x09, 0x20)),
        damage: 0x1a,
        cap_damage: true,
        icon_ptr: 0x20,
    },
    element_icons: 13,
    element_icons_skip: 0,
    ncp: Some(rom::NcpLayout {
        count: (48, 4),
        dim: 5,
        colors: NCP_COLORS,
    }),
    modcard56s: 112,
};

pub fn parser(charset: &[&str]) -> msg::Parser<msg::Command> {
    msg::Parser::builder()
        .with_fallthrough_rule(msg::FallthroughBehavior::Stop)
        .add_charset_rules(charset, 0xe4)
        .add_stop_rule(b"\xe6")
        .add_text_rule(b"\xe9", "\n")
        .add_command_rule::<msg::PrintVarCommand>(b"\xfa")
        // e-Reader names.
        .add_skip_rule(b"\xff", 2)
        .add_skip_rule(b"\xe7", 1)
        .add_skip_rule(b"\xe8", 3)
        .add_skip_rule(b"\xee", 3)
        .add_skip_rule(b"\xf1", 2)
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

table!(BRBJ_00, BRBJ_00_OFFSETS);
table!(BRKJ_00, BRKJ_00_OFFSETS);
table!(BRBE_00, BRBE_00_OFFSETS);
table!(BRKE_00, BRKE_00_OFFSETS);
