use crate::{msg, rom};

#[rustfmt::skip]
pub static BR5J_00_OFFSETS: rom::Offsets = rom::Offsets {
    chip_data:                      0x080221bc,
    chip_names_pointers:            0x08043274,
    chip_icon_palette_pointer:      0x0801f144,
    ncp_data:                       0x081460cc,
    ncp_names_pointer:              0x08043284,
    element_icon_palette_pointer:   0x081226e4,
    element_icons_pointer:          0x081226dc,
    modcard56_data:                 0x08144778,
    modcard56_names_pointer:        0x08130fe0,
    modcard56_effect_names_pointer: 0x08130fec,
};

#[rustfmt::skip]
pub static BR6J_00_OFFSETS: rom::Offsets = rom::Offsets {
    chip_data:                      0x080221bc,
    chip_names_pointers:            0x080432a4,
    chip_icon_palette_pointer:      0x0801f144,
    ncp_data:                       0x08144300,
    ncp_names_pointer:              0x080432b4,
    element_icon_palette_pointer:   0x081213c4,
    element_icons_pointer:          0x081213bc,
    modcard56_data:                 0x081429b0,
    modcard56_names_pointer:        0x0812f218,
    modcard56_effect_names_pointer: 0x0812f224,
};

#[rustfmt::skip]
pub static BR5E_00_OFFSETS: rom::Offsets = rom::Offsets {
    chip_data:                      0x08021da8,
    chip_names_pointers:            0x08042038,
    chip_icon_palette_pointer:      0x0801ed20,
    ncp_data:                       0x0813b22c,
    ncp_names_pointer:              0x08042048,
    element_icon_palette_pointer:   0x0811a9a4,
    element_icons_pointer:          0x0811a99c,
    ..rom::Offsets::NONE
};

#[rustfmt::skip]
pub static BR6E_00_OFFSETS: rom::Offsets = rom::Offsets {
    chip_data:                      0x08021da8,
    chip_names_pointers:            0x08042068,
    chip_icon_palette_pointer:      0x0801ed20,
    ncp_data:                       0x0813944c,
    ncp_names_pointer:              0x08042078,
    element_icon_palette_pointer:   0x08119674,
    element_icons_pointer:          0x0811966c,
    ..rom::Offsets::NONE
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
        count: 411,
        record_size: 0x2c,
        codes: 0x00..0x04,
        element: 0x06,
        class: rom::ClassEncoding::Index(0x07),
        mb: Some(0x08),
        dark: None,
        damage: 0x1a,
        cap_damage: true,
        icon_ptr: 0x20,
    },
    element_icons: 11,
    element_icons_skip: 0,
    ncp: Some(rom::NcpLayout {
        count: (47, 4),
        dim: 7,
        colors: NCP_COLORS,
    }),
    // Only loaded when the modcard offsets are known.
    modcard56s: 118,
};

pub fn parser(charset: &[&str]) -> msg::Parser<msg::Command> {
    msg::Parser::builder()
        .with_fallthrough_rule(msg::FallthroughBehavior::Stop)
        .add_charset_rules(charset, 0xe4)
        .add_stop_rule(b"\xe6")
        .add_text_rule(b"\xe9", "\n")
        .add_command_rule::<msg::PrintVarCommand>(b"\xfa")
        .add_skip_rule(b"\xe7", 1)
        .add_skip_rule(b"\xe8\x01", 0)
        .add_skip_rule(b"\xe8\x02", 0)
        .add_skip_rule(b"\xe8\x03", 0)
        .add_skip_rule(b"\xe8\x04", 2)
        .add_skip_rule(b"\xe8\x05", 2)
        .add_skip_rule(b"\xe8\x06", 2)
        .add_skip_rule(b"\xee\x00", 2)
        .add_skip_rule(b"\xf1\x00", 1)
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

table!(BR5J_00, BR5J_00_OFFSETS);
table!(BR6J_00, BR6J_00_OFFSETS);
table!(BR5E_00, BR5E_00_OFFSETS);
table!(BR6E_00, BR6E_00_OFFSETS);
