use num_traits::FromPrimitive;

use crate::{array2d, bytes, gfx, lz77, msg, Error};

pub const ROM_NAME_OFFSET: usize = tango_gamedb::ROM_NAME_OFFSET;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RomInfo {
    pub name: [u8; 16],
    pub crc32: u32,
}

impl RomInfo {
    pub fn read(rom: &[u8]) -> Result<Self, Error> {
        let mut name = [0u8; 16];
        let len = name.len();
        name.copy_from_slice(bytes::slice(rom, ROM_NAME_OFFSET, len)?);
        Ok(Self {
            name,
            crc32: crc32fast::hash(rom),
        })
    }

    pub fn name_lossy(&self) -> String {
        String::from_utf8_lossy(&self.name).into_owned()
    }

    /// The registry entry for this ROM, if both the name and the CRC32 are known.
    pub fn game(&self) -> Option<&'static tango_gamedb::Game> {
        tango_gamedb::find_by_rom_name(&self.name).filter(|game| game.crc32 == self.crc32)
    }
}

pub struct MemoryMapper {
    rom: Vec<u8>,
    wram: Vec<u8>,
    unlz77_cache: parking_lot::Mutex<std::collections::HashMap<u32, Vec<u8>>>,
}

impl MemoryMapper {
    pub fn new(rom: Vec<u8>, wram: Vec<u8>) -> Self {
        Self {
            rom,
            wram,
            unlz77_cache: parking_lot::Mutex::new(std::collections::HashMap::new()),
        }
    }

    fn tail(buf: &[u8], offset: usize) -> Result<&[u8], Error> {
        buf.get(offset..).ok_or(Error::OutOfRange {
            offset,
            len: 0,
            size: buf.len(),
        })
    }

    /// Returns everything from `start` to the end of the backing region.
    pub fn get(&self, start: u32) -> Result<std::borrow::Cow<'_, [u8]>, Error> {
        #[allow(clippy::manual_range_contains)]
        if start >= 0x02000000 && start < 0x04000000 {
            Ok(std::borrow::Cow::Borrowed(Self::tail(
                &self.wram,
                (start & !0x02000000) as usize,
            )?))
        } else if start >= 0x08000000 && start < 0x0a000000 {
            Ok(std::borrow::Cow::Borrowed(Self::tail(
                &self.rom,
                (start & !0x08000000) as usize,
            )?))
        } else if start >= 0x88000000 && start < 0x8a000000 {
            let mut cache = self.unlz77_cache.lock();
            if let Some(buf) = cache.get(&start) {
                return Ok(std::borrow::Cow::Owned(buf.clone()));
            }
            let decompressed = lz77::decompress(Self::tail(&self.rom, (start & !0x88000000) as usize)?)?;
            let buf = decompressed.get(4..).unwrap_or_default().to_vec();
            cache.insert(start, buf.clone());
            Ok(std::borrow::Cow::Owned(buf))
        } else {
            Err(Error::OutOfRange {
                offset: start as usize,
                len: 0,
                size: 0,
            })
        }
    }

    pub fn read_u32(&self, addr: u32) -> Result<u32, Error> {
        bytes::read_u32(&self.get(addr)?, 0)
    }

    /// Follows the pointer stored at `addr`.
    pub fn deref(&self, addr: u32) -> Result<std::borrow::Cow<'_, [u8]>, Error> {
        self.get(self.read_u32(addr)?)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, num_derive::FromPrimitive)]
pub enum ChipCode {
    A = 0,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
    M,
    N,
    O,
    P,
    Q,
    R,
    S,
    T,
    U,
    V,
    W,
    X,
    Y,
    Z,
    Star,
}

const CHIP_CODES: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ*";

impl ChipCode {
    pub fn from_char(c: char) -> Option<Self> {
        CHIP_CODES
            .iter()
            .position(|v| *v as char == c)
            .and_then(Self::from_usize)
    }

    pub fn as_char(self) -> char {
        CHIP_CODES[self as usize] as char
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChipClass {
    Standard,
    Mega,
    Giga,
    None,
    ProgramAdvance,
}

#[derive(Clone, Debug)]
pub struct Chip {
    pub name: String,
    pub codes: Vec<char>,
    pub icon: image::RgbaImage,
    pub element: usize,
    pub class: ChipClass,
    pub dark: bool,
    pub mb: u8,
    pub damage: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NavicustPartColor {
    White,
    Pink,
    Yellow,
    Red,
    Blue,
    Green,
    Orange,
    Purple,
    Gray,
}

pub type NavicustBitmap = ndarray::Array2<bool>;

#[derive(Clone, Debug)]
pub struct NavicustPart {
    pub name: String,
    pub color: Option<NavicustPartColor>,
    pub is_solid: bool,
    pub compressed_bitmap: NavicustBitmap,
    pub uncompressed_bitmap: NavicustBitmap,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Modcard56Effect {
    pub id: u8,
    pub name: String,
    pub parameter: u8,
    pub is_debuff: bool,
    pub is_ability: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Modcard56 {
    pub name: String,
    pub mb: u8,
    pub effects: Vec<Modcard56Effect>,
}

/// Pointer table for one ROM revision. Data addresses are read directly; `*_pointer` addresses hold a pointer to the
/// real data. A zero address means the ROM has no such table.
pub struct Offsets {
    pub chip_data: u32,
    pub chip_names_pointers: u32,
    pub chip_icon_palette_pointer: u32,
    pub element_icons_pointer: u32,
    pub element_icon_palette_pointer: u32,
    pub ncp_data: u32,
    pub ncp_names_pointer: u32,
    pub modcard56_data: u32,
    pub modcard56_names_pointer: u32,
    pub modcard56_effect_names_pointer: u32,
}

impl Offsets {
    pub const NONE: Offsets = Offsets {
        chip_data: 0,
        chip_names_pointers: 0,
        chip_icon_palette_pointer: 0,
        element_icons_pointer: 0,
        element_icon_palette_pointer: 0,
        ncp_data: 0,
        ncp_names_pointer: 0,
        modcard56_data: 0,
        modcard56_names_pointer: 0,
        modcard56_effect_names_pointer: 0,
    };
}

pub enum ClassEncoding {
    Standard,
    /// Bit 2 marks giga chips and bit 1 mega chips.
    Flags(usize),
    Index(usize),
}

pub struct ChipLayout {
    pub count: usize,
    pub record_size: usize,
    pub codes: std::ops::Range<usize>,
    pub element: usize,
    pub class: ClassEncoding,
    pub mb: Option<usize>,
    pub dark: Option<(usize, u8)>,
    pub damage: usize,
    pub cap_damage: bool,
    pub icon_ptr: usize,
}

pub struct NcpLayout {
    pub count: (usize, usize),
    pub dim: usize,
    pub colors: &'static [Option<NavicustPartColor>],
}

pub struct RomLayout {
    pub chips: ChipLayout,
    pub element_icons: usize,
    pub element_icons_skip: usize,
    pub ncp: Option<NcpLayout>,
    pub modcard56s: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Language {
    En,
    Ja,
}

impl Language {
    pub fn for_region(region: tango_gamedb::Region) -> Self {
        match region {
            tango_gamedb::Region::JP => Language::Ja,
            tango_gamedb::Region::US => Language::En,
        }
    }
}

pub struct RomTable {
    pub layout: &'static RomLayout,
    pub offsets: &'static Offsets,
    pub parser: fn(&[&str]) -> msg::Parser<msg::Command>,
    pub en_charset: &'static [&'static str],
    pub ja_charset: &'static [&'static str],
}

impl RomTable {
    pub fn charset(&self, language: Language) -> &'static [&'static str] {
        match language {
            Language::En => self.en_charset,
            Language::Ja => self.ja_charset,
        }
    }
}

/// Everything decoded from a ROM that the editor needs, read once up front.
///
/// Records that fail to decode are kept as holes so ids stay aligned with the ROM's tables.
#[derive(Default)]
pub struct Assets {
    pub(crate) chips: Vec<Option<Chip>>,
    pub(crate) element_icons: Vec<Option<image::RgbaImage>>,
    pub(crate) navicust_parts: Vec<Option<NavicustPart>>,
    pub(crate) navicust_part_variants: usize,
    pub(crate) modcard56s: Vec<Option<Modcard56>>,
}

fn decode_each<T>(what: &str, n: usize, mut f: impl FnMut(usize) -> Result<T, Error>) -> Vec<Option<T>> {
    (0..n)
        .map(|i| match f(i) {
            Ok(v) => Some(v),
            Err(e) => {
                log::warn!("{} {}: {}", what, i, e);
                None
            }
        })
        .collect()
}

struct Loader<'a> {
    table: &'a RomTable,
    mapper: MemoryMapper,
    parser: msg::Parser<msg::Command>,
}

impl<'a> Loader<'a> {
    fn text(&self, region: &[u8], id: usize) -> Result<String, Error> {
        Ok(msg::simplify_newlines(&msg::render(
            self.parser.parse(msg::get_entry(region, id)?)?,
            |_| String::new(),
        )))
    }

    fn palette(&self, pointer: u32) -> Result<gfx::Palette, Error> {
        gfx::read_palette(&self.mapper.deref(pointer)?)
    }

    fn chips(&self) -> Result<Vec<Option<Chip>>, Error> {
        let layout = &self.table.layout.chips;
        let offsets = self.table.offsets;
        let chip_data = self.mapper.get(offsets.chip_data)?;
        let icon_palette = self.palette(offsets.chip_icon_palette_pointer)?;

        Ok(decode_each("chip", layout.count, |id| {
            let buf = bytes::slice(&chip_data, id * layout.record_size, layout.record_size)?;

            let names = self
                .mapper
                .deref(offsets.chip_names_pointers + ((id / 0x100) * 4) as u32)?;
            let name = self.text(&names, id % 0x100)?;

            let class = match layout.class {
                ClassEncoding::Standard => ChipClass::Standard,
                ClassEncoding::Flags(offset) => {
                    let flags = buf[offset];
                    if flags & 0b100 != 0 {
                        ChipClass::Giga
                    } else if flags & 0b010 != 0 {
                        ChipClass::Mega
                    } else {
                        ChipClass::Standard
                    }
                }
                ClassEncoding::Index(offset) => match buf[offset] {
                    0 => ChipClass::Standard,
                    1 => ChipClass::Mega,
                    2 => ChipClass::Giga,
                    4 => ChipClass::ProgramAdvance,
                    _ => ChipClass::None,
                },
            };

            let damage = bytes::read_u16(buf, layout.damage)? as u32;
            let damage = if layout.cap_damage && damage >= 1000 { 0 } else { damage };

            let icon = gfx::read_tiles(
                &self.mapper.get(bytes::read_u32(buf, layout.icon_ptr)?)?,
                2,
                2,
                &icon_palette,
            )?;

            Ok(Chip {
                name,
                codes: buf[layout.codes.clone()]
                    .iter()
                    .filter_map(|code| ChipCode::from_u8(*code).map(|c| c.as_char()))
                    .collect(),
                icon,
                element: buf[layout.element] as usize,
                class,
                dark: layout.dark.map(|(offset, bit)| buf[offset] & bit != 0).unwrap_or(false),
                mb: layout.mb.map(|offset| buf[offset]).unwrap_or(0),
                damage,
            })
        }))
    }

    fn element_icons(&self) -> Result<Vec<Option<image::RgbaImage>>, Error> {
        let layout = self.table.layout;
        let offsets = self.table.offsets;
        let palette = self.palette(offsets.element_icon_palette_pointer)?;
        let buf = self.mapper.deref(offsets.element_icons_pointer)?;
        let buf = MemoryMapper::tail(&buf, layout.element_icons_skip)?;

        Ok(decode_each("element icon", layout.element_icons, |i| {
            gfx::read_tiles(MemoryMapper::tail(buf, i * gfx::TILE_BYTES * 4)?, 2, 2, &palette)
        }))
    }

    fn navicust_parts(&self, layout: &NcpLayout) -> Result<Vec<Option<NavicustPart>>, Error> {
        let offsets = self.table.offsets;
        let ncp_data = self.mapper.get(offsets.ncp_data)?;
        let names = self.mapper.deref(offsets.ncp_names_pointer)?;
        let (num_ids, num_variants) = layout.count;

        Ok(decode_each("navicust part", num_ids * num_variants, |i| {
            let buf = bytes::slice(&ncp_data, i * 0x10, 0x10)?;
            let bitmap = |ptr_offset| -> Result<NavicustBitmap, Error> {
                array2d::from_flat(
                    &self.mapper.get(bytes::read_u32(buf, ptr_offset)?)?,
                    layout.dim,
                    layout.dim,
                )
                .ok_or_else(|| Error::format(format!("navicust part {} bitmap too small", i)))
            };

            Ok(NavicustPart {
                name: self.text(&names, i / num_variants)?,
                color: layout.colors.get(buf[3] as usize).copied().flatten(),
                is_solid: buf[1] == 0,
                uncompressed_bitmap: bitmap(0x08)?,
                compressed_bitmap: bitmap(0x0c)?,
            })
        }))
    }

    fn modcard56s(&self) -> Result<Vec<Option<Modcard56>>, Error> {
        let offsets = self.table.offsets;
        let data = self.mapper.get(offsets.modcard56_data)?;
        let names = self.mapper.deref(offsets.modcard56_names_pointer)?;
        let effect_names = self.mapper.deref(offsets.modcard56_effect_names_pointer)?;

        Ok(decode_each("modcard", self.table.layout.modcard56s, |id| {
            if id == 0 {
                return Ok(Modcard56 {
                    name: String::new(),
                    mb: 0,
                    effects: vec![],
                });
            }

            let buf = msg::get_entry(&data, id)?;
            let effects = buf
                .get(3..)
                .unwrap_or_default()
                .chunks_exact(3)
                .map(|chunk| {
                    let (effect_id, parameter, debuff) = (chunk[0], chunk[1], chunk[2]);
                    let name = msg::simplify_newlines(&msg::render(
                        self.parser.parse(msg::get_entry(&effect_names, effect_id as usize)?)?,
                        |cmd| match cmd {
                            msg::Command::PrintVar(print_var) if print_var.buffer == 1 => {
                                let mut value = parameter as u32;
                                if effect_id == 0 || effect_id == 2 {
                                    value *= 10;
                                }
                                print_var.format(value)
                            }
                            msg::Command::PrintVar(_) => String::new(),
                        },
                    ));
                    Ok(Modcard56Effect {
                        id: effect_id,
                        name,
                        parameter,
                        is_debuff: debuff == 1,
                        is_ability: effect_id > 0x15,
                    })
                })
                .collect::<Result<Vec<_>, Error>>()?;

            Ok(Modcard56 {
                name: self.text(&names, id)?,
                mb: bytes::read_u8(buf, 1)?,
                effects,
            })
        }))
    }
}

impl Assets {
    pub fn load(table: &RomTable, charset: &[&str], rom: Vec<u8>) -> Result<Self, Error> {
        let loader = Loader {
            table,
            mapper: MemoryMapper::new(rom, vec![]),
            parser: (table.parser)(charset),
        };

        let chips = loader.chips()?;
        let element_icons = loader.element_icons()?;

        let (navicust_parts, navicust_part_variants) = match &table.layout.ncp {
            Some(layout) if table.offsets.ncp_data != 0 => (loader.navicust_parts(layout)?, layout.count.1),
            _ => (vec![], 0),
        };

        let modcard56s = if table.offsets.modcard56_data != 0 {
            loader.modcard56s()?
        } else {
            vec![]
        };

        log::debug!(
            "loaded {} chips, {} navicust parts, {} modcards",
            chips.iter().flatten().count(),
            navicust_parts.iter().flatten().count(),
            modcard56s.iter().flatten().count()
        );

        Ok(Self {
            chips,
            element_icons,
            navicust_parts,
            navicust_part_variants,
            modcard56s,
        })
    }

    pub fn chip(&self, id: usize) -> Option<&Chip> {
        self.chips.get(id)?.as_ref()
    }

    pub fn num_chips(&self) -> usize {
        self.chips.len()
    }

    pub fn element_icon(&self, id: usize) -> Option<&image::RgbaImage> {
        self.element_icons.get(id)?.as_ref()
    }

    pub fn navicust_part(&self, id: usize, variant: usize) -> Option<&NavicustPart> {
        if variant >= self.navicust_part_variants {
            return None;
        }
        self.navicust_parts.get(id * self.navicust_part_variants + variant)?.as_ref()
    }

    pub fn num_navicust_parts(&self) -> (usize, usize) {
        if self.navicust_part_variants == 0 {
            return (0, 0);
        }
        (
            self.navicust_parts.len() / self.navicust_part_variants,
            self.navicust_part_variants,
        )
    }

    pub fn modcard56(&self, id: usize) -> Option<&Modcard56> {
        self.modcard56s.get(id)?.as_ref()
    }

    pub fn num_modcard56s(&self) -> usize {
        self.modcard56s.len()
    }
}
