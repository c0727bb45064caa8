use num_traits::FromPrimitive;

use crate::{bytes, navicust, rom, DirtyReason, Error};

/// Size of the SRAM image an emulator writes out.
pub const DUMP_SIZE: usize = 0x10000;

pub const FOLDER_SIZE: usize = 30;

/// One cartridge a save may belong to.
#[derive(Debug)]
pub struct Variant {
    pub rom_name: &'static [u8; 16],
    pub checksum_seed: u32,
    /// Adds the first byte of the save to the checksum.
    pub add_first_byte: bool,
    /// Key for the derived modcard region, if the layout has one.
    pub modcard_key: u8,
    pub layout: &'static Layout,
}

/// A game name embedded in the save and the cartridges that write it.
#[derive(Debug)]
pub struct Marker {
    pub name: &'static [u8; 20],
    pub variants: &'static [&'static Variant],
}

/// The container layout shared by every variant of one generation.
#[derive(Debug)]
pub struct Format {
    pub name: &'static str,
    pub dump_start: usize,
    pub raw_size: usize,
    pub mask_offset: Option<usize>,
    pub shift_offset: Option<usize>,
    pub marker_offset: usize,
    pub checksum_offset: usize,
    pub sum_start: usize,
    pub markers: &'static [Marker],
}

/// XORs every byte with the low byte of the u32 at `mask_offset`, then restores that u32.
pub fn mask(buf: &mut [u8], mask_offset: usize) -> Result<(), Error> {
    let mask = bytes::read_u32(buf, mask_offset)?;
    for b in buf.iter_mut() {
        *b ^= mask as u8;
    }
    bytes::write_u32(buf, mask_offset, mask)
}

/// Sums every byte from `start` except the 4 bytes of the checksum field.
pub fn compute_raw_checksum(buf: &[u8], start: usize, checksum_offset: usize) -> Result<u32, Error> {
    let field = bytes::slice(buf, checksum_offset, 4)?;
    let total = buf
        .get(start..)
        .unwrap_or_default()
        .iter()
        .fold(0u32, |acc, v| acc.wrapping_add(*v as u32));
    let excluded = if checksum_offset >= start {
        field.iter().fold(0u32, |acc, v| acc.wrapping_add(*v as u32))
    } else {
        0
    };
    Ok(total.wrapping_sub(excluded))
}

impl Format {
    pub fn variants(&self) -> impl Iterator<Item = &'static Variant> + '_ {
        self.markers.iter().flat_map(|marker| marker.variants.iter().copied())
    }

    pub fn variant(&self, rom_name: &[u8]) -> Option<&'static Variant> {
        self.variants().find(|variant| &variant.rom_name[..] == rom_name)
    }

    fn check_size(&self, raw: &[u8]) -> Result<(), Error> {
        if raw.len() != self.raw_size {
            return Err(Error::SizeMismatch {
                expected: self.raw_size,
                actual: raw.len(),
            });
        }
        Ok(())
    }

    pub fn shift(&self, raw: &[u8]) -> Result<usize, Error> {
        let shift_offset = if let Some(shift_offset) = self.shift_offset {
            shift_offset
        } else {
            return Ok(0);
        };
        let shift = bytes::read_u32(raw, shift_offset)? as usize;
        if shift > 0x1fc || (shift & 3) != 0 {
            return Err(Error::InvalidShift(shift));
        }
        Ok(shift)
    }

    pub fn marker(&self, raw: &[u8], shift: usize) -> Result<&'static Marker, Error> {
        let name = bytes::slice(raw, shift + self.marker_offset, 20)?;
        self.markers
            .iter()
            .find(|marker| &marker.name[..] == name)
            .ok_or_else(|| Error::UnrecognizedGameMarker(name.to_vec()))
    }

    pub fn stored_checksum(&self, raw: &[u8], shift: usize) -> Result<u32, Error> {
        bytes::read_u32(raw, shift + self.checksum_offset)
    }

    pub fn compute_checksum(&self, raw: &[u8], shift: usize, variant: &Variant) -> Result<u32, Error> {
        let mut checksum = compute_raw_checksum(raw, self.sum_start, shift + self.checksum_offset)?
            .wrapping_add(variant.checksum_seed);
        if variant.add_first_byte {
            checksum = checksum.wrapping_add(bytes::read_u8(raw, 0)? as u32);
        }
        Ok(checksum)
    }

    /// Extracts the raw save from an SRAM dump, unmasking it if the format is masked.
    pub fn dump_to_raw(&self, dump: &[u8]) -> Result<Vec<u8>, Error> {
        let mut raw = dump
            .get(self.dump_start..self.dump_start + self.raw_size)
            .ok_or(Error::SizeMismatch {
                expected: self.dump_start + self.raw_size,
                actual: dump.len(),
            })?
            .to_vec();
        if let Some(mask_offset) = self.mask_offset {
            mask(&mut raw, mask_offset)?;
        }
        Ok(raw)
    }

    /// The inverse of [`Format::dump_to_raw`]. Bytes outside the save window are zero, so a dump survives the round
    /// trip unchanged only if it was zero there too.
    pub fn raw_to_dump(&self, raw: &[u8]) -> Result<Vec<u8>, Error> {
        self.check_size(raw)?;
        let mut dump = vec![0u8; DUMP_SIZE];
        let window = bytes::slice_mut(&mut dump, self.dump_start, self.raw_size)?;
        window.copy_from_slice(raw);
        if let Some(mask_offset) = self.mask_offset {
            mask(window, mask_offset)?;
        }
        Ok(dump)
    }

    /// Returns every cartridge whose checksum formula agrees with the stored checksum.
    pub fn sniff(&self, raw: &[u8]) -> Result<Vec<&'static [u8; 16]>, Error> {
        self.check_size(raw)?;
        let shift = self.shift(raw)?;
        let marker = self.marker(raw, shift)?;
        let actual = self.stored_checksum(raw, shift)?;

        let mut expected = vec![];
        let mut rom_names = vec![];
        for variant in marker.variants {
            let checksum = self.compute_checksum(raw, shift, variant)?;
            if checksum == actual {
                rom_names.push(variant.rom_name);
            } else if !expected.contains(&checksum) {
                expected.push(checksum);
            }
        }

        if rom_names.is_empty() {
            return Err(Error::ChecksumMismatch { actual, expected });
        }
        Ok(rom_names)
    }
}

/// The result of identifying a save.
#[derive(Debug)]
pub struct Sniffed {
    pub format: &'static Format,
    pub rom_names: Vec<&'static [u8; 16]>,
}

fn sniff_with(convert: impl Fn(&'static Format) -> Result<Vec<&'static [u8; 16]>, Error>) -> Result<Sniffed, Error> {
    let mut errors = vec![];
    for format in crate::game::FORMATS.iter().copied() {
        match convert(format) {
            Ok(rom_names) => return Ok(Sniffed { format, rom_names }),
            Err(e) => errors.push((format.name, e)),
        }
    }
    Err(Error::SniffFailed(errors))
}

/// Identifies an SRAM dump by trying every known format in turn.
pub fn sniff(dump: &[u8]) -> Result<Sniffed, Error> {
    sniff_with(|format| format.sniff(&format.dump_to_raw(dump)?))
}

/// Identifies a raw save by trying every known format in turn.
pub fn sniff_raw(raw: &[u8]) -> Result<Sniffed, Error> {
    sniff_with(|format| format.sniff(raw))
}

pub fn find_variant(rom_name: &[u8]) -> Option<(&'static Format, &'static Variant)> {
    crate::game::FORMATS
        .iter()
        .find_map(|format| format.variant(rom_name).map(|variant| (*format, variant)))
}

/// Where a field lives in the raw save.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Position {
    Absolute(usize),
    /// Relative to the shift stored in the save.
    Shifted(usize),
    /// Relative to the stats block of the current navi.
    NaviStats(usize),
}

#[derive(Clone, Copy, Debug)]
pub enum FolderCount {
    Fixed(usize),
    At(Position),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChipEncoding {
    /// `{id: u8, code: u8}`.
    Bytes,
    /// `{id: u16, code: u16}`.
    Wide,
    /// A u16 of `id | code << 9`, where zero is an empty slot.
    Packed,
}

impl ChipEncoding {
    pub fn size(self) -> usize {
        match self {
            ChipEncoding::Bytes => 2,
            ChipEncoding::Wide => 4,
            ChipEncoding::Packed => 2,
        }
    }

    fn read(self, buf: &[u8], offset: usize) -> Result<Option<Chip>, Error> {
        let (id, code) = match self {
            ChipEncoding::Bytes => (
                bytes::read_u8(buf, offset)? as usize,
                bytes::read_u8(buf, offset + 1)? as usize,
            ),
            ChipEncoding::Wide => (
                bytes::read_u16(buf, offset)? as usize,
                bytes::read_u16(buf, offset + 2)? as usize,
            ),
            ChipEncoding::Packed => {
                let raw = bytes::read_u16(buf, offset)?;
                if raw == 0 {
                    return Ok(None);
                }
                ((raw & 0x1ff) as usize, (raw >> 9) as usize)
            }
        };
        Ok(rom::ChipCode::from_usize(code).map(|code| Chip {
            id,
            code: code.as_char(),
        }))
    }

    fn write(self, buf: &mut [u8], offset: usize, chip: Option<&Chip>) -> Result<(), Error> {
        let (id, code) = match chip {
            Some(chip) => (
                chip.id,
                rom::ChipCode::from_char(chip.code)
                    .ok_or_else(|| Error::format(format!("invalid chip code: {:?}", chip.code)))? as usize,
            ),
            None => match self {
                ChipEncoding::Packed => return bytes::write_u16(buf, offset, 0),
                _ => (0, 0xff),
            },
        };
        match self {
            ChipEncoding::Bytes => {
                bytes::write_u8(buf, offset, u8::try_from(id).map_err(|_| invalid_chip_id(id))?)?;
                bytes::write_u8(buf, offset + 1, code as u8)
            }
            ChipEncoding::Wide => {
                bytes::write_u16(buf, offset, u16::try_from(id).map_err(|_| invalid_chip_id(id))?)?;
                bytes::write_u16(buf, offset + 2, code as u16)
            }
            ChipEncoding::Packed => {
                if id == 0 || id > 0x1ff {
                    return Err(invalid_chip_id(id));
                }
                bytes::write_u16(buf, offset, id as u16 | (code as u16) << 9)
            }
        }
    }
}

fn invalid_chip_id(id: usize) -> Error {
    Error::format(format!("chip id {} cannot be stored", id))
}

#[derive(Clone, Copy, Debug)]
pub enum RegularChip {
    None,
    /// One byte per folder holding the slot index, or 0xff for none.
    InPlace(Position),
    /// One byte per folder; the regular chip is moved to slot 0 and the byte is 0xff when there is none.
    FirstOnly(Position),
}

#[derive(Debug)]
pub struct FolderLayout {
    pub count: FolderCount,
    pub chips: Position,
    /// The folder belongs to the navi selected by the byte at this position.
    pub per_navi: Option<Position>,
    pub encoding: ChipEncoding,
    pub equipped: Option<Position>,
    pub regular: RegularChip,
    pub tags: Option<Position>,
    pub packs: Option<Position>,
}

#[derive(Debug)]
pub struct NavicustLayout {
    pub parts: Position,
    pub count: usize,
    pub col: usize,
    pub row: usize,
    pub rot: usize,
    pub compressed: usize,
    pub tiles: Position,
    pub width: usize,
    pub height: usize,
    pub command_line: usize,
    pub has_out_of_bounds: bool,
}

pub const NAVICUST_PART_SIZE: usize = 8;

#[derive(Debug)]
pub enum ModcardRebuild {
    /// `loaded[id] = source[id] ^ (key or 0xff)` for every card id.
    Loaded {
        loaded: Position,
        source: Position,
        count: usize,
    },
    /// `dst[i] = src[i] ^ key`.
    Mirror { dst: Position, src: Position, len: usize },
}

#[derive(Debug)]
pub enum ModcardLayout {
    /// Seven slots, each holding an enabled id or, 7 bytes later, a disabled id.
    Slots4 { slots: Position, count: usize },
    Count56 {
        count: Position,
        slots: Position,
        rebuild: ModcardRebuild,
    },
}

pub const MODCARD4_SLOTS: usize = 7;

#[derive(Debug)]
pub struct NaviLayout {
    pub current: Position,
    pub stats: Position,
    pub stats_stride: usize,
    pub regular_memory: usize,
    pub base_hp: usize,
    pub current_hp: usize,
    pub max_hp: usize,
}

#[derive(Debug, Default)]
pub struct Layout {
    pub folder: Option<FolderLayout>,
    pub navicust: Option<NavicustLayout>,
    pub modcards: Option<ModcardLayout>,
    pub navi: Option<NaviLayout>,
}

#[derive(Clone, Debug, std::hash::Hash, Eq, PartialEq)]
pub struct Chip {
    pub id: usize,
    pub code: char,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Modcard {
    pub id: usize,
    pub enabled: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Problem {
    TooMuchHp { base_hp: u16 },
    TooMuchRegularMemory { regular_memory: u8 },
    RegularChipOutOfRange { folder: usize, index: usize },
}

pub const MAX_BASE_HP: u16 = 1000;
pub const MAX_REGULAR_MEMORY: u8 = 50;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum State {
    Clean,
    Dirty(std::collections::BTreeSet<DirtyReason>),
}

/// A raw save bound to the cartridge it belongs to.
pub struct Editor {
    format: &'static Format,
    variant: &'static Variant,
    buf: Vec<u8>,
    shift: usize,
    assets: rom::Assets,
    state: State,
}

impl Editor {
    /// Wraps a raw save. The checksum is not validated here: use [`sniff_raw`] for that.
    pub fn new(raw: Vec<u8>, rom_name: &[u8], assets: rom::Assets) -> Result<Self, Error> {
        let (format, variant) =
            find_variant(rom_name).ok_or_else(|| Error::UnknownRom(String::from_utf8_lossy(rom_name).into_owned()))?;
        format.check_size(&raw)?;
        let shift = format.shift(&raw)?;
        let marker = format.marker(&raw, shift)?;
        if !marker.variants.iter().any(|v| v.rom_name == variant.rom_name) {
            return Err(Error::UnrecognizedGameMarker(marker.name.to_vec()));
        }

        Ok(Self {
            format,
            variant,
            buf: raw,
            shift,
            assets,
            state: State::Clean,
        })
    }

    /// Decodes `rom` and wraps `raw` with it. Text follows the ROM's region unless `language` is given.
    pub fn open(raw: Vec<u8>, rom: Vec<u8>, language: Option<rom::Language>) -> Result<Self, Error> {
        let info = rom::RomInfo::read(&rom)?;
        if info.game().is_none() {
            log::warn!(
                "{} is not a known dump (crc32 {:08x}), continuing anyway",
                info.name_lossy(),
                info.crc32
            );
        }
        let table = crate::game::rom_table(&info.name).ok_or_else(|| Error::UnknownRom(info.name_lossy()))?;
        let language = language.unwrap_or_else(|| rom::Language::for_region(region_of(&info.name)));
        let assets = rom::Assets::load(table, table.charset(language), rom)?;
        Self::new(raw, &info.name, assets)
    }

    pub fn format(&self) -> &'static Format {
        self.format
    }

    pub fn rom_name(&self) -> &'static [u8; 16] {
        self.variant.rom_name
    }

    pub fn region(&self) -> tango_gamedb::Region {
        region_of(self.variant.rom_name)
    }

    pub fn assets(&self) -> &rom::Assets {
        &self.assets
    }

    pub fn shift(&self) -> usize {
        self.shift
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn as_raw(&self) -> &[u8] {
        &self.buf
    }

    pub fn checksum(&self) -> Result<u32, Error> {
        self.format.stored_checksum(&self.buf, self.shift)
    }

    pub fn compute_checksum(&self) -> Result<u32, Error> {
        self.format.compute_checksum(&self.buf, self.shift, self.variant)
    }

    pub fn rebuild_checksum(&mut self) -> Result<(), Error> {
        let checksum = self.compute_checksum()?;
        bytes::write_u32(&mut self.buf, self.shift + self.format.checksum_offset, checksum)
    }

    /// Recomputes the navicust tiles and the modcard region, then the checksum over the result.
    ///
    /// Fails with [`Error::Unsupported`] and changes nothing when placements were edited but the editor has no navicust
    /// data to project them with.
    pub fn rebuild(&mut self) -> Result<(), Error> {
        self.rebuild_navicust()?;
        self.rebuild_modcards()?;
        self.rebuild_checksum()?;
        self.state = State::Clean;
        log::debug!(
            "rebuilt {} save for {}",
            self.format.name,
            String::from_utf8_lossy(self.variant.rom_name)
        );
        Ok(())
    }

    fn rebuild_navicust(&mut self) -> Result<(), Error> {
        if self.variant.layout.navicust.is_some() && self.assets.num_navicust_parts() == (0, 0) {
            // Without part shapes every placement would project to nothing and wipe the stored tiles.
            if let State::Dirty(reasons) = &self.state {
                if reasons.contains(&DirtyReason::Navicust) {
                    return Err(Error::Unsupported("navicust rebuild without navicust data"));
                }
            }
            log::warn!("no navicust data loaded, keeping the stored navicust tiles");
            return Ok(());
        }

        let view = if let Some(view) = self.navicust() {
            view
        } else {
            return Ok(());
        };
        let tiles = navicust::materialized_to_wram(&view.materialize());
        let offset = self.offset(view.layout.tiles)?;
        bytes::slice_mut(&mut self.buf, offset, tiles.len())?.copy_from_slice(&tiles);
        Ok(())
    }

    fn rebuild_modcards(&mut self) -> Result<(), Error> {
        let variant = self.variant;
        let (count, slots, rebuild) = match &variant.layout.modcards {
            Some(ModcardLayout::Count56 { count, slots, rebuild }) => (*count, *slots, rebuild),
            _ => return Ok(()),
        };
        let key = variant.modcard_key;
        match *rebuild {
            ModcardRebuild::Loaded { loaded, source, count: n } => {
                let loaded = self.offset(loaded)?;
                let source = self.offset(source)?;
                for id in 1..n {
                    let v = bytes::read_u8(&self.buf, source + id)?;
                    bytes::write_u8(&mut self.buf, loaded + id, v ^ 0xff)?;
                }
                let count = bytes::read_u8(&self.buf, self.offset(count)?)? as usize;
                let slots = self.offset(slots)?;
                for slot in 0..count {
                    let id = (bytes::read_u8(&self.buf, slots + slot)? & 0x7f) as usize;
                    let v = bytes::read_u8(&self.buf, source + id)?;
                    bytes::write_u8(&mut self.buf, loaded + id, v ^ key)?;
                }
            }
            ModcardRebuild::Mirror { dst, src, len } => {
                let dst = self.offset(dst)?;
                let src = self.offset(src)?;
                for i in 0..len {
                    let v = bytes::read_u8(&self.buf, src + i)?;
                    bytes::write_u8(&mut self.buf, dst + i, v ^ key)?;
                }
            }
        }
        Ok(())
    }

    /// The bytes to persist. Refuses while the checksum is stale or derived state needs a rebuild.
    pub fn get_raw_buffer_for_save(&self) -> Result<&[u8], Error> {
        let actual = self.checksum()?;
        let computed = self.compute_checksum()?;
        if actual != computed {
            return Err(Error::ChecksumMismatch {
                actual,
                expected: vec![computed],
            });
        }
        if let State::Dirty(reasons) = &self.state {
            return Err(Error::StaleDerivedState(reasons.iter().copied().collect()));
        }
        Ok(&self.buf)
    }

    pub fn to_dump(&self) -> Result<Vec<u8>, Error> {
        self.format.raw_to_dump(self.get_raw_buffer_for_save()?)
    }

    fn mark_dirty(&mut self, reason: DirtyReason) {
        match &mut self.state {
            State::Clean => {
                self.state = State::Dirty(std::iter::once(reason).collect());
            }
            State::Dirty(reasons) => {
                reasons.insert(reason);
            }
        }
    }

    fn offset(&self, pos: Position) -> Result<usize, Error> {
        Ok(match pos {
            Position::Absolute(offset) => offset,
            Position::Shifted(offset) => self.shift + offset,
            Position::NaviStats(offset) => self.navi_stats_offset()? + offset,
        })
    }

    fn navi_stats_offset(&self) -> Result<usize, Error> {
        let layout = self.variant.layout.navi.as_ref().ok_or(Error::Unsupported("navi stats"))?;
        let navi = bytes::read_u8(&self.buf, self.offset(layout.current)?)?;
        Ok(self.offset(layout.stats)? + if navi == 0 { 0 } else { layout.stats_stride })
    }

    fn read_u8(&self, pos: Position, index: usize) -> Result<u8, Error> {
        bytes::read_u8(&self.buf, self.offset(pos)? + index)
    }

    fn write_u8(&mut self, pos: Position, index: usize, v: u8) -> Result<(), Error> {
        let offset = self.offset(pos)? + index;
        bytes::write_u8(&mut self.buf, offset, v)
    }

    pub fn folder(&self) -> Option<FolderView<'_>> {
        let variant = self.variant;
        let layout = variant.layout.folder.as_ref()?;
        Some(FolderView { editor: self, layout })
    }

    pub fn folder_mut(&mut self) -> Option<FolderViewMut<'_>> {
        let variant = self.variant;
        let layout = variant.layout.folder.as_ref()?;
        Some(FolderViewMut { editor: self, layout })
    }

    pub fn navicust(&self) -> Option<NavicustView<'_>> {
        let variant = self.variant;
        let layout = variant.layout.navicust.as_ref()?;
        Some(NavicustView { editor: self, layout })
    }

    pub fn navicust_mut(&mut self) -> Option<NavicustViewMut<'_>> {
        let variant = self.variant;
        let layout = variant.layout.navicust.as_ref()?;
        Some(NavicustViewMut { editor: self, layout })
    }

    pub fn modcards(&self) -> Option<ModcardsView<'_>> {
        let variant = self.variant;
        Some(match variant.layout.modcards.as_ref()? {
            ModcardLayout::Slots4 { slots, count } => ModcardsView::Modcard4s(Modcard4sView {
                editor: self,
                slots: *slots,
                num_ids: *count,
            }),
            ModcardLayout::Count56 { count, slots, .. } => ModcardsView::Modcard56s(Modcard56sView {
                editor: self,
                count: *count,
                slots: *slots,
            }),
        })
    }

    pub fn modcards_mut(&mut self) -> Option<ModcardsViewMut<'_>> {
        let variant = self.variant;
        Some(match variant.layout.modcards.as_ref()? {
            ModcardLayout::Slots4 { slots, count } => ModcardsViewMut::Modcard4s(Modcard4sViewMut {
                slots: *slots,
                num_ids: *count,
                editor: self,
            }),
            ModcardLayout::Count56 { count, slots, .. } => ModcardsViewMut::Modcard56s(Modcard56sViewMut {
                count: *count,
                slots: *slots,
                editor: self,
            }),
        })
    }

    pub fn navi(&self) -> Option<NaviView<'_>> {
        let variant = self.variant;
        let layout = variant.layout.navi.as_ref()?;
        Some(NaviView { editor: self, layout })
    }

    /// Values the game would never produce on its own.
    pub fn problems(&self) -> Result<Vec<Problem>, Error> {
        let navi = self.navi().ok_or(Error::Unsupported("legality checks"))?;
        let mut problems = vec![];
        let base_hp = navi.base_hp()?;
        if base_hp > MAX_BASE_HP {
            problems.push(Problem::TooMuchHp { base_hp });
        }
        let regular_memory = navi.regular_memory()?;
        if regular_memory > MAX_REGULAR_MEMORY {
            problems.push(Problem::TooMuchRegularMemory { regular_memory });
        }
        if let Some(folder) = self.folder() {
            for folder_index in 0..folder.num_folders() {
                match folder.regular_chip_index(folder_index) {
                    Some(index) if index >= FOLDER_SIZE => problems.push(Problem::RegularChipOutOfRange {
                        folder: folder_index,
                        index,
                    }),
                    _ => {}
                }
            }
        }
        Ok(problems)
    }
}

/// Japanese cartridges end their name with `J`.
pub fn region_of(rom_name: &[u8]) -> tango_gamedb::Region {
    if rom_name.last() == Some(&b'J') {
        tango_gamedb::Region::JP
    } else {
        tango_gamedb::Region::US
    }
}

fn check_index(what: &'static str, index: usize, count: usize) -> Result<(), Error> {
    if index >= count {
        return Err(Error::IndexOutOfRange { what, index, count });
    }
    Ok(())
}

pub struct FolderView<'a> {
    editor: &'a Editor,
    layout: &'static FolderLayout,
}

impl<'a> FolderView<'a> {
    pub fn num_folders(&self) -> usize {
        folder_count(self.editor, self.layout)
    }

    pub fn equipped_folder_index(&self) -> usize {
        self.layout
            .equipped
            .and_then(|pos| self.editor.read_u8(pos, 0).ok())
            .map(|v| v as usize)
            .unwrap_or(0)
    }

    pub fn chip(&self, folder_index: usize, chip_index: usize) -> Option<Chip> {
        let offset = chip_offset(self.editor, self.layout, folder_index, chip_index).ok()?;
        self.layout.encoding.read(&self.editor.buf, offset).ok()?
    }

    pub fn is_regular_chip_in_place(&self) -> bool {
        matches!(self.layout.regular, RegularChip::InPlace(_))
    }

    pub fn regular_chip_index(&self, folder_index: usize) -> Option<usize> {
        if folder_index >= self.num_folders() {
            return None;
        }
        match self.layout.regular {
            RegularChip::None => None,
            // Out of range values are passed through and reported by `Editor::problems`.
            RegularChip::InPlace(pos) => match self.editor.read_u8(pos, folder_index).ok()? {
                0xff => None,
                idx => Some(idx as usize),
            },
            RegularChip::FirstOnly(pos) => {
                if self.editor.read_u8(pos, folder_index).ok()? == 0xff {
                    None
                } else {
                    Some(0)
                }
            }
        }
    }

    pub fn tag_chip_indexes(&self, folder_index: usize) -> Option<[usize; 2]> {
        if folder_index >= self.num_folders() {
            return None;
        }
        let pos = self.layout.tags?;
        let idx1 = self.editor.read_u8(pos, folder_index * 2).ok()?;
        let idx2 = self.editor.read_u8(pos, folder_index * 2 + 1).ok()?;
        if idx1 == 0xff || idx2 == 0xff {
            None
        } else {
            Some([idx1 as usize, idx2 as usize])
        }
    }

    /// How many copies of chip `id` with its `variant`-th code are in the pack.
    pub fn pack_count(&self, id: usize, variant: usize) -> Option<usize> {
        let pos = self.layout.packs?;
        if variant >= 0xc {
            return None;
        }
        self.editor.read_u8(pos, (id * 0xc) | variant).ok().map(|v| v as usize)
    }
}

fn folder_count(editor: &Editor, layout: &FolderLayout) -> usize {
    match layout.count {
        FolderCount::Fixed(n) => n,
        FolderCount::At(pos) => editor.read_u8(pos, 0).map(|v| v as usize).unwrap_or(0),
    }
}

fn chip_offset(editor: &Editor, layout: &FolderLayout, folder_index: usize, chip_index: usize) -> Result<usize, Error> {
    check_index("folder", folder_index, folder_count(editor, layout))?;
    check_index("chip", chip_index, FOLDER_SIZE)?;
    let stride = FOLDER_SIZE * layout.encoding.size();
    let folder_index = match layout.per_navi {
        Some(pos) => editor.read_u8(pos, 0)? as usize,
        None => folder_index,
    };
    Ok(editor.offset(layout.chips)? + folder_index * stride + chip_index * layout.encoding.size())
}

pub struct FolderViewMut<'a> {
    editor: &'a mut Editor,
    layout: &'static FolderLayout,
}

impl<'a> FolderViewMut<'a> {
    pub fn as_view(&self) -> FolderView<'_> {
        FolderView {
            editor: self.editor,
            layout: self.layout,
        }
    }

    pub fn set_equipped_folder(&mut self, folder_index: usize) -> Result<(), Error> {
        check_index("folder", folder_index, folder_count(self.editor, self.layout))?;
        let pos = self.layout.equipped.ok_or(Error::Unsupported("equipped folder"))?;
        self.editor.write_u8(pos, 0, folder_index as u8)
    }

    pub fn set_chip(&mut self, folder_index: usize, chip_index: usize, chip: Option<&Chip>) -> Result<(), Error> {
        let offset = chip_offset(self.editor, self.layout, folder_index, chip_index)?;
        self.layout.encoding.write(&mut self.editor.buf, offset, chip)
    }

    /// Passing `None` clears the regular chip.
    pub fn set_regular_chip_index(&mut self, folder_index: usize, chip_index: Option<usize>) -> Result<(), Error> {
        check_index("folder", folder_index, folder_count(self.editor, self.layout))?;
        if let Some(chip_index) = chip_index {
            check_index("chip", chip_index, FOLDER_SIZE)?;
        }
        match self.layout.regular {
            RegularChip::None => Err(Error::Unsupported("regular chips")),
            RegularChip::InPlace(pos) => self
                .editor
                .write_u8(pos, folder_index, chip_index.map(|v| v as u8).unwrap_or(0xff)),
            RegularChip::FirstOnly(pos) => {
                let chip_index = if let Some(chip_index) = chip_index {
                    chip_index
                } else {
                    return self.editor.write_u8(pos, folder_index, 0xff);
                };
                // The regular chip has to be the first in the folder.
                if chip_index != 0 {
                    let a = chip_offset(self.editor, self.layout, folder_index, 0)?;
                    let b = chip_offset(self.editor, self.layout, folder_index, chip_index)?;
                    let size = self.layout.encoding.size();
                    let first = bytes::slice(&self.editor.buf, a, size)?.to_vec();
                    self.editor.buf.copy_within(b..b + size, a);
                    bytes::slice_mut(&mut self.editor.buf, b, size)?.copy_from_slice(&first);
                }
                self.editor.write_u8(pos, folder_index, 0)
            }
        }
    }

    pub fn set_tag_chip_indexes(&mut self, folder_index: usize, chip_indexes: Option<[usize; 2]>) -> Result<(), Error> {
        check_index("folder", folder_index, folder_count(self.editor, self.layout))?;
        let pos = self.layout.tags.ok_or(Error::Unsupported("tag chips"))?;
        let [idx1, idx2] = match chip_indexes {
            Some(indexes) => {
                for idx in indexes {
                    check_index("chip", idx, FOLDER_SIZE)?;
                }
                indexes.map(|v| v as u8)
            }
            None => [0xff, 0xff],
        };
        self.editor.write_u8(pos, folder_index * 2, idx1)?;
        self.editor.write_u8(pos, folder_index * 2 + 1, idx2)
    }

    pub fn set_pack_count(&mut self, id: usize, variant: usize, count: u8) -> Result<(), Error> {
        let pos = self.layout.packs.ok_or(Error::Unsupported("chip packs"))?;
        check_index("chip code", variant, 0xc)?;
        self.editor.write_u8(pos, (id * 0xc) | variant, count)
    }
}

pub struct NavicustView<'a> {
    editor: &'a Editor,
    layout: &'static NavicustLayout,
}

impl<'a> NavicustView<'a> {
    pub fn width(&self) -> usize {
        self.layout.width
    }

    pub fn height(&self) -> usize {
        self.layout.height
    }

    pub fn count(&self) -> usize {
        self.layout.count
    }

    pub fn command_line(&self) -> usize {
        self.layout.command_line
    }

    pub fn has_out_of_bounds(&self) -> bool {
        self.layout.has_out_of_bounds
    }

    fn part_offset(&self, i: usize) -> Result<usize, Error> {
        check_index("navicust part", i, self.layout.count)?;
        Ok(self.editor.offset(self.layout.parts)? + i * NAVICUST_PART_SIZE)
    }

    pub fn navicust_part(&self, i: usize) -> Option<navicust::Placement> {
        let offset = self.part_offset(i).ok()?;
        let buf = bytes::slice(&self.editor.buf, offset, NAVICUST_PART_SIZE).ok()?;
        let raw = buf[0];
        if raw == 0 {
            return None;
        }
        Some(navicust::Placement {
            id: (raw >> 2) as usize,
            variant: (raw & 3) as usize,
            col: buf[self.layout.col],
            row: buf[self.layout.row],
            rot: buf[self.layout.rot],
            compressed: buf[self.layout.compressed] != 0,
        })
    }

    pub fn placements(&self) -> Vec<Option<navicust::Placement>> {
        (0..self.layout.count).map(|i| self.navicust_part(i)).collect()
    }

    /// The tile grid as currently stored in the save.
    pub fn materialized(&self) -> Result<navicust::MaterializedNavicust, Error> {
        let offset = self.editor.offset(self.layout.tiles)?;
        let len = self.layout.width * self.layout.height;
        navicust::materialized_from_wram(
            bytes::slice(&self.editor.buf, offset, len)?,
            [self.layout.height, self.layout.width],
        )
    }

    /// The tile grid recomputed from the placements.
    pub fn materialize(&self) -> navicust::MaterializedNavicust {
        navicust::materialize(
            &self.placements(),
            [self.layout.height, self.layout.width],
            &self.editor.assets,
        )
    }
}

pub struct NavicustViewMut<'a> {
    editor: &'a mut Editor,
    layout: &'static NavicustLayout,
}

impl<'a> NavicustViewMut<'a> {
    pub fn as_view(&self) -> NavicustView<'_> {
        NavicustView {
            editor: self.editor,
            layout: self.layout,
        }
    }

    pub fn set_navicust_part(&mut self, i: usize, part: Option<&navicust::Placement>) -> Result<(), Error> {
        let offset = self.as_view().part_offset(i)?;
        let raw = match part {
            Some(part) => {
                if part.variant > 3 || part.id > 0x3f {
                    return Err(Error::format(format!(
                        "navicust part {}:{} cannot be stored",
                        part.id, part.variant
                    )));
                }
                (part.id << 2 | part.variant) as u8
            }
            None => 0,
        };

        let buf = bytes::slice_mut(&mut self.editor.buf, offset, NAVICUST_PART_SIZE)?;
        buf.fill(0);
        if let Some(part) = part {
            buf[0] = raw;
            buf[self.layout.col] = part.col;
            buf[self.layout.row] = part.row;
            buf[self.layout.rot] = part.rot;
            buf[self.layout.compressed] = part.compressed as u8;
        }
        self.editor.mark_dirty(DirtyReason::Navicust);
        Ok(())
    }
}

pub enum ModcardsView<'a> {
    Modcard4s(Modcard4sView<'a>),
    Modcard56s(Modcard56sView<'a>),
}

pub enum ModcardsViewMut<'a> {
    Modcard4s(Modcard4sViewMut<'a>),
    Modcard56s(Modcard56sViewMut<'a>),
}

pub struct Modcard4sView<'a> {
    editor: &'a Editor,
    slots: Position,
    num_ids: usize,
}

impl<'a> Modcard4sView<'a> {
    pub fn modcard(&self, slot: usize) -> Option<Modcard> {
        if slot >= MODCARD4_SLOTS {
            return None;
        }
        let id = self.editor.read_u8(self.slots, slot).ok()? as usize;
        if id < self.num_ids {
            return Some(Modcard { id, enabled: true });
        }
        let id = self.editor.read_u8(self.slots, MODCARD4_SLOTS + slot).ok()? as usize;
        if id < self.num_ids {
            return Some(Modcard { id, enabled: false });
        }
        None
    }
}

pub struct Modcard4sViewMut<'a> {
    editor: &'a mut Editor,
    slots: Position,
    num_ids: usize,
}

impl<'a> Modcard4sViewMut<'a> {
    pub fn as_view(&self) -> Modcard4sView<'_> {
        Modcard4sView {
            editor: self.editor,
            slots: self.slots,
            num_ids: self.num_ids,
        }
    }

    pub fn set_modcard(&mut self, slot: usize, modcard: Option<&Modcard>) -> Result<(), Error> {
        check_index("modcard slot", slot, MODCARD4_SLOTS)?;
        if let Some(modcard) = modcard {
            if modcard.id == 0 {
                return Err(Error::format("modcard 0 cannot be installed"));
            }
            check_index("modcard", modcard.id, self.num_ids)?;
        }
        self.editor.write_u8(self.slots, slot, 0xff)?;
        self.editor.write_u8(self.slots, MODCARD4_SLOTS + slot, 0xff)?;
        if let Some(modcard) = modcard {
            let index = if modcard.enabled { slot } else { MODCARD4_SLOTS + slot };
            self.editor.write_u8(self.slots, index, modcard.id as u8)?;
        }
        Ok(())
    }
}

pub struct Modcard56sView<'a> {
    editor: &'a Editor,
    count: Position,
    slots: Position,
}

impl<'a> Modcard56sView<'a> {
    pub fn count(&self) -> usize {
        self.editor.read_u8(self.count, 0).map(|v| v as usize).unwrap_or(0)
    }

    pub fn modcard(&self, slot: usize) -> Option<Modcard> {
        if slot >= self.count() {
            return None;
        }
        let raw = self.editor.read_u8(self.slots, slot).ok()?;
        Some(Modcard {
            id: (raw & 0x7f) as usize,
            enabled: raw & 0x80 == 0,
        })
    }
}

pub struct Modcard56sViewMut<'a> {
    editor: &'a mut Editor,
    count: Position,
    slots: Position,
}

impl<'a> Modcard56sViewMut<'a> {
    pub fn as_view(&self) -> Modcard56sView<'_> {
        Modcard56sView {
            editor: self.editor,
            count: self.count,
            slots: self.slots,
        }
    }

    pub fn set_count(&mut self, count: usize) -> Result<(), Error> {
        let count = u8::try_from(count).map_err(|_| Error::format(format!("too many modcards: {}", count)))?;
        self.editor.write_u8(self.count, 0, count)?;
        self.editor.mark_dirty(DirtyReason::Modcards);
        Ok(())
    }

    pub fn set_modcard(&mut self, slot: usize, modcard: &Modcard) -> Result<(), Error> {
        check_index("modcard slot", slot, self.as_view().count())?;
        check_index("modcard", modcard.id, 0x80)?;
        let raw = modcard.id as u8 | if modcard.enabled { 0 } else { 0x80 };
        self.editor.write_u8(self.slots, slot, raw)?;
        self.editor.mark_dirty(DirtyReason::Modcards);
        Ok(())
    }
}

pub struct NaviView<'a> {
    editor: &'a Editor,
    layout: &'static NaviLayout,
}

impl<'a> NaviView<'a> {
    pub fn navi(&self) -> Result<usize, Error> {
        Ok(self.editor.read_u8(self.layout.current, 0)? as usize)
    }

    fn stat_u16(&self, offset: usize) -> Result<u16, Error> {
        bytes::read_u16(&self.editor.buf, self.editor.navi_stats_offset()? + offset)
    }

    pub fn regular_memory(&self) -> Result<u8, Error> {
        bytes::read_u8(
            &self.editor.buf,
            self.editor.navi_stats_offset()? + self.layout.regular_memory,
        )
    }

    pub fn base_hp(&self) -> Result<u16, Error> {
        self.stat_u16(self.layout.base_hp)
    }

    pub fn current_hp(&self) -> Result<u16, Error> {
        self.stat_u16(self.layout.current_hp)
    }

    pub fn max_hp(&self) -> Result<u16, Error> {
        self.stat_u16(self.layout.max_hp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static TEST_LAYOUT: Layout = Layout {
        folder: None,
        navicust: None,
        modcards: None,
        navi: None,
    };

    static TEST_VARIANT_A: Variant = Variant {
        rom_name: b"TESTGAME____TSTJ",
        checksum_seed: 0x16,
        add_first_byte: false,
        modcard_key: 0,
        layout: &TEST_LAYOUT,
    };

    static TEST_VARIANT_B: Variant = Variant {
        rom_name: b"TESTGAME____TSTE",
        checksum_seed: 0x16,
        add_first_byte: true,
        modcard_key: 0,
        layout: &TEST_LAYOUT,
    };

    static TEST_FORMAT: Format = Format {
        name: "test",
        dump_start: 0x10,
        raw_size: 0x80,
        mask_offset: Some(0x20),
        shift_offset: Some(0x24),
        marker_offset: 0x30,
        checksum_offset: 0x28,
        sum_start: 1,
        markers: &[Marker {
            name: b"TEST GAME 2001010100",
            variants: &[&TEST_VARIANT_A, &TEST_VARIANT_B],
        }],
    };

    fn raw(shift: usize) -> Vec<u8> {
        let mut raw = vec![0u8; TEST_FORMAT.raw_size];
        for (i, b) in raw.iter_mut().enumerate() {
            *b = (i * 7) as u8;
        }
        raw[0] = 0x33;
        bytes::write_u32(&mut raw, 0x20, 0x5a).unwrap();
        bytes::write_u32(&mut raw, 0x24, shift as u32).unwrap();
        raw[shift + 0x30..shift + 0x44].copy_from_slice(b"TEST GAME 2001010100");
        raw
    }

    fn with_checksum(mut raw: Vec<u8>, variant: &Variant) -> Vec<u8> {
        let shift = TEST_FORMAT.shift(&raw).unwrap();
        let checksum = TEST_FORMAT.compute_checksum(&raw, shift, variant).unwrap();
        bytes::write_u32(&mut raw, shift + 0x28, checksum).unwrap();
        raw
    }

    #[test]
    fn test_mask_is_self_inverse() {
        let original = raw(0);
        let mut buf = original.clone();
        mask(&mut buf, 0x20).unwrap();
        assert_ne!(buf, original);
        assert_eq!(bytes::read_u32(&buf, 0x20).unwrap(), 0x5a);
        assert_eq!(buf[0x21], original[0x21]);
        assert_eq!(buf[0], original[0] ^ 0x5a);
        mask(&mut buf, 0x20).unwrap();
        assert_eq!(buf, original);
    }

    #[test]
    fn test_raw_checksum_skips_field() {
        let mut buf = vec![1u8; 16];
        buf[4..8].copy_from_slice(&[0xff; 4]);
        assert_eq!(compute_raw_checksum(&buf, 0, 4).unwrap(), 12);
        assert_eq!(compute_raw_checksum(&buf, 1, 4).unwrap(), 11);
        assert!(compute_raw_checksum(&buf, 0, 14).is_err());
    }

    #[test]
    fn test_dump_roundtrip() {
        let raw = raw(8);
        let dump = TEST_FORMAT.raw_to_dump(&raw).unwrap();
        assert_eq!(dump.len(), DUMP_SIZE);
        assert!(dump[..0x10].iter().all(|v| *v == 0));
        assert_eq!(TEST_FORMAT.dump_to_raw(&dump).unwrap(), raw);
        assert_eq!(TEST_FORMAT.raw_to_dump(&TEST_FORMAT.dump_to_raw(&dump).unwrap()).unwrap(), dump);

        // Anything an emulator left outside the save window is not carried over.
        let mut padded = dump.clone();
        padded[0] = 0xaa;
        padded[DUMP_SIZE - 1] = 0xbb;
        assert_eq!(TEST_FORMAT.raw_to_dump(&TEST_FORMAT.dump_to_raw(&padded).unwrap()).unwrap(), dump);
    }

    #[test]
    fn test_dump_too_short() {
        assert!(matches!(
            TEST_FORMAT.dump_to_raw(&[0u8; 0x40]),
            Err(Error::SizeMismatch {
                expected: 0x90,
                actual: 0x40
            })
        ));
        assert!(matches!(
            TEST_FORMAT.raw_to_dump(&[0u8; 0x40]),
            Err(Error::SizeMismatch { .. })
        ));
    }

    #[test]
    fn test_invalid_shift() {
        let mut buf = raw(0);
        bytes::write_u32(&mut buf, 0x24, 2).unwrap();
        assert!(matches!(TEST_FORMAT.shift(&buf), Err(Error::InvalidShift(2))));
        bytes::write_u32(&mut buf, 0x24, 0x200).unwrap();
        assert!(matches!(TEST_FORMAT.shift(&buf), Err(Error::InvalidShift(0x200))));
    }

    #[test]
    fn test_sniff_first_byte_disambiguates() {
        let buf = with_checksum(raw(4), &TEST_VARIANT_A);
        assert_eq!(TEST_FORMAT.sniff(&buf).unwrap(), vec![b"TESTGAME____TSTJ"]);

        let buf = with_checksum(raw(4), &TEST_VARIANT_B);
        assert_eq!(TEST_FORMAT.sniff(&buf).unwrap(), vec![b"TESTGAME____TSTE"]);

        // With a zero first byte both formulas agree.
        let mut buf = raw(4);
        buf[0] = 0;
        let buf = with_checksum(buf, &TEST_VARIANT_A);
        assert_eq!(
            TEST_FORMAT.sniff(&buf).unwrap(),
            vec![b"TESTGAME____TSTJ", b"TESTGAME____TSTE"]
        );
    }

    #[test]
    fn test_sniff_errors() {
        assert!(matches!(
            TEST_FORMAT.sniff(&[0u8; 0x10]),
            Err(Error::SizeMismatch { .. })
        ));

        let mut buf = with_checksum(raw(0), &TEST_VARIANT_A);
        buf[0x30] = b'X';
        assert!(matches!(TEST_FORMAT.sniff(&buf), Err(Error::UnrecognizedGameMarker(_))));

        let mut buf = with_checksum(raw(0), &TEST_VARIANT_A);
        let checksum = bytes::read_u32(&buf, 0x28).unwrap();
        bytes::write_u32(&mut buf, 0x28, checksum + 1).unwrap();
        match TEST_FORMAT.sniff(&buf) {
            Err(Error::ChecksumMismatch { actual, expected }) => {
                assert_eq!(actual, checksum + 1);
                assert!(expected.contains(&checksum));
            }
            r => panic!("unexpected result: {:?}", r),
        }
    }

    #[test]
    fn test_region_of() {
        assert_eq!(region_of(b"ROCKEXE6_GXXBR5J"), tango_gamedb::Region::JP);
        assert_eq!(region_of(b"MEGAMAN6_GXXBR5E"), tango_gamedb::Region::US);
        assert_eq!(region_of(b"MEGAMAN6_GXXBR5P"), tango_gamedb::Region::US);
    }

    // Part 1 only. Uncompressed it is an L of three cells in the top left of a 3x3 box, compressed it keeps the top
    // two.
    fn ncp_assets() -> rom::Assets {
        let mut uncompressed = ndarray::Array2::from_elem((3, 3), false);
        uncompressed[[0, 0]] = true;
        uncompressed[[0, 1]] = true;
        uncompressed[[1, 0]] = true;
        let mut compressed = ndarray::Array2::from_elem((3, 3), false);
        compressed[[0, 0]] = true;
        compressed[[0, 1]] = true;

        rom::Assets {
            navicust_parts: vec![
                None,
                Some(rom::NavicustPart {
                    name: "L".to_string(),
                    color: None,
                    is_solid: true,
                    compressed_bitmap: compressed,
                    uncompressed_bitmap: uncompressed,
                }),
            ],
            navicust_part_variants: 1,
            ..Default::default()
        }
    }

    fn place(editor: &mut Editor, i: usize, col: u8, row: u8, rot: u8, compressed: bool) {
        editor
            .navicust_mut()
            .unwrap()
            .set_navicust_part(
                i,
                Some(&navicust::Placement {
                    id: 1,
                    variant: 0,
                    col,
                    row,
                    rot,
                    compressed,
                }),
            )
            .unwrap();
    }

    #[test]
    fn test_rebuild_writes_navicust_tiles() {
        let format = &crate::game::bn6::save::FORMAT;
        let mut raw = vec![0u8; format.raw_size];
        raw[0x1c70..0x1c70 + 20].copy_from_slice(b"REXE6 F 20060110a US");
        let mut editor = Editor::new(raw, tango_gamedb::BR6E_00.rom_name, ncp_assets()).unwrap();

        place(&mut editor, 0, 2, 1, 0, false);
        place(&mut editor, 2, 5, 5, 0, true);
        editor.rebuild().unwrap();
        assert_eq!(editor.state(), &State::Clean);

        let mut expected = [0u8; 49];
        expected[1] = 1;
        expected[2] = 1;
        expected[7 + 1] = 1;
        expected[4 * 7 + 4] = 3;
        expected[4 * 7 + 5] = 3;
        let buf = editor.get_raw_buffer_for_save().unwrap();
        assert_eq!(&buf[0x414c..0x414c + 49], &expected[..]);
        assert_eq!(buf[0x414c + 49], 0);
    }

    #[test]
    fn test_rebuild_writes_shifted_navicust_tiles() {
        let format = &crate::game::bn4::save::FORMAT;
        let shift = 0x10;
        let mut raw = vec![0u8; format.raw_size];
        bytes::write_u32(&mut raw, 0x1550, shift as u32).unwrap();
        raw[shift + 0x2208..shift + 0x2208 + 20].copy_from_slice(b"ROCKMANEXE4 20031022");
        let mut editor = Editor::new(raw, tango_gamedb::B4WJ_01.rom_name, ncp_assets()).unwrap();

        // A quarter turn clockwise puts the L's cells at (0, 1), (0, 2) and (1, 2) of its box.
        place(&mut editor, 0, 2, 2, 1, false);
        // Compressed and turned, centered on the corner: only (1, 2) of its box lands on the grid, at (0, 1).
        place(&mut editor, 1, 0, 0, 1, true);
        editor.rebuild().unwrap();

        let mut expected = [0u8; 25];
        expected[5 + 2] = 1;
        expected[5 + 3] = 1;
        expected[2 * 5 + 3] = 1;
        expected[1] = 2;
        let buf = editor.get_raw_buffer_for_save().unwrap();
        assert_eq!(&buf[shift + 0x4540..shift + 0x4540 + 25], &expected[..]);
        assert!(buf[0x4540..shift + 0x4540].iter().all(|v| *v == 0));
        assert_eq!(editor.navicust().unwrap().materialized().unwrap(), editor.navicust().unwrap().materialize());
    }
}
