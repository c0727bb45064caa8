use clap::Parser;
use std::io::Write;

mod config;

use tango_saveedit::{save, Editor};

#[derive(clap::Parser)]
struct Args {
    /// Path to the config file. Defaults to the platform config directory.
    #[clap(long)]
    config: Option<std::path::PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
pub enum Command {
    /// Identify the game a save belongs to.
    Sniff { save_path: std::path::PathBuf },

    /// Dump folders, navicust and modcards as JSON.
    Info {
        save_path: std::path::PathBuf,
        rom_path: std::path::PathBuf,
    },

    /// Extract the raw save from an SRAM dump.
    ToRaw {
        dump_path: std::path::PathBuf,
        output_path: std::path::PathBuf,
    },

    /// Wrap a raw save into an SRAM dump.
    ToDump {
        raw_path: std::path::PathBuf,
        output_path: std::path::PathBuf,

        /// Save format, e.g. bn6.
        #[clap(long)]
        format: String,
    },

    /// Recompute derived state and the checksum.
    Rebuild {
        save_path: std::path::PathBuf,
        rom_path: std::path::PathBuf,
        output_path: std::path::PathBuf,
    },

    /// List recognized ROMs.
    ScanRoms { path: Option<std::path::PathBuf> },

    /// List recognized saves.
    ScanSaves { path: Option<std::path::PathBuf> },
}

pub fn main() -> Result<(), anyhow::Error> {
    env_logger::Builder::from_default_env()
        .filter(Some("tango_saveedit"), log::LevelFilter::Info)
        .filter(Some("tango_savetool"), log::LevelFilter::Info)
        .init();

    let args = Args::parse();
    let config = config::Config::load_or_default(args.config.as_deref())?;

    match args.command {
        Command::Sniff { save_path } => cmd_sniff(save_path),
        Command::Info { save_path, rom_path } => cmd_info(&config, save_path, rom_path),
        Command::ToRaw { dump_path, output_path } => cmd_to_raw(dump_path, output_path),
        Command::ToDump {
            raw_path,
            output_path,
            format,
        } => cmd_to_dump(raw_path, output_path, format),
        Command::Rebuild {
            save_path,
            rom_path,
            output_path,
        } => cmd_rebuild(&config, save_path, rom_path, output_path),
        Command::ScanRoms { path } => cmd_scan_roms(path.or(config.roms_path)),
        Command::ScanSaves { path } => cmd_scan_saves(path.or(config.saves_path)),
    }
}

fn rom_name_lossy(rom_name: &[u8]) -> String {
    String::from_utf8_lossy(rom_name).into_owned()
}

/// Accepts either an SRAM dump or a raw save.
fn read_save(path: &std::path::Path) -> Result<(save::Sniffed, Vec<u8>), anyhow::Error> {
    let buf = std::fs::read(path)?;
    match tango_saveedit::sniff(&buf) {
        Ok(sniffed) => {
            let raw = sniffed.format.dump_to_raw(&buf)?;
            Ok((sniffed, raw))
        }
        Err(e) => match tango_saveedit::sniff_raw(&buf) {
            Ok(sniffed) => Ok((sniffed, buf)),
            Err(_) => Err(e.into()),
        },
    }
}

fn open_editor(
    config: &config::Config,
    save_path: &std::path::Path,
    rom_path: &std::path::Path,
) -> Result<Editor, anyhow::Error> {
    let (sniffed, raw) = read_save(save_path)?;
    let rom = std::fs::read(rom_path)?;
    let editor = Editor::open(raw, rom, config.language.map(|language| language.into()))?;
    if !sniffed.rom_names.contains(&editor.rom_name()) {
        log::warn!(
            "save does not match {}, expected one of: {}",
            rom_name_lossy(editor.rom_name()),
            sniffed
                .rom_names
                .iter()
                .map(|name| rom_name_lossy(&name[..]))
                .collect::<Vec<_>>()
                .join(", ")
        );
    }
    Ok(editor)
}

fn write_json(v: &impl serde::Serialize) -> Result<(), anyhow::Error> {
    let mut stdout = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, v)?;
    stdout.write_all(b"\n")?;
    Ok(())
}

fn cmd_sniff(save_path: std::path::PathBuf) -> Result<(), anyhow::Error> {
    let (sniffed, _) = read_save(&save_path)?;
    println!("{}", sniffed.format.name);
    for rom_name in sniffed.rom_names {
        let title = tango_gamedb::find_by_rom_name(rom_name)
            .map(|game| game.title)
            .unwrap_or("unknown");
        println!("  {} ({})", rom_name_lossy(rom_name), title);
    }
    Ok(())
}

#[derive(serde::Serialize)]
struct Info {
    format: &'static str,
    rom_name: String,
    checksum: u32,
    folders: Option<Vec<FolderInfo>>,
    navicust: Option<NavicustInfo>,
    modcards: Option<Vec<ModcardInfo>>,
    problems: Vec<String>,
}

#[derive(serde::Serialize)]
struct ChipInfo {
    id: usize,
    name: Option<String>,
    code: char,
}

#[derive(serde::Serialize)]
struct FolderInfo {
    equipped: bool,
    regular_chip: Option<usize>,
    tag_chips: Option<[usize; 2]>,
    chips: Vec<Option<ChipInfo>>,
}

#[derive(serde::Serialize)]
struct NavicustPartInfo {
    id: usize,
    variant: usize,
    name: Option<String>,
    col: u8,
    row: u8,
    rot: u8,
    compressed: bool,
}

#[derive(serde::Serialize)]
struct NavicustInfo {
    width: usize,
    height: usize,
    parts: Vec<Option<NavicustPartInfo>>,
    grid: Vec<Vec<Option<usize>>>,
}

#[derive(serde::Serialize)]
struct ModcardInfo {
    id: usize,
    enabled: bool,
    name: Option<String>,
}

fn folder_info(editor: &Editor) -> Option<Vec<FolderInfo>> {
    let folder = editor.folder()?;
    let assets = editor.assets();
    Some(
        (0..folder.num_folders())
            .map(|i| FolderInfo {
                equipped: folder.equipped_folder_index() == i,
                regular_chip: folder.regular_chip_index(i),
                tag_chips: folder.tag_chip_indexes(i),
                chips: (0..save::FOLDER_SIZE)
                    .map(|j| {
                        folder.chip(i, j).map(|chip| ChipInfo {
                            id: chip.id,
                            name: assets.chip(chip.id).map(|info| info.name.clone()),
                            code: chip.code,
                        })
                    })
                    .collect(),
            })
            .collect(),
    )
}

fn navicust_info(editor: &Editor) -> Option<NavicustInfo> {
    let navicust = editor.navicust()?;
    let assets = editor.assets();
    Some(NavicustInfo {
        width: navicust.width(),
        height: navicust.height(),
        parts: navicust
            .placements()
            .into_iter()
            .map(|placement| {
                placement.map(|placement| NavicustPartInfo {
                    id: placement.id,
                    variant: placement.variant,
                    name: assets
                        .navicust_part(placement.id, placement.variant)
                        .map(|info| info.name.clone()),
                    col: placement.col,
                    row: placement.row,
                    rot: placement.rot,
                    compressed: placement.compressed,
                })
            })
            .collect(),
        grid: navicust
            .materialize()
            .rows()
            .into_iter()
            .map(|row| row.to_vec())
            .collect(),
    })
}

fn modcard_info(editor: &Editor) -> Option<Vec<ModcardInfo>> {
    let assets = editor.assets();
    Some(match editor.modcards()? {
        save::ModcardsView::Modcard4s(modcards) => (0..save::MODCARD4_SLOTS)
            .filter_map(|slot| modcards.modcard(slot))
            .map(|modcard| ModcardInfo {
                id: modcard.id,
                enabled: modcard.enabled,
                name: None,
            })
            .collect(),
        save::ModcardsView::Modcard56s(modcards) => (0..modcards.count())
            .filter_map(|slot| modcards.modcard(slot))
            .map(|modcard| ModcardInfo {
                id: modcard.id,
                enabled: modcard.enabled,
                name: assets.modcard56(modcard.id).map(|info| info.name.clone()),
            })
            .collect(),
    })
}

fn cmd_info(
    config: &config::Config,
    save_path: std::path::PathBuf,
    rom_path: std::path::PathBuf,
) -> Result<(), anyhow::Error> {
    let editor = open_editor(config, &save_path, &rom_path)?;

    let problems = match editor.problems() {
        Ok(problems) => problems
            .into_iter()
            .map(|problem| match problem {
                save::Problem::TooMuchHp { base_hp } => {
                    format!("base hp {} exceeds {}", base_hp, save::MAX_BASE_HP)
                }
                save::Problem::TooMuchRegularMemory { regular_memory } => format!(
                    "regular memory {} exceeds {}",
                    regular_memory,
                    save::MAX_REGULAR_MEMORY
                ),
                save::Problem::RegularChipOutOfRange { folder, index } => {
                    format!("folder {} regular chip slot {} is past the end of the folder", folder, index)
                }
            })
            .collect(),
        Err(tango_saveedit::Error::Unsupported(_)) => vec![],
        Err(e) => return Err(e.into()),
    };

    write_json(&Info {
        format: editor.format().name,
        rom_name: rom_name_lossy(editor.rom_name()),
        checksum: editor.checksum()?,
        folders: folder_info(&editor),
        navicust: navicust_info(&editor),
        modcards: modcard_info(&editor),
        problems,
    })
}

fn cmd_to_raw(dump_path: std::path::PathBuf, output_path: std::path::PathBuf) -> Result<(), anyhow::Error> {
    let dump = std::fs::read(&dump_path)?;
    let sniffed = tango_saveedit::sniff(&dump)?;
    std::fs::write(&output_path, sniffed.format.dump_to_raw(&dump)?)?;
    log::info!("{}: wrote {} raw save", output_path.display(), sniffed.format.name);
    Ok(())
}

fn cmd_to_dump(
    raw_path: std::path::PathBuf,
    output_path: std::path::PathBuf,
    format: String,
) -> Result<(), anyhow::Error> {
    let format =
        tango_saveedit::game::find_format(&format).ok_or_else(|| anyhow::anyhow!("unknown format: {}", format))?;
    let raw = std::fs::read(&raw_path)?;
    if let Err(e) = format.sniff(&raw) {
        log::warn!("{}: not a valid {} save: {}", raw_path.display(), format.name, e);
    }
    std::fs::write(&output_path, format.raw_to_dump(&raw)?)?;
    log::info!("{}: wrote {} dump", output_path.display(), format.name);
    Ok(())
}

fn cmd_rebuild(
    config: &config::Config,
    save_path: std::path::PathBuf,
    rom_path: std::path::PathBuf,
    output_path: std::path::PathBuf,
) -> Result<(), anyhow::Error> {
    let mut editor = open_editor(config, &save_path, &rom_path)?;
    editor.rebuild()?;
    match config.rebuild_output {
        config::RebuildOutput::Dump => std::fs::write(&output_path, editor.to_dump()?)?,
        config::RebuildOutput::Raw => std::fs::write(&output_path, editor.get_raw_buffer_for_save()?)?,
    }
    log::info!("{}: checksum {:08x}", output_path.display(), editor.checksum()?);
    Ok(())
}

fn cmd_scan_roms(path: Option<std::path::PathBuf>) -> Result<(), anyhow::Error> {
    let path = path.ok_or_else(|| anyhow::anyhow!("no roms directory given or configured"))?;
    for scanned in tango_saveedit::scan::scan_roms(&path) {
        println!("{}\t{}", scanned.path.display(), scanned.game.title);
    }
    Ok(())
}

fn cmd_scan_saves(path: Option<std::path::PathBuf>) -> Result<(), anyhow::Error> {
    let path = path.ok_or_else(|| anyhow::anyhow!("no saves directory given or configured"))?;
    for scanned in tango_saveedit::scan::scan_saves(&path) {
        println!(
            "{}\t{}\t{}",
            scanned.path.display(),
            scanned.format.name,
            scanned
                .rom_names
                .iter()
                .map(|name| rom_name_lossy(&name[..]))
                .collect::<Vec<_>>()
                .join(",")
        );
    }
    Ok(())
}
