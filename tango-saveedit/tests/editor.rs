mod common;

use tango_saveedit::{game, navicust, rom, save, DirtyReason, Editor, Error};

fn bn6_us_raw() -> Vec<u8> {
    let format = &game::bn6::save::FORMAT;
    let mut raw = common::raw_save(format, b"REXE6 F 20060110a US", &game::bn6::save::BR6E_00);
    raw[0x1c09] = 2;
    common::fix_checksum(format, &mut raw, &game::bn6::save::BR6E_00);
    raw
}

fn open(raw: Vec<u8>, variant: &save::Variant) -> Editor {
    Editor::new(raw, variant.rom_name, rom::Assets::default()).unwrap()
}

#[test]
fn test_folder_edits() {
    let mut editor = open(bn6_us_raw(), &game::bn6::save::BR6E_00);
    assert_eq!(editor.state(), &save::State::Clean);

    let folder = editor.folder().unwrap();
    assert_eq!(folder.num_folders(), 2);
    assert_eq!(folder.chip(0, 0), None);
    assert_eq!(folder.chip(2, 0), None);
    assert!(folder.is_regular_chip_in_place());

    let chip = save::Chip { id: 100, code: 'C' };
    let mut folder = editor.folder_mut().unwrap();
    folder.set_chip(1, 3, Some(&chip)).unwrap();
    folder.set_equipped_folder(1).unwrap();
    folder.set_regular_chip_index(1, Some(3)).unwrap();
    folder.set_tag_chip_indexes(1, Some([3, 4])).unwrap();
    folder.set_pack_count(100, 2, 4).unwrap();
    assert!(matches!(
        folder.set_chip(2, 0, Some(&chip)),
        Err(Error::IndexOutOfRange { what: "folder", index: 2, count: 2 })
    ));
    assert!(matches!(
        folder.set_chip(0, 30, None),
        Err(Error::IndexOutOfRange { what: "chip", .. })
    ));

    let folder = editor.folder().unwrap();
    assert_eq!(folder.chip(1, 3), Some(chip));
    assert_eq!(folder.equipped_folder_index(), 1);
    assert_eq!(folder.regular_chip_index(1), Some(3));
    assert_eq!(folder.tag_chip_indexes(1), Some([3, 4]));
    assert_eq!(folder.pack_count(100, 2), Some(4));

    let offset = 0x2178 + 30 * 2 + 3 * 2;
    assert_eq!(&editor.as_raw()[offset..offset + 2], &(100u16 | 2 << 9).to_le_bytes());

    // Folder edits only invalidate the checksum.
    assert_eq!(editor.state(), &save::State::Clean);
    assert!(matches!(
        editor.get_raw_buffer_for_save(),
        Err(Error::ChecksumMismatch { .. })
    ));
    editor.rebuild().unwrap();
    let raw = editor.get_raw_buffer_for_save().unwrap();
    assert_eq!(
        tango_saveedit::sniff_raw(raw).unwrap().rom_names,
        vec![tango_gamedb::BR6E_00.rom_name]
    );
}

#[test]
fn test_regular_chip_moves_to_front() {
    let format = &game::bn4::save::FORMAT;
    let variant = &game::bn4::save::B4WJ_01;
    let mut editor = open(common::raw_save(format, b"ROCKMANEXE4 20031022", variant), variant);

    let first = save::Chip { id: 1, code: 'A' };
    let regular = save::Chip { id: 2, code: '*' };
    let mut folder = editor.folder_mut().unwrap();
    folder.set_chip(0, 0, Some(&first)).unwrap();
    folder.set_chip(0, 5, Some(&regular)).unwrap();
    folder.set_regular_chip_index(0, Some(5)).unwrap();

    let folder = editor.folder().unwrap();
    assert!(!folder.is_regular_chip_in_place());
    assert_eq!(folder.chip(0, 0), Some(regular));
    assert_eq!(folder.chip(0, 5), Some(first));
    assert_eq!(folder.regular_chip_index(0), Some(0));

    editor.folder_mut().unwrap().set_regular_chip_index(0, None).unwrap();
    assert_eq!(editor.folder().unwrap().regular_chip_index(0), None);
}

#[test]
fn test_navicust_needs_rebuild() {
    let format = &game::bn6::save::FORMAT;
    let variant = &game::bn6::save::BR6E_00;
    let mut raw = bn6_us_raw();
    raw[0x414c..0x414c + 3].copy_from_slice(&[1, 1, 1]);
    common::fix_checksum(format, &mut raw, variant);
    let mut editor = open(raw, variant);

    let navicust = editor.navicust().unwrap();
    assert_eq!((navicust.width(), navicust.height()), (7, 7));
    assert_eq!(navicust.command_line(), 3);
    assert!(navicust.has_out_of_bounds());
    assert_eq!(navicust.materialized().unwrap()[[0, 2]], Some(0));

    let placement = navicust::Placement {
        id: 3,
        variant: 1,
        col: 2,
        row: 3,
        rot: 0,
        compressed: true,
    };
    editor
        .navicust_mut()
        .unwrap()
        .set_navicust_part(0, Some(&placement))
        .unwrap();
    assert_eq!(editor.navicust().unwrap().navicust_part(0), Some(placement));
    assert_eq!(
        editor.state(),
        &save::State::Dirty(std::iter::once(DirtyReason::Navicust).collect())
    );

    editor.rebuild_checksum().unwrap();
    match editor.get_raw_buffer_for_save() {
        Err(Error::StaleDerivedState(reasons)) => assert_eq!(reasons, vec![DirtyReason::Navicust]),
        r => panic!("unexpected result: {:?}", r.map(|buf| buf.len())),
    }

    // No navicust data was loaded, so the edit cannot be projected and the save is left alone.
    let before = editor.as_raw().to_vec();
    assert!(matches!(editor.rebuild(), Err(Error::Unsupported(_))));
    assert_eq!(editor.as_raw(), &before[..]);
    assert_eq!(
        editor.state(),
        &save::State::Dirty(std::iter::once(DirtyReason::Navicust).collect())
    );
    assert_eq!(editor.navicust().unwrap().materialized().unwrap()[[0, 2]], Some(0));

    assert!(matches!(
        editor.navicust_mut().unwrap().set_navicust_part(30, None),
        Err(Error::IndexOutOfRange { .. })
    ));
}

#[test]
fn test_rebuild_keeps_tiles_without_navicust_data() {
    let format = &game::bn6::save::FORMAT;
    let variant = &game::bn6::save::BR6E_00;
    let mut raw = bn6_us_raw();
    raw[0x414c..0x414c + 3].copy_from_slice(&[1, 1, 1]);
    common::fix_checksum(format, &mut raw, variant);
    let mut editor = open(raw, variant);

    editor.rebuild().unwrap();
    assert_eq!(&editor.as_raw()[0x414c..0x414c + 4], &[1, 1, 1, 0]);
    assert!(editor.get_raw_buffer_for_save().is_ok());
}

#[test]
fn test_loaded_modcards_rebuild() {
    let format = &game::bn6::save::FORMAT;
    let variant = &game::bn6::save::BR5J_00;
    let mut raw = common::raw_save(format, b"REXE6 G 20050924a JP", variant);
    for id in 0..118 {
        raw[0x06bf + id] = id as u8;
    }
    common::fix_checksum(format, &mut raw, variant);
    let mut editor = open(raw, variant);

    match editor.modcards_mut().unwrap() {
        save::ModcardsViewMut::Modcard56s(mut modcards) => {
            modcards.set_count(2).unwrap();
            modcards.set_modcard(0, &save::Modcard { id: 5, enabled: true }).unwrap();
            modcards.set_modcard(1, &save::Modcard { id: 7, enabled: false }).unwrap();
            assert!(matches!(
                modcards.set_modcard(2, &save::Modcard { id: 9, enabled: true }),
                Err(Error::IndexOutOfRange { .. })
            ));
        }
        _ => panic!("expected count-based modcards"),
    }
    assert_eq!(
        editor.state(),
        &save::State::Dirty(std::iter::once(DirtyReason::Modcards).collect())
    );

    editor.rebuild().unwrap();
    let raw = editor.get_raw_buffer_for_save().unwrap();
    assert_eq!(raw[0x5047 + 5], 5 ^ 0x43);
    assert_eq!(raw[0x5047 + 7], 7 ^ 0x43);
    assert_eq!(raw[0x5047 + 6], 6 ^ 0xff);
    assert_eq!(raw[0x5047], 0);

    match editor.modcards().unwrap() {
        save::ModcardsView::Modcard56s(modcards) => {
            assert_eq!(modcards.count(), 2);
            assert_eq!(modcards.modcard(1), Some(save::Modcard { id: 7, enabled: false }));
            assert_eq!(modcards.modcard(2), None);
        }
        _ => panic!("expected count-based modcards"),
    }
}

#[test]
fn test_mirrored_modcards_rebuild() {
    let format = &game::bn5::save::FORMAT;
    let variant = &game::bn5::save::BRKE_00;
    let mut raw = common::raw_save(format, b"REXE5TOK 20041006 US", variant);
    for i in 0..0x200 {
        raw[0x1220 + i] = i as u8;
    }
    common::fix_checksum(format, &mut raw, variant);
    let mut editor = open(raw, variant);

    match editor.modcards_mut().unwrap() {
        save::ModcardsViewMut::Modcard56s(mut modcards) => modcards.set_count(0).unwrap(),
        _ => panic!("expected count-based modcards"),
    }
    editor.rebuild().unwrap();

    let raw = editor.get_raw_buffer_for_save().unwrap();
    for i in 0..0x200 {
        assert_eq!(raw[0x60dc + i], (i as u8) ^ 0x8d);
    }
}

#[test]
fn test_slot_modcards() {
    let format = &game::bn4::save::FORMAT;
    let variant = &game::bn4::save::B4BE_00;
    let mut raw = common::raw_save(format, b"ROCKMANEXE4 20031022", variant);
    raw[0x464c..0x464c + 14].fill(0xff);
    common::fix_checksum(format, &mut raw, variant);
    let mut editor = open(raw, variant);

    match editor.modcards_mut().unwrap() {
        save::ModcardsViewMut::Modcard4s(mut modcards) => {
            assert_eq!(modcards.as_view().modcard(0), None);
            modcards
                .set_modcard(0, Some(&save::Modcard { id: 12, enabled: false }))
                .unwrap();
            modcards
                .set_modcard(1, Some(&save::Modcard { id: 40, enabled: true }))
                .unwrap();
            assert!(modcards
                .set_modcard(2, Some(&save::Modcard { id: 0, enabled: true }))
                .is_err());
            assert!(matches!(
                modcards.set_modcard(7, None),
                Err(Error::IndexOutOfRange { .. })
            ));
        }
        _ => panic!("expected slot modcards"),
    }

    assert_eq!(editor.as_raw()[0x464c], 0xff);
    assert_eq!(editor.as_raw()[0x464c + 7], 12);
    match editor.modcards().unwrap() {
        save::ModcardsView::Modcard4s(modcards) => {
            assert_eq!(modcards.modcard(0), Some(save::Modcard { id: 12, enabled: false }));
            assert_eq!(modcards.modcard(1), Some(save::Modcard { id: 40, enabled: true }));
            assert_eq!(modcards.modcard(2), None);
        }
        _ => panic!("expected slot modcards"),
    }
}

#[test]
fn test_problems() {
    let format = &game::bn6::save::FORMAT;
    let variant = &game::bn6::save::BR6E_00;
    let mut raw = bn6_us_raw();
    let stats = 0x47cc + 0x64;
    raw[0x1b81] = 1;
    raw[stats + 0x09] = 60;
    raw[stats + 0x3e..stats + 0x40].copy_from_slice(&1200u16.to_le_bytes());
    raw[stats + 0x42..stats + 0x44].copy_from_slice(&1200u16.to_le_bytes());
    raw[stats + 0x2e] = 0xff;
    raw[stats + 0x2e + 1] = 40;
    common::fix_checksum(format, &mut raw, variant);
    let editor = open(raw, variant);

    let navi = editor.navi().unwrap();
    assert_eq!(navi.navi().unwrap(), 1);
    assert_eq!(navi.max_hp().unwrap(), 1200);
    let folder = editor.folder().unwrap();
    assert_eq!(folder.regular_chip_index(0), None);
    assert_eq!(folder.regular_chip_index(1), Some(40));
    assert_eq!(
        editor.problems().unwrap(),
        vec![
            save::Problem::TooMuchHp { base_hp: 1200 },
            save::Problem::TooMuchRegularMemory { regular_memory: 60 },
            save::Problem::RegularChipOutOfRange { folder: 1, index: 40 },
        ]
    );

    let clean = open(bn6_us_raw(), variant);
    assert!(clean.problems().unwrap().is_empty());

    let format = &game::bn4::save::FORMAT;
    let variant = &game::bn4::save::B4WJ_01;
    let editor = open(common::raw_save(format, b"ROCKMANEXE4 20031022", variant), variant);
    assert!(matches!(editor.problems(), Err(Error::Unsupported(_))));
}

#[test]
fn test_new_checks_rom() {
    assert!(matches!(
        Editor::new(bn6_us_raw(), tango_gamedb::BR5J_00.rom_name, rom::Assets::default()),
        Err(Error::UnrecognizedGameMarker(_))
    ));
    assert!(matches!(
        Editor::new(bn6_us_raw(), b"NOT A REAL GAME!", rom::Assets::default()),
        Err(Error::UnknownRom(_))
    ));
    assert!(matches!(
        Editor::new(vec![0; 4], tango_gamedb::BR6E_00.rom_name, rom::Assets::default()),
        Err(Error::SizeMismatch { .. })
    ));
}

#[test]
fn test_to_dump() {
    let editor = open(bn6_us_raw(), &game::bn6::save::BR6E_00);
    assert_eq!(editor.region(), tango_gamedb::Region::US);
    let dump = editor.to_dump().unwrap();
    let sniffed = tango_saveedit::sniff(&dump).unwrap();
    assert_eq!(sniffed.format.name, "bn6");
    assert_eq!(sniffed.rom_names, vec![tango_gamedb::BR6E_00.rom_name]);
}
