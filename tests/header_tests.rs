//! Tests d'intégration de l'analyse d'en-tête
//!
//! Les images sont synthétisées en mémoire avec un logo conforme et
//! des checksums recalculés, comme le ferait un outil de production de
//! cartouches.

use anyhow::Result;
use std::fs;
use tempfile::TempDir;

use gameboy_dasm_rust::rom::validation::{
    global_checksum, header_checksum, NINTENDO_LOGO,
};
use gameboy_dasm_rust::{
    CartridgeType, DestinationCode, HeaderRecord, RamSize, RomError, RomImage,
    RomSize,
};

/// Construit une image de 32 KiB au profil d'une cartouche valide
fn build_test_rom(title: &[u8]) -> Vec<u8> {
    let mut data = vec![0u8; 0x8000];
    data[0x104..0x134].copy_from_slice(&NINTENDO_LOGO);
    data[0x134..0x134 + title.len()].copy_from_slice(title);
    data[0x143] = 0x00; // pas de support CGB
    data[0x146] = 0x00; // pas de support SGB
    data[0x147] = 0x01; // MBC1
    data[0x148] = 0x00; // 32 KByte
    data[0x149] = 0x00; // pas de RAM
    data[0x14A] = 0x01; // hors Japon
    data[0x14B] = 0x33;
    data[0x14C] = 0x00;
    data[0x14D] = header_checksum(&data);
    let global = global_checksum(&data);
    data[0x14E] = (global >> 8) as u8;
    data[0x14F] = (global & 0xFF) as u8;
    data
}

#[test]
fn test_parse_synthesized_rom() -> Result<()> {
    let image = RomImage::from_bytes(build_test_rom(b"ZELDA"));
    let header = image.parse_header()?;

    assert!(header.logo_valid);
    assert_eq!(header.title, "ZELDA");
    assert_eq!(header.cartridge_type, Some(CartridgeType::Mbc1));
    assert_eq!(header.rom_size, Some(RomSize::Kb32));
    assert_eq!(header.ram_size, Some(RamSize::None));
    assert_eq!(header.destination_code, Some(DestinationCode::NonJapanese));
    assert_eq!(header.old_licensee_code, 0x33);
    assert_eq!(header.mask_rom_version, 0x00);
    assert!(header.header_checksum_valid);
    assert!(header.global_checksum_valid);
    Ok(())
}

#[test]
fn test_load_rom_from_file() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("test.gb");
    fs::write(&path, build_test_rom(b"FILETEST"))?;

    let image = RomImage::from_file(&path)?;
    assert_eq!(image.len(), 0x8000);

    let header = image.parse_header()?;
    assert_eq!(header.title, "FILETEST");
    assert!(header.header_checksum_valid);
    Ok(())
}

#[test]
fn test_undersized_image_is_rejected() {
    let image = RomImage::from_bytes(vec![0u8; 0x120]);
    assert!(matches!(
        image.parse_header(),
        Err(RomError::TooShort { len: 0x120, min: 0x150 })
    ));
}

#[test]
fn test_corrupted_logo_detected() -> Result<()> {
    let mut data = build_test_rom(b"CORRUPT");
    data[0x120] ^= 0x80;
    let header = HeaderRecord::parse(&data)?;
    assert!(!header.logo_valid);
    Ok(())
}

#[test]
fn test_corrupted_body_fails_global_checksum_only() -> Result<()> {
    // Une corruption hors en-tête ne touche que le checksum global
    let mut data = build_test_rom(b"BODY");
    data[0x4000] = data[0x4000].wrapping_add(1);
    let header = HeaderRecord::parse(&data)?;
    assert!(header.header_checksum_valid);
    assert!(!header.global_checksum_valid);
    Ok(())
}

#[test]
fn test_corrupted_header_fails_header_checksum() -> Result<()> {
    let mut data = build_test_rom(b"HDR");
    data[0x140] = data[0x140].wrapping_add(1);
    let header = HeaderRecord::parse(&data)?;
    assert!(!header.header_checksum_valid);
    Ok(())
}

#[test]
fn test_header_is_pure_and_repeatable() -> Result<()> {
    let image = RomImage::from_bytes(build_test_rom(b"PURE"));
    let first = image.parse_header()?;
    let second = image.parse_header()?;
    assert_eq!(first.title, second.title);
    assert_eq!(first.header_checksum_valid, second.header_checksum_valid);
    assert_eq!(first.global_checksum_valid, second.global_checksum_valid);
    Ok(())
}
