//! Gameboy Dasm Rust - Désassembleur de cartouches Game Boy
//!
//! Cette bibliothèque décode une image de cartouche Game Boy (Sharp
//! LR35902) en deux artefacts: l'en-tête structuré de la cartouche
//! (identité, configuration mémoire, checksums) et un listing
//! désassemblé du code machine.

pub mod config;
pub mod cpu;
pub mod rom;

pub use config::*;
pub use cpu::*;
pub use rom::*;

/// Version de l'outil
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Taille minimale d'une image pour contenir l'en-tête complet
pub const MIN_ROM_SIZE: usize = 0x150;

/// Début de la zone d'en-tête (point d'entrée de la cartouche)
pub const HEADER_START: usize = 0x100;

/// Fin exclusive de la zone d'en-tête
pub const HEADER_END: usize = 0x150;

/// Position du logo Nintendo dans l'image
pub const LOGO_START: usize = 0x104;
