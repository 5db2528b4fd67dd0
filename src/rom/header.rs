//! Analyse de l'en-tête de cartouche (octets 0x100-0x14F)
//!
//! L'en-tête décrit l'identité de la cartouche (titre, codes éditeur),
//! sa configuration mémoire (contrôleur de banque, tailles ROM/RAM) et
//! porte deux checksums d'intégrité. L'analyse est une fonction pure du
//! tampon: calculée une seule fois par image, sans effet de bord.

use log::debug;
use std::fmt;

use super::validation;
use super::RomError;

/// Valeur sentinelle pour les codes éditeur/fabricant vides
const NO_CODE: &str = "No Code";

/// Type de cartouche (contrôleur de banque + périphériques), octet 0x147
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartridgeType {
    RomOnly,
    Mbc1,
    Mbc1Ram,
    Mbc1RamBattery,
    Mbc2,
    Mbc2Battery,
    RomRam,
    RomRamBattery,
    Mmm01,
    Mmm01Ram,
    Mmm01RamBattery,
    Mbc3TimerBattery,
    Mbc3TimerRamBattery,
    Mbc3,
    Mbc3Ram,
    Mbc3RamBattery,
    Mbc4,
    Mbc4Ram,
    Mbc4RamBattery,
    Mbc5,
    Mbc5Ram,
    Mbc5RamBattery,
    Mbc5Rumble,
    Mbc5RumbleRam,
    Mbc5RumbleRamBattery,
    PocketCamera,
    BandaiTama5,
    HuC3,
    HuC1RamBattery,
}

impl CartridgeType {
    /// Résout l'octet 0x147 vers le type de cartouche
    ///
    /// Les valeurs réservées retournent `None`: une cartouche avec un
    /// code inconnu reste représentable, ce n'est pas une erreur.
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            0x00 => Some(Self::RomOnly),
            0x01 => Some(Self::Mbc1),
            0x02 => Some(Self::Mbc1Ram),
            0x03 => Some(Self::Mbc1RamBattery),
            0x05 => Some(Self::Mbc2),
            0x06 => Some(Self::Mbc2Battery),
            0x08 => Some(Self::RomRam),
            0x09 => Some(Self::RomRamBattery),
            0x0B => Some(Self::Mmm01),
            0x0C => Some(Self::Mmm01Ram),
            0x0D => Some(Self::Mmm01RamBattery),
            0x0F => Some(Self::Mbc3TimerBattery),
            0x10 => Some(Self::Mbc3TimerRamBattery),
            0x11 => Some(Self::Mbc3),
            0x12 => Some(Self::Mbc3Ram),
            0x13 => Some(Self::Mbc3RamBattery),
            0x15 => Some(Self::Mbc4),
            0x16 => Some(Self::Mbc4Ram),
            0x17 => Some(Self::Mbc4RamBattery),
            0x19 => Some(Self::Mbc5),
            0x1A => Some(Self::Mbc5Ram),
            0x1B => Some(Self::Mbc5RamBattery),
            0x1C => Some(Self::Mbc5Rumble),
            0x1D => Some(Self::Mbc5RumbleRam),
            0x1E => Some(Self::Mbc5RumbleRamBattery),
            0xFC => Some(Self::PocketCamera),
            0xFD => Some(Self::BandaiTama5),
            0xFE => Some(Self::HuC3),
            0xFF => Some(Self::HuC1RamBattery),
            _ => None,
        }
    }
}

impl fmt::Display for CartridgeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::RomOnly => "ROM ONLY",
            Self::Mbc1 => "MBC1",
            Self::Mbc1Ram => "MBC1+RAM",
            Self::Mbc1RamBattery => "MBC1+RAM+BATTERY",
            Self::Mbc2 => "MBC2",
            Self::Mbc2Battery => "MBC2+BATTERY",
            Self::RomRam => "ROM+RAM",
            Self::RomRamBattery => "ROM+RAM+BATTERY",
            Self::Mmm01 => "MMM01",
            Self::Mmm01Ram => "MMM01+RAM",
            Self::Mmm01RamBattery => "MMM01+RAM+BATTERY",
            Self::Mbc3TimerBattery => "MBC3+TIMER+BATTERY",
            Self::Mbc3TimerRamBattery => "MBC3+TIMER+RAM+BATTERY",
            Self::Mbc3 => "MBC3",
            Self::Mbc3Ram => "MBC3+RAM",
            Self::Mbc3RamBattery => "MBC3+RAM+BATTERY",
            Self::Mbc4 => "MBC4",
            Self::Mbc4Ram => "MBC4+RAM",
            Self::Mbc4RamBattery => "MBC4+RAM+BATTERY",
            Self::Mbc5 => "MBC5",
            Self::Mbc5Ram => "MBC5+RAM",
            Self::Mbc5RamBattery => "MBC5+RAM+BATTERY",
            Self::Mbc5Rumble => "MBC5+RUMBLE",
            Self::Mbc5RumbleRam => "MBC5+RUMBLE+RAM",
            Self::Mbc5RumbleRamBattery => "MBC5+RUMBLE+RAM+BATTERY",
            Self::PocketCamera => "POCKET CAMERA",
            Self::BandaiTama5 => "BANDAI TAMA5",
            Self::HuC3 => "HuC3",
            Self::HuC1RamBattery => "HuC1+RAM+BATTERY",
        };
        write!(f, "{}", name)
    }
}

/// Taille physique de la ROM, octet 0x148
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RomSize {
    Kb32,
    Kb64,
    Kb128,
    Kb256,
    Kb512,
    Mb1,
    Mb2,
    Mb4,
    Mb1_1,
    Mb1_2,
    Mb1_5,
}

impl RomSize {
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            0x00 => Some(Self::Kb32),
            0x01 => Some(Self::Kb64),
            0x02 => Some(Self::Kb128),
            0x03 => Some(Self::Kb256),
            0x04 => Some(Self::Kb512),
            0x05 => Some(Self::Mb1),
            0x06 => Some(Self::Mb2),
            0x07 => Some(Self::Mb4),
            0x52 => Some(Self::Mb1_1),
            0x53 => Some(Self::Mb1_2),
            0x54 => Some(Self::Mb1_5),
            _ => None,
        }
    }
}

impl fmt::Display for RomSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Kb32 => "32 KByte",
            Self::Kb64 => "64 KByte",
            Self::Kb128 => "128 KByte",
            Self::Kb256 => "256 KByte",
            Self::Kb512 => "512 KByte",
            Self::Mb1 => "1 MByte",
            Self::Mb2 => "2 MByte",
            Self::Mb4 => "4 MByte",
            Self::Mb1_1 => "1.1 MByte",
            Self::Mb1_2 => "1.2 MByte",
            Self::Mb1_5 => "1.5 MByte",
        };
        write!(f, "{}", name)
    }
}

/// Taille de la RAM embarquée sur la cartouche, octet 0x149
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RamSize {
    None,
    Kb2,
    Kb8,
    Kb32,
}

impl RamSize {
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            0x00 => Some(Self::None),
            0x01 => Some(Self::Kb2),
            0x02 => Some(Self::Kb8),
            0x03 => Some(Self::Kb32),
            _ => None,
        }
    }
}

impl fmt::Display for RamSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::None => "None",
            Self::Kb2 => "2 KByte",
            Self::Kb8 => "8 KByte",
            Self::Kb32 => "32 KByte",
        };
        write!(f, "{}", name)
    }
}

/// Code de destination commerciale, octet 0x14A
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DestinationCode {
    Japan,
    NonJapanese,
}

impl DestinationCode {
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            0x00 => Some(Self::Japan),
            0x01 => Some(Self::NonJapanese),
            _ => None,
        }
    }
}

impl fmt::Display for DestinationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Japan => "Japan",
            Self::NonJapanese => "Non-Japanese",
        };
        write!(f, "{}", name)
    }
}

/// En-tête analysé d'une cartouche
#[derive(Debug, Clone)]
pub struct HeaderRecord {
    /// Logo Nintendo conforme aux octets [0x104, 0x134)
    pub logo_valid: bool,

    /// Titre du jeu, octets [0x134, 0x142), NUL filtrés
    pub title: String,

    /// Code fabricant, octets [0x13F, 0x142)
    pub manufacturer_code: String,

    /// Drapeau Game Boy Color, octet 0x143
    pub cgb_flag: u8,

    /// Nouveau code éditeur, octets [0x144, 0x145)
    pub new_licensee_code: String,

    /// Drapeau Super Game Boy, octet 0x146
    pub sgb_flag: u8,

    /// Type de cartouche résolu depuis l'octet 0x147
    pub cartridge_type: Option<CartridgeType>,

    /// Taille ROM résolue depuis l'octet 0x148
    pub rom_size: Option<RomSize>,

    /// Taille RAM résolue depuis l'octet 0x149
    pub ram_size: Option<RamSize>,

    /// Destination résolue depuis l'octet 0x14A
    pub destination_code: Option<DestinationCode>,

    /// Ancien code éditeur, octet 0x14B
    pub old_licensee_code: u8,

    /// Numéro de version du masque ROM, octet 0x14C
    pub mask_rom_version: u8,

    /// Checksum d'en-tête conforme à l'octet 0x14D
    pub header_checksum_valid: bool,

    /// Checksum global conforme au mot à 0x14E-0x14F
    pub global_checksum_valid: bool,
}

/// Convertit une plage d'octets en chaîne ASCII
///
/// Chaque octet est pris comme point de code; les octets NUL sont
/// filtrés, pas traités comme terminateurs: un octet non nul après un
/// NUL intercalé est conservé.
fn range_to_string(data: &[u8], start: usize, end: usize) -> String {
    data[start..end]
        .iter()
        .filter(|&&b| b != 0x00)
        .map(|&b| b as char)
        .collect()
}

/// Comme `range_to_string`, avec la sentinelle "No Code" si vide
fn range_to_code(data: &[u8], start: usize, end: usize) -> String {
    let code = range_to_string(data, start, end);
    if code.is_empty() {
        NO_CODE.to_string()
    } else {
        code
    }
}

impl HeaderRecord {
    /// Analyse l'en-tête d'une image d'au moins 0x150 octets
    pub fn parse(data: &[u8]) -> Result<Self, RomError> {
        if data.len() < crate::MIN_ROM_SIZE {
            return Err(RomError::TooShort {
                len: data.len(),
                min: crate::MIN_ROM_SIZE,
            });
        }

        let record = Self {
            logo_valid: validation::logo_matches(data),
            title: range_to_string(data, 0x134, 0x142),
            manufacturer_code: range_to_code(data, 0x13F, 0x142),
            cgb_flag: data[0x143],
            // Plage d'un seul octet, reproduite telle quelle de l'outil
            // d'origine (la documentation matérielle donne deux octets)
            new_licensee_code: range_to_code(data, 0x144, 0x145),
            sgb_flag: data[0x146],
            cartridge_type: CartridgeType::from_byte(data[0x147]),
            rom_size: RomSize::from_byte(data[0x148]),
            ram_size: RamSize::from_byte(data[0x149]),
            destination_code: DestinationCode::from_byte(data[0x14A]),
            old_licensee_code: data[0x14B],
            mask_rom_version: data[0x14C],
            header_checksum_valid: validation::header_checksum_valid(data),
            global_checksum_valid: validation::global_checksum_valid(data),
        };

        debug!(
            "en-tête analysé: titre={:?}, logo={}, checksums={}/{}",
            record.title,
            record.logo_valid,
            record.header_checksum_valid,
            record.global_checksum_valid
        );

        Ok(record)
    }

    /// Génère un rapport lisible de tous les champs d'en-tête
    pub fn report(&self) -> String {
        fn opt<T: fmt::Display>(value: &Option<T>) -> String {
            match value {
                Some(v) => v.to_string(),
                None => "none".to_string(),
            }
        }

        let mut report = String::new();
        report.push_str("=== EN-TETE CARTOUCHE ===\n");
        report.push_str(&format!("Titre:                {}\n", self.title));
        report.push_str(&format!("Code fabricant:       {}\n", self.manufacturer_code));
        report.push_str(&format!("Drapeau CGB:          {:#04x}\n", self.cgb_flag));
        report.push_str(&format!("Nouveau code éditeur: {}\n", self.new_licensee_code));
        report.push_str(&format!("Drapeau SGB:          {:#04x}\n", self.sgb_flag));
        report.push_str(&format!("Type de cartouche:    {}\n", opt(&self.cartridge_type)));
        report.push_str(&format!("Taille ROM:           {}\n", opt(&self.rom_size)));
        report.push_str(&format!("Taille RAM:           {}\n", opt(&self.ram_size)));
        report.push_str(&format!("Destination:          {}\n", opt(&self.destination_code)));
        report.push_str(&format!("Ancien code éditeur:  {:#04x}\n", self.old_licensee_code));
        report.push_str(&format!("Version masque ROM:   {:#04x}\n", self.mask_rom_version));
        report.push_str(&format!("Logo Nintendo:        {}\n", if self.logo_valid { "ok" } else { "invalide" }));
        report.push_str(&format!(
            "Checksum en-tête:     {}\n",
            if self.header_checksum_valid { "ok" } else { "invalide" }
        ));
        report.push_str(&format!(
            "Checksum global:      {}\n",
            if self.global_checksum_valid { "ok" } else { "invalide" }
        ));
        report
    }
}
