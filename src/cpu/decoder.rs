//! Désassemblage linéaire du flux d'instructions
//!
//! Parcourt le tampon de l'offset 0 jusqu'à sa fin et produit une
//! ligne par instruction décodée (ou par erreur récupérée). La zone
//! d'en-tête (0x104-0x14F) n'est jamais traitée comme du code: quand
//! le curseur atteint 0x104, il saute directement à 0x150. Le
//! décodage ne s'interrompt jamais: un opcode inconnu produit une
//! ligne de commentaire et le curseur avance d'un octet.

use log::trace;

use super::opcodes::{OperandKind, OPCODES};
use super::opcodes_cb::OPCODES_CB;

/// Octet de préfixe vers la table étendue
pub const CB_PREFIX: u8 = 0xCB;

/// Ligne de désassemblage produite par le décodeur
///
/// Consommée immédiatement par l'écrivain de sortie, jamais retenue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisassemblyLine {
    /// Offset de l'instruction dans l'image
    pub address: u32,
    /// Texte assembleur de l'instruction, opérande substitué
    pub text: String,
    /// Octets consommés par cette ligne
    pub bytes_consumed: u8,
}

/// Désassembleur en flux sur un tampon emprunté
///
/// Le curseur avance de façon monotone, à la seule exception du saut
/// d'en-tête. L'itération se termine quand le curseur atteint la fin
/// du tampon.
pub struct Disassembler<'a> {
    data: &'a [u8],
    cursor: usize,
}

impl<'a> Disassembler<'a> {
    /// Crée un désassembleur au début du tampon
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, cursor: 0 }
    }

    /// Ligne d'attribution conventionnelle émise en tête de listing
    pub fn attribution() -> String {
        format!("; Disassembled with gameboy-dasm-rust v{}", crate::VERSION)
    }

    /// Voie de récupération: ligne de commentaire, avance d'un octet
    ///
    /// Couvre les 11 opcodes non définis et les opérandes tronqués en
    /// fin de tampon. Jamais une erreur: le décodage reprend à l'octet
    /// suivant.
    fn misread(&mut self, address: u32, opcode: u8) -> DisassemblyLine {
        trace!("opcode non décodable {:#04x} à {:#06x}", opcode, address);
        self.cursor += 1;
        DisassemblyLine {
            address,
            text: format!("; misread instruction ${:02x} at ${:04x}", opcode, address),
            bytes_consumed: 1,
        }
    }

    /// Substitue l'opérande dans le gabarit du mnémonique
    ///
    /// Mot 16 bits: les deux octets sont imprimés dans leur ordre en
    /// mémoire (octet à cursor+1 d'abord), pas comme la valeur
    /// petit-boutiste calculée.
    fn format_mnemonic(&self, mnemonic: &str, operand: OperandKind) -> String {
        match operand {
            OperandKind::None => mnemonic.to_string(),
            OperandKind::Byte | OperandKind::Relative => {
                let byte = self.data[self.cursor + 1];
                mnemonic.replace("{}", &format!("{:02x}", byte))
            }
            OperandKind::Word => {
                let first = self.data[self.cursor + 1];
                let second = self.data[self.cursor + 2];
                mnemonic.replace("{}", &format!("{:02x}{:02x}", first, second))
            }
        }
    }
}

impl Iterator for Disassembler<'_> {
    type Item = DisassemblyLine;

    fn next(&mut self) -> Option<DisassemblyLine> {
        // Saut d'en-tête: se déclenche au plus une fois, le curseur
        // ne faisant que croître
        if self.cursor == crate::LOGO_START {
            trace!("saut de la zone d'en-tête vers {:#06x}", crate::HEADER_END);
            self.cursor = crate::HEADER_END;
        }

        if self.cursor >= self.data.len() {
            return None;
        }

        let address = self.cursor as u32;
        let opcode = self.data[self.cursor];

        // Préfixe 0xCB: le second octet sélectionne l'entrée de la
        // table étendue; deux octets consommés quelle que soit
        // l'instruction étendue
        if opcode == CB_PREFIX {
            if self.cursor + 2 > self.data.len() {
                return Some(self.misread(address, opcode));
            }
            let extended = self.data[self.cursor + 1];
            self.cursor += 2;
            return Some(DisassemblyLine {
                address,
                text: OPCODES_CB[extended as usize].to_string(),
                bytes_consumed: 2,
            });
        }

        match &OPCODES[opcode as usize] {
            Some(entry) => {
                if self.cursor + entry.length as usize > self.data.len() {
                    // Opérande tronqué en fin de tampon
                    return Some(self.misread(address, opcode));
                }
                let text = self.format_mnemonic(entry.mnemonic, entry.operand);
                self.cursor += entry.length as usize;
                Some(DisassemblyLine {
                    address,
                    text,
                    bytes_consumed: entry.length,
                })
            }
            None => Some(self.misread(address, opcode)),
        }
    }
}
