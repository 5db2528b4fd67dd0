//! Table des opcodes de base du Sharp LR35902
//!
//! Table fermée de 256 entrées indexée par l'octet d'opcode. Les 11
//! opcodes non définis par le processeur (0xD3, 0xDB, 0xDD, 0xE3,
//! 0xE4, 0xEB, 0xEC, 0xED, 0xF4, 0xFC, 0xFD) sont des trous
//! explicites (`None`) que le décodeur traite par sa voie de
//! récupération. 0xCB est le préfixe vers la table étendue et est
//! intercepté avant consultation de cette table.

/// Règle de récupération d'opérande d'une instruction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperandKind {
    /// Aucun octet supplémentaire
    None,
    /// Immédiat 8 bits (d8/a8) à cursor+1
    Byte,
    /// Immédiat 16 bits (d16/a16) à cursor+1 et cursor+2
    Word,
    /// Déplacement relatif signé (r8); même lecture que `Byte`, le
    /// signe reste textuel
    Relative,
}

/// Entrée de la table de base: gabarit de mnémonique, règle
/// d'opérande et longueur totale en octets
#[derive(Debug, Clone, Copy)]
pub struct OpcodeEntry {
    /// Gabarit du mnémonique; `{}` marque la position de l'opérande
    pub mnemonic: &'static str,
    /// Règle de récupération de l'opérande
    pub operand: OperandKind,
    /// Octets consommés par l'instruction (1, 2 ou 3)
    pub length: u8,
}

const fn simple(mnemonic: &'static str) -> Option<OpcodeEntry> {
    Some(OpcodeEntry {
        mnemonic,
        operand: OperandKind::None,
        length: 1,
    })
}

const fn imm8(mnemonic: &'static str) -> Option<OpcodeEntry> {
    Some(OpcodeEntry {
        mnemonic,
        operand: OperandKind::Byte,
        length: 2,
    })
}

const fn imm16(mnemonic: &'static str) -> Option<OpcodeEntry> {
    Some(OpcodeEntry {
        mnemonic,
        operand: OperandKind::Word,
        length: 3,
    })
}

const fn rel8(mnemonic: &'static str) -> Option<OpcodeEntry> {
    Some(OpcodeEntry {
        mnemonic,
        operand: OperandKind::Relative,
        length: 2,
    })
}

/// Table de base, indexée par l'octet d'opcode
pub static OPCODES: [Option<OpcodeEntry>; 256] = [
    simple("nop"),             // 0x00
    imm16("ld BC, ${}"),       // 0x01
    simple("ld [BC], A"),      // 0x02
    simple("inc BC"),          // 0x03
    simple("inc B"),           // 0x04
    simple("dec B"),           // 0x05
    imm8("ld B, ${}"),         // 0x06
    simple("rlca"),            // 0x07
    imm16("ld [${}], SP"),     // 0x08
    simple("add HL, BC"),      // 0x09
    simple("ld A, [BC]"),      // 0x0A
    simple("dec BC"),          // 0x0B
    simple("inc C"),           // 0x0C
    simple("dec C"),           // 0x0D
    imm8("ld C, ${}"),         // 0x0E
    simple("rrca"),            // 0x0F
    simple("stop"),            // 0x10
    imm16("ld DE, ${}"),       // 0x11
    simple("ld [DE], A"),      // 0x12
    simple("inc DE"),          // 0x13
    simple("inc D"),           // 0x14
    simple("dec D"),           // 0x15
    imm8("ld D, ${}"),         // 0x16
    simple("rla"),             // 0x17
    rel8("jr ${}"),            // 0x18
    simple("add HL, DE"),      // 0x19
    simple("ld A, [DE]"),      // 0x1A
    simple("dec DE"),          // 0x1B
    simple("inc E"),           // 0x1C
    simple("dec E"),           // 0x1D
    imm8("ld E, ${}"),         // 0x1E
    simple("rra"),             // 0x1F
    rel8("jr NZ, ${}"),        // 0x20
    imm16("ld HL, ${}"),       // 0x21
    simple("ld [HL+], A"),     // 0x22
    simple("inc HL"),          // 0x23
    simple("inc H"),           // 0x24
    simple("dec H"),           // 0x25
    imm8("ld H, ${}"),         // 0x26
    simple("daa"),             // 0x27
    rel8("jr Z, ${}"),         // 0x28
    simple("add HL, HL"),      // 0x29
    simple("ld A, [HL+]"),     // 0x2A
    simple("dec HL"),          // 0x2B
    simple("inc L"),           // 0x2C
    simple("dec L"),           // 0x2D
    imm8("ld L, ${}"),         // 0x2E
    simple("cpl"),             // 0x2F
    rel8("jr NC, ${}"),        // 0x30
    imm16("ld SP, ${}"),       // 0x31
    simple("ld [HL-], A"),     // 0x32
    simple("inc SP"),          // 0x33
    simple("inc [HL]"),        // 0x34
    simple("dec [HL]"),        // 0x35
    imm8("ld [HL], ${}"),      // 0x36
    simple("scf"),             // 0x37
    rel8("jr C, ${}"),         // 0x38
    simple("add HL, SP"),      // 0x39
    simple("ld A, [HL-]"),     // 0x3A
    simple("dec SP"),          // 0x3B
    simple("inc A"),           // 0x3C
    simple("dec A"),           // 0x3D
    imm8("ld A, ${}"),         // 0x3E
    simple("ccf"),             // 0x3F
    simple("ld B, B"),         // 0x40
    simple("ld B, C"),         // 0x41
    simple("ld B, D"),         // 0x42
    simple("ld B, E"),         // 0x43
    simple("ld B, H"),         // 0x44
    simple("ld B, L"),         // 0x45
    simple("ld B, [HL]"),      // 0x46
    simple("ld B, A"),         // 0x47
    simple("ld C, B"),         // 0x48
    simple("ld C, C"),         // 0x49
    simple("ld C, D"),         // 0x4A
    simple("ld C, E"),         // 0x4B
    simple("ld C, H"),         // 0x4C
    simple("ld C, L"),         // 0x4D
    simple("ld C, [HL]"),      // 0x4E
    simple("ld C, A"),         // 0x4F
    simple("ld D, B"),         // 0x50
    simple("ld D, C"),         // 0x51
    simple("ld D, D"),         // 0x52
    simple("ld D, E"),         // 0x53
    simple("ld D, H"),         // 0x54
    simple("ld D, L"),         // 0x55
    simple("ld D, [HL]"),      // 0x56
    simple("ld D, A"),         // 0x57
    simple("ld E, B"),         // 0x58
    simple("ld E, C"),         // 0x59
    simple("ld E, D"),         // 0x5A
    simple("ld E, E"),         // 0x5B
    simple("ld E, H"),         // 0x5C
    simple("ld E, L"),         // 0x5D
    simple("ld E, [HL]"),      // 0x5E
    simple("ld E, A"),         // 0x5F
    simple("ld H, B"),         // 0x60
    simple("ld H, C"),         // 0x61
    simple("ld H, D"),         // 0x62
    simple("ld H, E"),         // 0x63
    simple("ld H, H"),         // 0x64
    simple("ld H, L"),         // 0x65
    simple("ld H, [HL]"),      // 0x66
    simple("ld H, A"),         // 0x67
    simple("ld L, B"),         // 0x68
    simple("ld L, C"),         // 0x69
    simple("ld L, D"),         // 0x6A
    simple("ld L, E"),         // 0x6B
    simple("ld L, H"),         // 0x6C
    simple("ld L, L"),         // 0x6D
    simple("ld L, [HL]"),      // 0x6E
    simple("ld L, A"),         // 0x6F
    simple("ld [HL], B"),      // 0x70
    simple("ld [HL], C"),      // 0x71
    simple("ld [HL], D"),      // 0x72
    simple("ld [HL], E"),      // 0x73
    simple("ld [HL], H"),      // 0x74
    simple("ld [HL], L"),      // 0x75
    simple("halt"),            // 0x76
    simple("ld [HL], A"),      // 0x77
    simple("ld A, B"),         // 0x78
    simple("ld A, C"),         // 0x79
    simple("ld A, D"),         // 0x7A
    simple("ld A, E"),         // 0x7B
    simple("ld A, H"),         // 0x7C
    simple("ld A, L"),         // 0x7D
    simple("ld A, [HL]"),      // 0x7E
    simple("ld A, A"),         // 0x7F
    simple("add A, B"),        // 0x80
    simple("add A, C"),        // 0x81
    simple("add A, D"),        // 0x82
    simple("add A, E"),        // 0x83
    simple("add A, H"),        // 0x84
    simple("add A, L"),        // 0x85
    simple("add A, [HL]"),     // 0x86
    simple("add A, A"),        // 0x87
    simple("adc A, B"),        // 0x88
    simple("adc A, C"),        // 0x89
    simple("adc A, D"),        // 0x8A
    simple("adc A, E"),        // 0x8B
    simple("adc A, H"),        // 0x8C
    simple("adc A, L"),        // 0x8D
    simple("adc A, [HL]"),     // 0x8E
    simple("adc A, A"),        // 0x8F
    simple("sub B"),           // 0x90
    simple("sub C"),           // 0x91
    simple("sub D"),           // 0x92
    simple("sub E"),           // 0x93
    simple("sub H"),           // 0x94
    simple("sub L"),           // 0x95
    simple("sub [HL]"),        // 0x96
    simple("sub A"),           // 0x97
    simple("sbc A, B"),        // 0x98
    simple("sbc A, C"),        // 0x99
    simple("sbc A, D"),        // 0x9A
    simple("sbc A, E"),        // 0x9B
    simple("sbc A, H"),        // 0x9C
    simple("sbc A, L"),        // 0x9D
    simple("sbc A, [HL]"),     // 0x9E
    simple("sbc A, A"),        // 0x9F
    simple("and B"),           // 0xA0
    simple("and C"),           // 0xA1
    simple("and D"),           // 0xA2
    simple("and E"),           // 0xA3
    simple("and H"),           // 0xA4
    simple("and L"),           // 0xA5
    simple("and [HL]"),        // 0xA6
    simple("and A"),           // 0xA7
    simple("xor B"),           // 0xA8
    simple("xor C"),           // 0xA9
    simple("xor D"),           // 0xAA
    simple("xor E"),           // 0xAB
    simple("xor H"),           // 0xAC
    simple("xor L"),           // 0xAD
    simple("xor [HL]"),        // 0xAE
    simple("xor A"),           // 0xAF
    simple("or B"),            // 0xB0
    simple("or C"),            // 0xB1
    simple("or D"),            // 0xB2
    simple("or E"),            // 0xB3
    simple("or H"),            // 0xB4
    simple("or L"),            // 0xB5
    simple("or [HL]"),         // 0xB6
    simple("or A"),            // 0xB7
    simple("cp B"),            // 0xB8
    simple("cp C"),            // 0xB9
    simple("cp D"),            // 0xBA
    simple("cp E"),            // 0xBB
    simple("cp H"),            // 0xBC
    simple("cp L"),            // 0xBD
    simple("cp [HL]"),         // 0xBE
    simple("cp A"),            // 0xBF
    simple("ret NZ"),          // 0xC0
    simple("pop BC"),          // 0xC1
    imm16("jp NZ, ${}"),       // 0xC2
    imm16("jp ${}"),           // 0xC3
    imm16("call NZ, ${}"),     // 0xC4
    simple("push BC"),         // 0xC5
    imm8("add A, ${}"),        // 0xC6
    simple("rst $00"),         // 0xC7
    simple("ret Z"),           // 0xC8
    simple("ret"),             // 0xC9
    imm16("jp Z, ${}"),        // 0xCA
    simple("prefix cb"),       // 0xCB (intercepté par le décodeur)
    imm16("call Z, ${}"),      // 0xCC
    imm16("call ${}"),         // 0xCD
    imm8("adc A, ${}"),        // 0xCE
    simple("rst $08"),         // 0xCF
    simple("ret NC"),          // 0xD0
    simple("pop DE"),          // 0xD1
    imm16("jp NC, ${}"),       // 0xD2
    None,                      // 0xD3 (non défini)
    imm16("call NC, ${}"),     // 0xD4
    simple("push DE"),         // 0xD5
    imm8("sub ${}"),           // 0xD6
    simple("rst $10"),         // 0xD7
    simple("ret C"),           // 0xD8
    simple("reti"),            // 0xD9
    imm16("jp C, ${}"),        // 0xDA
    None,                      // 0xDB (non défini)
    imm16("call C, ${}"),      // 0xDC
    None,                      // 0xDD (non défini)
    imm8("sbc A, ${}"),        // 0xDE
    simple("rst $18"),         // 0xDF
    imm8("ldh [${}], A"),      // 0xE0
    simple("pop HL"),          // 0xE1
    simple("ld [C], A"),       // 0xE2
    None,                      // 0xE3 (non défini)
    None,                      // 0xE4 (non défini)
    simple("push HL"),         // 0xE5
    imm8("and ${}"),           // 0xE6
    simple("rst $20"),         // 0xE7
    rel8("add SP, ${}"),       // 0xE8
    simple("jp HL"),           // 0xE9
    imm16("ld [${}], A"),      // 0xEA
    None,                      // 0xEB (non défini)
    None,                      // 0xEC (non défini)
    None,                      // 0xED (non défini)
    imm8("xor ${}"),           // 0xEE
    simple("rst $28"),         // 0xEF
    imm8("ldh A, [${}]"),      // 0xF0
    simple("pop AF"),          // 0xF1
    simple("ld A, [C]"),       // 0xF2
    simple("di"),              // 0xF3
    None,                      // 0xF4 (non défini)
    simple("push AF"),         // 0xF5
    imm8("or ${}"),            // 0xF6
    simple("rst $30"),         // 0xF7
    rel8("ld HL, SP+${}"),     // 0xF8
    simple("ld SP, HL"),       // 0xF9
    imm16("ld A, [${}]"),      // 0xFA
    simple("ei"),              // 0xFB
    None,                      // 0xFC (non défini)
    None,                      // 0xFD (non défini)
    imm8("cp ${}"),            // 0xFE
    simple("rst $38"),         // 0xFF
];

#[cfg(test)]
mod tests {
    use super::*;

    /// Les 11 trous attendus de la table de base
    const HOLES: [u8; 11] = [
        0xD3, 0xDB, 0xDD, 0xE3, 0xE4, 0xEB, 0xEC, 0xED, 0xF4, 0xFC, 0xFD,
    ];

    #[test]
    fn test_holes_are_exactly_the_undefined_opcodes() {
        for opcode in 0u16..=0xFF {
            let entry = &OPCODES[opcode as usize];
            if HOLES.contains(&(opcode as u8)) {
                assert!(entry.is_none(), "{:#04x} devrait être un trou", opcode);
            } else {
                assert!(entry.is_some(), "{:#04x} devrait être défini", opcode);
            }
        }
    }

    #[test]
    fn test_lengths_match_operand_kinds() {
        for entry in OPCODES.iter().flatten() {
            let expected = match entry.operand {
                OperandKind::None => 1,
                OperandKind::Byte | OperandKind::Relative => 2,
                OperandKind::Word => 3,
            };
            assert_eq!(entry.length, expected, "{}", entry.mnemonic);
        }
    }

    #[test]
    fn test_templates_carry_placeholder_iff_operand() {
        for entry in OPCODES.iter().flatten() {
            let has_placeholder = entry.mnemonic.contains("{}");
            match entry.operand {
                OperandKind::None => assert!(!has_placeholder, "{}", entry.mnemonic),
                _ => assert!(has_placeholder, "{}", entry.mnemonic),
            }
        }
    }

    #[test]
    fn test_known_entries() {
        assert_eq!(OPCODES[0x00].unwrap().mnemonic, "nop");
        assert_eq!(OPCODES[0x76].unwrap().mnemonic, "halt");
        assert_eq!(OPCODES[0xC3].unwrap().operand, OperandKind::Word);
        assert_eq!(OPCODES[0x18].unwrap().operand, OperandKind::Relative);
        assert_eq!(OPCODES[0xFF].unwrap().mnemonic, "rst $38");
    }
}
