//! Table étendue des opcodes préfixés par 0xCB
//!
//! Seconde table de 256 entrées atteinte via l'octet de préfixe 0xCB.
//! Chaque entrée consomme exactement un octet supplémentaire: toute
//! instruction préfixée fait 2 octets au total, sans opérande. La
//! résolution se fait au moment du décodage avec le véritable second
//! octet lu dans le flux.

/// Table étendue, indexée par l'octet qui suit le préfixe 0xCB
pub static OPCODES_CB: [&str; 256] = [
    "rlc B",          // 0x00
    "rlc C",          // 0x01
    "rlc D",          // 0x02
    "rlc E",          // 0x03
    "rlc H",          // 0x04
    "rlc L",          // 0x05
    "rlc [HL]",       // 0x06
    "rlc A",          // 0x07
    "rrc B",          // 0x08
    "rrc C",          // 0x09
    "rrc D",          // 0x0A
    "rrc E",          // 0x0B
    "rrc H",          // 0x0C
    "rrc L",          // 0x0D
    "rrc [HL]",       // 0x0E
    "rrc A",          // 0x0F
    "rl B",           // 0x10
    "rl C",           // 0x11
    "rl D",           // 0x12
    "rl E",           // 0x13
    "rl H",           // 0x14
    "rl L",           // 0x15
    "rl [HL]",        // 0x16
    "rl A",           // 0x17
    "rr B",           // 0x18
    "rr C",           // 0x19
    "rr D",           // 0x1A
    "rr E",           // 0x1B
    "rr H",           // 0x1C
    "rr L",           // 0x1D
    "rr [HL]",        // 0x1E
    "rr A",           // 0x1F
    "sla B",          // 0x20
    "sla C",          // 0x21
    "sla D",          // 0x22
    "sla E",          // 0x23
    "sla H",          // 0x24
    "sla L",          // 0x25
    "sla [HL]",       // 0x26
    "sla A",          // 0x27
    "sra B",          // 0x28
    "sra C",          // 0x29
    "sra D",          // 0x2A
    "sra E",          // 0x2B
    "sra H",          // 0x2C
    "sra L",          // 0x2D
    "sra [HL]",       // 0x2E
    "sra A",          // 0x2F
    "swap B",         // 0x30
    "swap C",         // 0x31
    "swap D",         // 0x32
    "swap E",         // 0x33
    "swap H",         // 0x34
    "swap L",         // 0x35
    "swap [HL]",      // 0x36
    "swap A",         // 0x37
    "srl B",          // 0x38
    "srl C",          // 0x39
    "srl D",          // 0x3A
    "srl E",          // 0x3B
    "srl H",          // 0x3C
    "srl L",          // 0x3D
    "srl [HL]",       // 0x3E
    "srl A",          // 0x3F
    "bit 0, B",       // 0x40
    "bit 0, C",       // 0x41
    "bit 0, D",       // 0x42
    "bit 0, E",       // 0x43
    "bit 0, H",       // 0x44
    "bit 0, L",       // 0x45
    "bit 0, [HL]",    // 0x46
    "bit 0, A",       // 0x47
    "bit 1, B",       // 0x48
    "bit 1, C",       // 0x49
    "bit 1, D",       // 0x4A
    "bit 1, E",       // 0x4B
    "bit 1, H",       // 0x4C
    "bit 1, L",       // 0x4D
    "bit 1, [HL]",    // 0x4E
    "bit 1, A",       // 0x4F
    "bit 2, B",       // 0x50
    "bit 2, C",       // 0x51
    "bit 2, D",       // 0x52
    "bit 2, E",       // 0x53
    "bit 2, H",       // 0x54
    "bit 2, L",       // 0x55
    "bit 2, [HL]",    // 0x56
    "bit 2, A",       // 0x57
    "bit 3, B",       // 0x58
    "bit 3, C",       // 0x59
    "bit 3, D",       // 0x5A
    "bit 3, E",       // 0x5B
    "bit 3, H",       // 0x5C
    "bit 3, L",       // 0x5D
    "bit 3, [HL]",    // 0x5E
    "bit 3, A",       // 0x5F
    "bit 4, B",       // 0x60
    "bit 4, C",       // 0x61
    "bit 4, D",       // 0x62
    "bit 4, E",       // 0x63
    "bit 4, H",       // 0x64
    "bit 4, L",       // 0x65
    "bit 4, [HL]",    // 0x66
    "bit 4, A",       // 0x67
    "bit 5, B",       // 0x68
    "bit 5, C",       // 0x69
    "bit 5, D",       // 0x6A
    "bit 5, E",       // 0x6B
    "bit 5, H",       // 0x6C
    "bit 5, L",       // 0x6D
    "bit 5, [HL]",    // 0x6E
    "bit 5, A",       // 0x6F
    "bit 6, B",       // 0x70
    "bit 6, C",       // 0x71
    "bit 6, D",       // 0x72
    "bit 6, E",       // 0x73
    "bit 6, H",       // 0x74
    "bit 6, L",       // 0x75
    "bit 6, [HL]",    // 0x76
    "bit 6, A",       // 0x77
    "bit 7, B",       // 0x78
    "bit 7, C",       // 0x79
    "bit 7, D",       // 0x7A
    "bit 7, E",       // 0x7B
    "bit 7, H",       // 0x7C
    "bit 7, L",       // 0x7D
    "bit 7, [HL]",    // 0x7E
    "bit 7, A",       // 0x7F
    "res 0, B",       // 0x80
    "res 0, C",       // 0x81
    "res 0, D",       // 0x82
    "res 0, E",       // 0x83
    "res 0, H",       // 0x84
    "res 0, L",       // 0x85
    "res 0, [HL]",    // 0x86
    "res 0, A",       // 0x87
    "res 1, B",       // 0x88
    "res 1, C",       // 0x89
    "res 1, D",       // 0x8A
    "res 1, E",       // 0x8B
    "res 1, H",       // 0x8C
    "res 1, L",       // 0x8D
    "res 1, [HL]",    // 0x8E
    "res 1, A",       // 0x8F
    "res 2, B",       // 0x90
    "res 2, C",       // 0x91
    "res 2, D",       // 0x92
    "res 2, E",       // 0x93
    "res 2, H",       // 0x94
    "res 2, L",       // 0x95
    "res 2, [HL]",    // 0x96
    "res 2, A",       // 0x97
    "res 3, B",       // 0x98
    "res 3, C",       // 0x99
    "res 3, D",       // 0x9A
    "res 3, E",       // 0x9B
    "res 3, H",       // 0x9C
    "res 3, L",       // 0x9D
    "res 3, [HL]",    // 0x9E
    "res 3, A",       // 0x9F
    "res 4, B",       // 0xA0
    "res 4, C",       // 0xA1
    "res 4, D",       // 0xA2
    "res 4, E",       // 0xA3
    "res 4, H",       // 0xA4
    "res 4, L",       // 0xA5
    "res 4, [HL]",    // 0xA6
    "res 4, A",       // 0xA7
    "res 5, B",       // 0xA8
    "res 5, C",       // 0xA9
    "res 5, D",       // 0xAA
    "res 5, E",       // 0xAB
    "res 5, H",       // 0xAC
    "res 5, L",       // 0xAD
    "res 5, [HL]",    // 0xAE
    "res 5, A",       // 0xAF
    "res 6, B",       // 0xB0
    "res 6, C",       // 0xB1
    "res 6, D",       // 0xB2
    "res 6, E",       // 0xB3
    "res 6, H",       // 0xB4
    "res 6, L",       // 0xB5
    "res 6, [HL]",    // 0xB6
    "res 6, A",       // 0xB7
    "res 7, B",       // 0xB8
    "res 7, C",       // 0xB9
    "res 7, D",       // 0xBA
    "res 7, E",       // 0xBB
    "res 7, H",       // 0xBC
    "res 7, L",       // 0xBD
    "res 7, [HL]",    // 0xBE
    "res 7, A",       // 0xBF
    "set 0, B",       // 0xC0
    "set 0, C",       // 0xC1
    "set 0, D",       // 0xC2
    "set 0, E",       // 0xC3
    "set 0, H",       // 0xC4
    "set 0, L",       // 0xC5
    "set 0, [HL]",    // 0xC6
    "set 0, A",       // 0xC7
    "set 1, B",       // 0xC8
    "set 1, C",       // 0xC9
    "set 1, D",       // 0xCA
    "set 1, E",       // 0xCB
    "set 1, H",       // 0xCC
    "set 1, L",       // 0xCD
    "set 1, [HL]",    // 0xCE
    "set 1, A",       // 0xCF
    "set 2, B",       // 0xD0
    "set 2, C",       // 0xD1
    "set 2, D",       // 0xD2
    "set 2, E",       // 0xD3
    "set 2, H",       // 0xD4
    "set 2, L",       // 0xD5
    "set 2, [HL]",    // 0xD6
    "set 2, A",       // 0xD7
    "set 3, B",       // 0xD8
    "set 3, C",       // 0xD9
    "set 3, D",       // 0xDA
    "set 3, E",       // 0xDB
    "set 3, H",       // 0xDC
    "set 3, L",       // 0xDD
    "set 3, [HL]",    // 0xDE
    "set 3, A",       // 0xDF
    "set 4, B",       // 0xE0
    "set 4, C",       // 0xE1
    "set 4, D",       // 0xE2
    "set 4, E",       // 0xE3
    "set 4, H",       // 0xE4
    "set 4, L",       // 0xE5
    "set 4, [HL]",    // 0xE6
    "set 4, A",       // 0xE7
    "set 5, B",       // 0xE8
    "set 5, C",       // 0xE9
    "set 5, D",       // 0xEA
    "set 5, E",       // 0xEB
    "set 5, H",       // 0xEC
    "set 5, L",       // 0xED
    "set 5, [HL]",    // 0xEE
    "set 5, A",       // 0xEF
    "set 6, B",       // 0xF0
    "set 6, C",       // 0xF1
    "set 6, D",       // 0xF2
    "set 6, E",       // 0xF3
    "set 6, H",       // 0xF4
    "set 6, L",       // 0xF5
    "set 6, [HL]",    // 0xF6
    "set 6, A",       // 0xF7
    "set 7, B",       // 0xF8
    "set 7, C",       // 0xF9
    "set 7, D",       // 0xFA
    "set 7, E",       // 0xFB
    "set 7, H",       // 0xFC
    "set 7, L",       // 0xFD
    "set 7, [HL]",    // 0xFE
    "set 7, A",       // 0xFF
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_total() {
        // Pas de trou dans la table étendue
        for (i, mnemonic) in OPCODES_CB.iter().enumerate() {
            assert!(!mnemonic.is_empty(), "entrée vide à {:#04x}", i);
        }
    }

    #[test]
    fn test_known_entries() {
        assert_eq!(OPCODES_CB[0x00], "rlc B");
        assert_eq!(OPCODES_CB[0x11], "rl C");
        assert_eq!(OPCODES_CB[0x37], "swap A");
        assert_eq!(OPCODES_CB[0x7C], "bit 7, H");
        assert_eq!(OPCODES_CB[0x86], "res 0, [HL]");
        assert_eq!(OPCODES_CB[0xFF], "set 7, A");
    }

    #[test]
    fn test_bit_groups_cover_all_registers() {
        // Chaque groupe de 8 balaie B, C, D, E, H, L, [HL], A
        for bit in 0..8 {
            let base = 0x40 + bit * 8;
            assert_eq!(OPCODES_CB[base], format!("bit {}, B", bit));
            assert_eq!(OPCODES_CB[base + 6], format!("bit {}, [HL]", bit));
            assert_eq!(OPCODES_CB[base + 7], format!("bit {}, A", bit));
        }
    }
}
