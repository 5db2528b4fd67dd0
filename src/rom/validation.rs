//! Vérification d'intégrité des images de cartouche
//!
//! Le format Game Boy définit trois contrôles: le logo Nintendo à
//! 0x104, un checksum 8 bits sur la zone d'en-tête et un checksum
//! 16 bits sur l'image entière.

/// Logo Nintendo attendu aux octets [0x104, 0x134)
pub const NINTENDO_LOGO: [u8; 48] = [
    0xCE, 0xED, 0x66, 0x66, 0xCC, 0x0D, 0x00, 0x0B, 0x03, 0x73, 0x00, 0x83,
    0x00, 0x0C, 0x00, 0x0D, 0x00, 0x08, 0x11, 0x1F, 0x88, 0x89, 0x00, 0x0E,
    0xDC, 0xCC, 0x6E, 0xE6, 0xDD, 0xDD, 0xD9, 0x99, 0xBB, 0xBB, 0x67, 0x63,
    0x6E, 0x0E, 0xEC, 0xCC, 0xDD, 0xDC, 0x99, 0x9F, 0xBB, 0xB9, 0x33, 0x3E,
];

/// Compare la zone de logo avec la constante attendue
///
/// Toute différence, même d'un seul octet, invalide le logo.
pub fn logo_matches(data: &[u8]) -> bool {
    data[0x104..0x134] == NINTENDO_LOGO
}

/// Checksum d'en-tête: pour chaque octet b de 0x134 à 0x14C inclus,
/// checksum = checksum - b - 1 (arithmétique 8 bits)
pub fn header_checksum(data: &[u8]) -> u8 {
    let mut checksum: u8 = 0;
    for &b in &data[0x134..=0x14C] {
        checksum = checksum.wrapping_sub(b).wrapping_sub(1);
    }
    checksum
}

/// Valide le checksum d'en-tête contre l'octet stocké à 0x14D
pub fn header_checksum_valid(data: &[u8]) -> bool {
    header_checksum(data) == data[0x14D]
}

/// Checksum global: somme 16 bits de tous les octets de l'image sauf
/// les deux octets de stockage du checksum à 0x14E-0x14F
pub fn global_checksum(data: &[u8]) -> u16 {
    let mut checksum: u16 = 0;
    for (i, &b) in data.iter().enumerate() {
        if i == 0x14E || i == 0x14F {
            continue;
        }
        checksum = checksum.wrapping_add(b as u16);
    }
    checksum
}

/// Valide le checksum global contre le mot grand-boutiste à 0x14E
pub fn global_checksum_valid(data: &[u8]) -> bool {
    let stored = ((data[0x14E] as u16) << 8) | data[0x14F] as u16;
    global_checksum(data) == stored
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blank_image() -> Vec<u8> {
        let mut data = vec![0u8; 0x8000];
        data[0x104..0x134].copy_from_slice(&NINTENDO_LOGO);
        data
    }

    #[test]
    fn test_logo_matches() {
        let data = blank_image();
        assert!(logo_matches(&data));
    }

    #[test]
    fn test_logo_single_byte_corruption() {
        for offset in 0x104..0x134 {
            let mut data = blank_image();
            data[offset] ^= 0x01;
            assert!(!logo_matches(&data), "corruption à {:#x} non détectée", offset);
        }
    }

    #[test]
    fn test_header_checksum_blank() {
        // 25 octets à zéro: checksum = (-1) * 25 = -25 = 0xE7
        let data = blank_image();
        assert_eq!(header_checksum(&data), 0xE7);
    }

    #[test]
    fn test_header_checksum_valid_once_stored() {
        let mut data = blank_image();
        let checksum = header_checksum(&data);
        data[0x14D] = checksum;
        assert!(header_checksum_valid(&data));
        data[0x14D] = checksum.wrapping_add(1);
        assert!(!header_checksum_valid(&data));
    }

    #[test]
    fn test_global_checksum_excludes_own_bytes() {
        let mut data = blank_image();
        let before = global_checksum(&data);
        data[0x14E] = 0xAB;
        data[0x14F] = 0xCD;
        assert_eq!(global_checksum(&data), before);
    }

    #[test]
    fn test_global_checksum_valid_once_stored() {
        let mut data = blank_image();
        let checksum = global_checksum(&data);
        data[0x14E] = (checksum >> 8) as u8;
        data[0x14F] = (checksum & 0xFF) as u8;
        assert!(global_checksum_valid(&data));
    }

    #[test]
    fn test_global_checksum_wraps_to_16_bits() {
        let mut data = vec![0xFF; 0x10000];
        data[0x14E] = 0;
        data[0x14F] = 0;
        // (0x10000 - 2) * 0xFF modulo 0x10000
        let expected = ((0x10000u32 - 2) * 0xFF % 0x10000) as u16;
        assert_eq!(global_checksum(&data), expected);
    }
}
