//! Décodage des instructions du Sharp LR35902
//!
//! Dispatch par tables fermées: la table de base de 256 entrées, la
//! table étendue atteinte via le préfixe 0xCB, et le parcours en flux
//! du tampon avec saut de la zone d'en-tête et récupération des
//! opcodes non définis.

pub mod decoder;
pub mod opcodes;
pub mod opcodes_cb;

pub use decoder::*;
pub use opcodes::*;
pub use opcodes_cb::*;
