//! Chargement et inspection des images de cartouche Game Boy

use log::info;
use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;

pub mod header;
pub mod validation;

pub use header::*;
pub use validation::*;

/// Erreurs du décodage de cartouche
#[derive(Error, Debug)]
pub enum RomError {
    /// Erreur d'entrée/sortie lors du chargement
    #[error("erreur d'E/S: {0}")]
    Io(#[from] io::Error),

    /// Image trop courte pour contenir l'en-tête complet (0x150 octets)
    #[error("image trop courte pour l'en-tête: {len} octets (minimum {min})")]
    TooShort { len: usize, min: usize },
}

/// Image de cartouche chargée en mémoire
///
/// Le tampon est immuable après chargement; l'analyse d'en-tête et le
/// désassemblage l'empruntent en lecture seule.
#[derive(Debug, Clone)]
pub struct RomImage {
    data: Vec<u8>,
}

impl RomImage {
    /// Charge une image complète depuis un fichier
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, RomError> {
        let data = fs::read(path.as_ref())?;
        info!(
            "image chargée: {} ({} octets)",
            path.as_ref().display(),
            data.len()
        );
        Ok(Self { data })
    }

    /// Construit une image à partir d'octets déjà en mémoire
    pub fn from_bytes(data: Vec<u8>) -> Self {
        Self { data }
    }

    /// Octets bruts de l'image
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Taille de l'image en octets
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Analyse l'en-tête de la cartouche
    pub fn parse_header(&self) -> Result<HeaderRecord, RomError> {
        HeaderRecord::parse(&self.data)
    }
}
