//! Configuration de l'outil de désassemblage

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;

/// Configuration principale du désassembleur
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisasmConfig {
    pub output: OutputConfig,
    pub validation: ValidationConfig,
}

/// Options de rendu du listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Préfixer chaque ligne par l'adresse de l'instruction
    pub show_addresses: bool,
    /// Émettre la ligne d'attribution en tête de listing
    pub attribution: bool,
}

/// Politique de validation de l'en-tête avant désassemblage
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// Refuser les images dont le logo Nintendo est invalide
    pub require_logo: bool,
    /// Refuser les images dont un des checksums est invalide
    pub require_checksums: bool,
}

impl Default for DisasmConfig {
    fn default() -> Self {
        Self {
            output: OutputConfig {
                show_addresses: true,
                attribution: true,
            },
            validation: ValidationConfig {
                require_logo: false,
                require_checksums: false,
            },
        }
    }
}

impl DisasmConfig {
    pub fn load_from_file(path: &str) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: DisasmConfig = toml::from_str(&contents)?;
        Ok(config)
    }

    pub fn save_to_file(&self, path: &str) -> Result<()> {
        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)?;
        Ok(())
    }

    pub fn load_or_default(path: &str) -> Self {
        Self::load_from_file(path).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DisasmConfig::default();
        assert!(config.output.show_addresses);
        assert!(config.output.attribution);
        assert!(!config.validation.require_logo);
        assert!(!config.validation.require_checksums);
    }

    #[test]
    fn test_toml_round_trip() -> Result<()> {
        let dir = tempfile::TempDir::new()?;
        let path = dir.path().join("disasm.toml");
        let path = path.to_str().unwrap();

        let mut config = DisasmConfig::default();
        config.output.show_addresses = false;
        config.validation.require_logo = true;
        config.save_to_file(path)?;

        let loaded = DisasmConfig::load_from_file(path)?;
        assert!(!loaded.output.show_addresses);
        assert!(loaded.validation.require_logo);
        Ok(())
    }

    #[test]
    fn test_load_or_default_on_missing_file() {
        let config = DisasmConfig::load_or_default("missing/disasm.toml");
        assert!(config.output.attribution);
    }
}
