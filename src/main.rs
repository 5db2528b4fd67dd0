use anyhow::{bail, Context, Result};
use log::info;
use std::env;
use std::fs::File;
use std::io::{BufWriter, Write};

use gameboy_dasm_rust::{DisasmConfig, Disassembler, RomImage};

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <rom_file> <output_file>", args[0]);
        std::process::exit(1);
    }

    let config = DisasmConfig::load_or_default("disasm.toml");

    let image = RomImage::from_file(&args[1])
        .with_context(|| format!("impossible de charger la ROM {}", args[1]))?;
    let header = image.parse_header()?;

    println!("{}", header.report());

    if !header.logo_valid {
        if config.validation.require_logo {
            bail!("logo Nintendo invalide, désassemblage refusé");
        }
        eprintln!("Avertissement: logo Nintendo invalide");
    }
    if !header.header_checksum_valid || !header.global_checksum_valid {
        if config.validation.require_checksums {
            bail!("checksum invalide, désassemblage refusé");
        }
        eprintln!("Avertissement: checksum d'en-tête ou global invalide");
    }

    let output = File::create(&args[2])
        .with_context(|| format!("impossible de créer le fichier {}", args[2]))?;
    let mut writer = BufWriter::new(output);

    if config.output.attribution {
        writeln!(writer, "{}", Disassembler::attribution())?;
    }

    // Les lignes sont écrites au fil de la production: mémoire bornée
    // quelle que soit la taille de l'image
    let mut count = 0usize;
    for line in Disassembler::new(image.as_bytes()) {
        if config.output.show_addresses {
            writeln!(writer, "{:04x}: {}", line.address, line.text)?;
        } else {
            writeln!(writer, "{}", line.text)?;
        }
        count += 1;
    }
    writer.flush()?;

    info!("désassemblage terminé: {} lignes écrites dans {}", count, args[2]);
    Ok(())
}
