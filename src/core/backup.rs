//! Backup of the local store (journal, prefs, log).

use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use std::fs;
use std::io::{Write, stdin, stdout};
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

pub struct BackupLogic;

impl BackupLogic {
    pub fn backup(pool: &DbPool, cfg: &Config, dest_file: &str, compress: bool) -> AppResult<()> {
        let src = Path::new(&cfg.database);
        let dest = Path::new(dest_file);

        if !src.exists() {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Local store not found: {}", src.display()),
            )
            .into());
        }

        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }

        if dest.exists() && !confirm_overwrite(dest)? {
            println!("❌ Backup cancelled by user.");
            return Ok(());
        }

        fs::copy(src, dest)?;
        println!("✅ Backup created: {}", dest.display());

        let final_path = if compress {
            let zipped = compress_backup(dest)?;
            if zipped != dest
                && let Err(e) = fs::remove_file(dest)
            {
                eprintln!("⚠️ Failed to remove uncompressed backup: {}", e);
            }
            zipped
        } else {
            dest.to_path_buf()
        };

        let _ = crate::db::log::ttlog(
            &pool.conn,
            "backup",
            &final_path.to_string_lossy(),
            if compress {
                "Backup created and compressed"
            } else {
                "Backup created"
            },
        );

        Ok(())
    }
}

fn confirm_overwrite(dest: &Path) -> AppResult<bool> {
    println!("⚠️  The file '{}' already exists.", dest.display());
    print!("Overwrite it? [y/N]: ");
    stdout().flush().ok();

    let mut answer = String::new();
    stdin().read_line(&mut answer)?;
    let answer = answer.trim().to_lowercase();
    Ok(answer == "y" || answer == "yes")
}

/// Zip the copied store next to itself; returns the .zip path.
fn compress_backup(copy: &Path) -> AppResult<PathBuf> {
    // A destination that is already *.zip must not collide with its own
    // archive.
    let zip_path = if copy.extension().is_some_and(|e| e == "zip") {
        let name = copy
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "backup".to_string());
        copy.with_file_name(format!("{}.zip", name))
    } else {
        copy.with_extension("zip")
    };
    let out = fs::File::create(&zip_path)?;
    let mut zip = ZipWriter::new(out);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let entry_name = copy
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "trashreporter.sqlite".to_string());
    zip.start_file(entry_name, options)
        .map_err(std::io::Error::other)?;

    let mut src = fs::File::open(copy)?;
    std::io::copy(&mut src, &mut zip)?;
    zip.finish().map_err(std::io::Error::other)?;

    println!("📦 Compressed: {}", zip_path.display());

    Ok(zip_path)
}
