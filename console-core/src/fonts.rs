//! Catalog of installed console fonts

use std::fs;
use std::io;
use std::path::Path;

/// Default directory of installed console fonts
pub const DEFAULT_FONT_DIR: &str = "/usr/share/consolefonts";

// Longest first so ".psfu.gz" is not cut down to ".psfu"
const FONT_SUFFIXES: &[&str] = &[".psfu.gz", ".psf.gz", ".psfu", ".psf"];

/// List font names usable with `setfont` found in `dir`.
///
/// Names have their PSF suffix removed and are returned sorted without
/// duplicates. Entries that do not resolve to regular files are skipped.
pub fn list_fonts(dir: &Path) -> io::Result<Vec<String>> {
    let mut fonts = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        // metadata() resolves symlinks
        match fs::metadata(entry.path()) {
            Ok(metadata) if metadata.is_file() => {}
            Ok(_) => continue,
            Err(e) => {
                log::debug!("Skipping unreadable font entry {:?}: {}", entry.path(), e);
                continue;
            }
        }
        let file_name = entry.file_name();
        let Some(name) = file_name.to_str() else {
            log::debug!("Skipping non UTF-8 font file {:?}", file_name);
            continue;
        };
        fonts.push(font_name(name).to_string());
    }
    fonts.sort();
    fonts.dedup();
    Ok(fonts)
}

/// Strip a known console font suffix from a file name
pub fn font_name(file_name: &str) -> &str {
    FONT_SUFFIXES
        .iter()
        .find_map(|suffix| file_name.strip_suffix(suffix))
        .filter(|name| !name.is_empty())
        .unwrap_or(file_name)
}
