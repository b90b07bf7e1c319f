//! Input and output streams.
//!
//! File name conventions, the overwrite policy, and reading/writing with
//! `-` standing for stdin/stdout.

use log::{debug, info};
use rstlit_config::languages::is_text_extension;
use rstlit_config::{Config, OverwriteMode};
use rstlit_core::{Direction, Result, RstlitError};
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// File name standing for stdin or stdout.
pub const STDIO: &str = "-";

/// Extension of `name` with its leading dot, e.g. `".py"`.
pub fn extension_of(name: &str) -> Option<String> {
    Path::new(name)
        .extension()
        .map(|ext| format!(".{}", ext.to_string_lossy()))
}

/// Default output name for `infile`.
///
/// - `-` stays `-`
/// - a text extension is stripped: `foo.py.txt` → `foo.py`
/// - code files, and any input converted to text, get `.txt` added
/// - anything else gets `.out` added
pub fn outfile_name(infile: &str, direction: Direction, config: &Config) -> String {
    if infile == STDIO {
        return STDIO.to_string();
    }

    let extension = extension_of(infile);
    if let Some(ext) = extension.as_deref().filter(|ext| is_text_extension(ext)) {
        return infile[..infile.len() - ext.len()].to_string();
    }

    let is_code = extension.is_some_and(|ext| config.is_code_extension(&ext));
    if is_code || direction == Direction::CodeToText {
        format!("{}.txt", infile)
    } else {
        format!("{}.out", infile)
    }
}

fn modified(path: &Path) -> Option<SystemTime> {
    fs::metadata(path).and_then(|meta| meta.modified()).ok()
}

/// Is `path` newer than `other`? A file that does not exist counts as
/// older than any existing file.
pub fn is_newer(path: &Path, other: &Path) -> bool {
    modified(path) > modified(other)
}

/// Apply the overwrite policy before writing `outfile`.
pub fn check_overwrite(infile: &str, outfile: &str, mode: OverwriteMode) -> Result<()> {
    if outfile == STDIO {
        return Ok(());
    }
    let out_path = Path::new(outfile);

    match mode {
        OverwriteMode::Yes => Ok(()),
        OverwriteMode::No if out_path.exists() => Err(RstlitError::OutputExists(out_path.to_path_buf())),
        OverwriteMode::No => Ok(()),
        OverwriteMode::Update => {
            // stdin is always fresh
            if infile != STDIO && is_newer(out_path, Path::new(infile)) {
                return Err(RstlitError::OutputNewer(out_path.to_path_buf()));
            }
            Ok(())
        }
    }
}

/// Read the whole input, `-` being stdin.
pub fn read_input(infile: &str) -> Result<String> {
    if infile == STDIO {
        debug!("Reading from stdin");
        let mut input = String::new();
        io::stdin().lock().read_to_string(&mut input)?;
        return Ok(input);
    }
    debug!("Reading {}", infile);
    Ok(fs::read_to_string(infile)?)
}

/// Write the output, `-` being stdout.
pub fn write_output(outfile: &str, output: &str) -> Result<()> {
    if outfile == STDIO {
        let mut stdout = io::stdout().lock();
        stdout.write_all(output.as_bytes())?;
        stdout.flush()?;
        return Ok(());
    }
    fs::write(outfile, output)?;
    info!("extract written to {}", outfile);
    Ok(())
}

/// Move `infile` out of the way to `infile~`.
pub fn replace_with_backup(infile: &str) -> Result<PathBuf> {
    let backup = PathBuf::from(format!("{}~", infile));
    fs::rename(infile, &backup)?;
    info!("{} moved to {}", infile, backup.display());
    Ok(backup)
}
