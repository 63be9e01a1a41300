use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use super::SiteError;

/// rw-r--r--
pub const OUTPUT_MODE: u32 = 0o644;

/// Write several files so that none is replaced unless all were staged.
///
/// Each file is first written to a temp file in its target's directory; only
/// when every staged write succeeded are they persisted over their targets.
/// A failure while persisting can still leave the set half-updated; the
/// staged files not yet persisted are removed either way.
pub fn write_outputs(outputs: &[(&Path, &[u8])]) -> Result<(), SiteError> {
    let mut staged = Vec::with_capacity(outputs.len());
    for &(target, contents) in outputs {
        staged.push((stage(target, contents)?, target));
    }

    let mut replaced: Vec<&Path> = Vec::with_capacity(staged.len());
    for (temp, target) in staged {
        if let Err(e) = temp.persist(target) {
            if !replaced.is_empty() {
                tracing::warn!(
                    failed = %target.display(),
                    replaced = ?replaced,
                    "Outputs are half-updated"
                );
            }
            return Err(SiteError::Write {
                path: target.to_path_buf(),
                source: e.error,
            });
        }
        tracing::debug!(path = %target.display(), "Output written");
        replaced.push(target);
    }

    Ok(())
}

fn stage(target: &Path, contents: &[u8]) -> Result<NamedTempFile, SiteError> {
    let to_err = |source: std::io::Error| SiteError::Write {
        path: target.to_path_buf(),
        source,
    };

    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = NamedTempFile::new_in(dir).map_err(to_err)?;
    temp.as_file_mut().write_all(contents).map_err(to_err)?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        temp.as_file()
            .set_permissions(std::fs::Permissions::from_mode(OUTPUT_MODE))
            .map_err(to_err)?;
    }
    temp.as_file().sync_all().map_err(to_err)?;

    Ok(temp)
}
