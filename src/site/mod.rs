pub mod template;
pub mod writer;

pub use template::{Template, PLACEHOLDER};
pub use writer::write_outputs;

use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use thiserror::Error;

use crate::models::PoolSnapshot;

#[derive(Debug, Error)]
pub enum SiteError {
    #[error("placeholder __POOL_DATA_JSON__ not found in {}", .path.display())]
    MissingPlaceholder { path: PathBuf },

    #[error("failed to read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize pool data")]
    Serialize(#[from] serde_json::Error),
}

/// Embed the snapshot into the template's HTML and write the tab-indented
/// copy next to it at `json_path`.
pub fn inject(
    template: &Template,
    snapshot: &PoolSnapshot,
    json_path: &Path,
) -> Result<(), SiteError> {
    let compact = escape_for_script(&serde_json::to_string(snapshot)?);
    let pretty = to_tab_indented(snapshot)?;
    let html = template.render(&compact);

    write_outputs(&[
        (template.path(), html.as_bytes()),
        (json_path, pretty.as_slice()),
    ])?;

    tracing::info!(
        html = %template.path().display(),
        json = %json_path.display(),
        replaced = template.occurrences(),
        "Pool data injected"
    );

    Ok(())
}

fn to_tab_indented<T: Serialize>(value: &T) -> Result<Vec<u8>, serde_json::Error> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"\t");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    Ok(buf)
}

/// Escape `<`, `>` and `&` as JSON unicode escapes so API text cannot close
/// the surrounding `<script>` element. These only occur inside JSON strings,
/// so the result decodes to the same value.
fn escape_for_script(json: &str) -> String {
    let mut out = String::with_capacity(json.len());
    for c in json.chars() {
        match c {
            '<' => out.push_str("\\u003c"),
            '>' => out.push_str("\\u003e"),
            '&' => out.push_str("\\u0026"),
            c => out.push(c),
        }
    }
    out
}
