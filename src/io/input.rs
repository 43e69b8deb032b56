use std::path::Path;

use anyhow::{Context, Result, bail};

/// Read a transcript text file for extraction.
///
/// Empty or whitespace-only files are rejected here, at the ingress boundary,
/// so the pipeline (and the generation backend) is never invoked for them.
pub fn read_transcript_file(path: &Path) -> Result<String> {
    let transcript = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read transcript file: {:?}", path))?;

    if transcript.trim().is_empty() {
        bail!("Transcript file is empty: {:?}", path);
    }

    Ok(transcript)
}
