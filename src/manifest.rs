//! # Concat Manifest Module
//!
//! Questo modulo gestisce il file di lista usato dal demuxer `concat` di
//! ffmpeg per le operazioni di merge.
//!
//! ## Responsabilità:
//! - Genera una riga `file '<path>'` per ogni input, nell'ordine dato
//! - Applica il quoting del demuxer (`'` diventa `'\''`)
//! - Crea il file con nome univoco per ogni invocazione
//! - Elimina il file automaticamente quando il manifest esce di scope
//!
//! ## Posizione del file:
//! Il manifest viene creato nella directory corrente: ffmpeg risolve i path
//! relativi rispetto alla directory del manifest, quindi gli input relativi
//! digitati dall'utente continuano a funzionare.
//!
//! ## Concorrenza:
//! Ogni invocazione ottiene un file distinto (`concat_XXXXXX.txt`), quindi
//! due merge nella stessa directory non si sovrascrivono a vicenda.

use crate::error::MenuResult;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::{Builder as TempFileBuilder, NamedTempFile};
use tracing::debug;

/// A concat list file that lives exactly as long as this value
#[derive(Debug)]
pub struct ConcatManifest {
    file: NamedTempFile,
}

impl ConcatManifest {
    /// Write a manifest for `inputs` in `dir`
    pub fn create_in(dir: &Path, inputs: &[PathBuf]) -> MenuResult<Self> {
        let mut file = TempFileBuilder::new()
            .prefix("concat_")
            .suffix(".txt")
            .tempfile_in(dir)?;

        file.write_all(render_manifest(inputs).as_bytes())?;
        file.flush()?;

        debug!("Wrote concat manifest {} ({} entries)", file.path().display(), inputs.len());

        Ok(Self { file })
    }

    /// Location passed to ffmpeg after `-i`
    pub fn path(&self) -> &Path {
        self.file.path()
    }
}

/// Manifest body: one `file '<path>'` line per input
pub fn render_manifest(inputs: &[PathBuf]) -> String {
    inputs
        .iter()
        .map(|input| format!("file {}\n", quote_entry(input)))
        .collect()
}

/// Single-quote a path for the concat demuxer
pub fn quote_entry(path: &Path) -> String {
    format!("'{}'", path.to_string_lossy().replace('\'', r"'\''"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Barrier};
    use std::thread;
    use tempfile::TempDir;

    fn paths(items: &[&str]) -> Vec<PathBuf> {
        items.iter().map(PathBuf::from).collect()
    }

    #[test]
    fn test_render_manifest_lines() {
        let body = render_manifest(&paths(&["intro.mp4", "clips/main.mp4"]));
        assert_eq!(body, "file 'intro.mp4'\nfile 'clips/main.mp4'\n");
    }

    #[test]
    fn test_quote_entry_escapes_single_quotes() {
        assert_eq!(quote_entry(Path::new("it's.mp4")), r"'it'\''s.mp4'");
    }

    #[test]
    fn test_manifest_written_and_removed_on_drop() {
        let dir = TempDir::new().unwrap();
        let inputs = paths(&["a.mp3", "b.mp3"]);

        let manifest = ConcatManifest::create_in(dir.path(), &inputs).unwrap();
        let path = manifest.path().to_path_buf();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), render_manifest(&inputs));

        drop(manifest);
        assert!(!path.exists());
    }

    #[test]
    fn test_shared_manifest_name_keeps_only_last_writer() {
        // Two merges that both use a fixed `input.txt` clobber each other:
        // whatever is on disk afterwards belongs to a single invocation.
        let dir = TempDir::new().unwrap();
        let shared = Arc::new(dir.path().join("input.txt"));
        let first = render_manifest(&paths(&["/first/one.mp4", "/first/two.mp4"]));
        let second = render_manifest(&paths(&["/other/one.mp4", "/other/two.mp4"]));
        assert_eq!(first.len(), second.len());

        let barrier = Arc::new(Barrier::new(2));
        let handles: Vec<_> = [first.clone(), second.clone()]
            .into_iter()
            .map(|body| {
                let shared = Arc::clone(&shared);
                let barrier = Arc::clone(&barrier);
                thread::spawn(move || {
                    barrier.wait();
                    std::fs::write(shared.as_path(), body).unwrap();
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let on_disk = std::fs::read_to_string(shared.as_path()).unwrap();
        assert!(on_disk == first || on_disk == second);
        assert!(!(on_disk.contains("/first/") && on_disk.contains("/other/")));
    }

    #[test]
    fn test_concurrent_manifests_are_isolated() {
        let dir = Arc::new(TempDir::new().unwrap());
        let barrier = Arc::new(Barrier::new(2));
        let lists = [paths(&["/first/one.mp4", "/first/two.mp4"]), paths(&["/other/one.mp4"])];

        let handles: Vec<_> = lists
            .iter()
            .cloned()
            .map(|inputs| {
                let dir = Arc::clone(&dir);
                let barrier = Arc::clone(&barrier);
                thread::spawn(move || {
                    barrier.wait();
                    let manifest = ConcatManifest::create_in(dir.path(), &inputs).unwrap();
                    let body = std::fs::read_to_string(manifest.path()).unwrap();
                    (manifest, body, inputs)
                })
            })
            .collect();

        let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_ne!(results[0].0.path(), results[1].0.path());
        for (_, body, inputs) in &results {
            assert_eq!(body, &render_manifest(inputs));
        }
    }
}
