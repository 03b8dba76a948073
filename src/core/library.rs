use std::path::{Path, PathBuf};

/// One directory's worth of entries the file browser cares about.
/// Names only (no directory prefix), each list sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirListing {
    pub dirs: Vec<String>,
    pub mp3s: Vec<String>,
    pub jpegs: Vec<String>,
}

/// List `dir` (non-recursive). Hidden entries (leading '.') are skipped.
pub fn list_dir(dir: &Path) -> Result<DirListing, String> {
    let entries = std::fs::read_dir(dir).map_err(|e| format!("{}: {e}", dir.display()))?;
    let mut out = DirListing::default();

    for entry in entries {
        let entry = entry.map_err(|e| e.to_string())?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.starts_with('.') {
            continue;
        }

        let path = entry.path();
        if path.is_dir() {
            out.dirs.push(name);
        } else if is_mp3(&path) {
            out.mp3s.push(name);
        } else if is_jpeg(&path) {
            out.jpegs.push(name);
        }
    }

    out.dirs.sort();
    out.mp3s.sort();
    out.jpegs.sort();
    Ok(out)
}

/// Keep only `.mp3` paths, sorted by full path (the GUI's "mp3 files" button).
pub fn sorted_mp3s(dir: &Path, names: &[String]) -> Vec<PathBuf> {
    let mut out: Vec<PathBuf> = names
        .iter()
        .map(|n| dir.join(n))
        .filter(|p| is_mp3(p))
        .collect();
    out.sort();
    out
}

pub fn is_mp3(path: &Path) -> bool {
    has_extension(path, &["mp3"])
}

pub fn is_jpeg(path: &Path) -> bool {
    has_extension(path, &["jpg", "jpeg"])
}

fn has_extension(path: &Path, wanted: &[&str]) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| wanted.iter().any(|w| ext.eq_ignore_ascii_case(w)))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn lists_sorted_and_skips_hidden() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["02.MP3", "01.mp3", ".hidden.mp3", "cover.JPEG", "notes.txt", "a.jpg"] {
            fs::write(dir.path().join(name), b"x").unwrap();
        }
        fs::create_dir(dir.path().join("Disc 2")).unwrap();
        fs::create_dir(dir.path().join(".git")).unwrap();

        let listing = list_dir(dir.path()).unwrap();
        assert_eq!(listing.dirs, ["Disc 2"]);
        assert_eq!(listing.mp3s, ["01.mp3", "02.MP3"]);
        assert_eq!(listing.jpegs, ["a.jpg", "cover.JPEG"]);
    }

    #[test]
    fn missing_dir_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(list_dir(&dir.path().join("gone")).is_err());
    }

    #[test]
    fn sorted_mp3s_filters_and_sorts() {
        let dir = Path::new("/books/dune");
        let names = vec!["b.mp3".to_string(), "cover.jpg".into(), "a.Mp3".into()];

        assert_eq!(
            sorted_mp3s(dir, &names),
            [dir.join("a.Mp3"), dir.join("b.mp3")]
        );
    }
}
