use std::fs::{self, OpenOptions};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::info;

/// `day7.in` for the full input, `day7test2.in` for the second example.
pub fn path(dir: &Path, day: u8, test: Option<u32>) -> PathBuf {
    match test {
        None => dir.join(format!("day{}.in", day)),
        Some(test) => dir.join(format!("day{}test{}.in", day, test)),
    }
}

pub fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("cannot read input {}", path.display()))
}

/// Creates empty full and example inputs for `day`, leaving existing files alone.
/// Returns the files that were actually created.
pub fn scaffold(dir: &Path, day: u8) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir).with_context(|| format!("cannot create {}", dir.display()))?;
    let mut created = vec![];
    for file in [path(dir, day, None), path(dir, day, Some(1))] {
        match OpenOptions::new().write(true).create_new(true).open(&file) {
            Ok(_) => {
                info!("created {}", file.display());
                created.push(file);
            },
            Err(e) if e.kind() == ErrorKind::AlreadyExists => info!("{} already exists", file.display()),
            Err(e) => return Err(e).with_context(|| format!("cannot create {}", file.display())),
        }
    }
    Ok(created)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_names() {
        let dir = Path::new("inputs");
        assert_eq!(path(dir, 7, None), Path::new("inputs/day7.in"));
        assert_eq!(path(dir, 12, Some(3)), Path::new("inputs/day12test3.in"));
    }

    #[test]
    fn scaffold_keeps_existing_inputs() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("inputs");

        let created = scaffold(&dir, 16).unwrap();
        assert_eq!(created, vec![dir.join("day16.in"), dir.join("day16test1.in")]);

        fs::write(dir.join("day16.in"), "1 2 3\n").unwrap();
        assert!(scaffold(&dir, 16).unwrap().is_empty());
        assert_eq!(read(&dir.join("day16.in")).unwrap(), "1 2 3\n");
    }

    #[test]
    fn read_names_missing_file() {
        let err = read(Path::new("no/such/day99.in")).unwrap_err();
        assert!(err.to_string().contains("no/such/day99.in"));
    }
}
