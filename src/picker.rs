//! Interactive CSV file selection
//!
//! Lets the user point the tool at a directory of exported grids and pick
//! one from a numbered menu, instead of typing a path.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

/// List the `.csv` files directly inside `dir`, sorted by file name.
/// Extension matching is case-insensitive.
pub fn list_csv_files(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        let is_csv = path
            .extension()
            .is_some_and(|e| e.eq_ignore_ascii_case("csv"));
        if path.is_file() && is_csv {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Show a numbered menu of `files` on `output` and read a 1-based choice
/// from `input`.
///
/// Returns `Ok(None)` for a non-numeric or out-of-range selection.
pub fn prompt_choice<R: BufRead, W: Write>(
    files: &[PathBuf],
    mut input: R,
    mut output: W,
) -> io::Result<Option<PathBuf>> {
    writeln!(output, "Select a CSV file to convert:")?;
    for (i, file) in files.iter().enumerate() {
        let name = file.file_name().map_or_else(
            || file.display().to_string(),
            |n| n.to_string_lossy().into_owned(),
        );
        writeln!(output, "{}. {}", i + 1, name)?;
    }
    write!(output, "Enter number: ")?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    let choice = line.trim();

    match choice.parse::<usize>() {
        Ok(n) if n >= 1 && n <= files.len() => Ok(Some(files[n - 1].clone())),
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Cursor;

    fn touch(dir: &Path, name: &str) {
        File::create(dir.join(name)).unwrap();
    }

    #[test]
    fn test_list_filters_and_sorts() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "zebra.csv");
        touch(dir.path(), "apple.csv");
        touch(dir.path(), "notes.txt");
        touch(dir.path(), "UPPER.CSV");

        let files = list_csv_files(dir.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["UPPER.CSV", "apple.csv", "zebra.csv"]);
    }

    #[test]
    fn test_list_empty_dir() {
        let dir = tempfile::tempdir().unwrap();
        assert!(list_csv_files(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn test_prompt_valid_choice() {
        let files = vec![PathBuf::from("a.csv"), PathBuf::from("b.csv")];
        let mut menu = Vec::new();

        let picked = prompt_choice(&files, Cursor::new("2\n"), &mut menu).unwrap();
        assert_eq!(picked, Some(PathBuf::from("b.csv")));

        let menu = String::from_utf8(menu).unwrap();
        assert!(menu.contains("1. a.csv"));
        assert!(menu.contains("2. b.csv"));
        assert!(menu.contains("Enter number:"));
    }

    #[test]
    fn test_prompt_trims_input() {
        let files = vec![PathBuf::from("a.csv")];
        let picked = prompt_choice(&files, Cursor::new("  1  \n"), Vec::new()).unwrap();
        assert_eq!(picked, Some(PathBuf::from("a.csv")));
    }

    #[test]
    fn test_prompt_rejects_out_of_range() {
        let files = vec![PathBuf::from("a.csv")];
        assert_eq!(prompt_choice(&files, Cursor::new("0\n"), Vec::new()).unwrap(), None);
        assert_eq!(prompt_choice(&files, Cursor::new("2\n"), Vec::new()).unwrap(), None);
    }

    #[test]
    fn test_prompt_rejects_non_numeric() {
        let files = vec![PathBuf::from("a.csv")];
        assert_eq!(prompt_choice(&files, Cursor::new("x\n"), Vec::new()).unwrap(), None);
        assert_eq!(prompt_choice(&files, Cursor::new("\n"), Vec::new()).unwrap(), None);
    }
}
