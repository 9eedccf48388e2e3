use crate::error::ParseError;
use crate::parsing::{Document, Markdown};
use relative_path::{RelativePath, RelativePathBuf};
use std::fs;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(RelativePathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid notes directory: {0}")]
    InvalidNotesDir(String),
    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: RelativePathBuf,
        #[source]
        source: ParseError,
    },
}

/// Read a markdown file relative to the notes root
pub fn read_file(relative_path: &RelativePath, notes_root: &Path) -> Result<String, IoError> {
    let absolute_path = relative_path.to_path(notes_root);
    if !absolute_path.is_file() {
        return Err(IoError::NotFound(relative_path.to_relative_path_buf()));
    }
    Ok(fs::read_to_string(&absolute_path)?)
}

/// Write content to a file relative to the notes root, creating parent directories
pub fn write_file(
    relative_path: &RelativePath,
    notes_root: &Path,
    content: &str,
) -> Result<(), IoError> {
    let absolute_path = relative_path.to_path(notes_root);
    if let Some(parent) = absolute_path.parent() {
        fs::create_dir_all(parent)?;
    }
    Ok(fs::write(&absolute_path, content)?)
}

/// Read and parse a markdown file with the given pipeline
pub fn load_document(
    relative_path: &RelativePath,
    notes_root: &Path,
    markdown: &Markdown,
) -> Result<Document, IoError> {
    let content = read_file(relative_path, notes_root)?;
    markdown.parse(&content).map_err(|source| IoError::Parse {
        path: relative_path.to_relative_path_buf(),
        source,
    })
}

/// All `.md` files under the notes root, relative to it, sorted
pub fn scan_markdown_files(notes_root: &Path) -> Result<Vec<RelativePathBuf>, IoError> {
    validate_notes_dir(notes_root)?;

    let mut files = Vec::new();
    scan_directory_recursive(notes_root, notes_root, &mut files)?;
    files.sort();
    log::debug!("found {} markdown files in {}", files.len(), notes_root.display());
    Ok(files)
}

fn scan_directory_recursive(
    root: &Path,
    dir: &Path,
    files: &mut Vec<RelativePathBuf>,
) -> Result<(), IoError> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();

        if path.is_dir() {
            scan_directory_recursive(root, &path, files)?;
        } else if let Some(ext) = path.extension()
            && ext == "md"
            && let Ok(relative) = path.strip_prefix(root)
            && let Ok(relative) = RelativePathBuf::from_path(relative)
        {
            files.push(relative);
        }
    }

    Ok(())
}

pub fn validate_notes_dir(path: &Path) -> Result<(), IoError> {
    if !path.is_dir() {
        return Err(IoError::InvalidNotesDir(format!(
            "{} is not a directory",
            path.display()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::callouts::CalloutExtension;
    use crate::tests::{create_test_file, create_test_notes_dir};

    #[test]
    fn test_scan_finds_relative_paths() {
        // Given a notes directory with markdown files
        let notes_dir = create_test_notes_dir();
        create_test_file(&notes_dir, "b.md", "> [!note]");
        create_test_file(&notes_dir, "a.md", "# A");

        // When scanning for files
        let files = scan_markdown_files(notes_dir.path()).unwrap();

        // Then we get sorted paths relative to the root
        assert_eq!(files, vec![RelativePathBuf::from("a.md"), RelativePathBuf::from("b.md")]);
    }

    #[test]
    fn test_scan_nested_directories() {
        let notes_dir = create_test_notes_dir();
        create_test_file(&notes_dir, "root.md", "# Root file");
        let sub_dir = notes_dir.path().join("subfolder");
        std::fs::create_dir(&sub_dir).unwrap();
        std::fs::write(sub_dir.join("nested.md"), "# Nested file").unwrap();

        let files = scan_markdown_files(notes_dir.path()).unwrap();

        assert_eq!(files.len(), 2);
        assert!(files.contains(&RelativePathBuf::from("subfolder/nested.md")));
    }

    #[test]
    fn test_ignore_non_markdown_files() {
        let notes_dir = create_test_notes_dir();
        create_test_file(&notes_dir, "document.md", "# Markdown");
        create_test_file(&notes_dir, "image.png", "fake image data");
        create_test_file(&notes_dir, "config.toml", "");

        let files = scan_markdown_files(notes_dir.path()).unwrap();

        assert_eq!(files, vec![RelativePathBuf::from("document.md")]);
    }

    #[test]
    fn test_scan_rejects_missing_directory() {
        let result = scan_markdown_files(Path::new("/nonexistent/path"));
        assert!(matches!(result, Err(IoError::InvalidNotesDir(_))));
    }

    #[test]
    fn test_validate_notes_dir_rejects_file() {
        let notes_dir = create_test_notes_dir();
        let file = create_test_file(&notes_dir, "note.md", "");
        assert!(validate_notes_dir(notes_dir.path()).is_ok());
        assert!(matches!(validate_notes_dir(&file), Err(IoError::InvalidNotesDir(_))));
    }

    #[test]
    fn test_read_file_not_found() {
        let notes_dir = create_test_notes_dir();
        let result = read_file(RelativePath::new("nonexistent.md"), notes_dir.path());
        assert!(matches!(result, Err(IoError::NotFound(path)) if path == "nonexistent.md"));
    }

    #[test]
    fn test_write_then_read_creates_parent_directories() {
        let notes_dir = create_test_notes_dir();
        let relative_path = RelativePath::new("folder/subfolder/new.md");
        let content = "> [!tip] Nested\n> folders work";

        write_file(relative_path, notes_dir.path(), content).unwrap();

        assert!(notes_dir.path().join("folder").join("subfolder").is_dir());
        assert_eq!(read_file(relative_path, notes_dir.path()).unwrap(), content);
    }

    #[test]
    fn test_load_document_parses_callouts() {
        let notes_dir = create_test_notes_dir();
        create_test_file(&notes_dir, "note.md", "> [!warning] Careful\n> body");
        let markdown = Markdown::new().with_extension(CalloutExtension::default());

        let document =
            load_document(RelativePath::new("note.md"), notes_dir.path(), &markdown).unwrap();

        assert_eq!(document.outline(), vec!["⚠️ Careful [warning]", "  body"]);
    }

    #[test]
    fn test_load_document_reports_parse_failures_with_path() {
        let notes_dir = create_test_notes_dir();
        create_test_file(&notes_dir, "deep.md", "> [!note]\n> body");
        let markdown = Markdown::new()
            .with_extension(CalloutExtension::default())
            .with_max_nesting(0);

        let result = load_document(RelativePath::new("deep.md"), notes_dir.path(), &markdown);

        match result {
            Err(IoError::Parse { path, source }) => {
                assert_eq!(path, "deep.md");
                assert_eq!(source, ParseError::NestingTooDeep { depth: 1, limit: 0 });
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }
}
