//! Editor adapter that edits the file on disk.
//!
//! Stands in for an editor buffer when methodgen runs from the command line:
//! the current file is read, all edits are applied against its original
//! text, and the result is written back through the same [`FileStore`].

use std::path::Path;

use methodgen_core::{
    application::ports::{Editor, FileStore},
    domain::{CursorPosition, TextEdit},
    error::MethodgenResult,
};
use tracing::{debug, instrument};

/// [`Editor`] backed by a [`FileStore`].
#[derive(Debug, Clone)]
pub struct FileBufferEditor<S> {
    store: S,
}

impl<S: FileStore> FileBufferEditor<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

impl<S: FileStore> Editor for FileBufferEditor<S> {
    #[instrument(skip_all, fields(file = %file.display(), edits = edits.len()))]
    fn insert(&self, file: &Path, edits: &[TextEdit]) -> MethodgenResult<()> {
        let original = self.store.read_to_string(file)?;
        let edited = apply_edits(&original, edits);
        debug!(
            before = original.len(),
            after = edited.len(),
            "Buffer edited"
        );
        self.store.write(file, &edited)
    }
}

/// Apply insertions whose positions all refer to `text` as given.
///
/// Positions past the end of a line clamp to the end of that line; lines
/// past the end of the text clamp to the end of the text. Insertions at the
/// same position keep their relative order.
pub fn apply_edits(text: &str, edits: &[TextEdit]) -> String {
    let mut located: Vec<(usize, &str)> = edits
        .iter()
        .map(|edit| (byte_offset(text, edit.position), edit.text.as_str()))
        .collect();
    // stable: equal offsets keep input order
    located.sort_by_key(|(offset, _)| *offset);

    let extra: usize = located.iter().map(|(_, t)| t.len()).sum();
    let mut out = String::with_capacity(text.len() + extra);
    let mut cursor = 0;
    for (offset, insertion) in located {
        out.push_str(&text[cursor..offset]);
        out.push_str(insertion);
        cursor = offset;
    }
    out.push_str(&text[cursor..]);
    out
}

/// Byte offset of a line/column (column counted in chars).
fn byte_offset(text: &str, position: CursorPosition) -> usize {
    let mut line_start = 0;
    for _ in 0..position.line {
        match text[line_start..].find('\n') {
            Some(newline) => line_start += newline + 1,
            None => return text.len(),
        }
    }

    let line = &text[line_start..];
    let line_len = line.find('\n').unwrap_or(line.len());
    let line = &line[..line_len];

    let column = line
        .char_indices()
        .nth(position.column)
        .map(|(i, _)| i)
        .unwrap_or(line.len());

    line_start + column
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryFilesystem;

    fn at(line: usize, column: usize, text: &str) -> TextEdit {
        TextEdit::insert(CursorPosition::new(line, column), text)
    }

    #[test]
    fn inserts_at_line_and_column() {
        let text = "package a\n\nfunc x() {}\n";
        assert_eq!(
            apply_edits(text, &[at(1, 0, "// hi")]),
            "package a\n// hi\nfunc x() {}\n"
        );
        assert_eq!(apply_edits(text, &[at(0, 7, "_")]), "package_ a\n\nfunc x() {}\n");
    }

    #[test]
    fn positions_refer_to_original_text() {
        let text = "l0\nl1\nl2\nl3\n";
        let out = apply_edits(text, &[at(2, 0, "B"), at(0, 2, "A")]);
        assert_eq!(out, "l0A\nl1\nBl2\nl3\n");
    }

    #[test]
    fn out_of_range_positions_clamp() {
        assert_eq!(apply_edits("ab\ncd", &[at(0, 99, "!")]), "ab!\ncd");
        assert_eq!(apply_edits("ab\ncd", &[at(9, 0, "!")]), "ab\ncd!");
        assert_eq!(apply_edits("", &[at(0, 0, "x"), at(2, 0, "y")]), "xy");
    }

    #[test]
    fn columns_count_characters() {
        assert_eq!(apply_edits("héllo", &[at(0, 2, "|")]), "hé|llo");
    }

    #[test]
    fn editor_rewrites_file_through_store() {
        let fs = MemoryFilesystem::new().with_file("/src/a.go", "package a\n\n\n");
        let editor = FileBufferEditor::new(fs.clone());

        editor
            .insert(
                Path::new("/src/a.go"),
                &[at(1, 0, "Foo()"), at(3, 0, "func Foo() {}\n")],
            )
            .unwrap();

        assert_eq!(
            fs.read_file(Path::new("/src/a.go")).unwrap(),
            "package a\nFoo()\n\nfunc Foo() {}\n"
        );
    }

    #[test]
    fn editor_fails_for_missing_file() {
        let editor = FileBufferEditor::new(MemoryFilesystem::new());
        assert!(editor.insert(Path::new("/nope"), &[at(0, 0, "x")]).is_err());
    }
}
