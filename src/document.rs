//! Host document seam
//!
//! The host editor is an external collaborator; the engine only needs a
//! snapshot of the text around the cursor and one way to commit text. Both
//! are expressed here so the controller never touches a concrete editor.

/// Formatting marks active at the cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextMarks {
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
}

/// Read-only view of the host document at one point in time
///
/// Handed to the content fetcher so it can build a completion prompt, and
/// used by the controller to anchor a suggestion to a cursor position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentSnapshot {
    /// Full document text
    pub text: String,
    /// Cursor position as a character offset into `text`
    pub cursor: usize,
    /// Formatting marks active at the cursor
    pub marks: TextMarks,
}

/// Committed-content seam into the host document
///
/// `insert_at_cursor` must apply the text as regular document content (the
/// kind the user could have typed), carrying the given marks.
pub trait HostDocument {
    fn text(&self) -> &str;

    /// Cursor position as a character offset
    fn cursor(&self) -> usize;

    /// Formatting marks active at the cursor
    fn cursor_marks(&self) -> TextMarks;

    /// Insert committed text at the cursor, leaving the cursor after it
    fn insert_at_cursor(&mut self, text: &str, marks: TextMarks);

    /// Capture the current document view for a fetch
    fn snapshot(&self) -> DocumentSnapshot {
        DocumentSnapshot {
            text: self.text().to_string(),
            cursor: self.cursor(),
            marks: self.cursor_marks(),
        }
    }
}

/// Minimal in-memory document
///
/// Enough of a host document for tests and headless embedding: plain text,
/// a cursor, and one set of active marks. Marks passed to `insert_at_cursor`
/// are accepted but not stored per character.
#[derive(Debug, Clone, Default)]
pub struct BufferDocument {
    text: String,
    cursor: usize,
    marks: TextMarks,
}

impl BufferDocument {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.chars().count();
        BufferDocument {
            text,
            cursor,
            marks: TextMarks::default(),
        }
    }

    pub fn set_marks(&mut self, marks: TextMarks) {
        self.marks = marks;
    }

    /// Move the cursor to a character offset, clamped to the text length
    pub fn move_cursor(&mut self, cursor: usize) {
        self.cursor = cursor.min(self.text.chars().count());
    }

    /// Type text at the cursor, as a user edit would
    pub fn type_text(&mut self, text: &str) {
        let marks = self.marks;
        self.insert_at_cursor(text, marks);
    }

    fn byte_offset(&self, char_offset: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_offset)
            .map(|(idx, _)| idx)
            .unwrap_or(self.text.len())
    }
}

impl HostDocument for BufferDocument {
    fn text(&self) -> &str {
        &self.text
    }

    fn cursor(&self) -> usize {
        self.cursor
    }

    fn cursor_marks(&self) -> TextMarks {
        self.marks
    }

    fn insert_at_cursor(&mut self, text: &str, _marks: TextMarks) {
        let at = self.byte_offset(self.cursor);
        self.text.insert_str(at, text);
        self.cursor += text.chars().count();
    }
}
