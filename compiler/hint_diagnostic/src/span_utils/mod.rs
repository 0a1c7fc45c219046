//! Line and column lookup for rendering spans.
//!
//! Emitters build one [`LineOffsetTable`] per file: line starts are computed
//! once, so each diagnostic costs a binary search instead of a scan.

/// Byte offset of every line start in one source.
///
/// # Example
///
/// ```
/// use hint_diagnostic::span_utils::LineOffsetTable;
///
/// let source = "a => b;;\n$x :: nope($x) => y;;";
/// let table = LineOffsetTable::build(source);
///
/// assert_eq!(table.offset_to_line_col(source, 15), (2, 7));
/// assert_eq!(table.line_text(source, 2), "$x :: nope($x) => y;;");
/// ```
#[derive(Clone, Debug, Default)]
pub struct LineOffsetTable {
    /// `starts[0] == 0`.
    starts: Vec<u32>,
}

impl LineOffsetTable {
    pub fn build(source: &str) -> Self {
        let newlines = memchr::memchr_iter(b'\n', source.as_bytes())
            .map(|i| u32::try_from(i + 1).unwrap_or(u32::MAX));
        LineOffsetTable {
            starts: std::iter::once(0).chain(newlines).collect(),
        }
    }

    /// 1-based line containing `offset`.
    ///
    /// A newline belongs to the line it ends.
    pub fn line_from_offset(&self, offset: u32) -> u32 {
        let index = match self.starts.binary_search(&offset) {
            Ok(exact) => exact,
            Err(insert) => insert.saturating_sub(1),
        };
        u32::try_from(index).unwrap_or(u32::MAX - 1) + 1
    }

    /// 1-based `(line, column)` of `offset`, clamped to the source.
    ///
    /// Columns count characters, so a span after `é` lines up in a terminal.
    pub fn offset_to_line_col(&self, source: &str, offset: u32) -> (u32, u32) {
        let line = self.line_from_offset(offset);
        let start = self.line_start(line);
        let offset = (offset as usize).min(source.len());
        let chars = source.get(start..offset).map_or(0, |s| s.chars().count());
        (line, u32::try_from(chars).unwrap_or(u32::MAX - 1) + 1)
    }

    /// Text of a 1-based line, without its line terminator.
    pub fn line_text<'s>(&self, source: &'s str, line: u32) -> &'s str {
        let start = self.line_start(line);
        let end = self
            .starts
            .get(line as usize)
            .map_or(source.len(), |&next| next as usize);
        source
            .get(start..end)
            .map_or("", |text| text.trim_end_matches(['\n', '\r']))
    }

    pub(crate) fn line_start(&self, line: u32) -> usize {
        self.starts
            .get(line.saturating_sub(1) as usize)
            .copied()
            .unwrap_or(0) as usize
    }
}
