use std::fmt;
use std::path::PathBuf;

/// Comment syntax of a file type, identified by its opening marker.
///
/// Each variant owns both markers, so the closing marker can never drift
/// away from the opening one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommentStyle {
    /// `/** ... */`
    DocBlock,
    /// `/* ... */`
    Block,
    /// `<!-- ... -->`
    Markup,
    /// `""" ... """`
    TripleQuote,
    /// `=begin ... =end`
    RubyDoc,
    /// `--[[ ... --]]`
    LuaBlock,
    /// `{- ... -}`
    HaskellBlock,
    /// `# ... #`, with the content lines left uncommented.
    Hash,
}

impl CommentStyle {
    pub const ALL: [CommentStyle; 8] = [
        CommentStyle::DocBlock,
        CommentStyle::Block,
        CommentStyle::Markup,
        CommentStyle::TripleQuote,
        CommentStyle::RubyDoc,
        CommentStyle::LuaBlock,
        CommentStyle::HaskellBlock,
        CommentStyle::Hash,
    ];

    pub fn open(self) -> &'static str {
        match self {
            CommentStyle::DocBlock => "/**",
            CommentStyle::Block => "/*",
            CommentStyle::Markup => "<!--",
            CommentStyle::TripleQuote => "\"\"\"",
            CommentStyle::RubyDoc => "=begin",
            CommentStyle::LuaBlock => "--[[",
            CommentStyle::HaskellBlock => "{-",
            CommentStyle::Hash => "#",
        }
    }

    pub fn close(self) -> &'static str {
        match self {
            CommentStyle::DocBlock | CommentStyle::Block => "*/",
            CommentStyle::Markup => "-->",
            CommentStyle::TripleQuote => "\"\"\"",
            CommentStyle::RubyDoc => "=end",
            CommentStyle::LuaBlock => "--]]",
            CommentStyle::HaskellBlock => "-}",
            CommentStyle::Hash => "#",
        }
    }

    /// Whether the lines between the markers are inert in the target language.
    ///
    /// `#` only comments out its own line, so a signed shell script runs the
    /// signature lines as commands and loses a leading shebang.
    pub fn comments_out_content(self) -> bool {
        !matches!(self, CommentStyle::Hash)
    }
}

/// A delimiter-wrapped signature, ready to be inserted at offset 0 of a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentBlock {
    style: CommentStyle,
    text: String,
}

impl CommentBlock {
    pub(crate) fn new(style: CommentStyle, text: String) -> Self {
        Self { style, text }
    }

    pub fn style(&self) -> CommentStyle {
        self.style
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Number of content lines between the two markers.
    pub fn content_lines(&self) -> usize {
        // open marker, close marker and the trailing blank line
        self.text.lines().count().saturating_sub(3)
    }
}

impl fmt::Display for CommentBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl AsRef<str> for CommentBlock {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignOutcome {
    Signed { path: PathBuf, bytes: usize },
    Disabled,
    NotSupported { path: PathBuf },
    Failed { path: PathBuf, error: String },
}
