use crate::domain::model::{CommentBlock, CommentStyle};
use std::path::Path;

const COMMENT_STYLES: &[(&str, CommentStyle)] = &[
    (".js", CommentStyle::DocBlock),
    (".jsx", CommentStyle::DocBlock),
    (".mjs", CommentStyle::DocBlock),
    (".cjs", CommentStyle::DocBlock),
    (".ts", CommentStyle::DocBlock),
    (".tsx", CommentStyle::DocBlock),
    (".css", CommentStyle::Block),
    (".scss", CommentStyle::Block),
    (".less", CommentStyle::Block),
    (".rs", CommentStyle::Block),
    (".java", CommentStyle::Block),
    (".kt", CommentStyle::Block),
    (".kts", CommentStyle::Block),
    (".php", CommentStyle::Block),
    (".c", CommentStyle::Block),
    (".h", CommentStyle::Block),
    (".cpp", CommentStyle::Block),
    (".hpp", CommentStyle::Block),
    (".cc", CommentStyle::Block),
    (".cs", CommentStyle::Block),
    (".go", CommentStyle::Block),
    (".swift", CommentStyle::Block),
    (".scala", CommentStyle::Block),
    (".dart", CommentStyle::Block),
    (".html", CommentStyle::Markup),
    (".htm", CommentStyle::Markup),
    (".xml", CommentStyle::Markup),
    (".svg", CommentStyle::Markup),
    (".vue", CommentStyle::Markup),
    (".md", CommentStyle::Markup),
    (".py", CommentStyle::TripleQuote),
    (".rb", CommentStyle::RubyDoc),
    (".lua", CommentStyle::LuaBlock),
    (".hs", CommentStyle::HaskellBlock),
    (".sh", CommentStyle::Hash),
    (".bash", CommentStyle::Hash),
    (".zsh", CommentStyle::Hash),
];

/// Comment style for an extension such as `.rs`. Matching ignores ASCII case.
pub fn comment_style_for(extension: &str) -> Option<CommentStyle> {
    COMMENT_STYLES
        .iter()
        .find(|(ext, _)| ext.eq_ignore_ascii_case(extension))
        .map(|(_, style)| *style)
}

pub fn supported_extensions() -> impl Iterator<Item = (&'static str, CommentStyle)> {
    COMMENT_STYLES.iter().copied()
}

/// Lower-cased suffix of the file name from its last `.` onward, e.g. `src/Main.RS` gives `.rs`.
///
/// A name that is only a dot-suffix is its own extension (`.html` gives `.html`).
/// Names without a dot, or ending in one, have no extension.
pub fn extension_of(path: &Path) -> Option<String> {
    let name = path.file_name()?.to_str()?;
    let dot = name.rfind('.')?;
    let extension = &name[dot..];
    if extension.len() == 1 {
        return None;
    }
    Some(extension.to_ascii_lowercase())
}

/// Wrap resolved signature text in the comment syntax for `extension`.
///
/// Returns `None` when the extension has no known comment syntax.
pub fn synthesize(extension: &str, resolved: &str) -> Option<CommentBlock> {
    let style = comment_style_for(extension)?;

    let mut lines: Vec<&str> = resolved.split('\n').collect();
    if lines.first() == Some(&"") {
        lines.remove(0);
    }

    let mut text = String::with_capacity(resolved.len() + lines.len() + 16);
    text.push_str(style.open());
    text.push('\n');
    for line in lines {
        text.push(' ');
        text.push_str(line);
        text.push('\n');
    }
    text.push_str(style.close());
    text.push_str("\n\n");

    Some(CommentBlock::new(style, text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_js_block_drops_leading_blank_line() {
        let block = synthesize(".js", "\nhello").unwrap();
        assert_eq!(block.as_str(), "/**\n hello\n*/\n\n");
    }

    #[test]
    fn test_multiline_python() {
        let block = synthesize(".py", "Author: Jane\nCreated: 07-03-2024").unwrap();
        assert_eq!(
            block.as_str(),
            "\"\"\"\n Author: Jane\n Created: 07-03-2024\n\"\"\"\n\n"
        );
    }

    #[test]
    fn test_only_first_blank_line_is_dropped() {
        let block = synthesize(".rs", "\n\nbody").unwrap();
        assert_eq!(block.as_str(), "/*\n \n body\n*/\n\n");
    }

    #[test]
    fn test_trailing_newline_yields_blank_content_line() {
        let block = synthesize(".c", "x\n").unwrap();
        assert_eq!(block.as_str(), "/*\n x\n \n*/\n\n");
    }

    #[test]
    fn test_empty_text_has_no_content_lines() {
        for (ext, style) in supported_extensions() {
            let block = synthesize(ext, "").unwrap();
            assert_eq!(
                block.as_str(),
                format!("{}\n{}\n\n", style.open(), style.close())
            );
            assert_eq!(block.content_lines(), 0);
        }
    }

    #[test]
    fn test_extension_case_is_ignored() {
        assert_eq!(synthesize(".PY", "x"), synthesize(".py", "x"));
        assert_eq!(comment_style_for(".Html"), Some(CommentStyle::Markup));
    }

    #[test]
    fn test_unsupported_extension() {
        assert!(synthesize(".xyz", "hello").is_none());
        assert!(synthesize("", "hello").is_none());
        // exact match only
        assert!(synthesize("py", "hello").is_none());
        assert!(synthesize(".pyc", "hello").is_none());
    }

    #[test]
    fn test_table_has_no_duplicate_keys() {
        let mut seen = HashSet::new();
        for (ext, _) in supported_extensions() {
            assert!(ext.starts_with('.'));
            assert_eq!(ext, ext.to_ascii_lowercase());
            assert!(seen.insert(ext), "duplicate extension {}", ext);
        }
    }

    #[test]
    fn test_every_style_is_reachable() {
        let used: HashSet<CommentStyle> = supported_extensions().map(|(_, s)| s).collect();
        for style in CommentStyle::ALL {
            assert!(used.contains(&style), "{:?} has no extension", style);
        }
    }

    #[test]
    fn test_extension_of() {
        assert_eq!(extension_of(Path::new("src/Main.RS")), Some(".rs".to_string()));
        assert_eq!(extension_of(Path::new("archive.tar.gz")), Some(".gz".to_string()));
        assert_eq!(extension_of(Path::new("Makefile")), None);
        assert_eq!(extension_of(Path::new("trailing.")), None);
        assert_eq!(extension_of(Path::new("v1.2/Makefile")), None);
        assert_eq!(extension_of(Path::new("site/.HTML")), Some(".html".to_string()));
        assert_eq!(extension_of(Path::new(".bashrc")), Some(".bashrc".to_string()));
    }
}
