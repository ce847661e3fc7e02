use add_signature::{resolve, supported_extensions, synthesize, CommentStyle};
use chrono::{NaiveDate, NaiveDateTime};

fn march_7th() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, 7)
        .unwrap()
        .and_hms_opt(16, 45, 0)
        .unwrap()
}

#[test]
fn test_templates_without_groups_are_untouched() {
    let templates = [
        "",
        "plain",
        "multi\nline\n",
        "$DD {MM} $ {YYYY}",
        "price: $5 {not a group}",
    ];
    for template in templates {
        assert_eq!(resolve(template, &march_7th()), template);
    }
}

#[test]
fn test_token_order_is_preserved() {
    assert_eq!(resolve("${DD-MM-YYYY}", &march_7th()), "07-03-2024");
    assert_eq!(resolve("${MM-DD}", &march_7th()), "03-07");
    assert_eq!(resolve("${hh-mm-DD}", &march_7th()), "16h-45m-07");
}

#[test]
fn test_unknown_token_inside_group() {
    assert_eq!(resolve("${DD-XX}", &march_7th()), "07-XX");
}

#[test]
fn test_several_groups_in_one_template() {
    let template = "\nCreated: ${DD-MM-YYYY} at ${hh-mm}\nCopyright ${YEAR}";
    assert_eq!(
        resolve(template, &march_7th()),
        "\nCreated: 07-03-2024 at 16h-45m\nCopyright 2024"
    );
}

#[test]
fn test_empty_text_gives_bare_delimiters() {
    for (extension, style) in supported_extensions() {
        let block = synthesize(extension, "").unwrap();
        assert_eq!(block.style(), style);
        assert_eq!(block.content_lines(), 0);
        assert_eq!(
            block.as_str(),
            format!("{}\n{}\n\n", style.open(), style.close())
        );
    }
}

#[test]
fn test_extension_casing_does_not_matter() {
    let text = "Author: Jane\nCreated: today";
    assert_eq!(synthesize(".PY", text), synthesize(".py", text));
    assert_eq!(synthesize(".Rs", text), synthesize(".rs", text));
}

#[test]
fn test_leading_blank_line_is_stripped() {
    let block = synthesize(".js", "\nhello").unwrap();
    assert_eq!(block.to_string(), "/**\n hello\n*/\n\n");
}

#[test]
fn test_unsupported_extension_has_no_block() {
    assert_eq!(synthesize(".xyz", "hello"), None);
}

#[test]
fn test_close_marker_follows_open_marker() {
    for (extension, style) in supported_extensions() {
        let expected_close = match style.open() {
            "\"\"\"" => "\"\"\"",
            "<!--" => "-->",
            "=begin" => "=end",
            "--[[" => "--]]",
            "{-" => "-}",
            "#" => "#",
            _ => "*/",
        };
        let block = synthesize(extension, "x").unwrap();
        assert!(
            block.as_str().ends_with(&format!("\n{}\n\n", expected_close)),
            "{} produced {:?}",
            extension,
            block.as_str()
        );
    }
}

#[test]
fn test_known_languages() {
    let cases = [
        (".js", CommentStyle::DocBlock),
        (".ts", CommentStyle::DocBlock),
        (".html", CommentStyle::Markup),
        (".css", CommentStyle::Block),
        (".rb", CommentStyle::RubyDoc),
        (".rs", CommentStyle::Block),
        (".java", CommentStyle::Block),
        (".kt", CommentStyle::Block),
        (".kts", CommentStyle::Block),
        (".php", CommentStyle::Block),
        (".c", CommentStyle::Block),
        (".swift", CommentStyle::Block),
        (".py", CommentStyle::TripleQuote),
        (".lua", CommentStyle::LuaBlock),
        (".hs", CommentStyle::HaskellBlock),
        (".sh", CommentStyle::Hash),
    ];
    for (extension, style) in cases {
        assert_eq!(
            synthesize(extension, "x").map(|b| b.style()),
            Some(style),
            "{}",
            extension
        );
    }
}

#[test]
fn test_resolve_then_synthesize() {
    let resolved = resolve("\nCreated: ${DD-MM-YYYY}\nBy: Jane", &march_7th());
    let block = synthesize(".rb", &resolved).unwrap();
    assert_eq!(
        block.as_str(),
        "=begin\n Created: 07-03-2024\n By: Jane\n=end\n\n"
    );
}
