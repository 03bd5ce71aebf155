use skillcheck::frontmatter::{extract_field, split_document, FrontmatterError};

// ---------------------------------------------------------------------------
// Document splitting
// ---------------------------------------------------------------------------

#[test]
fn split_valid_document() {
    let content = "---\nname: my-skill\ndescription: Something\n---\n\n# Body\n";
    let doc = split_document(content).unwrap();
    assert_eq!(doc.frontmatter, "name: my-skill\ndescription: Something");
    assert_eq!(doc.body, "\n\n# Body\n");
}

#[test]
fn split_without_opening_marker_fails() {
    let err = split_document("# Just a heading\n").unwrap_err();
    assert_eq!(err, FrontmatterError::MissingOpeningMarker);
}

#[test]
fn split_without_closing_marker_fails() {
    let err = split_document("---\nname: my-skill\n").unwrap_err();
    assert_eq!(err, FrontmatterError::MissingClosingMarker);
}

#[test]
fn split_bare_marker_only_fails() {
    let err = split_document("---").unwrap_err();
    assert_eq!(err, FrontmatterError::MissingClosingMarker);
}

// ---------------------------------------------------------------------------
// Field extraction: scalar forms
// ---------------------------------------------------------------------------

#[test]
fn single_line_scalar() {
    let fm = "name: foo-bar\ndescription: A one-liner";
    assert_eq!(extract_field(fm, "name").as_deref(), Some("foo-bar"));
    assert_eq!(extract_field(fm, "description").as_deref(), Some("A one-liner"));
}

#[test]
fn scalar_value_is_trimmed() {
    let fm = "name:    padded-name   ";
    assert_eq!(extract_field(fm, "name").as_deref(), Some("padded-name"));
}

#[test]
fn absent_field_is_none() {
    let fm = "name: foo-bar";
    assert_eq!(extract_field(fm, "description"), None);
}

#[test]
fn empty_field_is_present_but_empty() {
    // Present-but-empty is distinct from absent: it still fails required
    // checks downstream, but the key was written.
    let fm = "name:\ndescription: something";
    assert_eq!(extract_field(fm, "name").as_deref(), Some(""));
}

#[test]
fn field_name_must_match_exactly() {
    let fm = "names: oops\nname: actual";
    assert_eq!(extract_field(fm, "name").as_deref(), Some("actual"));
}

#[test]
fn indented_key_is_not_top_level() {
    let fm = "description: |\n  name: sneaky\n  more text";
    // The indented "name:" line is literal-block content, not a field.
    assert_eq!(extract_field(fm, "name"), None);
    assert_eq!(
        extract_field(fm, "description").as_deref(),
        Some("name: sneaky\nmore text")
    );
}

// ---------------------------------------------------------------------------
// Field extraction: block forms
// ---------------------------------------------------------------------------

#[test]
fn literal_block_preserves_line_breaks() {
    let fm = "name: foo-bar\ndescription: |\n  line one\n  line two";
    assert_eq!(extract_field(fm, "name").as_deref(), Some("foo-bar"));
    assert_eq!(
        extract_field(fm, "description").as_deref(),
        Some("line one\nline two")
    );
}

#[test]
fn literal_block_strip_variant() {
    let fm = "description: |-\n  line one\n  line two\n";
    assert_eq!(
        extract_field(fm, "description").as_deref(),
        Some("line one\nline two")
    );
}

#[test]
fn literal_block_keeps_interior_blank_lines() {
    let fm = "description: |\n  para one\n\n  para two";
    assert_eq!(
        extract_field(fm, "description").as_deref(),
        Some("para one\n\npara two")
    );
}

#[test]
fn folded_block_joins_with_spaces() {
    let fm = "description: >\n  line one\n  line two";
    assert_eq!(
        extract_field(fm, "description").as_deref(),
        Some("line one line two")
    );
}

#[test]
fn folded_block_strip_variant() {
    let fm = "description: >-\n  wraps onto\n  a second line";
    assert_eq!(
        extract_field(fm, "description").as_deref(),
        Some("wraps onto a second line")
    );
}

#[test]
fn block_with_uneven_indentation_dedents_to_minimum() {
    let fm = "description: |\n  first\n    nested deeper\n  last";
    assert_eq!(
        extract_field(fm, "description").as_deref(),
        Some("first\n  nested deeper\nlast")
    );
}

// ---------------------------------------------------------------------------
// Field extraction: inline lists and plain multi-line scalars
// ---------------------------------------------------------------------------

#[test]
fn inline_list_is_flattened() {
    let fm = "tags: [pdf, excel, csv]";
    assert_eq!(extract_field(fm, "tags").as_deref(), Some("pdf, excel, csv"));
}

#[test]
fn plain_multiline_scalar_joins_with_spaces() {
    let fm = "description: starts on the key line\n  and continues indented\n  until the end";
    assert_eq!(
        extract_field(fm, "description").as_deref(),
        Some("starts on the key line and continues indented until the end")
    );
}

#[test]
fn value_stops_at_next_top_level_key() {
    let fm = "description: only this line\nname: other\nallowed-tools: [Read]";
    assert_eq!(
        extract_field(fm, "description").as_deref(),
        Some("only this line")
    );
}

#[test]
fn hyphenated_key_ends_previous_value() {
    let fm = "description: >\n  folded text here\nallowed-tools: [Read]";
    assert_eq!(
        extract_field(fm, "description").as_deref(),
        Some("folded text here")
    );
}

#[test]
fn value_continues_to_end_of_frontmatter() {
    let fm = "name: foo\ndescription: tail field\n  continues here";
    assert_eq!(
        extract_field(fm, "description").as_deref(),
        Some("tail field continues here")
    );
}
