//! Classification properties of the node formatter.

use cos_explorer::cos::{CosString, CosValue, Dictionary, Document, Name, Stream};
use cos_explorer::render::{ArrayEntry, IconKind, MapEntry, NodeFormatter, TreeNode};

fn render_value(value: &CosValue) -> cos_explorer::Rendered {
    NodeFormatter::new().render(&TreeNode::Value(value))
}

#[test]
fn printable_strings_render_as_text() {
    for text in ["", "a", "Hello, World!", "tab\u{a0}nbsp", "Ünïcødé", "\u{4e2d}\u{6587}"] {
        let rendered = render_value(&CosValue::text(text));
        assert_eq!(rendered.label, text);
        assert_eq!(rendered.icon, IconKind::String);
    }
}

#[test]
fn strings_with_control_characters_render_as_hex() {
    for bytes in [
        vec![0x00],
        vec![b'a', b'\n', b'b'],
        vec![b'x', 0x7F],
        vec![0x9F, b'y'],
    ] {
        let value = CosValue::String(CosString::from_bytes(bytes.clone()));
        let expected: String = bytes.iter().map(|b| format!("{:02X}", b)).collect();

        let rendered = render_value(&value);

        assert_eq!(rendered.label, format!("<{}>", expected));
        assert_eq!(rendered.icon, IconKind::Hex);
    }
}

#[test]
fn pdf_doc_encoded_punctuation_renders_as_text() {
    for (bytes, text) in [
        (vec![b'a', 0x85, b'b'], "a\u{2013}b"),
        (vec![0x80, b' ', b'x'], "\u{2022} x"),
        (vec![0x18], "\u{02D8}"),
        (vec![0xFF, 0xFE, b'h', 0x00, b'i', 0x00], "hi"),
    ] {
        let rendered = render_value(&CosValue::String(CosString::from_bytes(bytes)));
        assert_eq!(rendered.label, text);
        assert_eq!(rendered.icon, IconKind::String);
    }
}

#[test]
fn integers_render_in_decimal() {
    for i in [i64::MIN, -1, 0, 1, 42, i64::MAX] {
        let rendered = render_value(&CosValue::Integer(i));
        assert_eq!(rendered.label, i.to_string());
        assert_eq!(rendered.icon, IconKind::Integer);
    }
}

#[test]
fn reals_render_in_decimal() {
    for (real, label) in [(0.5, "0.5"), (-2.25, "-2.25"), (612.0, "612.0"), (0.0, "0.0")] {
        let rendered = render_value(&CosValue::Real(real));
        assert_eq!(rendered.label, label);
        assert_eq!(rendered.icon, IconKind::Real);
    }
}

#[test]
fn containers_render_their_size() {
    for n in [0usize, 1, 17] {
        let mut dict = Dictionary::new();
        for i in 0..n {
            dict.insert(Name::new(format!("K{}", i)), CosValue::Integer(i as i64));
        }
        let rendered = render_value(&CosValue::Dictionary(dict));
        assert_eq!(rendered.label, format!("({})", n));
        assert_eq!(rendered.icon, IconKind::Dict);

        let rendered = render_value(&CosValue::Array(vec![CosValue::Null; n]));
        assert_eq!(rendered.label, format!("({})", n));
        assert_eq!(rendered.icon, IconKind::Array);
    }
}

#[test]
fn xref_marker_blanks_the_label() {
    let dict = Dictionary::new().with("Type", CosValue::name("XRef"));
    assert_eq!(render_value(&CosValue::Dictionary(dict)).label, "");

    // only a name counts as the marker
    let dict = Dictionary::new().with("Type", CosValue::text("XRef"));
    assert_eq!(render_value(&CosValue::Dictionary(dict)).label, "(1)");
}

#[test]
fn null_renders_blank() {
    let rendered = render_value(&CosValue::Null);
    assert_eq!(rendered.label, "");
    assert_eq!(rendered.icon, IconKind::None);
    assert_eq!(rendered.overlay, None);
}

#[test]
fn worked_map_entry_example() {
    let doc = Document::new(Dictionary::new()).with_object(5, 0, CosValue::Integer(3));
    let key = Name::new("Foo");
    let item = CosValue::reference(5, 0);

    let rendered = NodeFormatter::new().render(&MapEntry::resolve(&key, &item, &doc).into());

    assert_eq!(rendered.label, "Foo:  3 [5 0 R]");
    assert_eq!(rendered.icon, IconKind::Integer);
    assert_eq!(rendered.overlay, Some(IconKind::Indirect));
}

#[test]
fn worked_array_entry_stream_example() {
    let stream = Stream::new(Dictionary::new().with("Length", CosValue::Integer(0)), Vec::new());
    let doc = Document::new(Dictionary::new()).with_object(7, 1, CosValue::Stream(stream));
    let item = CosValue::reference(7, 1);

    let rendered = NodeFormatter::new().render(&ArrayEntry::resolve(2, &item, &doc).into());

    assert_eq!(rendered.icon, IconKind::StreamDict);
    assert_eq!(rendered.overlay, None);
}

#[test]
fn worked_empty_entry_example() {
    let key = Name::new("Empty");
    let value = CosValue::Null;
    let node = TreeNode::MapEntry(MapEntry::new(&key, &value, &value));
    assert_eq!(NodeFormatter::new().render(&node).label, "Empty");
}

#[test]
fn entry_icons_follow_the_resolved_value() {
    let values = [
        (CosValue::Integer(1), IconKind::Integer),
        (CosValue::Real(1.5), IconKind::Real),
        (CosValue::name("N"), IconKind::Name),
        (CosValue::text("s"), IconKind::String),
        (CosValue::Array(Vec::new()), IconKind::Array),
        (CosValue::Dictionary(Dictionary::new()), IconKind::Dict),
        (CosValue::Null, IconKind::None),
    ];
    let key = Name::new("K");
    let item = CosValue::reference(1, 0);

    for (value, icon) in &values {
        let rendered = NodeFormatter::new().render(&MapEntry::new(&key, &item, value).into());
        assert_eq!(rendered.icon, *icon);
        // every non-stream referenced value carries the badge
        assert_eq!(rendered.overlay, Some(IconKind::Indirect));

        let direct = NodeFormatter::new().render(&MapEntry::new(&key, value, value).into());
        assert_eq!(direct.icon, *icon);
        assert_eq!(direct.overlay, None);
    }
}

#[test]
fn render_is_idempotent() {
    let formatter = NodeFormatter::new();
    let key = Name::new("Kids");
    let item = CosValue::reference(3, 0);
    let value = CosValue::Array(vec![CosValue::reference(4, 0)]);
    let node: TreeNode<'_> = MapEntry::new(&key, &item, &value).into();

    let first = formatter.render(&node);
    let second = formatter.render(&node);

    assert_eq!(first, second);
    assert_eq!(first.label, "Kids:  (1) [3 0 R]");
}
