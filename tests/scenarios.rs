use mdsite::{
    BlockKind, Error, Node, Span, StyleKind, classify, extract_title, markdown_to_html,
    split_blocks, split_delimiter, text_to_spans,
};
use pretty_assertions::assert_eq;

#[test]
fn bold_split() {
    let spans = split_delimiter(
        vec![Span::Text("Hello is text with **bolded** word".to_string())],
        "**",
        StyleKind::Bold,
    )
    .unwrap();
    assert_eq!(
        spans,
        vec![
            Span::Text("Hello is text with ".to_string()),
            Span::Bold("bolded".to_string()),
            Span::Text(" word".to_string()),
        ]
    );
}

#[test]
fn unbalanced_delimiter() {
    let result = split_delimiter(
        vec![Span::Text("Hello is text with **bolded word".to_string())],
        "**",
        StyleKind::Bold,
    );
    assert_eq!(
        result,
        Err(Error::UnbalancedDelimiter {
            delimiter: "**".to_string(),
            text: "Hello is text with **bolded word".to_string(),
        })
    );
}

#[test]
fn heading_block() {
    let root = mdsite::parse("### This is a heading").unwrap();
    let heading = &root.children.as_ref().unwrap()[0];
    assert_eq!(
        heading,
        &Node::parent("h3", vec![Node::text("This is a heading")])
    );
    assert_eq!(heading.render().unwrap(), "<h3 >This is a heading</h3>");
}

#[test]
fn list_grouping() {
    let blocks = split_blocks("* This is a list\n* with items");
    assert!(blocks.iter().all(|b| classify(b) == BlockKind::UnorderedList));

    let root = mdsite::parse("* This is a list\n* with items").unwrap();
    assert_eq!(
        root,
        Node::parent(
            "div",
            vec![Node::parent(
                "ul",
                vec![
                    Node::parent("li", vec![Node::text("This is a list")]),
                    Node::parent("li", vec![Node::text("with items")]),
                ],
            )],
        )
    );
}

#[test]
fn title_extraction() {
    assert_eq!(
        extract_title("# This is a heading\n## Introduction\n...").unwrap(),
        "This is a heading"
    );
}

#[test]
fn mixed_inline() {
    let spans = text_to_spans(
        "Hello is text with ![Alt text](http://x/y.png) and [Link text](http://x)",
    )
    .unwrap();
    assert_eq!(
        spans,
        vec![
            Span::Text("Hello is text with ".to_string()),
            Span::Image {
                alt: "Alt text".to_string(),
                url: "http://x/y.png".to_string(),
            },
            Span::Text(" and ".to_string()),
            Span::Link {
                text: "Link text".to_string(),
                url: "http://x".to_string(),
            },
        ]
    );
}

#[test]
fn maximal_list_runs() {
    for n in 1..=5 {
        let markdown: String = (1..=n).map(|i| format!("{i}. item\n")).collect();
        let root = mdsite::parse(&format!("{markdown}after")).unwrap();
        let children = root.children.unwrap();
        assert_eq!(children.len(), 2);
        assert_eq!(children[0].tag.as_deref(), Some("ol"));
        assert_eq!(children[0].children.as_ref().map(Vec::len), Some(n));
    }
}

#[test]
fn rendering_is_deterministic() {
    let markdown = "# T\n![a](b) [c](d) **e** *f* `g`\n> q\n- x\n1. y";
    assert_eq!(
        markdown_to_html(markdown).unwrap(),
        markdown_to_html(markdown).unwrap()
    );
}
