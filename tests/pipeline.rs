use mdsite::{
    BlockKind, Error, Node, SpanKind, TextSpan, assemble, build, classify, render, segment,
    tokenize,
};
use pretty_assertions::assert_eq;

fn to_html(markdown: &str) -> String {
    render(&build(markdown).unwrap()).unwrap()
}

#[test]
fn heading_and_inline_formatting() {
    assert_eq!(
        to_html("# Heading\n\nParagraph with **bold** and _italic_ and `code`."),
        "<div><h1>Heading</h1><p>Paragraph with <b>bold</b> and <i>italic</i> and <code>code</code>.</p></div>"
    );
}

#[test]
fn unordered_list_items_end_with_newline() {
    assert_eq!(
        to_html("- a\n- b"),
        "<div><ul><li>a</li>\n<li>b</li>\n</ul></div>"
    );
}

#[test]
fn ordered_list_with_gap_is_a_paragraph() {
    assert_eq!(classify("1. a\n3. b"), Ok(BlockKind::Paragraph));
}

#[test]
fn missing_closing_fence_is_a_paragraph() {
    assert_eq!(classify("```\nprint(1)"), Ok(BlockKind::Paragraph));
}

#[test]
fn unbalanced_bold_fails() {
    assert_eq!(
        tokenize("**bold"),
        Err(Error::UnclosedFormattingSpan { delimiter: "**" })
    );
}

#[test]
fn lone_code_span() {
    let spans = tokenize("`x`").unwrap();
    assert_eq!(spans.len(), 1);
    assert_eq!(spans[0].kind(), SpanKind::Code);
    assert_eq!(spans[0].text(), "x");
}

#[test]
fn plain_text_round_trips() {
    let text = "Nothing to see here, move along.";
    assert_eq!(tokenize(text).unwrap(), vec![TextSpan::plain(text)]);
}

#[test]
fn attributes_render_alphabetically() {
    let node = Node::leaf("span", "x")
        .with_attribute("foo", "bar")
        .with_attribute("bar", "foo")
        .with_attribute("car", "shar");
    assert_eq!(
        render(&node).unwrap(),
        r#"<span bar="foo" car="shar" foo="bar">x</span>"#
    );
}

#[test]
fn code_block_reproduces_interior() {
    let interior = "fn main() {\n    let _x = \"**not bold**\";\n    // `tick`\n}";
    let markdown = format!("```rust\n{}\n```", interior);
    assert_eq!(
        to_html(&markdown),
        format!("<div><pre><code>{}\n</code></pre></div>", interior)
    );
}

#[test]
fn segments_are_never_blank_and_keep_order() {
    let doc = "\n\n  first  \n\n \n\n\n second\nstill second \n\n\t\n\nthird";
    let blocks = segment(doc);
    assert_eq!(blocks, vec!["first", "second\nstill second", "third"]);
    assert!(blocks.iter().all(|b| !b.trim().is_empty()));
}

#[test]
fn classification_is_idempotent() {
    let doc = "## Sub\n\n> a\n> b\n\n- x\n- y\n\n1. p\n2. q\n\n```\nc\n```\n\nplain";
    for block in segment(doc) {
        let kind = classify(block).unwrap();
        assert_eq!(classify(block), Ok(kind));
    }
}

#[test]
fn full_document() {
    let markdown = "\
# Tolkien Fan Club

![JRR Tolkien sitting](/images/tolkien.png)

Here's the deal, **I like Tolkien**.

> \"I am in fact a Hobbit in all but size.\"
>
> -- J.R.R. Tolkien

## Blog posts

- [Why Glorfindel is More Impressive than Legolas](/blog/glorfindel)
- [Why Tom Bombadil Was a Mistake](/blog/tom)

1. Gandalf
2. Bilbo

```
func main(){
    fmt.Println(\"Aiya, Ambar!\")
}
```";
    let template = "<title>{{ Title }}</title><main>{{ Content }}</main>";

    let expected = concat!(
        "<title>Tolkien Fan Club</title><main><div>",
        "<h1>Tolkien Fan Club</h1>",
        r#"<p><img alt="JRR Tolkien sitting" src="/images/tolkien.png"></img></p>"#,
        "<p>Here's the deal, <b>I like Tolkien</b>.</p>",
        "<blockquote>\"I am in fact a Hobbit in all but size.\"\n\n-- J.R.R. Tolkien</blockquote>",
        "<h2>Blog posts</h2>",
        "<ul>",
        r#"<li><a href="/blog/glorfindel">Why Glorfindel is More Impressive than Legolas</a></li>"#,
        "\n",
        r#"<li><a href="/blog/tom">Why Tom Bombadil Was a Mistake</a></li>"#,
        "\n</ul>",
        "<ol><li>Gandalf</li>\n<li>Bilbo</li>\n</ol>",
        "<pre><code>func main(){\n    fmt.Println(\"Aiya, Ambar!\")\n}\n</code></pre>",
        "</div></main>",
    );
    assert_eq!(assemble(markdown, template).unwrap(), expected);
}
