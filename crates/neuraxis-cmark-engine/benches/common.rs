// Shared by the bench targets; each target only uses some of these.
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Title\n\n## Section\n\nParagraph with *some* **content** and a [link](/url \"title\").\n\n- Bullet point\n  - Nested item\n- Another item\n\n```rust\nfn example() {\n    println!(\"Hello\");\n}\n```\n\n> Quoted `code` and <https://example.com>\nwith a lazy line.\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_nested_lists(items: usize, depth: usize) -> String {
    let mut content = String::new();
    for i in 0..items {
        for level in 0..depth {
            let indent = "  ".repeat(level);
            content.push_str(&format!("{indent}- item {i} at level {level}\n"));
        }
    }
    content
}

#[allow(dead_code)]
pub fn generate_reference_heavy(refs: usize) -> String {
    let mut content = String::new();
    for i in 0..refs {
        content.push_str(&format!("See [label {i}] and [text][label {i}] and ![img {i}].\n\n"));
    }
    for i in 0..refs {
        content.push_str(&format!("[label {i}]: /target/{i} \"Title {i}\"\n"));
        content.push_str(&format!("[img {i}]: /img/{i}.png\n"));
    }
    content
}

#[allow(dead_code)]
pub fn generate_emphasis_runs(size: usize) -> String {
    "a *b **c _d __e ".repeat(size) + &"*".repeat(size)
}
