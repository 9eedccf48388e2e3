// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Title\n\n## Section\n\nParagraph with some content.\n\n> [!note] Remember\n> A callout body with a [[link]].\n\n> plain quote\n\n```rust\nfn example() {\n    println!(\"Hello\");\n}\n```\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_nested_callouts(depth: usize) -> String {
    let mut content = String::new();
    for level in 0..depth {
        let prefix = "> ".repeat(level);
        content.push_str(&format!("{prefix}> [!tip] Level {level}\n"));
        content.push_str(&format!("{prefix}> Body text at level {level}.\n"));
    }
    content
}
