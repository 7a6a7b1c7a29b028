// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Title\n## Section\nParagraph with *some* **content** and `code`.\n~~old~~ and ***both** italic*\n```\nfn example() {\n    println!(\"*Hello*\");\n}\n```\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_nested_emphasis(depth: usize) -> String {
    let mut content = String::new();
    for level in 0..depth {
        content.push_str(if level % 2 == 0 { "**" } else { "_" });
        content.push_str("word ");
    }
    for level in (0..depth).rev() {
        content.push_str(" end");
        content.push_str(if level % 2 == 0 { "**" } else { "_" });
    }
    content
}

#[allow(dead_code)]
pub fn generate_unclosed_noise(size: usize) -> String {
    "stray * and ** and _ without partners ~~ ".repeat(size)
}
