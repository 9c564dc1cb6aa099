//! Build script to generate the embedded language registry
//!
//! Reads the data files and generates Rust source code with const arrays.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    generate_languages(
        "data/languages.txt",
        &Path::new(&out_dir).join("languages.rs"),
    );

    generate_farewells(
        "data/farewells.txt",
        &Path::new(&out_dir).join("farewells.rs"),
    );

    // Rebuild if data files change
    println!("cargo:rerun-if-changed=data/languages.txt");
    println!("cargo:rerun-if-changed=data/farewells.txt");
}

fn data_lines(input_path: &str) -> Vec<String> {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

fn parse_hex(color: &str, line: &str) -> (u8, u8, u8) {
    let hex = color
        .strip_prefix('#')
        .filter(|h| h.len() == 6)
        .unwrap_or_else(|| panic!("Bad color '{color}' in line: {line}"));
    let channel = |i: usize| {
        u8::from_str_radix(&hex[i..i + 2], 16)
            .unwrap_or_else(|e| panic!("Bad color '{color}' in line: {line}: {e}"))
    };
    (channel(0), channel(2), channel(4))
}

fn generate_languages(input_path: &str, output_path: &Path) {
    let lines = data_lines(input_path);
    assert!(
        lines.len() >= 2,
        "{input_path} needs at least two languages, got {}",
        lines.len()
    );

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated language registry").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Built-in languages, easiest to lose first").unwrap();
    writeln!(output, "pub const LANGUAGES: &[Language] = &[").unwrap();

    for line in &lines {
        let fields: Vec<&str> = line.split_whitespace().collect();
        let [name, background, foreground] = fields[..] else {
            panic!("Expected 'name #bg #fg' in {input_path}, got: {line}");
        };
        assert!(
            name.chars().any(|c| c.is_ascii_alphabetic()),
            "Language '{name}' has no guessable letters"
        );

        let (br, bg, bb) = parse_hex(background, line);
        let (fr, fg, fb) = parse_hex(foreground, line);
        writeln!(
            output,
            "    Language {{ name: {name:?}, background: Rgb::new({br}, {bg}, {bb}), foreground: Rgb::new({fr}, {fg}, {fb}) }},"
        )
        .unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of entries in LANGUAGES").unwrap();
    writeln!(output, "pub const LANGUAGES_COUNT: usize = {};", lines.len()).unwrap();
}

fn generate_farewells(input_path: &str, output_path: &Path) {
    let lines = data_lines(input_path);
    assert!(!lines.is_empty(), "{input_path} has no farewell templates");

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated farewell templates").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Farewell templates, `{{language}}` is substituted").unwrap();
    writeln!(output, "pub const FAREWELLS: &[&str] = &[").unwrap();

    for line in &lines {
        assert!(
            line.contains("{language}"),
            "Farewell template without {{language}}: {line}"
        );
        writeln!(output, "    {line:?},").unwrap();
    }

    writeln!(output, "];").unwrap();
}
