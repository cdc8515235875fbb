//! Languages command implementation.

use bark_ts::Registry;

/// Runs the languages command.
pub fn run() {
    let registry = Registry::new();

    println!("Supported languages:\n");
    println!("{:<12} {:<40} Filenames", "Language", "Extensions");
    println!("{}", "-".repeat(80));

    for lang in registry.languages() {
        let desc = lang.descriptor();
        let patterns = if desc.filename_patterns.is_empty() {
            "-".to_string()
        } else {
            desc.filename_patterns.join(" ")
        };
        println!(
            "{:<12} {:<40} {}",
            desc.name,
            desc.extensions.join(" "),
            patterns
        );
    }

    println!(
        "\n{} languages, {} extensions",
        registry.languages().len(),
        registry.supported_extensions().len()
    );
    println!("\nUse --marker to look for a tag other than BARK, e.g.:");
    println!("  bark scan --marker FIXME src/");
}
