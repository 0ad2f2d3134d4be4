//! Styled terminal output utilities.

use owo_colors::OwoColorize;

/// Print a section header
pub fn section(text: &str) {
    println!("{}", text.bold().white());
}

/// Print a key-value pair
pub fn kv(key: &str, value: &str) {
    println!("  {}: {}", key.dimmed(), value);
}

/// Print a list value, one item per line
pub fn list(key: &str, items: &[String]) {
    println!("  {}:", key.dimmed());
    for item in items {
        println!("    - {}", item);
    }
}

/// Print a success message
pub fn success(text: &str) {
    println!("{} {}", "✔".green().bold(), text.green());
}

/// Print an error message
pub fn error(text: &str) {
    eprintln!("{} {}", "✖".red().bold(), text.red());
}

/// Print a hint following an error
pub fn hint(text: &str) {
    eprintln!("  {} {}", "help:".cyan(), text);
}

/// Print dimmed text
pub fn dim(text: &str) {
    println!("{}", text.dimmed());
}

/// Print a newline
pub fn newline() {
    println!();
}
