//! Terminal output utilities

use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tsbc_core::types::yes_no;
use tsbc_core::ResolvedConfig;

/// Print a success message
pub fn success(msg: &str) {
    println!("{} {}", style("✓").green().bold(), msg);
}

/// Print an error message
pub fn error(msg: &str) {
    eprintln!("{} {}", style("✗").red().bold(), msg);
}

/// Print a warning message
pub fn warning(msg: &str) {
    eprintln!("{} {}", style("⚠").yellow().bold(), msg);
}

/// Print a header
pub fn header(msg: &str) {
    println!("\n{}", style(msg).bold().underlined());
}

/// Print a key-value pair
pub fn kv(key: &str, value: &str) {
    println!("  {}: {}", style(key).dim(), value);
}

/// Print the banner shown at startup
pub fn welcome() {
    println!(
        "{}",
        style("Welcome to Typescript-BC Project Generator!").cyan().bold()
    );
}

/// Print the configuration used when prompts are skipped
pub fn configuration(config: &ResolvedConfig) {
    header("Using configuration:");
    kv("Project type", &config.project_type);
    kv("Project name", &config.project_name);
    kv("Initialize git", yes_no(config.use_git));
    kv("Package manager", &config.package_manager);
    kv("Open in VS Code", yes_no(config.open));
    println!();
}

/// Create a spinner
pub fn spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    let style = ProgressStyle::with_template("{spinner:.blue} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏");
    pb.set_style(style);
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}
