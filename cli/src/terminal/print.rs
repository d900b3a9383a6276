use colored::*;

pub const TOTAL_WIDTH: usize = 64;

/// Prints a centered section header framed by separators.
pub fn header(title: &str, quiet: bool) {
    if quiet {
        return;
    }

    let text_content: String = format!("⟦ {} ⟧", title.to_uppercase());
    let text_width: usize = text_content.chars().count();
    let fill: usize = TOTAL_WIDTH.saturating_sub(text_width);
    let left: ColoredString = "═".repeat(fill / 2).bright_black();
    let right: ColoredString = "═".repeat(fill - fill / 2).bright_black();

    println!("{left}{}{right}", text_content.bright_green().bold());
}
