//! CLI output formatting utilities.

use console::style;
use indicatif::{ProgressBar, ProgressStyle};

/// Output helper for CLI formatting.
pub struct Output;

impl Output {
    /// Print an info message.
    pub fn info(msg: &str) {
        println!("{} {}", style(">>").cyan().bold(), msg);
    }

    /// Print a success message.
    pub fn success(msg: &str) {
        println!("{} {}", style(">>").green().bold(), msg);
    }

    /// Print a warning message.
    pub fn warning(msg: &str) {
        eprintln!("{} {}", style(">>").yellow().bold(), msg);
    }

    /// Print an error message.
    pub fn error(msg: &str) {
        eprintln!("{} {}", style(">>").red().bold(), msg);
    }

    /// Print a header.
    pub fn header(msg: &str) {
        println!("\n{}", style(msg).bold().underlined());
    }

    /// Print a numbered search result block.
    pub fn search_result(index: usize, title: &str, url: &str, snippet: &str) {
        println!(
            "\n{} {}",
            style(format!("--- Result {} ---", index)).green(),
            style(title).bold()
        );
        println!("   {}", style(url).dim());
        println!("   {}", content_preview(snippet, 300));
    }

    /// Print a tool invocation notice.
    pub fn tool_call(name: &str, arguments: &str) {
        println!(
            "  {} {}",
            style(format!("[{}]", name)).yellow(),
            style(content_preview(arguments, 80)).dim()
        );
    }
}

/// Spinner that is guaranteed to stop.
///
/// Wraps an `indicatif` spinner and clears it on drop, so the indicator never
/// outlives the blocking call it decorates, error paths included.
pub struct SpinnerGuard {
    bar: ProgressBar,
}

impl SpinnerGuard {
    /// Start a spinner with the given message.
    pub fn start(msg: &str) -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap(),
        );
        bar.set_message(msg.to_string());
        bar.enable_steady_tick(std::time::Duration::from_millis(100));
        Self { bar }
    }

    /// Update the spinner message.
    pub fn set_message(&self, msg: &str) {
        self.bar.set_message(msg.to_string());
    }
}

impl Drop for SpinnerGuard {
    fn drop(&mut self) {
        self.bar.finish_and_clear();
    }
}

/// Truncate content with ellipsis, flattening newlines.
pub(crate) fn content_preview(content: &str, max_len: usize) -> String {
    let content = content.replace('\n', " ");
    if content.chars().count() <= max_len {
        content
    } else {
        let truncated: String = content.chars().take(max_len).collect();
        format!("{}...", truncated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_preview_short() {
        assert_eq!(content_preview("short text", 20), "short text");
    }

    #[test]
    fn test_content_preview_truncates() {
        let preview = content_preview("a very long piece of text", 10);
        assert_eq!(preview, "a very lon...");
    }

    #[test]
    fn test_content_preview_flattens_newlines() {
        assert_eq!(content_preview("line one\nline two", 50), "line one line two");
    }
}
