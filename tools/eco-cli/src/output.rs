//! Output formatting for the CLI.

use console::style;
use eco_commerce::checkout::OrderStatus;
use eco_commerce::rewards::CarbonLevel;

/// Output handler for CLI messages.
#[derive(Clone)]
pub struct Output {
    verbose: bool,
    json: bool,
}

impl Output {
    /// Create a new output handler.
    pub fn new(verbose: bool, json: bool) -> Self {
        Self { verbose, json }
    }

    /// Print an info message.
    pub fn info(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("ℹ").blue(), msg);
    }

    /// Print a success message.
    pub fn success(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("✓").green(), msg);
    }

    /// Print a warning message.
    pub fn warn(&self, msg: &str) {
        if self.json {
            return;
        }
        eprintln!("{} {}", style("⚠").yellow(), msg);
    }

    /// Print an error message.
    pub fn error(&self, msg: &str) {
        if self.json {
            eprintln!("{}", serde_json::json!({ "error": msg }));
            return;
        }
        eprintln!("{} {}", style("✗").red(), style(msg).red());
    }

    /// Print a debug message (only in verbose mode).
    pub fn debug(&self, msg: &str) {
        if !self.verbose || self.json {
            return;
        }
        eprintln!("{} {}", style("→").dim(), style(msg).dim());
    }

    /// Print a header/title.
    pub fn header(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("\n{}", style(msg).bold().underlined());
    }

    /// Print JSON output.
    pub fn json<T: serde::Serialize>(&self, value: &T) {
        if let Ok(json) = serde_json::to_string_pretty(value) {
            println!("{}", json);
        }
    }

    /// Print a key-value pair.
    pub fn kv(&self, key: &str, value: &str) {
        if self.json {
            return;
        }
        println!("  {}: {}", style(key).dim(), value);
    }

    /// Print a list item.
    pub fn list_item(&self, item: &str) {
        if self.json {
            return;
        }
        println!("  {} {}", style("•").dim(), item);
    }

    /// Print a table row.
    pub fn table_row(&self, cols: &[&str], widths: &[usize]) {
        if self.json {
            return;
        }
        let formatted: Vec<String> = cols
            .iter()
            .zip(widths.iter())
            .map(|(col, width)| format!("{:width$}", col, width = width))
            .collect();
        println!("  {}", formatted.join("  "));
    }

    /// Check if JSON mode is enabled.
    pub fn is_json(&self) -> bool {
        self.json
    }
}

/// Colored order status.
pub fn status_badge(status: OrderStatus) -> String {
    let name = status.display_name();
    match status {
        OrderStatus::Delivered => style(name).green().to_string(),
        OrderStatus::Shipped => style(name).cyan().to_string(),
        OrderStatus::Packed | OrderStatus::Pending => style(name).yellow().to_string(),
    }
}

/// Colored carbon rating.
pub fn carbon_badge(level: CarbonLevel) -> String {
    let name = level.display_name();
    match level {
        CarbonLevel::Excellent | CarbonLevel::Good => style(name).green().to_string(),
        CarbonLevel::Moderate => style(name).yellow().to_string(),
        CarbonLevel::High => style(name).red().to_string(),
    }
}

/// Format a carbon weight, e.g. "2.8 kg".
pub fn format_co2(kg: f64) -> String {
    format!("{:.1} kg", kg)
}

/// Five-star rating bar, e.g. "★★★★☆ 4.2".
pub fn stars(rating: f64) -> String {
    let filled = rating.round().clamp(0.0, 5.0) as usize;
    format!("{}{} {:.1}", "★".repeat(filled), "☆".repeat(5 - filled), rating)
}

/// Signed points, e.g. "+28" or "-6".
pub fn format_points(points: i64) -> String {
    if points >= 0 {
        style(format!("+{}", points)).green().to_string()
    } else {
        style(points.to_string()).red().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stars() {
        assert_eq!(stars(4.5), "★★★★★ 4.5");
        assert_eq!(stars(4.2), "★★★★☆ 4.2");
        assert_eq!(stars(0.0), "☆☆☆☆☆ 0.0");
    }

    #[test]
    fn test_format_co2() {
        assert_eq!(format_co2(2.8), "2.8 kg");
        assert_eq!(format_co2(0.0), "0.0 kg");
    }
}
