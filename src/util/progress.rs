use std::io::{self, Write};

const BAR_LENGTH: usize = 50;

/// Render one progress line, led by a carriage return so it overwrites the
/// previous render. `total` must be non-zero; callers guard empty inputs.
pub fn render(current: usize, total: usize, prefix: &str, suffix: &str) -> String {
    let percent = 100.0 * current as f64 / total as f64;
    let filled = BAR_LENGTH * current / total;
    let bar = format!("{}{}", "█".repeat(filled), "-".repeat(BAR_LENGTH - filled));
    format!("\r{prefix} |{bar}| {percent:.1}% {suffix}")
}

/// Draw the bar to `out`, ending the line only once `current == total`.
pub fn draw(
    out: &mut impl Write,
    current: usize,
    total: usize,
    prefix: &str,
    suffix: &str,
) -> io::Result<()> {
    out.write_all(render(current, total, prefix, suffix).as_bytes())?;
    if current == total {
        out.write_all(b"\n")?;
    }
    out.flush()
}
