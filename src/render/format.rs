use crate::render::unit_interval::NumUnitIntervalExt;

const UNIT: f64 = 1024.0;
const UNITS: [&str; 6] = ["KB", "MB", "GB", "TB", "PB", "EB"];

/// Largest unit keeping the scaled magnitude below 1024, two decimals.
pub fn format_bytes(value: f64) -> String {
    if value < UNIT {
        return format!("{value:.2} B");
    }

    let mut scaled = value / UNIT;
    let mut unit = 0;
    while scaled >= UNIT && unit < UNITS.len() - 1 {
        scaled /= UNIT;
        unit += 1;
    }
    format!("{scaled:.2} {}", UNITS[unit])
}

/// Binary gigabytes, as the Total Memory cell wants them.
pub fn format_gigabytes(bytes: u64) -> String {
    format!("{:.2} GB", bytes as f64 / (UNIT * UNIT * UNIT))
}

/// `percent` must already be within 0..=100; callers guarantee the domain.
pub fn progress_bar(percent: f64, width: usize) -> String {
    let filled: usize = percent.to_unit(100).scale(width);

    let mut bar = String::with_capacity(width);
    for cell in 0..width {
        bar.push(if cell < filled { '█' } else { '-' });
    }
    format!("|{bar}| {percent:.1}%")
}

pub fn center_text(text: &str, width: usize) -> String {
    if text.len() >= width {
        return text.to_string();
    }
    let left_pad = (width - text.len()) / 2;
    let right_pad = width - text.len() - left_pad;
    format!("{}{}{}", " ".repeat(left_pad), text, " ".repeat(right_pad))
}
