use std::fmt::Write;

/// IEC units for byte quantities.
const UNITS: [&str; 7] = ["B", "KiB", "MiB", "GiB", "TiB", "PiB", "EiB"];

/// IEC units for transfer speeds.
const SPEED_UNITS: [&str; 7] = ["B/s", "KiB/s", "MiB/s", "GiB/s", "TiB/s", "PiB/s", "EiB/s"];

/// Formats a playhead position or track duration as `M:SS`.
///
/// Non-finite and negative inputs render as `"0:00"` so a session whose
/// duration is still unknown never shows garbage.
pub fn format_time(seconds: f64) -> String {
    if !seconds.is_finite() || seconds < 0.0 {
        return "0:00".to_string();
    }

    let total = seconds.floor() as u64;
    format!("{}:{:02}", total / 60, total % 60)
}

/// Internal helper that formats a byte value using a custom array of unit
/// strings.
///
/// Scales the value by dividing by 1024 repeatedly until it falls below 1024,
/// then formats it with either exact bytes (for < 1024) or two decimal places.
///
/// This allows reuse for both size and speed formatting with different suffixes.
fn format_bytes_with_units(bytes: u64, units: [&str; 7]) -> String {
    let mut value = bytes as f64;
    let mut unit = 0;

    while value >= 1024.0 && unit < units.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    if unit == 0 {
        format!("{} {}", bytes, units[unit])
    } else {
        format!("{:.2} {}", value, units[unit])
    }
}

/// Formats a byte count into a human-readable string using IEC units.
pub fn format_bytes(bytes: u64) -> String {
    format_bytes_with_units(bytes, UNITS)
}

/// Formats a transfer rate (bytes per second) into a human-readable string.
pub fn format_speed(bytes_per_second: f64) -> String {
    format_bytes_with_units(bytes_per_second.round() as u64, SPEED_UNITS)
}

/// Formats an estimated time of arrival (ETA) or remaining duration in a
/// human-readable `HH:MM:SS` or `MM:SS` format.
pub fn format_eta(seconds: f64) -> String {
    let total = seconds.max(0.0).floor() as u64;

    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let secs = total % 60;

    let mut out = String::with_capacity(8);
    if hours > 0 {
        write!(&mut out, "{:02}:{:02}:{:02}", hours, minutes, secs).unwrap();
    } else {
        write!(&mut out, "{:02}:{:02}", minutes, secs).unwrap();
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_renders_minutes_and_padded_seconds() {
        assert_eq!(format_time(0.0), "0:00");
        assert_eq!(format_time(59.9), "0:59");
        assert_eq!(format_time(75.0), "1:15");
        assert_eq!(format_time(125.0), "2:05");
        assert_eq!(format_time(600.0), "10:00");
    }

    #[test]
    fn time_guards_invalid_input() {
        assert_eq!(format_time(f64::NAN), "0:00");
        assert_eq!(format_time(f64::INFINITY), "0:00");
        assert_eq!(format_time(f64::NEG_INFINITY), "0:00");
        assert_eq!(format_time(-3.0), "0:00");
    }

    #[test]
    fn bytes_stay_exact_below_one_kibibyte() {
        assert_eq!(format_bytes(0), "0 B");
        assert_eq!(format_bytes(512), "512 B");
        assert_eq!(format_bytes(1023), "1023 B");
    }

    #[test]
    fn bytes_scale_with_two_decimals() {
        assert_eq!(format_bytes(1536), "1.50 KiB");
        assert_eq!(format_bytes(2 * 1024 * 1024), "2.00 MiB");
    }

    #[test]
    fn speed_rounds_before_scaling() {
        assert_eq!(format_speed(1023.6), "1.00 KiB/s");
        assert_eq!(format_speed(100.2), "100 B/s");
    }

    #[test]
    fn eta_switches_format_at_one_hour() {
        assert_eq!(format_eta(90.0), "01:30");
        assert_eq!(format_eta(3723.0), "01:02:03");
        assert_eq!(format_eta(-5.0), "00:00");
    }
}
