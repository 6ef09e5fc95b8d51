//! Upstream wire-format parsers and normalizers.

pub mod layout;
pub mod sina;
pub mod ticker;

/// Round a value to a fixed number of decimal places for wire output.
pub fn round_to(value: f64, digits: u32) -> f64 {
    let factor = 10f64.powi(digits as i32);
    (value * factor).round() / factor
}
