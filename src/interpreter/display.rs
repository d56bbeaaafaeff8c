/*
 * =============================================================================
 *  SIMLAN - Simple Language
 * =============================================================================
 *
 *  File:      interpreter/display.rs
 *  Purpose:   Converts runtime numbers into their printed form.
 *
 *  Author:    Sam Wilcox
 *
 * -----------------------------------------------------------------------------
 *  License:
 * -----------------------------------------------------------------------------
 *  This file is part of the SIMLAN programming language project.
 *
 *  SIMLAN is dual-licensed under the terms of:
 *    - The MIT License
 *    - The Apache License, Version 2.0
 *
 *  You may choose either license to govern your use of this software.
 *
 * -----------------------------------------------------------------------------
 *  Warranty Disclaimer:
 * -----------------------------------------------------------------------------
 *  Unless required by applicable law or agreed to in writing, this software is
 *  distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 *  either express or implied.
 *
 * =============================================================================
 */

/// ============================================================================
/// format_number
/// ============================================================================
/// Converts a SIMLAN number into a **human-readable string**.
/// This is used by:
///   - `PRINT` output
///   - the AST tree dump
///   - the token dump
///
/// The shortest text that reads back as the same `f64` is produced, and
/// integral values print without a fractional part.
///
/// Examples:
///   - 14.0     → "14"
///   - 2.5      → "2.5"
///   - 0.1+0.2  → "0.30000000000000004"
///   - inf      → "inf"
/// ============================================================================
pub fn format_number(value: f64) -> String {
    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::format_number;

    #[test]
    fn integral_values_have_no_fraction() {
        assert_eq!(format_number(14.0), "14");
        assert_eq!(format_number(-3.0), "-3");
        assert_eq!(format_number(1e21), "1000000000000000000000");
    }

    #[test]
    fn fractions_round_trip() {
        assert_eq!(format_number(2.5), "2.5");
        assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
        let text = format_number(1.0 / 3.0);
        assert_eq!(text.parse::<f64>().ok(), Some(1.0 / 3.0));
    }

    #[test]
    fn non_finite_values() {
        assert_eq!(format_number(f64::INFINITY), "inf");
        assert_eq!(format_number(f64::NEG_INFINITY), "-inf");
        assert_eq!(format_number(f64::NAN), "NaN");
    }
}
