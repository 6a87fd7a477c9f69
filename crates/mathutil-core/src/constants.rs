//! Shared constants.

/// Coefficient of the `ac` term in the discriminant `b² − 4ac`.
pub const DISCRIMINANT_FACTOR: f64 = 4.0;

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// Malformed or missing numeric input.
    pub const ERROR_INPUT: i32 = 2;
    /// Reading standard input failed.
    pub const ERROR_IO: i32 = 3;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [
            exit_codes::SUCCESS,
            exit_codes::ERROR_GENERIC,
            exit_codes::ERROR_INPUT,
            exit_codes::ERROR_IO,
        ];
        for (i, a) in codes.iter().enumerate() {
            for b in &codes[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
