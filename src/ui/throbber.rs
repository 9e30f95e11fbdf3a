//! Spinner shown while a sign-in request is pending.

use std::time::{SystemTime, UNIX_EPOCH};

/// Braille spinner characters for animated loading indicators.
const SPINNER: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

/// Spinner frame for a millisecond timestamp; one frame per 100ms.
pub fn spinner_frame(millis: u128) -> char {
    SPINNER[((millis / 100) % SPINNER.len() as u128) as usize]
}

/// Spinner frame for the current time.
pub fn spinner_char() -> char {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis();
    spinner_frame(millis)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spinner_cycles_every_second() {
        assert_eq!(spinner_frame(0), '⠋');
        assert_eq!(spinner_frame(150), '⠙');
        assert_eq!(spinner_frame(1000), spinner_frame(0));
    }
}
