//! Text conversions for the `x:y` coordinate key.
//!
//! Converts between the stable external coordinate form used by the command
//! log (for example `2:5`) and the internal `Coordinate` type.

use crate::board::board_types::Coordinate;

/// Parse the `x:y` key form (for example `2:5`) into a board coordinate.
#[inline]
pub fn text_to_coordinate(text: &str) -> Result<Coordinate, String> {
    let (x_part, y_part) = text
        .split_once(':')
        .ok_or_else(|| format!("Invalid coordinate key: {text}"))?;

    let x = parse_axis(x_part)?;
    let y = parse_axis(y_part)?;
    let coordinate = Coordinate::new(x, y);

    if !coordinate.in_bounds() {
        return Err(format!("Coordinate off the board: {text}"));
    }
    Ok(coordinate)
}

/// Render a board coordinate in its `x:y` key form, no leading zeros.
#[inline]
pub fn coordinate_to_text(coordinate: Coordinate) -> String {
    coordinate.to_string()
}

fn parse_axis(part: &str) -> Result<i8, String> {
    // A leading `+`, sign, or zero padding would survive an i8 parse but is
    // not part of the key form, so digits are checked explicitly.
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(format!("Invalid coordinate axis: {part}"));
    }
    if part.len() > 1 && part.starts_with('0') {
        return Err(format!("Coordinate axis has leading zeros: {part}"));
    }
    part.parse::<i8>()
        .map_err(|_| format!("Invalid coordinate axis: {part}"))
}

#[cfg(test)]
mod tests {
    use super::{coordinate_to_text, text_to_coordinate};
    use crate::board::board_types::Coordinate;

    #[test]
    fn round_trip_coordinate_keys() {
        assert_eq!(
            text_to_coordinate("0:0").expect("0:0 should parse"),
            Coordinate::new(0, 0)
        );
        assert_eq!(
            text_to_coordinate("7:7").expect("7:7 should parse"),
            Coordinate::new(7, 7)
        );
        assert_eq!(coordinate_to_text(Coordinate::new(2, 5)), "2:5");
    }

    #[test]
    fn malformed_keys_are_rejected() {
        assert!(text_to_coordinate("22").is_err());
        assert!(text_to_coordinate("2:").is_err());
        assert!(text_to_coordinate(":5").is_err());
        assert!(text_to_coordinate("2:5:1").is_err());
        assert!(text_to_coordinate("-1:5").is_err());
        assert!(text_to_coordinate("8:0").is_err());
        assert!(text_to_coordinate("02:5").is_err());
        assert!(text_to_coordinate("a:b").is_err());
    }
}
