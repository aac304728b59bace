use tictactoe_common::games::tictactoe::{Board, CELL_COUNT, Mark};

/// Parses the 9-digit board string used on the command line, one digit per
/// cell in row-major order: `0` free, `1` X, `2` O.
pub fn decode_board(text: &str) -> Result<Board, String> {
    let text = text.trim();
    if text.chars().count() != CELL_COUNT {
        return Err(format!(
            "Board must have {} digits, got {:?}",
            CELL_COUNT, text
        ));
    }

    let values = text
        .chars()
        .map(|c| match c {
            '0' => Ok(0),
            '1' => Ok(1),
            '2' => Ok(2),
            other => Err(format!("Illegal board digit {:?} in {:?}", other, text)),
        })
        .collect::<Result<Vec<u8>, String>>()?;

    Board::from_values(&values).map_err(|e| e.to_string())
}

pub fn encode_board(cells: &[Mark; CELL_COUNT]) -> String {
    cells
        .iter()
        .map(|mark| char::from(b'0' + mark.to_value()))
        .collect()
}

/// Three rows of digits, as printed between self-play moves.
pub fn render_board(cells: &[Mark; CELL_COUNT]) -> String {
    encode_board(cells)
        .as_bytes()
        .chunks(3)
        .map(|row| {
            row.iter()
                .map(|&b| char::from(b).to_string())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_board() {
        let board = decode_board("201210000").unwrap();
        assert_eq!(board.cells_with(Mark::X), vec![2, 4]);
        assert_eq!(board.cells_with(Mark::O), vec![0, 3]);
        assert_eq!(encode_board(&board.snapshot()), "201210000");
    }

    #[test]
    fn test_decode_rejects_bad_strings() {
        assert!(decode_board("00100200").is_err());
        assert!(decode_board("aoeu").is_err());
        assert!(decode_board("0010020003").is_err());
        assert!(decode_board("001002003").is_err());
    }

    #[test]
    fn test_render_board() {
        let board = decode_board("120000002").unwrap();
        assert_eq!(render_board(&board.snapshot()), "1 2 0\n0 0 0\n0 0 2");
    }
}
