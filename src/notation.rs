//! Engine-internal move notation
//!
//! Tokens always spell out origin and destination (`e2e4`, `Ng1f3`). This is
//! narrower than standard algebraic notation, which omits the origin when the
//! move is unambiguous; [`classify`] recognizes the wider family so free text
//! can be told apart from notation-shaped input, but only the strict
//! piece+from+to subset actually parses.

use crate::board::{PieceType, Position};

/// A decoded move token. The piece letter is carried through but never used
/// to pick between candidate pieces; legality is judged against whatever
/// actually stands on `from`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedMove {
    pub piece: Option<PieceType>,
    pub from: Position,
    pub to: Position,
}

/// How a raw input string should be handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveInput<'a> {
    /// Shaped like notation; feed it straight to [`parse_token`].
    Token(&'a str),
    /// Free text; hand it to a resolver before retrying as a token.
    NeedsResolution(&'a str),
}

/// Single classification point for raw input.
///
/// `Token` covers from-to pairs, SAN-like shapes (optional piece letter,
/// optional file/rank disambiguation, optional capture marker) and castling
/// tokens. Several of those classify as notation yet still fail
/// [`parse_token`]; the session then rejects them as unparsable rather than
/// sending them to a resolver that would only guess.
pub fn classify(input: &str) -> MoveInput<'_> {
    let trimmed = input.trim();
    if is_from_to(trimmed) || is_san_like(trimmed) || is_castling(trimmed) {
        MoveInput::Token(trimmed)
    } else {
        MoveInput::NeedsResolution(trimmed)
    }
}

/// Strict token parser: `[RNBQK]?[a-h][1-8][a-h][1-8]` and nothing else.
pub fn parse_token(token: &str) -> Option<ParsedMove> {
    if !token.is_ascii() {
        return None;
    }
    let (piece, squares) = match token.len() {
        4 => (None, token),
        5 => {
            let mut chars = token.chars();
            let piece = PieceType::from_letter(chars.next()?)?;
            (Some(piece), chars.as_str())
        }
        _ => return None,
    };
    let from = square_to_position(&squares[..2])?;
    let to = square_to_position(&squares[2..])?;
    Some(ParsedMove { piece, from, to })
}

/// Engine token recorded for a successful move: piece letter (empty for
/// pawns) plus origin and destination squares.
pub fn format_move(piece_type: PieceType, from: Position, to: Position) -> String {
    format!(
        "{}{}{}",
        piece_type.letter(),
        position_to_square(from),
        position_to_square(to)
    )
}

/// `a8` maps to (0, 0): column from the file letter, row counts down from
/// rank 8.
pub fn square_to_position(square: &str) -> Option<Position> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return None;
    }
    let col = bytes[0].checked_sub(b'a')?;
    let rank = bytes[1].checked_sub(b'0')?;
    if col > 7 || !(1..=8).contains(&rank) {
        return None;
    }
    Some(Position::new(8 - rank as i8, col as i8))
}

/// Text form of an on-board position, e.g. (6, 4) -> `e2`. The position must
/// be on the board.
pub fn position_to_square(pos: Position) -> String {
    let file = (b'a' + pos.col as u8) as char;
    let rank = 8 - pos.row;
    format!("{file}{rank}")
}

fn is_square(bytes: &[u8]) -> bool {
    bytes.len() == 2 && (b'a'..=b'h').contains(&bytes[0]) && (b'1'..=b'8').contains(&bytes[1])
}

fn is_from_to(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == 4 && is_square(&bytes[..2]) && is_square(&bytes[2..])
}

/// SAN-shaped: optional piece letter, optional file and rank disambiguation,
/// optional capture marker, then a destination square.
fn is_san_like(s: &str) -> bool {
    let bytes = s.as_bytes();
    if bytes.len() < 2 || !is_square(&bytes[bytes.len() - 2..]) {
        return false;
    }
    let mut rest = &bytes[..bytes.len() - 2];
    if let [b'R' | b'N' | b'B' | b'Q' | b'K', tail @ ..] = rest {
        rest = tail;
    }
    if let [b'a'..=b'h', tail @ ..] = rest {
        rest = tail;
    }
    if let [b'1'..=b'8', tail @ ..] = rest {
        rest = tail;
    }
    if let [b'x', tail @ ..] = rest {
        rest = tail;
    }
    rest.is_empty()
}

fn is_castling(s: &str) -> bool {
    matches!(s, "O-O" | "O-O-O")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_pawn_and_piece_tokens() {
        let mv = parse_token("e2e4").unwrap();
        assert_eq!(mv.piece, None);
        assert_eq!(mv.from, Position::new(6, 4));
        assert_eq!(mv.to, Position::new(4, 4));

        let mv = parse_token("Ng1f3").unwrap();
        assert_eq!(mv.piece, Some(PieceType::Knight));
        assert_eq!(mv.from, Position::new(7, 6));
        assert_eq!(mv.to, Position::new(5, 5));
    }

    #[test]
    fn rejects_everything_outside_the_strict_shape() {
        for token in ["", "e2", "e2e", "z9z9", "e2e9", "i2e4", "Xe2e4", "exd5", "O-O", "e2e4q", "e2 e4"] {
            assert_eq!(parse_token(token), None, "token {:?}", token);
        }
    }

    #[test]
    fn square_mapping_round_trips() {
        assert_eq!(square_to_position("a8"), Some(Position::new(0, 0)));
        assert_eq!(square_to_position("h1"), Some(Position::new(7, 7)));
        assert_eq!(square_to_position("e2"), Some(Position::new(6, 4)));
        assert_eq!(square_to_position("a0"), None);
        assert_eq!(square_to_position("a9"), None);

        for row in 0..8i8 {
            for col in 0..8i8 {
                let pos = Position::new(row, col);
                assert_eq!(square_to_position(&position_to_square(pos)), Some(pos));
            }
        }
    }

    #[test]
    fn formatted_moves_parse_back_to_the_same_squares() {
        let from = Position::new(7, 1);
        let to = Position::new(5, 2);
        let token = format_move(PieceType::Knight, from, to);
        assert_eq!(token, "Nb1c3");

        let parsed = parse_token(&token).unwrap();
        assert_eq!(parsed.from, from);
        assert_eq!(parsed.to, to);

        assert_eq!(format_move(PieceType::Pawn, Position::new(6, 4), Position::new(4, 4)), "e2e4");
    }

    #[test]
    fn classify_separates_notation_from_free_text() {
        for token in ["e2e4", "Nf3", "exd5", "Qh4", "Rad1", "O-O", "O-O-O", "e4", "Ng1f3"] {
            assert_eq!(classify(token), MoveInput::Token(token), "input {:?}", token);
        }
        for text in [
            "move my pawn two squares forward",
            "knight takes the bishop",
            "z9z9",
            "O-OO",
            "",
        ] {
            assert_eq!(classify(text), MoveInput::NeedsResolution(text), "input {:?}", text);
        }
    }

    #[test]
    fn classify_trims_surrounding_whitespace() {
        assert_eq!(classify("  e2e4 "), MoveInput::Token("e2e4"));
    }

    #[test]
    fn recognized_castling_tokens_still_fail_the_parser() {
        // Known recognizer/parser mismatch: castling is accepted as
        // notation-shaped but is not a legal token.
        assert_eq!(classify("O-O"), MoveInput::Token("O-O"));
        assert_eq!(parse_token("O-O"), None);
    }
}
