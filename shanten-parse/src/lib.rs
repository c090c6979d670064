//! Reader for the hand-string notation used throughout this workspace's
//! tests and tooling, e.g. `"123m456p,c<789p,p^111s,k_2222m"`.
//!
//! Turns a human-writable string into the [`HandInfo`] the checkers in
//! `shanten-core` consume, and nothing more. No regex dependency:
//! `shanten-tiles` already parses single tile shorthands by hand in
//! [`shanten_tiles::tile::Tile`]'s `FromStr`, and this module just extends
//! that idiom to tile groups and call strings.

use thiserror::Error;

use shanten_core::hand::HandInfo;
use shanten_tiles::call::{Call, CallKind, CallSource};
use shanten_tiles::error::TileError;
use shanten_tiles::tile::Tile;
use shanten_tiles::tile_count::TileCount;

/// Errors raised while reading hand- and call-string notation: one
/// variant per distinct grammar violation, carrying the offending text
/// for diagnosis.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum ParseError {
    /// A tile shorthand (`"1m"`, `"7z"`, ...) failed to parse.
    #[error(transparent)]
    Tile(#[from] TileError),

    /// A digit run in the concealed section was not followed by one of
    /// `m`/`p`/`s`/`z`, e.g. a trailing `"12"` with no suit letter.
    #[error("tile group {0:?} has no trailing suit letter")]
    MissingSuitLetter(String),

    /// A call token did not match `[cpkbs][<^>_][digits][mpsz]`, e.g. it
    /// was empty or too short to contain a kind, a source, and a tile.
    #[error("call {0:?} is not of the form [cpkbs][<^>_][digits][mpsz]")]
    MalformedCall(String),

    /// The leading character of a call token is not one of `c`/`p`/`k`/`b`/`s`.
    #[error("{0:?} is not a call kind (expected one of c, p, k, b, s)")]
    UnknownCallKind(char),

    /// The second character of a call token is not one of `<`/`^`/`>`/`_`.
    #[error("{0:?} is not a call source (expected one of <, ^, >, _)")]
    UnknownCallSource(char),

    /// The tiles a call token spelled out do not form the shape its
    /// leading kind character demands (e.g. `"p<456p"` names a pon but
    /// gives three different tiles, or a `chii`/`pon`/kan call with the
    /// wrong tile count).
    #[error("tiles in {0:?} do not form a valid call of the declared kind")]
    MalformedCallShape(String),
}

/// Parses one tile shorthand, e.g. `"1m"` or `"6z"`.
///
/// Delegates entirely to [`Tile`]'s `FromStr`, which already implements
/// the family/value mapping (including the dragon shorthand's `-4` offset
/// for `5z`..`7z`).
pub fn parse_tile(tile_str: &str) -> Result<Tile, ParseError> {
    tile_str.parse::<Tile>().map_err(ParseError::from)
}

/// Parses one tile group, e.g. `"123m"` or `"567z"`: a run of digits
/// followed by a single suit letter, expanding to one [`Tile`] per digit.
pub fn parse_tile_group(group: &str) -> Result<Vec<Tile>, ParseError> {
    let Some(suit) = group.chars().last() else {
        return Err(ParseError::MissingSuitLetter(group.to_string()));
    };
    let digits = &group[..group.len() - suit.len_utf8()];
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(ParseError::MissingSuitLetter(group.to_string()));
    }
    digits.chars().map(|d| parse_tile(&format!("{d}{suit}"))).collect()
}

/// Splits the concealed section of a hand string (e.g.
/// `"123m456p789s1112z"`, with no commas) into its tile groups and
/// parses each one, in the order they appear.
fn parse_concealed_section(section: &str) -> Result<Vec<Tile>, ParseError> {
    let mut tiles = Vec::new();
    let mut digits = String::new();
    for ch in section.chars() {
        if ch.is_ascii_digit() {
            digits.push(ch);
            continue;
        }
        if !matches!(ch, 'm' | 'p' | 's' | 'z') {
            return Err(ParseError::MissingSuitLetter(section.to_string()));
        }
        if digits.is_empty() {
            return Err(ParseError::MissingSuitLetter(section.to_string()));
        }
        let mut group = std::mem::take(&mut digits);
        group.push(ch);
        tiles.extend(parse_tile_group(&group)?);
    }
    if !digits.is_empty() {
        return Err(ParseError::MissingSuitLetter(section.to_string()));
    }
    Ok(tiles)
}

fn call_kind_from_char(c: char) -> Result<CallKind, ParseError> {
    match c {
        'c' => Ok(CallKind::Chii),
        'p' => Ok(CallKind::Pon),
        'k' => Ok(CallKind::ConcealedKan),
        'b' => Ok(CallKind::BigMeldedKan),
        's' => Ok(CallKind::SmallMeldedKan),
        other => Err(ParseError::UnknownCallKind(other)),
    }
}

fn call_source_from_char(c: char) -> Result<CallSource, ParseError> {
    match c {
        '<' => Ok(CallSource::Prev),
        '^' => Ok(CallSource::Across),
        '>' => Ok(CallSource::Next),
        '_' => Ok(CallSource::SelfDrawn),
        other => Err(ParseError::UnknownCallSource(other)),
    }
}

/// Parses one call token, e.g. `"c<789p"` (chii from the previous
/// player) or `"k_2222m"` (self-declared concealed kan).
pub fn parse_call(call_str: &str) -> Result<Call, ParseError> {
    let mut chars = call_str.chars();
    let (Some(kind_char), Some(source_char)) = (chars.next(), chars.next()) else {
        return Err(ParseError::MalformedCall(call_str.to_string()));
    };
    let rest: String = chars.collect();
    if rest.is_empty() {
        return Err(ParseError::MalformedCall(call_str.to_string()));
    }

    let kind = call_kind_from_char(kind_char)?;
    let source = call_source_from_char(source_char)?;
    let tiles = parse_tile_group(&rest)?;

    let actual = TileCount::from_tiles(tiles.iter().copied());
    let built = match kind {
        CallKind::Chii => {
            if source != CallSource::Prev {
                return Err(ParseError::MalformedCallShape(call_str.to_string()));
            }
            let start = *tiles.iter().min().ok_or_else(|| {
                ParseError::MalformedCallShape(call_str.to_string())
            })?;
            Call::chii(start)
        }
        CallKind::Pon => {
            let tile = tiles.first().copied().ok_or_else(|| {
                ParseError::MalformedCallShape(call_str.to_string())
            })?;
            Call::pon(tile, source)
        }
        CallKind::ConcealedKan | CallKind::BigMeldedKan | CallKind::SmallMeldedKan => {
            let tile = tiles.first().copied().ok_or_else(|| {
                ParseError::MalformedCallShape(call_str.to_string())
            })?;
            Call::kan(kind, tile, source)
        }
    }
    .map_err(ParseError::from)?;

    if built.tiles() != actual {
        return Err(ParseError::MalformedCallShape(call_str.to_string()));
    }
    Ok(built)
}

/// Parses a full hand string into its concealed tiles and call records:
///
/// ```text
/// "123m456p,c<789p,p^111s,k_2222m"
/// ```
///
/// The section before the first comma is the concealed tiles (one or
/// more concatenated tile groups, no commas between them); each
/// subsequent comma-separated token is a call.
pub fn parse_hand(hand_str: &str) -> Result<HandInfo, ParseError> {
    let mut parts = hand_str.split(',');
    let concealed_section = parts.next().unwrap_or("");
    let concealed = TileCount::from_tiles(parse_concealed_section(concealed_section)?);

    let calls = parts.map(parse_call).collect::<Result<Vec<_>, _>>()?;

    Ok(HandInfo::from_concealed(concealed).with_calls(calls))
}

/// Attaches a winning tile (and whether it was self-drawn) to a hand
/// parsed by [`parse_hand`], mirroring the `(tile, tsumo/ron)` pair a
/// caller typically reads separately from the hand string itself.
pub fn parse_hand_with_winning_tile(
    hand_str: &str,
    winning_tile: &str,
    self_drawn: bool,
) -> Result<HandInfo, ParseError> {
    let hand = parse_hand(hand_str)?;
    let tile = parse_tile(winning_tile)?;
    Ok(hand.with_winning_tile(tile, self_drawn))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use shanten_tiles::t;

    use super::*;

    #[test]
    fn parse_tile_group_expands_digits_under_one_suit() {
        let tiles = parse_tile_group("123m").unwrap();
        assert_eq!(tiles, vec![t!("1m"), t!("2m"), t!("3m")]);
    }

    #[test]
    fn parse_tile_group_maps_dragon_shorthand() {
        let tiles = parse_tile_group("567z").unwrap();
        assert_eq!(tiles, vec![t!("5z"), t!("6z"), t!("7z")]);
    }

    #[test]
    fn parse_hand_reads_concatenated_concealed_groups() {
        let hand = parse_hand("123m456p789s1112z").unwrap();
        assert_eq!(hand.concealed().total(), 13);
        assert_eq!(hand.concealed()[t!("1z")], 3);
        assert!(hand.calls().is_empty());
    }

    #[test]
    fn parse_hand_reads_calls_after_the_concealed_section() {
        let hand = parse_hand("123m456p,c<789p,p^111s,k_2222m").unwrap();
        assert_eq!(hand.concealed().total(), 6);
        assert_eq!(hand.calls().len(), 3);
        assert_eq!(hand.calls()[0].kind(), CallKind::Chii);
        assert_eq!(hand.calls()[1].kind(), CallKind::Pon);
        assert_eq!(hand.calls()[2].kind(), CallKind::ConcealedKan);
        assert_eq!(hand.calls()[2].source(), CallSource::SelfDrawn);
    }

    #[test]
    fn parse_call_rejects_mismatched_shape() {
        // Declares a pon but spells out three different tiles.
        assert!(parse_call("p<456p").is_err());
    }

    #[test]
    fn parse_call_rejects_unknown_kind_or_source() {
        assert!(matches!(parse_call("x<123m"), Err(ParseError::UnknownCallKind('x'))));
        assert!(matches!(parse_call("c?123m"), Err(ParseError::UnknownCallSource('?'))));
    }

    #[test]
    fn parse_hand_with_winning_tile_attaches_it() {
        let hand = parse_hand_with_winning_tile("123m456p789s1112z", "2z", true).unwrap();
        assert_eq!(hand.winning_tile(), Some(t!("2z")));
        assert!(hand.self_drawn());
    }

    #[test]
    fn rejects_trailing_digits_with_no_suit_letter() {
        assert!(parse_hand("123m45").is_err());
    }

    #[test]
    fn rejects_malformed_call_missing_tiles() {
        assert!(matches!(parse_call("c<"), Err(ParseError::MalformedCall(_))));
    }
}
