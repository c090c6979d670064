//! [`Tile`]: one of the 34 kinds of tile this engine reasons about.
//!
//! ## Ref
//! - <https://en.wikipedia.org/wiki/Mahjong_tiles>
//! - <https://riichi.wiki/Mahjong_equipment>

use core::fmt::{Display, Formatter};
use core::str::FromStr;

use crate::error::TileError;

/// One of the 34 kinds of tile, encoded as its index into the fixed
/// universe:
///
/// | Index range | Family | Contents |
/// |-------------|--------|----------|
/// | 0..=8   | M (萬子) | 1m..=9m |
/// | 9..=17  | P (筒子) | 1p..=9p |
/// | 18..=26 | S (索子) | 1s..=9s |
/// | 27..=30 | Wind (風牌) | E, S, W, N |
/// | 31..=33 | Dragon (三元牌) | White, Green, Red |
///
/// Unlike a full 136-tile physical set, red fives and bonus ("ETC" family)
/// tiles have no representation here; tracking those is a caller concern
/// layered on top, not something this 34-wide universe needs to know about.
///
/// Details of this encoding are significant and implicitly assumed
/// throughout the crate; it should never be changed.
///
/// ## Optional `serde` support
///
/// The shorthand string (e.g. `"1m"`, `"7z"`) is used as the serialization
/// format, for readability and interop with other hand notations.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct Tile(u8);

/// The suit/family a tile belongs to.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Family {
    Man,
    Pin,
    Sou,
    Wind,
    Dragon,
}

impl Tile {
    pub const MIN_ENCODING: u8 = 0;
    pub const MAX_ENCODING: u8 = 33;
    pub const NUM_TILES: usize = 34;

    /// Constructs a tile from its raw 0..=33 index.
    pub const fn from_index(index: u8) -> Option<Self> {
        if index <= Self::MAX_ENCODING { Some(Self(index)) } else { None }
    }

    /// Constructs a tile from a family and its 1-based value within that
    /// family (1..=9 for numerals, 1..=4 for winds, 1..=3 for dragons).
    /// There is no way to construct a bonus ("ETC"-family) tile: that
    /// conversion always fails, by design: this is the only door into the
    /// 34-tile universe and it has no room for them.
    pub const fn from_family_value(family: Family, value: u8) -> Result<Self, TileError> {
        let ok = match family {
            Family::Man | Family::Pin | Family::Sou => value >= 1 && value <= 9,
            Family::Wind => value >= 1 && value <= 4,
            Family::Dragon => value >= 1 && value <= 3,
        };
        if !ok {
            return Err(TileError::InvalidTile(value));
        }
        let base = match family {
            Family::Man => 0,
            Family::Pin => 9,
            Family::Sou => 18,
            Family::Wind => 27,
            Family::Dragon => 31,
        };
        Ok(Self(base + value - 1))
    }

    /// The raw 0..=33 index of this tile.
    pub const fn index(self) -> u8 {
        self.0
    }

    pub const fn family(self) -> Family {
        match self.0 {
            0..=8 => Family::Man,
            9..=17 => Family::Pin,
            18..=26 => Family::Sou,
            27..=30 => Family::Wind,
            _ => Family::Dragon,
        }
    }

    /// The 1-based value within this tile's family.
    pub const fn value(self) -> u8 {
        match self.family() {
            Family::Man => self.0 + 1,
            Family::Pin => self.0 - 9 + 1,
            Family::Sou => self.0 - 18 + 1,
            Family::Wind => self.0 - 27 + 1,
            Family::Dragon => self.0 - 31 + 1,
        }
    }

    pub const fn is_numeral(self) -> bool {
        self.0 <= 26
    }
    pub const fn is_pure_terminal(self) -> bool {
        matches!(self.0, 0 | 8 | 9 | 17 | 18 | 26)
    }
    pub const fn is_honor(self) -> bool {
        self.0 >= 27
    }
    pub const fn is_wind(self) -> bool {
        27 <= self.0 && self.0 <= 30
    }
    pub const fn is_dragon(self) -> bool {
        31 <= self.0 && self.0 <= 33
    }
    /// Terminals and honors (么九牌): the 13 kinds usable in Thirteen Orphans.
    pub const fn is_terminal_or_honor(self) -> bool {
        self.is_pure_terminal() || self.is_honor()
    }

    pub const fn as_str(self) -> &'static str {
        [
            "1m", "2m", "3m", "4m", "5m", "6m", "7m", "8m", "9m", //
            "1p", "2p", "3p", "4p", "5p", "6p", "7p", "8p", "9p", //
            "1s", "2s", "3s", "4s", "5s", "6s", "7s", "8s", "9s", //
            "1z", "2z", "3z", "4z", "5z", "6z", "7z", //
        ][self.0 as usize]
    }
}

impl Display for Tile {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Tile {
    type Err = TileError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(num_char), Some(suit_char), None) = (chars.next(), chars.next(), chars.next())
        else {
            return Err(TileError::InvalidTile(0));
        };
        let num = num_char.to_digit(10).ok_or(TileError::InvalidTile(0))? as u8;
        match suit_char {
            'm' => Tile::from_family_value(Family::Man, num),
            'p' => Tile::from_family_value(Family::Pin, num),
            's' => Tile::from_family_value(Family::Sou, num),
            'z' if (1..=4).contains(&num) => Tile::from_family_value(Family::Wind, num),
            'z' if (5..=7).contains(&num) => Tile::from_family_value(Family::Dragon, num - 4),
            _ => Err(TileError::InvalidTile(num)),
        }
    }
}

impl TryFrom<&str> for Tile {
    type Error = TileError;
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl TryFrom<String> for Tile {
    type Error = TileError;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Tile> for String {
    fn from(tile: Tile) -> Self {
        tile.as_str().to_string()
    }
}

/// Shortcut for a tile literal through its string shorthand, e.g. `t!("7z")`.
#[macro_export]
macro_rules! t {
    ($s:expr) => {{
        use core::str::FromStr;
        $crate::tile::Tile::from_str($s).unwrap()
    }};
}
pub use t;
