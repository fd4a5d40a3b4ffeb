use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ZoMateError};

/// The twelve tropical zodiac signs, in traditional order
///
/// Serializes as the capitalized name; deserializes through [`FromStr`], so
/// case and surrounding whitespace are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum ZodiacSign {
    Aries = 0,
    Taurus = 1,
    Gemini = 2,
    Cancer = 3,
    Leo = 4,
    Virgo = 5,
    Libra = 6,
    Scorpio = 7,
    Sagittarius = 8,
    Capricorn = 9,
    Aquarius = 10,
    Pisces = 11,
}

/// Classical element of a sign
///
/// `Unknown` only comes out of the lenient name lookup, never out of a typed sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
    Unknown,
}

/// Sign-pair compatibility, row = first profile's sign, column = second's.
///
/// Every entry is stored explicitly; the table is not mirrored.
const SIGN_COMPATIBILITY: [[u8; 12]; 12] = [
    //Ari Tau Gem Can Leo Vir Lib Sco Sag Cap Aqu Pis
    [85, 45, 75, 35, 95, 40, 70, 50, 90, 30, 80, 55], // Aries
    [45, 80, 35, 85, 60, 90, 75, 70, 40, 95, 45, 80], // Taurus
    [75, 35, 70, 45, 85, 55, 95, 40, 80, 35, 90, 50], // Gemini
    [35, 85, 45, 75, 55, 80, 60, 95, 35, 70, 40, 90], // Cancer
    [95, 60, 85, 55, 80, 45, 90, 65, 95, 40, 85, 50], // Leo
    [40, 90, 55, 80, 45, 75, 65, 85, 35, 95, 50, 70], // Virgo
    [70, 75, 95, 60, 90, 65, 80, 55, 85, 50, 95, 60], // Libra
    [50, 70, 40, 95, 65, 85, 55, 85, 45, 80, 35, 95], // Scorpio
    [90, 40, 80, 35, 95, 35, 85, 45, 85, 45, 90, 55], // Sagittarius
    [30, 95, 35, 70, 40, 95, 50, 80, 45, 85, 55, 75], // Capricorn
    [80, 45, 90, 40, 85, 50, 95, 35, 90, 55, 80, 60], // Aquarius
    [55, 80, 50, 90, 50, 70, 60, 95, 55, 75, 60, 85], // Pisces
];

const SIGN_ELEMENTS: [Element; 12] = [
    Element::Fire,  // Aries
    Element::Earth, // Taurus
    Element::Air,   // Gemini
    Element::Water, // Cancer
    Element::Fire,  // Leo
    Element::Earth, // Virgo
    Element::Air,   // Libra
    Element::Water, // Scorpio
    Element::Fire,  // Sagittarius
    Element::Earth, // Capricorn
    Element::Air,   // Aquarius
    Element::Water, // Pisces
];

/// The four signs shown as "most compatible" on the horoscope screen
const COMPATIBLE_SIGNS: [[ZodiacSign; 4]; 12] = {
    use ZodiacSign::*;
    [
        [Leo, Sagittarius, Gemini, Aquarius],   // Aries
        [Virgo, Capricorn, Cancer, Pisces],     // Taurus
        [Libra, Aquarius, Aries, Leo],          // Gemini
        [Scorpio, Pisces, Taurus, Virgo],       // Cancer
        [Aries, Sagittarius, Gemini, Libra],    // Leo
        [Taurus, Capricorn, Cancer, Scorpio],   // Virgo
        [Gemini, Aquarius, Leo, Sagittarius],   // Libra
        [Cancer, Pisces, Virgo, Capricorn],     // Scorpio
        [Aries, Leo, Libra, Aquarius],          // Sagittarius
        [Taurus, Virgo, Scorpio, Pisces],       // Capricorn
        [Gemini, Libra, Sagittarius, Aries],    // Aquarius
        [Cancer, Scorpio, Capricorn, Taurus],   // Pisces
    ]
};

impl ZodiacSign {
    pub const ALL: [ZodiacSign; 12] = [
        ZodiacSign::Aries,
        ZodiacSign::Taurus,
        ZodiacSign::Gemini,
        ZodiacSign::Cancer,
        ZodiacSign::Leo,
        ZodiacSign::Virgo,
        ZodiacSign::Libra,
        ZodiacSign::Scorpio,
        ZodiacSign::Sagittarius,
        ZodiacSign::Capricorn,
        ZodiacSign::Aquarius,
        ZodiacSign::Pisces,
    ];

    #[inline]
    fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            ZodiacSign::Aries => "Aries",
            ZodiacSign::Taurus => "Taurus",
            ZodiacSign::Gemini => "Gemini",
            ZodiacSign::Cancer => "Cancer",
            ZodiacSign::Leo => "Leo",
            ZodiacSign::Virgo => "Virgo",
            ZodiacSign::Libra => "Libra",
            ZodiacSign::Scorpio => "Scorpio",
            ZodiacSign::Sagittarius => "Sagittarius",
            ZodiacSign::Capricorn => "Capricorn",
            ZodiacSign::Aquarius => "Aquarius",
            ZodiacSign::Pisces => "Pisces",
        }
    }

    #[inline]
    pub fn element(self) -> Element {
        SIGN_ELEMENTS[self.index()]
    }

    /// Matrix score for `self` (row) against `other` (column)
    #[inline]
    pub fn compatibility_with(self, other: ZodiacSign) -> u8 {
        SIGN_COMPATIBILITY[self.index()][other.index()]
    }

    pub fn compatible_signs(self) -> [ZodiacSign; 4] {
        COMPATIBLE_SIGNS[self.index()]
    }
}

impl fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ZodiacSign {
    type Err = ZoMateError;

    /// Parses the capitalized English name, ignoring case and surrounding whitespace
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        ZodiacSign::ALL
            .into_iter()
            .find(|sign| sign.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ZoMateError::InvalidInput(format!("unknown zodiac sign '{}'", s)))
    }
}

impl TryFrom<String> for ZodiacSign {
    type Error = ZoMateError;

    fn try_from(name: String) -> Result<Self> {
        name.parse()
    }
}

impl Element {
    /// Lenient lookup used by filtering: unrecognized names map to `Unknown`
    pub fn for_sign_name(name: &str) -> Element {
        name.parse::<ZodiacSign>()
            .map(ZodiacSign::element)
            .unwrap_or(Element::Unknown)
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Element::Fire => "Fire",
            Element::Earth => "Earth",
            Element::Air => "Air",
            Element::Water => "Water",
            Element::Unknown => "Unknown",
        };
        f.write_str(name)
    }
}
