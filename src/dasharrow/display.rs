use core::fmt;
use std::str::FromStr;

use nom::{IResult, bytes::complete::tag, character::complete::char, combinator::all_consuming, multi::many1_count, sequence::tuple};

use crate::error::{Error, Result};

/// The arrow shown for a count: one dash per count, then `>`.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct DisplayText(pub u64);

impl DisplayText {
    pub fn count(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for DisplayText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // A count past usize::MAX cannot be drawn on this target.
        let dashes = usize::try_from(self.0).map_err(|_| fmt::Error)?;
        write!(f, "{}>", "-".repeat(dashes))
    }
}

impl FromStr for DisplayText {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match parse_display_text(s) {
            Ok((_rem, text)) => Ok(text),
            Err(_) => Err(Error::MalformedText(s.to_string())),
        }
    }
}

pub fn display_text(count: u64) -> String {
    DisplayText(count).to_string()
}

fn parse_shaft(input: &str) -> IResult<&str, usize> {
    many1_count(char('-'))(input)
}

fn parse_head(input: &str) -> IResult<&str, &str> {
    tag(">")(input)
}

fn parse_display_text(input: &str) -> IResult<&str, DisplayText> {
    let (rem, (dashes, _)) = all_consuming(tuple((parse_shaft, parse_head)))(input)?;
    Ok((rem, DisplayText(dashes as u64)))
}
