//! Segment expressions: boolean filters over visit attributes.
//!
//! A segment is written as `dimension<op>value` operands joined with
//! [`AND_DELIMITER`] and [`OR_DELIMITER`]. OR binds tighter than AND, so
//! `browserCode==FF,browserCode==CH;visitorType==returning` reads as
//! `(FF OR CH) AND returning`. Values are percent-decoded.

use std::fmt;
use thiserror::Error;

/// Joins two conditions that must both hold.
pub const AND_DELIMITER: &str = ";";

/// Joins alternatives of which at least one must hold.
pub const OR_DELIMITER: &str = ",";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SegmentError {
    #[error("Segment condition '{0}' has no valid operator")]
    UnknownOperator(String),

    #[error("Segment condition '{0}' has an empty dimension")]
    EmptyDimension(String),

    #[error("Segment condition '{0}' has an invalid dimension name")]
    InvalidDimension(String),

    #[error("Segment condition '{0}' contains an invalid percent-encoded value")]
    InvalidEncoding(String),

    #[error("Segment '{0}' contains an empty condition")]
    EmptyCondition(String),

    #[error("Segment dimension '{0}' is not supported")]
    UnsupportedDimension(String),
}

/// Comparison applied between a dimension and a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOperator {
    Equals,
    NotEquals,
    LessOrEqual,
    GreaterOrEqual,
    Less,
    Greater,
    Contains,
    DoesNotContain,
}

impl MatchOperator {
    /// Two-character operators come first so `<=` is never read as `<`.
    const TOKENS: [(&'static str, MatchOperator); 8] = [
        ("==", MatchOperator::Equals),
        ("!=", MatchOperator::NotEquals),
        ("<=", MatchOperator::LessOrEqual),
        (">=", MatchOperator::GreaterOrEqual),
        ("=@", MatchOperator::Contains),
        ("!@", MatchOperator::DoesNotContain),
        ("<", MatchOperator::Less),
        (">", MatchOperator::Greater),
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MatchOperator::Equals => "==",
            MatchOperator::NotEquals => "!=",
            MatchOperator::LessOrEqual => "<=",
            MatchOperator::GreaterOrEqual => ">=",
            MatchOperator::Less => "<",
            MatchOperator::Greater => ">",
            MatchOperator::Contains => "=@",
            MatchOperator::DoesNotContain => "!@",
        }
    }
}

/// A single `dimension<op>value` operand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Condition {
    pub dimension: String,
    pub operator: MatchOperator,
    pub value: String,
}

impl Condition {
    fn parse(raw: &str) -> Result<Self, SegmentError> {
        let (position, token, operator) = raw
            .char_indices()
            .find_map(|(i, _)| {
                MatchOperator::TOKENS
                    .iter()
                    .find(|(token, _)| raw[i..].starts_with(token))
                    .map(|(token, op)| (i, *token, *op))
            })
            .ok_or_else(|| SegmentError::UnknownOperator(raw.to_string()))?;

        let dimension = raw[..position].trim();
        if dimension.is_empty() {
            return Err(SegmentError::EmptyDimension(raw.to_string()));
        }
        if !dimension
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.')
        {
            return Err(SegmentError::InvalidDimension(raw.to_string()));
        }

        let value = urlencoding::decode(&raw[position + token.len()..])
            .map_err(|_| SegmentError::InvalidEncoding(raw.to_string()))?
            .into_owned();

        Ok(Self {
            dimension: dimension.to_string(),
            operator,
            value,
        })
    }
}

/// A parsed segment: a conjunction of disjunctions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Segment {
    raw: String,
    groups: Vec<Vec<Condition>>,
}

impl Segment {
    /// Parses a segment expression. An empty or blank string is the empty
    /// segment, which matches every visit.
    pub fn parse(raw: &str) -> Result<Self, SegmentError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(Self::default());
        }

        let groups = trimmed
            .split(AND_DELIMITER)
            .map(|group| {
                group
                    .split(OR_DELIMITER)
                    .map(|operand| {
                        if operand.trim().is_empty() {
                            Err(SegmentError::EmptyCondition(trimmed.to_string()))
                        } else {
                            Condition::parse(operand)
                        }
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            raw: trimmed.to_string(),
            groups,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// AND-groups, each holding the OR-alternatives that satisfy it.
    pub fn groups(&self) -> &[Vec<Condition>] {
        &self.groups
    }

    /// Combines two segment expressions so that both must match.
    ///
    /// # Examples
    ///
    /// ```
    /// use analytics_console::domain::report::Segment;
    ///
    /// assert_eq!(Segment::combine_and("", "visitorType==new"), "visitorType==new");
    /// assert_eq!(
    ///     Segment::combine_and("browserCode==FF", "visitorType==new"),
    ///     "browserCode==FF;visitorType==new"
    /// );
    /// ```
    pub fn combine_and(segment: &str, condition: &str) -> String {
        if segment.is_empty() {
            condition.to_string()
        } else {
            format!("{segment}{AND_DELIMITER}{condition}")
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
