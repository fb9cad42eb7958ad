use crate::error::{MathError, Result};
use crate::pascal::Row;
use nom::{
    branch::alt,
    bytes::complete::is_not,
    character::complete::{char, digit1, multispace0, space0, space1},
    combinator::{all_consuming, map_res, value},
    multi::{separated_list0, separated_list1},
    sequence::delimited,
    IResult,
};
use num_bigint::BigUint;

/// Characters that separate values on a command line or in a row listing
const SEPARATORS: &str = " \t\r\n,";

/// Parse a separator: a comma with optional surrounding blanks, or blanks alone
fn separator(input: &str) -> IResult<&str, ()> {
    alt((value((), delimited(space0, char(','), space0)), value((), space1)))(input)
}

/// Parse a single unsigned integer of any size
fn parse_biguint(input: &str) -> IResult<&str, BigUint> {
    map_res(digit1, |s: &str| s.parse::<BigUint>())(input)
}

/// Parse a row of separated integers
fn row(input: &str) -> IResult<&str, Row> {
    delimited(
        multispace0,
        separated_list1(separator, parse_biguint),
        multispace0,
    )(input)
}

/// Parse a single item: a run of non-separator characters
fn item(input: &str) -> IResult<&str, &str> {
    is_not(SEPARATORS)(input)
}

/// Parse a possibly empty list of separated items
fn items(input: &str) -> IResult<&str, Vec<&str>> {
    delimited(multispace0, separated_list0(separator, item), multispace0)(input)
}

/// Parse a Pascal row such as `"1 3 3 1"` or `"1, 3, 3, 1"`.
pub fn parse_row(input: &str) -> Result<Row> {
    match all_consuming(row)(input) {
        Ok((_, parsed)) => Ok(parsed),
        Err(e) => Err(MathError::invalid(format!("cannot parse row {input:?}: {e}"))),
    }
}

/// Split an item listing such as `"1.2 hello false"` or `"a,b,c"` into items.
pub fn parse_items(input: &str) -> Result<Vec<&str>> {
    match all_consuming(items)(input) {
        Ok((_, parsed)) => Ok(parsed),
        Err(e) => Err(MathError::invalid(format!(
            "cannot parse items {input:?}: {e}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_of(values: &[u64]) -> Row {
        values.iter().copied().map(BigUint::from).collect()
    }

    #[test]
    fn test_parse_row_with_spaces() {
        assert_eq!(parse_row("1 3 3 1").unwrap(), row_of(&[1, 3, 3, 1]));
    }

    #[test]
    fn test_parse_row_with_commas_and_padding() {
        assert_eq!(parse_row("  1, 2 ,1\n").unwrap(), row_of(&[1, 2, 1]));
    }

    #[test]
    fn test_parse_row_beyond_u64() {
        let parsed = parse_row("1 100891344545564193334812497256").unwrap();
        assert_eq!(parsed[1].to_string(), "100891344545564193334812497256");
    }

    #[test]
    fn test_parse_row_rejects_garbage() {
        assert!(parse_row("1 two 1").is_err());
        assert!(parse_row("").is_err());
        assert!(parse_row("-1 1").is_err());
    }

    #[test]
    fn test_parse_items() {
        assert_eq!(
            parse_items("1.2 hello false").unwrap(),
            vec!["1.2", "hello", "false"]
        );
        assert_eq!(parse_items("a,b, c ").unwrap(), vec!["a", "b", "c"]);
        assert!(parse_items("   ").unwrap().is_empty());
    }
}
