//! Orders file parsing.
//!
//! One item record per line: `order_id,location`, comma or whitespace
//! separated. Blank lines and `#` comments are skipped. Fields beyond the
//! first two are ignored.

use std::fs;
use std::path::Path;

use crate::error::{BatchingError, Result};
use crate::models::Item;

/// Parses orders data into item records, keeping file order.
///
/// # Examples
///
/// ```
/// use pickbatch::io::parse_orders;
///
/// let items = parse_orders("0,2\n0,5\n1,1\n").expect("valid data");
/// assert_eq!(items.len(), 3);
/// assert_eq!(items[2].order_id, 1);
/// ```
pub fn parse_orders(input: &str) -> Result<Vec<Item>> {
    let mut items = Vec::new();
    for (index, raw) in input.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let mut fields = line
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|field| !field.is_empty());

        let order_id = parse_field(fields.next(), index + 1, "order id")?;
        let location = parse_field(fields.next(), index + 1, "location")?;
        items.push(Item::new(order_id, location));
    }
    Ok(items)
}

/// Reads and parses an orders file.
pub fn read_orders_file(path: &Path) -> Result<Vec<Item>> {
    let content = fs::read_to_string(path)?;
    parse_orders(&content)
}

fn parse_field(field: Option<&str>, line: usize, name: &str) -> Result<usize> {
    let field = field.ok_or_else(|| {
        BatchingError::Input(format!("orders file line {line}: missing {name}"))
    })?;
    field.parse().map_err(|_| {
        BatchingError::Input(format!(
            "orders file line {line}: invalid {name} '{field}'"
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_comma_separated() {
        let items = parse_orders("0,2\n0,5\n1,1\n").expect("valid");
        assert_eq!(
            items,
            vec![Item::new(0, 2), Item::new(0, 5), Item::new(1, 1)]
        );
    }

    #[test]
    fn test_parse_whitespace_separated() {
        let items = parse_orders("0 2\n1\t4\n").expect("valid");
        assert_eq!(items, vec![Item::new(0, 2), Item::new(1, 4)]);
    }

    #[test]
    fn test_blank_lines_and_comments_skipped() {
        let items = parse_orders("# order_id, location\n\n0,1\n\n").expect("valid");
        assert_eq!(items, vec![Item::new(0, 1)]);
    }

    #[test]
    fn test_extra_fields_ignored() {
        let items = parse_orders("0,1,99\n").expect("valid");
        assert_eq!(items, vec![Item::new(0, 1)]);
    }

    #[test]
    fn test_missing_location_rejected() {
        let err = parse_orders("0\n").unwrap_err();
        assert!(err.to_string().contains("line 1"));
        assert!(err.to_string().contains("location"));
    }

    #[test]
    fn test_non_numeric_field_rejected() {
        let err = parse_orders("0,1\nx,2\n").unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn test_empty_input_yields_no_items() {
        assert!(parse_orders("").expect("valid").is_empty());
    }
}
