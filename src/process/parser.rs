// src/process/parser.rs

use crate::process::utils::trim_cell;

/// Split raw sheet text into rows of trimmed fields.
///
/// Single pass over the characters with one quote flag:
/// - `""` inside a quoted section is a literal `"`
/// - `,` outside quotes closes the field
/// - `\r` / `\n` outside quotes closes the row, unless nothing has been
///   collected yet (so `\r\n` and blank lines never yield an empty row)
///
/// Never fails. Unbalanced quotes just swallow the rest of the input into
/// the open field.
pub fn parse_csv(text: &str) -> Vec<Vec<String>> {
    let mut rows: Vec<Vec<String>> = Vec::new();
    let mut current: Vec<String> = Vec::new();
    let mut value = String::new();
    let mut inside_quotes = false;

    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '"' if inside_quotes && chars.peek() == Some(&'"') => {
                value.push('"');
                chars.next();
            }
            '"' => inside_quotes = !inside_quotes,
            ',' if !inside_quotes => close_field(&mut current, &mut value),
            '\n' | '\r' if !inside_quotes => {
                if !value.is_empty() || !current.is_empty() {
                    close_field(&mut current, &mut value);
                    rows.push(std::mem::take(&mut current));
                }
            }
            _ => value.push(ch),
        }
    }

    // input without a trailing line break
    if !value.is_empty() || !current.is_empty() {
        close_field(&mut current, &mut value);
        rows.push(current);
    }

    rows
}

fn close_field(current: &mut Vec<String>, value: &mut String) {
    current.push(trim_cell(value).to_string());
    value.clear();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(fields: &[&str]) -> Vec<String> {
        fields.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn empty_input_has_no_rows() {
        assert!(parse_csv("").is_empty());
    }

    #[test]
    fn plain_rows() {
        let rows = parse_csv("a,b,c\n1,2,3");
        assert_eq!(rows, vec![row(&["a", "b", "c"]), row(&["1", "2", "3"])]);
    }

    #[test]
    fn trailing_newline_adds_no_row() {
        assert_eq!(parse_csv("a,b,c\n1,2,3\n"), parse_csv("a,b,c\n1,2,3"));
        assert_eq!(parse_csv("a,b,c\n1,2,3\n").len(), 2);
    }

    #[test]
    fn quoted_comma_is_kept() {
        assert_eq!(parse_csv(r#"a,"b,c",d"#), vec![row(&["a", "b,c", "d"])]);
    }

    #[test]
    fn doubled_quote_is_literal() {
        assert_eq!(parse_csv(r#"a,"b""c",d"#), vec![row(&["a", "b\"c", "d"])]);
    }

    #[test]
    fn crlf_does_not_make_blank_rows() {
        assert_eq!(
            parse_csv("a,b\r\nc,d"),
            vec![row(&["a", "b"]), row(&["c", "d"])]
        );
        assert_eq!(parse_csv("a,b\r\n\r\nc,d\r\n").len(), 2);
    }

    #[test]
    fn quoted_newline_stays_in_field() {
        let rows = parse_csv("id,note\np1,\"line one\nline two\"\n");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1][1], "line one\nline two");
    }

    #[test]
    fn fields_are_trimmed_on_close() {
        assert_eq!(parse_csv("  a , \" b \" ,c  "), vec![row(&["a", "b", "c"])]);
    }

    #[test]
    fn empty_fields_are_kept() {
        assert_eq!(parse_csv("a,,c\n,,"), vec![row(&["a", "", "c"]), row(&["", "", ""])]);
    }

    #[test]
    fn ragged_rows_are_allowed() {
        let rows = parse_csv("id,price,unit\np1,10\np2,20,kg,extra");
        assert_eq!(rows[1].len(), 2);
        assert_eq!(rows[2].len(), 4);
    }

    #[test]
    fn unterminated_quote_degrades_gracefully() {
        let rows = parse_csv("a,\"b,c\nd,e");
        assert_eq!(rows, vec![row(&["a", "b,c\nd,e"])]);
    }

    #[test]
    fn leading_byte_order_mark_is_trimmed() {
        let rows = parse_csv("\u{feff}ID,Price\r\np1,10\r\n");
        assert_eq!(rows, vec![row(&["ID", "Price"]), row(&["p1", "10"])]);
    }

    #[test]
    fn whitespace_only_line_yields_single_empty_field() {
        assert_eq!(parse_csv("a\n   \nb"), vec![row(&["a"]), row(&[""]), row(&["b"])]);
    }
}
