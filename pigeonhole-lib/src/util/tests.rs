use test_case::test_case;

use super::format_amount;

#[test_case(1234567890.123456, "1,234,567,890.12"; "large_fraction")]
#[test_case(123456.0, "123,456.00"; "pos_123456")]
#[test_case(-123456.0, "-123,456.00"; "neg_123456")]
#[test_case(0.0, "0.00"; "zero")]
#[test_case(0.009, "0.01"; "round_up")]
#[test_case(0.001, "0.00"; "pos_round_down")]
#[test_case(-0.001, "0.00"; "neg_round_down")]
#[test_case(123.0, "123.00"; "pos_123")]
#[test_case(-123.0, "-123.00"; "neg_123")]
#[test_case(-9876.54321, "-9,876.54"; "neg_truncate")]
fn test_format_amount(input: f64, expected_output: &str) {
    let formatted_output = format_amount(input);
    assert_eq!(formatted_output, expected_output);
}
