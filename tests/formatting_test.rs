use display_helpers::{
    convert_months_to_years_and_months, format_label, number_with_commas, DurationFormat,
    FormatConfig, HelperError, NumberFormat, TomlConfig,
};

#[test]
fn test_format_label_examples() {
    assert_eq!(format_label("firstName"), "First Name");
    assert_eq!(format_label("id"), "Id");
    assert_eq!(format_label(""), "");
    assert_eq!(format_label("createdAtDate"), "Created At Date");
}

#[test]
fn test_tenure_examples() {
    let format = DurationFormat::default();
    let cases = [(0, "初始"), (12, "1年"), (13, "1年1月"), (25, "2年1月"), (11, "11月")];

    for (months, expected) in cases {
        assert_eq!(
            convert_months_to_years_and_months(months, &format).unwrap(),
            expected
        );
    }
}

#[test]
fn test_tenure_rejects_negative_counts() {
    let result = convert_months_to_years_and_months("-3", &DurationFormat::default());
    assert!(matches!(result, Err(HelperError::InvalidDuration { .. })));
}

#[test]
fn test_number_examples() {
    let format = NumberFormat::default();
    assert_eq!(number_with_commas(1234567, &format), "1,234,567");
    assert_eq!(number_with_commas("1234567", &format), "1,234,567");
    assert_eq!(number_with_commas("not a number", &format), "NaN");
}

#[test]
fn test_formats_from_config() {
    let config = TomlConfig::from_toml_str(
        r#"
[locale]
name = "en-US"

[duration]
separator = ", "
"#,
    )
    .unwrap();

    let formats: FormatConfig = config.format_config().unwrap();
    assert_eq!(
        convert_months_to_years_and_months(30, &formats.duration).unwrap(),
        "2y, 6m"
    );
    assert_eq!(number_with_commas(9876543.21, &formats.number), "9,876,543.21");
}
