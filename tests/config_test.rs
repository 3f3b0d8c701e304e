use email_extractor::*;

#[test]
fn test_config_defaults() {
    let config = ExtractorConfig::from_json("{}").unwrap();
    assert!(config.filter.is_empty());
    assert!(config.pattern.is_none());
    assert_eq!(config, ExtractorConfig::default());
}

#[test]
fn test_config_invalid_json() {
    assert!(matches!(
        ExtractorConfig::from_json("{\"filter\": 3}"),
        Err(ExtractError::Config(_))
    ));
}

#[test]
fn test_config_json_round_trip() {
    let config = ExtractorConfig {
        filter: vec!["spam".into()],
        pattern: Some(r"\w+@\w+".into()),
    };
    let json = config.to_json().unwrap();
    assert_eq!(ExtractorConfig::from_json(&json).unwrap(), config);
}

#[test]
fn test_extractor_from_config() {
    let config = ExtractorConfig::from_json(
        r#"{"filter": ["spam"], "pattern": "[a-z]+@[a-z]+\\.org"}"#,
    )
    .unwrap();

    let mut extractor = EmailExtractor::from_config(&config);
    assert_eq!(extractor.filter(), ["spam"]);
    assert!(!extractor.pattern().is_builtin());

    let emails = extractor
        .extract("a@spam.org b@good.org c@good.com")
        .unwrap()
        .filter_exclude(None)
        .unwrap()
        .export()
        .unwrap();
    assert_eq!(emails, ["b@good.org"]);
}

#[test]
fn test_config_without_pattern_uses_builtin() {
    let config = ExtractorConfig {
        filter: Vec::new(),
        pattern: None,
    };
    assert!(EmailExtractor::from_config(&config).pattern().is_builtin());
}
