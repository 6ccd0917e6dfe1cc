// Integration tests for the template helper methods
use blade_helpers::{EncodingError, HelperConfig, HexCase, SpaceEncoding, TemplateBase, TemplateHelpers};

#[test]
fn test_null_inputs_give_empty_strings() {
    let t = TemplateBase::new();
    assert_eq!(t.html_encode(None::<&str>), "");
    assert_eq!(t.html_decode(None::<&str>), "");
    assert_eq!(t.url_encode(None::<&str>), "");
    assert_eq!(t.url_encode(""), "");
    assert_eq!(t.full_url_encode(None::<&str>), "");
    assert_eq!(t.url_decode(None::<&str>), "");
    assert_eq!(t.md5(None::<&str>), "");
    assert_eq!(t.base64_encode(None::<&str>), "");
    assert_eq!(t.base64_decode(None::<&str>).unwrap(), "");
}

#[test]
fn test_html_encode_and_decode() {
    let t = TemplateBase::new();
    let encoded = t.html_encode("<a href=\"x\">Tom & Jerry's</a>");
    assert_eq!(
        encoded,
        "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
    );
    assert_eq!(t.html_decode(encoded.as_str()), "<a href=\"x\">Tom & Jerry's</a>");
    assert_eq!(t.html_decode("&#60;&#x3E;&copy;"), "<>©");
    assert_eq!(t.html_decode("&bogus;"), "&bogus;");
}

#[test]
fn test_url_encode_keeps_path() {
    let t = TemplateBase::new();
    assert_eq!(t.url_encode("/path?a=b c&d=e/f"), "/path?a=b%20c&d=e%2Ff");
    assert_eq!(t.url_encode("/a b/?q=1&flag"), "/a b/?q=1&flag");
    assert_eq!(t.url_encode("x=1&&y=&z"), "x=1&y=&z");
}

#[test]
fn test_url_encode_plus_spaces() {
    let config = HelperConfig::default().with_space_encoding(SpaceEncoding::Plus);
    let t = TemplateBase::with_config(config);
    assert_eq!(t.url_encode("/s?q=hello world"), "/s?q=hello+world");
    assert_eq!(t.full_url_encode("a b+c"), "a+b%2Bc");
    assert_eq!(t.url_decode("a+b%2Bc"), "a b+c");
}

#[test]
fn test_full_url_encode_and_decode() {
    let t = TemplateBase::new();
    let encoded = t.full_url_encode("/path?a=b c&d=é");
    assert_eq!(encoded, "%2Fpath%3Fa%3Db%20c%26d%3D%C3%A9");
    assert_eq!(t.url_decode(encoded.as_str()), "/path?a=b c&d=é");
    assert_eq!(t.full_url_decode(encoded.as_str()), "/path?a=b c&d=é");
}

#[test]
fn test_url_decode_plus_handling() {
    let t = TemplateBase::new();
    assert_eq!(t.url_decode("a+b"), "a b");

    let t = TemplateBase::with_config(HelperConfig::default().with_decode_plus_as_space(false));
    assert_eq!(t.url_decode("a+b"), "a+b");
}

#[test]
fn test_url_decode_invalid_utf8_is_empty() {
    let t = TemplateBase::new();
    assert_eq!(t.url_decode("%FF%FE"), "");
    assert_eq!(t.full_url_decode("ok%FF"), "");
}

#[test]
fn test_md5() {
    let t = TemplateBase::new();
    let digest = t.md5("");
    assert_eq!(digest, "D41D8CD98F00B204E9800998ECF8427E");
    assert_eq!(digest.len(), 32);
    assert_eq!(t.md5(None::<&str>), "");

    let t = TemplateBase::with_config(HelperConfig::default().with_hex_case(HexCase::Lower));
    assert_eq!(t.md5("abc"), "900150983cd24fb0d6963f7d28e17f72");
}

#[test]
fn test_base64() {
    let t = TemplateBase::new();
    assert_eq!(t.base64_encode("hello world"), "aGVsbG8gd29ybGQ=");
    assert_eq!(t.base64_decode("aGVsbG8gd29ybGQ=").unwrap(), "hello world");
    assert_eq!(t.base64_decode("aGk").unwrap(), "hi");
}

#[test]
fn test_base64_decode_signals_error() {
    let t = TemplateBase::new();
    let result = t.base64_decode("not-valid-base64!!");
    assert!(matches!(result, Err(EncodingError::Base64(_))));
}
