use super::*;

#[test]
fn cli_parse_merge() {
    match parse(&["urlkit", "merge", "users?page=2"]) {
        CliCommand::Merge { uri, base } => {
            assert_eq!(uri, "users?page=2");
            assert!(base.is_none());
        }
        _ => panic!("expected Merge"),
    }
}

#[test]
fn cli_parse_merge_with_base() {
    match parse(&["urlkit", "merge", "--base", "http://example.com/a/", "b"]) {
        CliCommand::Merge { uri, base } => {
            assert_eq!(uri, "b");
            assert_eq!(base.as_deref(), Some("http://example.com/a/"));
        }
        _ => panic!("expected Merge with base"),
    }
}

#[test]
fn cli_parse_uri_and_host() {
    match parse(&["urlkit", "uri", "http://example.com/p?q"]) {
        CliCommand::Uri { url } => assert_eq!(url, "http://example.com/p?q"),
        _ => panic!("expected Uri"),
    }
    match parse(&["urlkit", "host", "http://example.com:81/"]) {
        CliCommand::Host { url } => assert_eq!(url, "http://example.com:81/"),
        _ => panic!("expected Host"),
    }
}

#[test]
fn cli_parse_append() {
    match parse(&["urlkit", "append", "http://example.com/a", "#frag"]) {
        CliCommand::Append { url, path } => {
            assert_eq!(url, "http://example.com/a");
            assert_eq!(path, "#frag");
        }
        _ => panic!("expected Append"),
    }
}

#[test]
fn cli_parse_join() {
    match parse(&["urlkit", "join", "v1", "users", "--base", "http://h/"]) {
        CliCommand::Join { segments, base } => {
            assert_eq!(segments, vec!["v1", "users"]);
            assert_eq!(base.as_deref(), Some("http://h/"));
        }
        _ => panic!("expected Join"),
    }
}

#[test]
fn cli_parse_join_requires_segment() {
    assert!(Cli::try_parse_from(["urlkit", "join"]).is_err());
}

#[test]
fn cli_parse_global_config_flag() {
    let cli = Cli::try_parse_from(["urlkit", "parse", "/x", "--config", "/tmp/u.toml"]).unwrap();
    assert_eq!(cli.config.as_deref(), Some(std::path::Path::new("/tmp/u.toml")));
    match cli.command {
        CliCommand::Parse { url } => assert_eq!(url, "/x"),
        _ => panic!("expected Parse"),
    }
}
