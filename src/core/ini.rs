//! Parser and serializer for the `.edgerc` INI dialect.

use crate::error::{Error, Result};
use crate::models::config_file::ConfigFile;

/// Parse the whole file. Keys before the first header land in the root
/// profile.
///
/// A line opening with `[` must be a complete header, optionally followed by
/// a `;` or `#` comment.
pub fn parse(content: &str) -> Result<ConfigFile> {
    let mut config = ConfigFile::new();
    let mut current: Option<String> = None;

    for (lineno, raw) in content.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with(';') || line.starts_with('#') {
            continue;
        }
        if line.starts_with('[') {
            let name = section_header(line).ok_or_else(|| {
                Error::invalid(format!("malformed section header on line {}: {}", lineno + 1, line))
            })?;
            // An empty header still opens a section so later keys are not
            // mistaken for root keys.
            config.entry(name);
            current = Some(name.to_string());
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            tracing::warn!(line = lineno + 1, "ignoring line without '='");
            continue;
        };
        let key = key.trim();
        if key.is_empty() {
            tracing::warn!(line = lineno + 1, "ignoring line with empty key");
            continue;
        }
        let value = unquote(value.trim());
        match &current {
            Some(section) => config.entry(section).set(key, value),
            None => config.root_mut().set(key, value),
        }
    }
    Ok(config)
}

fn section_header(line: &str) -> Option<&str> {
    let (name, rest) = line.strip_prefix('[')?.split_once(']')?;
    let rest = rest.trim();
    if rest.is_empty() || rest.starts_with(';') || rest.starts_with('#') {
        Some(name.trim())
    } else {
        None
    }
}

/// Serialize root keys, then sections, as `key = value` lines with a blank
/// line between groups. Values are written verbatim.
pub fn serialize(config: &ConfigFile) -> String {
    let mut out = String::new();
    for (key, value) in config.root().iter() {
        out.push_str(&format!("{} = {}\n", key, value));
    }
    for (name, profile) in config.iter() {
        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str(&format!("[{}]\n", name));
        for (key, value) in profile.iter() {
            out.push_str(&format!("{} = {}\n", key, value));
        }
    }
    out
}

fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::profile::CredentialProfile;

    const SAMPLE: &str = "\
[default]
client_secret = abc=
host = akab-host.luna.akamaiapis.net
access_token = akab-access
client_token = akab-client

; comment
[papi]
  client_token=tok
host   =   \"quoted.example\"
";

    #[test]
    fn test_parse_sections_and_whitespace() {
        let cfg = parse(SAMPLE).unwrap();
        assert!(cfg.root().is_empty());
        assert_eq!(cfg.section_names(), vec!["default", "papi"]);
        let default = cfg.get("default").unwrap();
        assert_eq!(default.client_secret(), Some("abc="));
        let papi = cfg.get("papi").unwrap();
        assert_eq!(papi.client_token(), Some("tok"));
        assert_eq!(papi.host(), Some("quoted.example"));
    }

    #[test]
    fn test_parse_root_block() {
        let cfg = parse("host = h\nclient_token = t\n\n[other]\nhost = o\n").unwrap();
        assert_eq!(cfg.root().host(), Some("h"));
        assert_eq!(cfg.get("other").unwrap().host(), Some("o"));
    }

    #[test]
    fn test_parse_repeated_header_reopens_section() {
        let cfg = parse("[a]\nx = 1\n[b]\ny = 2\n[a]\nx = 3\nz = 4\n").unwrap();
        assert_eq!(cfg.section_names(), vec!["a", "b"]);
        let a = cfg.get("a").unwrap();
        assert_eq!(a.get("x"), Some("3"));
        assert_eq!(a.get("z"), Some("4"));
    }

    #[test]
    fn test_parse_header_with_trailing_comment() {
        let cfg = parse("[default]\nhost = a\n\n[papi] ; prod\nhost = b\n[ccu]# edge\nhost = c\n").unwrap();
        assert_eq!(cfg.section_names(), vec!["default", "papi", "ccu"]);
        assert_eq!(cfg.get("default").unwrap().host(), Some("a"));
        assert_eq!(cfg.get("papi").unwrap().host(), Some("b"));
        assert_eq!(cfg.get("ccu").unwrap().host(), Some("c"));
    }

    #[test]
    fn test_parse_rejects_malformed_header() {
        for bad in ["[default]\nhost = a\n[papi\nhost = b\n", "[papi] trailing\nhost = b\n"] {
            let err = parse(bad).unwrap_err();
            assert!(matches!(err, Error::InvalidArgument(_)));
            assert!(err.to_string().contains("malformed section header"));
        }
    }

    #[test]
    fn test_parse_ignores_garbage() {
        let cfg = parse("Lorem Ipsum Dolor").unwrap();
        assert!(cfg.is_empty());
    }

    #[test]
    fn test_serialize_layout() {
        let mut cfg = ConfigFile::new();
        cfg.insert("default", CredentialProfile::from_parts("a", "b", "c", "d"));
        cfg.insert("second", [("host", "h")].into_iter().collect());
        assert_eq!(
            serialize(&cfg),
            "[default]\nclient_token = a\nclient_secret = b\naccess_token = c\nhost = d\n\n[second]\nhost = h\n"
        );
    }

    #[test]
    fn test_serialize_writes_root_keys_first() {
        let cfg = parse("max-body = 131072\n\n[default]\nhost = h\n").unwrap();
        assert_eq!(serialize(&cfg), "max-body = 131072\n\n[default]\nhost = h\n");

        let mut root_only = ConfigFile::new();
        root_only.root_mut().set("max-body", "131072");
        assert_eq!(serialize(&root_only), "max-body = 131072\n");
    }

    #[test]
    fn test_serialize_then_parse_is_stable() {
        let cfg = parse(SAMPLE).unwrap();
        let text = serialize(&cfg);
        assert_eq!(parse(&text).unwrap(), cfg);
        assert_eq!(serialize(&parse(&text).unwrap()), text);
    }
}
