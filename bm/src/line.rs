//! Tokenizer for one line of the store file

use std::fmt;

use crate::{COMMENT_MARK, FIELD_SEPARATOR};

/// Field separator followed by the comment mark
const INLINE_COMMENT: &str = "\t#";

/// One bookmark as written in the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookmarkLine {
    /// Registered key
    pub key: String,
    /// Stored directory, without any inline comment
    pub directory: String,
    /// Inline comment text after `\t#`
    pub comment: Option<String>,
}

impl BookmarkLine {
    /// Build a line; comment words are joined with single spaces
    pub fn new(key: impl Into<String>, directory: impl Into<String>, comments: &[String]) -> Self {
        let comment = if comments.is_empty() {
            None
        } else {
            Some(comments.join(" "))
        };
        Self {
            key: key.into(),
            directory: directory.into(),
            comment,
        }
    }

    /// Tokenize a data line; comment and blank lines yield `None`
    ///
    /// The key ends at the first tab. An inline comment starts only at a tab
    /// followed by `#`, so a directory may itself contain `#`.
    pub fn parse(line: &str) -> Option<Self> {
        if !Self::is_data(line) {
            return None;
        }
        let (key, rest) = line.split_once(FIELD_SEPARATOR).unwrap_or((line, ""));
        let (directory, comment) = match rest.find(INLINE_COMMENT) {
            Some(idx) => {
                let text = rest[idx + INLINE_COMMENT.len()..].trim();
                (&rest[..idx], (!text.is_empty()).then(|| text.to_string()))
            }
            None => (rest, None),
        };
        Some(Self {
            key: key.to_string(),
            directory: directory.to_string(),
            comment,
        })
    }

    /// Whether a raw line holds a bookmark rather than a comment or nothing
    pub fn is_data(line: &str) -> bool {
        !line.trim().is_empty() && !line.starts_with(COMMENT_MARK)
    }

    /// Key field of a raw line without allocating
    pub fn key_of(line: &str) -> &str {
        line.split_once(FIELD_SEPARATOR).map_or(line, |(key, _)| key)
    }
}

impl fmt::Display for BookmarkLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.key, FIELD_SEPARATOR, self.directory)?;
        if let Some(comment) = &self.comment {
            write!(f, "{}{} {}", FIELD_SEPARATOR, COMMENT_MARK, comment)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_line() {
        let line = BookmarkLine::parse("proj\t~/work/project").unwrap();
        assert_eq!(line.key, "proj");
        assert_eq!(line.directory, "~/work/project");
        assert_eq!(line.comment, None);
    }

    #[test]
    fn test_parse_inline_comment() {
        let line = BookmarkLine::parse("proj\t~/work/project\t# main checkout").unwrap();
        assert_eq!(line.directory, "~/work/project");
        assert_eq!(line.comment.as_deref(), Some("main checkout"));
    }

    #[test]
    fn test_hash_without_tab_stays_in_directory() {
        let line = BookmarkLine::parse("music\t/data/c# tunes #1").unwrap();
        assert_eq!(line.directory, "/data/c# tunes #1");
        assert_eq!(line.comment, None);
    }

    #[test]
    fn test_empty_inline_comment() {
        let line = BookmarkLine::parse("k\t/d\t#").unwrap();
        assert_eq!(line.directory, "/d");
        assert_eq!(line.comment, None);
    }

    #[test]
    fn test_line_without_tab() {
        let line = BookmarkLine::parse("orphan").unwrap();
        assert_eq!(line.key, "orphan");
        assert_eq!(line.directory, "");
    }

    #[test]
    fn test_comment_and_blank_lines_are_skipped() {
        assert!(BookmarkLine::parse("# dirbookmarks 0.1.0").is_none());
        assert!(BookmarkLine::parse("#proj\t/x").is_none());
        assert!(BookmarkLine::parse("").is_none());
        assert!(BookmarkLine::parse("   ").is_none());
    }

    #[test]
    fn test_display() {
        let line = BookmarkLine::new("proj", "~/p", &[]);
        assert_eq!(line.to_string(), "proj\t~/p");

        let words = vec!["main".to_string(), "checkout".to_string()];
        let line = BookmarkLine::new("proj", "~/p", &words);
        assert_eq!(line.to_string(), "proj\t~/p\t# main checkout");
        assert_eq!(BookmarkLine::parse(&line.to_string()), Some(line));
    }

    #[test]
    fn test_key_of() {
        assert_eq!(BookmarkLine::key_of("proj\t/x\t# c"), "proj");
        assert_eq!(BookmarkLine::key_of("orphan"), "orphan");
    }
}
