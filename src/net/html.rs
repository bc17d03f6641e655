//! Minimal HTML scanning: enough to pull classed elements and their text
//! out of the results page without building a DOM.

use crate::errors::{AppError, AppResult};
use regex::{Captures, Regex};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    A,
    Div,
    P,
}

impl Tag {
    fn name(self) -> &'static str {
        match self {
            Tag::A => "a",
            Tag::Div => "div",
            Tag::P => "p",
        }
    }
}

/// One element: its raw attribute string and its inner HTML.
#[derive(Debug, Clone, Copy)]
pub struct Element<'a> {
    pub attrs: &'a str,
    pub inner: &'a str,
}

struct TagPattern {
    open: Regex,
    close: Regex,
}

impl TagPattern {
    fn new(tag: Tag) -> AppResult<Self> {
        let name = tag.name();
        Ok(Self {
            open: compile(&format!(r"(?i)<{name}\b([^>]*)>"))?,
            close: compile(&format!(r"(?i)</{name}\s*>"))?,
        })
    }
}

pub struct HtmlScanner {
    a: TagPattern,
    div: TagPattern,
    p: TagPattern,
    attr: Regex,
    markup: Regex,
    entity: Regex,
}

fn compile(pattern: &str) -> AppResult<Regex> {
    Regex::new(pattern).map_err(|e| AppError::Other(format!("bad pattern {pattern}: {e}")))
}

impl HtmlScanner {
    pub fn new() -> AppResult<Self> {
        Ok(Self {
            a: TagPattern::new(Tag::A)?,
            div: TagPattern::new(Tag::Div)?,
            p: TagPattern::new(Tag::P)?,
            attr: compile(
                r#"(?s)([a-zA-Z_:][-a-zA-Z0-9_:.]*)\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'>]+))"#,
            )?,
            markup: compile(r"(?s)<!--.*?-->|<[^>]*>")?,
            entity: compile(r"&(#[xX][0-9a-fA-F]+|#[0-9]+|[a-zA-Z]+);")?,
        })
    }

    fn pattern(&self, tag: Tag) -> &TagPattern {
        match tag {
            Tag::A => &self.a,
            Tag::Div => &self.div,
            Tag::P => &self.p,
        }
    }

    /// Outermost `tag` elements in `html`, in document order, optionally
    /// restricted to those carrying `class`. Nested same-tag elements are
    /// balanced so the inner HTML ends at the matching close tag.
    pub fn elements<'a>(&self, html: &'a str, tag: Tag, class: Option<&str>) -> Vec<Element<'a>> {
        let pat = self.pattern(tag);
        let mut out = Vec::new();
        let mut pos = 0;

        while let Some(caps) = pat.open.captures_at(html, pos) {
            let (Some(whole), Some(attrs)) = (caps.get(0), caps.get(1)) else {
                break;
            };
            let inner_start = whole.end();

            let Some((inner_end, end)) = self.matching_close(html, pat, inner_start) else {
                // Unclosed element: everything after it is its content.
                pos = inner_start;
                if class.is_none_or(|c| self.has_class(attrs.as_str(), c)) {
                    out.push(Element {
                        attrs: attrs.as_str(),
                        inner: &html[inner_start..],
                    });
                }
                continue;
            };

            if class.is_none_or(|c| self.has_class(attrs.as_str(), c)) {
                out.push(Element {
                    attrs: attrs.as_str(),
                    inner: &html[inner_start..inner_end],
                });
                pos = end;
            } else {
                pos = inner_start;
            }
        }

        out
    }

    /// First element with `tag` and `class` at any depth.
    pub fn first<'a>(&self, html: &'a str, tag: Tag, class: &str) -> Option<Element<'a>> {
        self.elements(html, tag, Some(class)).into_iter().next()
    }

    fn matching_close(&self, html: &str, pat: &TagPattern, from: usize) -> Option<(usize, usize)> {
        let mut depth = 1usize;
        let mut pos = from;
        loop {
            let close = pat.close.find_at(html, pos)?;
            match pat.open.find_at(html, pos) {
                Some(open) if open.start() < close.start() => {
                    depth += 1;
                    pos = open.end();
                }
                _ => {
                    depth -= 1;
                    if depth == 0 {
                        return Some((close.start(), close.end()));
                    }
                    pos = close.end();
                }
            }
        }
    }

    pub fn attr(&self, attrs: &str, name: &str) -> Option<String> {
        self.attr.captures_iter(attrs).find_map(|c| {
            let key = c.get(1)?.as_str();
            if !key.eq_ignore_ascii_case(name) {
                return None;
            }
            let value = c.get(2).or_else(|| c.get(3)).or_else(|| c.get(4))?;
            Some(self.decode_entities(value.as_str()))
        })
    }

    pub fn has_class(&self, attrs: &str, class: &str) -> bool {
        self.attr(attrs, "class")
            .is_some_and(|v| v.split_whitespace().any(|c| c == class))
    }

    /// Text content with markup removed, entities decoded and ends trimmed.
    pub fn text(&self, inner: &str) -> String {
        let stripped = self.markup.replace_all(inner, "");
        self.decode_entities(&stripped).trim().to_string()
    }

    fn decode_entities(&self, s: &str) -> String {
        self.entity
            .replace_all(s, |c: &Captures| {
                let ent = &c[1];
                let decoded = if let Some(hex) = ent.strip_prefix("#x").or(ent.strip_prefix("#X")) {
                    u32::from_str_radix(hex, 16).ok().and_then(char::from_u32)
                } else if let Some(dec) = ent.strip_prefix('#') {
                    dec.parse::<u32>().ok().and_then(char::from_u32)
                } else {
                    named_entity(ent)
                };
                decoded.map_or_else(|| c[0].to_string(), String::from)
            })
            .into_owned()
    }
}

fn named_entity(name: &str) -> Option<char> {
    Some(match name {
        "amp" => '&',
        "lt" => '<',
        "gt" => '>',
        "quot" => '"',
        "apos" => '\'',
        "nbsp" => '\u{a0}',
        "middot" => '·',
        "euro" => '€',
        _ => return None,
    })
}
