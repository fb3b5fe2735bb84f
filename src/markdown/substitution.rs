//! The individual rewrite steps of the Markdown pipeline.

use regex::{Captures, Regex};
use std::borrow::Cow;
use std::sync::LazyLock;

static LIST_ITEM_GAP: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"</li>\s+<li>").unwrap());

/// How a step rewrites the text
enum Rule {
    /// Plain string replacement of every occurrence
    Literal { from: &'static str, to: &'static str },
    /// Regex replacement using a `${n}` template
    Template { regex: Regex, template: &'static str },
    /// Regex replacement computed per match
    Computed {
        regex: Regex,
        replace: fn(&Captures<'_>) -> String,
    },
}

/// One named rewrite applied to the whole document
pub struct Substitution {
    name: &'static str,
    rule: Rule,
}

impl Substitution {
    fn literal(name: &'static str, from: &'static str, to: &'static str) -> Self {
        Self {
            name,
            rule: Rule::Literal { from, to },
        }
    }

    fn template(name: &'static str, pattern: &str, template: &'static str) -> Self {
        Self {
            name,
            rule: Rule::Template {
                regex: Regex::new(pattern).unwrap(),
                template,
            },
        }
    }

    fn computed(name: &'static str, pattern: &str, replace: fn(&Captures<'_>) -> String) -> Self {
        Self {
            name,
            rule: Rule::Computed {
                regex: Regex::new(pattern).unwrap(),
                replace,
            },
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Rewrite `text`, borrowing it unchanged when nothing matched
    pub fn apply<'a>(&self, text: &'a str) -> Cow<'a, str> {
        match &self.rule {
            Rule::Literal { from, to } => {
                if text.contains(*from) {
                    Cow::Owned(text.replace(*from, to))
                } else {
                    Cow::Borrowed(text)
                }
            }
            Rule::Template { regex, template } => regex.replace_all(text, *template),
            Rule::Computed { regex, replace } => regex.replace_all(text, *replace),
        }
    }
}

/// Wrap a run of list items in a single `<ul>`.
///
/// Whitespace between items is dropped and trailing whitespace is moved after
/// the closing tag so line breaks don't end up inside the list.
fn wrap_list_run(caps: &Captures<'_>) -> String {
    let run = &caps[0];
    let items_end = run.trim_end().len();
    let items = LIST_ITEM_GAP.replace_all(&run[..items_end], "</li><li>");
    format!("<ul>{items}</ul>{}", &run[items_end..])
}

/// Wrap an inline code span, leaving fenced blocks untouched
fn code_span(caps: &Captures<'_>) -> String {
    match caps.get(1) {
        Some(code) => format!("<code>{}</code>", code.as_str()),
        None => caps[0].to_string(),
    }
}

/// The full pipeline. Order matters: every step sees the output of the ones before it.
pub(crate) static PIPELINE: LazyLock<Vec<Substitution>> = LazyLock::new(|| {
    vec![
        // Escape first so later steps can emit markup
        Substitution::literal("escape-ampersand", "&", "&amp;"),
        Substitution::literal("escape-less-than", "<", "&lt;"),
        Substitution::literal("escape-greater-than", ">", "&gt;"),
        Substitution::template("heading-3", r"(?mR)^### (.*?)$", "<h3>${1}</h3>"),
        Substitution::template("heading-2", r"(?mR)^## (.*?)$", "<h2>${1}</h2>"),
        Substitution::template("heading-1", r"(?mR)^# (.*?)$", "<h1>${1}</h1>"),
        Substitution::template("bold-italic-asterisk", r"(?R)\*\*\*(.*?)\*\*\*", "<b><i>${1}</i></b>"),
        Substitution::template("bold-asterisk", r"(?R)\*\*(.*?)\*\*", "<b>${1}</b>"),
        Substitution::template("italic-asterisk", r"(?R)\*(.*?)\*", "<i>${1}</i>"),
        Substitution::template("bold-italic-underscore", r"(?R)___(.*?)___", "<b><i>${1}</i></b>"),
        Substitution::template("bold-underscore", r"(?R)__(.*?)__", "<b>${1}</b>"),
        Substitution::template("italic-underscore", r"(?R)_(.*?)_", "<i>${1}</i>"),
        Substitution::template("fenced-code", r"```([\s\S]*?)```", "<pre><code>${1}</code></pre>"),
        Substitution::computed(
            "inline-code",
            r"(?R)<pre><code>[\s\S]*?</code></pre>|`(.*?)`",
            code_span,
        ),
        Substitution::template("link", r"\[([^\]]+)\]\(([^)]+)\)", r#"<a href="${2}">${1}</a>"#),
        Substitution::template("list-item-asterisk", r"(?mR)^\* (.*?)$", "<li>${1}</li>"),
        Substitution::template("list-item-dash", r"(?mR)^- (.*?)$", "<li>${1}</li>"),
        Substitution::template("list-item-numbered", r"(?mR)^[0-9]+\. (.*?)$", "<li>${1}</li>"),
        Substitution::computed("list-wrap", r"(<li>[\s\S]*?</li>\s*)+", wrap_list_run),
        // Skip URLs that already sit in an attribute or right after a tag
        Substitution::template(
            "bare-url",
            r#"(^|[^"'>])((?:https?|file)://[^\s<]+)"#,
            r#"${1}<a href="${2}">${2}</a>"#,
        ),
        Substitution::literal("paragraph-break", "\n\n", "</p><p>"),
        Substitution::literal("line-break", "\n", "<br/>"),
    ]
});
