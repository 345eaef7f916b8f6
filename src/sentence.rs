//! Joining several formatted units into an English list, such as
//! “2 hours, 21 minutes and 23 seconds”.

use duration::Duration;
use format::{DurationFormat, Template};


/// Options for rendering a list of templates as a sentence.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct SentenceOptions {

    /// Leave out any fragment whose leading number is zero.
    pub ignore_zero: bool,
}

impl Default for SentenceOptions {
    fn default() -> Self {
        Self { ignore_zero: true }
    }
}


/// Renders each template against the duration, drops the ones whose
/// leading unit is zero (if asked to), and joins what’s left.
///
/// Fragments keep the order of the templates. A template without any
/// number in it is never dropped.
pub fn render_sentence<S>(duration: &Duration, templates: &[S], options: SentenceOptions) -> String
where S: AsRef<str>
{
    let parts: Vec<String> = templates.iter()
        .map(|template| DurationFormat::parse(template.as_ref()))
        .filter(|format| !(options.ignore_zero && is_zero(format, duration)))
        .map(|format| format.format(duration))
        .collect();

    join_sentence(&parts)
}

fn is_zero(format: &DurationFormat, duration: &Duration) -> bool {
    match format.leading_unit() {
        Some(unit) => duration.field(unit) == 0,
        None       => false,
    }
}

/// Joins fragments as an English list: “A”, “A and B”, “A, B and C”.
pub fn join_sentence<S: AsRef<str>>(parts: &[S]) -> String {
    let (last, init) = match parts.split_last() {
        Some(pair) => pair,
        None       => return String::new(),
    };

    if init.is_empty() {
        return last.as_ref().to_owned();
    }

    let init: Vec<&str> = init.iter().map(|part| part.as_ref()).collect();
    format!("{} and {}", init.join(", "), last.as_ref())
}


impl<S: AsRef<str>> Template for [S] {
    fn render(&self, duration: &Duration) -> String {
        render_sentence(duration, self, SentenceOptions::default())
    }
}

impl<S: AsRef<str>> Template for Vec<S> {
    fn render(&self, duration: &Duration) -> String {
        self[..].render(duration)
    }
}

impl<S: AsRef<str>, const N: usize> Template for [S; N] {
    fn render(&self, duration: &Duration) -> String {
        self[..].render(duration)
    }
}

impl Duration {

    /// Renders a list of templates as a sentence with the given options.
    pub fn format_sentence_with<S: AsRef<str>>(&self, templates: &[S], options: SentenceOptions) -> String {
        render_sentence(self, templates, options)
    }
}
