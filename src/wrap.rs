use std::ops::Range;

use unicode_width::UnicodeWidthStr;

use crate::colors::LetterStatus;

/// Partitions items into lines given their display widths.
///
/// A line keeps growing while its width, counting one separator column
/// between neighbouring items, stays strictly below `max_width`. An item too
/// wide for any line gets a line of its own. Returned ranges are contiguous,
/// non-empty and cover every item.
pub fn wrap_ranges<I>(widths: I, max_width: usize) -> Vec<Range<usize>>
where
    I: IntoIterator<Item = usize>,
{
    let mut lines = Vec::new();
    let mut start = 0;
    let mut end = 0;
    let mut line_width = 0;

    for width in widths {
        if end > start && line_width + 1 + width >= max_width {
            lines.push(start..end);
            start = end;
        }
        line_width = if end == start {
            width
        } else {
            line_width + 1 + width
        };
        end += 1;
    }

    if end > start {
        lines.push(start..end);
    }
    lines
}

/// Slices `items` along previously computed line ranges
pub fn split_lines<'a, T>(items: &'a [T], ranges: &[Range<usize>]) -> Vec<&'a [T]> {
    ranges.iter().map(|r| &items[r.clone()]).collect()
}

/// Words of one display line together with their letter statuses
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordLine<'a> {
    /// Index of the line's first word in the round's word list
    pub first_word: usize,
    pub words: &'a [String],
    pub colors: &'a [Vec<LetterStatus>],
}

/// Lays out words and their colors into lines narrower than `max_width`.
///
/// The partition is computed once from the word widths and applied to both
/// lists, so a word and its colors always land on the same line.
pub fn layout<'a>(
    words: &'a [String],
    colors: &'a [Vec<LetterStatus>],
    max_width: usize,
) -> Vec<WordLine<'a>> {
    assert_eq!(words.len(), colors.len(), "one color row per word");

    let ranges = wrap_ranges(words.iter().map(|w| w.width()), max_width);
    let word_lines = split_lines(words, &ranges);
    let color_lines = split_lines(colors, &ranges);

    ranges
        .iter()
        .zip(word_lines)
        .zip(color_lines)
        .map(|((range, words), colors)| WordLine {
            first_word: range.start,
            words,
            colors,
        })
        .collect()
}
