use super::search_state::Match;

pub struct SearchMatcher;

impl SearchMatcher {
    /// Find every case-insensitive, non-overlapping occurrence of `query`
    ///
    /// Columns and lengths are in characters.
    pub fn find_all<S: AsRef<str>>(lines: &[S], query: &str) -> Vec<Match> {
        if query.is_empty() {
            return Vec::new();
        }

        let needle = fold(query);
        let mut matches = Vec::new();

        for (line_num, line) in lines.iter().enumerate() {
            let haystack = fold(line.as_ref());
            let mut col = 0;

            while col + needle.len() <= haystack.len() {
                if haystack[col..col + needle.len()] == needle[..] {
                    matches.push(Match {
                        line: line_num as u32,
                        col: col as u16,
                        len: needle.len() as u16,
                    });
                    col += needle.len();
                } else {
                    col += 1;
                }
            }
        }

        matches
    }
}

// One folded char per source char so columns stay aligned with the original
fn fold(text: &str) -> Vec<char> {
    text.chars()
        .map(|c| c.to_lowercase().next().unwrap_or(c))
        .collect()
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod matcher_tests;
