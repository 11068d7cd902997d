//! Icon-name candidates for one window.
//!
//! Each [`CandidateSource`] is a small pure strategy that yields zero or more
//! names. [`build_candidates`] flattens them in priority order and drops
//! repeats, so the list reads top to bottom as "most trusted guess first":
//!
//! 1. the descriptor's declared icon, the exec hint, the title hint;
//! 2. for each of those, in the same order: lowercase, lowercase without
//!    spaces, and the part after the last `.` of the lowercase form;
//! 3. each lowercase word of the title hint.

use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandidateSource {
    DeclaredIcon,
    ExecName,
    TitleHint,
    Lowercase,
    Compact,
    DottedSuffix,
    TitleWord,
}

impl CandidateSource {
    pub fn label(self) -> &'static str {
        match self {
            Self::DeclaredIcon => "declared_icon",
            Self::ExecName => "exec_name",
            Self::TitleHint => "title_hint",
            Self::Lowercase => "lowercase",
            Self::Compact => "compact",
            Self::DottedSuffix => "dotted_suffix",
            Self::TitleWord => "title_word",
        }
    }

    /// Variants derived from a base entry.
    fn derive(self, base: &str) -> Option<String> {
        let lower = base.to_lowercase();
        match self {
            Self::Lowercase => Some(lower),
            Self::Compact => Some(lower.replace(' ', "")),
            Self::DottedSuffix => lower
                .rsplit_once('.')
                .map(|(_, suffix)| suffix.to_string()),
            _ => None,
        }
    }
}

const BASE_SOURCES: [CandidateSource; 3] = [
    CandidateSource::DeclaredIcon,
    CandidateSource::ExecName,
    CandidateSource::TitleHint,
];

const DERIVED_SOURCES: [CandidateSource; 3] = [
    CandidateSource::Lowercase,
    CandidateSource::Compact,
    CandidateSource::DottedSuffix,
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub name: String,
    pub source: CandidateSource,
}

/// Ordered, duplicate-free candidate names. Never holds an empty name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IconCandidateList {
    entries: Vec<Candidate>,
    seen: HashSet<String>,
}

impl IconCandidateList {
    fn push(&mut self, name: String, source: CandidateSource) {
        if name.is_empty() || self.seen.contains(&name) {
            return;
        }
        self.seen.insert(name.clone());
        self.entries.push(Candidate { name, source });
    }

    pub fn entries(&self) -> &[Candidate] {
        &self.entries
    }

    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

pub fn build_candidates(
    declared_icon: Option<&str>,
    exec_hint: Option<&str>,
    title_hint: Option<&str>,
) -> IconCandidateList {
    let bases: Vec<(CandidateSource, &str)> = BASE_SOURCES
        .into_iter()
        .zip([declared_icon, exec_hint, title_hint])
        .filter_map(|(source, value)| value.filter(|v| !v.is_empty()).map(|v| (source, v)))
        .collect();

    let mut list = IconCandidateList::default();

    for (source, base) in &bases {
        list.push((*base).to_string(), *source);
    }

    for (_, base) in &bases {
        for source in DERIVED_SOURCES {
            if let Some(variant) = source.derive(base) {
                list.push(variant, source);
            }
        }
    }

    if let Some(hint) = title_hint {
        for word in hint.split_whitespace() {
            list.push(word.to_lowercase(), CandidateSource::TitleWord);
        }
    }

    list
}
