//! Ordered assembly of package descriptor documents.
//!
//! A spec document is built from discrete named fragments supplied in final
//! output order by the caller. The assembler joins them with single newline
//! separators in one pass; it never reorders fragments, parses spec-file
//! grammar, or substitutes variables (the fragment producer has already done
//! that).

/// The intended position of a fragment within a spec document.
///
/// Informational tag only; the assembler does not act on it. Fragment
/// producers use it to label what they emit and tests use it to assert
/// structure.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FragmentKind {
    /// Preamble tags: Name, Version, Release, Summary, License, ...
    Header,
    /// The BuildArch line
    BuildArch,
    /// Macro definitions (%define ...)
    Macros,
    /// Scriptlet sections (%pre, %post, ...)
    Scriptlets,
    /// The %description body
    Description,
    /// The %files payload listing
    FileList,
    /// Anything the producer formed itself
    Custom,
}

/// A single unit of spec-document content.
///
/// The text may embed newlines; it is emitted verbatim.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpecFragment {
    kind: FragmentKind,
    text: String,
}

impl SpecFragment {
    /// Creates a fragment with the given position tag and fully-formed text.
    pub fn new(kind: FragmentKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    /// Returns the fragment's position tag.
    pub fn kind(&self) -> FragmentKind {
        self.kind
    }

    /// Returns the fragment's text.
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// An ordered sequence of fragments forming one spec document.
#[derive(Clone, Debug, Default)]
pub struct SpecDocument {
    fragments: Vec<SpecFragment>,
}

impl SpecDocument {
    /// Creates a document from fragments already in final output order.
    pub fn new(fragments: Vec<SpecFragment>) -> Self {
        Self { fragments }
    }

    /// Returns the fragments in output order.
    pub fn fragments(&self) -> &[SpecFragment] {
        &self.fragments
    }

    /// Renders the document.
    ///
    /// Fragment texts are joined with exactly one `\n` per boundary in a
    /// single pass, so construction is linear in total text length rather
    /// than reallocating the accumulated document per fragment. Rendering is
    /// deterministic: the result depends only on fragment order and content.
    pub fn render(&self) -> String {
        let texts: Vec<&str> = self.fragments.iter().map(|f| f.text.as_str()).collect();
        texts.join("\n")
    }
}

/// Joins caller-ordered fragments into the rendered spec text.
///
/// Convenience wrapper over [`SpecDocument::render`] for callers that do not
/// need to keep the document around.
pub fn assemble(fragments: Vec<SpecFragment>) -> String {
    SpecDocument::new(fragments).render()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fragment(text: &str) -> SpecFragment {
        SpecFragment::new(FragmentKind::Custom, text)
    }

    #[test]
    fn joins_fragments_with_single_newlines() {
        let rendered = assemble(vec![
            SpecFragment::new(FragmentKind::Header, "Name: pwsh"),
            SpecFragment::new(FragmentKind::Header, "Version: 7.4.0"),
            SpecFragment::new(FragmentKind::BuildArch, "BuildArch: x64"),
        ]);
        assert_eq!(rendered, "Name: pwsh\nVersion: 7.4.0\nBuildArch: x64");
    }

    #[test]
    fn empty_fragment_list_renders_empty_string() {
        assert_eq!(assemble(vec![]), "");
    }

    #[test]
    fn single_fragment_has_no_separator() {
        assert_eq!(assemble(vec![fragment("only")]), "only");
    }

    #[test]
    fn separator_count_is_fragment_count_minus_one() {
        let fragments: Vec<_> = (0..7).map(|i| fragment(&format!("line{i}"))).collect();
        let rendered = assemble(fragments);
        assert_eq!(rendered.matches('\n').count(), 6);
    }

    #[test]
    fn embedded_newlines_pass_through_verbatim() {
        let rendered = assemble(vec![
            fragment("%files\n/usr/bin/app"),
            fragment("%changelog"),
        ]);
        assert_eq!(rendered, "%files\n/usr/bin/app\n%changelog");
    }

    #[test]
    fn rendering_is_deterministic() {
        let doc = SpecDocument::new(vec![fragment("a"), fragment("b\nc")]);
        assert_eq!(doc.render(), doc.render());
    }

    #[test]
    fn fragments_are_not_reordered() {
        let doc = SpecDocument::new(vec![
            SpecFragment::new(FragmentKind::FileList, "%files"),
            SpecFragment::new(FragmentKind::Header, "Name: out-of-order"),
        ]);
        assert_eq!(doc.render(), "%files\nName: out-of-order");
    }
}
