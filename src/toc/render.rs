use crate::toc::heading::Heading;

/// One note's line in the TOC, with its headings nested below it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocEntry {
    /// Link target, the note path without extension.
    pub link: String,
    pub label: String,
    pub headings: Vec<Heading>,
}

/// Renders the TOC note.
///
/// ```text
/// # <title>
///
/// - [[path/to/note|Label]]
/// 	- [[path/to/note#Heading|Heading]]
/// ```
///
/// Headings are indented with one tab per level. Lines are joined with
/// `\n` and there is no trailing newline.
pub fn render(title: &str, entries: &[TocEntry]) -> String {
    let mut lines = vec![format!("# {title}"), String::new()];

    for entry in entries {
        lines.push(format!("- [[{}|{}]]", entry.link, entry.label));

        for heading in &entry.headings {
            let indent = "\t".repeat(usize::from(heading.level.max(1)));
            lines.push(format!(
                "{indent}- [[{}#{}|{}]]",
                entry.link, heading.text, heading.text
            ));
        }
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_nested_links() {
        let entries = vec![TocEntry {
            link: "A".into(),
            label: "A".into(),
            headings: vec![
                Heading {
                    level: 1,
                    text: "H1".into(),
                },
                Heading {
                    level: 2,
                    text: "H2".into(),
                },
            ],
        }];

        assert_eq!(
            render("Table of content", &entries),
            "# Table of content\n\n- [[A|A]]\n\t- [[A#H1|H1]]\n\t\t- [[A#H2|H2]]"
        );
    }

    #[test]
    fn entries_without_headings_are_single_lines() {
        let entries = vec![
            TocEntry {
                link: "x/One".into(),
                label: "x -> One".into(),
                headings: Vec::new(),
            },
            TocEntry {
                link: "Two".into(),
                label: "Two".into(),
                headings: Vec::new(),
            },
        ];

        assert_eq!(
            render("Index", &entries),
            "# Index\n\n- [[x/One|x -> One]]\n- [[Two|Two]]"
        );
    }

    #[test]
    fn title_only_when_empty() {
        assert_eq!(render("Index", &[]), "# Index\n");
    }
}
