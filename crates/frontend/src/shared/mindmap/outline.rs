//! Text-to-outline conversion for the mind-map viewer.
//!
//! Generated mind-map content arrives either as heading/bullet outline text
//! or as the line-indented pseudo-graph format (literal `mindmap` root
//! marker, two spaces per level). Both are normalized into an `OutlineNode`
//! tree for drawing.

/// One node of the rendered mind map
#[derive(Debug, Clone, PartialEq)]
pub struct OutlineNode {
    pub label: String,
    pub children: Vec<OutlineNode>,
}

impl OutlineNode {
    fn new(label: String) -> Self {
        Self {
            label,
            children: Vec::new(),
        }
    }
}

/// True when the content is in the pseudo-graph format: first non-blank line
/// is the literal `mindmap` root marker.
pub fn looks_like_graph(content: &str) -> bool {
    content
        .lines()
        .find(|line| !line.trim().is_empty())
        .map(|line| line.trim() == "mindmap")
        .unwrap_or(false)
}

/// Convert pseudo-graph lines into heading/bullet outline text.
///
/// Depth = floor(leading whitespace / 2). Depths 0-2 become headings of
/// level depth+1; deeper lines degrade to indented bullets. Blank lines and
/// the literal root marker are skipped. The mapping is fixed and lossy
/// beyond three levels.
pub fn graph_to_outline(content: &str) -> String {
    let mut out = String::new();
    for line in content.lines() {
        let text = line.trim();
        if text.is_empty() || text == "mindmap" {
            continue;
        }
        let indent = line.len() - line.trim_start().len();
        let depth = indent / 2;
        match depth {
            0 => out.push_str(&format!("# {}\n", text)),
            1 => out.push_str(&format!("## {}\n", text)),
            2 => out.push_str(&format!("### {}\n", text)),
            d => out.push_str(&format!("{}- {}\n", "  ".repeat(d - 3), text)),
        }
    }
    out
}

/// Parse heading/bullet outline text into a node tree.
///
/// Headings nest by level (`#` = 1, `##` = 2, ...); bullets attach under the
/// deepest preceding node, nesting by their own indent. Any other non-blank
/// line is a transformation error.
pub fn outline_to_tree(outline: &str) -> Result<Vec<OutlineNode>, String> {
    let mut roots: Vec<OutlineNode> = Vec::new();

    for line in outline.lines() {
        let text = line.trim();
        if text.is_empty() {
            continue;
        }

        if let Some((label, level)) = parse_heading(text) {
            insert_at(&mut roots, level, label.to_string());
        } else if let Some(label) = text.strip_prefix("- ") {
            let indent = line.len() - line.trim_start().len();
            // Bullets sit below the deepest heading level
            insert_at(&mut roots, 4 + indent / 2, label.to_string());
        } else {
            return Err(format!("Unrecognized outline line: {:?}", text));
        }
    }

    if roots.is_empty() {
        return Err("Outline is empty".to_string());
    }
    Ok(roots)
}

/// Full pipeline: detect the format, convert, build the tree.
pub fn build_tree(content: &str) -> Result<Vec<OutlineNode>, String> {
    if looks_like_graph(content) {
        outline_to_tree(&graph_to_outline(content))
    } else {
        outline_to_tree(content)
    }
}

fn parse_heading(text: &str) -> Option<(&str, usize)> {
    let hashes = text.chars().take_while(|c| *c == '#').count();
    if hashes == 0 || hashes > 6 {
        return None;
    }
    let rest = text[hashes..].strip_prefix(' ')?;
    Some((rest.trim(), hashes))
}

/// Append a node at the given outline level, descending into the last child
/// at each step. Malformed jumps attach as deep as the tree allows.
fn insert_at(roots: &mut Vec<OutlineNode>, level: usize, label: String) {
    let mut slot = roots;
    for _ in 1..level {
        if slot.is_empty() {
            break;
        }
        let last = slot.len() - 1;
        slot = &mut slot[last].children;
    }
    slot.push(OutlineNode::new(label));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_marker_is_not_a_node() {
        let tree = build_tree("mindmap\n  Root\n    Child").unwrap();
        fn contains(nodes: &[OutlineNode], label: &str) -> bool {
            nodes
                .iter()
                .any(|n| n.label == label || contains(&n.children, label))
        }
        assert!(!contains(&tree, "mindmap"));
        assert!(contains(&tree, "Root"));
        assert!(contains(&tree, "Child"));
    }

    #[test]
    fn indent_maps_to_heading_levels() {
        // Indent level 1 -> level-2 heading, level 2 -> level-3 heading
        let outline = graph_to_outline("mindmap\n  Root\n    Child");
        assert_eq!(outline, "## Root\n### Child\n");
    }

    #[test]
    fn deeper_nesting_degrades_to_bullets() {
        let outline = graph_to_outline("mindmap\nTop\n      Deep\n        Deeper");
        assert_eq!(outline, "# Top\n- Deep\n  - Deeper\n");
    }

    #[test]
    fn blank_lines_are_skipped() {
        let outline = graph_to_outline("mindmap\n\n  Root\n\n    Child\n");
        assert_eq!(outline, "## Root\n### Child\n");
    }

    #[test]
    fn graph_child_nests_under_root() {
        let tree = build_tree("mindmap\n  Root\n    Child").unwrap();
        assert_eq!(tree.len(), 1);
        assert_eq!(tree[0].label, "Root");
        assert_eq!(tree[0].children.len(), 1);
        assert_eq!(tree[0].children[0].label, "Child");
    }

    #[test]
    fn outline_headings_nest_by_level() {
        let tree = outline_to_tree("# A\n## B\n### C\n## D\n# E").unwrap();
        assert_eq!(tree.len(), 2);
        assert_eq!(tree[0].label, "A");
        assert_eq!(tree[0].children.len(), 2);
        assert_eq!(tree[0].children[0].label, "B");
        assert_eq!(tree[0].children[0].children[0].label, "C");
        assert_eq!(tree[0].children[1].label, "D");
        assert_eq!(tree[1].label, "E");
    }

    #[test]
    fn bullets_attach_under_headings() {
        let tree = outline_to_tree("# Topic\n## Part\n- one\n- two\n  - nested").unwrap();
        let part = &tree[0].children[0];
        assert_eq!(part.children.len(), 2);
        assert_eq!(part.children[0].label, "one");
        assert_eq!(part.children[1].label, "two");
        assert_eq!(part.children[1].children[0].label, "nested");
    }

    #[test]
    fn unrecognized_lines_are_an_error() {
        assert!(outline_to_tree("# A\njust prose").is_err());
        assert!(build_tree("").is_err());
    }

    #[test]
    fn plain_outline_input_needs_no_marker() {
        assert!(!looks_like_graph("# A\n## B"));
        assert!(build_tree("# A\n## B").is_ok());
    }
}
