//! Locator resolution
//!
//! Evaluates the locator forms this crate emits against a tree, so that a
//! generated string can be checked to select its element again.
//!
//! XPath subset:
//! - `/step/step` from the document node, `//step/...` from any node
//! - name tests `tag` and `*`
//! - one predicate per step: `[k]` or `[@id="value"]`
//!
//! CSS subset: `#id`, or `tag.class...:nth-child(k)` with `tag` possibly `*`.
//! `:nth-child(k)` counts same-tag siblings, the way the generator emits it.

use std::collections::HashSet;

use loc8r_dom::{DomTree, ElementData, Node, NodeId};
use thiserror::Error;

/// Resolution error
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("Invalid XPath '{expr}': {reason}")]
    XPathSyntax { expr: String, reason: String },

    #[error("Invalid CSS selector '{selector}': {reason}")]
    CssSyntax { selector: String, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Predicate {
    Position(usize),
    IdEquals(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Step {
    /// `None` for `*`
    name: Option<String>,
    predicate: Option<Predicate>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct PathExpr {
    descendant: bool,
    steps: Vec<Step>,
}

/// Elements selected by `expr`
pub fn resolve_xpath(tree: &DomTree, expr: &str) -> Result<Vec<NodeId>, ResolveError> {
    let path = parse_xpath(expr).map_err(|reason| ResolveError::XPathSyntax {
        expr: expr.to_string(),
        reason,
    })?;

    let mut context: Vec<NodeId> = if path.descendant {
        tree.descendants(tree.root()).collect()
    } else {
        vec![tree.root()]
    };

    for step in &path.steps {
        let mut next = Vec::new();
        for &ctx in &context {
            let matched = tree
                .element_children(ctx)
                .filter(|&c| step.name.as_deref().is_none_or(|n| tree.tag_name(c) == Some(n)));

            match &step.predicate {
                None => next.extend(matched),
                Some(Predicate::Position(k)) => next.extend(matched.skip(k - 1).take(1)),
                Some(Predicate::IdEquals(v)) => next.extend(matched.filter(|&c| {
                    element_of(tree, c).and_then(ElementData::id) == Some(v.as_str())
                })),
            }
        }
        context = dedup(next);
    }

    Ok(context)
}

/// Elements selected by `selector`
pub fn resolve_css(tree: &DomTree, selector: &str) -> Result<Vec<NodeId>, ResolveError> {
    let syntax = |reason: &str| ResolveError::CssSyntax {
        selector: selector.to_string(),
        reason: reason.to_string(),
    };

    let elements = tree
        .descendants(tree.root())
        .filter(|&n| tree.get(n).is_some_and(Node::is_element));

    if let Some(id) = selector.strip_prefix('#') {
        if id.is_empty() {
            return Err(syntax("empty id"));
        }
        return Ok(dedup(
            elements
                .filter(|&n| element_of(tree, n).and_then(ElementData::id) == Some(id))
                .collect(),
        ));
    }

    let (compound, nth) = match selector.find(":nth-child(") {
        Some(at) => {
            let arg = selector[at + ":nth-child(".len()..]
                .strip_suffix(')')
                .ok_or_else(|| syntax("unterminated :nth-child"))?;
            let k = arg
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|&k| k > 0)
                .ok_or_else(|| syntax("nth-child index must be a positive integer"))?;
            (&selector[..at], Some(k))
        }
        None => (selector, None),
    };

    let mut parts = compound.split('.');
    let tag = parts.next().unwrap_or_default().to_ascii_lowercase();
    if tag.is_empty() {
        return Err(syntax("missing tag"));
    }
    let classes: Vec<&str> = parts.collect();
    if classes.iter().any(|c| c.is_empty()) {
        return Err(syntax("empty class"));
    }

    let matches = elements.filter(|&n| {
        let Some(elem) = element_of(tree, n) else {
            return false;
        };
        (tag == "*" || elem.tag == tag)
            && classes.iter().all(|c| elem.classes().any(|own| own == *c))
            && nth.is_none_or(|k| same_tag_position(tree, n) == Some(k))
    });

    Ok(dedup(matches.collect()))
}

fn element_of(tree: &DomTree, node: NodeId) -> Option<&ElementData> {
    tree.get(node).and_then(Node::as_element)
}

fn same_tag_position(tree: &DomTree, node: NodeId) -> Option<usize> {
    let tag = tree.tag_name(node)?;
    tree.element_children(tree.parent(node))
        .filter(|&c| tree.tag_name(c) == Some(tag))
        .position(|c| c == node)
        .map(|p| p + 1)
}

fn dedup(nodes: Vec<NodeId>) -> Vec<NodeId> {
    let mut seen = HashSet::new();
    nodes.into_iter().filter(|n| seen.insert(*n)).collect()
}

fn parse_xpath(expr: &str) -> Result<PathExpr, String> {
    let (descendant, rest) = if let Some(rest) = expr.strip_prefix("//") {
        (true, rest)
    } else if let Some(rest) = expr.strip_prefix('/') {
        (false, rest)
    } else {
        return Err("path must start with '/' or '//'".into());
    };

    if rest.is_empty() {
        return Err("empty path".into());
    }

    let steps = split_steps(rest)?
        .into_iter()
        .map(parse_step)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(PathExpr { descendant, steps })
}

/// Split on `/` outside of brackets and quotes
fn split_steps(path: &str) -> Result<Vec<&str>, String> {
    let mut steps = Vec::new();
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut start = 0;

    for (i, ch) in path.char_indices() {
        match (quote, ch) {
            (Some(q), c) if c == q => quote = None,
            (Some(_), _) => {}
            (None, '"' | '\'') => quote = Some(ch),
            (None, '[') => depth += 1,
            (None, ']') => depth = depth.checked_sub(1).ok_or("unbalanced ']'")?,
            (None, '/') if depth == 0 => {
                steps.push(&path[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }

    if quote.is_some() {
        return Err("unterminated string literal".into());
    }
    if depth != 0 {
        return Err("unbalanced '['".into());
    }
    steps.push(&path[start..]);
    Ok(steps)
}

fn parse_step(step: &str) -> Result<Step, String> {
    let (name, predicate) = match step.find('[') {
        Some(at) => (&step[..at], Some(&step[at..])),
        None => (step, None),
    };

    if name.is_empty() {
        return Err(format!("empty step in '{step}'"));
    }
    if name.contains(['@', '"', '\'', ']']) {
        return Err(format!("unsupported name test '{name}'"));
    }

    let name = (name != "*").then(|| name.to_ascii_lowercase());
    let predicate = predicate.map(parse_predicate).transpose()?;

    Ok(Step { name, predicate })
}

fn parse_predicate(pred: &str) -> Result<Predicate, String> {
    let inner = pred
        .strip_prefix('[')
        .and_then(|p| p.strip_suffix(']'))
        .ok_or_else(|| format!("malformed predicate '{pred}'"))?;

    if let Some(literal) = inner.strip_prefix("@id=") {
        let value = ['"', '\'']
            .iter()
            .find_map(|&q| literal.strip_prefix(q).and_then(|l| l.strip_suffix(q)))
            .ok_or_else(|| format!("unquoted id literal in '{pred}'"))?;
        return Ok(Predicate::IdEquals(value.to_string()));
    }

    match inner.parse::<usize>() {
        Ok(k) if k > 0 => Ok(Predicate::Position(k)),
        _ => Err(format!("unsupported predicate '{pred}'")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_steps() {
        let path = parse_xpath("//div[@id=\"a/b\"]/ul/li[2]").unwrap();
        assert!(path.descendant);
        assert_eq!(path.steps.len(), 3);
        assert_eq!(
            path.steps[0].predicate,
            Some(Predicate::IdEquals("a/b".into()))
        );
        assert_eq!(path.steps[2].predicate, Some(Predicate::Position(2)));
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_xpath("div").is_err());
        assert!(parse_xpath("//").is_err());
        assert!(parse_xpath("/html//body").is_err());
        assert!(parse_xpath("/li[0]").is_err());
        assert!(parse_xpath("/li[@id=x]").is_err());
        assert!(parse_xpath("/li[1][2]").is_err());
        assert!(parse_xpath("/li[\"]").is_err());
    }

    #[test]
    fn test_star_name_test() {
        let step = parse_step("*[@id='x']").unwrap();
        assert_eq!(step.name, None);
        assert_eq!(step.predicate, Some(Predicate::IdEquals("x".into())));
    }
}
