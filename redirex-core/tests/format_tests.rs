// Tests for redirect rendering and grouping

use redirex_core::format::{
    CHUNK_SIZE, DjangoSyntax, RedirectSyntax, group_count, render_redirects,
};

fn paths(count: usize) -> Vec<String> {
    (1..=count).map(|i| format!("page-{}", i)).collect()
}

fn rule_lines(output: &str) -> Vec<&str> {
    output
        .lines()
        .filter(|line| line.starts_with("  url("))
        .collect()
}

fn block_count(output: &str) -> usize {
    output.matches("redirects = [").count() + output.matches("redirects += [").count()
}

// ============================================================================
// Django Syntax Tests
// ============================================================================

#[test]
fn test_django_rule_line() {
    let line = DjangoSyntax.rule("about");
    assert_eq!(
        line,
        "  url(r'^about/?$', RedirectView.as_view(url='/about', permanent=True)),\n"
    );
}

#[test]
fn test_single_path_output() {
    let output = render_redirects(&["about".to_string()], &DjangoSyntax);
    assert_eq!(
        output,
        "redirects = [\n  url(r'^about/?$', RedirectView.as_view(url='/about', permanent=True)),\n]"
    );
}

#[test]
fn test_zero_paths_single_empty_block() {
    let output = render_redirects(&[], &DjangoSyntax);
    assert_eq!(output, "redirects = [\n]");
    assert_eq!(block_count(&output), 1);
}

// ============================================================================
// Grouping Tests
// ============================================================================

#[test]
fn test_exactly_one_chunk() {
    let output = render_redirects(&paths(CHUNK_SIZE), &DjangoSyntax);
    assert_eq!(block_count(&output), 1);
    assert!(!output.contains("redirects +="));
    assert!(output.ends_with("permanent=True)),\n]"));
}

#[test]
fn test_one_over_chunk() {
    let output = render_redirects(&paths(CHUNK_SIZE + 1), &DjangoSyntax);
    assert_eq!(block_count(&output), 2);
    assert_eq!(rule_lines(&output).len(), CHUNK_SIZE + 1);
}

#[test]
fn test_boundary_after_fiftieth_entry() {
    let output = render_redirects(&paths(100), &DjangoSyntax);
    let boundary = "url='/page-50', permanent=True)),\n]\n\nredirects += [\n  url(r'^page-51/?$'";

    assert!(output.contains(boundary));
    assert_eq!(block_count(&output), 2);
    assert!(output.ends_with("url='/page-100', permanent=True)),\n]"));
}

#[test]
fn test_block_count_matches_group_count() {
    for count in [1, 49, 50, 51, 99, 100, 101, 250] {
        let output = render_redirects(&paths(count), &DjangoSyntax);
        assert_eq!(block_count(&output), group_count(count), "count = {}", count);
    }
}

#[test]
fn test_line_count_matches_path_count() {
    let input = paths(137);
    let output = render_redirects(&input, &DjangoSyntax);
    assert_eq!(rule_lines(&output).len(), input.len());
}

#[test]
fn test_order_preserved() {
    let input = paths(75);
    let output = render_redirects(&input, &DjangoSyntax);

    for (line, path) in rule_lines(&output).iter().zip(&input) {
        assert!(line.contains(&format!("url='/{}'", path)));
    }
}

#[test]
fn test_group_count() {
    assert_eq!(group_count(0), 0);
    assert_eq!(group_count(1), 1);
    assert_eq!(group_count(50), 1);
    assert_eq!(group_count(51), 2);
    assert_eq!(group_count(100), 2);
}

// ============================================================================
// Custom Syntax Tests
// ============================================================================

struct NginxSyntax;

impl RedirectSyntax for NginxSyntax {
    fn open_block(&self) -> &str {
        "# block\n"
    }

    fn rule(&self, path: &str) -> String {
        format!("rewrite ^/{}/?$ /{} permanent;\n", path, path)
    }

    fn block_boundary(&self) -> &str {
        "# block\n"
    }

    fn close_block(&self) -> &str {
        ""
    }
}

#[test]
fn test_custom_syntax_uses_same_grouping() {
    let output = render_redirects(&paths(CHUNK_SIZE * 2 + 1), &NginxSyntax);
    assert_eq!(output.matches("# block").count(), 3);
    assert_eq!(output.matches("rewrite ").count(), CHUNK_SIZE * 2 + 1);
}
