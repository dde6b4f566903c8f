// Rendering of extracted paths into grouped redirect declarations

/// Number of redirect rules per declaration block
pub const CHUNK_SIZE: usize = 50;

/// Target configuration syntax for a list of redirect rules.
///
/// Grouping is handled by [`render_redirects`]; an implementation only
/// decides how a block opens, how one rule reads, how two consecutive
/// blocks are joined and how the last block closes.
pub trait RedirectSyntax {
    fn open_block(&self) -> &str;
    fn rule(&self, path: &str) -> String;
    fn block_boundary(&self) -> &str;
    fn close_block(&self) -> &str;
}

/// Django `urlpatterns`-style `RedirectView` rules
#[derive(Debug, Clone, Copy, Default)]
pub struct DjangoSyntax;

impl RedirectSyntax for DjangoSyntax {
    fn open_block(&self) -> &str {
        "redirects = [\n"
    }

    fn rule(&self, path: &str) -> String {
        format!(
            "  url(r'^{}/?$', RedirectView.as_view(url='/{}', permanent=True)),\n",
            path, path
        )
    }

    fn block_boundary(&self) -> &str {
        "]\n\nredirects += [\n"
    }

    fn close_block(&self) -> &str {
        "]"
    }
}

/// Number of declaration blocks reported for `count` redirects
pub fn group_count(count: usize) -> usize {
    count.div_ceil(CHUNK_SIZE)
}

/// Render all paths as one redirect declaration per path, split into
/// blocks of [`CHUNK_SIZE`]. No empty block follows a full final batch.
pub fn render_redirects<S: RedirectSyntax + ?Sized>(paths: &[String], syntax: &S) -> String {
    let mut output = String::from(syntax.open_block());

    for (i, path) in paths.iter().enumerate() {
        output.push_str(&syntax.rule(path));

        if (i + 1) % CHUNK_SIZE == 0 && i < paths.len() - 1 {
            output.push_str(syntax.block_boundary());
        }
    }

    output.push_str(syntax.close_block());
    output
}
