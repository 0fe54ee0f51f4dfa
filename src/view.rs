use std::collections::BTreeSet;

use crate::directory::Project;
use crate::selection::{ResolvedView, ViewKind};

/// Presentation layer driven by the resolver. Implementations own every
/// widget; they receive finished titles and result sets only.
pub trait Renderer {
    fn render_result_list(&mut self, title: &str, results: &[&Project]);
    fn highlight_regions(&mut self, regions: &BTreeSet<String>);
    fn render_welcome(&mut self);
    fn render_empty(&mut self, title: &str);
}

pub fn project_view(view: &ResolvedView<'_>, renderer: &mut impl Renderer) {
    renderer.highlight_regions(&view.highlighted_regions);

    match view.kind {
        ViewKind::Welcome => renderer.render_welcome(),
        ViewKind::Hidden => renderer.render_empty(&view.title),
        ViewKind::Results if view.results.is_empty() => renderer.render_empty(&view.title),
        ViewKind::Results => renderer.render_result_list(&view.title, &view.results),
    }
}
