use swatch_core::context::UiContext;
use swatch_core::element::{Element, ElementBase, LocaleSwitchable, SchemeSwitchable};
use swatch_core::kurbo::{Point, Rect, Size};
use swatch_core::locale::Locale;
use swatch_core::painter::Painter;
use swatch_core::text::Text;
use swatch_theme::{style_record, Color, SchemeState, WidgetId};

use crate::palette::{gray, rgb};
use crate::styled::{styled, Styled};

const INSET: f64 = 5.0;
const INDENT: f64 = 16.0;
const ROW_PADDING: f64 = 4.0;

style_record! {
    /// Colours of a [Tree].
    pub struct TreeStyle {
        /// Connector lines.
        line,
        /// Labels of unselected nodes.
        font,
        /// Label of the selected node.
        select_font,
        /// Highlight behind the selected node.
        select_background,
        /// Fill.
        background,
    }
}

impl TreeStyle {
    /// The built-in `Light` record.
    pub fn light() -> Self {
        Self {
            line: Color::BLACK,
            font: Color::BLACK,
            select_font: Color::WHITE,
            select_background: rgb(25, 142, 238),
            background: Color::WHITE,
        }
    }

    /// The built-in `Dark` record.
    pub fn dark() -> Self {
        Self {
            line: Color::WHITE,
            font: Color::WHITE,
            select_font: Color::WHITE,
            select_background: rgb(34, 128, 201),
            background: gray(61),
        }
    }
}

/// A node of a [Tree].
#[derive(Debug, Clone)]
pub struct TreeNode {
    label: Text,
    children: Vec<TreeNode>,
    expanded: bool,
}

impl TreeNode {
    /// A collapsed node without children.
    pub fn new(label: impl Into<Text>) -> Self {
        Self {
            label: label.into(),
            children: Vec::new(),
            expanded: false,
        }
    }

    /// Append a child.
    pub fn with_child(mut self, child: TreeNode) -> Self {
        self.children.push(child);
        self
    }

    /// Start expanded.
    pub fn expanded(mut self) -> Self {
        self.expanded = true;
        self
    }

    /// The unresolved label.
    pub fn label(&self) -> &Text {
        &self.label
    }

    /// Child nodes.
    pub fn children(&self) -> &[TreeNode] {
        &self.children
    }

    /// Whether the children are shown.
    pub fn is_expanded(&self) -> bool {
        self.expanded
    }
}

/// A visible row: the node and its depth.
struct Row<'a> {
    node: &'a TreeNode,
    depth: usize,
}

fn collect_rows<'a>(node: &'a TreeNode, depth: usize, rows: &mut Vec<Row<'a>>) {
    rows.push(Row { node, depth });
    if node.expanded {
        for child in &node.children {
            collect_rows(child, depth + 1, rows);
        }
    }
}

/// A collapsible hierarchy of localized labels.
///
/// Labels are resolved while painting, so switching locale only records the
/// new locale and repaints.
pub struct Tree {
    context: UiContext,
    base: ElementBase,
    style: SchemeState<TreeStyle>,
    root: TreeNode,
    selected: Option<usize>,
    arc: f64,
}

impl Tree {
    /// Create a tree showing `root`.
    pub fn new(context: &UiContext, root: TreeNode, size: Size) -> Self {
        let mut base = ElementBase::new(context.locale().clone());
        base.set_size(size);
        Self {
            context: context.clone(),
            base,
            style: SchemeState::new(WidgetId::new("swatch-widgets", "Tree"), TreeStyle::light(), TreeStyle::dark()),
            root,
            selected: None,
            arc: 15.0,
        }
    }

    /// The root node.
    pub fn root(&self) -> &TreeNode {
        &self.root
    }

    /// Resolved labels of the visible rows, top to bottom.
    pub fn visible_labels(&self) -> Vec<String> {
        self.rows()
            .iter()
            .map(|row| self.context.resolve(&row.node.label, self.base.locale()))
            .collect()
    }

    /// Expand or collapse the node at visible row `row`.
    ///
    /// A selection below the node moves with it. A selection inside a
    /// collapsed subtree is cleared.
    pub fn toggle_row(&mut self, row: usize) {
        let before = self.rows().len();
        let mut index = 0;
        if !toggle_nth(&mut self.root, row, &mut index) {
            return;
        }
        let after = self.rows().len();
        self.selected = match self.selected {
            Some(selected) if selected > row && after < before => {
                let hidden = before - after;
                (selected > row + hidden).then(|| selected - hidden)
            }
            Some(selected) if selected > row => Some(selected + (after - before)),
            selected => selected,
        };
        self.base.request_repaint();
    }

    /// Highlight visible row `row`, or nothing.
    pub fn select_row(&mut self, row: Option<usize>) {
        self.selected = row;
        self.base.request_repaint();
    }

    /// The highlighted row.
    pub fn selected_row(&self) -> Option<usize> {
        self.selected
    }

    fn rows(&self) -> Vec<Row<'_>> {
        let mut rows = Vec::new();
        collect_rows(&self.root, 0, &mut rows);
        rows
    }

    fn row_height(&self) -> f64 {
        self.context.metrics().measure(self.context.font(), "Ag").height + ROW_PADDING
    }
}

fn toggle_nth(node: &mut TreeNode, target: usize, index: &mut usize) -> bool {
    if *index == target {
        node.expanded = !node.expanded;
        return true;
    }
    *index += 1;
    if node.expanded {
        for child in &mut node.children {
            if toggle_nth(child, target, index) {
                return true;
            }
        }
    }
    false
}

impl Element for Tree {
    fn widget_id(&self) -> WidgetId {
        WidgetId::new("swatch-widgets", "Tree")
    }

    fn base(&self) -> &ElementBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ElementBase {
        &mut self.base
    }

    fn paint(&self, painter: &mut dyn Painter, origin: Point) {
        let style = self.style();
        let bounds = Rect::from_origin_size(origin, self.base.size());
        painter.fill_rounded_rect(bounds, self.arc / 2.0, style.background);

        let row_height = self.row_height();
        let font = self.context.font();
        for (index, row) in self.rows().iter().enumerate() {
            let y = origin.y + INSET + index as f64 * row_height;
            let x = origin.x + INSET + row.depth as f64 * INDENT;
            if row.depth > 0 {
                let mid = y + row_height / 2.0;
                let elbow = [Point::new(x - INDENT / 2.0, y), Point::new(x - INDENT / 2.0, mid), Point::new(x, mid)];
                painter.stroke_polyline(&elbow, 1.0, style.line);
            }

            let label = self.context.resolve(&row.node.label, self.base.locale());
            let color = if self.selected == Some(index) {
                let width = self.context.metrics().measure(font, &label).width;
                painter.fill_rect(Rect::new(x, y, x + width + ROW_PADDING, y + row_height), style.select_background);
                style.select_font
            } else {
                style.font
            };
            painter.draw_text(&label, Point::new(x + ROW_PADDING / 2.0, y + ROW_PADDING / 2.0), font, color);
        }
    }

    fn scheme_switchable(&mut self) -> Option<&mut dyn SchemeSwitchable> {
        Some(self)
    }

    fn locale_switchable(&mut self) -> Option<&mut dyn LocaleSwitchable> {
        Some(self)
    }
}

styled!(Tree, TreeStyle);

impl LocaleSwitchable for Tree {
    fn apply_own_locale(&mut self, _locale: &Locale) {}
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use swatch_core::catalog::MapCatalog;
    use swatch_core::propagate;

    use super::*;

    fn sample() -> TreeNode {
        TreeNode::new("root")
            .with_child(TreeNode::new("a").with_child(TreeNode::new("a1")))
            .with_child(TreeNode::new("b"))
            .expanded()
    }

    #[test]
    fn collapsed_children_are_hidden() {
        let mut tree = Tree::new(&UiContext::headless(), sample(), Size::new(100.0, 100.0));
        assert_eq!(tree.visible_labels(), vec!["root", "a", "b"]);
        tree.toggle_row(1);
        assert_eq!(tree.visible_labels(), vec!["root", "a", "a1", "b"]);
    }

    #[test]
    fn selection_below_toggled_node_moves_with_it() {
        let mut tree = Tree::new(&UiContext::headless(), sample(), Size::new(100.0, 100.0));
        tree.select_row(Some(2));
        tree.toggle_row(1);
        assert_eq!(tree.selected_row(), Some(3));
        tree.toggle_row(1);
        assert_eq!(tree.selected_row(), Some(2));
        assert_eq!(tree.visible_labels()[2], "b");
    }

    #[test]
    fn selection_inside_collapsed_subtree_is_cleared() {
        let mut tree = Tree::new(&UiContext::headless(), sample(), Size::new(100.0, 100.0));
        tree.toggle_row(1);
        tree.select_row(Some(2));
        tree.toggle_row(1);
        assert_eq!(tree.selected_row(), None);

        tree.select_row(Some(0));
        tree.toggle_row(1);
        assert_eq!(tree.selected_row(), Some(0));
    }

    #[test]
    fn labels_follow_locale() {
        let catalog = MapCatalog::new().with_entry("fr", "root", "racine");
        let context = UiContext::headless().with_catalog(Rc::new(catalog));
        let mut tree = Tree::new(&context, sample(), Size::new(100.0, 100.0));
        propagate::apply_locale(&mut tree, &Locale::new("fr"));
        assert_eq!(tree.visible_labels()[0], "racine");
    }
}
