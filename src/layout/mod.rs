//! Page layout.
//!
//! The page is a single flex column: header, intro, the three widget
//! sections, footer. Section heights are measured from widget state by
//! the drawing layer; this module feeds them through Taffy and hands back
//! a `Rect` per section. Sections keep their measured height
//! (`flex_shrink: 0`); on a terminal too short for the page the overflow
//! is clipped by the frame buffer rather than squashing every section.

use taffy::{
    AvailableSpace, Dimension, FlexDirection, LengthPercentage, NodeId, Size, Style, TaffyTree,
};

use crate::error::{DrillError, Result};
use crate::types::Rect;

/// Measured height of each page section, in rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionHeights {
    pub header: u16,
    pub intro: u16,
    pub form: u16,
    pub table: u16,
    pub counter: u16,
    pub footer: u16,
}

/// Computed position of each page section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionRects {
    pub header: Rect,
    pub intro: Rect,
    pub form: Rect,
    pub table: Rect,
    pub counter: Rect,
    pub footer: Rect,
}

/// Lay the page out for a terminal of `width` x `height` cells.
pub fn compute_page_layout(
    width: u16,
    height: u16,
    heights: &SectionHeights,
) -> Result<SectionRects> {
    let mut tree: TaffyTree<()> = TaffyTree::new();

    let section = |h: u16| Style {
        size: Size {
            width: Dimension::Percent(1.0),
            height: Dimension::Length(h as f32),
        },
        flex_shrink: 0.0,
        ..Style::default()
    };

    let rows = [
        heights.header,
        heights.intro,
        heights.form,
        heights.table,
        heights.counter,
        heights.footer,
    ];
    let mut children = Vec::with_capacity(rows.len());
    for h in rows {
        children.push(
            tree.new_leaf(section(h))
                .map_err(DrillError::layout)?,
        );
    }

    let root = tree
        .new_with_children(
            Style {
                flex_direction: FlexDirection::Column,
                size: Size {
                    width: Dimension::Length(width as f32),
                    height: Dimension::Auto,
                },
                gap: Size {
                    width: LengthPercentage::Length(0.0),
                    height: LengthPercentage::Length(1.0),
                },
                padding: taffy::Rect {
                    left: LengthPercentage::Length(1.0),
                    right: LengthPercentage::Length(1.0),
                    top: LengthPercentage::Length(0.0),
                    bottom: LengthPercentage::Length(0.0),
                },
                ..Style::default()
            },
            &children,
        )
        .map_err(DrillError::layout)?;

    tree.compute_layout(
        root,
        Size {
            width: AvailableSpace::Definite(width as f32),
            height: AvailableSpace::Definite(height as f32),
        },
    )
    .map_err(DrillError::layout)?;

    let rect_of = |tree: &TaffyTree<()>, node: NodeId| -> Result<Rect> {
        let layout = tree.layout(node).map_err(DrillError::layout)?;
        Ok(Rect::new(
            layout.location.x.round() as u16,
            layout.location.y.round() as u16,
            layout.size.width.round() as u16,
            layout.size.height.round() as u16,
        ))
    };

    Ok(SectionRects {
        header: rect_of(&tree, children[0])?,
        intro: rect_of(&tree, children[1])?,
        form: rect_of(&tree, children[2])?,
        table: rect_of(&tree, children[3])?,
        counter: rect_of(&tree, children[4])?,
        footer: rect_of(&tree, children[5])?,
    })
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const HEIGHTS: SectionHeights = SectionHeights {
        header: 3,
        intro: 3,
        form: 10,
        table: 12,
        counter: 11,
        footer: 1,
    };

    #[test]
    fn test_sections_stack_with_gaps() {
        let rects = compute_page_layout(80, 50, &HEIGHTS).unwrap();

        assert_eq!(rects.header.y, 0);
        assert_eq!(rects.header.height, 3);
        // 1-row gap between sections
        assert_eq!(rects.intro.y, rects.header.bottom() + 1);
        assert_eq!(rects.form.y, rects.intro.bottom() + 1);
        assert_eq!(rects.table.y, rects.form.bottom() + 1);
        assert_eq!(rects.counter.y, rects.table.bottom() + 1);
        assert_eq!(rects.footer.y, rects.counter.bottom() + 1);
    }

    #[test]
    fn test_horizontal_padding() {
        let rects = compute_page_layout(80, 50, &HEIGHTS).unwrap();
        assert_eq!(rects.form.x, 1);
        assert_eq!(rects.form.width, 78);
    }

    #[test]
    fn test_sections_do_not_shrink_on_short_terminal() {
        let rects = compute_page_layout(80, 10, &HEIGHTS).unwrap();
        // Heights are preserved; overflow is clipped at draw time.
        assert_eq!(rects.form.height, 10);
        assert_eq!(rects.counter.height, 11);
    }

    #[test]
    fn test_dynamic_table_height_moves_later_sections() {
        let mut taller = HEIGHTS;
        taller.table += 5;

        let base = compute_page_layout(80, 60, &HEIGHTS).unwrap();
        let grown = compute_page_layout(80, 60, &taller).unwrap();
        assert_eq!(grown.counter.y, base.counter.y + 5);
        assert_eq!(grown.footer.y, base.footer.y + 5);
    }
}
