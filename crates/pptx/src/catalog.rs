//! The stock layout catalog of the default Office template.
//!
//! Geometry is the template's own (EMU), authored for a 10in wide slide.

use deck_core::{PlaceholderRole, Rect};

/// One placeholder a layout hands to slides created from it.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceholderSpec {
    pub role: PlaceholderRole,
    /// Placeholder index; `None` for the title.
    pub idx: Option<u32>,
    pub name: &'static str,
    pub bounds: Rect,
    /// Vertical text flow.
    pub vertical: bool,
}

/// A named slide layout.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutSpec {
    pub name: &'static str,
    /// Value of the layout's `type` attribute.
    pub kind: &'static str,
    pub placeholders: Vec<PlaceholderSpec>,
}

const TITLE_BOUNDS: Rect = Rect::new(457_200, 274_638, 8_229_600, 1_143_000);
const BODY_BOUNDS: Rect = Rect::new(457_200, 1_600_200, 8_229_600, 4_525_963);

fn ph(role: PlaceholderRole, idx: u32, name: &'static str, bounds: Rect) -> PlaceholderSpec {
    PlaceholderSpec {
        role,
        idx: Some(idx),
        name,
        bounds,
        vertical: false,
    }
}

fn title(name: &'static str, bounds: Rect) -> PlaceholderSpec {
    PlaceholderSpec {
        role: PlaceholderRole::Title,
        idx: None,
        name,
        bounds,
        vertical: false,
    }
}

fn vertical(mut spec: PlaceholderSpec) -> PlaceholderSpec {
    spec.vertical = true;
    spec
}

/// The eleven stock layouts, in template order.
pub fn stock_layouts() -> Vec<LayoutSpec> {
    use PlaceholderRole::*;

    vec![
        LayoutSpec {
            name: "Title Slide",
            kind: "title",
            placeholders: vec![
                PlaceholderSpec {
                    role: CenterTitle,
                    ..title("Title 1", Rect::new(685_800, 2_130_425, 7_772_400, 1_470_025))
                },
                ph(Subtitle, 1, "Subtitle 2", Rect::new(1_371_600, 3_886_200, 6_400_800, 1_752_600)),
            ],
        },
        LayoutSpec {
            name: "Title and Content",
            kind: "obj",
            placeholders: vec![
                title("Title 1", TITLE_BOUNDS),
                ph(Object, 1, "Content Placeholder 2", BODY_BOUNDS),
            ],
        },
        LayoutSpec {
            name: "Section Header",
            kind: "secHead",
            placeholders: vec![
                title("Title 1", Rect::new(722_313, 4_406_900, 7_772_400, 1_362_075)),
                ph(Body, 1, "Text Placeholder 2", Rect::new(722_313, 2_906_713, 7_772_400, 1_500_187)),
            ],
        },
        LayoutSpec {
            name: "Two Content",
            kind: "twoObj",
            placeholders: vec![
                title("Title 1", TITLE_BOUNDS),
                ph(Object, 1, "Content Placeholder 2", Rect::new(457_200, 1_600_200, 4_038_600, 4_525_963)),
                ph(Object, 2, "Content Placeholder 3", Rect::new(4_648_200, 1_600_200, 4_038_600, 4_525_963)),
            ],
        },
        LayoutSpec {
            name: "Comparison",
            kind: "twoTxTwoObj",
            placeholders: vec![
                title("Title 1", TITLE_BOUNDS),
                ph(Body, 1, "Text Placeholder 2", Rect::new(457_200, 1_535_113, 4_040_188, 639_762)),
                ph(Object, 2, "Content Placeholder 3", Rect::new(457_200, 2_174_875, 4_040_188, 3_951_288)),
                ph(Body, 3, "Text Placeholder 4", Rect::new(4_645_025, 1_535_113, 4_041_775, 639_762)),
                ph(Object, 4, "Content Placeholder 5", Rect::new(4_645_025, 2_174_875, 4_041_775, 3_951_288)),
            ],
        },
        LayoutSpec {
            name: "Title Only",
            kind: "titleOnly",
            placeholders: vec![title("Title 1", TITLE_BOUNDS)],
        },
        LayoutSpec {
            name: "Blank",
            kind: "blank",
            placeholders: Vec::new(),
        },
        LayoutSpec {
            name: "Content with Caption",
            kind: "objTx",
            placeholders: vec![
                title("Title 1", Rect::new(457_200, 273_050, 3_008_313, 1_162_050)),
                ph(Object, 1, "Content Placeholder 2", Rect::new(3_575_050, 273_050, 5_111_750, 5_853_113)),
                ph(Body, 2, "Text Placeholder 3", Rect::new(457_200, 1_435_100, 3_008_313, 4_691_063)),
            ],
        },
        LayoutSpec {
            name: "Picture with Caption",
            kind: "picTx",
            placeholders: vec![
                title("Title 1", Rect::new(1_792_288, 4_800_600, 5_486_400, 566_738)),
                ph(Picture, 1, "Picture Placeholder 2", Rect::new(1_792_288, 612_775, 5_486_400, 4_114_800)),
                ph(Body, 2, "Text Placeholder 3", Rect::new(1_792_288, 5_367_338, 5_486_400, 804_862)),
            ],
        },
        LayoutSpec {
            name: "Title and Vertical Text",
            kind: "vertTx",
            placeholders: vec![
                title("Title 1", TITLE_BOUNDS),
                vertical(ph(Body, 1, "Vertical Text Placeholder 2", BODY_BOUNDS)),
            ],
        },
        LayoutSpec {
            name: "Vertical Title and Text",
            kind: "vertTitleAndTx",
            placeholders: vec![
                vertical(title("Vertical Title 1", Rect::new(6_629_400, 274_638, 2_057_400, 5_851_525))),
                vertical(ph(Body, 1, "Vertical Text Placeholder 2", Rect::new(457_200, 274_638, 6_019_800, 5_851_525))),
            ],
        },
    ]
}
