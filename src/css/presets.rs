use once_cell::sync::Lazy;

use super::{CssItemDefinition, CssItemGroup, CssThemeDefinition, legend_item, popover_item};

const NO_CSS_LIB_CLASS: &str = "ods-charts-no-css-lib";

fn classes(names: &[&str]) -> CssItemDefinition {
    CssItemDefinition::new().with_classes(names.iter().copied())
}

fn color_swatch() -> CssItemDefinition {
    classes(&["d-block", "position-relative"])
        .with_style("width", "10px")
        .with_style("height", "10px")
}

pub(super) static NONE: Lazy<CssThemeDefinition> = Lazy::new(|| CssThemeDefinition {
    legends: CssItemGroup::new().with_item(legend_item::HOLDER, classes(&[NO_CSS_LIB_CLASS])),
    popover: CssItemGroup::new()
        .with_item(popover_item::HOLDER, classes(&[NO_CSS_LIB_CLASS]))
        .with_item(popover_item::POPOVER, classes(&[NO_CSS_LIB_CLASS]))
        .with_item(popover_item::BODY_CONTENT, classes(&[NO_CSS_LIB_CLASS]))
        .with_item(popover_item::LINE, classes(&[NO_CSS_LIB_CLASS])),
});

pub(super) static BOOSTED5: Lazy<CssThemeDefinition> = Lazy::new(|| CssThemeDefinition {
    legends: CssItemGroup::new()
        .with_item(legend_item::HOLDER, classes(&["ps-3", "pt-2"]))
        .with_item(
            legend_item::CONTAINER,
            classes(&["d-flex", "flex-wrap", "justify-content-start"]),
        )
        .with_item(
            legend_item::LINK,
            classes(&["mx-3", "pb-2", "text-decoration-none"]),
        )
        .with_item(legend_item::LINK_OPACITY, classes(&["opacity-25"]))
        .with_item(
            legend_item::COLOR_HOLDER,
            classes(&["d-inline-block", "border", "border-1"]),
        )
        .with_item(legend_item::COLOR, color_swatch())
        .with_item(legend_item::LABEL, CssItemDefinition::new()),
    popover: CssItemGroup::new()
        .with_item(popover_item::LINE, classes(&["text-nowrap"]))
        .with_item(
            popover_item::COLOR_HOLDER,
            classes(&["d-inline-block", "border", "border-1"]),
        )
        .with_item(popover_item::COLOR, color_swatch()),
});

pub(super) static BOOSTED4: Lazy<CssThemeDefinition> = Lazy::new(|| {
    let bordered_holder =
        classes(&["d-inline-block", "border"]).with_style("border-width", "0.10625rem!important");
    CssThemeDefinition {
        legends: CssItemGroup::new()
            .with_item(legend_item::HOLDER, classes(&["pl-3", "pt-2"]))
            .with_item(
                legend_item::CONTAINER,
                classes(&["d-flex", "flex-wrap", "justify-content-start"]),
            )
            .with_item(
                legend_item::LINK,
                classes(&["mx-3", "pb-2", "text-decoration-none"]).with_style("opacity", "1"),
            )
            .with_item(
                legend_item::LINK_OPACITY,
                classes(&["opacity-25"]).with_style("opacity", ".25"),
            )
            .with_item(legend_item::COLOR_HOLDER, bordered_holder.clone())
            .with_item(legend_item::COLOR, color_swatch())
            .with_item(legend_item::LABEL, CssItemDefinition::new()),
        popover: CssItemGroup::new()
            .with_item(popover_item::COLOR_HOLDER, bordered_holder)
            .with_item(popover_item::COLOR, color_swatch()),
    }
});

pub(super) static CUSTOM: Lazy<CssThemeDefinition> = Lazy::new(CssThemeDefinition::default);
