use dioxus::prelude::*;
use pretty_assertions::assert_eq;

use super::*;

fn render(app: fn() -> Element) -> String {
    let mut dom = VirtualDom::new(app);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

#[test]
fn badge_carries_variant_attribute() {
    fn app() -> Element {
        rsx! {
            Badge { variant: BadgeVariant::Destructive, "Finished" }
        }
    }
    let html = render(app);
    assert!(html.contains("data-style=\"destructive\""), "{html}");
    assert!(html.contains("Finished"));
}

#[test]
fn button_defaults_to_primary() {
    fn app() -> Element {
        rsx! {
            Button { "Save" }
        }
    }
    let html = render(app);
    assert!(html.contains("data-style=\"primary\""), "{html}");
}

#[test]
fn disabled_button_renders_disabled_attribute() {
    fn app() -> Element {
        rsx! {
            Button { disabled: true, "Save" }
        }
    }
    let html = render(app);
    assert!(html.contains("disabled"), "{html}");
}

#[test]
fn data_table_renders_header_and_rows() {
    fn app() -> Element {
        rsx! {
            DataTable {
                DataTableHeader {
                    DataTableColumn { "Name" }
                }
                DataTableBody {
                    DataTableRow {
                        DataTableCell { "Ada" }
                    }
                }
            }
        }
    }
    let html = render(app);
    assert!(html.contains("<thead>"));
    assert!(html.contains("<th>Name</th>"));
    assert!(html.contains("<td>Ada</td>"));
}

#[test]
fn closed_sheet_renders_nothing() {
    fn app() -> Element {
        rsx! {
            Sheet {
                open: false,
                on_close: move |_| {},
                SheetContent { "hidden" }
            }
        }
    }
    assert_eq!(render(app), "");
}

#[test]
fn open_sheet_renders_panel_on_requested_side() {
    fn app() -> Element {
        rsx! {
            Sheet {
                open: true,
                on_close: move |_| {},
                side: SheetSide::Right,
                SheetContent { "form here" }
            }
        }
    }
    let html = render(app);
    assert!(html.contains("data-side=\"right\""), "{html}");
    assert!(html.contains("form here"));
}

#[test]
fn detail_item_prefers_children_over_value() {
    fn app() -> Element {
        rsx! {
            DetailList {
                DetailItem { label: "Status", value: "ignored".to_string(),
                    Badge { "Ongoing" }
                }
            }
        }
    }
    let html = render(app);
    assert!(html.contains("Ongoing"));
    assert!(!html.contains("ignored"));
}
