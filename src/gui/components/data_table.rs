// src/gui/components/data_table.rs
//
// Draws the summary table for the active tab. Headers sort on click,
// numeric columns center, the parse column is colored by percentile
// band, and the amount/r-metric columns get a value bar painted behind
// the cell (scaled to the column maximum).

use eframe::egui::{self, Align, CursorIcon, Layout, RichText, Sense, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::core::sanitize::parse_number;
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let page = app.current_page();
    let kind = app.current_page_kind();

    // Tables are a handful of rows; clone so header clicks can mutate app.
    let default_headers = || page.default_headers().iter().map(|s| s!(*s)).collect();
    let (headers, mut rows): (Vec<String>, Vec<Vec<String>>) = match app.current_summary() {
        Some(ds) => (
            ds.headers.clone().unwrap_or_else(default_headers),
            ds.rows.clone(),
        ),
        None => (default_headers(), Vec::new()),
    };

    let sort_state = app.sort.get(&kind).copied();
    if let Some((col, desc)) = sort_state {
        crate::gui::app::sort_rows(&mut rows, col, desc);
    }
    let cols = headers.len();

    let non_numeric = page.non_numeric_columns();
    let numeric_cols: Vec<bool> = (0..cols).map(|ci| !non_numeric.contains(&ci)).collect();

    // Column maxima for the value bars.
    let bar_cols = page.bar_columns();
    let bar_max: Vec<Option<f64>> = (0..cols)
        .map(|ci| {
            if !bar_cols.contains(&ci) { return None; }
            rows.iter()
                .filter_map(|r| r.get(ci).and_then(|c| parse_number(c)))
                .fold(None, |m: Option<f64>, v| Some(m.map_or(v, |x| x.max(v))))
        })
        .collect();

    let mut clicked_col: Option<usize> = None;

    let widths = page.preferred_column_widths();

    let avail_h = ui.available_height();
    egui::ScrollArea::new([true, false])
        .id_salt("summary_table_hscroll")
        .min_scrolled_height(avail_h)
        .max_height(avail_h)
        .show(ui, |ui| {
            let mut table = TableBuilder::new(ui)
                .striped(true)
                .min_scrolled_height(0.0)
                .id_salt(("summary_table", kind));
            for ci in 0..cols {
                let w = widths.get(ci).copied().unwrap_or(80) as f32;
                table = table.column(Column::initial(w).resizable(true).clip(true).at_least(20.0));
            }

            table
                .header(24.0, |mut header| {
                    for ci in 0..cols {
                        header.col(|ui| {
                            ui.scope(|ui| {
                                ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);

                                let mut label = headers.get(ci).cloned()
                                    .unwrap_or_else(|| format!("Col {}", ci + 1));
                                if let Some((sc, desc)) = sort_state {
                                    if sc == ci {
                                        label.push(if desc { '⏷' } else { '⏶' });
                                    }
                                }

                                let draw_label = |ui: &mut egui::Ui| {
                                    ui.add(egui::Label::new(RichText::new(&label).strong()).selectable(false));
                                };
                                if numeric_cols.get(ci).copied().unwrap_or(false) {
                                    ui.centered_and_justified(draw_label);
                                } else {
                                    ui.with_layout(Layout::left_to_right(Align::Center), draw_label);
                                }

                                let rect = ui.max_rect();
                                let id = ui.id().with("colhdr").with(kind).with(ci as u64);
                                let resp = ui.interact(rect, id, Sense::click());
                                if resp.hovered() {
                                    ui.output_mut(|o| o.cursor_icon = CursorIcon::PointingHand);
                                }
                                if resp.clicked() {
                                    clicked_col = Some(ci);
                                }
                            });
                        });
                    }
                })
                .body(|body| {
                    body.rows(20.0, rows.len(), |mut row| {
                        let row_idx = row.index();
                        let Some(data) = rows.get(row_idx) else { return };

                        for ci in 0..cols {
                            let cell_opt = data.get(ci);
                            row.col(|ui| {
                                ui.scope(|ui| {
                                    ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                                    let Some(cell) = cell_opt else { return };

                                    // value bar behind the text
                                    if let Some(Some(max)) = bar_max.get(ci) {
                                        if *max > 0.0 {
                                            if let Some(v) = parse_number(cell) {
                                                let rect = ui.max_rect();
                                                let frac = (v / max).clamp(0.0, 1.0) as f32;
                                                let mut bar = rect;
                                                bar.set_width(rect.width() * frac);
                                                let fill = page.bar_color().linear_multiply(0.35);
                                                ui.painter().rect_filled(bar, 2.0, fill);
                                            }
                                        }
                                    }

                                    let mut rt = RichText::new(cell);
                                    if let Some(color) = page.cell_color(ci, cell) {
                                        rt = rt.color(color).strong();
                                    }
                                    if numeric_cols.get(ci).copied().unwrap_or(false) {
                                        ui.centered_and_justified(|ui| { ui.label(rt); });
                                    } else {
                                        ui.with_layout(Layout::left_to_right(Align::Center), |ui| { ui.label(rt); });
                                    }
                                });
                            });
                        }
                    });
                });
        });

    if let Some(ci) = clicked_col {
        app.sort_by(ci);
    }
}
