use crate::physics::{FieldArrow, PointCharge};
use crate::sandbox::{Polarity, Rect, SandboxState};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

const BACKGROUND: &str = "#fbfaf7";
const TRAY_FILL: &str = "#ebe7df";
const TRAY_EDGE: &str = "#b9b2a5";
const POSITIVE: &str = "#d1495b";
const NEGATIVE: &str = "#2e86ab";
const ARROW: &str = "#7a7a7a";
const TEXT: &str = "#2b2b2b";

const CHARGE_RADIUS: f64 = 14.0;
const ARROW_HALF_LENGTH: f64 = 8.0;
const ARROW_HEAD: f64 = 4.0;

/// Label drawn on a charge disc: signed magnitude in nC.
pub fn charge_label(q: f64) -> String {
    if q.is_nan() {
        "NaN".to_string()
    } else if q > 0.0 {
        format!("+{}", trim_number(q))
    } else if q < 0.0 {
        format!("\u{2212}{}", trim_number(-q))
    } else {
        "0".to_string()
    }
}

/// Up to two decimals, trailing zeros dropped
fn trim_number(v: f64) -> String {
    if v.is_infinite() {
        return "\u{221e}".to_string();
    }
    let s = format!("{:.2}", v);
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

pub fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, String> {
    canvas
        .get_context("2d")
        .map_err(|e| format!("{e:?}"))?
        .ok_or("no 2d context")?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| "not a 2d context".to_string())
}

/// Repaint the whole sandbox from its current state.
pub fn draw(ctx: &CanvasRenderingContext2d, state: &SandboxState) {
    let (w, h) = state.size();
    ctx.set_fill_style_str(BACKGROUND);
    ctx.fill_rect(0.0, 0.0, w, h);

    if state.field_overlay() {
        for arrow in state.field_arrows() {
            draw_arrow(ctx, &arrow);
        }
    }

    draw_tray(ctx, state);

    for charge in state.charges() {
        draw_charge(ctx, charge, 1.0);
    }
    if let Some(pending) = state.pending_charge() {
        draw_charge(ctx, pending, 0.7);
    }

    ctx.set_fill_style_str(TEXT);
    ctx.set_font("12px sans-serif");
    ctx.set_text_align("right");
    ctx.set_text_baseline("top");
    let hint = if state.field_overlay() {
        "Space: hide field"
    } else {
        "Space: show field"
    };
    ctx.fill_text(hint, w - 10.0, 10.0).ok();
}

fn draw_arrow(ctx: &CanvasRenderingContext2d, arrow: &FieldArrow) {
    // NaN/∞ arrows have no direction to show
    if !arrow.is_finite() || (arrow.fx == 0.0 && arrow.fy == 0.0) {
        return;
    }
    ctx.save();
    ctx.translate(arrow.x, arrow.y).ok();
    ctx.rotate(arrow.angle).ok();
    ctx.set_stroke_style_str(ARROW);
    ctx.set_line_width(1.2);
    ctx.begin_path();
    ctx.move_to(-ARROW_HALF_LENGTH, 0.0);
    ctx.line_to(ARROW_HALF_LENGTH, 0.0);
    ctx.move_to(ARROW_HALF_LENGTH - ARROW_HEAD, -ARROW_HEAD * 0.75);
    ctx.line_to(ARROW_HALF_LENGTH, 0.0);
    ctx.line_to(ARROW_HALF_LENGTH - ARROW_HEAD, ARROW_HEAD * 0.75);
    ctx.stroke();
    ctx.restore();
}

fn draw_tray(ctx: &CanvasRenderingContext2d, state: &SandboxState) {
    let layout = state.layout();
    let tray = layout.tray;
    ctx.set_fill_style_str(TRAY_FILL);
    ctx.fill_rect(tray.x, tray.y, tray.w, tray.h);
    ctx.set_stroke_style_str(TRAY_EDGE);
    ctx.set_line_width(1.0);
    ctx.begin_path();
    ctx.move_to(tray.x, tray.y);
    ctx.line_to(tray.x + tray.w, tray.y);
    ctx.stroke();

    draw_icon(ctx, &layout.positive_icon, Polarity::Positive);
    draw_icon(ctx, &layout.negative_icon, Polarity::Negative);

    ctx.set_fill_style_str(TEXT);
    ctx.set_font("12px sans-serif");
    ctx.set_text_align("right");
    ctx.set_text_baseline("middle");
    ctx.fill_text("Drag charges here to delete", tray.x + tray.w - 12.0, tray.y + tray.h / 2.0)
        .ok();
}

fn draw_icon(ctx: &CanvasRenderingContext2d, icon: &Rect, polarity: Polarity) {
    let (cx, cy) = icon.center();
    let color = match polarity {
        Polarity::Positive => POSITIVE,
        Polarity::Negative => NEGATIVE,
    };
    disc(ctx, cx, cy, icon.w / 2.0, color);
    ctx.set_fill_style_str("#ffffff");
    ctx.set_font("bold 22px sans-serif");
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");
    ctx.fill_text(polarity.symbol(), cx, cy).ok();
}

fn draw_charge(ctx: &CanvasRenderingContext2d, charge: &PointCharge, alpha: f64) {
    let color = if charge.q < 0.0 { NEGATIVE } else { POSITIVE };
    ctx.set_global_alpha(alpha);
    disc(ctx, charge.x, charge.y, CHARGE_RADIUS, color);
    ctx.set_fill_style_str("#ffffff");
    ctx.set_font("bold 11px sans-serif");
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");
    ctx.fill_text(&charge_label(charge.q), charge.x, charge.y).ok();
    ctx.set_global_alpha(1.0);
}

fn disc(ctx: &CanvasRenderingContext2d, x: f64, y: f64, r: f64, color: &str) {
    ctx.set_fill_style_str(color);
    ctx.begin_path();
    ctx.arc(x, y, r, 0.0, std::f64::consts::TAU).ok();
    ctx.fill();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_charge_labels() {
        assert_eq!(charge_label(3.0), "+3");
        assert_eq!(charge_label(-2.5), "\u{2212}2.5");
        assert_eq!(charge_label(0.126), "+0.13");
        assert_eq!(charge_label(0.0), "0");
        assert_eq!(charge_label(f64::NAN), "NaN");
        assert_eq!(charge_label(f64::INFINITY), "+\u{221e}");
    }
}
