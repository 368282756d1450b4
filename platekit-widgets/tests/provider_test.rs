//! Tests for the stylesheet factories

use std::fs;

use image::{Rgba, RgbaImage};
use platekit_theme::config::StyleConfig;
use platekit_theme::font::DEFAULT_FAMILY;
use platekit_theme::icon::Icon;
use platekit_widgets::border::RoundedBorder;
use platekit_widgets::provider::StyleProvider;
use platekit_widgets::text::GlyphPainter;
use platekit_widgets::widget::{HorizontalAlignment, VerticalAlignment, Widget};
use vello::kurbo::{Affine, Insets, Point, Rect, Size};
use vello::Scene;

fn provider_in(dir: &tempfile::TempDir) -> StyleProvider {
    StyleProvider::with_config(
        StyleConfig::new()
            .with_font_path(dir.path().join("FE-FONT.TTF"))
            .with_icon_path(dir.path().join("icon.png")),
    )
}

fn sample_icon(width: u32, height: u32) -> Icon {
    Icon::from_image(RgbaImage::from_pixel(width, height, Rgba([66, 110, 153, 255])))
}

#[test]
fn test_rounded_button_scenario() {
    let style = StyleProvider::new();
    let palette = style.palette();
    let button = style.create_btn_rounded("OK", palette.white, palette.black, 10.0);

    assert_eq!(button.text(), "OK");
    assert_eq!(button.foreground(), palette.black);
    assert_eq!(button.background(), palette.white);
    let border = button.border().expect("rounded button has a border");
    assert_eq!(border.insets(), Insets::new(12.0, 12.0, 10.0, 13.0));
    assert!(button.is_border_painted());
    assert_eq!(button.horizontal_alignment(), HorizontalAlignment::Center);
    assert_eq!(button.vertical_text_position(), VerticalAlignment::Center);
    assert_eq!(button.font().size(), 15.0);
}

#[test]
fn test_heading_scenario() {
    let style = StyleProvider::new();
    let label = style.create_lbl_h1("Title", style.palette().deep_sky_blue);

    assert_eq!(label.text(), "Title");
    assert!(label.font().is_bold());
    assert_eq!(label.font().size(), 26.0);
    assert_eq!(label.foreground(), style.palette().secondary());
}

#[test]
fn test_label_fonts() {
    let style = StyleProvider::new();
    let color = style.palette().black;
    let cases = [
        (style.create_lbl_h2("h2", color), true, 22.0),
        (style.create_lbl_h3("h3", color), true, 18.0),
        (style.create_lbl_h4("h4", color), true, 12.0),
        (style.create_lbl_p("p", color), false, 16.0),
        (style.create_lbl_p2("p2", color), false, 12.0),
        (style.create_lbl_calendar("31", color), true, 36.0),
    ];
    for (label, bold, size) in cases {
        assert_eq!(label.font().is_bold(), bold, "{}", label.text());
        assert_eq!(label.font().size(), size, "{}", label.text());
        assert_eq!(label.font().family(), DEFAULT_FAMILY);
    }
}

#[test]
fn test_border_insets_for_any_radius() {
    for r in 0..64 {
        let r = r as f64;
        let insets = RoundedBorder::new(r).insets();
        assert_eq!((insets.y0, insets.x0, insets.y1, insets.x1), (r + 2.0, r + 2.0, r + 3.0, r));
    }
}

#[test]
fn test_plate_font_falls_back_and_is_cached() {
    let dir = tempfile::tempdir().unwrap();
    let style = provider_in(&dir);

    let label = style.create_lbl_plate("AB-123-C", style.palette().black);
    assert_eq!(label.font().size(), 24.0);
    assert!(label.font().is_bold());
    assert_eq!(label.font().family(), DEFAULT_FAMILY);

    // A file appearing afterwards is never picked up.
    fs::write(dir.path().join("FE-FONT.TTF"), b"garbage").unwrap();
    let field = style.create_plate_field_rounded("AB-123-C", style.palette().white, style.palette().black, 8);
    assert_eq!(field.font(), label.font());
    assert!(std::ptr::eq(style.display_font(), style.display_font()));
}

#[test]
fn test_plate_font_loads_and_paints_glyphs() {
    let font_path = concat!(env!("CARGO_MANIFEST_DIR"), "/../platekit-theme/tests/fonts/DejaVuSansMono.ttf");
    let dir = tempfile::tempdir().unwrap();
    let style = StyleProvider::with_config(
        StyleConfig::new()
            .with_font_path(font_path)
            .with_icon_path(dir.path().join("icon.png")),
    );

    let plate = style.display_font();
    assert_eq!(plate.family(), "DejaVu Sans Mono");
    assert!(plate.is_bold());
    assert_eq!(plate.size(), 24.0);
    assert!(plate.data().is_some());

    let mut label = style.create_lbl_plate("AB-123", style.palette().black);
    assert_eq!(label.font(), plate);
    label.set_bounds(Rect::new(0.0, 0.0, 200.0, 40.0));

    let mut scene = Scene::new();
    label.render(&mut scene, Affine::IDENTITY, &mut GlyphPainter::new());
    assert_eq!(scene.encoding().resources.glyph_runs.len(), 1);
}

#[test]
fn test_icon_factories_scale_exactly() {
    let style = StyleProvider::new();
    let icon = sample_icon(512, 300);

    let label = style.create_lbl_icon_only(&icon, 24, 24);
    let scaled = label.icon().unwrap();
    assert_eq!((scaled.width(), scaled.height()), (24, 24));

    let button = style.create_btn_icon_only(&icon, 40, 10);
    let scaled = button.icon().unwrap();
    assert_eq!((scaled.width(), scaled.height()), (40, 10));
    assert!(!button.is_focusable());
    assert!(!button.is_content_area_filled());
    assert!(!button.is_border_painted());
}

#[test]
fn test_sample_icon_is_loaded_eagerly() {
    let dir = tempfile::tempdir().unwrap();
    sample_icon(16, 8).pixels().save(dir.path().join("icon.png")).unwrap();

    let style = provider_in(&dir);
    assert_eq!((style.icon().width(), style.icon().height()), (16, 8));
}

#[test]
fn test_missing_sample_icon_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    let style = provider_in(&dir);
    assert!(style.icon().is_empty());
}

#[test]
fn test_text_only_button_is_flat() {
    let style = StyleProvider::new();
    let button = style.create_btn_txt_only("Cancel", style.palette().red);

    assert_eq!(button.text(), "Cancel");
    assert_eq!(button.foreground(), style.palette().error());
    assert!(button.font().is_bold());
    assert_eq!(button.font().size(), 15.0);
    assert!(!button.is_opaque());
    assert!(!button.is_content_area_filled());
    assert!(!button.is_border_painted());
    assert!(!button.is_focusable());
}

#[test]
fn test_rounded_combo_box() {
    let style = StyleProvider::new();
    let combo = style.create_cmb_rounded(style.palette().white, style.palette().gray, 8.0);

    assert!(combo.items().is_empty());
    assert_eq!(combo.background(), style.palette().white);
    assert_eq!(combo.foreground(), style.palette().gray);
    assert_eq!(combo.font().size(), 14.0);
    assert!(combo.is_lightweight_popup());
    assert_eq!(combo.border().unwrap().radius(), 8.0);
}

#[test]
fn test_rounded_fields() {
    let style = StyleProvider::new();
    let palette = style.palette();

    let text = style.create_txt_rounded("John", palette.light_gray, palette.pickled_bluewood, 20);
    assert_eq!(text.text(), "John");
    assert_eq!(text.columns(), 20);
    assert_eq!(text.background(), palette.light_gray);
    assert_eq!(text.foreground(), palette.pickled_bluewood);
    assert_eq!(text.font().size(), 16.0);
    assert!(!text.is_opaque());

    let password = style.create_pwd_rounded(palette.light_gray, palette.pickled_bluewood, 20);
    assert_eq!(password.password(), "");
    assert_eq!(password.columns(), 20);
    assert!(!password.is_opaque());
}

#[test]
fn test_rounded_field_hit_testing() {
    let style = StyleProvider::new();
    let mut field = style.create_txt_rounded("", style.palette().white, style.palette().black, 10);
    field.set_bounds(Rect::new(100.0, 100.0, 260.0, 132.0));

    assert!(!field.contains(Point::new(0.0, 0.0)));
    assert!(field.contains(Point::new(80.0, 16.0)));

    field.set_bounds(Rect::new(100.0, 100.0, 500.0, 200.0));
    assert!(field.contains(Point::new(300.0, 80.0)));
    assert_eq!(
        field.field().shape_cache().cached().unwrap().rect(),
        Rect::new(0.0, 0.0, 399.0, 99.0)
    );
}

#[test]
fn test_rounded_panel() {
    let style = StyleProvider::new();
    let mut panel = style.create_pnl_rounded(400.0, 250.0, style.palette().white, style.palette().light_gray);
    let painter = GlyphPainter::new();

    assert_eq!(panel.preferred_size(&painter), Size::new(400.0, 250.0));
    assert_eq!(panel.panel_color(), style.palette().white);
    assert_eq!(panel.background(), style.palette().light_gray);

    panel.add(style.create_lbl_h3("Reservations", style.palette().black));
    let mut scene = Scene::new();
    panel.render(&mut scene, Affine::IDENTITY, &mut GlyphPainter::new());
    assert!(!scene.encoding().is_empty());
}

#[test]
fn test_padding() {
    let style = StyleProvider::new();
    assert_eq!(style.padding(), Insets::new(20.0, 10.0, 20.0, 10.0));
}
