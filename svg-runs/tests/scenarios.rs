//! End-to-end encoding scenarios over small hand-built images.

use image::{ImageBuffer, Rgba, RgbaImage};
use svg_runs::{encode, encode_svg, Element, EncodeOptions};

const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
const TEAL: Rgba<u8> = Rgba([0, 128, 128, 255]);
const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);
const CLEAR: Rgba<u8> = Rgba([0, 0, 0, 0]);

const HEADER_3X1: &str = "<svg viewBox='0 0 3 1' xmlns='http://www.w3.org/2000/svg'>";

fn image_from_rows(rows: &[&[Rgba<u8>]]) -> RgbaImage {
    let height = rows.len() as u32;
    let width = rows.first().map_or(0, |r| r.len()) as u32;
    RgbaImage::from_fn(width, height, |x, y| rows[y as usize][x as usize])
}

#[test]
fn test_solid_row_is_one_inline_rect() {
    let img = RgbaImage::from_pixel(3, 1, RED);
    let svg = encode_svg(&img, EncodeOptions::default());
    assert_eq!(
        svg,
        format!(
            "{HEADER_3X1}<defs></defs>\
             <rect width='3.2' height='1.1' x='0' y='0' fill='#ff0000'></rect></svg>"
        )
    );
}

#[test]
fn test_repeated_row_becomes_reference() {
    let img = image_from_rows(&[&[RED, RED, CLEAR], &[RED, RED, CLEAR]]);
    let svg = encode_svg(&img, EncodeOptions::default());
    assert_eq!(
        svg,
        "<svg viewBox='0 0 3 2' xmlns='http://www.w3.org/2000/svg'><defs>\
         <g id='0'><rect width='2.2' height='1.1' fill='#ff0000'></rect></g></defs>\
         <rect width='2.2' height='1.1' x='0' y='0' fill='#ff0000'></rect>\
         <use href='#0' x='0' y='1'></use></svg>"
    );
}

#[test]
fn test_transparent_image_has_empty_defs_and_body() {
    let img = RgbaImage::from_pixel(7, 5, CLEAR);
    assert_eq!(
        encode_svg(&img, EncodeOptions::default()),
        "<svg viewBox='0 0 7 5' xmlns='http://www.w3.org/2000/svg'><defs></defs></svg>"
    );
}

#[test]
fn test_run_width_tracks_length() {
    for n in 1..=12u32 {
        let img = RgbaImage::from_fn(n + 1, 1, |x, _| if x < n { TEAL } else { CLEAR });
        let doc = encode(&img, EncodeOptions::default());
        assert!(doc.definitions.is_empty());
        assert_eq!(doc.elements.len(), 1);
        let svg = doc.to_svg();
        let expected = format!("<rect width='{n}.2' height='1.1' x='0' y='0' fill='#008080'>");
        assert!(svg.contains(&expected), "{svg}");
    }
}

#[test]
fn test_all_black_region_emits_nothing() {
    let img = RgbaImage::from_pixel(4, 4, BLACK);
    let doc = encode(&img, EncodeOptions::default());
    assert!(doc.elements.is_empty());
    assert!(doc.definitions.is_empty());
    assert_eq!(doc.stats().suppressed_black, 4);
}

#[test]
fn test_k_occurrences_share_one_definition() {
    let k = 6;
    let img = RgbaImage::from_fn(3, k, |x, _| if x < 2 { TEAL } else { CLEAR });
    let doc = encode(&img, EncodeOptions::default());

    assert_eq!(doc.definitions.len(), 1);
    assert!(matches!(doc.elements[0], Element::Inline(_)));
    for (y, el) in doc.elements.iter().enumerate().skip(1) {
        assert_eq!(*el, Element::Reference { id: 0, x: 0, y: y as u32 });
    }
    let stats = doc.stats();
    assert_eq!((stats.inline, stats.references), (1, k as usize - 1));
}

#[test]
fn test_reference_ids_increase_with_promotion_time() {
    // row 0: red(1) teal(2) | row 1: teal(2) red(1) | row 2: red(1) teal(2)
    let img = image_from_rows(&[
        &[RED, TEAL, TEAL, CLEAR],
        &[TEAL, TEAL, RED, CLEAR],
        &[RED, TEAL, TEAL, CLEAR],
    ]);
    let doc = encode(&img, EncodeOptions::default());

    let ids: Vec<usize> = doc.definitions.iter().map(|d| d.id).collect();
    assert_eq!(ids, vec![0, 1]);
    // teal is seen again first (row 1, x 0), so it takes id 0
    assert_eq!(doc.definitions[0].signature.len, 2);
    assert_eq!(doc.definitions[1].signature.len, 1);
    assert_eq!(
        &doc.elements[2..],
        &[
            Element::Reference { id: 0, x: 0, y: 1 },
            Element::Reference { id: 1, x: 2, y: 1 },
            Element::Reference { id: 1, x: 0, y: 2 },
            Element::Reference { id: 0, x: 1, y: 2 },
        ]
    );
}

#[test]
fn test_runs_never_exceed_row_width() {
    let img = RgbaImage::from_pixel(5, 3, TEAL);
    let doc = encode(&img, EncodeOptions::default());
    assert_eq!(doc.stats().runs, 3);
    let svg = doc.to_svg();
    assert!(svg.contains("width='5.2'"));
    assert!(!svg.contains("width='10.2'"));
}

#[test]
fn test_sixteen_bit_channels_are_floored() {
    let img: ImageBuffer<Rgba<u16>, Vec<u16>> =
        ImageBuffer::from_pixel(1, 1, Rgba([0x12ff, 0x3400, 0xabcd, 0xffff]));
    let svg = encode_svg(&img, EncodeOptions::default());
    assert!(svg.contains("fill='#1234ab'"), "{svg}");
}

#[test]
fn test_custom_geometry_flows_into_every_element() {
    let img = image_from_rows(&[&[RED], &[RED]]);
    let opts = EncodeOptions {
        rect_height: 1.0,
        edge_margin: 0.0,
        ..EncodeOptions::default()
    };
    let svg = encode_svg(&img, opts);
    assert!(svg.contains("<g id='0'><rect width='1.0' height='1.0' fill='#ff0000'></rect></g>"));
    assert!(svg.contains("<rect width='1.0' height='1.0' x='0' y='0' fill='#ff0000'></rect>"));
}
