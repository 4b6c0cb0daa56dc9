// Page assembly over a realistic graphviz-style CFG SVG.

use pagify_wasm::{pagify, titles, PageOptions, PagifyError};

const CFG_SVG: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="no"?>
<!DOCTYPE svg PUBLIC "-//W3C//DTD SVG 1.1//EN"
 "http://www.w3.org/Graphics/SVG/1.1/DTD/svg11.dtd">
<!-- Generated by graphviz version 2.43.0 (0) -->
<!-- Title: cfg Pages: 1 -->
<svg width="216pt" height="116pt" viewBox="0.00 0.00 216.00 116.00" xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink">
<g class="graph">
<g class="node">
<a xlink:title="0x0: PUSH1 0x80\n0x2: PUSH1 0x40\n0x4: MSTORE">
<ellipse fill="none" stroke="black" cx="108" cy="-90" rx="54" ry="18"/>
<text text-anchor="middle" x="108" y="-86.3">block_0x0</text>
</a>
</g>
</g>
</svg>"#;

#[test]
fn page_embeds_svg_without_prolog() {
    let page = pagify(CFG_SVG, &PageOptions::default()).expect("pagify should succeed");

    assert!(!page.contains("<?xml"), "XML declaration should be dropped");
    assert!(!page.contains("<!DOCTYPE"), "doctype should be dropped");
    assert!(page.contains("<svg width=\"216pt\""), "SVG markup should be inlined");
    assert!(page.contains("block_0x0"), "node labels should survive embedding");
}

#[test]
fn page_has_the_infobox_textarea() {
    let page = pagify(CFG_SVG, &PageOptions::default()).expect("pagify should succeed");

    assert!(
        page.contains("<textarea id=\"infobox\" disabled=true rows=\"40\" cols=\"100\">"),
        "page should carry the disabled infobox textarea with the default dimensions"
    );
    assert!(page.contains("textarea#infobox {"), "infobox should be pinned by the style block");
}

#[test]
fn page_has_node_hover_styles() {
    let page = pagify(CFG_SVG, &PageOptions::default()).expect("pagify should succeed");

    assert!(page.contains(".node:hover"));
    assert!(page.contains("cursor:pointer"));
}

#[test]
fn page_bootstraps_the_viewer_module() {
    let page = pagify(CFG_SVG, &PageOptions::default()).expect("pagify should succeed");

    assert!(page.contains("<script type=\"module\">"));
    assert!(page.contains("import init, { bind } from './pagify_wasm.js';"));
    assert!(page.contains("bind();"));
}

#[test]
fn options_override_dimensions_and_module_path() {
    let options = PageOptions {
        rows: 20,
        cols: 80,
        module_path: "/viewer/pagify_wasm.js".to_string(),
    };
    let page = pagify(CFG_SVG, &options).expect("pagify should succeed");

    assert!(page.contains("rows=\"20\" cols=\"80\""));
    assert!(page.contains("from '/viewer/pagify_wasm.js';"));
}

#[test]
fn title_escapes_are_embedded_verbatim() {
    // Escapes are decoded at click time by the viewer, never at page build.
    let page = pagify(CFG_SVG, &PageOptions::default()).expect("pagify should succeed");

    assert!(page.contains("0x0: PUSH1 0x80\\n0x2: PUSH1 0x40"));
}

#[test]
fn embedded_titles_decode_to_multiline_text() {
    let decoded = titles::decode("0x0: PUSH1 0x80\\n0x2: PUSH1 0x40\\n0x4: MSTORE");
    assert_eq!(decoded.lines().count(), 3);
    assert_eq!(decoded.lines().next(), Some("0x0: PUSH1 0x80"));
}

#[test]
fn non_xml_input_is_rejected() {
    let err = pagify("<svg width=", &PageOptions::default()).unwrap_err();
    assert!(matches!(err, PagifyError::InvalidSvg(_)));
}

#[test]
fn non_svg_documents_are_rejected() {
    let err = pagify("<graphml></graphml>", &PageOptions::default()).unwrap_err();
    match err {
        PagifyError::NotSvg(root) => assert_eq!(root, "graphml"),
        other => panic!("expected NotSvg, got: {}", other),
    }
}
