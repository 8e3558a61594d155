use std::fs;

use pretty_assertions::assert_eq;
use svg2jsx_core::{check_syntax, ConversionOptions, OutputFormat, PropFlags};
use svg2jsx_svg::{NoopOptimizer, Pipeline, SvgError, SvgSource};
use tempfile::tempdir;

const INKSCAPE_EXPORT: &str = r##"<?xml version="1.0" encoding="UTF-8" standalone="no"?>
<!-- Created with Inkscape (http://www.inkscape.org/) -->
<svg
   width="24"
   height="24"
   viewBox="0 0 24 24"
   version="1.1"
   xmlns:inkscape="http://www.inkscape.org/namespaces/inkscape"
   xmlns:sodipodi="http://sodipodi.sourceforge.net/DTD/sodipodi-0.dtd"
   xmlns:xlink="http://www.w3.org/1999/xlink"
   xmlns="http://www.w3.org/2000/svg"
   xmlns:svg="http://www.w3.org/2000/svg"
   sodipodi:docname="bell.svg">
  <sodipodi:namedview id="namedview7" pagecolor="#ffffff" inkscape:zoom="22.6" />
  <metadata>
    <rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#" />
  </metadata>
  <defs>
    <linearGradient id="g">
      <stop offset="0" stop-color="#000" stop-opacity="1" />
    </linearGradient>
  </defs>
  <g inkscape:label="Layer 1" inkscape:groupmode="layer" class="layer">
    <path
       d="M12 22a2 2 0 0 0 2-2h-4a2 2 0 0 0 2 2z"
       fill="none"
       stroke="#333"
       stroke-width="2"
       stroke-linecap="round" />
    <use xlink:href="#g" />
  </g>
</svg>
"##;

#[test]
fn converts_editor_export() {
    let options = ConversionOptions::new("Bell")
        .with_format(OutputFormat::Typed)
        .with_props(PropFlags::all());

    let result = Pipeline::default()
        .run(&SvgSource::Inline(INKSCAPE_EXPORT.to_string()), &options)
        .unwrap();

    assert!(result.optimized);
    assert_eq!(
        result.source,
        r##"interface BellProps {
  width?: number | string;
  height?: number | string;
  className?: string;
  color?: string;
}

export function Bell({ width = 24, height = 24, className, color = "currentColor" }: BellProps) {
  return (
    <svg width={width} height={height} viewBox="0 0 24 24" version="1.1" xmlnsXlink="http://www.w3.org/1999/xlink">
      <defs>
        <lineargradient id="g">
          <stop offset="0" stopColor="#000" stopOpacity="1" />
        </lineargradient>
      </defs>
      <g className={className}>
        <path d="M12 22a2 2 0 0 0 2-2h-4a2 2 0 0 0 2 2z" fill={color} stroke={color} strokeWidth="2" strokeLinecap="round" />
        <use xlinkHref="#g" />
      </g>
    </svg>
  );
}
"##
    );
    check_syntax(&result.source, OutputFormat::Typed).unwrap();
}

#[test]
fn unoptimized_export_still_converts() {
    let options = ConversionOptions::new("Bell").with_format(OutputFormat::Untyped);

    let result = Pipeline::new(NoopOptimizer)
        .run(&SvgSource::Inline(INKSCAPE_EXPORT.to_string()), &options)
        .unwrap();

    assert!(result.source.contains("sodipodi:docname=\"bell.svg\""));
    assert!(!result.source.contains("xmlns=\""));
    assert!(!result.source.contains("xmlns:svg"));
    assert!(result.source.contains("export function Bell() {"));
}

#[test]
fn converts_file_source() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("dot.svg");
    fs::write(&path, r#"<svg viewBox="0 0 2 2"><circle cx="1" cy="1" r="1"/></svg>"#).unwrap();

    let result = Pipeline::default()
        .run(
            &SvgSource::External(path.display().to_string()),
            &ConversionOptions::new("Dot").with_format(OutputFormat::Untyped),
        )
        .unwrap();

    assert_eq!(
        result.source,
        r#"export function Dot() {
  return (
    <svg viewBox="0 0 2 2">
      <circle cx="1" cy="1" r="1" />
    </svg>
  );
}
"#
    );
    check_syntax(&result.source, OutputFormat::Untyped).unwrap();
}

#[test]
fn missing_file_reports_uri() {
    let result = Pipeline::default().run(
        &SvgSource::External("missing/icon.svg".to_string()),
        &ConversionOptions::new("Icon"),
    );

    match result {
        Err(SvgError::Fetch { uri, .. }) => assert_eq!(uri, "missing/icon.svg"),
        other => panic!("expected fetch error, got {other:?}"),
    }
}
