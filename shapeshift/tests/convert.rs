use predicates::str;
use pretty_assertions::assert_eq;
use shapeshift_core::ImageFormat;
use shapeshift_image::traits::*;
use std::fs;
use test_utilities::*;

#[test]
fn convert_requires_input_and_output() {
	shapeshift_cmd()
		.arg("convert")
		.assert()
		.failure()
		.code(2)
		.stdout(str::is_empty())
		.stderr(str::contains("Usage: shapeshift convert"));
}

#[test]
fn convert_json_to_yaml() {
	let (dir, input) = temp_input("people.json", r#"{"people": [{"name": "Zoë", "age": 7}], "ok": true}"#.as_bytes());
	let output = dir.path().join("people.yaml");

	shapeshift_cmd()
		.args(["convert", path_str(&input), path_str(&output)])
		.assert()
		.success()
		.stdout(str::is_empty())
		.stderr(str::contains("convert from"));

	assert_eq!(
		fs::read_to_string(&output).unwrap(),
		"people:\n- name: Zoë\n  age: 7\nok: true\n"
	);
}

#[test]
fn convert_yaml_to_json_by_flag() {
	let (dir, input) = temp_input("settings", b"retries: 3\nhosts: [a, b]\n");
	let output = dir.path().join("settings.out");

	shapeshift_cmd()
		.args(["convert", "--kind", "data", "--to", "json"])
		.args([path_str(&input), path_str(&output)])
		.assert()
		.success();

	assert_eq!(
		fs::read_to_string(&output).unwrap(),
		"{\n  \"retries\": 3,\n  \"hosts\": [\n    \"a\",\n    \"b\"\n  ]\n}\n"
	);
}

#[test]
fn convert_png_to_jpg_flattens_alpha() {
	let (dir, input) = temp_input("gradient.png", &test_image(ImageFormat::PNG));
	let output = dir.path().join("gradient.jpg");

	shapeshift_cmd()
		.args(["convert", path_str(&input), path_str(&output)])
		.assert()
		.success();

	let image = read_image(&output, ImageFormat::JPG);
	assert_eq!(image.describe(), "160x120 Rgb8");
	assert!(image.is_opaque());
}

#[test]
fn convert_png_to_webp_keeps_alpha() {
	let (dir, input) = temp_input("gradient.png", &test_image(ImageFormat::PNG));
	let output = dir.path().join("gradient.webp");

	shapeshift_cmd()
		.args(["convert", path_str(&input), path_str(&output)])
		.assert()
		.success();

	let image = read_image(&output, ImageFormat::WEBP);
	assert_eq!(image.describe(), "160x120 Rgba8");
	assert!(!image.is_opaque());
}

#[test]
fn convert_with_explicit_source_format() {
	let (dir, input) = temp_input("upload.bin", &test_image(ImageFormat::WEBP));
	let output = dir.path().join("upload.png");

	shapeshift_cmd()
		.args(["convert", "--kind", "image", "--from", "webp"])
		.args([path_str(&input), path_str(&output)])
		.assert()
		.success();

	assert_eq!(read_image(&output, ImageFormat::PNG).describe(), "160x120 Rgba8");
}

#[cfg(feature = "svg")]
#[test]
fn convert_svg_to_png() {
	let svg = br#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="16"><rect width="24" height="8" fill="red"/></svg>"#;
	let (dir, input) = temp_input("flag.svg", svg);
	let output = dir.path().join("flag.png");

	shapeshift_cmd()
		.args(["convert", path_str(&input), path_str(&output)])
		.assert()
		.success();

	let image = read_image(&output, ImageFormat::PNG);
	assert_eq!(image.describe(), "24x16 Rgba8");
	assert!(!image.is_opaque());
}

#[test]
fn convert_reports_parse_errors() {
	let (dir, input) = temp_input("broken.json", b"{\"a\": [1, 2");
	let output = dir.path().join("broken.yaml");

	shapeshift_cmd()
		.args(["convert", path_str(&input), path_str(&output)])
		.assert()
		.failure()
		.code(1)
		.stderr(str::contains("could not parse the input as JSON or YAML"));

	assert!(!output.exists());
}

#[test]
fn convert_reports_unsupported_targets() {
	let (dir, input) = temp_input("gradient.png", &test_image(ImageFormat::PNG));
	let output = dir.path().join("gradient.bmp");

	shapeshift_cmd()
		.args(["convert", path_str(&input), path_str(&output)])
		.assert()
		.failure()
		.code(1)
		.stderr(str::contains("unsupported image format 'bmp', use one of: png, jpg, webp"));
}

#[test]
fn convert_reports_missing_input() {
	shapeshift_cmd()
		.args(["convert", "/does/not/exist.json", "/tmp/out.yaml"])
		.assert()
		.failure()
		.code(1)
		.stderr(str::contains("reading \"/does/not/exist.json\""));
}
