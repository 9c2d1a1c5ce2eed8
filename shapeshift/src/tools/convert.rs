use anyhow::{Context, Result};
use shapeshift::{
	Blob, ConversionKind,
	router::{ConversionRequest, route},
};
use std::path::{Path, PathBuf};

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// supported formats: *.json, *.yaml, *.yml, *.png, *.jpg, *.jpeg, *.webp, *.svg
	#[arg()]
	input_file: PathBuf,

	/// supported formats: *.json, *.yaml, *.yml, *.png, *.jpg, *.jpeg, *.webp
	#[arg()]
	output_file: PathBuf,

	/// how to convert, instead of guessing from the input extension
	#[arg(long, short, value_enum, display_order = 1)]
	kind: Option<ConversionKind>,

	/// source image format, overrides the input extension
	#[arg(long, value_name = "FORMAT", display_order = 2)]
	from: Option<String>,

	/// target format, defaults to the output extension
	#[arg(long, value_name = "FORMAT", display_order = 2)]
	to: Option<String>,
}

fn extension_of(path: &Path) -> Option<String> {
	path.extension().and_then(|e| e.to_str()).map(|e| e.to_string())
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	eprintln!("convert from {:?} to {:?}", arguments.input_file, arguments.output_file);

	let target_format = match &arguments.to {
		Some(format) => format.clone(),
		None => extension_of(&arguments.output_file).with_context(|| {
			format!(
				"can not derive the target format from {:?}, use --to",
				arguments.output_file
			)
		})?,
	};

	let input = Blob::load_from_file(&arguments.input_file)?;
	let filename = arguments
		.input_file
		.file_name()
		.map(|name| name.to_string_lossy().to_string())
		.unwrap_or_default();

	let request = ConversionRequest::new(&filename, input, &target_format)
		.with_kind(arguments.kind)
		.with_source_format(arguments.from.clone());
	let output = route(&request).with_context(|| format!("converting {:?}", arguments.input_file))?;

	log::debug!("writing {} bytes of {}", output.blob.len(), output.mime_type());
	output.blob.save_to_file(&arguments.output_file)
}
