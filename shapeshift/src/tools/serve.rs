use anyhow::Result;
use shapeshift::{config::Config, server::ConvertServer};
use std::path::PathBuf;
use tokio::time::{Duration, sleep};

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true, verbatim_doc_comment)]
pub struct Subcommand {
	/// Path to a configuration file (YAML format) to configure the server and CORS.
	/// Environment variables (BIND, PORT) override the file,
	/// command line arguments override both.
	#[arg(short = 'c', long, value_name = "FILE", display_order = 0, verbatim_doc_comment)]
	pub config: Option<PathBuf>,

	/// Serve via socket ip. Default: 127.0.0.1
	#[arg(short = 'i', long, display_order = 0)]
	pub ip: Option<String>,

	/// Serve via port. Default: 5000
	#[arg(short, long, display_order = 0)]
	pub port: Option<u16>,

	/// Reject uploads larger than this. Default: 10485760 (10 MiB)
	#[arg(long, value_name = "BYTES", display_order = 1)]
	pub max_upload_bytes: Option<usize>,

	/// Shutdown server automatically after x milliseconds.
	#[arg(long, display_order = 4)]
	pub auto_shutdown: Option<u64>,
}

#[tokio::main]
pub async fn run(arguments: &Subcommand) -> Result<()> {
	let mut config = if let Some(config_path) = &arguments.config {
		Config::from_path(config_path)?
	} else {
		Config::default()
	};

	config.server.override_from_env(|key| std::env::var(key).ok())?;
	config.server.override_optional_ip(&arguments.ip);
	config.server.override_optional_port(&arguments.port);
	config.server.override_optional_max_upload_bytes(&arguments.max_upload_bytes);

	let mut server = ConvertServer::from_config(config);
	server.start().await?;

	if let Some(milliseconds) = arguments.auto_shutdown {
		sleep(Duration::from_millis(milliseconds)).await;
	} else {
		loop {
			sleep(Duration::from_secs(60)).await;
		}
	}

	server.stop().await;
	Ok(())
}
