use super::{cors::build_cors_layer, routes::build_router};
use crate::config::{Config, CorsConfig, ServerConfig};
use anyhow::{Context, Result};
use axum::Router;
use tokio::{net::TcpListener, sync::oneshot::Sender, task::JoinHandle};

pub struct ConvertServer {
	ip: String,
	port: u16,
	max_upload_bytes: usize,
	cors: CorsConfig,
	exit_signal: Option<Sender<()>>,
	join_handle: Option<JoinHandle<()>>,
}

impl ConvertServer {
	pub fn new(server: &ServerConfig, cors: CorsConfig) -> ConvertServer {
		ConvertServer {
			ip: server.ip_or_default().to_string(),
			port: server.port_or_default(),
			max_upload_bytes: server.max_upload_bytes_or_default(),
			cors,
			exit_signal: None,
			join_handle: None,
		}
	}

	pub fn from_config(config: Config) -> ConvertServer {
		ConvertServer::new(&config.server, config.cors)
	}

	/// The complete application: routes, upload limit and CORS.
	pub fn build_app(&self) -> Result<Router> {
		Ok(build_router(self.max_upload_bytes).layer(build_cors_layer(&self.cors)?))
	}

	/// Binds the listener and serves in the background until [`ConvertServer::stop`].
	///
	/// Port `0` picks a free port; [`ConvertServer::get_port`] reports it afterwards.
	pub async fn start(&mut self) -> Result<()> {
		if self.exit_signal.is_some() {
			self.stop().await;
		}

		log::info!("starting server");
		let app = self.build_app()?;

		let addr = format!("{}:{}", self.ip, self.port);
		let listener = TcpListener::bind(&addr)
			.await
			.with_context(|| format!("binding to {addr}"))?;
		self.port = listener.local_addr()?.port();
		eprintln!("server starts listening on {}:{}", self.ip, self.port);

		let (tx, rx) = tokio::sync::oneshot::channel::<()>();
		let handle = tokio::spawn(async move {
			let result = axum::serve(listener, app.into_make_service())
				.with_graceful_shutdown(async {
					rx.await.ok();
				})
				.await;
			if let Err(err) = result {
				log::error!("server stopped with an error: {err}");
			}
		});

		self.exit_signal = Some(tx);
		self.join_handle = Some(handle);
		Ok(())
	}

	/// Signals shutdown and waits for in-flight requests to finish.
	pub async fn stop(&mut self) {
		let Some(exit_signal) = self.exit_signal.take() else {
			return;
		};

		log::info!("stopping server");
		exit_signal.send(()).ok();

		if let Some(handle) = self.join_handle.take()
			&& let Err(err) = handle.await
		{
			log::error!("server task failed: {err}");
		}
	}

	pub fn get_port(&self) -> u16 {
		self.port
	}

	pub fn get_ip(&self) -> &str {
		&self.ip
	}
}
