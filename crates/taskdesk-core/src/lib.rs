pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod render;
pub mod session;

use std::ffi::OsString;
use std::io;

use anyhow::Context;
use clap::Parser;
use tracing::{
  debug,
  info
};

#[tracing::instrument(skip_all)]
pub fn run(
  raw_args: Vec<OsString>
) -> anyhow::Result<()> {
  let pre =
    cli::preprocess_args(&raw_args)?;
  let cli = cli::GlobalCli::parse_from(
    pre.cleaned_args
  );

  cli::init_tracing(
    cli.verbose,
    cli.quiet
  )?;

  info!(
    verbose = cli.verbose,
    quiet = cli.quiet,
    "starting taskdesk CLI"
  );
  debug!(?pre.rc_overrides, "preprocessed rc overrides");

  let mut cfg = config::Config::load(
    cli.config.as_deref()
  )?;
  cfg.apply_overrides(
    pre.rc_overrides.into_iter().chain(
      cli
        .rc_overrides
        .into_iter()
        .map(|kv| (kv.key, kv.value))
    )
  );
  if let Some(url) = cli.url.as_deref()
  {
    cfg.set("api.url", url);
  }

  let settings = cfg
    .api_settings()
    .context(
      "invalid task API settings"
    )?;
  let api =
    api::HttpTaskApi::new(&settings)
      .with_context(|| {
        format!(
          "failed to prepare client \
           for {}",
          settings.base_url
        )
      })?;

  let renderer =
    render::Renderer::new(&cfg)?;
  let command = cli
    .command
    .unwrap_or(cli::Command::List);

  let mut stdout = io::stdout().lock();
  commands::dispatch(
    api,
    &cfg,
    &renderer,
    command,
    &mut commands::StdinConfirm,
    &mut stdout
  )?;

  info!("done");
  Ok(())
}
