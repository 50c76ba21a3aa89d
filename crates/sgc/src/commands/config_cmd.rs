//! `sgc config` -- show the effective configuration or write it to disk.

use anyhow::{Context, Result, bail};
use sgc_config::save_config;

use crate::cli::ConfigArgs;
use crate::context::RuntimeContext;
use crate::output::{output_json, output_success, output_text};

/// Execute the `sgc config` command.
pub fn run(ctx: &RuntimeContext, args: &ConfigArgs) -> Result<()> {
    if !args.init {
        if ctx.json {
            output_json(&ctx.config);
        } else {
            let yaml = serde_yaml::to_string(&ctx.config).context("failed to render config")?;
            output_text(yaml.trim_end());
        }
        return Ok(());
    }

    let target = ctx.config_file_target();
    if target.exists() && !args.force {
        bail!(
            "{} already exists\nHint: pass --force to overwrite it",
            target.display()
        );
    }
    save_config(&target, &ctx.config)
        .with_context(|| format!("failed to write {}", target.display()))?;
    output_success(ctx, &format!("Wrote {}", target.display()));
    Ok(())
}
