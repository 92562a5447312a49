//! Subcommand implementations.

use anyhow::{anyhow, Context};
use asana_core::endpoint::argument_name;
use asana_core::{
    tool_definitions, AsanaClient, CallArguments, EndpointDescriptor, EndpointTable, Invoker,
};
use serde_json::Value;
use tracing::info;

use crate::config::Settings;
use crate::transport::{EnvTokenProvider, UreqTransport};

/// Raw `call` inputs as they arrive from the command line.
#[derive(Debug, Default)]
pub struct CallOptions {
    pub args: Vec<(String, String)>,
    pub data: Option<String>,
    pub args_json: Option<String>,
}

pub fn endpoints(json: bool) -> anyhow::Result<()> {
    let table = EndpointTable::asana();
    if json {
        println!("{}", serde_json::to_string_pretty(&tool_definitions(table))?);
        return Ok(());
    }
    for descriptor in table.iter() {
        println!(
            "{:<7}{:<60}{}",
            descriptor.method.as_str(),
            descriptor.path_template,
            descriptor.name
        );
    }
    Ok(())
}

pub fn describe(name: &str) -> anyhow::Result<()> {
    let descriptor = lookup(name)?;
    print!("{}", render_description(descriptor));
    Ok(())
}

pub fn render_description(descriptor: &EndpointDescriptor) -> String {
    let mut out = format!(
        "{}\n  {}\n  {} {}\n",
        descriptor.name, descriptor.summary, descriptor.method, descriptor.path_template
    );
    let path_params = descriptor.path_params();
    if !path_params.is_empty() {
        out.push_str("path parameters (required):\n");
        for name in path_params {
            out.push_str(&format!("  {name}\n"));
        }
    }
    if !descriptor.query_params.is_empty() {
        out.push_str("query parameters:\n");
        for wire in descriptor.query_params {
            let arg = argument_name(wire);
            if arg == *wire {
                out.push_str(&format!("  {wire}\n"));
            } else {
                out.push_str(&format!("  {arg} (sent as {wire})\n"));
            }
        }
    }
    if descriptor.has_body {
        out.push_str("body: --data '<json>' (sent as {\"data\": ...})\n");
    }
    out
}

pub fn call(settings: &Settings, name: &str, options: CallOptions) -> anyhow::Result<()> {
    let descriptor = lookup(name)?;
    let args = build_arguments(descriptor, options)?;

    let transport = UreqTransport::new(EnvTokenProvider::new(settings.token_env.clone()), settings.timeout());
    let invoker = Invoker::new(AsanaClient::new(&settings.base_url), transport);

    info!(endpoint = descriptor.name, "calling");
    let response = invoker.invoke(descriptor, &args)?;
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}

/// Merge `--args` JSON, then `-a key=value` pairs, then `--data`.
pub fn build_arguments(descriptor: &EndpointDescriptor, options: CallOptions) -> anyhow::Result<CallArguments> {
    let mut args = match options.args_json.as_deref() {
        Some(raw) => {
            let value: Value = serde_json::from_str(raw).context("--args is not valid JSON")?;
            CallArguments::from_json(descriptor.name, &value)?
        }
        None => CallArguments::new(),
    };
    for (name, value) in options.args {
        args.insert(name, value);
    }
    if let Some(raw) = options.data.as_deref() {
        let payload: Value = serde_json::from_str(raw).context("--data is not valid JSON")?;
        args.set_body(Some(payload));
    }
    Ok(args)
}

fn lookup(name: &str) -> anyhow::Result<&'static EndpointDescriptor> {
    EndpointTable::asana()
        .get(name)
        .ok_or_else(|| anyhow!("unknown endpoint `{name}`; run `asana-cli endpoints` to list them"))
}
