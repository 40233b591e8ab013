use anyhow::{Context, Result};
use sobject_counts_client::OrgClient;
use sobject_counts_core::RequestedObjectSet;

use crate::render::{render_json, render_table};
use crate::{get_access_token, get_api_version, get_http_timeout, get_instance_url, OrgArgs};

pub(crate) async fn run(sobjecttype: Vec<String>, json: bool, org: OrgArgs) -> Result<()> {
    let requested: RequestedObjectSet = sobjecttype.iter().collect();
    if requested.is_empty() {
        anyhow::bail!("at least one sObject type must be given with --sobjecttype");
    }

    let client = OrgClient::new(
        get_instance_url(org.instance_url)?,
        get_access_token(org.access_token)?,
        get_http_timeout(),
    )?
    .with_api_version(&get_api_version(org.api_version));
    tracing::info!(base_url = %client.base_url(), requested = requested.len(), "fetching record counts");

    let counts = client
        .record_counts(&requested)
        .await
        .with_context(|| format!("failed to fetch record counts from {}", client.instance_url()))?;

    if json {
        println!("{}", render_json(&counts)?);
    } else if !counts.is_empty() {
        print!("{}", render_table(&counts));
    }
    Ok(())
}
