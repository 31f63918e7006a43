use std::io::Write;

use reqwest::{header::CONTENT_TYPE, Client, Url};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::{
    config::ProbeConfig,
    error::ProbeError,
    models::{CallRequest, DeployRequest},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Deploy,
    Call,
}

impl Operation {
    pub fn path(self) -> &'static str {
        match self {
            Operation::Deploy => "/api/dapp/deploy",
            Operation::Call => "/api/dapp/call",
        }
    }

    /// Prefix for the status and body lines.
    pub fn label(self) -> &'static str {
        match self {
            Operation::Deploy => "Deploy",
            Operation::Call => "Call",
        }
    }

    /// Name used in the error line.
    pub fn error_label(self) -> &'static str {
        match self {
            Operation::Deploy => "deploy",
            Operation::Call => "call",
        }
    }
}

/// A completed HTTP exchange, whatever its status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeOutcome {
    pub status: u16,
    pub body: String,
}

pub fn render_outcome(op: Operation, result: &Result<ProbeOutcome, ProbeError>) -> Vec<String> {
    match result {
        Ok(outcome) => vec![
            format!("{} API Response Status Code: {}", op.label(), outcome.status),
            format!("{} API Response Body: {}", op.label(), outcome.body),
        ],
        Err(e) => vec![format!("Error calling {} API: {}", op.error_label(), e.describe())],
    }
}

pub struct Prober {
    client: Client,
    base_url: Url,
}

impl Prober {
    pub fn new(config: &ProbeConfig) -> Result<Self, ProbeError> {
        let base_url = config.base_url()?;
        Ok(Self {
            client: Client::new(),
            base_url,
        })
    }

    pub fn endpoint(&self, op: Operation) -> Url {
        let mut url = self.base_url.clone();
        let prefix = self.base_url.path().trim_end_matches('/');
        url.set_path(&format!("{}{}", prefix, op.path()));
        url
    }

    /// One POST round trip. Non-2xx responses are outcomes, not errors.
    pub async fn send<T>(&self, op: Operation, payload: &T) -> Result<ProbeOutcome, ProbeError>
    where
        T: Serialize + ?Sized,
    {
        let url = self.endpoint(op);
        let body = serde_json::to_vec(payload)?;
        debug!(url=%url, bytes=body.len(), "sending request");

        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;

        Ok(ProbeOutcome { status, body })
    }

    /// Sends `payload` and writes the report for it to `out`.
    ///
    /// Transport failures end up in the report; only a failure to write the
    /// report itself is returned.
    pub async fn probe<T, W>(&self, op: Operation, payload: &T, out: &mut W) -> std::io::Result<()>
    where
        T: Serialize + ?Sized,
        W: Write,
    {
        let result = self.send(op, payload).await;
        match &result {
            Ok(outcome) => info!(operation=op.error_label(), status=outcome.status, "probe completed"),
            Err(e) => warn!(operation=op.error_label(), error=%e, "probe failed"),
        }

        for line in render_outcome(op, &result) {
            writeln!(out, "{}", line)?;
        }
        out.flush()
    }

    /// Deploy first, then call. A failed deploy does not stop the call.
    pub async fn run_all<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        let deploy = DeployRequest::sample();
        self.probe(Operation::Deploy, &deploy, out).await?;

        let call = CallRequest::sample();
        self.probe(Operation::Call, &call, out).await
    }
}
