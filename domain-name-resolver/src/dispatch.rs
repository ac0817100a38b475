use crate::error::ResolveError;
use crate::resolve::Resolver;
use dns::DecodeResponse;
use domain_name_query_types::Answer;
use std::sync::Arc;
use tokio::sync::mpsc;

/// The result of resolving one domain of a batch.
#[derive(Debug)]
pub struct Outcome {
    pub domain: String,
    pub result: Result<Answer, ResolveError>,
}

/// Receives each outcome of a batch once, in completion order.
pub trait OutcomeSink {
    fn report(&mut self, outcome: Outcome);
}

impl OutcomeSink for Vec<Outcome> {
    fn report(&mut self, outcome: Outcome) {
        self.push(outcome);
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct BatchSummary {
    pub succeeded: usize,
    pub failed: usize,
}

impl BatchSummary {
    pub fn total(&self) -> usize {
        self.succeeded + self.failed
    }

    fn count(&mut self, outcome: &Outcome) {
        if outcome.result.is_ok() {
            self.succeeded += 1;
        } else {
            self.failed += 1;
        }
    }
}

/// Resolves every domain concurrently, one task each, and returns once all of
/// them have reported.
///
/// Duplicates are resolved independently. A failing domain never affects the
/// others; each domain yields exactly one [`Outcome`], including when its task
/// panics.
pub async fn dispatch<D, S>(
    resolver: Arc<Resolver<D>>,
    domains: Vec<String>,
    sink: &mut S,
) -> BatchSummary
where
    D: DecodeResponse + Send + Sync + 'static,
    S: OutcomeSink,
{
    tracing::debug!(
        "dispatching {} queries to {}",
        domains.len(),
        resolver.server_addr()
    );

    let (sender, mut receiver) = mpsc::channel::<Outcome>(domains.len().max(1));

    let tasks = domains
        .into_iter()
        .map(|domain| {
            let resolver = Arc::clone(&resolver);
            let sender = sender.clone();
            let name = domain.clone();

            let handle = tokio::spawn(async move {
                let result = resolver.resolve(&domain).await;
                if let Err(e) = &result {
                    tracing::warn!("failed to resolve {}: {}", domain, e);
                }

                // 每个任务只在这里通知一次
                let _ = sender.send(Outcome { domain, result }).await;
            });

            (name, handle)
        })
        .collect::<Vec<_>>();

    // 所有 sender 都被丢弃后 recv 返回 None
    drop(sender);

    let mut summary = BatchSummary::default();
    while let Some(outcome) = receiver.recv().await {
        summary.count(&outcome);
        sink.report(outcome);
    }

    // 没有发送结果就结束的任务只可能是 panic 了
    for (domain, handle) in tasks {
        if let Err(e) = handle.await {
            tracing::warn!("resolution task for {} failed: {}", domain, e);
            let outcome = Outcome {
                domain,
                result: Err(ResolveError::TaskFailed(e.to_string())),
            };
            summary.count(&outcome);
            sink.report(outcome);
        }
    }

    summary
}
