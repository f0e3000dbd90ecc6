//! The fetch loop.

use std::time::Duration;

use tracing::{debug, warn};

use crate::domain::ResultSet;
use crate::hafas::ConnectionSource;
use crate::parser::{ParseError, ResultsParser};
use crate::query::{DepartureTime, FormTemplate, QueryParams};

use super::backoff::StallBackoff;
use super::config::FetchConfig;
use super::dump::ResponseDump;
use super::error::FetchError;

/// Progress callbacks from a fetch run.
pub trait FetchObserver {
    /// A page was read; `total` connections are gathered so far.
    fn page_fetched(&mut self, _total: usize) {}

    /// The upstream returned nothing newer; waiting `delay` before retrying.
    /// `stalls` counts consecutive stalls, starting at one.
    fn stalled(&mut self, _delay: Duration, _stalls: u32) {}
}

/// Observer that ignores progress.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl FetchObserver for NoProgress {}

/// Gathers connections from a source, page by page.
pub struct ConnectionFetcher<S> {
    source: S,
    template: FormTemplate,
    parser: ResultsParser,
    config: FetchConfig,
    dump: Option<ResponseDump>,
}

impl<S: ConnectionSource> ConnectionFetcher<S> {
    pub fn new(source: S, parser: ResultsParser, config: FetchConfig) -> Self {
        Self {
            source,
            template: FormTemplate::default(),
            parser,
            config,
            dump: None,
        }
    }

    /// Use a different search form baseline.
    pub fn with_template(mut self, template: FormTemplate) -> Self {
        self.template = template;
        self
    }

    /// Dump every raw response before it is parsed.
    pub fn with_dump(mut self, dump: ResponseDump) -> Self {
        self.dump = Some(dump);
        self
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Search for `query` until at least `min_connections` rows are gathered.
    ///
    /// Follow-up pages are requested by departure, one minute after the
    /// latest departure gathered so far. A follow-up time equal to the one
    /// just asked for means the upstream returned nothing newer; the loop
    /// then backs off before asking again.
    pub async fn run(
        &mut self,
        query: &QueryParams,
        observer: &mut impl FetchObserver,
    ) -> Result<ResultSet, FetchError> {
        let mut results = ResultSet::new();
        let mut backoff =
            StallBackoff::new(self.config.backoff_unit(), self.config.backoff_ceiling);
        let mut stalls = 0u32;

        self.fetch_page(query, &mut results).await?;
        observer.page_fetched(results.len());

        let mut sent = DepartureTime::parse(&query.time)?;
        while results.len() < self.config.min_connections {
            let next = match results.latest_departure() {
                Some(latest) => leading_time(latest)?.next_minute(),
                None => sent,
            };
            debug!(
                latest = results.latest_departure().unwrap_or("-"),
                next = %next,
                gathered = results.len(),
                "requesting next page"
            );

            if next == sent {
                stalls += 1;
                let delay = backoff.next_delay();
                debug!(
                    time = %next,
                    stalls,
                    delay = ?delay,
                    "no newer connections, backing off"
                );
                observer.stalled(delay, stalls);
                tokio::time::sleep(delay).await;
            } else {
                stalls = 0;
                backoff.reset();
            }

            tokio::time::sleep(self.config.request_spacing()).await;
            self.fetch_page(&query.next_page(next), &mut results)
                .await?;
            observer.page_fetched(results.len());
            sent = next;
        }

        Ok(results)
    }

    /// Request one page and append its rows.
    async fn fetch_page(
        &mut self,
        query: &QueryParams,
        results: &mut ResultSet,
    ) -> Result<(), FetchError> {
        let form = self.template.build(query);
        let body = self.source.search(&form).await?;

        if let Some(dump) = &mut self.dump {
            match dump.write(&body) {
                Ok(path) => debug!(path = %path.display(), "dumped response"),
                Err(e) => warn!(error = %e, dir = %dump.dir().display(), "failed to dump response"),
            }
        }

        self.parser.load(&body);
        if let Some(report) = self.parser.check_for_errors() {
            return Err(FetchError::Validation(report));
        }

        let rows = self.parser.columns().into_rows().map_err(ParseError::from)?;
        debug!(rows = rows.len(), time = %query.time, "parsed page");
        results.extend(rows);
        Ok(())
    }
}

/// The clock time a departure cell starts with.
///
/// Cells may carry extra text after the time, such as a delay.
fn leading_time(cell: &str) -> Result<DepartureTime, FetchError> {
    let token = cell.split_whitespace().next().unwrap_or(cell);
    Ok(DepartureTime::parse(token)?)
}
