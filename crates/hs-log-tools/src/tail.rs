//! The tail pipeline: resolve a source, read its tail, filter into a window.

use crate::error::LogResult;
use crate::filter::filter_window;
use crate::request::LogRequest;
use crate::source::SourceResolver;
use crate::types::TailReport;

/// Run a validated request to completion.
///
/// The source is asked for the last `limit` raw lines and the filter then
/// narrows that set. It does not keep scanning further back to make up for
/// lines the filter dropped, so a filtered result can hold fewer than `limit`
/// lines even when older matches exist.
pub async fn tail(request: &LogRequest, resolver: &dyn SourceResolver) -> LogResult<TailReport> {
    let source = resolver.resolve(&request.path).await?;
    let raw = source.tail_lines(request.limit).await?;
    let raw_count = raw.len();

    let filter = request.filter();
    let lines = filter_window(raw, filter, request.limit);
    tracing::debug!(
        path = %request.path,
        source = ?source.kind(),
        raw_count,
        kept = lines.len(),
        %filter,
        "tail complete"
    );

    Ok(TailReport {
        file: request.path.clone(),
        source: source.kind(),
        line_count: lines.len(),
        lines,
        filter: request.substring_str().to_string(),
        regex: request.pattern_str().to_string(),
        applied_filter: filter.to_string(),
    })
}
