//! Relays a chunk stream to the client as a server-push event stream.
//!
//! Framing: `data: {"text":<chunk>}` followed by a blank line, one frame per
//! non-empty chunk, in arrival order. No event IDs, no retry directive. A
//! failing upstream closes the stream with no terminal sentinel; the client
//! treats connection close as end-of-stream.

use std::convert::Infallible;
use std::fmt::Display;

use axum::{
    body::Body,
    http::header,
    response::{IntoResponse, Response},
};
use futures::{future, Stream, StreamExt};

/// One frame per non-empty chunk; empty chunks produce no frame.
pub fn event_frame(text: &str) -> Option<String> {
    if text.is_empty() {
        return None;
    }
    let payload = serde_json::json!({ "text": text });
    Some(format!("data: {payload}\n\n"))
}

pub fn sse_response<S, E>(chunks: S) -> Response
where
    S: Stream<Item = Result<String, E>> + Send + 'static,
    E: Display + Send + 'static,
{
    let frames = chunks
        .take_while(|chunk| {
            let open = match chunk {
                Ok(_) => true,
                Err(err) => {
                    tracing::warn!(error = %err, "upstream chunk error, closing stream");
                    false
                }
            };
            future::ready(open)
        })
        .filter_map(|chunk| {
            future::ready(match chunk {
                Ok(text) => event_frame(&text).map(Ok::<_, Infallible>),
                Err(_) => None,
            })
        });

    (
        [
            (header::CONTENT_TYPE, "text/event-stream"),
            (header::CACHE_CONTROL, "no-cache"),
        ],
        Body::from_stream(frames),
    )
        .into_response()
}
