//! Stdin/stdout JSON bridge for the nutrition tool.
//!
//! Reads newline-delimited JSON requests (`{"query": "..."}`) and writes one
//! [`ToolOutcome`] per request as a JSON line. Requests are handled strictly
//! one at a time, in arrival order.
//!
//! Stdout is exclusively reserved for the JSON protocol; all diagnostic
//! output (tracing, logs) must be routed to stderr.

use fdc_search::FoodSearchBackend;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader, BufWriter};

use crate::error::Result;
use crate::tool::{NutritionTool, ToolErrorKind, ToolOutcome};

/// Run the bridge on the process's stdin and stdout until stdin closes.
///
/// # Errors
///
/// Returns an error if stdin cannot be read or stdout cannot be written.
pub async fn run_stdio_bridge<B: FoodSearchBackend>(tool: &NutritionTool<B>) -> Result<()> {
    let reader = BufReader::new(tokio::io::stdin());
    let writer = BufWriter::new(tokio::io::stdout());
    let handled = serve_lines(tool, reader, writer).await?;
    tracing::info!(requests = handled, "stdin closed (EOF); shutting down stdio bridge");
    Ok(())
}

/// Serve requests from `reader` until EOF, writing outcomes to `writer`.
///
/// Blank lines are skipped. A line that is not UTF-8 or not valid JSON
/// gets an `Invalid input` outcome and serving continues. Returns the
/// number of requests answered.
///
/// # Errors
///
/// Returns an error on read or write failure.
pub async fn serve_lines<B, R, W>(tool: &NutritionTool<B>, mut reader: R, mut writer: W) -> Result<usize>
where
    B: FoodSearchBackend,
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut buf = Vec::new();
    let mut handled = 0;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf).await? == 0 {
            break;
        }

        let outcome = match std::str::from_utf8(&buf) {
            Ok(line) if line.trim().is_empty() => continue,
            Ok(line) => match serde_json::from_str::<serde_json::Value>(line.trim()) {
                Ok(args) => tool.execute(args).await,
                Err(e) => {
                    tracing::warn!(error = %e, "malformed request line");
                    ToolOutcome::error(
                        ToolErrorKind::InvalidInput,
                        format!("Malformed request: {e}."),
                        None,
                    )
                }
            },
            Err(e) => {
                tracing::warn!(error = %e, "request line is not UTF-8");
                ToolOutcome::error(
                    ToolErrorKind::InvalidInput,
                    format!("Malformed request: {e}."),
                    None,
                )
            }
        };

        write_line(&mut writer, &serde_json::to_string(&outcome)?).await?;
        handled += 1;
    }

    Ok(handled)
}

async fn write_line<W: AsyncWrite + Unpin>(writer: &mut W, json: &str) -> Result<()> {
    writer.write_all(json.as_bytes()).await?;
    writer.write_all(b"\n").await?;
    writer.flush().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use fdc_search::{DataType, FoodRecord, SearchError, SearchResponse};

    struct EchoBackend;

    impl FoodSearchBackend for EchoBackend {
        async fn search(
            &self,
            query: &str,
            _data_type: Option<&str>,
            _credential: Option<&str>,
        ) -> std::result::Result<SearchResponse, SearchError> {
            let foods = if query == "banana" {
                vec![]
            } else {
                vec![FoodRecord {
                    fdc_id: Some(1),
                    description: query.to_string(),
                    data_type: Some(DataType::Foundation),
                    food_category: None,
                    common_names: None,
                    additional_descriptions: None,
                    food_nutrients: vec![],
                }]
            };
            Ok(SearchResponse {
                foods,
                total_hits: None,
            })
        }
    }

    async fn run(input: &str) -> Vec<serde_json::Value> {
        run_bytes(input.as_bytes()).await
    }

    async fn run_bytes(input: &[u8]) -> Vec<serde_json::Value> {
        let tool = NutritionTool::new(EchoBackend);
        let mut output = Vec::new();
        serve_lines(&tool, input, &mut output)
            .await
            .expect("serve");
        String::from_utf8(output)
            .expect("utf8")
            .lines()
            .map(|line| serde_json::from_str(line).expect("json line"))
            .collect()
    }

    #[tokio::test]
    async fn one_outcome_per_request_in_order() {
        let out = run("{\"query\":\"apple\"}\n\n{\"query\":\"banana\"}\n{\"query\":\"kale\"}\n").await;
        assert_eq!(out.len(), 3);
        assert_eq!(out[0]["description"], "apple");
        assert_eq!(out[1]["error"], "Ingredient not found");
        assert_eq!(out[2]["description"], "kale");
    }

    #[tokio::test]
    async fn malformed_line_is_invalid_input() {
        let out = run("not json\n{\"query\":\"apple\"}\n").await;
        assert_eq!(out.len(), 2);
        assert_eq!(out[0]["error"], "Invalid input");
        assert_eq!(out[1]["fdcId"], 1);
    }

    #[tokio::test]
    async fn non_utf8_line_is_invalid_input_and_serving_continues() {
        let out = run_bytes(b"{\"query\":\"\xff\xfe\"}\n{\"query\":\"banana\"}\n").await;
        assert_eq!(out.len(), 2);
        assert_eq!(out[0]["error"], "Invalid input");
        assert_eq!(out[1]["error"], "Ingredient not found");
        assert_eq!(out[1]["query"], "banana");
    }

    #[tokio::test]
    async fn last_line_without_newline_is_answered() {
        let out = run("{\"query\":\"apple\"}").await;
        assert_eq!(out.len(), 1);
        assert_eq!(out[0]["description"], "apple");
    }

    #[tokio::test]
    async fn empty_input_answers_nothing() {
        assert!(run("").await.is_empty());
    }
}
