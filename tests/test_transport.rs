//! Tests of the line transport with an in-memory reader and writer.

use async_trait::async_trait;
use crypto_mcp::error::{ToolError, ToolResult};
use crypto_mcp::server::transport::serve;
use crypto_mcp::tools::{catalog_json, ArgKind, ArgSpec, Arguments, ToolHandler, ToolSpec};
use crypto_mcp::ToolServer;
use once_cell::sync::Lazy;
use serde_json::{json, Value};

static ECHO_TOOLS: [ToolSpec; 2] = [
    ToolSpec {
        name: "echo",
        description: "Echo a message",
        args: &[ArgSpec::required("message", ArgKind::String, "Message to echo")],
    },
    ToolSpec {
        name: "explode",
        description: "Panic while handling the call",
        args: &[],
    },
];

static CATALOG: Lazy<Value> = Lazy::new(|| catalog_json(&ECHO_TOOLS));

struct EchoTools;

#[async_trait]
impl ToolHandler for EchoTools {
    fn server_name(&self) -> &'static str {
        "echo"
    }

    fn tools(&self) -> &'static [ToolSpec] {
        &ECHO_TOOLS
    }

    fn catalog(&self) -> &Value {
        &CATALOG
    }

    async fn call(&self, name: &str, arguments: &Arguments) -> ToolResult<String> {
        match name {
            "echo" => arguments.required_str("message"),
            "explode" => panic!("tool exploded"),
            other => Err(ToolError::ToolNotFound(other.to_string())),
        }
    }
}

async fn run(input: &str) -> Vec<Value> {
    run_bytes(input.as_bytes()).await
}

async fn run_bytes(input: &[u8]) -> Vec<Value> {
    let server = ToolServer::new(EchoTools);
    let mut output = Vec::new();

    serve(&server, input, &mut output).await.unwrap();

    String::from_utf8(output)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

fn echo(message: &str) -> String {
    json!({"method": "tools/call", "params": {"name": "echo", "arguments": {"message": message}}})
        .to_string()
}

#[tokio::test]
async fn test_one_response_line_per_request_in_order() {
    let input = format!("{}\n{}\n{}\n", echo("first"), echo("second"), echo("third"));
    let responses = run(&input).await;

    let texts: Vec<&str> = responses
        .iter()
        .map(|r| r["result"]["content"][0]["text"].as_str().unwrap())
        .collect();
    assert_eq!(texts, vec!["first", "second", "third"]);
}

#[tokio::test]
async fn test_malformed_lines_produce_no_response() {
    let input = format!(
        "{{not json\n\n   \n[1, 2, 3]\n\"tools/list\"\n{}\n",
        echo("after garbage")
    );
    let responses = run(&input).await;

    assert_eq!(responses.len(), 1);
    assert_eq!(responses[0]["result"]["content"][0]["text"], "after garbage");
}

#[tokio::test]
async fn test_invalid_utf8_line_is_skipped() {
    let mut input = vec![0xff, 0xfe, b'{', b'\n'];
    input.extend_from_slice(echo("after bad bytes").as_bytes());
    input.push(b'\n');

    let responses = run_bytes(&input).await;

    assert_eq!(responses.len(), 1);
    assert_eq!(responses[0]["result"]["content"][0]["text"], "after bad bytes");
}

#[tokio::test]
async fn test_errors_are_responses() {
    let input = concat!(
        r#"{"method": "initialize"}"#,
        "\n",
        r#"{"method": "tools/call", "params": {"name": "missing"}}"#,
        "\n",
        r#"{"method": "tools/call", "params": {"name": "echo", "arguments": {"message": 42}}}"#,
        "\n",
        r#"{"method": "tools/call", "params": "echo"}"#,
        "\n"
    );
    let responses = run(input).await;

    assert_eq!(
        responses,
        vec![
            json!({"error": {"code": -32601, "message": "Method initialize not found"}}),
            json!({"error": {"code": -32601, "message": "Tool missing not found"}}),
            json!({"error": {"code": -32603, "message": "Invalid value for argument message: expected a string, got number 42"}}),
            json!({"error": {"code": -32603, "message": "Invalid value for argument params: expected an object"}}),
        ]
    );
}

#[tokio::test]
async fn test_panic_becomes_internal_error() {
    let explode = json!({"method": "tools/call", "params": {"name": "explode"}}).to_string();
    let input = format!("{}\n{}\n", explode, echo("still alive"));
    let responses = run(&input).await;

    assert_eq!(responses.len(), 2);
    assert_eq!(
        responses[0],
        json!({"error": {"code": -32603, "message": "tool exploded"}})
    );
    assert_eq!(responses[1]["result"]["content"][0]["text"], "still alive");
}

#[tokio::test]
async fn test_last_line_without_newline_is_served() {
    let responses = run(r#"{"method": "tools/list"}"#).await;

    assert_eq!(responses.len(), 1);
    assert_eq!(responses[0]["result"]["tools"][0]["name"], "echo");
    assert_eq!(
        responses[0]["result"]["tools"][0]["inputSchema"]["required"],
        json!(["message"])
    );
}

#[tokio::test]
async fn test_empty_input_ends_cleanly() {
    assert!(run("").await.is_empty());
}
