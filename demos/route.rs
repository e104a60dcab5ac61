use mathpipe::{ExtractedQuery, MathService};

fn main() {
    let service = MathService::default();
    let replies = [
        r#"{"type": "equation", "expression": "2x + 6 = 0", "original_query": "when is 2x plus 6 zero"}"#,
        "```json\n{\"type\": \"optimization\", \"expression\": \"-x^2 + 4x\"}\n```",
    ];

    for reply in replies {
        let response = ExtractedQuery::from_model_reply(reply)
            .map_err(Into::into)
            .and_then(|query| service.handle_query(&query));
        match response {
            Ok(result) => println!("{}", serde_json::to_string_pretty(&result).unwrap_or_default()),
            Err(failure) => eprintln!("{} ({}): {}", failure.kind, failure.status_code, failure.detail),
        }
    }
}
