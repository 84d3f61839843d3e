use learnagent_api::router::ApiDoc;
use utoipa::OpenApi;

/// Writes the OpenAPI document as pretty JSON.
fn write_spec(path: &str) -> Result<(), Box<dyn std::error::Error>> {
    let spec_json = ApiDoc::openapi().to_pretty_json()?;
    std::fs::write(path, spec_json)?;
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "openapi.json".to_string());
    write_spec(&path)?;
    println!("Wrote OpenAPI spec to {path}");
    Ok(())
}
