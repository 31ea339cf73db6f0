use utoipa::OpenApi;
use web_api::ApiDoc;

fn main() -> Result<(), serde_json::Error> {
    let doc = ApiDoc::openapi().to_pretty_json()?;
    print!("{doc}");
    Ok(())
}
